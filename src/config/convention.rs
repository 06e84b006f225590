use miette::Result;

use super::model::*;

/// Default origin of a locally served audit service.
pub const LOCAL_SERVICE_URL: &str = "http://localhost:8000/api";

pub const KNOWN_PROFILES: &[&str] = &["local"];

impl KnownService {
    pub fn as_service_name(&self) -> &'static str {
        match self {
            KnownService::Local => "local",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            KnownService::Local => LOCAL_SERVICE_URL,
        }
    }
}

impl ProfileConfig {
    /// Built-in profile pointing at the local service origin.
    pub fn local() -> Self {
        Self {
            name: "local".to_string(),
            service: ServiceOption::Known(KnownService::Local),
        }
    }

    pub fn resolved_service(&self) -> ResolvedService {
        match &self.service {
            ServiceOption::Known(known) => ResolvedService {
                url: known.url().to_string(),
                headers: Default::default(),
            },
            ServiceOption::Custom(config) => ResolvedService {
                url: config.url.clone(),
                headers: config.headers.clone(),
            },
        }
    }
}

impl RootConfig {
    /// Explicit profiles from mend.toml take precedence over built-ins of
    /// the same name.
    pub fn resolve_profile(&self, name: &str) -> Result<ProfileConfig> {
        if let Some(profile) = self.profiles.get(name) {
            return Ok(profile.clone());
        }

        if name == "local" {
            return Ok(ProfileConfig::local());
        }

        let mut known: Vec<String> = KNOWN_PROFILES.iter().map(|x| x.to_string()).collect();
        known.extend(self.profiles.keys().cloned());
        known.sort();
        known.dedup();

        Err(miette::miette!(
            "Unknown profile '{}'. Expected one of: {}",
            name,
            known.join(", ")
        ))
    }
}

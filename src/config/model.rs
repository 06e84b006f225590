use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::PathBuf};

use crate::config::serde::{Named, NamedMap};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProjectConfig {
    pub name: String,
    pub description: Option<String>,

    /// Source file submitted by `mend audit` when no path is given.
    pub source: Option<PathBuf>,
}

/// Built-in service origins that can be referenced by name.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum KnownService {
    Local,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct ServiceConfig {
    /// Base origin of the audit service, e.g. "http://localhost:8000/api".
    pub url: String,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

/// Either a known service name ("local") or a full endpoint table.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ServiceOption {
    Known(KnownService),
    Custom(ServiceConfig),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProfileConfig {
    #[serde(skip)]
    pub name: String,

    pub service: ServiceOption,
}

impl Named for ProfileConfig {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// The endpoint a profile resolves to, ready for the session client.
#[derive(Debug, Clone)]
pub struct ResolvedService {
    pub url: String,
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RootConfig {
    pub project: ProjectConfig,

    #[serde(default, skip_serializing_if = "NamedMap::is_empty")]
    pub profiles: NamedMap<ProfileConfig>,
}

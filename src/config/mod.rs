use miette::IntoDiagnostic as _;

pub mod convention;
pub mod model;
pub mod serde;

use std::path::{Path, PathBuf};

pub use convention::*;
pub use model::*;

pub const CONFIG_FILE_NAME: &str = "mend.toml";

impl RootConfig {
    pub fn load(path: &PathBuf) -> miette::Result<Self> {
        let contents = std::fs::read_to_string(path).into_diagnostic()?;
        let config: Self = toml::from_str(&contents).into_diagnostic()?;

        Ok(config)
    }

    pub fn save(&self, path: &PathBuf) -> miette::Result<()> {
        let contents = toml::to_string_pretty(self).into_diagnostic()?;
        std::fs::write(path, contents).into_diagnostic()?;
        Ok(())
    }

    /// Loads mend.toml from the current directory, falling back to a default
    /// configuration when the file does not exist. Built-in profiles make
    /// the client usable without any project setup.
    pub fn load_or_default() -> miette::Result<Self> {
        let current_dir = std::env::current_dir().into_diagnostic()?;
        let config_path = current_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            return Self::load(&config_path);
        }

        Ok(Self::default_for(&current_dir))
    }

    pub fn default_for(dir: &Path) -> Self {
        Self {
            project: ProjectConfig {
                name: infer_project_name(dir),
                description: None,
                source: None,
            },
            profiles: self::serde::NamedMap::new(),
        }
    }
}

const DEFAULT_PROJECT_NAME: &str = "my-project";

pub(crate) fn infer_project_name(dir: &Path) -> String {
    dir.file_name()
        .and_then(|f| f.to_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string())
}

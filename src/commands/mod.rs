use miette::{Context, IntoDiagnostic, Result};
use std::path::Path;

pub mod audit;
pub mod init;
pub mod ping;
pub mod session;
pub mod show;

pub(crate) fn write_text_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .into_diagnostic()
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .into_diagnostic()
        .with_context(|| format!("Failed to write file {}", path.display()))
}

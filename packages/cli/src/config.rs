use folio_editor::EditorConfig;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "folio.config.json";

/// Load the editor configuration from `cwd`, falling back to defaults when
/// no config file exists.
pub fn load(cwd: &Path) -> anyhow::Result<EditorConfig> {
    let config_path = config_path(cwd);

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        let config = EditorConfig::from_json(&content).map_err(|err| {
            anyhow::anyhow!("Invalid {}: {}", config_path.display(), err)
        })?;
        tracing::debug!(path = %config_path.display(), "Loaded configuration");
        Ok(config)
    } else {
        Ok(EditorConfig::default())
    }
}

pub fn config_path(cwd: &Path) -> PathBuf {
    cwd.join(DEFAULT_CONFIG_NAME)
}

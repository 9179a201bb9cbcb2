//! `.lineage-map.toml` configuration.

mod core;
mod loader;

pub use self::core::{ExportConfig, LineageConfig, OutputConfig, StoreConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};

use std::path::PathBuf;

const STORE_FILE_NAME: &str = "answers.json";

/// Fallback when the platform has no data directory.
const LOCAL_STORE_FILE_NAME: &str = ".lineage-map-answers.json";

impl LineageConfig {
    /// Store location: explicit config path, else the platform data dir.
    pub fn store_path(&self) -> PathBuf {
        self.store
            .as_ref()
            .and_then(|s| s.path.clone())
            .unwrap_or_else(default_store_path)
    }

    /// Validated export delimiter and substitute.
    pub fn export_chars(&self) -> (char, char) {
        self.export
            .as_ref()
            .and_then(|e| e.validate().ok())
            .unwrap_or((',', ';'))
    }
}

pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("lineage-map").join(STORE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(LOCAL_STORE_FILE_NAME))
}

/// Contents written by `lineage-map init`.
pub const DEFAULT_CONFIG: &str = r#"# lineage-map configuration

[store]
# path = "answers.json"

[export]
delimiter = ","
substitute = ";"

[output]
color = "auto"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.export_chars(), (',', ';'));
        assert!(config.store.unwrap().path.is_none());
    }

    #[test]
    fn explicit_store_path_wins() {
        let config = LineageConfig {
            store: Some(StoreConfig {
                path: Some(PathBuf::from("/tmp/x.json")),
            }),
            ..Default::default()
        };
        assert_eq!(config.store_path(), PathBuf::from("/tmp/x.json"));
    }
}

use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::{ExportConfig, LineageConfig};
use crate::errors::Result;

pub const CONFIG_FILE_NAME: &str = ".lineage-map.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
///
/// Invalid section values fall back to defaults with a warning; only TOML that
/// does not parse into [`LineageConfig`] is an error.
pub fn parse_and_validate_config(contents: &str) -> Result<LineageConfig> {
    let mut config = toml::from_str::<LineageConfig>(contents)?;

    if let Some(ref export) = config.export {
        if let Err(e) = export.validate() {
            log::warn!("Invalid export settings: {}. Using defaults.", e);
            config.export = Some(ExportConfig::default());
        }
    }

    if let Some(ref output) = config.output {
        if output.color_mode().is_none() {
            log::warn!(
                "Invalid output color {:?} (expected auto, always or never). Using auto.",
                output.color
            );
            config.output = None;
        }
    }

    Ok(config)
}

/// Makes a relative store path relative to the directory holding the config.
fn anchor_store_path(mut config: LineageConfig, config_path: &Path) -> LineageConfig {
    if let (Some(store), Some(dir)) = (config.store.as_mut(), config_path.parent()) {
        if let Some(path) = store.path.as_mut() {
            if path.is_relative() {
                *path = dir.join(&*path);
            }
        }
    }
    config
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<LineageConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(anchor_store_path(config, config_path))
        }
        Err(e) => {
            log::warn!("{} in {}. Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the config file.
pub fn load_config_from(start: PathBuf) -> LineageConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            LineageConfig::default()
        })
}

pub fn load_config() -> LineageConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            LineageConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [store]
            path = "/var/lib/lineage/answers.json"

            [export]
            delimiter = "\t"
            substitute = " "

            [output]
            color = "never"
        "#})
        .unwrap();

        assert_eq!(
            config.store.unwrap().path,
            Some(PathBuf::from("/var/lib/lineage/answers.json"))
        );
        assert_eq!(config.export.unwrap().validate(), Ok(('\t', ' ')));
        assert_eq!(
            config.output.unwrap().color_mode(),
            Some(crate::formatting::ColorMode::Never)
        );
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(parse_and_validate_config("").unwrap(), LineageConfig::default());
    }

    #[test]
    fn invalid_export_falls_back_to_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [export]
            delimiter = ";"
            substitute = ";"
        "#})
        .unwrap();
        assert_eq!(config.export, Some(ExportConfig::default()));

        let config = parse_and_validate_config("[export]\ndelimiter = \"::\"\n").unwrap();
        assert_eq!(config.export, Some(ExportConfig::default()));
    }

    #[test]
    fn invalid_color_is_dropped() {
        let config = parse_and_validate_config("[output]\ncolor = \"sometimes\"\n").unwrap();
        assert_eq!(config.output, None);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = parse_and_validate_config("[store\npath = 3").unwrap_err();
        assert!(matches!(err, Error::Config(_)), "unexpected {err:?}");
        assert!(err.to_string().starts_with("Invalid configuration: "));
    }

    #[test]
    fn finds_config_in_ancestor_and_anchors_relative_store() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[store]\npath = \"answers.json\"\n",
        )
        .unwrap();

        let config = load_config_from(nested);
        assert_eq!(
            config.store.and_then(|s| s.path),
            Some(root.path().join("answers.json"))
        );
    }

    #[test]
    fn ancestors_stop_at_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }
}

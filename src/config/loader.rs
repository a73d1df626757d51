use std::path::{Path, PathBuf};
use std::fs;
use log::{debug, warn};
use serde_json::Value;

use crate::config::types::TocConfig;
use crate::config::validation;
use crate::utils::error::{BoxResult, TocError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 4] = ["_toc.yml", "_toc.yaml", "_toc.toml", "_toc.json"];

/// Load TOC configuration from config files.
///
/// Files are applied in order and each one only overrides the keys it
/// actually sets, so a later file can also put a value back to its default.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>
) -> BoxResult<TocConfig> {
    // Start with default configuration
    let mut merged = serde_json::to_value(TocConfig::default())
        .map_err(|e| TocError::Config(format!("Failed to prepare default configuration: {}", e)))?;

    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_files(&source_dir),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut merged, &path)?;
        }
    }

    let config: TocConfig = serde_json::from_value(merged)
        .map_err(|e| TocError::Config(format!("Invalid configuration: {}", e)))?;

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Merge a configuration file into the configuration built so far
fn merge_config_file(merged: &mut Value, config_path: &Path) -> BoxResult<()> {
    if !config_path.exists() {
        return Err(TocError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| TocError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    // Parse based on file extension
    let file_values = match config_path.extension() {
        Some(ext) => match ext.to_string_lossy().to_lowercase().as_str() {
            "yml" | "yaml" => parse_yaml_config(&content, config_path)?,
            "toml" => parse_toml_config(&content, config_path)?,
            "json" => parse_json_config(&content, config_path)?,
            _ => {
                return Err(TocError::Config(format!(
                    "Unsupported configuration file format: {}", ext.to_string_lossy()
                )).into());
            }
        },
        // Assume YAML if no extension
        None => parse_yaml_config(&content, config_path)?,
    };

    overlay(merged, file_values, config_path)
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> BoxResult<Value> {
    serde_yaml::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> BoxResult<Value> {
    toml::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> BoxResult<Value> {
    serde_json::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )).into())
}

/// Copy every top-level key set by a file over the merged configuration
fn overlay(merged: &mut Value, file_values: Value, path: &Path) -> BoxResult<()> {
    let entries = match file_values {
        // An empty file sets nothing
        Value::Null => return Ok(()),
        Value::Object(entries) => entries,
        _ => {
            return Err(TocError::Config(format!(
                "Configuration must be a mapping of keys to values: {}", path.display()
            )).into());
        }
    };

    let Value::Object(target) = merged else {
        return Err(TocError::Config("Merged configuration is not a mapping".to_string()).into());
    };

    for (key, value) in entries {
        if !target.contains_key(&key) {
            warn!("Ignoring unknown configuration key '{}' in {}", key, path.display());
            continue;
        }
        debug!("Config key {} = {} ({})", key, value, path.display());
        target.insert(key, value);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListStyle;

    #[test]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config, TocConfig::default());
    }

    #[test]
    fn test_discovers_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_toc.yml"),
            "container_id: sidebar-toc\nlist_style: ordered\nmin_level: 1\n",
        ).unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.container_id, "sidebar-toc");
        assert_eq!(config.list_style, Some(ListStyle::Ordered));
        assert_eq!(config.min_level, 1);
        assert_eq!(config.max_level, 6);
    }

    #[test]
    fn test_later_files_override_earlier_ones() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = dir.path().join("base.yml");
        let toml_path = dir.path().join("override.toml");
        fs::write(&yaml, "page_url: /guide/\nmax_level: 4\n").unwrap();
        fs::write(&toml_path, "max_level = 3\nitem_class = \"toc-item\"\n").unwrap();

        let config = load_config(dir.path(), Some(vec![yaml, toml_path])).unwrap();
        assert_eq!(config.page_url, "/guide/");
        assert_eq!(config.max_level, 3);
        assert_eq!(config.item_class, "toc-item");
    }

    #[test]
    fn test_later_file_restores_default() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.yml");
        let second = dir.path().join("b.yml");
        fs::write(&first, "max_level: 3\nmin_level: 1\nitem_class: toc-item\nlist_style: ordered\n").unwrap();
        fs::write(&second, "max_level: 6\nmin_level: 2\nitem_class: \"\"\nlist_style: null\n").unwrap();

        let config = load_config(dir.path(), Some(vec![first, second])).unwrap();
        assert_eq!(config.max_level, 6);
        assert_eq!(config.min_level, 2);
        assert_eq!(config.item_class, "");
        assert_eq!(config.list_style, None);
    }

    #[test]
    fn test_keys_absent_from_later_file_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.toml");
        fs::write(&first, r#"{"container_id": "side", "max_level": 4}"#).unwrap();
        fs::write(&second, "page_url = \"/p/\"\n").unwrap();

        let config = load_config(dir.path(), Some(vec![first, second])).unwrap();
        assert_eq!(config.container_id, "side");
        assert_eq!(config.max_level, 4);
        assert_eq!(config.page_url, "/p/");
    }

    #[test]
    fn test_empty_yaml_file_sets_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_toc.yml"), "").unwrap();
        assert_eq!(load_config(dir.path(), None).unwrap(), TocConfig::default());
    }

    #[test]
    fn test_non_mapping_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_toc.yml"), "- just\n- a list\n").unwrap();
        assert!(load_config(dir.path(), None).is_err());
    }

    #[test]
    fn test_json_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toc.json");
        fs::write(&path, r#"{"content_id": "main", "list_style": "unordered"}"#).unwrap();

        let config = load_config(dir.path(), Some(vec![path])).unwrap();
        assert_eq!(config.content_id.as_deref(), Some("main"));
        assert_eq!(config.list_style, Some(ListStyle::Unordered));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(dir.path(), Some(vec![dir.path().join("nope.yml")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toc.ini");
        fs::write(&path, "max_level=3").unwrap();
        let err = load_config(dir.path(), Some(vec![path])).unwrap_err();
        assert!(err.to_string().contains("Unsupported configuration file format"));
    }

    #[test]
    fn test_invalid_levels_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_toc.yml"), "min_level: 5\nmax_level: 3\n").unwrap();
        assert!(load_config(dir.path(), None).is_err());
    }
}

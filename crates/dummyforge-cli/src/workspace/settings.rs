use std::path::Path;

use dummyforge_core::{GeneratorOptions, Locale, OutputFormat};
use serde::{Deserialize, Serialize};

use super::atomic::write_bytes_atomic;
use super::{WorkspaceError, WorkspaceResult};

pub const DEFAULT_SETTINGS_FILE: &str = "dummyforge.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub item_count: usize,
    pub language: Locale,
    pub format: OutputFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub log_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let options = GeneratorOptions::default();
        Self {
            item_count: options.item_count,
            language: options.language,
            format: OutputFormat::default(),
            seed: options.seed,
            log_json: false,
        }
    }
}

impl Settings {
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            item_count: self.item_count,
            language: self.language,
            seed: self.seed,
        }
    }
}

/// Read settings from `path`; a missing file yields the defaults.
pub fn load_settings(path: &Path) -> WorkspaceResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &Settings) -> WorkspaceResult<()> {
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(path, encoded.as_bytes()).map_err(WorkspaceError::from)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dummyforge-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = scratch_dir();
        let settings = load_settings(&dir.join(DEFAULT_SETTINGS_FILE)).expect("load");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.item_count, 5);
        assert_eq!(settings.language, Locale::En);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = scratch_dir();
        let path = dir.join("nested").join(DEFAULT_SETTINGS_FILE);
        let settings = Settings {
            item_count: 12,
            language: Locale::Ja,
            format: OutputFormat::Csv,
            seed: Some(99),
            log_json: true,
        };
        save_settings(&path, &settings).expect("save");

        let content = std::fs::read_to_string(&path).expect("read");
        assert!(content.contains("language = \"ja\""));
        assert_eq!(load_settings(&path).expect("load"), settings);
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let dir = scratch_dir();
        let path = dir.join(DEFAULT_SETTINGS_FILE);
        std::fs::write(&path, "format = \"yaml\"\n").expect("write");

        let settings = load_settings(&path).expect("load");
        assert_eq!(settings.format, OutputFormat::Yaml);
        assert_eq!(settings.item_count, 5);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn unknown_language_is_rejected() {
        let dir = scratch_dir();
        let path = dir.join(DEFAULT_SETTINGS_FILE);
        std::fs::write(&path, "language = \"fr\"\n").expect("write");

        assert!(matches!(load_settings(&path), Err(WorkspaceError::TomlDecode(_))));
    }
}

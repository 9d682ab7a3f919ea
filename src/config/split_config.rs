//! TOML-backed split configuration

use std::fs;
use lazy_static::lazy_static;
use log::debug;

use crate::geometry::legacy_grid;
use crate::split::errors::{SplitError, SplitResult};

const DEFAULTS_TOML: &str = include_str!("../../splyt_defaults.toml");

lazy_static! {
    // Parse the embedded defaults once at startup
    pub static ref DEFAULT_CONFIG: SplitConfig = {
        SplitConfig::overlay(SplitConfig::fallback(), DEFAULTS_TOML).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in defaults: {}", e);
            SplitConfig::fallback()
        })
    };
}

/// Immutable settings for a splitting run
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    /// Tool version stamped into the provenance string
    pub version: String,
    /// Provenance text, `{version}` is substituted
    pub provenance_template: String,
    /// Suffix appended to the per-image output directory name
    pub split_dir_suffix: String,
    /// Number of stem characters kept in the per-image directory name
    pub dir_stem_chars: usize,
    /// Legacy grid size used when the requested grid is invalid
    pub default_grid_size: u32,
    /// Accepted legacy grid sizes
    pub valid_grid_sizes: Vec<u32>,
    /// Upper-case format names the splitter accepts
    pub supported_formats: Vec<String>,
}

impl SplitConfig {
    /// Parse a configuration from TOML, starting from the built-in defaults
    pub fn from_str(content: &str) -> SplitResult<Self> {
        Self::overlay(DEFAULT_CONFIG.clone(), content)
    }

    /// Load a configuration file; keys it omits keep their default values
    pub fn from_file(path: &str) -> SplitResult<Self> {
        let contents = fs::read_to_string(path).map_err(SplitError::IoError)?;
        debug!("Loaded configuration from {}", path);
        Self::from_str(&contents)
    }

    fn overlay(mut config: SplitConfig, content: &str) -> SplitResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(SplitError::Configuration(format!("Failed to parse TOML: {}", e))),
        };

        if let Some(v) = Self::get_str(&toml_value, "version")? {
            config.version = v;
        }
        if let Some(v) = Self::get_str(&toml_value, "provenance_template")? {
            config.provenance_template = v;
        }
        if let Some(v) = Self::get_str(&toml_value, "split_dir_suffix")? {
            config.split_dir_suffix = v;
        }
        if let Some(v) = Self::get_uint(&toml_value, "dir_stem_chars")? {
            config.dir_stem_chars = v as usize;
        }
        if let Some(v) = Self::get_uint(&toml_value, "default_grid_size")? {
            config.default_grid_size = v as u32;
        }
        if let Some(array) = toml_value.get("valid_grid_sizes") {
            let items = array.as_array().ok_or_else(|| {
                SplitError::Configuration("valid_grid_sizes must be an array".to_string())
            })?;
            config.valid_grid_sizes = items
                .iter()
                .map(|item| match item.as_integer() {
                    Some(n) if n > 0 => Ok(n as u32),
                    _ => Err(SplitError::Configuration(format!("Invalid grid size: {}", item))),
                })
                .collect::<SplitResult<Vec<u32>>>()?;
        }
        if let Some(array) = toml_value.get("supported_formats") {
            let items = array.as_array().ok_or_else(|| {
                SplitError::Configuration("supported_formats must be an array".to_string())
            })?;
            config.supported_formats = items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(|s| s.to_uppercase())
                        .ok_or_else(|| SplitError::Configuration(format!("Invalid format name: {}", item)))
                })
                .collect::<SplitResult<Vec<String>>>()?;
        }

        if config.dir_stem_chars == 0 {
            return Err(SplitError::Configuration("dir_stem_chars must be at least 1".to_string()));
        }
        if let Some(size) = config.valid_grid_sizes.iter().find(|&&s| legacy_grid(s, true).is_none()) {
            return Err(SplitError::Configuration(format!(
                "valid_grid_sizes contains {}, which has no legacy grid layout",
                size
            )));
        }
        if !config.valid_grid_sizes.contains(&config.default_grid_size) {
            return Err(SplitError::Configuration(format!(
                "default_grid_size {} is not one of {:?}",
                config.default_grid_size, config.valid_grid_sizes
            )));
        }

        Ok(config)
    }

    fn get_str(value: &toml::Value, key: &str) -> SplitResult<Option<String>> {
        match value.get(key) {
            None => Ok(None),
            Some(v) => v
                .as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| SplitError::Configuration(format!("{} must be a string", key))),
        }
    }

    fn get_uint(value: &toml::Value, key: &str) -> SplitResult<Option<u64>> {
        match value.get(key) {
            None => Ok(None),
            Some(v) => match v.as_integer() {
                Some(n) if n >= 0 => Ok(Some(n as u64)),
                _ => Err(SplitError::Configuration(format!("{} must be a non-negative integer", key))),
            },
        }
    }

    // Mirror of splyt_defaults.toml, used if the embedded document is broken
    fn fallback() -> Self {
        SplitConfig {
            version: "1.0".to_string(),
            provenance_template: "Created using Splyt v{version}".to_string(),
            split_dir_suffix: "_split".to_string(),
            dir_stem_chars: 9,
            default_grid_size: 3,
            valid_grid_sizes: vec![2, 3, 4, 6, 8, 9, 12],
            supported_formats: ["PNG", "JPEG", "BMP", "GIF", "TIFF", "WEBP"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// The provenance marker written into tile metadata
    pub fn provenance(&self) -> String {
        self.provenance_template.replace("{version}", &self.version)
    }

    /// Whether a declared format name is on the allow-list
    pub fn supports_format(&self, format_name: &str) -> bool {
        self.supported_formats
            .iter()
            .any(|f| f.eq_ignore_ascii_case(format_name))
    }

    /// Whether a legacy single-number grid size is accepted
    pub fn is_valid_grid_size(&self, size: u32) -> bool {
        self.valid_grid_sizes.contains(&size)
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

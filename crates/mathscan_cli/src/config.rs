use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use mathscan_engine::ScanOptions;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "mathscan.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub significant_digits: usize,
    pub math_delimiter: String,
    pub clean_ocr_text: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        let options = ScanOptions::default();
        Self {
            significant_digits: options.significant_digits,
            math_delimiter: options.math_delimiter,
            clean_ocr_text: options.clean_ocr_text,
        }
    }
}

impl ScanConfig {
    /// An explicit path must exist and parse. The implicit `mathscan.toml`
    /// is optional, and a broken one only costs a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        match Self::from_file(path) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("{:#}. Using defaults.", e);
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Error reading config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Error parsing config file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        let mut file = fs::File::create(path)
            .with_context(|| format!("Error creating config file {}", path.display()))?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_options(&self) -> ScanOptions {
        ScanOptions {
            significant_digits: self.significant_digits,
            math_delimiter: self.math_delimiter.clone(),
            clean_ocr_text: self.clean_ocr_text,
        }
    }
}

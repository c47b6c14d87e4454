use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bookgen_generate::model::{
    DEFAULT_AVG_LIKES, DEFAULT_AVG_REVIEWS, DEFAULT_PAGE_SIZE, DEFAULT_SEED,
    default_reference_date,
};
use bookgen_generate::{GenerateOptions, GenerationParams};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "bookgen.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("settings file not found: {0}")]
    Missing(PathBuf),
}

/// Values used when a request flag is omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestDefaults {
    pub seed: String,
    pub region: String,
    pub avg_likes: f64,
    pub avg_reviews: f64,
    pub page_size: u32,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_string(),
            region: bookgen_core::Region::DEFAULT_CODE.to_string(),
            avg_likes: DEFAULT_AVG_LIKES,
            avg_reviews: DEFAULT_AVG_REVIEWS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub defaults: RequestDefaults,
    pub reference_date: NaiveDate,
    pub assets_dir: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub parallel_threshold: usize,
}

impl Default for Settings {
    fn default() -> Self {
        let options = GenerateOptions::default();
        Self {
            defaults: RequestDefaults::default(),
            reference_date: default_reference_date(),
            assets_dir: None,
            out_dir: options.out_dir,
            parallel_threshold: options.parallel_threshold,
        }
    }
}

impl Settings {
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            out_dir: self.out_dir.clone(),
            reference_date: self.reference_date,
            assets_dir: self.assets_dir.clone(),
            parallel_threshold: self.parallel_threshold,
        }
    }

    pub fn default_params(&self) -> GenerationParams {
        GenerationParams::new(self.defaults.seed.clone(), self.defaults.region.clone())
            .with_averages(self.defaults.avg_likes, self.defaults.avg_reviews)
    }
}

/// Load settings from `path`, or from `bookgen.toml` when present, or fall
/// back to built-in defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    match path {
        Some(path) if !path.exists() => Err(SettingsError::Missing(path.to_path_buf())),
        Some(path) => parse_settings(&std::fs::read_to_string(path)?),
        None => {
            let fallback = Path::new(DEFAULT_SETTINGS_FILE);
            if fallback.exists() {
                parse_settings(&std::fs::read_to_string(fallback)?)
            } else {
                Ok(Settings::default())
            }
        }
    }
}

pub fn parse_settings(content: &str) -> Result<Settings, SettingsError> {
    Ok(toml::from_str(content)?)
}

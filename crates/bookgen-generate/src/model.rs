use std::path::PathBuf;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use bookgen_core::{BookRecord, Region};

/// Seed used when a request does not carry one.
pub const DEFAULT_SEED: &str = "default-seed";
pub const DEFAULT_AVG_LIKES: f64 = 3.5;
pub const DEFAULT_AVG_REVIEWS: f64 = 2.0;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Upper bound of both average parameters.
pub const MAX_AVERAGE: f64 = 10.0;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where export runs are written.
    pub out_dir: PathBuf,
    /// Day review dates count back from.
    pub reference_date: NaiveDate,
    /// Optional directory of word-list overrides.
    pub assets_dir: Option<PathBuf>,
    /// Pages at least this large are generated on several threads.
    pub parallel_threshold: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("out"),
            reference_date: default_reference_date(),
            assets_dir: None,
            parallel_threshold: 64,
        }
    }
}

pub fn default_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// Inputs that, together with a record id, fully determine a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    pub seed: String,
    /// Region code as requested, e.g. `en_US`.
    pub region: String,
    pub avg_likes: f64,
    pub avg_reviews: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_string(),
            region: Region::DEFAULT_CODE.to_string(),
            avg_likes: DEFAULT_AVG_LIKES,
            avg_reviews: DEFAULT_AVG_REVIEWS,
        }
    }
}

impl GenerationParams {
    pub fn new(seed: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            region: region.into(),
            ..Self::default()
        }
    }

    pub fn with_averages(mut self, avg_likes: f64, avg_reviews: f64) -> Self {
        self.avg_likes = avg_likes;
        self.avg_reviews = avg_reviews;
        self
    }

    pub fn region(&self) -> Region {
        Region::parse(&self.region)
    }

    /// Copy with both averages clamped into `[0, 10]` (NaN becomes 0).
    pub fn normalized(&self) -> Self {
        Self {
            avg_likes: clamp_average(self.avg_likes),
            avg_reviews: clamp_average(self.avg_reviews),
            ..self.clone()
        }
    }
}

fn clamp_average(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, MAX_AVERAGE)
    }
}

/// One page of the infinite record sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRequest {
    pub params: GenerationParams,
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            params: GenerationParams::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(params: GenerationParams, page: u32, page_size: u32) -> Self {
        Self {
            params,
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Id of the first record on the page.
    pub fn start_index(&self) -> u64 {
        u64::from(self.page.max(1) - 1) * u64::from(self.page_size) + 1
    }
}

/// Echo of the parameters that produced a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub seed: String,
    pub region: String,
    pub avg_likes: f64,
    pub avg_reviews: f64,
}

impl From<&GenerationParams> for PageMetadata {
    fn from(params: &GenerationParams) -> Self {
        Self {
            seed: params.seed.clone(),
            region: params.region.clone(),
            avg_likes: params.avg_likes,
            avg_reviews: params.avg_reviews,
        }
    }
}

/// Response body for a page request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub books: Vec<BookRecord>,
    pub page: u32,
    pub page_size: u32,
    pub metadata: PageMetadata,
}

/// Summary of an export run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportReport {
    pub run_id: String,
    pub seed: String,
    pub region: String,
    pub first_id: u64,
    pub last_id: u64,
    pub rows: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

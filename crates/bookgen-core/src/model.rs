use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cover::contrast_color;

/// A fully populated synthetic book.
///
/// Records are never mutated after synthesis; the tuple
/// `(seed, id, region, avg_likes, avg_reviews)` is their only identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// 1-based global index of the record.
    pub id: u64,
    /// ISBN-13 formatted as `978-D-DDDD-DDDD-C`.
    pub isbn: String,
    pub title: String,
    /// One or two full names.
    pub authors: Vec<String>,
    pub publisher: String,
    pub publish_year: u16,
    pub genre: String,
    pub language: String,
    pub pages: u16,
    pub likes: u32,
    /// Price with exactly two decimals, e.g. `"12.40"`.
    pub price: String,
    pub reviews: Vec<Review>,
    pub cover: Cover,
    pub summary: String,
}

/// A single reader review attached to a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Review {
    pub reviewer: String,
    pub text: String,
    /// Star rating in `3..=5`.
    pub rating: u8,
    /// ISO calendar date (`YYYY-MM-DD`).
    pub date: String,
}

/// Cover descriptor rendered by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cover {
    pub bg_color: String,
    pub fg_color: String,
    pub accent_color: String,
    /// Layout variant in `0..=2`.
    #[serde(rename = "type")]
    pub layout_type: u8,
}

impl Cover {
    /// Text color readable on top of `bg_color`.
    pub fn text_color(&self) -> &'static str {
        contrast_color(&self.bg_color)
    }

    /// Text color readable on top of `accent_color` (monogram of layout 1).
    pub fn accent_text_color(&self) -> &'static str {
        contrast_color(&self.accent_color)
    }
}

impl BookRecord {
    /// Authors joined the way listings and exports display them.
    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }
}

//! Core contracts for bookgen.
//!
//! This crate defines the book record model, the fixed regional lookup
//! tables, and the pure helpers (ISBN checksum, cover contrast) that every
//! generated record must satisfy.

pub mod cover;
pub mod error;
pub mod isbn;
pub mod model;
pub mod region;

pub use cover::{LAYOUT_TYPES, PALETTES, Palette, brightness, contrast_color};
pub use error::{Error, Result};
pub use model::{BookRecord, Cover, Review};
pub use region::Region;

/// Lowest publication year a record may carry.
pub const MIN_PUBLISH_YEAR: u16 = 1950;
/// Highest publication year a record may carry.
pub const MAX_PUBLISH_YEAR: u16 = 2023;

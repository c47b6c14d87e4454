//! Deterministic book record synthesis for bookgen.
//!
//! Every record is derived from its own seeded stream, so a page of records
//! is reproducible from `(seed, region, avg_likes, avg_reviews, id)` alone
//! and can be generated in any order.

pub mod corpus;
pub mod engine;
pub mod errors;
pub mod model;
pub mod output;
pub mod stream;
pub mod synth;

pub use corpus::{Corpus, CorpusLocale, CorpusSet};
pub use engine::{BookEngine, ExportResult};
pub use errors::GenerationError;
pub use model::{
    ExportReport, GenerateOptions, GenerationParams, PageMetadata, PageRequest, PageResponse,
};
pub use stream::RecordStream;
pub use synth::{SynthesisContext, synthesize};

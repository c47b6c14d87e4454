use std::any::Any;
use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info, warn};

use bookgen_core::BookRecord;

use crate::corpus::CorpusSet;
use crate::errors::GenerationError;
use crate::model::{
    ExportReport, GenerateOptions, GenerationParams, PageMetadata, PageRequest, PageResponse,
};
use crate::output::csv::write_books_csv;
use crate::stream::RecordStream;
use crate::synth::{SynthesisContext, synthesize};

/// Result of an export run.
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub run_dir: PathBuf,
    pub report: ExportReport,
}

/// Entry point for generating pages of book records.
///
/// The engine holds only immutable state (options and corpora), so one
/// instance can serve concurrent requests for different regions.
#[derive(Debug, Clone)]
pub struct BookEngine {
    options: GenerateOptions,
    corpora: CorpusSet,
}

impl BookEngine {
    pub fn new(options: GenerateOptions) -> Result<Self, GenerationError> {
        let corpora = CorpusSet::load(options.assets_dir.as_deref())?;
        Ok(Self { options, corpora })
    }

    pub fn with_corpora(options: GenerateOptions, corpora: CorpusSet) -> Self {
        Self { options, corpora }
    }

    /// Single record with id `id`; identical to its slot in any page.
    pub fn record(&self, params: &GenerationParams, id: u64) -> BookRecord {
        let params = params.normalized();
        let ctx = self.context(&params);
        synthesize(&mut RecordStream::derive(&params.seed, id), id, &ctx)
    }

    /// `count` consecutive records starting at id `start`.
    ///
    /// Either every record is returned or the call fails; a panic during
    /// synthesis surfaces as `GenerationError::Failed`.
    pub fn records(
        &self,
        params: &GenerationParams,
        start: u64,
        count: usize,
    ) -> Result<Vec<BookRecord>, GenerationError> {
        let params = params.normalized();
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            self.generate_range(&params, start, count)
        }));
        outcome.map_err(|panic| GenerationError::Failed(panic_message(panic)))
    }

    pub fn page(&self, request: &PageRequest) -> Result<PageResponse, GenerationError> {
        let start = Instant::now();
        let params = request.params.normalized();
        let start_index = request.start_index();
        info!(
            seed = %params.seed,
            region = %params.region,
            page = request.page,
            page_size = request.page_size,
            start_index,
            "page generation started"
        );

        let books = match self.records(&params, start_index, request.page_size as usize) {
            Ok(books) => books,
            Err(err) => {
                warn!(seed = %params.seed, page = request.page, error = %err, "page generation failed");
                return Err(err);
            }
        };

        info!(
            page = request.page,
            books = books.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "page generated"
        );

        Ok(PageResponse {
            books,
            page: request.page,
            page_size: request.page_size,
            metadata: PageMetadata::from(&params),
        })
    }

    /// Write `pages` consecutive pages starting at `request.page` to a new
    /// run directory under `options.out_dir`.
    ///
    /// Records are generated before anything touches the disk, so a failed
    /// generation leaves no run directory behind.
    pub fn export(
        &self,
        request: &PageRequest,
        pages: u32,
    ) -> Result<ExportResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let params = request.params.normalized();
        let first_id = request.start_index();
        let count = request.page_size as usize * pages.max(1) as usize;
        info!(run_id = %run_id, seed = %params.seed, first_id, rows = count, "export started");

        let books = match self.records(&params, first_id, count) {
            Ok(books) => books,
            Err(err) => {
                warn!(run_id = %run_id, error = %err, "export failed");
                return Err(err);
            }
        };

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%SZ").to_string();
        let run_dir = self
            .options
            .out_dir
            .join(format!("{timestamp}__run_{run_id}"));
        std::fs::create_dir_all(&run_dir)?;
        std::fs::write(
            run_dir.join("request.json"),
            serde_json::to_vec_pretty(request)?,
        )?;
        let bytes_written = write_books_csv(&run_dir.join("books.csv"), &books)?;

        let report = ExportReport {
            run_id: run_id.clone(),
            seed: params.seed.clone(),
            region: params.region.clone(),
            first_id,
            last_id: books.last().map(|book| book.id).unwrap_or(first_id),
            rows: books.len() as u64,
            bytes_written,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        std::fs::write(
            run_dir.join("export_report.json"),
            serde_json::to_vec_pretty(&report)?,
        )?;

        info!(
            run_id = %run_id,
            rows = report.rows,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "export completed"
        );
        Ok(ExportResult { run_dir, report })
    }

    fn context<'a>(&'a self, params: &GenerationParams) -> SynthesisContext<'a> {
        let region = params.region();
        SynthesisContext {
            region,
            corpus: self.corpora.for_region(region),
            avg_likes: params.avg_likes,
            avg_reviews: params.avg_reviews,
            reference_date: self.options.reference_date,
        }
    }

    fn generate_range(
        &self,
        params: &GenerationParams,
        start: u64,
        count: usize,
    ) -> Vec<BookRecord> {
        let ctx = self.context(params);
        let seed = params.seed.as_str();
        let ids: Vec<u64> = (0..count as u64)
            .map(|offset| start.saturating_add(offset))
            .collect();
        let build = |id: &u64| synthesize(&mut RecordStream::derive(seed, *id), *id, &ctx);

        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(count);
        if count < self.options.parallel_threshold || workers < 2 {
            return ids.iter().map(build).collect();
        }

        let chunk_size = count.div_ceil(workers);
        debug!(count, workers, chunk_size, "generating records in parallel");
        std::thread::scope(|scope| {
            let handles: Vec<_> = ids
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move || chunk.iter().map(build).collect::<Vec<_>>()))
                .collect();
            let mut books = Vec::with_capacity(count);
            for handle in handles {
                match handle.join() {
                    Ok(chunk) => books.extend(chunk),
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
            books
        })
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic without message".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Corpus, CorpusLocale, WordClass};

    fn temp_out_dir(label: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("bookgen_engine_{label}_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp out dir");
        dir
    }

    /// English corpus whose word tables are empty, so every title panics.
    fn broken_engine(out_dir: PathBuf) -> BookEngine {
        let corpus = WordClass::ALL
            .into_iter()
            .fold(Corpus::builtin(CorpusLocale::EnUs), |corpus, class| {
                corpus.with_words(class, Vec::new())
            });
        let options = GenerateOptions {
            out_dir,
            ..GenerateOptions::default()
        };
        BookEngine::with_corpora(options, CorpusSet::builtin().with_corpus(corpus))
    }

    #[test]
    fn synthesis_panic_fails_the_whole_page() {
        let engine = broken_engine(temp_out_dir("page"));
        let request = PageRequest::new(GenerationParams::new("broken", "en_US"), 1, 5);
        let result = engine.page(&request);
        assert!(matches!(result, Err(GenerationError::Failed(_))));
    }

    #[test]
    fn failed_export_leaves_no_run_directory() {
        let out_dir = temp_out_dir("export");
        let engine = broken_engine(out_dir.clone());
        let request = PageRequest::new(GenerationParams::new("broken", "en_US"), 1, 5);

        let result = engine.export(&request, 2);
        assert!(matches!(result, Err(GenerationError::Failed(_))));
        let entries = std::fs::read_dir(&out_dir).expect("read out dir").count();
        assert_eq!(entries, 0);
    }

    #[test]
    fn fr_region_uses_french_corpus() {
        let engine = broken_engine(temp_out_dir("fr"));
        let params = GenerationParams::new("broken", "fr_FR");
        let books = engine.records(&params, 1, 5).expect("french corpus is intact");
        assert_eq!(books.len(), 5);
    }
}

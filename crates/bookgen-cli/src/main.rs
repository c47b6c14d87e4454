mod logging;
mod settings;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use uuid::Uuid;

use bookgen_generate::{BookEngine, GenerationError, GenerationParams, PageRequest, PageResponse};
use logging::{LoggingError, init_logging};
use settings::{Settings, SettingsError, load_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "bookgen", version, about = "Deterministic synthetic book records")]
struct Cli {
    /// Settings file (defaults to ./bookgen.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Append JSON logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one page of records as JSON.
    Page(PageArgs),
    /// Write consecutive pages to a CSV run directory.
    Export(ExportArgs),
    /// Print the JSON schema of a page response.
    Schema,
}

#[derive(Args, Debug)]
struct RequestArgs {
    /// Reproducibility key.
    #[arg(long)]
    seed: Option<String>,
    /// Use a fresh random seed (echoed in the output metadata).
    #[arg(long, default_value_t = false, conflicts_with = "seed")]
    random_seed: bool,
    /// Region code such as en_US, fr_FR or ja_JP.
    #[arg(long)]
    region: Option<String>,
    /// Mean likes per book, 0 to 10.
    #[arg(long)]
    avg_likes: Option<f64>,
    /// Mean reviews per book, 0 to 10.
    #[arg(long)]
    avg_reviews: Option<f64>,
    /// 1-based page number.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,
    /// Records per page.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    page_size: Option<u32>,
}

#[derive(Args, Debug)]
struct PageArgs {
    #[command(flatten)]
    request: RequestArgs,
    /// Write the response here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[command(flatten)]
    request: RequestArgs,
    /// Number of consecutive pages to export.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pages: u32,
    /// Parent directory for export runs.
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Command::Page(args) => run_page(&settings, args),
        Command::Export(args) => run_export(settings, args),
        Command::Schema => run_schema(),
    }
}

fn run_page(settings: &Settings, args: PageArgs) -> Result<(), CliError> {
    let engine = BookEngine::new(settings.generate_options())?;
    let request = build_request(settings, args.request);
    let response = engine.page(&request)?;

    match args.out {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(&path)?);
            write_response(&mut writer, &response)?;
            tracing::info!(path = %path.display(), "page written");
        }
        None => write_response(&mut io::stdout().lock(), &response)?,
    }
    Ok(())
}

fn run_export(mut settings: Settings, args: ExportArgs) -> Result<(), CliError> {
    if let Some(out_dir) = args.out_dir {
        settings.out_dir = out_dir;
    }
    let engine = BookEngine::new(settings.generate_options())?;
    let request = build_request(&settings, args.request);
    let result = engine.export(&request, args.pages)?;
    println!("{}", result.run_dir.display());
    Ok(())
}

fn run_schema() -> Result<(), CliError> {
    let schema = schemars::schema_for!(PageResponse);
    write_response(&mut io::stdout().lock(), &schema)?;
    Ok(())
}

fn write_response<W: Write, T: serde::Serialize>(writer: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Flags override settings, settings override built-in defaults.
fn build_request(settings: &Settings, args: RequestArgs) -> PageRequest {
    let defaults = settings.default_params();
    let seed = if args.random_seed {
        random_seed()
    } else {
        args.seed.unwrap_or(defaults.seed)
    };
    let params = GenerationParams::new(seed, args.region.unwrap_or(defaults.region)).with_averages(
        args.avg_likes.unwrap_or(defaults.avg_likes),
        args.avg_reviews.unwrap_or(defaults.avg_reviews),
    );
    PageRequest::new(
        params,
        args.page,
        args.page_size.unwrap_or(settings.defaults.page_size),
    )
}

fn random_seed() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("parse cli")
    }

    fn request_args(cli: Cli) -> RequestArgs {
        match cli.command {
            Command::Page(args) => args.request,
            Command::Export(args) => args.request,
            Command::Schema => panic!("schema has no request"),
        }
    }

    #[test]
    fn flags_override_settings() {
        let mut settings = Settings::default();
        settings.defaults.seed = "from-file".to_string();
        settings.defaults.page_size = 50;

        let cli = parse(&["bookgen", "page", "--region", "fr_FR", "--page", "2"]);
        let request = build_request(&settings, request_args(cli));
        assert_eq!(request.params.seed, "from-file");
        assert_eq!(request.params.region, "fr_FR");
        assert_eq!(request.page, 2);
        assert_eq!(request.page_size, 50);
        assert_eq!(request.start_index(), 51);
    }

    #[test]
    fn random_seed_replaces_configured_seed() {
        let cli = parse(&["bookgen", "export", "--random-seed", "--pages", "3"]);
        let request = build_request(&Settings::default(), request_args(cli));
        assert_eq!(request.params.seed.len(), 8);
        assert_ne!(request.params.seed, "default-seed");
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(Cli::try_parse_from(["bookgen", "page", "--page-size", "0"]).is_err());
        assert!(Cli::try_parse_from(["bookgen", "page", "--page", "0"]).is_err());
    }

    #[test]
    fn seed_conflicts_with_random_seed() {
        let result = Cli::try_parse_from(["bookgen", "page", "--seed", "a", "--random-seed"]);
        assert!(result.is_err());
    }
}

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use bookgen_generate::output::csv::{HEADERS, write_books};
use bookgen_generate::{BookEngine, GenerateOptions, GenerationParams, PageRequest};

fn hash_file(path: &Path) -> Result<String, std::io::Error> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0_u8; 8192];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("bookgen_generate_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

fn engine(out_dir: PathBuf) -> BookEngine {
    let options = GenerateOptions {
        out_dir,
        ..GenerateOptions::default()
    };
    BookEngine::new(options).expect("build engine")
}

#[test]
fn export_writes_csv_and_report() {
    let out_dir = temp_out_dir("export");
    let request = PageRequest::new(GenerationParams::new("export", "en_US"), 1, 5);
    let result = engine(out_dir).export(&request, 2).expect("export");

    let csv = fs::read_to_string(result.run_dir.join("books.csv")).expect("read books.csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], HEADERS.join(","));
    assert!(lines[1].starts_with("1,978-"));

    assert_eq!(result.report.rows, 10);
    assert_eq!(result.report.first_id, 1);
    assert_eq!(result.report.last_id, 10);
    assert_eq!(result.report.bytes_written, csv.len() as u64);

    let report: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(result.run_dir.join("export_report.json")).expect("read report"),
    )
    .expect("parse report");
    assert_eq!(report["rows"], 10);
    assert!(result.run_dir.join("request.json").exists());
}

#[test]
fn export_is_deterministic() {
    let request = PageRequest::new(
        GenerationParams::new("golden", "fr_FR").with_averages(1.5, 0.5),
        3,
        8,
    );
    let a = engine(temp_out_dir("run_a")).export(&request, 1).expect("export A");
    let b = engine(temp_out_dir("run_b")).export(&request, 1).expect("export B");

    let hash_a = hash_file(&a.run_dir.join("books.csv")).expect("hash A");
    let hash_b = hash_file(&b.run_dir.join("books.csv")).expect("hash B");
    assert_eq!(hash_a, hash_b, "books.csv should be deterministic");
    assert_eq!(a.report.first_id, 17);
}

#[test]
fn csv_row_joins_authors_and_counts_reviews() {
    let engine = engine(temp_out_dir("rows"));
    let params = GenerationParams::new("rows", "en_US").with_averages(0.0, 3.0);
    let books = engine.records(&params, 1, 30).expect("generate records");

    let mut buffer = Vec::new();
    write_books(&mut buffer, &books).expect("write csv");

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("parse csv");
    assert_eq!(rows.len(), books.len());
    for (row, book) in rows.iter().zip(&books) {
        assert_eq!(&row[0], book.id.to_string());
        assert_eq!(&row[3], book.authors.join(", "));
        assert_eq!(&row[11], "3");
    }
}

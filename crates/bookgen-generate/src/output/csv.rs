use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bookgen_core::BookRecord;

/// Column headers of the book export, in output order.
pub const HEADERS: [&str; 12] = [
    "ID",
    "ISBN",
    "Title",
    "Authors",
    "Publisher",
    "Year",
    "Genre",
    "Language",
    "Pages",
    "Likes",
    "Price",
    "Reviews",
];

/// Write books as CSV to `path`, returning the number of bytes written.
pub fn write_books_csv(path: &Path, books: &[BookRecord]) -> Result<u64, csv::Error> {
    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    write_books(writer, books)
}

/// Write books as CSV to any writer, returning the number of bytes written.
pub fn write_books<W: Write>(writer: W, books: &[BookRecord]) -> Result<u64, csv::Error> {
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(HEADERS)?;
    for book in books {
        writer.write_record(book_row(book))?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

fn book_row(book: &BookRecord) -> [String; 12] {
    [
        book.id.to_string(),
        book.isbn.clone(),
        book.title.clone(),
        book.author_line(),
        book.publisher.clone(),
        book.publish_year.to_string(),
        book.genre.clone(),
        book.language.clone(),
        book.pages.to_string(),
        book.likes.to_string(),
        book.price.clone(),
        book.review_count().to_string(),
    ]
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

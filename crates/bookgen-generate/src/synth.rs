//! Record synthesizer.
//!
//! Draw order is part of the output contract. A record consumes its stream
//! strictly in this sequence:
//!
//! 1. genre
//! 2. author count, then one full name per author
//! 3. nine ISBN digits
//! 4. title pattern and its slots, the subtitle trial, subtitle pattern and slots
//! 5. publish year, page count
//! 6. likes (one Bernoulli trial, always consumed)
//! 7. price
//! 8. `floor(avg_reviews)` reviews, the bonus trial, the optional bonus review
//! 9. cover palette, layout type
//! 10. summary
//! 11. publisher
//!
//! Moving any step changes every record produced for an existing seed.

use chrono::NaiveDate;

use bookgen_core::isbn::{self, PREFIX};
use bookgen_core::{
    BookRecord, Cover, LAYOUT_TYPES, MIN_PUBLISH_YEAR, PALETTES, Region, Review,
};

use crate::corpus::{Corpus, WordClass};
use crate::stream::RecordStream;

const SECOND_AUTHOR_THRESHOLD: f64 = 0.6;
const SUBTITLE_PROBABILITY: f64 = 0.3;
const PUBLISH_YEAR_SPAN: usize = 74;
const MIN_PAGES: u16 = 100;
const PAGE_SPAN: usize = 900;
const MIN_PRICE: f64 = 4.99;
const PRICE_SPAN: f64 = 35.0;
const MIN_RATING: u8 = 3;
const RATING_SPAN: usize = 3;
const REVIEW_WINDOW_YEARS: u32 = 2;
const SUMMARY_PARAGRAPHS: usize = 2;

/// Everything a record depends on besides its id and stream.
#[derive(Debug, Clone, Copy)]
pub struct SynthesisContext<'a> {
    pub region: Region,
    pub corpus: &'a Corpus,
    pub avg_likes: f64,
    pub avg_reviews: f64,
    pub reference_date: NaiveDate,
}

/// A slot of a title template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Word(WordClass),
    Possessive,
    Literal(&'static str),
}

const TITLE_PATTERNS: [&[Slot]; 6] = [
    &[Slot::Word(WordClass::Adjective), Slot::Word(WordClass::Noun)],
    &[
        Slot::Literal("The"),
        Slot::Word(WordClass::Adjective),
        Slot::Word(WordClass::Noun),
    ],
    &[
        Slot::Word(WordClass::Noun),
        Slot::Literal("of"),
        Slot::Word(WordClass::Noun),
    ],
    &[Slot::Possessive, Slot::Word(WordClass::Noun)],
    &[Slot::Word(WordClass::Adverb), Slot::Word(WordClass::Adjective)],
    &[
        Slot::Word(WordClass::Verb),
        Slot::Literal("the"),
        Slot::Word(WordClass::Noun),
    ],
];

/// Build the record with id `id` from a freshly derived stream.
pub fn synthesize(stream: &mut RecordStream, id: u64, ctx: &SynthesisContext<'_>) -> BookRecord {
    let genres = ctx.region.genres();
    let genre = genres[stream.index(genres.len())].to_string();

    let author_count = if stream.draw() > SECOND_AUTHOR_THRESHOLD { 2 } else { 1 };
    let authors = (0..author_count)
        .map(|_| ctx.corpus.full_name(stream))
        .collect();

    let isbn = generate_isbn(stream);
    let title = generate_title(stream, ctx.corpus);
    let publish_year = MIN_PUBLISH_YEAR + stream.index(PUBLISH_YEAR_SPAN) as u16;
    let pages = MIN_PAGES + stream.index(PAGE_SPAN) as u16;
    let likes = fractional_count(ctx.avg_likes, stream);
    let price = format!("{:.2}", MIN_PRICE + stream.draw() * PRICE_SPAN);
    let reviews = generate_reviews(stream, ctx);
    let cover = generate_cover(stream);
    let summary = ctx
        .corpus
        .paragraphs(SUMMARY_PARAGRAPHS, stream)
        .join("\n\n");
    let publisher = ctx.corpus.company_name(stream);

    BookRecord {
        id,
        isbn,
        title,
        authors,
        publisher,
        publish_year,
        genre,
        language: ctx.region.language().to_string(),
        pages,
        likes,
        price,
        reviews,
        cover,
        summary,
    }
}

/// Integer part of `avg` plus the probability of one extra unit.
pub fn split_average(avg: f64) -> (u32, f64) {
    let avg = if avg.is_nan() { 0.0 } else { avg.max(0.0) };
    let base = avg.floor();
    (base as u32, avg - base)
}

/// `floor(avg)` plus one with probability `avg - floor(avg)`.
pub fn fractional_count(avg: f64, stream: &mut RecordStream) -> u32 {
    let (base, remainder) = split_average(avg);
    base + u32::from(stream.chance(remainder))
}

fn generate_isbn(stream: &mut RecordStream) -> String {
    let mut body = [0_u8; 12];
    body[..3].copy_from_slice(&PREFIX);
    for digit in body.iter_mut().skip(PREFIX.len()) {
        *digit = stream.index(10) as u8;
    }
    isbn::format(&body, isbn::check_digit(&body))
}

fn generate_title(stream: &mut RecordStream, corpus: &Corpus) -> String {
    let mut title = title_clause(stream, corpus);
    if stream.chance(SUBTITLE_PROBABILITY) {
        title.push_str(": ");
        title.push_str(&title_clause(stream, corpus));
    }
    title_case(&title)
}

fn title_clause(stream: &mut RecordStream, corpus: &Corpus) -> String {
    let pattern = TITLE_PATTERNS[stream.index(TITLE_PATTERNS.len())];
    pattern
        .iter()
        .map(|slot| match slot {
            Slot::Word(class) => corpus.word(*class, stream),
            Slot::Possessive => format!("{}'s", corpus.first_name(stream)),
            Slot::Literal(text) => (*text).to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character of every whitespace-separated word.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }
    out
}

fn generate_reviews(stream: &mut RecordStream, ctx: &SynthesisContext<'_>) -> Vec<Review> {
    let (base, remainder) = split_average(ctx.avg_reviews);
    let mut reviews: Vec<Review> = (0..base).map(|_| generate_review(stream, ctx)).collect();
    if stream.chance(remainder) {
        reviews.push(generate_review(stream, ctx));
    }
    reviews
}

fn generate_review(stream: &mut RecordStream, ctx: &SynthesisContext<'_>) -> Review {
    let reviewer = ctx.corpus.full_name(stream);
    let text = ctx.corpus.paragraph(stream);
    let rating = MIN_RATING + stream.index(RATING_SPAN) as u8;
    let date = ctx
        .corpus
        .past_date(ctx.reference_date, REVIEW_WINDOW_YEARS, stream)
        .format("%Y-%m-%d")
        .to_string();
    Review {
        reviewer,
        text,
        rating,
        date,
    }
}

fn generate_cover(stream: &mut RecordStream) -> Cover {
    let palette = PALETTES[stream.index(PALETTES.len())];
    let layout_type = stream.index(usize::from(LAYOUT_TYPES)) as u8;
    Cover {
        bg_color: palette.bg.to_string(),
        fg_color: palette.fg.to_string(),
        accent_color: palette.accent.to_string(),
        layout_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusLocale;

    fn context(corpus: &Corpus, avg_likes: f64, avg_reviews: f64) -> SynthesisContext<'_> {
        SynthesisContext {
            region: Region::EnUs,
            corpus,
            avg_likes,
            avg_reviews,
            reference_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        }
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("the silent river"), "The Silent River");
        assert_eq!(title_case("noun of noun: à peine"), "Noun Of Noun: À Peine");
        assert_eq!(title_case("mary's  garden"), "Mary's  Garden");
        assert_eq!(title_case("静かな 川"), "静かな 川");
    }

    #[test]
    fn split_average_handles_edges() {
        assert_eq!(split_average(0.0), (0, 0.0));
        assert_eq!(split_average(2.5), (2, 0.5));
        assert_eq!(split_average(-1.0), (0, 0.0));
        assert_eq!(split_average(f64::NAN), (0, 0.0));
    }

    #[test]
    fn integral_average_never_adds_a_bonus_unit() {
        let mut stream = RecordStream::derive("integral", 1);
        for _ in 0..200 {
            assert_eq!(fractional_count(4.0, &mut stream), 4);
        }
    }

    #[test]
    fn isbn_carries_prefix_and_valid_checksum() {
        let mut stream = RecordStream::derive("isbn", 9);
        for _ in 0..100 {
            let value = generate_isbn(&mut stream);
            assert_eq!(value.len(), 17);
            assert!(value.starts_with("978-"));
            assert!(isbn::validate(&value), "{value}");
        }
    }

    #[test]
    fn cover_uses_a_single_palette() {
        let mut stream = RecordStream::derive("cover", 2);
        for _ in 0..100 {
            let cover = generate_cover(&mut stream);
            assert!(PALETTES.iter().any(|palette| palette.bg == cover.bg_color
                && palette.fg == cover.fg_color
                && palette.accent == cover.accent_color));
            assert!(cover.layout_type < LAYOUT_TYPES);
        }
    }

    #[test]
    fn fields_come_from_stream_in_documented_order() {
        let corpus = Corpus::builtin(CorpusLocale::EnUs);
        let ctx = context(&corpus, 3.5, 2.5);
        let genres = Region::EnUs.genres();

        for id in 1..=20 {
            let record = synthesize(&mut RecordStream::derive("order", id), id, &ctx);
            let mut stream = RecordStream::derive("order", id);

            assert_eq!(record.genre, genres[stream.index(genres.len())]);
            let author_count = if stream.draw() > SECOND_AUTHOR_THRESHOLD { 2 } else { 1 };
            assert_eq!(record.authors.len(), author_count);
            for author in &record.authors {
                assert_eq!(author, &corpus.full_name(&mut stream));
            }
            assert_eq!(record.isbn, generate_isbn(&mut stream));
            assert_eq!(record.title, generate_title(&mut stream, &corpus));
            assert_eq!(
                record.publish_year,
                MIN_PUBLISH_YEAR + stream.index(PUBLISH_YEAR_SPAN) as u16
            );
            assert_eq!(record.pages, MIN_PAGES + stream.index(PAGE_SPAN) as u16);
            assert_eq!(record.likes, fractional_count(3.5, &mut stream));
            assert_eq!(
                record.price,
                format!("{:.2}", MIN_PRICE + stream.draw() * PRICE_SPAN)
            );
            assert_eq!(record.reviews, generate_reviews(&mut stream, &ctx));
            assert_eq!(record.cover, generate_cover(&mut stream));
            assert_eq!(
                record.summary,
                corpus.paragraphs(SUMMARY_PARAGRAPHS, &mut stream).join("\n\n")
            );
            assert_eq!(record.publisher, corpus.company_name(&mut stream));
        }
    }

    #[test]
    fn synthesize_replays_identically() {
        let corpus = Corpus::builtin(CorpusLocale::EnUs);
        let ctx = context(&corpus, 3.5, 2.0);
        let a = synthesize(&mut RecordStream::derive("seed", 5), 5, &ctx);
        let b = synthesize(&mut RecordStream::derive("seed", 5), 5, &ctx);
        assert_eq!(a, b);
        assert_eq!(a.id, 5);
        assert!(!a.summary.is_empty());
    }
}

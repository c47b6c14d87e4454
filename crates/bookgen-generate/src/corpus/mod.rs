//! Lexical corpus provider.
//!
//! A `Corpus` is an immutable, per-locale bundle of names, words and prose.
//! The locale is fixed at construction and every method draws from the
//! caller's `RecordStream`, so two threads generating different regions never
//! observe each other's settings.

mod assets;
mod locales;
mod words;

use std::path::Path;

use chrono::NaiveDate;
use fake::Fake;
use fake::faker::company::raw::CompanyName;
use fake::faker::lorem::raw::{Paragraph, Paragraphs};
use fake::faker::name::raw::{FirstName, Name};
use fake::locales::{EN, FR_FR, JA_JP};
use tracing::debug;

use bookgen_core::Region;

pub use assets::AssetsLoader;
pub use locales::CorpusLocale;
pub use words::WordClass;

use crate::errors::GenerationError;
use crate::stream::RecordStream;

const PARAGRAPH_SENTENCES: std::ops::Range<usize> = 3..7;

/// Dispatch a `fake` raw faker on the corpus locale.
macro_rules! fake_in {
    ($locale:expr, $rng:expr, $faker:ident $(, $arg:expr)*) => {
        match $locale {
            CorpusLocale::EnUs => $faker(EN $(, $arg)*).fake_with_rng($rng),
            CorpusLocale::FrFr => $faker(FR_FR $(, $arg)*).fake_with_rng($rng),
            CorpusLocale::JaJp => $faker(JA_JP $(, $arg)*).fake_with_rng($rng),
        }
    };
}

/// Names, words and prose for one locale.
#[derive(Debug, Clone)]
pub struct Corpus {
    locale: CorpusLocale,
    adjectives: Vec<String>,
    nouns: Vec<String>,
    adverbs: Vec<String>,
    verbs: Vec<String>,
}

impl Corpus {
    /// Corpus backed by the built-in word tables.
    pub fn builtin(locale: CorpusLocale) -> Self {
        let table = |class| {
            words::builtin(locale, class)
                .iter()
                .map(|word| word.to_string())
                .collect()
        };
        Self {
            locale,
            adjectives: table(WordClass::Adjective),
            nouns: table(WordClass::Noun),
            adverbs: table(WordClass::Adverb),
            verbs: table(WordClass::Verb),
        }
    }

    /// Built-in corpus with word tables replaced by any files present under
    /// `<root>/<locale>/`.
    pub fn load(locale: CorpusLocale, loader: &AssetsLoader) -> Result<Self, GenerationError> {
        let mut corpus = Self::builtin(locale);
        for class in WordClass::ALL {
            let relative = format!("{}/{}", locale.as_str(), class.asset_file());
            if let Some(words) = loader.load_lines(&relative)? {
                debug!(locale = %locale, file = %relative, words = words.len(), "word table overridden");
                *corpus.table_mut(class) = words;
            }
        }
        Ok(corpus)
    }

    pub fn locale(&self) -> CorpusLocale {
        self.locale
    }

    pub fn words(&self, class: WordClass) -> &[String] {
        match class {
            WordClass::Adjective => &self.adjectives,
            WordClass::Noun => &self.nouns,
            WordClass::Adverb => &self.adverbs,
            WordClass::Verb => &self.verbs,
        }
    }

    fn table_mut(&mut self, class: WordClass) -> &mut Vec<String> {
        match class {
            WordClass::Adjective => &mut self.adjectives,
            WordClass::Noun => &mut self.nouns,
            WordClass::Adverb => &mut self.adverbs,
            WordClass::Verb => &mut self.verbs,
        }
    }

    pub fn word(&self, class: WordClass, stream: &mut RecordStream) -> String {
        let table = self.words(class);
        table[stream.index(table.len())].clone()
    }

    pub fn full_name(&self, stream: &mut RecordStream) -> String {
        fake_in!(self.locale, stream, Name)
    }

    pub fn first_name(&self, stream: &mut RecordStream) -> String {
        fake_in!(self.locale, stream, FirstName)
    }

    pub fn company_name(&self, stream: &mut RecordStream) -> String {
        fake_in!(self.locale, stream, CompanyName)
    }

    pub fn paragraph(&self, stream: &mut RecordStream) -> String {
        fake_in!(self.locale, stream, Paragraph, PARAGRAPH_SENTENCES)
    }

    pub fn paragraphs(&self, count: usize, stream: &mut RecordStream) -> Vec<String> {
        fake_in!(self.locale, stream, Paragraphs, count..count + 1)
    }

    /// A day within `years` years before `reference`, never `reference` itself.
    pub fn past_date(
        &self,
        reference: NaiveDate,
        years: u32,
        stream: &mut RecordStream,
    ) -> NaiveDate {
        let span = 365 * years.max(1) as usize;
        let days_back = 1 + stream.index(span) as i64;
        reference
            .checked_sub_signed(chrono::Duration::days(days_back))
            .unwrap_or(reference)
    }
}

/// One corpus per supported locale.
#[derive(Debug, Clone)]
pub struct CorpusSet {
    en_us: Corpus,
    fr_fr: Corpus,
    ja_jp: Corpus,
}

impl CorpusSet {
    pub fn builtin() -> Self {
        Self {
            en_us: Corpus::builtin(CorpusLocale::EnUs),
            fr_fr: Corpus::builtin(CorpusLocale::FrFr),
            ja_jp: Corpus::builtin(CorpusLocale::JaJp),
        }
    }

    /// Built-in corpora, overridden from `assets_dir` when given.
    pub fn load(assets_dir: Option<&Path>) -> Result<Self, GenerationError> {
        let Some(root) = assets_dir else {
            return Ok(Self::builtin());
        };
        let loader = AssetsLoader::new(root.to_path_buf());
        Ok(Self {
            en_us: Corpus::load(CorpusLocale::EnUs, &loader)?,
            fr_fr: Corpus::load(CorpusLocale::FrFr, &loader)?,
            ja_jp: Corpus::load(CorpusLocale::JaJp, &loader)?,
        })
    }

    pub fn get(&self, locale: CorpusLocale) -> &Corpus {
        match locale {
            CorpusLocale::EnUs => &self.en_us,
            CorpusLocale::FrFr => &self.fr_fr,
            CorpusLocale::JaJp => &self.ja_jp,
        }
    }

    pub fn for_region(&self, region: Region) -> &Corpus {
        self.get(CorpusLocale::for_region(region))
    }
}

#[cfg(test)]
impl CorpusSet {
    /// Replace the corpus of one locale.
    pub(crate) fn with_corpus(mut self, corpus: Corpus) -> Self {
        match corpus.locale {
            CorpusLocale::EnUs => self.en_us = corpus,
            CorpusLocale::FrFr => self.fr_fr = corpus,
            CorpusLocale::JaJp => self.ja_jp = corpus,
        }
        self
    }
}

#[cfg(test)]
impl Corpus {
    pub(crate) fn with_words(mut self, class: WordClass, words: Vec<String>) -> Self {
        *self.table_mut(class) = words;
        self
    }
}

impl Default for CorpusSet {
    fn default() -> Self {
        Self::builtin()
    }
}

use std::fmt;

use bookgen_core::Region;

/// Locale of a lexical corpus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CorpusLocale {
    EnUs,
    FrFr,
    JaJp,
}

impl CorpusLocale {
    pub const ALL: [CorpusLocale; 3] = [Self::EnUs, Self::FrFr, Self::JaJp];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::FrFr => "fr_FR",
            Self::JaJp => "ja_JP",
        }
    }

    /// Corpus used for a region; unmapped regions read English words.
    pub fn for_region(region: Region) -> Self {
        match region {
            Region::FrFr => Self::FrFr,
            Region::JaJp => Self::JaJp,
            Region::EnUs | Region::Unmapped => Self::EnUs,
        }
    }
}

impl fmt::Display for CorpusLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

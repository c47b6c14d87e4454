use std::fmt;

const EN_US_GENRES: &[&str] = &[
    "Mystery",
    "Science Fiction",
    "Fantasy",
    "Romance",
    "Thriller",
    "Horror",
    "Biography",
    "History",
    "Self-Help",
    "Business",
];

const FR_FR_GENRES: &[&str] = &[
    "Roman policier",
    "Science-fiction",
    "Fantaisie",
    "Romance",
    "Thriller",
    "Horreur",
    "Biographie",
    "Histoire",
    "Développement personnel",
    "Affaires",
];

const JA_JP_GENRES: &[&str] = &[
    "ミステリー",
    "SF",
    "ファンタジー",
    "ロマンス",
    "スリラー",
    "ホラー",
    "伝記",
    "歴史",
    "自己啓発",
    "ビジネス",
];

/// Regional locale selecting genres, language label and corpus.
///
/// Unrecognized codes map to `Unmapped`, which borrows the English genre
/// list and corpus but reports its language as `"Unknown"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    EnUs,
    FrFr,
    JaJp,
    Unmapped,
}

impl Region {
    pub const DEFAULT_CODE: &'static str = "en_US";

    pub fn parse(value: &str) -> Self {
        match value {
            "en_US" => Self::EnUs,
            "fr_FR" => Self::FrFr,
            "ja_JP" => Self::JaJp,
            _ => Self::Unmapped,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::FrFr => "fr_FR",
            Self::JaJp => "ja_JP",
            Self::Unmapped => "unmapped",
        }
    }

    pub fn language(self) -> &'static str {
        match self {
            Self::EnUs => "English",
            Self::FrFr => "French",
            Self::JaJp => "Japanese",
            Self::Unmapped => "Unknown",
        }
    }

    pub fn genres(self) -> &'static [&'static str] {
        match self {
            Self::FrFr => FR_FR_GENRES,
            Self::JaJp => JA_JP_GENRES,
            Self::EnUs | Self::Unmapped => EN_US_GENRES,
        }
    }

    /// Regions with their own tables, in display order.
    pub fn supported() -> &'static [Region] {
        &[Self::EnUs, Self::FrFr, Self::JaJp]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_codes() {
        for region in Region::supported() {
            assert_eq!(Region::parse(region.as_str()), *region);
        }
    }

    #[test]
    fn unknown_code_falls_back_to_english_genres() {
        let region = Region::parse("de_DE");
        assert_eq!(region, Region::Unmapped);
        assert_eq!(region.language(), "Unknown");
        assert_eq!(region.genres(), Region::EnUs.genres());
    }

    #[test]
    fn every_region_has_ten_genres() {
        for region in Region::supported() {
            assert_eq!(region.genres().len(), 10, "{region}");
        }
    }
}

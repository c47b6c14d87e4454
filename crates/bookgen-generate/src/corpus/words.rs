//! Built-in title vocabulary per locale.
//!
//! Tables are indexed with `floor(draw * len)`; reordering or editing an
//! entry changes the titles produced for existing seeds.

use super::locales::CorpusLocale;

/// Word classes the title patterns draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordClass {
    Adjective,
    Noun,
    Adverb,
    Verb,
}

impl WordClass {
    pub const ALL: [WordClass; 4] = [Self::Adjective, Self::Noun, Self::Adverb, Self::Verb];

    /// File name used when a word table is overridden from assets.
    pub fn asset_file(self) -> &'static str {
        match self {
            Self::Adjective => "adjectives.txt",
            Self::Noun => "nouns.txt",
            Self::Adverb => "adverbs.txt",
            Self::Verb => "verbs.txt",
        }
    }
}

pub fn builtin(locale: CorpusLocale, class: WordClass) -> &'static [&'static str] {
    match (locale, class) {
        (CorpusLocale::EnUs, WordClass::Adjective) => EN_ADJECTIVES,
        (CorpusLocale::EnUs, WordClass::Noun) => EN_NOUNS,
        (CorpusLocale::EnUs, WordClass::Adverb) => EN_ADVERBS,
        (CorpusLocale::EnUs, WordClass::Verb) => EN_VERBS,
        (CorpusLocale::FrFr, WordClass::Adjective) => FR_ADJECTIVES,
        (CorpusLocale::FrFr, WordClass::Noun) => FR_NOUNS,
        (CorpusLocale::FrFr, WordClass::Adverb) => FR_ADVERBS,
        (CorpusLocale::FrFr, WordClass::Verb) => FR_VERBS,
        (CorpusLocale::JaJp, WordClass::Adjective) => JA_ADJECTIVES,
        (CorpusLocale::JaJp, WordClass::Noun) => JA_NOUNS,
        (CorpusLocale::JaJp, WordClass::Adverb) => JA_ADVERBS,
        (CorpusLocale::JaJp, WordClass::Verb) => JA_VERBS,
    }
}

const EN_ADJECTIVES: &[&str] = &[
    "silent", "crimson", "forgotten", "hollow", "golden", "restless", "bitter", "ancient",
    "hidden", "broken", "wild", "distant", "gentle", "burning", "frozen", "quiet", "lost",
    "secret", "electric", "velvet", "wandering", "fragile", "savage", "luminous",
];

const EN_NOUNS: &[&str] = &[
    "river", "kingdom", "garden", "shadow", "harbor", "empire", "letter", "mirror", "storm",
    "orchard", "lantern", "compass", "winter", "island", "machine", "promise", "tower", "echo",
    "journey", "forest", "memory", "voyage", "stranger", "ember",
];

const EN_ADVERBS: &[&str] = &[
    "almost", "barely", "boldly", "briefly", "deeply", "endlessly", "gently", "nearly",
    "quietly", "rarely", "slowly", "softly", "strangely", "suddenly", "truly", "wildly",
];

const EN_VERBS: &[&str] = &[
    "chasing", "finding", "burning", "saving", "breaking", "crossing", "hunting", "keeping",
    "leaving", "mapping", "painting", "reading", "remembering", "seeking", "taming", "waking",
];

const FR_ADJECTIVES: &[&str] = &[
    "silencieux", "pourpre", "oublié", "doré", "ancien", "caché", "brisé", "sauvage",
    "lointain", "doux", "gelé", "tranquille", "perdu", "secret", "fragile", "lumineux",
];

const FR_NOUNS: &[&str] = &[
    "rivière", "royaume", "jardin", "ombre", "port", "empire", "lettre", "miroir", "orage",
    "verger", "lanterne", "boussole", "hiver", "île", "promesse", "tour", "écho", "voyage",
    "forêt", "mémoire",
];

const FR_ADVERBS: &[&str] = &[
    "presque", "à peine", "doucement", "lentement", "rarement", "soudain", "vraiment",
    "follement", "profondément", "étrangement", "longtemps", "toujours",
];

const FR_VERBS: &[&str] = &[
    "chercher", "trouver", "brûler", "sauver", "briser", "traverser", "garder", "quitter",
    "peindre", "lire", "oublier", "réveiller",
];

const JA_ADJECTIVES: &[&str] = &[
    "静かな", "紅の", "忘れられた", "黄金の", "古い", "隠された", "壊れた", "遠い", "優しい",
    "凍った", "失われた", "秘密の", "儚い", "輝く",
];

const JA_NOUNS: &[&str] = &[
    "川", "王国", "庭", "影", "港", "帝国", "手紙", "鏡", "嵐", "果樹園", "灯籠", "羅針盤",
    "冬", "島", "約束", "塔", "記憶", "旅", "森", "夜明け",
];

const JA_ADVERBS: &[&str] = &[
    "ほとんど", "静かに", "ゆっくり", "突然", "本当に", "深く", "そっと", "まれに", "永遠に",
];

const JA_VERBS: &[&str] = &[
    "探す", "見つける", "燃やす", "救う", "壊す", "渡る", "守る", "去る", "描く", "読む",
    "忘れる", "目覚める",
];

use bookgen_generate::{BookEngine, CorpusSet, GenerateOptions, GenerationParams};

fn main() {
    let engine = BookEngine::with_corpora(GenerateOptions::default(), CorpusSet::builtin());
    let params = GenerationParams::new("example", "en_US");
    for id in 1..=10 {
        let book = engine.record(&params, id);
        println!("{:>3}  {}  {}", book.id, book.isbn, book.title);
    }
}

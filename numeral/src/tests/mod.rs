// Lexicon tests
mod lexicon;

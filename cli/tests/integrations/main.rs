mod convert;
mod interactive;
mod lexicon;
mod validate;

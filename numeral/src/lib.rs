//! # Numeral Engine
//!
//! Validates Russian numeral phrases and turns them into numbers.
//!
//! ## Quick Start
//!
//! ```rust
//! use numeral::Engine;
//!
//! let engine = Engine::new();
//!
//! let result = engine.convert("две целых пять десятых");
//! assert!(!result.has_errors);
//! assert_eq!(result.numeric_value, 2.5);
//!
//! let outcome = engine.validate("пять тысяча");
//! assert!(!outcome.is_valid());
//! ```
//!
//! ## Core Concepts
//!
//! ### Lexicon
//! Every numeral from "ноль" to "миллиард" with its surface forms in all six
//! grammatical cases. Multiplier forms are also tagged with the grammatical
//! number they agree with ("тысяча", "тысячи", "тысяч").
//!
//! ### Validation
//! A phrase is checked for unknown words, multiplier order, agreement
//! between a numeral and the multiplier it quantifies, case after
//! prepositions, and placement of "минус" and the fraction delimiter. All
//! issues are collected, each with a location in the phrase.
//!
//! ### Conversion
//! Valid phrases are accumulated block by block into integers, fractions
//! ("три целых двадцать пять сотых", "три, пять") or negative values.

pub mod converter;
pub mod engine;
pub mod error;
pub mod grammar;
pub mod issue;
pub mod lexicon;
pub mod limits;
pub mod response;
pub mod text;
pub mod tokenizer;
pub mod validator;
pub mod vocabulary;

pub use converter::{classify, Converter, PhraseKind};
pub use engine::Engine;
pub use error::NumeralError;
pub use grammar::{Gender, GrammaticalCase, GrammaticalNumber, NumeralClass};
pub use issue::{IssueKind, ValidationIssue, ValidationOutcome};
pub use lexicon::{Lexicon, NumeralEntry, Reading, SurfaceForm};
pub use limits::Limits;
pub use response::ParsedResult;
pub use text::{fold, normalize};
pub use tokenizer::{tokenize, Span, Token, TokenKind};
pub use validator::Validator;

/// Result type for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;

#[cfg(test)]
mod tests;

use thiserror::Error;

/// Faults raised while tokenizing or converting a phrase.
///
/// Grammatical problems with a phrase are not errors; they are reported as
/// [`crate::ValidationIssue`]s. A `NumeralError` means the phrase passed
/// validation but could not be turned into a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// The tokenizer grammar rejected the input
    #[error("не удалось разбить фразу на слова: {0}")]
    Tokenize(String),

    /// Accumulation left the `i64` range
    #[error("число выходит за допустимый диапазон на слове '{word}'")]
    Overflow { word: String },

    /// A configured limit was exceeded
    #[error("превышен предел {limit_name}: {actual} при допустимых {limit}")]
    ResourceLimitExceeded {
        limit_name: &'static str,
        limit: usize,
        actual: usize,
    },
}

use crate::{Converter, Lexicon, Limits, ParsedResult, ValidationOutcome, Validator};

/// The numeral conversion engine.
///
/// Owns the lexicon, built once at construction, and the limits applied to
/// every call. Calls take `&self`, so one engine can serve many threads.
#[derive(Debug, Default)]
pub struct Engine {
    lexicon: Lexicon,
    limits: Limits,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom resource limits
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            lexicon: Lexicon::new(),
            limits,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Get the current resource limits
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn validator(&self) -> Validator<'_> {
        Validator::with_limits(&self.lexicon, self.limits)
    }

    pub fn converter(&self) -> Converter<'_> {
        Converter::with_validator(self.validator())
    }

    /// Convert a phrase. Problems are reported on the result, never raised.
    pub fn convert(&self, phrase: &str) -> ParsedResult {
        self.converter().convert(phrase)
    }

    pub fn validate(&self, phrase: &str) -> ValidationOutcome {
        self.validator().validate(phrase)
    }
}

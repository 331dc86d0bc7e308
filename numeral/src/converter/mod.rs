//! Turns validated numeral phrases into numbers.

mod accumulate;
mod fraction;

pub use accumulate::accumulate;

use crate::issue::ValidationOutcome;
use crate::lexicon::Lexicon;
use crate::limits::Limits;
use crate::response::ParsedResult;
use crate::text;
use crate::validator::Validator;
use crate::vocabulary::{self, NEGATION, WHOLE_STEM};
use crate::NumeralResult;
use fraction::{fraction_value, FractionParts};

/// Structural shape of a normalized phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseKind {
    /// Has a whole marker, a period or a denominator word
    Fractional,
    /// Starts with "минус"
    Negative,
    Integer,
}

/// Classify a normalized phrase. Fractional wins over negative; the
/// fractional path handles its own sign.
pub fn classify(normalized: &str) -> PhraseKind {
    let fractional = normalized.contains('.')
        || normalized
            .split_whitespace()
            .any(|word| word.starts_with(WHOLE_STEM) || vocabulary::is_fraction_marker(word));

    if fractional {
        PhraseKind::Fractional
    } else if normalized.split_whitespace().next() == Some(NEGATION) {
        PhraseKind::Negative
    } else {
        PhraseKind::Integer
    }
}

/// Converts numeral phrases into [`ParsedResult`]s.
///
/// Every phrase is validated first; an invalid phrase yields its issues and no
/// value. Conversion faults are reported on the result, never raised.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    lexicon: &'a Lexicon,
    validator: Validator<'a>,
}

impl<'a> Converter<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::with_validator(Validator::new(lexicon))
    }

    pub fn with_limits(lexicon: &'a Lexicon, limits: Limits) -> Self {
        Self::with_validator(Validator::with_limits(lexicon, limits))
    }

    pub fn with_validator(validator: Validator<'a>) -> Self {
        Self {
            lexicon: validator.lexicon(),
            validator,
        }
    }

    pub fn validate(&self, phrase: &str) -> ValidationOutcome {
        self.validator.validate(phrase)
    }

    pub fn convert(&self, phrase: &str) -> ParsedResult {
        let outcome = self.validator.validate(phrase);
        if !outcome.is_valid() {
            tracing::debug!(
                phrase,
                issues = outcome.issues.len(),
                "rejected phrase"
            );
            return ParsedResult::rejected(phrase, outcome.errors());
        }

        let normalized = text::normalize(phrase);
        let kind = classify(&normalized);
        tracing::trace!(phrase = %normalized, ?kind, "classified phrase");

        let converted = match kind {
            PhraseKind::Fractional => self.convert_fractional(&normalized),
            PhraseKind::Negative => Ok(self.convert_negative(&normalized)),
            PhraseKind::Integer => self.convert_integer(&normalized),
        };

        let mut result = match converted {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(phrase = %normalized, error = %err, "conversion failed");
                ParsedResult::rejected(phrase, vec![format!("Ошибка конвертации: {}", err)])
            }
        };

        result.original_text = phrase.to_string();
        if !result.has_errors {
            result.normalized_text = Some(normalized);
        }
        result
    }

    fn convert_integer(&self, normalized: &str) -> NumeralResult<ParsedResult> {
        let value = accumulate(self.lexicon, normalized.split_whitespace())?;
        Ok(ParsedResult {
            numeric_value: value as f64,
            ..ParsedResult::new(normalized)
        })
    }

    fn convert_fractional(&self, normalized: &str) -> NumeralResult<ParsedResult> {
        let parts = FractionParts::split(normalized);

        let integer = if parts.integer.is_empty() {
            0
        } else {
            accumulate(self.lexicon, parts.integer.split_whitespace())?
        };
        let fraction = fraction_value(self.lexicon, &parts.fraction)?;

        let magnitude = integer as f64 + fraction;
        Ok(ParsedResult {
            numeric_value: if parts.negative { -magnitude } else { magnitude },
            is_negative: parts.negative,
            has_fractional_part: true,
            ..ParsedResult::new(normalized)
        })
    }

    /// Strip the sign and convert the rest through [`Converter::convert`].
    fn convert_negative(&self, normalized: &str) -> ParsedResult {
        let positive = normalized
            .strip_prefix(NEGATION)
            .unwrap_or(normalized)
            .trim_start();

        let mut result = self.convert(positive);
        if !result.has_errors {
            if result.numeric_value != 0.0 {
                result.numeric_value = -result.numeric_value;
            }
            result.is_negative = true;
        }
        result
    }
}

use serde::Serialize;

/// Result of converting one phrase.
///
/// Created fresh per call. When `has_errors` is set, `numeric_value` is 0 and
/// `error_messages` lists every problem in the order it was found.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedResult {
    pub numeric_value: f64,
    /// The phrase as received
    pub original_text: String,
    /// The phrase after normalization, present once validation passed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_text: Option<String>,
    pub has_errors: bool,
    pub error_messages: Vec<String>,
    pub is_negative: bool,
    pub has_fractional_part: bool,
}

impl ParsedResult {
    pub(crate) fn new(original_text: &str) -> Self {
        Self {
            original_text: original_text.to_string(),
            ..Self::default()
        }
    }

    pub(crate) fn rejected(original_text: &str, errors: Vec<String>) -> Self {
        Self {
            has_errors: true,
            error_messages: errors,
            ..Self::new(original_text)
        }
    }

    /// The value as an integer when it has no fractional part and fits.
    pub fn as_integer(&self) -> Option<i64> {
        if self.has_errors || self.numeric_value.fract() != 0.0 {
            return None;
        }
        let value = self.numeric_value;
        (value >= i64::MIN as f64 && value <= i64::MAX as f64).then(|| value as i64)
    }
}

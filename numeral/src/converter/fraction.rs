use super::accumulate::accumulate;
use crate::lexicon::Lexicon;
use crate::vocabulary::{self, NEGATION};
use crate::NumeralResult;

/// A fractional phrase cut into its sign, integer part and fractional part
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FractionParts {
    pub negative: bool,
    pub integer: String,
    pub fraction: String,
}

impl FractionParts {
    /// Split a normalized phrase at the first whole marker, else at the first
    /// period. Without either, the whole phrase is the fractional part
    /// ("пять десятых").
    pub fn split(normalized: &str) -> Self {
        let (negative, rest) = match normalized.strip_prefix(NEGATION) {
            // "минус. пять" and "минус,пять" carry the sign too
            Some(rest) if rest.is_empty() || rest.starts_with([' ', '.']) => {
                (true, rest.trim_start())
            }
            _ => (false, normalized),
        };

        let words: Vec<&str> = rest.split_whitespace().collect();
        let (integer, fraction) =
            if let Some(marker) = words.iter().position(|w| vocabulary::is_whole_marker(w)) {
                (words[..marker].join(" "), words[marker + 1..].join(" "))
            } else if let Some((integer, fraction)) = rest.split_once('.') {
                (integer.trim().to_string(), fraction.trim().to_string())
            } else {
                (String::new(), rest.trim().to_string())
            };

        Self {
            negative,
            integer,
            fraction,
        }
    }
}

/// Value of the part after the whole marker or period.
///
/// A lone numeral word is scaled by ten to the power of its length in
/// characters ("пять" -> 0.0005). This is an approximation of a digit count,
/// not a decimal-place computation. Otherwise the numerator is read up to the
/// denominator word ("двадцать пять сотых" -> 0.25); without a denominator
/// word the first numeral doubles as the denominator.
pub(super) fn fraction_value(lexicon: &Lexicon, fraction: &str) -> NumeralResult<f64> {
    let fraction = fraction.trim();
    if fraction.is_empty() {
        return Ok(0.0);
    }

    if let Some(entry) = lexicon.lookup(fraction) {
        let length = fraction.chars().count() as i32;
        return Ok(entry.value as f64 / 10f64.powi(length));
    }

    let words: Vec<&str> = fraction.split_whitespace().collect();
    if words.len() < 2 {
        return Ok(0.0);
    }

    if let Some(marker) = words.iter().position(|w| vocabulary::is_fraction_marker(w)) {
        let numerator = accumulate(lexicon, words[..marker].iter().copied())?;
        let denominator = vocabulary::denominator_of(words[marker]).unwrap_or(1);
        return Ok(numerator as f64 / denominator as f64);
    }

    let numerator = lexicon.value_of(words[0]).unwrap_or(0);
    let denominator = words
        .iter()
        .filter_map(|w| lexicon.value_of(w))
        .find(|value| *value != 0)
        .unwrap_or(1);
    Ok(numerator as f64 / denominator as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_whole_marker() {
        let parts = FractionParts::split("минус две целых пять десятых");
        assert!(parts.negative);
        assert_eq!(parts.integer, "две");
        assert_eq!(parts.fraction, "пять десятых");
    }

    #[test]
    fn splits_at_period() {
        let parts = FractionParts::split("двадцать три. пять");
        assert!(!parts.negative);
        assert_eq!(parts.integer, "двадцать три");
        assert_eq!(parts.fraction, "пять");
    }

    #[test]
    fn sign_directly_before_period() {
        let parts = FractionParts::split("минус. пять десятых");
        assert!(parts.negative);
        assert_eq!(parts.integer, "");
        assert_eq!(parts.fraction, "пять десятых");

        let parts = FractionParts::split("минус.пять");
        assert!(parts.negative);
        assert_eq!(parts.fraction, "пять");
    }

    #[test]
    fn no_delimiter_means_fraction_only() {
        let parts = FractionParts::split("пять десятых");
        assert_eq!(parts.integer, "");
        assert_eq!(parts.fraction, "пять десятых");
    }

    #[test]
    fn lone_word_uses_length_heuristic() {
        let lexicon = Lexicon::new();
        let value = fraction_value(&lexicon, "пять").unwrap();
        assert!((value - 0.0005).abs() < 1e-12);
        let value = fraction_value(&lexicon, "три").unwrap();
        assert!((value - 0.003).abs() < 1e-12);
    }

    #[test]
    fn denominator_words() {
        let lexicon = Lexicon::new();
        let cases = [
            ("пять десятых", 0.5),
            ("двадцать пять сотых", 0.25),
            ("одна тысячная", 0.001),
            ("три десятитысячных", 0.0003),
            ("семь миллионных", 0.000007),
        ];
        for (fraction, expected) in cases {
            let value = fraction_value(&lexicon, fraction).unwrap();
            assert!((value - expected).abs() < 1e-12, "{fraction}: {value}");
        }
    }

    #[test]
    fn falls_back_to_first_numeral_as_denominator() {
        let lexicon = Lexicon::new();
        assert_eq!(fraction_value(&lexicon, "два четыре").unwrap(), 1.0);
        assert_eq!(fraction_value(&lexicon, "ноль пять").unwrap(), 0.0);
        assert_eq!(fraction_value(&lexicon, "десятых").unwrap(), 0.0);
    }
}

//! Words that can appear in a numeral phrase without being numerals.

/// Conjunction allowed between numerals ("сто и пять").
pub const CONJUNCTION: &str = "и";

/// Negation marker; only valid as the first word of a phrase.
pub const NEGATION: &str = "минус";

/// Separates the integer part from the fractional part.
pub const WHOLE_MARKERS: &[&str] = &["целых", "целая", "целое"];

/// Every whole marker starts with this stem.
pub const WHOLE_STEM: &str = "цел";

/// Denominator words, plural and singular.
pub const FRACTION_MARKERS: &[&str] = &[
    "десятых",
    "сотых",
    "тысячных",
    "десятитысячных",
    "стотысячных",
    "миллионных",
    "десятая",
    "сотая",
    "тысячная",
    "десятитысячная",
    "стотысячная",
    "миллионная",
];

pub const PREPOSITIONS: &[&str] = &["о", "об", "во"];

/// Denominator stems, longest first so that "десятитысячных" is not read as
/// "десятых".
pub const DENOMINATOR_STEMS: &[(&str, i64)] = &[
    ("десятитысячн", 10_000),
    ("стотысячн", 100_000),
    ("миллионн", 1_000_000),
    ("тысячн", 1_000),
    ("сот", 100),
    ("десят", 10),
];

pub fn is_whole_marker(word: &str) -> bool {
    WHOLE_MARKERS.contains(&word)
}

pub fn is_fraction_marker(word: &str) -> bool {
    FRACTION_MARKERS.contains(&word)
}

pub fn is_preposition(word: &str) -> bool {
    PREPOSITIONS.contains(&word)
}

/// Words skipped by the per-token lexicon check.
pub fn is_service_word(word: &str) -> bool {
    word == CONJUNCTION
        || word == NEGATION
        || is_whole_marker(word)
        || is_fraction_marker(word)
        || is_preposition(word)
}

/// Denominator named by a fraction marker ("сотых" -> 100).
pub fn denominator_of(marker: &str) -> Option<i64> {
    DENOMINATOR_STEMS
        .iter()
        .find(|(stem, _)| marker.contains(stem))
        .map(|(_, denominator)| *denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longer_stems_win() {
        assert_eq!(denominator_of("десятых"), Some(10));
        assert_eq!(denominator_of("десятитысячных"), Some(10_000));
        assert_eq!(denominator_of("стотысячная"), Some(100_000));
        assert_eq!(denominator_of("тысячных"), Some(1_000));
        assert_eq!(denominator_of("сотых"), Some(100));
        assert_eq!(denominator_of("миллионных"), Some(1_000_000));
        assert_eq!(denominator_of("пять"), None);
    }

    #[test]
    fn every_fraction_marker_has_a_denominator() {
        for marker in FRACTION_MARKERS {
            assert!(denominator_of(marker).is_some(), "{marker}");
        }
    }

    #[test]
    fn service_words() {
        assert!(is_service_word("и"));
        assert!(is_service_word("минус"));
        assert!(is_service_word("целых"));
        assert!(is_service_word("об"));
        assert!(!is_service_word("пять"));
    }
}

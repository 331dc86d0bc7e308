//! Text clean-up shared by the validator and the converter.

use crate::vocabulary::CONJUNCTION;
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^а-яё\s\-,.]").expect("character class is valid"));

static STANDALONE_CONJUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b{}\b", CONJUNCTION)).expect("conjunction pattern is valid")
});

/// Lowercase, trim and collapse runs of whitespace into single spaces.
pub fn fold(phrase: &str) -> String {
    WHITESPACE
        .replace_all(phrase.trim(), " ")
        .to_lowercase()
}

/// Full normalization applied before conversion: [`fold`], decimal comma to
/// period, and removal of the standalone conjunction.
///
/// Idempotent: normalizing a normalized phrase returns it unchanged.
pub fn normalize(phrase: &str) -> String {
    let folded = fold(phrase).replace(',', ".");
    let without_conjunction = STANDALONE_CONJUNCTION.replace_all(&folded, " ");
    WHITESPACE
        .replace_all(without_conjunction.trim(), " ")
        .into_owned()
}

/// Characters outside Cyrillic letters, whitespace, hyphen, comma and period,
/// with their byte offsets. Expects folded (lowercase) text.
pub fn disallowed_characters(folded: &str) -> Vec<(usize, char)> {
    DISALLOWED
        .find_iter(folded)
        .filter_map(|found| found.as_str().chars().next().map(|c| (found.start(), c)))
        .collect()
}

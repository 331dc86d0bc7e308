use crate::error::NumeralError;
use crate::grammar::{GrammaticalCase, GrammaticalNumber};
use crate::issue::{IssueKind, ValidationIssue, ValidationOutcome};
use crate::lexicon::{Lexicon, Reading};
use crate::limits::Limits;
use crate::text;
use crate::tokenizer::{tokenize, Token, TokenKind};
use crate::vocabulary::{self, CONJUNCTION, NEGATION};

/// Grammatical validator for numeral phrases.
///
/// Runs every check and collects all issues in one pass so a caller can show
/// a complete diagnostic list. Only input errors (empty or oversized input)
/// stop validation early.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    lexicon: &'a Lexicon,
    limits: Limits,
}

impl<'a> Validator<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::with_limits(lexicon, Limits::default())
    }

    pub fn with_limits(lexicon: &'a Lexicon, limits: Limits) -> Self {
        Self { lexicon, limits }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn validate(&self, phrase: &str) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::default();

        if phrase.trim().is_empty() {
            outcome.push(ValidationIssue::new(
                IssueKind::EmptyInput,
                "Входная строка пустая",
            ));
            return outcome;
        }

        if phrase.len() > self.limits.max_phrase_bytes {
            outcome.push(limit_issue(
                "max_phrase_bytes",
                self.limits.max_phrase_bytes,
                phrase.len(),
            ));
            return outcome;
        }

        let folded = text::fold(phrase);
        self.run_checks(&folded, &mut outcome);
        outcome.normalized = folded;

        tracing::debug!(
            phrase = %outcome.normalized,
            issues = outcome.issues.len(),
            "validated phrase"
        );
        outcome
    }

    fn run_checks(&self, folded: &str, outcome: &mut ValidationOutcome) {
        self.check_characters(folded, outcome);

        let tokens = match tokenize(folded) {
            Ok(tokens) => tokens,
            Err(err) => {
                outcome.push(ValidationIssue::new(
                    IssueKind::InvalidCharacters,
                    err.to_string(),
                ));
                return;
            }
        };

        if tokens.len() > self.limits.max_tokens {
            outcome.push(limit_issue(
                "max_tokens",
                self.limits.max_tokens,
                tokens.len(),
            ));
            return;
        }

        self.check_vocabulary(&tokens, outcome);
        self.check_placement(&tokens, outcome);

        // the conjunction is dropped before conversion, so the structural
        // checks look through it: "пять и тысяча" is checked as "пять тысяча"
        let tokens: Vec<Token<'_>> = tokens
            .into_iter()
            .filter(|token| !(token.is_word() && token.text == CONJUNCTION))
            .collect();

        for segment in tokens.split(|token| is_part_delimiter(token)) {
            self.check_order(segment, outcome);
        }
        self.check_agreement(&tokens, outcome);
        self.check_prepositions(&tokens, outcome);
    }

    fn check_characters(&self, folded: &str, outcome: &mut ValidationOutcome) {
        let found = text::disallowed_characters(folded);
        let Some(&(offset, first)) = found.first() else {
            return;
        };

        let mut listed: Vec<char> = Vec::new();
        for (_, c) in &found {
            if !listed.contains(c) {
                listed.push(*c);
            }
        }
        let listed = listed
            .iter()
            .map(|c| format!("'{}'", c))
            .collect::<Vec<_>>()
            .join(", ");

        outcome.push(ValidationIssue::at(
            IssueKind::InvalidCharacters,
            format!("Строка содержит недопустимые символы: {}", listed),
            crate::Span {
                start: offset,
                end: offset + first.len_utf8(),
            },
        ));
    }

    /// Every word outside the service vocabulary must be a known numeral;
    /// hyphenated words are checked part by part.
    fn check_vocabulary(&self, tokens: &[Token<'_>], outcome: &mut ValidationOutcome) {
        for token in tokens.iter().filter(|token| token.is_word()) {
            if vocabulary::is_service_word(token.text) {
                continue;
            }

            if token.is_hyphenated() {
                for (part, span) in token.parts() {
                    if !self.lexicon.is_numeral(part) {
                        outcome.push(ValidationIssue::at(
                            IssueKind::UnknownWordPart,
                            format!(
                                "Часть '{}' в слове '{}' не является числительным",
                                part, token.text
                            ),
                            span,
                        ));
                    }
                }
            } else if !self.lexicon.is_numeral(token.text) {
                outcome.push(ValidationIssue::at(
                    IssueKind::UnknownWord,
                    format!("Слово '{}' не является числительным", token.text),
                    token.span,
                ));
            }
        }
    }

    /// Sign first, at most one split between whole and fractional parts, and
    /// at least one numeral somewhere.
    fn check_placement(&self, tokens: &[Token<'_>], outcome: &mut ValidationOutcome) {
        for (position, token) in tokens.iter().enumerate() {
            if token.is_word() && token.text == NEGATION && position != 0 {
                outcome.push(ValidationIssue::at(
                    IssueKind::MisplacedSign,
                    format!("Слово '{}' допустимо только в начале числа", NEGATION),
                    token.span,
                ));
            }
        }

        for token in tokens
            .iter()
            .filter(|token| is_part_delimiter(token))
            .skip(1)
        {
            outcome.push(ValidationIssue::at(
                IssueKind::MisplacedFraction,
                format!(
                    "Целая и дробная части уже разделены, лишнее '{}'",
                    token.text
                ),
                token.span,
            ));
        }

        let only_service_words = tokens
            .iter()
            .filter(|token| token.is_word())
            .all(|token| vocabulary::is_service_word(token.text));
        if only_service_words {
            outcome.push(ValidationIssue::new(
                IssueKind::NoNumerals,
                "Фраза не содержит числительных",
            ));
        }
    }

    /// Multipliers within one part of the number must descend ("тысяча
    /// миллион" is wrong), and each one after the first needs its own
    /// quantifier ("миллион тысяча" is wrong, "миллион одна тысяча" is not).
    fn check_order(&self, segment: &[Token<'_>], outcome: &mut ValidationOutcome) {
        let numerals: Vec<_> = segment
            .iter()
            .filter(|token| token.is_word() && !vocabulary::is_service_word(token.text))
            .filter_map(|token| self.lexicon.lookup(token.text).map(|entry| (token, entry)))
            .collect();

        for pair in numerals.windows(2) {
            let (_, current) = pair[0];
            let (next_token, next) = pair[1];
            if current.is_multiplier() && next.is_multiplier() && current.value >= next.value {
                outcome.push(ValidationIssue::at(
                    IssueKind::MultiplierOrder,
                    format!(
                        "Неправильный порядок: между '{}' и '{}' пропущено числительное",
                        current.canonical_form, next.canonical_form
                    ),
                    next_token.span,
                ));
            }
        }

        let multipliers: Vec<_> = numerals
            .iter()
            .filter(|(_, entry)| entry.is_multiplier())
            .collect();

        for pair in multipliers.windows(2) {
            let (_, current) = pair[0];
            let (next_token, next) = pair[1];
            if current.value < next.value {
                outcome.push(ValidationIssue::at(
                    IssueKind::MultiplierOrder,
                    format!(
                        "Неправильный порядок: '{}' не может идти перед '{}'",
                        current.canonical_form, next.canonical_form
                    ),
                    next_token.span,
                ));
            }
        }
    }

    /// Number and gender agreement between a multiplier and the numeral
    /// right before it.
    fn check_agreement(&self, tokens: &[Token<'_>], outcome: &mut ValidationOutcome) {
        for pair in tokens.windows(2) {
            let (quantifier, multiplier) = (&pair[0], &pair[1]);
            if !quantifier.is_word()
                || !multiplier.is_word()
                || vocabulary::is_service_word(quantifier.text)
            {
                continue;
            }

            let multiplier_readings: Vec<Reading<'_>> = self
                .lexicon
                .readings(multiplier.text)
                .into_iter()
                .filter(|reading| reading.entry.is_multiplier())
                .collect();
            let quantifier_readings: Vec<Reading<'_>> = self
                .lexicon
                .readings(quantifier.text)
                .into_iter()
                .filter(|reading| !reading.entry.is_multiplier())
                .collect();

            if multiplier_readings.is_empty() || quantifier_readings.is_empty() {
                continue;
            }

            self.check_number(
                quantifier,
                &quantifier_readings,
                multiplier,
                &multiplier_readings,
                outcome,
            );
            self.check_gender(
                quantifier,
                &quantifier_readings,
                multiplier,
                &multiplier_readings,
                outcome,
            );
        }
    }

    fn check_number(
        &self,
        quantifier: &Token<'_>,
        quantifier_readings: &[Reading<'_>],
        multiplier: &Token<'_>,
        multiplier_readings: &[Reading<'_>],
        outcome: &mut ValidationOutcome,
    ) {
        let value = quantifier_readings[0].entry.value;
        let governed = GrammaticalNumber::governed_by(value);

        let agrees = quantifier_readings.iter().any(|q| {
            multiplier_readings
                .iter()
                .any(|m| m.case == q.case && number_matches(q.case, governed, m.number))
        });
        if agrees {
            return;
        }

        let entry = multiplier_readings[0].entry;
        let message = match quantifier_readings.iter().find(|q| q.case.is_direct()) {
            Some(direct) => {
                let expected = entry
                    .form_for(direct.case, Some(governed))
                    .unwrap_or(entry.canonical_form);
                format!(
                    "С числом {} должно быть '{}', а не '{}'",
                    value, expected, multiplier.text
                )
            }
            None => {
                let case = quantifier_readings[0].case;
                let number = if governed.is_plural() {
                    GrammaticalNumber::Many
                } else {
                    GrammaticalNumber::Singular
                };
                let expected = entry
                    .form_for(case, Some(number))
                    .unwrap_or(entry.canonical_form);
                format!(
                    "После '{}' ожидается '{}' ({} падеж), а не '{}'",
                    quantifier.text, expected, case, multiplier.text
                )
            }
        };

        outcome.push(ValidationIssue::at(
            IssueKind::NumberAgreement,
            message,
            multiplier.span,
        ));
    }

    fn check_gender(
        &self,
        quantifier: &Token<'_>,
        quantifier_readings: &[Reading<'_>],
        multiplier: &Token<'_>,
        multiplier_readings: &[Reading<'_>],
        outcome: &mut ValidationOutcome,
    ) {
        let Some(gender) = multiplier_readings[0].entry.gender else {
            return;
        };
        let gendered = quantifier_readings
            .iter()
            .any(|reading| reading.entry.gender.is_some());
        if !gendered
            || quantifier_readings
                .iter()
                .any(|reading| reading.entry.gender == Some(gender))
        {
            return;
        }

        let first = quantifier_readings[0];
        let expected = self
            .lexicon
            .entries()
            .iter()
            .find(|entry| {
                entry.value == first.entry.value
                    && entry.gender == Some(gender)
                    && !entry.is_multiplier()
            })
            .and_then(|entry| entry.form_for(first.case, None));

        let mut message = format!(
            "Род не согласован: '{}' не сочетается с '{}' ({} род)",
            quantifier.text, multiplier.text, gender
        );
        if let Some(expected) = expected {
            message.push_str(&format!(", нужно '{}'", expected));
        }

        outcome.push(ValidationIssue::at(
            IssueKind::GenderAgreement,
            message,
            quantifier.span,
        ));
    }

    /// Numerals right after "о", "об" or "во" must be in the prepositional
    /// case ("во" also takes the accusative).
    fn check_prepositions(&self, tokens: &[Token<'_>], outcome: &mut ValidationOutcome) {
        for (position, token) in tokens.iter().enumerate() {
            if !token.is_word() || !vocabulary::is_preposition(token.text) {
                continue;
            }

            let governed = tokens[position + 1..]
                .iter()
                .take_while(|next| next.is_word() && !vocabulary::is_service_word(next.text));

            let mut numerals = 0;
            for next in governed {
                for (part, span) in next.parts() {
                    let readings = self.lexicon.readings(part);
                    if readings.is_empty() {
                        continue;
                    }
                    numerals += 1;

                    let accepted = readings.iter().any(|reading| {
                        reading.case == GrammaticalCase::Prepositional
                            || (token.text == "во" && reading.case == GrammaticalCase::Accusative)
                    });
                    if accepted {
                        continue;
                    }

                    let mut message = format!(
                        "После предлога '{}' слово '{}' должно стоять в предложном падеже",
                        token.text, part
                    );
                    if let Some(expected) = self
                        .lexicon
                        .forms_for(part, GrammaticalCase::Prepositional)
                        .first()
                    {
                        message.push_str(&format!(": '{}'", expected));
                    }
                    outcome.push(ValidationIssue::at(
                        IssueKind::CaseAgreement,
                        message,
                        span,
                    ));
                }
            }

            if numerals == 0 {
                outcome.push(ValidationIssue::at(
                    IssueKind::CaseAgreement,
                    format!("После предлога '{}' ожидается числительное", token.text),
                    token.span,
                ));
            }
        }
    }
}

/// Whole markers and decimal separators divide the integer part from the
/// fractional part.
fn is_part_delimiter(token: &Token<'_>) -> bool {
    match token.kind {
        TokenKind::DecimalPoint => true,
        TokenKind::Word => vocabulary::is_whole_marker(token.text),
    }
}

fn number_matches(
    case: GrammaticalCase,
    governed: GrammaticalNumber,
    number: Option<GrammaticalNumber>,
) -> bool {
    match number {
        None => false,
        // in direct cases the quantifier selects the exact form
        Some(number) if case.is_direct() => number == governed,
        // in oblique cases few and many share their forms
        Some(number) => number.is_plural() == governed.is_plural(),
    }
}

fn limit_issue(limit_name: &'static str, limit: usize, actual: usize) -> ValidationIssue {
    let err = NumeralError::ResourceLimitExceeded {
        limit_name,
        limit,
        actual,
    };
    ValidationIssue::new(IssueKind::LimitExceeded, format!("Слишком длинная фраза: {}", err))
}

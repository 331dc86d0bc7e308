use crate::tokenizer::Span;
use serde::Serialize;
use std::fmt;

/// What kind of problem a validation issue describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    EmptyInput,
    LimitExceeded,
    InvalidCharacters,
    UnknownWord,
    UnknownWordPart,
    MultiplierOrder,
    NumberAgreement,
    GenderAgreement,
    CaseAgreement,
    MisplacedSign,
    MisplacedFraction,
    NoNumerals,
}

impl IssueKind {
    /// Input errors stop validation; every other kind is collected.
    pub fn is_input_error(&self) -> bool {
        matches!(self, IssueKind::EmptyInput | IssueKind::LimitExceeded)
    }

    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            IssueKind::InvalidCharacters | IssueKind::UnknownWord | IssueKind::UnknownWordPart
        )
    }

    pub fn is_grammatical(&self) -> bool {
        !self.is_input_error() && !self.is_lexical()
    }
}

/// A single problem found in a phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub message: String,
    /// Location in [`ValidationOutcome::normalized`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl ValidationIssue {
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            span: None,
        }
    }

    pub fn at(kind: IssueKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span: Some(span),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Verdict of the validator: every issue found, in the order the checks ran.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationOutcome {
    /// The phrase after case folding and whitespace collapsing
    pub normalized: String,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Human-readable messages, one per issue
    pub fn errors(&self) -> Vec<String> {
        self.issues.iter().map(|issue| issue.message.clone()).collect()
    }

    pub fn has(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|issue| issue.kind == kind)
    }

    pub(crate) fn push(&mut self, issue: ValidationIssue) {
        tracing::trace!(kind = ?issue.kind, message = %issue.message, "validation issue");
        self.issues.push(issue);
    }
}

//! Splits a folded phrase into words and decimal separators.

use crate::error::NumeralError;
use crate::NumeralResult;
use pest::Parser;
use pest_derive::Parser;
use serde::Serialize;

#[derive(Parser)]
#[grammar = "src/tokenizer/phrase.pest"]
struct PhraseParser;

/// Byte range of a token inside the text it was cut from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn from_pest_span(span: pest::Span) -> Self {
        Self {
            start: span.start(),
            end: span.end(),
        }
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    /// A standalone comma or period
    DecimalPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn is_hyphenated(&self) -> bool {
        self.is_word() && self.text.contains('-')
    }

    /// Hyphen-separated parts with their own spans. A word without hyphens is
    /// its own single part; empty parts ("-пять") are kept so they can be
    /// reported.
    pub fn parts(&self) -> Vec<(&'a str, Span)> {
        let mut start = self.span.start;
        self.text
            .split('-')
            .map(|part| {
                let span = Span {
                    start,
                    end: start + part.len(),
                };
                start = span.end + 1;
                (part, span)
            })
            .collect()
    }
}

/// Tokenize folded text (see [`crate::text::fold`]).
pub fn tokenize(folded: &str) -> NumeralResult<Vec<Token<'_>>> {
    let pairs = PhraseParser::parse(Rule::phrase, folded)
        .map_err(|e| NumeralError::Tokenize(e.variant.to_string()))?;

    let mut tokens = Vec::new();
    for pair in pairs {
        if pair.as_rule() != Rule::phrase {
            continue;
        }
        for inner in pair.into_inner() {
            let kind = match inner.as_rule() {
                Rule::word => TokenKind::Word,
                Rule::decimal_point => TokenKind::DecimalPoint,
                _ => continue,
            };
            tokens.push(Token {
                text: inner.as_str(),
                kind,
                span: Span::from_pest_span(inner.as_span()),
            });
        }
    }

    Ok(tokens)
}

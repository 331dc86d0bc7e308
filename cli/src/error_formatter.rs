use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use numeral::{Span, ValidationOutcome};
use std::io::IsTerminal;

const SOURCE_ID: &str = "фраза";

/// Format validation issues with fancy terminal output using Ariadne.
///
/// Issues with a location become labels on the normalized phrase; the rest are
/// listed as notes.
pub fn format_outcome(outcome: &ValidationOutcome) -> String {
    let located: Vec<_> = outcome
        .issues
        .iter()
        .filter_map(|issue| issue.span.map(|span| (issue, span)))
        .collect();

    if located.is_empty() {
        return format_plain(outcome);
    }

    let text = outcome.normalized.as_str();
    let offset = char_offset(text, located[0].1.start);
    let mut report = Report::build(ReportKind::Error, SOURCE_ID, offset)
        .with_config(Config::default().with_color(std::io::stderr().is_terminal()))
        .with_message(format!("Ошибок в числе: {}", outcome.issues.len()));

    for (issue, span) in &located {
        report = report.with_label(
            Label::new((SOURCE_ID, char_range(text, *span)))
                .with_message(&issue.message)
                .with_color(Color::Red),
        );
    }

    let unlocated: Vec<&str> = outcome
        .issues
        .iter()
        .filter(|issue| issue.span.is_none())
        .map(|issue| issue.message.as_str())
        .collect();
    if !unlocated.is_empty() {
        report = report.with_note(unlocated.join("\n"));
    }

    let mut output = Vec::new();
    match report
        .finish()
        .write((SOURCE_ID, Source::from(text)), &mut output)
    {
        Ok(_) => String::from_utf8_lossy(&output).to_string(),
        // Fallback to simple format
        Err(_) => format_plain(outcome),
    }
}

fn format_plain(outcome: &ValidationOutcome) -> String {
    let mut output = String::from("Обнаружены ошибки:\n");
    for issue in &outcome.issues {
        output.push_str(&format!("  • {}\n", issue));
    }
    output
}

// Ariadne counts characters, issue spans count bytes.
fn char_offset(text: &str, byte: usize) -> usize {
    text.get(..byte)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(0)
}

fn char_range(text: &str, span: Span) -> std::ops::Range<usize> {
    char_offset(text, span.start)..char_offset(text, span.end)
}

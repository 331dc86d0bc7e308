use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use numeral::{GrammaticalCase, NumeralEntry, ParsedResult, Reading};

/// Display form of a converted value: integers without a fractional tail.
pub fn format_number(result: &ParsedResult) -> String {
    match result.as_integer() {
        Some(value) => value.to_string(),
        None => result.numeric_value.to_string(),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "да"
    } else {
        "нет"
    }
}

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn format_result(&self, result: &ParsedResult) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.add_row(Row::from(vec!["Текст", result.original_text.as_str()]));

        if result.has_errors {
            let errors = result
                .error_messages
                .iter()
                .map(|message| format!("• {}", message))
                .collect::<Vec<_>>()
                .join("\n");
            table.add_row(Row::from(vec![Cell::new("Ошибки"), Cell::new(errors)]));
        } else {
            if let Some(normalized) = &result.normalized_text {
                table.add_row(Row::from(vec!["Нормализовано", normalized.as_str()]));
            }
            table.add_row(Row::from(vec![
                Cell::new("Число"),
                Cell::new(format_number(result)).set_alignment(CellAlignment::Right),
            ]));
            table.add_row(Row::from(vec!["Отрицательное", yes_no(result.is_negative)]));
            table.add_row(Row::from(vec!["Дробное", yes_no(result.has_fractional_part)]));
        }

        format!("{}\n", table)
    }

    /// Every entry, or every entry's forms in one case
    pub fn format_lexicon(&self, entries: &[NumeralEntry], case: Option<GrammaticalCase>) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);

        match case {
            Some(case) => {
                table.set_header(Row::from(vec![
                    Cell::new("Числительное").set_alignment(CellAlignment::Left),
                    Cell::new(format!("{} падеж", case)).set_alignment(CellAlignment::Left),
                ]));
                for entry in entries {
                    table.add_row(Row::from(vec![
                        entry.canonical_form.to_string(),
                        entry.forms_in(case).join(", "),
                    ]));
                }
            }
            None => {
                table.set_header(Row::from(vec![
                    Cell::new("Числительное").set_alignment(CellAlignment::Left),
                    Cell::new("Значение").set_alignment(CellAlignment::Right),
                    Cell::new("Класс").set_alignment(CellAlignment::Left),
                    Cell::new("Род").set_alignment(CellAlignment::Left),
                ]));
                for entry in entries {
                    table.add_row(Row::from(vec![
                        Cell::new(entry.canonical_form),
                        Cell::new(entry.value).set_alignment(CellAlignment::Right),
                        Cell::new(entry.class),
                        Cell::new(entry.gender.map(|g| g.name()).unwrap_or("-")),
                    ]));
                }
            }
        }

        format!("{}\n", table)
    }

    pub fn format_readings(&self, word: &str, readings: &[Reading<'_>]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new(word).set_alignment(CellAlignment::Left),
            Cell::new("Значение").set_alignment(CellAlignment::Right),
            Cell::new("Падеж").set_alignment(CellAlignment::Left),
            Cell::new("Число").set_alignment(CellAlignment::Left),
        ]));

        for reading in readings {
            let number = match reading.number {
                Some(numeral::GrammaticalNumber::Singular) => "ед.",
                Some(numeral::GrammaticalNumber::Few) => "мн. (2–4)",
                Some(numeral::GrammaticalNumber::Many) => "мн.",
                None => "",
            };
            table.add_row(Row::from(vec![
                Cell::new(reading.entry.canonical_form),
                Cell::new(reading.entry.value).set_alignment(CellAlignment::Right),
                Cell::new(reading.case),
                Cell::new(number),
            ]));
        }

        format!("{}\n", table)
    }
}

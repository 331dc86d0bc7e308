use crate::formatter;
use anyhow::{Context, Result};
use crossterm::style::Stylize;
use inquire::{InquireError, Text};
use numeral::{Engine, ParsedResult};

const EXIT_COMMAND: &str = "exit";

fn print_banner() {
    println!("{}", "Конвертер слов в числа".bold());
    println!("Поддерживаемые функции:");
    println!("1. Целые числа (один, двадцать три, сто пять)");
    println!("2. Большие числа (тысяча, миллион, миллиард)");
    println!("3. Дробные числа (две целых пять десятых)");
    println!("4. Отрицательные числа (минус пять)");
    println!("5. Падежи (двух тысяч, трёмстам)");
    println!("Для выхода введите '{}'", EXIT_COMMAND);
    println!("{}", "-".repeat(50));
}

/// Read phrases until "exit" or Ctrl-C and print each conversion.
pub fn run_repl(engine: &Engine) -> Result<()> {
    print_banner();

    loop {
        let input = match Text::new("Введите число словами:")
            .with_help_message("Например: двадцать три, минус пять")
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read phrase"),
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input.to_lowercase() == EXIT_COMMAND {
            break;
        }

        print_result(&engine.convert(input));
        println!("{}", "-".repeat(30));
    }

    println!("\nСпасибо за использование программы!");
    Ok(())
}

fn print_result(result: &ParsedResult) {
    println!("\nРезультат:");
    println!("Текст: {}", result.original_text);

    if result.has_errors {
        println!("{}", "Обнаружены ошибки:".red());
        for message in &result.error_messages {
            println!("{}", format!("  • {}", message).red());
        }
        return;
    }

    println!(
        "{}",
        format!("Число: {}", formatter::format_number(result)).green()
    );
    if result.is_negative {
        println!("{}", "Отрицательное число".green());
    }
    if result.has_fractional_part {
        println!("{}", "Дробное число".green());
    }
}

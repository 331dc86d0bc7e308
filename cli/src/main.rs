mod error_formatter;
mod formatter;
mod interactive;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use formatter::Formatter;
use numeral::{Engine, GrammaticalCase, Limits};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "numeral")]
#[command(about = "Turns Russian numeral phrases into numbers.")]
#[command(
    long_about = "Converts Russian numeral phrases (\"две целых пять десятых\", \"минус сто двадцать три\") into numbers.\nThe CLI converts or validates a single phrase, runs an interactive loop, or browses the numeral lexicon."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Maximum phrase length in bytes
    #[arg(long, global = true, default_value_t = Limits::default().max_phrase_bytes)]
    max_bytes: usize,
    /// Maximum number of tokens in a phrase
    #[arg(long, global = true, default_value_t = Limits::default().max_tokens)]
    max_tokens: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a numeral phrase into a number
    ///
    /// Validates the phrase first and lists every problem when it is not a
    /// well-formed numeral. Exits with status 1 in that case.
    ///
    /// Examples:
    ///   numeral convert сто двадцать три
    ///   numeral convert минус две целых пять десятых
    Convert {
        /// Words of the phrase (quoting the whole phrase works too)
        #[arg(required = true, value_name = "WORDS")]
        words: Vec<String>,
        /// Print the result as JSON
        #[arg(long, conflicts_with = "raw")]
        json: bool,
        /// Output the number only (for piping to other tools)
        #[arg(short = 'r', long)]
        raw: bool,
    },
    /// Check a phrase without converting it
    ///
    /// Prints "OK" for a well-formed phrase, otherwise every problem found,
    /// marked in the phrase. Exits with status 1 when the phrase is invalid.
    Validate {
        /// Words of the phrase
        #[arg(required = true, value_name = "WORDS")]
        words: Vec<String>,
        /// Print the issues as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive conversion loop
    ///
    /// Reads phrases one at a time and prints the result of each. Type
    /// "exit" to quit.
    Repl,
    /// Browse the numeral lexicon
    ///
    /// Without a word, lists every numeral. With a word, shows every reading
    /// of it: which numeral it belongs to, in which case and number.
    Lexicon {
        /// A numeral in any form (e.g. "двух", "тысячами")
        word: Option<String>,
        /// Show the forms in one grammatical case (e.g. genitive, родительный)
        #[arg(short, long)]
        case: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "numeral=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let limits = Limits {
        max_phrase_bytes: cli.max_bytes,
        max_tokens: cli.max_tokens,
    };
    let engine = Engine::with_limits(limits);
    tracing::debug!(?limits, "engine ready");

    let result = match &cli.command {
        Commands::Convert { words, json, raw } => convert_command(&engine, words, *json, *raw),
        Commands::Validate { words, json } => validate_command(&engine, words, *json),
        Commands::Repl => interactive::run_repl(&engine).map(|_| true),
        Commands::Lexicon { word, case, json } => {
            lexicon_command(&engine, word.as_deref(), case.as_deref(), *json)
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Returns whether the phrase converted cleanly.
fn convert_command(engine: &Engine, words: &[String], json: bool, raw: bool) -> Result<bool> {
    let phrase = words.join(" ");
    let result = engine.convert(&phrase);

    if json {
        let output =
            serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{}", output);
    } else if raw {
        if result.has_errors {
            for message in &result.error_messages {
                eprintln!("{}", message);
            }
        } else {
            println!("{}", formatter::format_number(&result));
        }
    } else {
        let formatter = Formatter::default();
        print!("{}", formatter.format_result(&result));
    }

    Ok(!result.has_errors)
}

fn validate_command(engine: &Engine, words: &[String], json: bool) -> Result<bool> {
    let phrase = words.join(" ");
    let outcome = engine.validate(&phrase);

    if json {
        let output =
            serde_json::to_string_pretty(&outcome).context("Failed to serialize issues")?;
        println!("{}", output);
    } else if outcome.is_valid() {
        println!("OK");
    } else {
        eprint!("{}", error_formatter::format_outcome(&outcome));
    }

    Ok(outcome.is_valid())
}

#[derive(Serialize)]
struct ReadingView<'a> {
    canonical_form: &'a str,
    value: i64,
    case: GrammaticalCase,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<numeral::GrammaticalNumber>,
}

fn lexicon_command(
    engine: &Engine,
    word: Option<&str>,
    case: Option<&str>,
    json: bool,
) -> Result<bool> {
    let lexicon = engine.lexicon();
    let case = case
        .map(|name| {
            GrammaticalCase::from_name(name).with_context(|| format!("Unknown case '{}'", name))
        })
        .transpose()?;
    let formatter = Formatter::default();

    let Some(word) = word else {
        if json {
            let output = serde_json::to_string_pretty(lexicon.entries())
                .context("Failed to serialize lexicon")?;
            println!("{}", output);
        } else {
            print!("{}", formatter.format_lexicon(lexicon.entries(), case));
        }
        return Ok(true);
    };

    let readings = lexicon.readings(word);
    if readings.is_empty() {
        eprintln!("Слово '{}' не найдено в словаре", word);
        return Ok(false);
    }

    if let Some(case) = case {
        let forms = lexicon.forms_for(word, case);
        if json {
            let output = serde_json::to_string_pretty(forms).context("Failed to serialize forms")?;
            println!("{}", output);
        } else {
            println!("{}", forms.join(", "));
        }
        return Ok(true);
    }

    if json {
        let views: Vec<ReadingView<'_>> = readings
            .iter()
            .map(|reading| ReadingView {
                canonical_form: reading.entry.canonical_form,
                value: reading.entry.value,
                case: reading.case,
                number: reading.number,
            })
            .collect();
        let output =
            serde_json::to_string_pretty(&views).context("Failed to serialize readings")?;
        println!("{}", output);
    } else {
        print!("{}", formatter.format_readings(word, &readings));
    }

    Ok(true)
}

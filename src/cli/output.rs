use crate::{ConvertResult, NamingConvention};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonResult {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    convention: String,
    total: usize,
    failed: usize,
    results: Vec<JsonResult>,
}

pub fn print_results(
    results: &[ConvertResult],
    convention: NamingConvention,
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text_results(results, colored_output),
        OutputFormat::Json => print_json_results(results, convention),
    }
}

fn print_text_results(results: &[ConvertResult], colored_output: bool) {
    for result in results {
        match (&result.output, &result.words) {
            (Ok(_), Some(words)) => println!("{}", format_words(words, colored_output)),
            (Ok(output), None) => println!("{}", output),
            (Err(message), _) => print_error(&result.input, message, colored_output),
        }
    }
}

fn print_json_results(results: &[ConvertResult], convention: NamingConvention) {
    let json_results: Vec<JsonResult> = results
        .iter()
        .map(|r| JsonResult {
            input: r.input.clone(),
            output: r.output.as_ref().ok().cloned(),
            words: r.words.clone(),
            error: r.output.as_ref().err().cloned(),
        })
        .collect();

    let output = JsonOutput {
        convention: convention.to_string(),
        total: results.len(),
        failed: results.iter().filter(|r| r.is_err()).count(),
        results: json_results,
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("error: failed to serialize results: {}", e),
    }
}

fn format_words(words: &[String], colored: bool) -> String {
    if colored {
        let joined = words
            .iter()
            .map(|w| w.cyan().to_string())
            .collect::<Vec<_>>()
            .join(&", ".dimmed().to_string());
        format!("[{}]", joined)
    } else {
        format!("[{}]", words.join(", "))
    }
}

/// Report a failed input on stderr.
pub fn print_error(input: &str, message: &str, colored: bool) {
    if colored {
        eprintln!("{} {}: {}", "error:".red().bold(), input.yellow(), message);
    } else {
        eprintln!("error: {}: {}", input, message);
    }
}

/// Report a non-fatal problem on stderr.
pub fn print_warning(message: &str, colored: bool) {
    if colored {
        eprintln!("{} {}", "warning:".yellow().bold(), message);
    } else {
        eprintln!("warning: {}", message);
    }
}

pub fn print_summary(total: usize, failed: usize, colored: bool) {
    if failed == 0 {
        return;
    }

    let input_word = if total == 1 { "input" } else { "inputs" };
    if colored {
        eprintln!(
            "{} {} of {} {} failed",
            "✗".red().bold(),
            failed.to_string().red().bold(),
            total,
            input_word
        );
    } else {
        eprintln!("✗ {} of {} {} failed", failed, total, input_word);
    }
}

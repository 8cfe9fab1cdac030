use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::{self, OutputFormat};
use recase::{
    render, CoercionPolicy, Config, ConvertResult, Converter, NamingConvention, RawInput,
};
use std::io::{self, BufRead};

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert identifiers between naming conventions", long_about = None)]
struct Cli {
    /// Identifiers to convert (read from stdin, one per line, when omitted)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target convention (kebab, camel, pascal, snake, screaming-snake, space)
    #[arg(short, long, value_name = "CONVENTION")]
    to: Option<NamingConvention>,

    /// How to treat null and structured input (strict, stringify, empty-on-missing)
    #[arg(short, long)]
    policy: Option<CoercionPolicy>,

    /// Parse each input as a JSON literal (null, 123, [1, 2], {})
    #[arg(long)]
    json: bool,

    /// Print the word sequence instead of the rendered identifier
    #[arg(short, long)]
    words: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs failed
    #[arg(long)]
    no_fail: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    let colored = !cli.no_color;
    let config = Config::load(cli.to, cli.policy)?;
    let converter = Converter::new(&config);

    let inputs = if cli.inputs.is_empty() {
        read_stdin_lines()?
    } else {
        cli.inputs.clone()
    };

    if inputs.is_empty() {
        output::print_warning("no inputs given", colored);
        return Ok(());
    }

    let results: Vec<ConvertResult> = inputs
        .into_iter()
        .map(|input| convert_one(&converter, input, cli.json, cli.words))
        .collect();

    output::print_results(&results, converter.convention(), colored, &cli.format);

    let failed = results.iter().filter(|r| r.is_err()).count();
    if matches!(cli.format, OutputFormat::Text) {
        output::print_summary(results.len(), failed, colored);
    }

    if failed > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn convert_one(converter: &Converter, input: String, json: bool, words: bool) -> ConvertResult {
    let raw = if json {
        match serde_json::from_str::<serde_json::Value>(&input) {
            Ok(value) => RawInput::from(value),
            Err(e) => {
                return ConvertResult {
                    input,
                    output: Err(format!("invalid JSON: {}", e)),
                    words: None,
                }
            }
        }
    } else {
        RawInput::from(input.as_str())
    };

    let word_list = match converter.words(raw) {
        Ok(word_list) => word_list,
        Err(e) => {
            return ConvertResult {
                input,
                output: Err(e.to_string()),
                words: None,
            }
        }
    };

    ConvertResult {
        input,
        output: Ok(render(&word_list, converter.convention())),
        words: words.then(|| word_list.to_strings()),
    }
}

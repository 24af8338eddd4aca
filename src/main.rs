use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use mutpath::config::Config;
use mutpath::file::loader::{load_expressions_file, load_expressions_from_stdin};
use mutpath::path::{self, QuoteStyle};
use mutpath::report::{format_outcome, format_path, OutputFormat};

/// mutpath - parse, format and check mutation path expressions
#[derive(Parser)]
#[command(name = "mutpath")]
#[command(version)]
#[command(about = "Parse, format and check mutation path expressions", long_about = None)]
struct Cli {
    /// Quote style for rendered paths: double or single (default from config)
    #[arg(short, long, global = true)]
    quote: Option<QuoteStyle>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the parsed structure of a path
    Parse {
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Output format: text, yaml or json (default from config)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
    /// Print the canonical form of a path
    Fmt {
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Check one expression per line from a file, or stdin when omitted
    Check { file: Option<String> },
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::load();

    // CLI quote style overrides config quote style
    let options = match cli.quote {
        Some(quote) => path::RenderOptions::with_quote(quote),
        None => config.render_options(),
    };

    match cli.command {
        Command::Parse { expression, format } => {
            let parsed = path::parse(&expression)
                .with_context(|| format!("Invalid path '{}'", expression))?;
            let format = format.unwrap_or(config.output_format);
            print!("{}", format_path(&parsed, format, &options)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Fmt { expression } => {
            let parsed = path::parse(&expression)
                .with_context(|| format!("Invalid path '{}'", expression))?;
            println!("{}", parsed.render_with(&options));
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { file } => {
            let expressions = match file {
                Some(file) => load_expressions_file(&file, &config.comment_prefix)?,
                None => load_expressions_from_stdin(&config.comment_prefix)?,
            };

            let mut failed = 0;
            for expression in &expressions {
                if !expression.is_valid() {
                    failed += 1;
                }
                println!("{}", format_outcome(expression, &options));
            }

            log::info!("checked {} expression(s), {} failed", expressions.len(), failed);
            if failed > 0 {
                eprintln!("FAIL: {} of {} expression(s) invalid", failed, expressions.len());
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

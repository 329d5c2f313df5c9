//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for ranking results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Analysis plus every option's score
    Full,
    /// Only the selected option
    Best,
    /// JSON output
    Json,
}

impl From<OutputFormat> for neuroform_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => neuroform_domain::OutputFormat::Full,
            OutputFormat::Best => neuroform_domain::OutputFormat::Best,
            OutputFormat::Json => neuroform_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for neuroform
#[derive(Parser, Debug)]
#[command(name = "neuroform")]
#[command(author, version, about = "Pick the most plausible answer for a form question")]
#[command(long_about = r#"
neuroform ranks the candidate answers of a form question.

The question is classified by its leading question word, its sentiment and
keywords are extracted, and every option is scored with the heuristic that
fits the question type. The highest score wins; ties go to the earlier
option. Decisions below the confidence threshold are flagged for review.

Configuration files are loaded from (in priority order):
1. NEUROFORM_* environment variables
2. --config <path>       Explicit config file
3. ./neuroform.toml      Project-level config
4. ~/.config/neuroform/config.toml   Global config

Example:
  neuroform "Do you agree with the policy?" -O "Strongly agree" -O Agree -O Disagree
  neuroform --batch questions.json --output json
"#)]
pub struct Cli {
    /// The question to answer (not used with --batch)
    pub question: Option<String>,

    /// Candidate answer, in on-page order (can be specified multiple times)
    #[arg(short = 'O', long = "option", value_name = "OPTION")]
    pub options: Vec<String>,

    /// Rank every question in a JSON file: [{"id", "question", "options"}, ...]
    #[arg(short, long, value_name = "FILE", conflicts_with = "question")]
    pub batch: Option<PathBuf>,

    /// Output format (default from config, else full)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Minimum confidence for autonomous selection, in [0, 1]
    #[arg(short, long, value_name = "F", value_parser = parse_threshold)]
    pub threshold: Option<f64>,

    /// Never use a sentiment model, only the built-in word lists
    #[arg(long)]
    pub lexical_only: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("threshold must be within [0, 1], got {}", value))
    }
}

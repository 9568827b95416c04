//! CLI command definitions

use clap::{Parser, ValueEnum};
use numconv_domain::FormatTag;
use std::path::PathBuf;

/// Number format accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// English words ("forty-two")
    Text,
    /// Base 2
    #[value(alias = "bin")]
    Binary,
    /// Base 8
    #[value(alias = "oct")]
    Octal,
    /// Base 10
    #[value(alias = "dec")]
    Decimal,
    /// Base 16
    #[value(alias = "hex")]
    Hexadecimal,
    /// Little-endian bytes as base64
    Base64,
}

impl From<FormatArg> for FormatTag {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => FormatTag::Text,
            FormatArg::Binary => FormatTag::Binary,
            FormatArg::Octal => FormatTag::Octal,
            FormatArg::Decimal => FormatTag::Decimal,
            FormatArg::Hexadecimal => FormatTag::Hexadecimal,
            FormatArg::Base64 => FormatTag::Base64,
        }
    }
}

/// Output format for conversion results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Only the converted value
    Plain,
    /// Labelled line with source and target formats
    Full,
    /// JSON `{result, error}` object
    Json,
}

impl From<OutputFormat> for numconv_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => numconv_domain::OutputFormat::Plain,
            OutputFormat::Full => numconv_domain::OutputFormat::Full,
            OutputFormat::Json => numconv_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for numconv
#[derive(Parser, Debug)]
#[command(name = "numconv")]
#[command(author, version, about = "Convert numbers between words, binary, octal, decimal, hex and base64")]
#[command(long_about = r#"
numconv reads a number in one format and writes it in another.

Formats: text (English words), binary, octal, decimal, hexadecimal, base64.
Numeric formats take no prefix ("101010", not "0b101010"). Base64 holds the
number's bytes in little-endian order.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./numconv.toml      Project-level config
3. ~/.config/numeric-converter/config.toml   Global config

Example:
  numconv 42 --to binary
  numconv "one hundred and twenty-three" -f text -t hexadecimal
  numconv 2a -f hex --all
  numconv -f hex -t decimal -- -2a
  echo '{"input":"Kg==","inputType":"base64","outputType":"decimal"}' | numconv --json
"#)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// The value to convert (not used with --json)
    pub input: Option<String>,

    /// Format of the input value
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub from: Option<FormatArg>,

    /// Format to convert into
    #[arg(short, long, value_enum, value_name = "FORMAT", conflicts_with = "all")]
    pub to: Option<FormatArg>,

    /// Show the value in every format
    #[arg(short, long)]
    pub all: bool,

    /// Read JSON requests from stdin, one per line, and answer each on stdout
    #[arg(long, conflicts_with_all = ["input", "all", "from", "to"])]
    pub json: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Append every conversion to this JSONL history file
    #[arg(long, value_name = "PATH")]
    pub history: Option<PathBuf>,

    /// Do not record history, even if the config enables it
    #[arg(long, conflicts_with = "history")]
    pub no_history: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

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

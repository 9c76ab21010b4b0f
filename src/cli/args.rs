//! Command line argument parsing for Stemline CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Stemline - paragraph normalization and stemming for Russian and English text
#[derive(Parser, Debug, Clone)]
#[command(name = "stemline")]
#[command(about = "Normalize paragraphs and reduce their words to stems")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct StemlineArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Pipeline configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "STEMLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl StemlineArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Stem paragraphs
    Stem(StemArgs),

    /// Show how every token of a paragraph is handled
    Trace(TraceArgs),

    /// Show ranked lemma candidates for words
    Lemma(LemmaArgs),
}

/// Arguments for stemming
#[derive(Parser, Debug, Clone)]
pub struct StemArgs {
    /// Paragraphs to stem
    #[arg(value_name = "PARAGRAPH")]
    pub paragraphs: Vec<String>,

    /// Read paragraphs from a file ('-' for stdin). A `.json` file holds a
    /// request object, anything else one paragraph per line.
    #[arg(
        short,
        long,
        value_name = "INPUT_FILE",
        conflicts_with = "paragraphs"
    )]
    pub input: Option<PathBuf>,

    /// Override the configured failure policy
    #[arg(long)]
    pub failure_policy: Option<FailurePolicyArg>,

    /// Process paragraphs sequentially
    #[arg(long)]
    pub sequential: bool,
}

/// Arguments for tracing
#[derive(Parser, Debug, Clone)]
pub struct TraceArgs {
    /// Paragraphs to trace
    #[arg(value_name = "PARAGRAPH", required = true)]
    pub paragraphs: Vec<String>,
}

/// Arguments for lemma lookup
#[derive(Parser, Debug, Clone)]
pub struct LemmaArgs {
    /// Words to analyze
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Show only the first candidate
    #[arg(long)]
    pub first: bool,
}

/// Failure policies selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicyArg {
    /// Fail the whole batch on the first failing paragraph
    Abort,
    /// Report failures per paragraph
    Isolate,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = StemlineArgs::try_parse_from(["stemline", "lemma", "дом"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Verbose flag
        let args = StemlineArgs::try_parse_from(["stemline", "-v", "lemma", "дом"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = StemlineArgs::try_parse_from(["stemline", "-vvv", "lemma", "дом"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        // Quiet flag
        let args =
            StemlineArgs::try_parse_from(["stemline", "--quiet", "-vv", "lemma", "дом"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = StemlineArgs::try_parse_from(["stemline", "--format", "json", "lemma", "дом"])
            .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(!args.pretty);
    }

    #[test]
    fn test_stem_args() {
        let args = StemlineArgs::try_parse_from([
            "stemline",
            "stem",
            "5 кошек",
            "hello world",
            "--failure-policy",
            "isolate",
        ])
        .unwrap();

        if let Command::Stem(stem_args) = args.command {
            assert_eq!(stem_args.paragraphs, vec!["5 кошек", "hello world"]);
            assert_eq!(stem_args.failure_policy, Some(FailurePolicyArg::Isolate));
            assert!(stem_args.input.is_none());
        } else {
            panic!("Expected stem command");
        }
    }

    #[test]
    fn test_stem_input_conflicts_with_paragraphs() {
        let result =
            StemlineArgs::try_parse_from(["stemline", "stem", "text", "--input", "in.txt"]);
        assert!(result.is_err());

        let args = StemlineArgs::try_parse_from(["stemline", "stem", "-i", "-"]).unwrap();
        if let Command::Stem(stem_args) = args.command {
            assert_eq!(stem_args.input, Some(PathBuf::from("-")));
        } else {
            panic!("Expected stem command");
        }
    }

    #[test]
    fn test_lemma_requires_words() {
        assert!(StemlineArgs::try_parse_from(["stemline", "lemma"]).is_err());
        assert!(StemlineArgs::try_parse_from(["stemline", "trace"]).is_err());
    }
}

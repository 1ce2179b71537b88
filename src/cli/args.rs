//! Command line argument parsing for the Lexitrie CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lexitrie - autocomplete, autocorrect and wildcard search over a text corpus
#[derive(Parser, Debug, Clone)]
#[command(name = "lexitrie")]
#[command(about = "Autocomplete, autocorrect and wildcard search over a text corpus")]
#[command(version = crate::VERSION)]
#[command(long_about = None)]
pub struct LexitrieArgs {
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

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE", env = "LEXITRIE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexitrieArgs {
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

    /// Log level for the effective verbosity: errors when quiet, warnings by
    /// default, `info` at `-vv` and `debug` from `-vvv`.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank the corpus words (or sentences) starting with a prefix
    Complete(CompleteArgs),

    /// Complete a word, then suggest single-edit corrections
    Correct(CorrectArgs),

    /// List the corpus words matching a glob pattern
    Filter(FilterArgs),

    /// Show corpus statistics
    Stats(StatsArgs),
}

/// Arguments for prefix completion
#[derive(Parser, Debug, Clone)]
pub struct CompleteArgs {
    /// Corpus text file
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Prefix to complete; in sentence mode, whitespace-separated words
    #[arg(value_name = "PREFIX", default_value = "")]
    pub prefix: String,

    /// Maximum number of results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Complete whole sentences instead of words
    #[arg(short, long)]
    pub sentences: bool,
}

/// Arguments for autocorrect
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Corpus text file
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Word or prefix to correct
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum number of results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for wildcard filtering
#[derive(Parser, Debug, Clone)]
pub struct FilterArgs {
    /// Corpus text file
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Glob pattern: `*` matches any run of characters, `?` exactly one
    #[arg(value_name = "PATTERN")]
    pub pattern: String,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Corpus text file
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
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
    use clap::Parser;

    #[test]
    fn test_complete_command() {
        let args = LexitrieArgs::try_parse_from([
            "lexitrie",
            "complete",
            "alice.txt",
            "gre",
            "--limit",
            "6",
        ])
        .unwrap();

        if let Command::Complete(complete_args) = args.command {
            assert_eq!(complete_args.corpus, PathBuf::from("alice.txt"));
            assert_eq!(complete_args.prefix, "gre");
            assert_eq!(complete_args.limit, Some(6));
            assert!(!complete_args.sentences);
        } else {
            panic!("Expected Complete command");
        }
    }

    #[test]
    fn test_sentence_completion_defaults_to_empty_prefix() {
        let args =
            LexitrieArgs::try_parse_from(["lexitrie", "complete", "alice.txt", "--sentences"])
                .unwrap();

        if let Command::Complete(complete_args) = args.command {
            assert_eq!(complete_args.prefix, "");
            assert!(complete_args.sentences);
            assert_eq!(complete_args.limit, None);
        } else {
            panic!("Expected Complete command");
        }
    }

    #[test]
    fn test_correct_and_filter_commands() {
        let args =
            LexitrieArgs::try_parse_from(["lexitrie", "correct", "p.txt", "hear", "-n", "12"])
                .unwrap();
        if let Command::Correct(correct_args) = args.command {
            assert_eq!(correct_args.word, "hear");
            assert_eq!(correct_args.limit, Some(12));
        } else {
            panic!("Expected Correct command");
        }

        let args = LexitrieArgs::try_parse_from(["lexitrie", "filter", "t.txt", "r?c*t"]).unwrap();
        if let Command::Filter(filter_args) = args.command {
            assert_eq!(filter_args.pattern, "r?c*t");
        } else {
            panic!("Expected Filter command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = LexitrieArgs::try_parse_from(["lexitrie", "stats", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = LexitrieArgs::try_parse_from(["lexitrie", "-vv", "stats", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args =
            LexitrieArgs::try_parse_from(["lexitrie", "--quiet", "stats", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_log_level_follows_verbosity() {
        let level = |argv: &[&str]| LexitrieArgs::try_parse_from(argv).unwrap().log_level();

        assert_eq!(level(&["lexitrie", "-q", "-vvv", "stats", "a.txt"]), LevelFilter::Error);
        assert_eq!(level(&["lexitrie", "stats", "a.txt"]), LevelFilter::Warn);
        assert_eq!(level(&["lexitrie", "-v", "stats", "a.txt"]), LevelFilter::Warn);
        assert_eq!(level(&["lexitrie", "-vv", "stats", "a.txt"]), LevelFilter::Info);
        assert_eq!(level(&["lexitrie", "-vvvv", "stats", "a.txt"]), LevelFilter::Debug);
    }

    #[test]
    fn test_version_matches_crate() {
        use clap::CommandFactory;
        assert_eq!(LexitrieArgs::command().get_version(), Some(crate::VERSION));
    }

    #[test]
    fn test_output_format() {
        let args =
            LexitrieArgs::try_parse_from(["lexitrie", "--format", "json", "stats", "a.txt"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));

        assert!(
            LexitrieArgs::try_parse_from(["lexitrie", "--format", "yaml", "stats", "a.txt"])
                .is_err()
        );
    }
}

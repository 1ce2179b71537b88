//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexitrieArgs, OutputFormat};
use crate::corpus::Frequency;
use crate::error::Result;

/// A result key with its corpus frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub key: String,
    pub frequency: Frequency,
}

impl RankedEntry {
    pub fn new<S: Into<String>>(key: S, frequency: Frequency) -> Self {
        RankedEntry {
            key: key.into(),
            frequency,
        }
    }
}

/// Result structure for complete, correct and filter.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResults {
    pub query: String,
    pub entries: Vec<RankedEntry>,
    pub duration_ms: u64,
}

/// Corpus statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusStats {
    pub distinct_words: usize,
    pub total_words: u64,
    pub distinct_sentences: usize,
    pub total_sentences: u64,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LexitrieArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LexitrieArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;
    for line in human_lines(&value, args.verbosity()) {
        println!("{line}");
    }
    Ok(())
}

/// Render a result value as lines of human-readable text.
fn human_lines(value: &serde_json::Value, verbosity: u8) -> Vec<String> {
    let mut lines = Vec::new();
    let Some(obj) = value.as_object() else {
        lines.push(format_value(value));
        return lines;
    };

    if let Some(entries) = obj.get("entries").and_then(|e| e.as_array()) {
        if entries.is_empty() {
            lines.push("No results.".to_string());
        }
        for (i, entry) in entries.iter().enumerate() {
            let key = entry.get("key").and_then(|k| k.as_str()).unwrap_or("");
            let frequency = entry.get("frequency").and_then(|f| f.as_u64()).unwrap_or(0);
            lines.push(format!("{:>4}. {key} ({frequency})", i + 1));
        }
        if verbosity > 1
            && let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64())
        {
            lines.push(String::new());
            lines.push(format!("Query time: {duration}ms"));
        }
        return lines;
    }

    for (key, val) in obj {
        if key == "duration_ms" && verbosity < 2 {
            continue;
        }
        lines.push(format!("{key}: {}", format_value(val)));
    }
    lines
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexitrieArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

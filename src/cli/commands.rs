//! Command implementations for the Lexitrie CLI.

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::info;

use crate::analysis::split_words;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::LexitrieConfig;
use crate::corpus::{CorpusBuilder, SentenceTrie, WordTrie, total_frequency};
use crate::error::Result;
use crate::query::{ranked_completions, word_filter};
use crate::spelling::Autocorrector;

/// Execute a CLI command.
pub fn execute_command(args: LexitrieArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Complete(complete_args) => {
            let results = run_complete(complete_args, &config)?;
            output_result("Completions", &results, &args)
        }
        Command::Correct(correct_args) => {
            let results = run_correct(correct_args, &config)?;
            output_result("Corrections", &results, &args)
        }
        Command::Filter(filter_args) => {
            let results = run_filter(filter_args, &config)?;
            output_result("Matching words", &results, &args)
        }
        Command::Stats(stats_args) => {
            let stats = run_stats(stats_args, &config)?;
            output_result("Corpus statistics", &stats, &args)
        }
    }
}

/// Load the configuration file named on the command line, or the defaults.
pub fn load_config(args: &LexitrieArgs) -> Result<LexitrieConfig> {
    match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            let config = LexitrieConfig::load_from_file(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?;
            Ok(config)
        }
        None => Ok(LexitrieConfig::default()),
    }
}

/// Rank the corpus words or sentences starting with the prefix.
pub fn run_complete(args: &CompleteArgs, config: &LexitrieConfig) -> Result<QueryResults> {
    let limit = args.limit.or(config.query.max_count);

    if args.sentences {
        let trie = load_sentence_trie(&args.corpus, config)?;
        let prefix: Vec<String> = split_words(&args.prefix).map(str::to_string).collect();
        let start = Instant::now();
        let entries = ranked_completions(&trie, &prefix[..], limit)
            .into_iter()
            .map(|(tokens, frequency)| RankedEntry::new(tokens.join(" "), frequency))
            .collect();
        Ok(QueryResults {
            query: args.prefix.clone(),
            entries,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    } else {
        let trie = load_word_trie(&args.corpus, config)?;
        let start = Instant::now();
        let entries = ranked_completions(&trie, args.prefix.as_str(), limit)
            .into_iter()
            .map(|(word, frequency)| RankedEntry::new(word, frequency))
            .collect();
        Ok(QueryResults {
            query: args.prefix.clone(),
            entries,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

/// Complete the word, then add its best single-edit corrections.
pub fn run_correct(args: &CorrectArgs, config: &LexitrieConfig) -> Result<QueryResults> {
    let limit = args.limit.or(config.query.max_count);
    let trie = load_word_trie(&args.corpus, config)?;

    let start = Instant::now();
    let entries = Autocorrector::with_config(config.autocorrect)
        .ranked(&trie, &args.word, limit)
        .into_iter()
        .map(|(word, frequency)| RankedEntry::new(word, frequency))
        .collect();
    Ok(QueryResults {
        query: args.word.clone(),
        entries,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// List the corpus words matching the pattern, in trie order.
pub fn run_filter(args: &FilterArgs, config: &LexitrieConfig) -> Result<QueryResults> {
    let trie = load_word_trie(&args.corpus, config)?;

    let start = Instant::now();
    let entries = word_filter(&trie, &args.pattern)
        .into_iter()
        .map(|(word, frequency)| RankedEntry::new(word, frequency))
        .collect();
    Ok(QueryResults {
        query: args.pattern.clone(),
        entries,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// Count distinct and total words and sentences.
pub fn run_stats(args: &StatsArgs, config: &LexitrieConfig) -> Result<CorpusStats> {
    let start = Instant::now();
    let words = load_word_trie(&args.corpus, config)?;
    let sentences = load_sentence_trie(&args.corpus, config)?;

    Ok(CorpusStats {
        distinct_words: words.len(),
        total_words: total_frequency(&words),
        distinct_sentences: sentences.len(),
        total_sentences: total_frequency(&sentences),
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

fn load_word_trie(path: &Path, config: &LexitrieConfig) -> Result<WordTrie> {
    info!("Building word trie from: {}", path.display());
    let trie = CorpusBuilder::with_config(config.analysis.clone())
        .word_trie_from_file(path)
        .with_context(|| format!("failed to read corpus {}", path.display()))?;
    Ok(trie)
}

fn load_sentence_trie(path: &Path, config: &LexitrieConfig) -> Result<SentenceTrie> {
    info!("Building sentence trie from: {}", path.display());
    let trie = CorpusBuilder::with_config(config.analysis.clone())
        .sentence_trie_from_file(path)
        .with_context(|| format!("failed to read corpus {}", path.display()))?;
    Ok(trie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn corpus(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{text}").unwrap();
        file.flush().unwrap();
        file
    }

    fn keys(results: &QueryResults) -> Vec<&str> {
        results.entries.iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn test_complete_words() {
        let file = corpus("Bat bat bark bar.");
        let args = CompleteArgs {
            corpus: file.path().to_path_buf(),
            prefix: "ba".to_string(),
            limit: Some(1),
            sentences: false,
        };
        let results = run_complete(&args, &LexitrieConfig::default()).unwrap();
        assert_eq!(results.entries, vec![RankedEntry::new("bat", 2)]);
    }

    #[test]
    fn test_complete_sentences() {
        let file = corpus("Said Alice. Wow. Said Alice. Said the Caterpillar.");
        let args = CompleteArgs {
            corpus: file.path().to_path_buf(),
            prefix: "said".to_string(),
            limit: None,
            sentences: true,
        };
        let results = run_complete(&args, &LexitrieConfig::default()).unwrap();
        assert_eq!(keys(&results), vec!["said alice", "said the caterpillar"]);
        assert_eq!(results.entries[0].frequency, 2);
    }

    #[test]
    fn test_config_limit_applies_when_flag_absent() {
        let file = corpus("a ab abc abcd");
        let mut config = LexitrieConfig::default();
        config.query.max_count = Some(2);
        let args = CompleteArgs {
            corpus: file.path().to_path_buf(),
            prefix: "a".to_string(),
            limit: None,
            sentences: false,
        };
        assert_eq!(run_complete(&args, &config).unwrap().entries.len(), 2);
    }

    #[test]
    fn test_correct_and_filter() {
        let file = corpus("bat bat bark bar");
        let config = LexitrieConfig::default();

        let args = CorrectArgs {
            corpus: file.path().to_path_buf(),
            word: "bat".to_string(),
            limit: Some(5),
        };
        assert_eq!(keys(&run_correct(&args, &config).unwrap()), vec!["bat", "bar"]);

        let args = FilterArgs {
            corpus: file.path().to_path_buf(),
            pattern: "ba?".to_string(),
        };
        assert_eq!(
            run_filter(&args, &config).unwrap().entries,
            vec![RankedEntry::new("bat", 2), RankedEntry::new("bar", 1)]
        );
    }

    #[test]
    fn test_stats() {
        let file = corpus("The cat sat. The cat sat. A dog ran!");
        let args = StatsArgs {
            corpus: file.path().to_path_buf(),
        };
        let stats = run_stats(&args, &LexitrieConfig::default()).unwrap();
        assert_eq!(stats.distinct_words, 6);
        assert_eq!(stats.total_words, 9);
        assert_eq!(stats.distinct_sentences, 2);
        assert_eq!(stats.total_sentences, 3);
    }

    #[test]
    fn test_missing_corpus_reports_path() {
        let args = StatsArgs {
            corpus: PathBuf::from("/nonexistent/corpus.txt"),
        };
        let err = run_stats(&args, &LexitrieConfig::default()).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/corpus.txt"));
    }

    #[test]
    fn test_load_config_file() {
        let file = corpus(r#"{ "query": { "max_count": 7 } }"#);
        let args = LexitrieArgs::try_parse_from([
            "lexitrie",
            "--config",
            file.path().to_str().unwrap(),
            "stats",
            "a.txt",
        ])
        .unwrap();
        assert_eq!(load_config(&args).unwrap().query.max_count, Some(7));
    }
}

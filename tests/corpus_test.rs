use std::io::Write;

use lexitrie::config::{AnalysisConfig, LexitrieConfig};
use lexitrie::corpus::{CorpusBuilder, total_frequency};
use lexitrie::query::autocomplete;
use tempfile::{NamedTempFile, TempDir};

const ALICE: &str = "Alice was beginning to get very tired of sitting by her sister on the \
bank, and of having nothing to do. Once or twice she had peeped into the book her sister \
was reading, but it had no pictures or conversations in it. \"And what is the use of a \
book,\" thought Alice, \"without pictures or conversations?\"";

fn corpus_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_word_trie_from_file() {
    let file = corpus_file(ALICE);
    let trie = CorpusBuilder::new().word_trie_from_file(file.path()).unwrap();

    assert_eq!(trie.get("alice").unwrap(), &2);
    assert_eq!(trie.get("book").unwrap(), &2);
    assert_eq!(trie.get("pictures").unwrap(), &2);
    assert!(!trie.contains("Alice"));
    assert!(!trie.contains("book,"));

    assert_eq!(autocomplete(&trie, "pi", None), vec!["pictures"]);
    assert_eq!(autocomplete(&trie, "b", Some(2)), vec!["book", "beginning"]);
}

#[test]
fn test_sentence_trie_from_file() {
    let file = corpus_file("Oh dear! Oh dear! I shall be late. Oh my ears and whiskers!");
    let trie = CorpusBuilder::new()
        .sentence_trie_from_file(file.path())
        .unwrap();

    let oh_dear = vec!["oh".to_string(), "dear".to_string()];
    assert_eq!(trie.get(&oh_dear).unwrap(), &2);
    assert_eq!(trie.len(), 3);
    assert_eq!(total_frequency(&trie), 4);

    let prefix = vec!["oh".to_string()];
    let completions = autocomplete(&trie, &prefix[..], None);
    assert_eq!(completions[0], oh_dear);
    assert_eq!(completions.len(), 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.txt");
    let err = CorpusBuilder::new().word_trie_from_file(&path).unwrap_err();
    assert!(matches!(err, lexitrie::error::LexitrieError::Io(_)));
}

#[test]
fn test_config_file_drives_analysis() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lexitrie.json");

    let mut config = LexitrieConfig::default();
    config.analysis = AnalysisConfig {
        lowercase: false,
        strip_punctuation: true,
    };
    config.save_to_file(&path).unwrap();

    let loaded = LexitrieConfig::load_from_file(&path).unwrap();
    let trie = CorpusBuilder::with_config(loaded.analysis)
        .word_trie("Alice met alice.")
        .unwrap();
    assert_eq!(trie.get("Alice").unwrap(), &1);
    assert_eq!(trie.get("alice").unwrap(), &1);
    assert_eq!(total_frequency(&trie), 3);
}

//! End-to-end tests with file-backed collaborators.
//!
//! Root words and dictionary entries come from newline-delimited files,
//! the way the terminal front-end wires them up.

use std::io::Write;
use std::thread;
use std::time::Duration;

use tempfile::NamedTempFile;
use word_scramble::{
    bounded, FileWordSource, FnOracle, GameConfig, GameSession, RejectReason, SessionError,
    SessionSnapshot, SharedOracle, SharedSession, Verdict, WordListDictionary, WordSource,
};

fn write_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

// =============================================================================
// File Source Tests
// =============================================================================

/// A start file with a trailing newline never yields an empty root word.
#[test]
fn test_file_round() {
    let words = write_file("listen\n");
    let dict_file = write_file("lines\nsilent\ntinsel\n");

    let config = GameConfig::default().with_seed(11);
    let dict = WordListDictionary::from_path(config.language.clone(), dict_file.path()).unwrap();
    let source = FileWordSource::new(words.path());
    assert_eq!(source.load().unwrap(), vec!["listen"]);

    let mut session = GameSession::load(&source, dict, &config).unwrap();
    assert_eq!(session.root(), Some("listen"));
    assert_eq!(session.submit("tinsel").unwrap(), Verdict::Accepted);
    assert_eq!(
        session.submit("stinel").unwrap(),
        Verdict::Rejected(RejectReason::NotInDictionary)
    );
    assert_eq!(session.score(), 6);
}

/// A blank start file aborts setup with the configuration fault.
#[test]
fn test_blank_file_is_fatal() {
    let words = write_file("\n\n   \n");
    let source = FileWordSource::new(words.path());
    let dict = WordListDictionary::new("en", ["lines"]);

    let err = GameSession::load(&source, dict, &GameConfig::default()).unwrap_err();
    assert!(matches!(err, SessionError::EmptyWordList));
    assert!(err.is_configuration_fault());
}

/// A missing start file is reported, not treated as an empty pool.
#[test]
fn test_missing_file() {
    let source = FileWordSource::new("/nonexistent/start.txt");
    let dict = WordListDictionary::new("en", ["lines"]);

    let err = GameSession::load(&source, dict, &GameConfig::default()).unwrap_err();
    assert!(matches!(err, SessionError::WordList(_)));
}

// =============================================================================
// Timeout Tests
// =============================================================================

/// A hung dictionary rejects words instead of stalling the session.
#[test]
fn test_hung_dictionary_times_out() {
    let hung = FnOracle::new(|_: &str, _: &str| {
        thread::sleep(Duration::from_secs(2));
        true
    });
    let config = GameConfig::default()
        .with_seed(1)
        .with_oracle_timeout(Duration::from_millis(25));
    let oracle: SharedOracle = bounded(hung, config.oracle_timeout);

    let mut session = GameSession::new(vec!["listen".into()], oracle, &config);
    session.start_new_game().unwrap();

    assert_eq!(
        session.submit("lines").unwrap(),
        Verdict::Rejected(RejectReason::NotInDictionary)
    );
    assert_eq!(session.score(), 0);
}

// =============================================================================
// Snapshot Tests
// =============================================================================

/// Snapshots survive a bincode round trip and keep drawing the same roots.
#[test]
fn test_snapshot_continues_draws() {
    let pool: Vec<String> = ["listen", "garden", "swift", "planet"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let dict = WordListDictionary::new("en", ["lines", "grade", "wit"]);
    let config = GameConfig::default().with_seed(21);

    let mut original = GameSession::new(pool.clone(), dict.clone(), &config);
    original.start_new_game().unwrap();
    let bytes = original.snapshot().to_bytes().unwrap();

    let mut restored = GameSession::new(pool, dict, &GameConfig::default().with_seed(999));
    restored.restore(SessionSnapshot::from_bytes(&bytes).unwrap()).unwrap();
    assert_eq!(restored.root(), original.root());

    for _ in 0..5 {
        assert_eq!(
            restored.start_new_game().unwrap().to_string(),
            original.start_new_game().unwrap().to_string()
        );
    }
}

// =============================================================================
// Concurrency Tests
// =============================================================================

/// Submissions from several threads are serialized by the shared handle.
#[test]
fn test_shared_session_across_threads() {
    let words = ["lines", "silent", "tinsel", "tiles", "list", "nest", "lens"];
    let dict = WordListDictionary::new("en", words);
    let config = GameConfig::default().with_seed(2);
    let mut session = GameSession::new(vec!["listen".into()], dict, &config);
    session.start_new_game().unwrap();
    let shared = SharedSession::new(session);

    let accepted: usize = (0..3)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                words
                    .iter()
                    .filter(|w| shared.submit(w).unwrap().is_accepted())
                    .count()
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|h| h.join().unwrap())
        .sum();

    // Each word is accepted exactly once across all threads.
    assert_eq!(accepted, words.len());
    let total: usize = words.iter().map(|w| w.len()).sum();
    assert_eq!(shared.score(), total);
}

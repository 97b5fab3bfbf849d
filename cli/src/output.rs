//! Archive writer.
//!
//! Serializes the collected profile + timeline to a timestamped JSON file.
//! The write is all-or-nothing; nothing is persisted for failed runs.

use chrono::Local;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use tweetvault_api::TimelineArchive;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("could not serialize the archive: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

/// Write the archive under `dir` as `<date>_<time>_<handle>.json`.
///
/// Returns the path actually written.
pub fn write_archive(dir: &Path, archive: &TimelineArchive) -> Result<PathBuf, PersistenceError> {
    let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let stem = format!("{}_{}", stamp, archive.user.username);
    write_archive_with_stem(dir, &stem, archive)
}

fn write_archive_with_stem(
    dir: &Path,
    stem: &str,
    archive: &TimelineArchive,
) -> Result<PathBuf, PersistenceError> {
    fs::create_dir_all(dir).map_err(|source| PersistenceError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = unique_path(dir, stem);
    let json = serde_json::to_string_pretty(archive)?;
    fs::write(&path, json).map_err(|source| PersistenceError::Write {
        path: path.clone(),
        source,
    })?;

    debug!("archive written to {}", path.display());
    Ok(path)
}

/// Pick a path that does not collide with an earlier run in the same
/// clock tick: append a counter suffix until the name is free.
fn unique_path(dir: &Path, stem: &str) -> PathBuf {
    let mut path = dir.join(format!("{}.json", stem));
    let mut n = 2;
    while path.exists() {
        path = dir.join(format!("{}_{}.json", stem, n));
        n += 1;
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use tweetvault_api::models::{Tweet, User};

    fn sample_archive() -> TimelineArchive {
        TimelineArchive {
            user: User {
                id: "1".to_string(),
                name: "Alice".to_string(),
                username: "alice".to_string(),
                extra: serde_json::Map::new(),
            },
            tweets: (0..3)
                .map(|i| Tweet {
                    id: i.to_string(),
                    text: format!("tweet {}", i),
                    extra: serde_json::Map::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn written_archive_parses_back_intact() {
        let dir = tempfile::tempdir().unwrap();
        let archive = sample_archive();

        let path = write_archive(dir.path(), &archive).unwrap();
        assert!(path.file_name().unwrap().to_string_lossy().ends_with("_alice.json"));

        let parsed: TimelineArchive =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.user.username, "alice");
        assert_eq!(parsed.tweets.len(), 3);
        assert_eq!(parsed, archive);
    }

    #[test]
    fn artifact_has_user_and_tweets_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_archive(dir.path(), &sample_archive()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["user"]["username"], "alice");
        assert_eq!(value["tweets"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn colliding_stems_get_counter_suffixes() {
        let dir = tempfile::tempdir().unwrap();
        let archive = sample_archive();

        let first = write_archive_with_stem(dir.path(), "stamp_alice", &archive).unwrap();
        let second = write_archive_with_stem(dir.path(), "stamp_alice", &archive).unwrap();
        let third = write_archive_with_stem(dir.path(), "stamp_alice", &archive).unwrap();

        assert_eq!(first.file_name().unwrap(), "stamp_alice.json");
        assert_eq!(second.file_name().unwrap(), "stamp_alice_2.json");
        assert_eq!(third.file_name().unwrap(), "stamp_alice_3.json");
    }

    #[test]
    fn creates_the_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("tweets");
        let path = write_archive(&nested, &sample_archive()).unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }
}

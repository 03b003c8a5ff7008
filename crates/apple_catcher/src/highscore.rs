//! Best score across sessions, kept as decimal text in a single file.

use std::path::{Path, PathBuf};
use std::{fs, io};

use bevy::prelude::*;
use thiserror::Error;

use crate::core::{GameConfig, config};

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Failed to write high score to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the high score lives on disk
#[derive(Clone, Debug)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored score. A missing, unreadable or non-numeric file
    /// counts as 0.
    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Overwrites the file with `score` in decimal.
    pub fn save(&self, score: u32) -> Result<(), ScoreError> {
        fs::write(&self.path, score.to_string()).map_err(|source| ScoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Best score seen so far, written through to its store on every improvement
#[derive(Resource, Debug)]
pub struct HighScore {
    best: u32,
    store: ScoreStore,
}

impl HighScore {
    pub fn load(store: ScoreStore) -> Self {
        let best = store.load();
        info!("High score {best} loaded from {}", store.path().display());
        Self { best, store }
    }

    pub const fn best(&self) -> u32 {
        self.best
    }

    /// Records `score` if it beats the best, saving it before returning.
    /// Returns whether the best changed.
    pub fn submit(&mut self, score: u32) -> Result<bool, ScoreError> {
        if score <= self.best {
            return Ok(false);
        }
        self.best = score;
        self.store.save(score)?;
        Ok(true)
    }
}

impl FromWorld for HighScore {
    fn from_world(world: &mut World) -> Self {
        let path = world.get_resource::<GameConfig>().map_or_else(
            || PathBuf::from(config::HIGH_SCORE_FILE),
            |config| config.high_score_path.clone(),
        );
        Self::load(ScoreStore::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> ScoreStore {
        ScoreStore::new(dir.path().join("highscore.txt"))
    }

    #[test]
    fn missing_file_loads_as_zero() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert_eq!(store_in(&dir).load(), 0, "absent file should read as 0");
    }

    #[test]
    fn garbage_loads_as_zero() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = store_in(&dir);

        for contents in ["", "abc", "12abc", "-4", "3.5"] {
            fs::write(store.path(), contents).expect("write fixture");
            assert_eq!(store.load(), 0, "{contents:?} should read as 0");
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = store_in(&dir);
        store.save(5).expect("save");

        assert_eq!(store.load(), 5, "saved value should load back");
        assert_eq!(
            fs::read_to_string(store.path()).expect("read back"),
            "5",
            "file holds bare decimal text"
        );
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = store_in(&dir);
        fs::write(store.path(), "17\n").expect("write fixture");

        assert_eq!(store.load(), 17, "trailing newline should be ignored");
    }

    #[test]
    fn beating_the_best_is_saved_immediately() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = store_in(&dir);
        store.save(4).expect("save");
        let mut high_score = HighScore::load(store.clone());

        assert!(
            !high_score.submit(4).expect("submit"),
            "equal score is not a new best"
        );
        assert!(high_score.submit(5).expect("submit"), "5 beats 4");
        assert_eq!(high_score.best(), 5, "best should update");
        assert_eq!(store.load(), 5, "new best should already be on disk");
    }

    #[test]
    fn unwritable_store_reports_the_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        // A directory cannot be overwritten as a file.
        let store = ScoreStore::new(dir.path());

        let error = store
            .save(1)
            .expect_err("writing over a directory must fail");
        let ScoreError::Write { path, .. } = error;
        assert_eq!(path.as_path(), dir.path(), "error should name the target");
    }
}

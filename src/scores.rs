use crate::consts;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Durable storage for the best score
pub(crate) trait ScoreStore: fmt::Debug {
    /// Read the stored best score.  If nothing has been stored yet, 0 is
    /// returned.
    fn load(&self) -> Result<u32, LoadError>;

    fn save(&mut self, best: u32) -> Result<(), SaveError>;
}

/// Stores the best score in a JSON file
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct JsonFileStore {
    /// `None` if no path was configured and the default path could not be
    /// determined
    path: Option<PathBuf>,
}

impl JsonFileStore {
    pub(crate) fn new(path: Option<PathBuf>) -> JsonFileStore {
        JsonFileStore { path }
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32, LoadError> {
        let path = self.path.as_deref().ok_or_else(LoadError::no_path)?;
        let src = match fs_err::read(path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(LoadError::read(e)),
        };
        serde_json::from_slice::<BestScoreFile>(&src)
            .map(|f| f.best_score)
            .map_err(LoadError::deserialize)
    }

    fn save(&mut self, best: u32) -> Result<(), SaveError> {
        let path = self.path.as_deref().ok_or_else(SaveError::no_path)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string(&BestScoreFile { best_score: best })
            .map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(path, src).map_err(SaveError::write)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
struct BestScoreFile {
    best_score: u32,
}

/// A store that keeps nothing, used when saving the best score is disabled
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct NullStore;

impl ScoreStore for NullStore {
    fn load(&self) -> Result<u32, LoadError> {
        Ok(0)
    }

    fn save(&mut self, _best: u32) -> Result<(), SaveError> {
        Ok(())
    }
}

/// The score of the current game and the best score seen so far
#[derive(Debug)]
pub(crate) struct ScoreTracker {
    score: u32,
    best: u32,
    /// Whether `score` has exceeded the best score as it stood when the game
    /// started
    new_best: bool,
    store: Box<dyn ScoreStore>,
}

impl ScoreTracker {
    /// Create a tracker, loading the best score from `store`.  If loading
    /// fails, the best score starts at 0 and the error is returned alongside
    /// the tracker.
    pub(crate) fn load(store: Box<dyn ScoreStore>) -> (ScoreTracker, Option<LoadError>) {
        let (best, err) = match store.load() {
            Ok(best) => (best, None),
            Err(e) => (0, Some(e)),
        };
        let tracker = ScoreTracker {
            score: 0,
            best,
            new_best: false,
            store,
        };
        (tracker, err)
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn best(&self) -> u32 {
        self.best
    }

    pub(crate) fn new_best(&self) -> bool {
        self.new_best
    }

    /// Reset the current score at the start of a game
    pub(crate) fn reset(&mut self) {
        self.score = 0;
        self.new_best = false;
    }

    /// Award points for eating food, then update and save the best score if
    /// it was beaten.  A failure to save leaves the in-memory best score
    /// updated.
    pub(crate) fn record_food(&mut self) -> Result<(), SaveError> {
        self.score = self.score.saturating_add(consts::SCORE_INCREMENT);
        self.check_best()
    }

    fn check_best(&mut self) -> Result<(), SaveError> {
        if self.score > self.best {
            self.best = self.score;
            if !self.new_best {
                log::info!("New best score");
            }
            self.new_best = true;
            self.store.save(self.best)?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save best score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn no_path() -> Self {
        SaveError(SaveErrorSource::NoPath)
    }

    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize best score")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write best score file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read best score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn no_path() -> Self {
        LoadError(LoadErrorSource::NoPath)
    }

    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to read best score file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize best score")]
    Deserialize(#[source] serde_json::Error),
}

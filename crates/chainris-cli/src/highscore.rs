use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use chainris_engine::GameStats;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Best session recorded on this machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub score: usize,
    pub level: usize,
    /// Clearing passes over the whole session.
    pub chains: usize,
    /// When the record was set. Older files may not carry it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl HighScoreRecord {
    pub fn from_stats(stats: &GameStats, recorded_at: DateTime<Utc>) -> Self {
        Self {
            score: stats.score(),
            level: stats.level(),
            chains: stats.total_chains(),
            recorded_at: Some(recorded_at),
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum HighScoreError {
    #[display("no location to store the high score (HOME is not set)")]
    NoLocation,
    #[display("failed to read high score file {}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("failed to write high score file {}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[display("failed to encode high score record")]
    Encode { source: serde_json::Error },
}

/// Outcome of [`HighScoreStore::update`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum HighScoreUpdate {
    /// The session beat the stored record, which has been replaced.
    NewRecord(HighScoreRecord),
    /// The stored record still stands.
    Kept(HighScoreRecord),
}

impl HighScoreUpdate {
    pub fn best(&self) -> &HighScoreRecord {
        match self {
            Self::NewRecord(record) | Self::Kept(record) => record,
        }
    }
}

/// JSON file holding the [`HighScoreRecord`].
///
/// A store without a path behaves as if the file never existed: loads yield
/// the zero record and saves fail with [`HighScoreError::NoLocation`].
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: Option<PathBuf>,
}

impl HighScoreStore {
    const DIR_NAME: &'static str = ".chainris";
    const FILE_NAME: &'static str = "highscore.json";

    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Uses `path` if given, the default location otherwise.
    pub fn open(path: Option<PathBuf>) -> Self {
        Self::new(path.or_else(Self::default_location))
    }

    /// `$HOME/.chainris/highscore.json`
    pub fn default_location() -> Option<PathBuf> {
        let home = env::var_os("HOME").filter(|home| !home.is_empty())?;
        Some(
            PathBuf::from(home)
                .join(Self::DIR_NAME)
                .join(Self::FILE_NAME),
        )
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Reads the stored record.
    ///
    /// A missing or malformed file yields the zero record. Other I/O failures
    /// are reported.
    pub fn load(&self) -> Result<HighScoreRecord, HighScoreError> {
        let Some(path) = &self.path else {
            return Ok(HighScoreRecord::default());
        };
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(HighScoreRecord::default());
            }
            Err(source) => {
                return Err(HighScoreError::Read {
                    path: path.clone(),
                    source,
                });
            }
        };
        Ok(serde_json::from_str(&json).unwrap_or_default())
    }

    pub fn save(&self, record: &HighScoreRecord) -> Result<(), HighScoreError> {
        let path = self.path.as_ref().ok_or(HighScoreError::NoLocation)?;
        let write_error = |source| HighScoreError::Write {
            path: path.clone(),
            source,
        };

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(write_error)?;
        }
        let json = serde_json::to_string_pretty(record)
            .map_err(|source| HighScoreError::Encode { source })?;
        fs::write(path, json).map_err(write_error)?;
        Ok(())
    }

    /// Stores the session result if it beats the stored score.
    pub fn update(
        &self,
        stats: &GameStats,
        now: DateTime<Utc>,
    ) -> Result<HighScoreUpdate, HighScoreError> {
        let current = self.load()?;
        if stats.score() <= current.score {
            return Ok(HighScoreUpdate::Kept(current));
        }
        let record = HighScoreRecord::from_stats(stats, now);
        self.save(&record)?;
        Ok(HighScoreUpdate::NewRecord(record))
    }

    /// Deletes the stored record.
    ///
    /// Returns `false` if there was nothing to delete.
    pub fn reset(&self) -> Result<bool, HighScoreError> {
        let Some(path) = &self.path else {
            return Ok(false);
        };
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(HighScoreError::Write {
                path: path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::process;

    use super::*;

    /// Temporary directory removed on drop.
    struct TempDir(PathBuf);

    impl TempDir {
        fn new(name: &str) -> Self {
            let dir = env::temp_dir().join(format!("chainris-{}-{name}", process::id()));
            let _ = fs::remove_dir_all(&dir);
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn store(&self) -> HighScoreStore {
            HighScoreStore::new(Some(self.0.join("nested").join("highscore.json")))
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn stats_with_score() -> GameStats {
        let mut stats = GameStats::new();
        stats.complete_pair(2);
        stats.record_clear();
        stats.record_clear();
        stats
    }

    #[test]
    fn test_missing_file_is_zero_record() {
        let dir = TempDir::new("missing");
        let record = dir.store().load().unwrap();
        assert_eq!(record, HighScoreRecord::default());
    }

    #[test]
    fn test_no_location_is_zero_record() {
        let store = HighScoreStore::new(None);
        assert_eq!(store.load().unwrap(), HighScoreRecord::default());
        assert!(matches!(
            store.save(&HighScoreRecord::default()),
            Err(HighScoreError::NoLocation)
        ));
        assert!(!store.reset().unwrap());
    }

    #[test]
    fn test_malformed_file_is_zero_record() {
        let dir = TempDir::new("malformed");
        let store = dir.store();
        let path = store.path().unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "{ not json").unwrap();
        assert_eq!(store.load().unwrap(), HighScoreRecord::default());
    }

    #[test]
    fn test_unreadable_path_is_error() {
        let dir = TempDir::new("unreadable");
        // A directory cannot be read as a file.
        let store = HighScoreStore::new(Some(dir.0.clone()));
        assert!(matches!(store.load(), Err(HighScoreError::Read { .. })));
    }

    #[test]
    fn test_record_without_timestamp_loads() {
        let dir = TempDir::new("legacy");
        let store = dir.store();
        let path = store.path().unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, r#"{"score":1200,"level":2,"chains":5}"#).unwrap();
        assert_eq!(
            store.load().unwrap(),
            HighScoreRecord {
                score: 1200,
                level: 2,
                chains: 5,
                recorded_at: None,
            }
        );
    }

    #[test]
    fn test_update_saves_only_better_scores() {
        let dir = TempDir::new("update");
        let store = dir.store();
        let stats = stats_with_score();

        let update = store.update(&stats, now()).unwrap();
        assert_eq!(
            update,
            HighScoreUpdate::NewRecord(HighScoreRecord {
                score: 400,
                level: 1,
                chains: 2,
                recorded_at: Some(now()),
            })
        );
        assert_eq!(&store.load().unwrap(), update.best());

        // Equal score does not replace the record.
        let update = store.update(&stats, now()).unwrap();
        assert!(update.is_kept());
        assert_eq!(update.best().score, 400);

        let update = store.update(&GameStats::new(), now()).unwrap();
        assert!(update.is_kept());
        assert_eq!(store.load().unwrap().score, 400);
    }

    #[test]
    fn test_reset_removes_record() {
        let dir = TempDir::new("reset");
        let store = dir.store();
        store.update(&stats_with_score(), now()).unwrap();

        assert!(store.reset().unwrap());
        assert!(!store.reset().unwrap());
        assert_eq!(store.load().unwrap(), HighScoreRecord::default());
    }
}

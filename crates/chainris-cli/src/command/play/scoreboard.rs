use std::fmt;

use chainris_engine::GameStats;
use chrono::Utc;

use crate::highscore::{HighScoreRecord, HighScoreStore, HighScoreUpdate};

/// Message printed to stderr once the terminal is restored.
#[derive(Debug)]
pub enum Notice {
    Warning(anyhow::Error),
    NewRecord(HighScoreRecord),
    GameOver {
        score: usize,
        level: usize,
        chains: usize,
        high_score: usize,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning(e) => write!(f, "Warning: {e:#}"),
            Self::NewRecord(record) => write!(
                f,
                "New high score! Score: {}, Level: {}, Chains: {}",
                record.score, record.level, record.chains
            ),
            Self::GameOver {
                score,
                level,
                chains,
                high_score,
            } => write!(
                f,
                "Game over! Score: {score}, Level: {level}, Chains: {chains} (High score: {high_score})"
            ),
        }
    }
}

/// Stored best result plus everything worth reporting after the game.
#[derive(Debug)]
pub struct Scoreboard {
    store: HighScoreStore,
    best: HighScoreRecord,
    notices: Vec<Notice>,
}

impl Scoreboard {
    /// Loads the stored record, falling back to the zero record on failure.
    pub fn load(store: HighScoreStore) -> Self {
        let mut notices = vec![];
        let best = store.load().unwrap_or_else(|e| {
            notices.push(Notice::Warning(
                anyhow::Error::new(e).context("Could not load high score"),
            ));
            HighScoreRecord::default()
        });
        Self {
            store,
            best,
            notices,
        }
    }

    pub fn best(&self) -> &HighScoreRecord {
        &self.best
    }

    /// Saves the result of a finished session if it beats the stored record.
    pub fn record_game_over(&mut self, stats: &GameStats) {
        match self.store.update(stats, Utc::now()) {
            Ok(update) => {
                self.best = update.best().clone();
                let notice = match update {
                    HighScoreUpdate::NewRecord(record) => Notice::NewRecord(record),
                    HighScoreUpdate::Kept(_) => Notice::GameOver {
                        score: stats.score(),
                        level: stats.level(),
                        chains: stats.total_chains(),
                        high_score: self.best.score,
                    },
                };
                self.notices.push(notice);
            }
            Err(e) => {
                self.notices.push(Notice::Warning(
                    anyhow::Error::new(e).context("Could not save high score"),
                ));
                self.notices.push(Notice::GameOver {
                    score: stats.score(),
                    level: stats.level(),
                    chains: stats.total_chains(),
                    high_score: usize::max(self.best.score, stats.score()),
                });
            }
        }
    }

    pub fn into_notices(self) -> Vec<Notice> {
        self.notices
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, path::PathBuf, process};

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("chainris-scoreboard-{}-{name}", process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn stats(depths: &[usize]) -> GameStats {
        let mut stats = GameStats::new();
        for &depth in depths {
            stats.complete_pair(depth);
            for _ in 0..depth {
                stats.record_clear();
            }
        }
        stats
    }

    #[test]
    fn test_new_record_then_kept() {
        let dir = temp_path("record");
        let store = HighScoreStore::new(Some(dir.join("highscore.json")));
        let mut scoreboard = Scoreboard::load(store);
        assert_eq!(scoreboard.best().score, 0);

        scoreboard.record_game_over(&stats(&[1, 2]));
        assert_eq!(scoreboard.best().score, 500);
        assert_eq!(scoreboard.best().chains, 3);

        scoreboard.record_game_over(&stats(&[1]));
        assert_eq!(scoreboard.best().score, 500);

        let notices = scoreboard.into_notices();
        assert_eq!(notices.len(), 2);
        assert!(matches!(&notices[0], Notice::NewRecord(record) if record.score == 500));
        assert_eq!(
            notices[1].to_string(),
            "Game over! Score: 100, Level: 1, Chains: 1 (High score: 500)"
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_failures_become_warnings() {
        let dir = temp_path("failure");
        fs::create_dir_all(&dir).unwrap();
        // A directory can be neither read nor written as a file.
        let store = HighScoreStore::new(Some(dir.clone()));
        let mut scoreboard = Scoreboard::load(store);
        assert_eq!(scoreboard.best(), &HighScoreRecord::default());

        scoreboard.record_game_over(&stats(&[1]));
        let notices = scoreboard.into_notices();
        assert!(matches!(notices[0], Notice::Warning(_)));
        assert!(notices[0].to_string().starts_with("Warning: Could not load high score"));
        assert!(matches!(notices[1], Notice::Warning(_)));
        assert!(matches!(notices[2], Notice::GameOver { score: 100, .. }));

        let _ = fs::remove_dir_all(&dir);
    }
}

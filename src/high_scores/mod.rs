//! Best-score records, one per game.
//!
//! Records live under `highScore_<game-id>` keys as JSON `{score, date}`.
//! A stored score never decreases: `update` only writes when the new score is
//! strictly higher than the stored one (or nothing is stored yet).

pub mod storage;

pub use storage::{FileStorage, MemoryStorage, Storage};

use crate::constants::HIGH_SCORE_KEY_PREFIX;
use crate::games::GameId;
use chrono::{DateTime, SecondsFormat, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::io;

/// The best score for one game and when it was set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub score: u32,
    /// ISO-8601 UTC timestamp, millisecond precision.
    pub date: String,
}

/// Storage key for a game's record.
pub fn high_score_key(game: GameId) -> String {
    format!("{}{}", HIGH_SCORE_KEY_PREFIX, game.id())
}

/// High-score records on top of a key-value backend.
#[derive(Debug, Clone)]
pub struct HighScores<S = FileStorage> {
    storage: S,
}

impl<S: Storage> HighScores<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stored record, or `None` when missing or corrupt.
    pub fn get(&self, game: GameId) -> Option<HighScore> {
        let key = high_score_key(game);
        let json = self.storage.get(&key)?;
        match serde_json::from_str(&json) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("ignoring corrupt high score under {}: {}", key, e);
                None
            }
        }
    }

    /// Record `score` stamped with the current time if it beats the stored one.
    pub fn update(&mut self, game: GameId, score: u32) -> io::Result<HighScore> {
        self.update_at(game, score, Utc::now())
    }

    /// Record `score` stamped with `now` if it beats the stored one.
    ///
    /// Returns the record that is stored afterwards: the new one, or the
    /// unchanged existing one.
    pub fn update_at(
        &mut self,
        game: GameId,
        score: u32,
        now: DateTime<Utc>,
    ) -> io::Result<HighScore> {
        if let Some(current) = self.get(game) {
            if score <= current.score {
                return Ok(current);
            }
        }

        let record = HighScore {
            score,
            date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        let json = serde_json::to_string(&record)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.storage.set(&high_score_key(game), &json)?;

        info!("new {} high score: {}", game.id(), score);
        Ok(record)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn memory_scores() -> HighScores<MemoryStorage> {
        HighScores::new(MemoryStorage::new())
    }

    #[test]
    fn test_keys_are_namespaced() {
        assert_eq!(high_score_key(GameId::Snake), "highScore_snake");
        assert_eq!(high_score_key(GameId::FlappyBird), "highScore_flappy-bird");
    }

    #[test]
    fn test_get_missing_is_none() {
        let scores = memory_scores();
        assert!(scores.get(GameId::Snake).is_none());
    }

    #[test]
    fn test_first_update_always_stores() {
        let mut scores = memory_scores();
        let record = scores.update_at(GameId::Snake, 0, at(0)).unwrap();
        assert_eq!(record.score, 0);
        assert_eq!(record.date, "1970-01-01T00:00:00.000Z");
        assert_eq!(scores.get(GameId::Snake), Some(record));
    }

    #[test]
    fn test_lower_or_equal_score_keeps_record() {
        let mut scores = memory_scores();
        let best = scores.update_at(GameId::Snake, 50, at(100)).unwrap();

        assert_eq!(scores.update_at(GameId::Snake, 30, at(200)).unwrap(), best);
        assert_eq!(scores.update_at(GameId::Snake, 50, at(300)).unwrap(), best);
        assert_eq!(scores.get(GameId::Snake), Some(best));
    }

    #[test]
    fn test_higher_score_replaces_score_and_date() {
        let mut scores = memory_scores();
        scores.update_at(GameId::FlappyBird, 3, at(100)).unwrap();
        let record = scores.update_at(GameId::FlappyBird, 4, at(200)).unwrap();
        assert_eq!(record.score, 4);
        assert_eq!(record.date, "1970-01-01T00:03:20.000Z");
        assert_eq!(scores.get(GameId::FlappyBird), Some(record));
    }

    #[test]
    fn test_games_are_independent() {
        let mut scores = memory_scores();
        scores.update_at(GameId::Snake, 90, at(1)).unwrap();
        assert!(scores.get(GameId::FlappyBird).is_none());
        let flappy = scores.update_at(GameId::FlappyBird, 2, at(2)).unwrap();
        assert_eq!(flappy.score, 2);
        assert_eq!(scores.get(GameId::Snake).map(|r| r.score), Some(90));
    }

    #[test]
    fn test_corrupt_record_reads_as_none() {
        let mut storage = MemoryStorage::new();
        storage.set("highScore_snake", "not json").unwrap();
        let mut scores = HighScores::new(storage);
        assert!(scores.get(GameId::Snake).is_none());

        // And gets overwritten by the next score
        let record = scores.update_at(GameId::Snake, 10, at(5)).unwrap();
        assert_eq!(scores.get(GameId::Snake), Some(record));
    }

    #[test]
    fn test_record_json_shape() {
        let record = HighScore {
            score: 120,
            date: "2024-01-02T03:04:05.678Z".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"score":120,"date":"2024-01-02T03:04:05.678Z"}"#);
    }
}

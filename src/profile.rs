//! Lifetime statistics and the local high-score table
//!
//! The engine reports a `SessionSummary` when a run ends; this module folds
//! summaries into durable per-player data. Actual storage — disk, cloud
//! sync, leaderboard upload — is the host's job: everything here is a plain
//! serde value with JSON helpers.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::{BonusKind, ObstacleKind, SessionSummary};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Score achieved
    pub score: u32,
    /// Unix timestamp (ms) when achieved, supplied by the host
    pub timestamp_ms: f64,
}

/// Local high score table, sorted descending by score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the table
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Rank a score would achieve (1-indexed), `None` if it doesn't qualify
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Insert a qualifying score at its rank, trimming the table.
    /// Returns the rank achieved (1-indexed), `None` if it didn't qualify.
    pub fn add_score(&mut self, score: u32, timestamp_ms: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            timestamp_ms,
        };
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

/// Totals accumulated across every recorded session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifetimeStats {
    pub total_games: u32,
    pub total_taps: u32,
    pub total_play_time_ms: u64,
    pub total_coins_earned: u32,
    pub total_score: u64,
    pub total_deaths: u32,
    /// Indexed by `ObstacleKind::index`; boundary deaths count only in
    /// `total_deaths`
    pub deaths_by_obstacle: [u32; 4],
    pub total_bonuses: u32,
    /// Indexed by `BonusKind::index`
    pub bonuses_by_kind: [u32; 4],
}

impl LifetimeStats {
    pub fn deaths_by(&self, kind: ObstacleKind) -> u32 {
        self.deaths_by_obstacle[kind.index()]
    }

    pub fn bonuses_of(&self, kind: BonusKind) -> u32 {
        self.bonuses_by_kind[kind.index()]
    }
}

/// Durable per-player data: balance, records, stats, preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub high_score: u32,
    /// Spendable coin balance
    pub coins: u32,
    pub stats: LifetimeStats,
    pub settings: Settings,
    pub scores: HighScores,
}

impl PlayerProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished session into the profile. Returns the high-score
    /// rank the session achieved, if it qualified.
    pub fn record_session(
        &mut self,
        summary: &SessionSummary,
        timestamp_ms: f64,
    ) -> Option<usize> {
        self.coins += summary.coins;
        self.high_score = self.high_score.max(summary.score);

        let stats = &mut self.stats;
        stats.total_games += 1;
        stats.total_taps += summary.tap_count;
        stats.total_play_time_ms += summary.play_time_ms;
        stats.total_coins_earned += summary.coins;
        stats.total_score += u64::from(summary.score);
        stats.total_deaths += 1;
        if let Some(kind) = summary.death_cause {
            stats.deaths_by_obstacle[kind.index()] += 1;
        }
        for bonus in &summary.bonuses_collected {
            stats.total_bonuses += bonus.count;
            stats.bonuses_by_kind[bonus.kind.index()] += bonus.count;
        }

        log::info!(
            "session recorded: score={} high_score={} games={}",
            summary.score,
            self.high_score,
            stats.total_games,
        );
        self.scores.add_score(summary.score, timestamp_ms)
    }

    /// Serialize for the host's storage layer
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Restore from the host's storage layer
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

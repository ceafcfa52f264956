//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Step-driven only (the host frame clock supplies elapsed milliseconds)
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies
//!
//! The engine mutates exactly one `GameState`; hosts read snapshots and the
//! `StepResult` event stream and must not re-enter `update` from a handler.

pub mod collision;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use state::{
    ActiveBonuses, Bonus, BonusCount, BonusKind, EffectKind, GameState, Obstacle, ObstacleBody,
    ObstacleKind, Player, SessionSummary, BONUS_KINDS, OBSTACLE_KINDS,
};
pub use tick::{Engine, GameEvent, HapticKind, SoundCue, StepResult};

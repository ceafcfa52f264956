//! Astro Dash - simulation core for an endless side-scrolling space dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, spawning, game state)
//! - `config`: Injectable engine tunables
//! - `profile`: Lifetime statistics and local high scores
//! - `settings`: Player preference toggles
//!
//! The crate has no rendering, audio, or network dependencies. A host drives
//! the engine with a frame clock and discrete jump inputs, and consumes the
//! events each step emits (sound cues, haptics, score changes, game over).

pub mod config;
pub mod profile;
pub mod settings;
pub mod sim;

pub use config::EngineConfig;
pub use profile::{HighScores, PlayerProfile};
pub use settings::Settings;
pub use sim::{Engine, GameEvent, GameState, SessionSummary, StepResult};

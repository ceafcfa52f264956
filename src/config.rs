//! Engine tunables
//!
//! Geometry, physics, and pacing constants are injected at engine
//! construction as a value object, so tests can run at arbitrary resolutions
//! and hosts can ship tuned variants without rebuilding.

use serde::{Deserialize, Serialize};

/// Tunable constants for one engine instance.
///
/// `Default` reproduces the shipped balance: a 400x800 logical screen with a
/// 40-unit player at x=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Logical screen width
    pub screen_width: f32,
    /// Logical screen height
    pub screen_height: f32,
    /// Player square hit size
    pub player_size: f32,
    /// Fixed horizontal player position
    pub player_x: f32,
    /// Downward acceleration applied each step
    pub gravity: f32,
    /// Vertical velocity set on jump (negative is up)
    pub jump_strength: f32,
    /// Base horizontal world speed per step, before difficulty scaling
    pub base_speed: f32,

    // Spawning
    /// Live-obstacle cap; spawn timer expiries beyond this are ignored
    pub max_live_obstacles: usize,
    /// Obstacle spawn interval at score 0
    pub obstacle_interval_base_ms: f32,
    /// Obstacle spawn interval never drops below this
    pub obstacle_interval_floor_ms: f32,
    /// Interval reduction per point of score
    pub obstacle_interval_per_score_ms: f32,
    /// Fixed bonus spawn interval, independent of score
    pub bonus_interval_ms: f32,
    /// Bonus square hit size
    pub bonus_size: f32,
    /// Placement retries before a bonus spawn is abandoned
    pub bonus_placement_attempts: u32,

    // Timed effects
    pub shield_duration_ms: f32,
    pub magnet_duration_ms: f32,
    pub slowmo_duration_ms: f32,
    /// Coins inside this radius home toward the player while magnet is active
    pub magnet_radius: f32,
    /// Homing step distance per frame
    pub magnet_pull: f32,
    /// Gravity multiplier while slowmo is active
    pub slowmo_gravity_scale: f32,
    /// World-speed multiplier while slowmo is active
    pub slowmo_speed_scale: f32,

    // Difficulty
    /// Score points per game-speed step
    pub speed_step_score: u32,
    /// Game-speed gain per step
    pub speed_step_gain: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            screen_width: 400.0,
            screen_height: 800.0,
            player_size: 40.0,
            player_x: 100.0,
            gravity: 0.4,
            jump_strength: -10.0,
            base_speed: 2.0,

            max_live_obstacles: 4,
            obstacle_interval_base_ms: 1500.0,
            obstacle_interval_floor_ms: 1000.0,
            obstacle_interval_per_score_ms: 8.0,
            bonus_interval_ms: 5000.0,
            bonus_size: 30.0,
            bonus_placement_attempts: 10,

            shield_duration_ms: 3000.0,
            magnet_duration_ms: 5000.0,
            slowmo_duration_ms: 2000.0,
            magnet_radius: 200.0,
            magnet_pull: 5.0,
            slowmo_gravity_scale: 0.3,
            slowmo_speed_scale: 0.5,

            speed_step_score: 15,
            speed_step_gain: 0.05,
        }
    }
}

impl EngineConfig {
    /// Highest y the player can occupy without leaving the screen
    pub fn floor_y(&self) -> f32 {
        self.screen_height - self.player_size
    }
}

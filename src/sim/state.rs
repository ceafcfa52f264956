//! Game state and core simulation types
//!
//! Everything a host needs to render a frame or save a snapshot lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Comet,
    Asteroid,
    Drone,
    Wall,
}

/// Every kind, in counter-array order
pub const OBSTACLE_KINDS: [ObstacleKind; 4] = [
    ObstacleKind::Comet,
    ObstacleKind::Asteroid,
    ObstacleKind::Drone,
    ObstacleKind::Wall,
];

impl ObstacleKind {
    /// Stable index into per-kind counter arrays
    pub fn index(self) -> usize {
        match self {
            ObstacleKind::Comet => 0,
            ObstacleKind::Asteroid => 1,
            ObstacleKind::Drone => 2,
            ObstacleKind::Wall => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ObstacleKind::Comet => "comet",
            ObstacleKind::Asteroid => "asteroid",
            ObstacleKind::Drone => "drone",
            ObstacleKind::Wall => "wall",
        }
    }
}

/// Kind-specific obstacle payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObstacleBody {
    /// Falls down-and-left, a diagonal streak
    Comet,
    /// Pure leftward linear motion
    Asteroid,
    /// Patrols a closed 3-point waypoint loop anchored left of its spawn;
    /// `target` indexes the waypoint currently being chased
    Drone { waypoints: [Vec2; 3], target: usize },
    /// Top/bottom pair with a passable vertical gap. The obstacle's `height`
    /// is the top segment; the bottom segment starts at `height + gap`.
    Wall { gap: f32 },
}

impl ObstacleBody {
    pub fn kind(&self) -> ObstacleKind {
        match self {
            ObstacleBody::Comet => ObstacleKind::Comet,
            ObstacleBody::Asteroid => ObstacleKind::Asteroid,
            ObstacleBody::Drone { .. } => ObstacleKind::Drone,
            ObstacleBody::Wall { .. } => ObstacleKind::Wall,
        }
    }
}

/// A transient obstacle entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Set when cleared for score or absorbed by the shield
    pub passed: bool,
    pub body: ObstacleBody,
}

impl Obstacle {
    pub fn kind(&self) -> ObstacleKind {
        self.body.kind()
    }

    /// Right edge; the player scores once its x passes this
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }
}

/// Bonus variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusKind {
    Shield,
    Magnet,
    Slowmo,
    Coin,
}

/// Every kind, in counter-array and uniform-draw order
pub const BONUS_KINDS: [BonusKind; 4] = [
    BonusKind::Shield,
    BonusKind::Magnet,
    BonusKind::Slowmo,
    BonusKind::Coin,
];

impl BonusKind {
    /// Stable index into per-kind counter arrays
    pub fn index(self) -> usize {
        match self {
            BonusKind::Shield => 0,
            BonusKind::Magnet => 1,
            BonusKind::Slowmo => 2,
            BonusKind::Coin => 3,
        }
    }
}

/// A collectible bonus entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bonus {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub kind: BonusKind,
    pub collected: bool,
}

/// Timed effect kinds; coins are instantaneous and carry no timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    Shield,
    Magnet,
    Slowmo,
}

impl EffectKind {
    pub const ALL: [EffectKind; 3] = [EffectKind::Shield, EffectKind::Magnet, EffectKind::Slowmo];

    pub fn index(self) -> usize {
        match self {
            EffectKind::Shield => 0,
            EffectKind::Magnet => 1,
            EffectKind::Slowmo => 2,
        }
    }
}

/// The player avatar. x is fixed for the whole session; only y moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub velocity_y: f32,
    /// Square hit size
    pub size: f32,
    /// Visual tilt in degrees, derived from velocity; not used in collision
    pub rotation: f32,
}

/// Flags for currently active timed effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActiveBonuses {
    pub shield: bool,
    pub magnet: bool,
    pub slowmo: bool,
}

impl ActiveBonuses {
    pub fn set(&mut self, kind: EffectKind, on: bool) {
        match kind {
            EffectKind::Shield => self.shield = on,
            EffectKind::Magnet => self.magnet = on,
            EffectKind::Slowmo => self.slowmo = on,
        }
    }

    pub fn get(&self, kind: EffectKind) -> bool {
        match kind {
            EffectKind::Shield => self.shield,
            EffectKind::Magnet => self.magnet,
            EffectKind::Slowmo => self.slowmo,
        }
    }
}

/// Complete game state (serializable snapshot)
///
/// Owned and mutated exclusively by the engine; hosts read `&GameState`
/// views and must not hold them across steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub bonuses: Vec<Bonus>,
    /// +1 per obstacle cleared
    pub score: u32,
    /// +1 per coin bonus collected
    pub coins: u32,
    pub game_over: bool,
    pub game_started: bool,
    pub active: ActiveBonuses,
    /// Difficulty multiplier, a step function of score
    pub game_speed: f32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh, not-yet-started state: player vertically centered, empty arena
    pub fn initial(config: &EngineConfig) -> Self {
        Self {
            player: Player {
                pos: Vec2::new(
                    config.player_x,
                    config.screen_height / 2.0 - config.player_size / 2.0,
                ),
                velocity_y: 0.0,
                size: config.player_size,
                rotation: 0.0,
            },
            obstacles: Vec::new(),
            bonuses: Vec::new(),
            score: 0,
            coins: 0,
            game_over: false,
            game_started: false,
            active: ActiveBonuses::default(),
            game_speed: 1.0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Per-kind bonus collection count in a session report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusCount {
    pub kind: BonusKind,
    pub count: u32,
}

/// End-of-session report, derived from counters accumulated since `start()`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u32,
    pub coins: u32,
    pub play_time_ms: u64,
    pub tap_count: u32,
    /// Which obstacle kind killed the player; `None` for a boundary death
    pub death_cause: Option<ObstacleKind>,
    /// Only kinds with a nonzero count appear
    pub bonuses_collected: Vec<BonusCount>,
}

//! Procedural spawning
//!
//! Obstacles arrive on a score-tightened timer behind a live-count cap;
//! bonuses arrive on a fixed timer with best-effort collision-free placement.
//! All randomness flows through the engine's seeded RNG stream.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::aabb_overlap;
use super::state::{Bonus, GameState, Obstacle, ObstacleBody, ObstacleKind, BONUS_KINDS};
use crate::config::EngineConfig;

/// Kind weights for the obstacle draw: asteroid heaviest, comet lightest
const COMET_WEIGHT: f32 = 0.15;
const ASTEROID_WEIGHT: f32 = 0.40;
const DRONE_WEIGHT: f32 = 0.25;

/// Kind-specific spawn geometry
const COMET_SIZE: (f32, f32) = (35.0, 35.0);
const ASTEROID_SIZE: (f32, f32) = (50.0, 50.0);
const DRONE_SIZE: (f32, f32) = (45.0, 25.0);
const WALL_WIDTH: f32 = 70.0;
const WALL_GAP_MIN: f32 = 180.0;
const WALL_GAP_MAX: f32 = 220.0;
/// Neither wall segment may shrink below this
const WALL_MIN_SEGMENT: f32 = 80.0;

/// Current obstacle spawn interval; tightens linearly with score down to a floor
pub fn obstacle_interval_ms(config: &EngineConfig, score: u32) -> f32 {
    (config.obstacle_interval_base_ms - config.obstacle_interval_per_score_ms * score as f32)
        .max(config.obstacle_interval_floor_ms)
}

fn draw_kind(rng: &mut Pcg32) -> ObstacleKind {
    let roll: f32 = rng.random();
    if roll < COMET_WEIGHT {
        ObstacleKind::Comet
    } else if roll < COMET_WEIGHT + ASTEROID_WEIGHT {
        ObstacleKind::Asteroid
    } else if roll < COMET_WEIGHT + ASTEROID_WEIGHT + DRONE_WEIGHT {
        ObstacleKind::Drone
    } else {
        ObstacleKind::Wall
    }
}

/// Spawn one obstacle of a weighted-random kind with kind-specific geometry.
/// The caller enforces the live-obstacle cap.
pub fn spawn_obstacle(state: &mut GameState, config: &EngineConfig, rng: &mut Pcg32) {
    let (w, h) = (config.screen_width, config.screen_height);
    let id = state.next_entity_id();

    let obstacle = match draw_kind(rng) {
        ObstacleKind::Comet => Obstacle {
            id,
            // Streaks in from above at a random column
            pos: Vec2::new(rng.random_range(0.0..w - 100.0), -100.0),
            width: COMET_SIZE.0,
            height: COMET_SIZE.1,
            passed: false,
            body: ObstacleBody::Comet,
        },
        ObstacleKind::Asteroid => Obstacle {
            id,
            pos: Vec2::new(w, rng.random_range(50.0..h - 100.0)),
            width: ASTEROID_SIZE.0,
            height: ASTEROID_SIZE.1,
            passed: false,
            body: ObstacleBody::Asteroid,
        },
        ObstacleKind::Drone => {
            let start_y = rng.random_range(50.0..h - 50.0);
            Obstacle {
                id,
                pos: Vec2::new(w, start_y),
                width: DRONE_SIZE.0,
                height: DRONE_SIZE.1,
                passed: false,
                // Patrol anchors march left of the spawn column; the last
                // one sits past the screen edge so the loop exits stage left
                body: ObstacleBody::Drone {
                    waypoints: [
                        Vec2::new(w - 200.0, start_y),
                        Vec2::new(w - 400.0, start_y + 60.0),
                        Vec2::new(w - 600.0, start_y - 40.0),
                    ],
                    target: 0,
                },
            }
        }
        ObstacleKind::Wall => {
            let gap = rng.random_range(WALL_GAP_MIN..WALL_GAP_MAX);
            let top_height = rng.random_range(WALL_MIN_SEGMENT..h - gap);
            Obstacle {
                id,
                pos: Vec2::new(w, 0.0),
                width: WALL_WIDTH,
                height: top_height,
                passed: false,
                body: ObstacleBody::Wall { gap },
            }
        }
    };

    state.obstacles.push(obstacle);
}

/// Probe square vs every live obstacle AABB
fn position_occupied(state: &GameState, pos: Vec2, size: f32) -> bool {
    state.obstacles.iter().any(|o| {
        aabb_overlap(
            pos.x, pos.y, size, size, o.pos.x, o.pos.y, o.width, o.height,
        )
    })
}

/// Spawn one bonus of a uniform-random kind at a collision-free position.
///
/// Best-effort: a bounded number of placements is tried, and the spawn is
/// silently skipped when the screen is too crowded.
pub fn spawn_bonus(state: &mut GameState, config: &EngineConfig, rng: &mut Pcg32) {
    let kind = BONUS_KINDS[rng.random_range(0..BONUS_KINDS.len())];

    for _ in 0..config.bonus_placement_attempts {
        let pos = Vec2::new(
            config.screen_width,
            rng.random_range(0.0..config.screen_height - 50.0),
        );
        if !position_occupied(state, pos, config.bonus_size) {
            let id = state.next_entity_id();
            state.bonuses.push(Bonus {
                id,
                pos,
                kind,
                collected: false,
            });
            return;
        }
    }

    log::debug!("bonus spawn skipped, no free slot for {kind:?}");
}

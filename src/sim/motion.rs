//! Per-kind obstacle trajectories and despawn rules
//!
//! All horizontal world motion is scaled by the difficulty multiplier and
//! halved while slowmo is active. Removal is one explicit bounds predicate
//! per kind, so the spawn/despawn contract stays auditable in isolation.

use super::state::{BonusKind, GameState, Obstacle, ObstacleBody};
use crate::config::EngineConfig;

/// Despawn margin past the left edge for asteroids and walls
const LEFT_MARGIN: f32 = 50.0;
/// Drones patrol further off-screen before being reclaimed
const DRONE_LEFT_MARGIN: f32 = 100.0;
/// Comets are reclaimed this far below the bottom edge
const BOTTOM_MARGIN: f32 = 100.0;

/// Effective world speed for this step
pub fn world_speed(state: &GameState, config: &EngineConfig) -> f32 {
    let slowmo = if state.active.slowmo {
        config.slowmo_speed_scale
    } else {
        1.0
    };
    config.base_speed * state.game_speed * slowmo
}

/// Advance every obstacle one step, then drop the ones out of bounds
pub fn step_obstacles(state: &mut GameState, config: &EngineConfig) {
    let speed = world_speed(state, config);

    for obstacle in &mut state.obstacles {
        match &mut obstacle.body {
            ObstacleBody::Comet => {
                // Falling diagonal streak: mostly down, drifting left
                obstacle.pos.y += speed * 1.2;
                obstacle.pos.x -= speed * 0.3;
            }
            ObstacleBody::Asteroid | ObstacleBody::Wall { .. } => {
                obstacle.pos.x -= speed;
            }
            ObstacleBody::Drone { waypoints, target } => {
                let goal = waypoints[*target];
                let delta = goal - obstacle.pos;
                let distance = delta.length();
                if distance < speed {
                    // Close enough; chase the next waypoint, wrapping the loop
                    *target = (*target + 1) % waypoints.len();
                } else {
                    obstacle.pos += delta / distance * speed;
                }
            }
        }
    }

    state.obstacles.retain(|o| !out_of_bounds(o, config));
}

/// Kind-specific lifetime rule
pub fn out_of_bounds(obstacle: &Obstacle, config: &EngineConfig) -> bool {
    match &obstacle.body {
        ObstacleBody::Comet => obstacle.pos.y > config.screen_height + BOTTOM_MARGIN,
        ObstacleBody::Asteroid | ObstacleBody::Wall { .. } => {
            obstacle.pos.x + obstacle.width < -LEFT_MARGIN
        }
        ObstacleBody::Drone { waypoints, target } => {
            // The distance rule decides; a completed patrol loop only ever
            // removes a drone that is already far off-screen
            let far_left = obstacle.pos.x + obstacle.width < -DRONE_LEFT_MARGIN;
            let loop_done =
                *target == waypoints.len() - 1 && obstacle.pos.x < -DRONE_LEFT_MARGIN;
            far_left || loop_done
        }
    }
}

/// Drift uncollected bonuses leftward, home coins while magnet is active,
/// and drop collected or off-screen entries
pub fn step_bonuses(state: &mut GameState, config: &EngineConfig) {
    let speed = world_speed(state, config);
    let player_pos = state.player.pos;
    let magnet = state.active.magnet;

    for bonus in &mut state.bonuses {
        if bonus.collected {
            continue;
        }
        bonus.pos.x -= speed;

        if magnet && bonus.kind == BonusKind::Coin {
            let delta = player_pos - bonus.pos;
            let distance = delta.length();
            if distance > 0.0 && distance < config.magnet_radius {
                bonus.pos += delta / distance * config.magnet_pull;
            }
        }
    }

    let size = config.bonus_size;
    state
        .bonuses
        .retain(|b| !b.collected && b.pos.x + size > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Bonus;
    use glam::Vec2;

    fn test_state(config: &EngineConfig) -> GameState {
        let mut state = GameState::initial(config);
        state.game_started = true;
        state
    }

    fn push_obstacle(state: &mut GameState, pos: Vec2, width: f32, height: f32, body: ObstacleBody) {
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            pos,
            width,
            height,
            passed: false,
            body,
        });
    }

    #[test]
    fn test_asteroid_moves_left_at_world_speed() {
        let config = EngineConfig::default();
        let mut state = test_state(&config);
        push_obstacle(
            &mut state,
            Vec2::new(400.0, 300.0),
            50.0,
            50.0,
            ObstacleBody::Asteroid,
        );

        step_obstacles(&mut state, &config);
        assert_eq!(state.obstacles[0].pos, Vec2::new(398.0, 300.0));
    }

    #[test]
    fn test_comet_falls_diagonally() {
        let config = EngineConfig::default();
        let mut state = test_state(&config);
        push_obstacle(
            &mut state,
            Vec2::new(200.0, -100.0),
            35.0,
            35.0,
            ObstacleBody::Comet,
        );

        step_obstacles(&mut state, &config);
        let comet = &state.obstacles[0];
        // Descends faster than it drifts left
        assert!((comet.pos.y - (-97.6)).abs() < 1e-4);
        assert!((comet.pos.x - 199.4).abs() < 1e-4);
    }

    #[test]
    fn test_slowmo_halves_world_speed() {
        let config = EngineConfig::default();
        let mut state = test_state(&config);
        state.active.slowmo = true;
        push_obstacle(
            &mut state,
            Vec2::new(400.0, 300.0),
            50.0,
            50.0,
            ObstacleBody::Asteroid,
        );

        step_obstacles(&mut state, &config);
        assert_eq!(state.obstacles[0].pos.x, 399.0);
    }

    #[test]
    fn test_drone_advances_waypoints_and_wraps() {
        let config = EngineConfig::default();
        let mut state = test_state(&config);
        let waypoints = [
            Vec2::new(200.0, 300.0),
            Vec2::new(0.0, 360.0),
            Vec2::new(-200.0, 260.0),
        ];
        push_obstacle(
            &mut state,
            Vec2::new(200.5, 300.0),
            45.0,
            25.0,
            ObstacleBody::Drone {
                waypoints,
                target: 0,
            },
        );

        // Within one step of waypoint 0: index advances without moving
        step_obstacles(&mut state, &config);
        match &state.obstacles[0].body {
            ObstacleBody::Drone { target, .. } => assert_eq!(*target, 1),
            other => panic!("unexpected body {other:?}"),
        }
        assert_eq!(state.obstacles[0].pos, Vec2::new(200.5, 300.0));

        // Next step moves toward waypoint 1 by exactly the world speed
        step_obstacles(&mut state, &config);
        let moved = state.obstacles[0].pos;
        let distance = (Vec2::new(200.5, 300.0) - moved).length();
        assert!((distance - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_despawn_rules_per_kind() {
        let config = EngineConfig::default();

        let comet_low = Obstacle {
            id: 1,
            pos: Vec2::new(100.0, config.screen_height + 101.0),
            width: 35.0,
            height: 35.0,
            passed: false,
            body: ObstacleBody::Comet,
        };
        assert!(out_of_bounds(&comet_low, &config));

        let asteroid_left = Obstacle {
            id: 2,
            pos: Vec2::new(-101.0, 200.0),
            width: 50.0,
            height: 50.0,
            passed: false,
            body: ObstacleBody::Asteroid,
        };
        assert!(out_of_bounds(&asteroid_left, &config));

        // A drone past -50 but not past -100 is still alive
        let drone_near = Obstacle {
            id: 3,
            pos: Vec2::new(-90.0, 200.0),
            width: 45.0,
            height: 25.0,
            passed: false,
            body: ObstacleBody::Drone {
                waypoints: [Vec2::ZERO, Vec2::ZERO, Vec2::ZERO],
                target: 0,
            },
        };
        assert!(!out_of_bounds(&drone_near, &config));

        let drone_far = Obstacle {
            pos: Vec2::new(-146.0, 200.0),
            ..drone_near.clone()
        };
        assert!(out_of_bounds(&drone_far, &config));
    }

    #[test]
    fn test_magnet_pulls_coin_strictly_closer() {
        let config = EngineConfig::default();
        let mut state = test_state(&config);
        state.active.magnet = true;
        state.bonuses.push(Bonus {
            id: 1,
            pos: state.player.pos + Vec2::new(150.0, 0.0),
            kind: BonusKind::Coin,
            collected: false,
        });

        let mut last = 150.0;
        for _ in 0..10 {
            step_bonuses(&mut state, &config);
            let distance = (state.bonuses[0].pos - state.player.pos).length();
            assert!(distance < last, "coin must home in every step");
            last = distance;
        }
    }

    #[test]
    fn test_magnet_ignores_non_coins() {
        let config = EngineConfig::default();
        let mut state = test_state(&config);
        state.active.magnet = true;
        state.bonuses.push(Bonus {
            id: 1,
            pos: state.player.pos + Vec2::new(150.0, 0.0),
            kind: BonusKind::Shield,
            collected: false,
        });

        step_bonuses(&mut state, &config);
        // Plain leftward drift only
        let expected = state.player.pos + Vec2::new(148.0, 0.0);
        assert_eq!(state.bonuses[0].pos, expected);
    }

    #[test]
    fn test_collected_and_offscreen_bonuses_are_dropped() {
        let config = EngineConfig::default();
        let mut state = test_state(&config);
        state.bonuses.push(Bonus {
            id: 1,
            pos: Vec2::new(200.0, 200.0),
            kind: BonusKind::Coin,
            collected: true,
        });
        state.bonuses.push(Bonus {
            id: 2,
            pos: Vec2::new(-31.0, 200.0),
            kind: BonusKind::Slowmo,
            collected: false,
        });
        state.bonuses.push(Bonus {
            id: 3,
            pos: Vec2::new(200.0, 400.0),
            kind: BonusKind::Magnet,
            collected: false,
        });

        step_bonuses(&mut state, &config);
        assert_eq!(state.bonuses.len(), 1);
        assert_eq!(state.bonuses[0].id, 3);
    }
}

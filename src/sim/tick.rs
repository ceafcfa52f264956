//! Engine control surface and step function
//!
//! A single-threaded, frame-driven state machine: the host's frame clock
//! calls `update` with elapsed milliseconds and reads the emitted events off
//! the returned `StepResult`. The engine never blocks, schedules, or calls
//! out; sounds, haptics, and persistence are all requested as events.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{
    ActiveBonuses, BonusCount, BonusKind, EffectKind, GameState, ObstacleKind, SessionSummary,
    BONUS_KINDS,
};
use super::{collision, motion, spawn};
use crate::config::EngineConfig;

/// Sound cues the host may play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    Jump,
    CoinCollect,
    BonusCollect,
    ObstacleHit,
}

/// Haptic feedback strengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HapticKind {
    Light,
    Medium,
    Heavy,
    Success,
    Warning,
}

/// One event emitted by an engine call. Fire-and-forget from the engine's
/// point of view; the host decides what to do with each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Sound(SoundCue),
    Haptic(HapticKind),
    ScoreChanged { score: u32, coins: u32 },
    GameOver { summary: SessionSummary },
}

/// Ordered events produced by one control-surface call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepResult {
    pub events: Vec<GameEvent>,
}

impl StepResult {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Countdowns for the three timed effects; a `None` slot is inactive.
/// Re-collecting an active effect overwrites the remaining time.
#[derive(Debug, Clone, Default)]
struct EffectTimers([Option<f32>; 3]);

impl EffectTimers {
    fn activate(&mut self, kind: EffectKind, duration_ms: f32) {
        self.0[kind.index()] = Some(duration_ms);
    }

    /// Count down, clearing expired slots and their state flags
    fn tick(&mut self, delta_ms: f32, active: &mut ActiveBonuses) {
        for kind in EffectKind::ALL {
            let slot = &mut self.0[kind.index()];
            if let Some(remaining) = slot {
                *remaining -= delta_ms;
                if *remaining <= 0.0 {
                    *slot = None;
                    active.set(kind, false);
                }
            }
        }
    }

    fn clear(&mut self) {
        self.0 = [None; 3];
    }

    #[cfg(test)]
    fn is_active(&self, kind: EffectKind) -> bool {
        self.0[kind.index()].is_some()
    }
}

/// The game simulation engine.
///
/// Owns the `GameState` and every session counter. Drive it with `start`,
/// `jump`, and `update`; read snapshots with `state` and the terminal report
/// with `session_summary`.
pub struct Engine {
    config: EngineConfig,
    state: GameState,
    rng: Pcg32,

    // Spawn and effect timers
    obstacle_timer_ms: f32,
    bonus_timer_ms: f32,
    effects: EffectTimers,

    // Session statistics
    tap_count: u32,
    play_time_ms: f32,
    death_cause: Option<ObstacleKind>,
    bonus_counts: [u32; 4],

    /// Exactly-once guard for the terminal event
    over_signaled: bool,
    /// Events raised between frames (jump, start), delivered with the next
    /// live update
    pending: Vec<GameEvent>,
}

impl Engine {
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        let state = GameState::initial(&config);
        Self {
            config,
            state,
            rng: Pcg32::seed_from_u64(seed),
            obstacle_timer_ms: 0.0,
            bonus_timer_ms: 0.0,
            effects: EffectTimers::default(),
            tap_count: 0,
            play_time_ms: 0.0,
            death_cause: None,
            bonus_counts: [0; 4],
            over_signaled: false,
            pending: Vec::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Live state snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Fresh, not-yet-started template state. Idempotent, no side effects.
    pub fn initial_state(&self) -> GameState {
        GameState::initial(&self.config)
    }

    /// Begin a session: reset state and every session counter, start the
    /// play-time stopwatch, and clear the game-over latch.
    pub fn start(&mut self) -> StepResult {
        self.state = GameState::initial(&self.config);
        self.state.game_started = true;

        self.obstacle_timer_ms = 0.0;
        self.bonus_timer_ms = 0.0;
        self.effects.clear();
        self.tap_count = 0;
        self.play_time_ms = 0.0;
        self.death_cause = None;
        self.bonus_counts = [0; 4];
        self.over_signaled = false;
        self.pending.clear();

        log::info!("session started");
        StepResult {
            events: vec![GameEvent::ScoreChanged { score: 0, coins: 0 }],
        }
    }

    /// Apply the jump impulse. Silent no-op when the session is over or has
    /// not started; the frame loop may deliver taps slightly out of phase.
    pub fn jump(&mut self) {
        if self.state.game_over || !self.state.game_started {
            return;
        }
        self.state.player.velocity_y = self.config.jump_strength;
        self.tap_count += 1;
        self.pending.push(GameEvent::Sound(SoundCue::Jump));
    }

    /// Re-initialize to the template state and clear the latch
    pub fn reset(&mut self) {
        self.state = GameState::initial(&self.config);
        self.obstacle_timer_ms = 0.0;
        self.bonus_timer_ms = 0.0;
        self.effects.clear();
        self.over_signaled = false;
        self.pending.clear();
    }

    /// Advance the simulation by one step of `delta_ms` elapsed time.
    ///
    /// Total no-op on a terminal or unstarted state: no mutation may happen
    /// after game over, so the terminal event fires exactly once.
    pub fn update(&mut self, delta_ms: f32) -> StepResult {
        let mut result = StepResult::default();
        if self.state.game_over || !self.state.game_started {
            return result;
        }
        result.events.append(&mut self.pending);

        self.play_time_ms += delta_ms;

        self.step_player(&mut result);
        motion::step_obstacles(&mut self.state, &self.config);
        motion::step_bonuses(&mut self.state, &self.config);
        self.effects.tick(delta_ms, &mut self.state.active);
        self.step_spawners(delta_ms);
        self.handle_collisions(&mut result);
        self.update_score(&mut result);
        self.state.game_speed = 1.0
            + (self.state.score / self.config.speed_step_score) as f32
                * self.config.speed_step_gain;

        result
    }

    /// Terminal report from the counters accumulated since `start`
    pub fn session_summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.state.score,
            coins: self.state.coins,
            play_time_ms: self.play_time_ms as u64,
            tap_count: self.tap_count,
            death_cause: self.death_cause,
            bonuses_collected: BONUS_KINDS
                .iter()
                .zip(self.bonus_counts)
                .filter(|(_, count)| *count > 0)
                .map(|(kind, count)| BonusCount { kind: *kind, count })
                .collect(),
        }
    }

    /// Gravity integration, visual tilt, and the boundary check. Runs before
    /// any obstacle collision test each step.
    fn step_player(&mut self, result: &mut StepResult) {
        let gravity = if self.state.active.slowmo {
            self.config.gravity * self.config.slowmo_gravity_scale
        } else {
            self.config.gravity
        };
        let shield = self.state.active.shield;
        let floor = self.config.floor_y();

        let out_of_bounds = {
            let player = &mut self.state.player;
            player.velocity_y += gravity;
            player.pos.y += player.velocity_y;
            player.rotation = (player.velocity_y * 3.0).clamp(-30.0, 30.0);
            player.pos.y < 0.0 || player.pos.y > floor
        };

        if out_of_bounds {
            if shield {
                // Bounce: clamp to the edge and reflect at half magnitude
                let player = &mut self.state.player;
                if player.pos.y < 0.0 {
                    player.pos.y = 0.0;
                    player.velocity_y = player.velocity_y.abs() * 0.5;
                } else {
                    player.pos.y = floor;
                    player.velocity_y = -player.velocity_y.abs() * 0.5;
                }
            } else {
                self.end_game(result);
            }
        }
    }

    /// Accumulate both spawn timers and fire the ones past their interval.
    /// The obstacle timer keeps accruing while the live cap blocks it, so a
    /// spawn lands as soon as a slot frees up.
    fn step_spawners(&mut self, delta_ms: f32) {
        self.obstacle_timer_ms += delta_ms;
        self.bonus_timer_ms += delta_ms;

        let interval = spawn::obstacle_interval_ms(&self.config, self.state.score);
        if self.obstacle_timer_ms > interval
            && self.state.obstacles.len() < self.config.max_live_obstacles
        {
            spawn::spawn_obstacle(&mut self.state, &self.config, &mut self.rng);
            self.obstacle_timer_ms = 0.0;
        }

        if self.bonus_timer_ms > self.config.bonus_interval_ms {
            spawn::spawn_bonus(&mut self.state, &self.config, &mut self.rng);
            self.bonus_timer_ms = 0.0;
        }
    }

    fn handle_collisions(&mut self, result: &mut StepResult) {
        let player = self.state.player;
        let shield = self.state.active.shield;

        // Obstacles: a shielded hit absorbs, an unshielded hit ends the
        // session and short-circuits the remaining checks this frame
        let mut death: Option<ObstacleKind> = None;
        for obstacle in &mut self.state.obstacles {
            if collision::player_hits_obstacle(&player, obstacle) {
                if shield {
                    obstacle.passed = true;
                } else {
                    death = Some(obstacle.kind());
                    break;
                }
            }
        }
        if let Some(kind) = death {
            self.death_cause = Some(kind);
            result.events.push(GameEvent::Sound(SoundCue::ObstacleHit));
            result.events.push(GameEvent::Haptic(HapticKind::Heavy));
            self.end_game(result);
            return;
        }

        // Bonuses: collect every overlap, then apply effects
        let mut collected: Vec<BonusKind> = Vec::new();
        for bonus in &mut self.state.bonuses {
            if !bonus.collected
                && collision::player_hits_bonus(&player, bonus, self.config.bonus_size)
            {
                bonus.collected = true;
                collected.push(bonus.kind);
            }
        }
        for kind in collected {
            self.collect_bonus(kind, result);
        }
    }

    fn collect_bonus(&mut self, kind: BonusKind, result: &mut StepResult) {
        self.bonus_counts[kind.index()] += 1;

        match kind {
            BonusKind::Coin => {
                result.events.push(GameEvent::Sound(SoundCue::CoinCollect));
                result.events.push(GameEvent::Haptic(HapticKind::Light));
                self.state.coins += 1;
            }
            BonusKind::Shield => {
                result.events.push(GameEvent::Sound(SoundCue::BonusCollect));
                result.events.push(GameEvent::Haptic(HapticKind::Medium));
                self.activate_effect(EffectKind::Shield);
            }
            BonusKind::Magnet => {
                result.events.push(GameEvent::Sound(SoundCue::BonusCollect));
                result.events.push(GameEvent::Haptic(HapticKind::Medium));
                self.activate_effect(EffectKind::Magnet);
            }
            BonusKind::Slowmo => {
                result.events.push(GameEvent::Sound(SoundCue::BonusCollect));
                result.events.push(GameEvent::Haptic(HapticKind::Medium));
                self.activate_effect(EffectKind::Slowmo);
            }
        }

        result.events.push(GameEvent::ScoreChanged {
            score: self.state.score,
            coins: self.state.coins,
        });
    }

    fn activate_effect(&mut self, kind: EffectKind) {
        let duration = match kind {
            EffectKind::Shield => self.config.shield_duration_ms,
            EffectKind::Magnet => self.config.magnet_duration_ms,
            EffectKind::Slowmo => self.config.slowmo_duration_ms,
        };
        self.state.active.set(kind, true);
        self.effects.activate(kind, duration);
    }

    /// Pass-through scoring: each obstacle scores exactly once, when the
    /// player's x has advanced past its right edge
    fn update_score(&mut self, result: &mut StepResult) {
        let player_x = self.state.player.pos.x;
        let before = self.state.score;

        for obstacle in &mut self.state.obstacles {
            if !obstacle.passed && player_x > obstacle.right() {
                obstacle.passed = true;
                self.state.score += 1;
            }
        }

        if self.state.score != before {
            result.events.push(GameEvent::ScoreChanged {
                score: self.state.score,
                coins: self.state.coins,
            });
        }
    }

    /// Latched termination: the terminal flag and event fire exactly once
    /// per session no matter how many trigger conditions are met
    fn end_game(&mut self, result: &mut StepResult) {
        if self.over_signaled {
            return;
        }
        self.over_signaled = true;
        self.state.game_over = true;

        log::info!(
            "game over: score={} coins={} cause={}",
            self.state.score,
            self.state.coins,
            self.death_cause.map_or("boundary", |k| k.as_str()),
        );
        result.events.push(GameEvent::GameOver {
            summary: self.session_summary(),
        });
    }
}

//! Headless demo driver
//!
//! Runs the simulation with a real frame clock and a trivial autopilot,
//! logging the event stream and printing the session report at the end.
//! Useful for balance tuning and smoke-testing the engine without a host.
//!
//! Usage: `astro-dash [seed]`

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use astro_dash::sim::{Engine, GameEvent, ObstacleBody};
use astro_dash::{EngineConfig, PlayerProfile, Settings};

/// Target frame cadence
const FRAME: Duration = Duration::from_micros(16_667);

/// Pick the vertical line the autopilot steers toward: the nearest upcoming
/// wall gap's center, or mid-screen when no wall is ahead.
fn target_y(engine: &Engine) -> f32 {
    let state = engine.state();
    let config = engine.config();

    let next_wall = state
        .obstacles
        .iter()
        .filter(|o| o.pos.x + o.width > state.player.pos.x)
        .filter_map(|o| match &o.body {
            ObstacleBody::Wall { gap } => Some((o.pos.x, o.pos.y + o.height + gap / 2.0)),
            _ => None,
        })
        .min_by(|a, b| a.0.total_cmp(&b.0));

    match next_wall {
        Some((_, gap_center)) => gap_center,
        None => config.screen_height / 2.0,
    }
}

/// Tap when the player's center has sunk below the target line and is
/// still falling
fn should_jump(engine: &Engine) -> bool {
    let player = engine.state().player;
    let center = player.pos.y + player.size / 2.0;
    player.velocity_y > 0.0 && center > target_y(engine)
}

fn unix_millis() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| unix_millis() as u64);
    log::info!("autoplay demo, seed={seed}");

    let settings = Settings::default();
    let mut profile = PlayerProfile::new();
    let mut engine = Engine::new(EngineConfig::default(), seed);

    let mut events = engine.start().events;
    let mut last = Instant::now();

    let summary = 'session: loop {
        thread::sleep(FRAME);
        let now = Instant::now();
        let delta_ms = now.duration_since(last).as_secs_f32() * 1000.0;
        last = now;

        if should_jump(&engine) {
            engine.jump();
        }
        events.extend(engine.update(delta_ms).events);

        for event in events.drain(..) {
            if !settings.allows(&event) {
                continue;
            }
            match event {
                GameEvent::Sound(cue) => log::debug!("sound: {cue:?}"),
                GameEvent::Haptic(kind) => log::debug!("haptic: {kind:?}"),
                GameEvent::ScoreChanged { score, coins } => {
                    log::info!("score={score} coins={coins}");
                }
                GameEvent::GameOver { summary } => break 'session summary,
            }
        }
    };

    let rank = profile.record_session(&summary, unix_millis());

    println!("--- session over ---");
    println!("score:      {}", summary.score);
    println!("coins:      {}", summary.coins);
    println!("play time:  {:.1}s", summary.play_time_ms as f64 / 1000.0);
    println!("taps:       {}", summary.tap_count);
    match summary.death_cause {
        Some(kind) => println!("death by:   {}", kind.as_str()),
        None => println!("death by:   screen boundary"),
    }
    for bonus in &summary.bonuses_collected {
        println!("bonus {:?}: {}", bonus.kind, bonus.count);
    }
    if let Some(rank) = rank {
        println!("high score rank: #{rank}");
    }
}

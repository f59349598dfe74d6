//! Wave Arena headless entry point
//!
//! Plays one seeded run with the autopilot, recording every frame through the
//! presentation adapter, and prints the final run summary as JSON.
//!
//! Usage: `wave-arena [seed] [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use wave_arena::consts::FRAME_MS;
    use wave_arena::present::{self, Recorder};
    use wave_arena::sim::{GameState, TickOutcome, tick};
    use wave_arena::{Settings, autopilot};

    const MAX_TICKS: u32 = 20_000;

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| match s.parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(_) => {
            log::warn!("Ignoring invalid seed {s:?}");
            None
        }
    });
    let settings_path = args.next().map(PathBuf::from);

    let mut settings = Settings::load_or_default(settings_path.as_deref());
    if let Some(seed) = seed {
        settings.seed = seed;
    }
    log::info!("Wave Arena (headless) starting with seed {}", settings.seed);

    let mut state = GameState::new(settings);
    let mut canvas = Recorder::default();
    let mut now_ms = 0;
    let mut ticks = 0;
    let mut outcome = TickOutcome::Running;

    while ticks < MAX_TICKS {
        let input = autopilot::drive(&state);
        outcome = tick(&mut state, &input, now_ms);
        canvas.clear_commands();
        present::draw(&state, &mut canvas);
        ticks += 1;
        now_ms += FRAME_MS;
        if outcome != TickOutcome::Running {
            break;
        }
    }

    log::info!(
        "Finished after {ticks} ticks ({outcome:?}): wave {}, score {}, {} draw calls in last frame",
        state.run.wave,
        state.run.score,
        canvas.commands.len()
    );
    match serde_json::to_string(&state.run) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to encode run summary: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The simulation is a library on the web; a host page drives `tick` itself
}

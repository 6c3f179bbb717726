//! Swarm Survivor headless runner
//!
//! Drives the game without a window: a scripted player walks through the
//! tutorial, then shoots at the nearest enemy until time runs out. Prints a
//! JSON session summary on exit.
//!
//! Usage: swarm-survivor [--seed N] [--seconds S] [--fps F] [--settings PATH]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;

use swarm_survivor::renderer::CommandBuffer;
use swarm_survivor::{App, Settings};

/// Seconds between autopilot shots
const SHOT_INTERVAL: f32 = 0.15;

#[derive(Parser, Debug)]
#[command(version, about = "Headless Swarm Survivor session", long_about = None)]
struct Args {
    /// RNG seed; overrides the settings file, random when absent from both
    #[arg(long)]
    seed: Option<u64>,
    /// Simulated session length
    #[arg(long, default_value_t = 60.0)]
    seconds: f32,
    /// Simulated frames per second
    #[arg(long, default_value_t = 60.0, value_parser = positive_f32)]
    fps: f32,
    /// JSON settings file; defaults are used when it does not exist
    #[arg(long, default_value = "swarm-survivor.json")]
    settings: PathBuf,
}

fn positive_f32(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(format!("must be positive, got {v}"))
    }
}

/// Scripted player: learn to move, learn to shoot, then defend
struct Autopilot {
    shot_timer: f32,
}

impl Autopilot {
    fn step(&mut self, app: &mut App, t: f32, dt: f32) {
        // Tutorial: walk right for half a second, then fire once
        if t < 0.5 {
            app.key_down("d");
            return;
        }
        app.key_up("d");

        self.shot_timer -= dt;
        if self.shot_timer > 0.0 {
            return;
        }
        self.shot_timer = SHOT_INTERVAL;

        let player = app.state.player.pos;
        let target = app
            .state
            .enemies
            .iter()
            .map(|e| e.pos)
            .min_by(|a, b| {
                a.distance(player)
                    .partial_cmp(&b.distance(player))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(player + Vec2::new(100.0, 0.0));
        app.mouse_move(target);
        app.mouse_down(target);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = Settings::load(&args.settings)
        .with_context(|| format!("loading settings from {}", args.settings.display()))?;
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    let mut app = App::new(&settings).context("starting session")?;

    log::info!("Swarm Survivor (headless) running {}s at {} fps", args.seconds, args.fps);

    let frame_ms = 1000.0 / args.fps as f64;
    let frames = (args.seconds * args.fps).ceil() as u64;
    let mut renderer = CommandBuffer::new(1280.0, 720.0);
    let mut pilot = Autopilot { shot_timer: 0.0 };

    for frame in 0..frames {
        let t = frame as f32 / args.fps;
        if app.state.is_player_dead() {
            break;
        }
        pilot.step(&mut app, t, 1.0 / args.fps);
        app.frame(frame as f64 * frame_ms, &mut renderer);
    }

    let summary = app.summary();
    log::info!("Session over: score {}, health {:.1}", summary.score, summary.health);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

//! Locomotion Simulator - Headless Character Driver
//!
//! Run with: `cargo run --bin locomotion_sim -- --ticks 360`
//!
//! Drives a character rig over a flat ground plane with a scripted input
//! timeline and logs every movement state change:
//!
//! - idle
//! - run forward
//! - sprint (hold)
//! - jump while sprinting
//! - release and stop
//! - swing the camera past the idle tolerance and let the body snap around
//!
//! Log verbosity follows `RUST_LOG` (e.g. `RUST_LOG=stride_engine=debug`).

use std::path::PathBuf;

use clap::Parser;
use stride_engine::prelude::*;
use stride_engine::ConfigError;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "locomotion_sim")]
#[command(about = "Headless third-person locomotion simulation")]
struct Cli {
    /// JSON file with locomotion tunables; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 360)]
    ticks: u64,

    /// Fixed time step in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
}

/// Input event fired at a given tick.
#[derive(Debug, Clone, Copy)]
enum ScriptEvent {
    Move(Vec2),
    Sprint(bool),
    Jump,
    Look(Vec2),
}

/// Scripted input timeline, ordered by tick.
const SCRIPT: &[(u64, ScriptEvent)] = &[
    (30, ScriptEvent::Move(Vec2::new(0.0, 1.0))),
    (90, ScriptEvent::Sprint(true)),
    (150, ScriptEvent::Jump),
    (200, ScriptEvent::Sprint(false)),
    (200, ScriptEvent::Move(Vec2::ZERO)),
];

/// Ticks during which the camera is swung to the right.
const LOOK_SWING: std::ops::Range<u64> = 240..252;
const LOOK_SWING_DELTA: Vec2 = Vec2::new(100.0, 0.0);

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();
}

fn apply(input: &mut stride_engine::InputSampler, event: ScriptEvent) {
    match event {
        ScriptEvent::Move(movement) => input.on_move(movement),
        ScriptEvent::Sprint(pressed) => input.on_sprint(pressed),
        ScriptEvent::Jump => input.on_jump(true),
        ScriptEvent::Look(delta) => input.on_look(delta),
    }
}

fn main() -> Result<(), ConfigError> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LocomotionConfig::load(path)?,
        None => LocomotionConfig::default(),
    };
    config.validate()?;

    info!(ticks = cli.ticks, dt = cli.dt, variant = ?config.variant, "starting locomotion simulation");

    let mut rig = CharacterRig::new(
        config,
        KinematicBody::default(),
        ThirdPersonCamera::new(),
        ParameterTable::new(),
    );

    let mut last_state = rig.state();
    let mut was_snapping = false;

    for tick in 0..cli.ticks {
        for (_, event) in SCRIPT.iter().filter(|(at, _)| *at == tick) {
            apply(rig.input_mut(), *event);
        }
        if LOOK_SWING.contains(&tick) {
            apply(rig.input_mut(), ScriptEvent::Look(LOOK_SWING_DELTA));
        }

        let report = rig.tick(cli.dt);
        let position = rig.body().position();
        rig.camera_mut().follow(position);

        if report.state != last_state {
            info!(
                tick = report.tick,
                from = ?last_state,
                to = ?report.state,
                x = position.x,
                y = position.y,
                z = position.z,
                "state change"
            );
            last_state = report.state;
        }

        if report.is_rotating_to_target != was_snapping {
            info!(
                tick = report.tick,
                mismatch = report.rotation_mismatch,
                rotating = report.is_rotating_to_target,
                "idle rotation"
            );
            was_snapping = report.is_rotating_to_target;
        }
    }

    let position = rig.body().position();
    info!(
        ticks = rig.tick_count(),
        state = ?rig.state(),
        x = position.x,
        y = position.y,
        z = position.z,
        camera_yaw = rig.camera().yaw,
        mismatch = rig.orientation().rotation_mismatch(),
        "simulation finished"
    );

    Ok(())
}

use anyhow::Context;
use clap::{ArgAction, Parser};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use inkpad::config::Config;
use inkpad::input::PointerEvent;
use inkpad::surface::{NullCompanion, NullIndicators, Surface, SurfaceInit};

#[derive(Parser, Debug)]
#[command(name = "inkpad")]
#[command(version, about = "Freehand glyph capture surface for handwriting recognition")]
struct Cli {
    /// Gesture script to replay (JSON array of steps)
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Write the rendered raster as PNG to this path
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the encoded snapshot payload (base64 PNG data-URL) to stdout
    #[arg(long, action = ArgAction::SetTrue)]
    payload: bool,

    /// Print the recorded token stream as JSON to stdout
    #[arg(long, action = ArgAction::SetTrue)]
    tokens: bool,

    /// Use a specific config file instead of ~/.config/inkpad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

/// One step of a gesture script.
///
/// Press, move, and release mirror the pointer notifications a host would
/// deliver; the remaining steps mirror its external triggers.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Step {
    Press {
        x: f64,
        y: f64,
    },
    Move {
        x: f64,
        y: f64,
    },
    Release {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Clear,
    Lock,
    Unlock,
    Load {
        payload: String,
    },
}

fn apply(surface: &mut Surface, step: &Step) {
    match step {
        Step::Press { x, y } => surface.on_pointer_press(&PointerEvent::mouse(*x, *y)),
        Step::Move { x, y } => surface.on_pointer_motion(&PointerEvent::mouse(*x, *y)),
        Step::Release { x, y } => surface.on_pointer_release(&PointerEvent::mouse(*x, *y)),
        Step::Clear => surface.clear(),
        Step::Lock => surface.set_locked(true),
        Step::Unlock => surface.set_locked(false),
        Step::Load { payload } => surface.load_payload(payload),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let script = fs::read_to_string(&cli.script)
        .with_context(|| format!("Failed to read script from {}", cli.script.display()))?;
    let steps: Vec<Step> = serde_json::from_str(&script)
        .with_context(|| format!("Failed to parse script from {}", cli.script.display()))?;

    let mut surface = match Surface::create(
        &config,
        Box::new(NullCompanion),
        Box::new(NullIndicators),
    ) {
        SurfaceInit::Ready(surface) => surface,
        SurfaceInit::Degraded(degraded) => {
            return Err(anyhow::anyhow!(
                "Surface unavailable: {}",
                degraded.diagnostic()
            ));
        }
    };

    for step in &steps {
        apply(&mut surface, step);
    }
    if surface.gesture_active() {
        log::warn!("Script ended mid-gesture; the open stroke was left unterminated");
    }
    log::info!(
        "Replayed {} steps ({} gestures)",
        steps.len(),
        surface.strokes().gesture_count()
    );

    if let Some(path) = &cli.output {
        fs::write(path, surface.to_png()?)
            .with_context(|| format!("Failed to write PNG to {}", path.display()))?;
        log::info!("Wrote raster to {}", path.display());
    }

    if cli.payload {
        println!("{}", surface.snapshot_payload()?);
    }

    if cli.tokens {
        println!("{}", serde_json::to_string(surface.strokes())?);
    }

    Ok(())
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter for the Bug's Life colony simulation.
//!
//! Three modes are offered: `error` only parses a scene, `verification` also
//! runs the structural checks and `run` advances a loaded scene headlessly.

mod settings;
mod svg;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use bugs_life_core::{Event, Position};
use bugs_life_engine::Simulation;
use bugs_life_rendering::{Color, Presentation, RenderingBackend};
use bugs_life_system_analytics::PopulationRecorder;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::{settings::Settings, svg::SvgBackend};

#[derive(Debug, Parser)]
#[command(name = "bugs-life")]
#[command(about = "Simulate competing ant colonies on a square domain")]
struct Cli {
    /// Seed for births and automatic food; overrides the configuration file.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// TOML file overriding simulation constants.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Parse a scene and report the first format error.
    Error {
        /// Scene file to read.
        scene: PathBuf,
    },
    /// Parse a scene and run the structural checks.
    Verification {
        /// Scene file to read.
        scene: PathBuf,
    },
    /// Load a scene and advance it.
    Run(RunArgs),
}

#[derive(Debug, clap::Args)]
struct RunArgs {
    /// Scene file to read.
    scene: PathBuf,

    /// Number of ticks to simulate.
    #[arg(long, default_value = "100")]
    ticks: u64,

    /// Disable random food spawning.
    #[arg(long)]
    no_auto_food: bool,

    /// Food item to place before the first tick, as `x,y`. Repeatable.
    #[arg(long = "food", value_parser = parse_position)]
    food: Vec<Position>,

    /// Write the final state as a scene file.
    #[arg(long)]
    save: Option<PathBuf>,

    /// Write the population of every colony after each tick.
    #[arg(long)]
    record: Option<PathBuf>,

    /// Draw the final state as an SVG image.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Side length of the SVG image in pixels.
    #[arg(long, default_value = "800")]
    svg_size: f32,
}

fn parse_position(text: &str) -> Result<Position, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{text}`"))?;
    let coordinate = |value: &str| {
        value
            .trim()
            .parse::<f64>()
            .map_err(|error| format!("invalid coordinate `{value}`: {error}"))
    };
    Ok(Position::new(coordinate(x)?, coordinate(y)?))
}

/// Filter from `RUST_LOG`, falling back to `info` when unset or unparsable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let cli = Cli::parse();
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let config = settings.into_config(cli.seed);

    match cli.mode {
        Mode::Error { scene } => {
            let text = fs::read_to_string(&scene)
                .with_context(|| format!("failed to read {}", scene.display()))?;
            let scenario = bugs_life_system_scenario::parse(&text, config.tuning())
                .with_context(|| format!("{} is not a valid scene", scene.display()))?;
            println!(
                "{}: {} colonies, {} food items, no format error",
                scene.display(),
                scenario.colonies.len(),
                scenario.food.len()
            );
        }
        Mode::Verification { scene } => {
            let simulation = Simulation::load_file(&scene, config)
                .with_context(|| format!("{} failed verification", scene.display()))?;
            println!("{}: scene is consistent", scene.display());
            println!("{}", simulation.stats());
        }
        Mode::Run(args) => run(args, config)?,
    }
    Ok(())
}

fn run(args: RunArgs, config: bugs_life_engine::Config) -> Result<()> {
    let mut simulation = Simulation::load_file(&args.scene, config)
        .with_context(|| format!("failed to load {}", args.scene.display()))?;

    for position in &args.food {
        match simulation.place_food(*position) {
            Ok(food) => tracing::info!("placed food {} at {}", food, position),
            Err(reason) => tracing::warn!("food at {} refused: {}", position, reason),
        }
    }

    let mut recorder = PopulationRecorder::new(&simulation.view());
    let mut colony_deaths = 0_usize;
    for _ in 0..args.ticks {
        let events = simulation.tick(!args.no_auto_food);
        colony_deaths += events
            .iter()
            .filter(|event| matches!(event, Event::ColonyDied { .. }))
            .count();
        recorder.handle(&events, &simulation.view());
    }
    tracing::info!(
        "simulated {} ticks, {} colonies died",
        args.ticks,
        colony_deaths
    );
    println!("{}", simulation.stats());

    if let Some(path) = &args.save {
        fs::write(path, simulation.serialize())
            .with_context(|| format!("failed to save scene to {}", path.display()))?;
    }
    if let Some(path) = &args.record {
        fs::write(path, recorder.to_string())
            .with_context(|| format!("failed to write population record to {}", path.display()))?;
    }
    if let Some(path) = args.svg {
        let mut backend = SvgBackend::new(path, args.svg_size);
        let presentation = Presentation::new(
            format!("Bug's Life, {} ticks", args.ticks),
            Color::WHITE,
            simulation.render_state(),
        );
        backend.present(&presentation)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_parse_from_comma_pairs() {
        assert_eq!(parse_position("1.5, -2"), Ok(Position::new(1.5, -2.0)));
        assert!(parse_position("1.5").is_err());
        assert!(parse_position("x,2").is_err());
    }

    #[test]
    fn log_level_follows_the_environment() {
        use tracing::level_filters::LevelFilter;

        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn run_flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "bugs-life",
            "--seed",
            "7",
            "run",
            "scene.txt",
            "--ticks",
            "5",
            "--no-auto-food",
            "--food",
            "1,2",
            "--food",
            "3,4",
        ])
        .expect("valid arguments");

        assert_eq!(cli.seed, Some(7));
        let Mode::Run(args) = cli.mode else {
            panic!("expected run mode");
        };
        assert_eq!(args.ticks, 5);
        assert!(args.no_auto_food);
        assert_eq!(
            args.food,
            vec![Position::new(1.0, 2.0), Position::new(3.0, 4.0)]
        );
    }
}

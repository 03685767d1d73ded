//! Elastic Band entry point
//!
//! Runs a headless simulation: the robot chases the goal through the obstacle
//! field for a fixed number of frames, printing a summary or one JSON
//! snapshot per frame.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use glam::DVec2;

use elastic_band::config::validate_point;
use elastic_band::sim::Command;
use elastic_band::{ConfigError, SimConfig, SimError, TickDriver};

#[derive(Parser)]
#[command(name = "elastic-band", about = "Headless elastic band robot simulation")]
struct Cli {
    /// JSON config file (fields not given take defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for the obstacle layout
    #[arg(long)]
    seed: Option<u64>,

    /// Number of obstacles (1-100)
    #[arg(short, long)]
    obstacles: Option<String>,

    /// Global obstacle speed multiplier (0-10)
    #[arg(short, long)]
    speed: Option<f64>,

    /// Robot start position as "x,y"
    #[arg(long, value_parser = parse_point)]
    start: Option<DVec2>,

    /// Goal position as "x,y"
    #[arg(long, value_parser = parse_point)]
    goal: Option<DVec2>,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 1000)]
    frames: u64,

    /// Stop as soon as the robot reaches the goal
    #[arg(long)]
    stop_on_arrival: bool,

    /// Print one JSON snapshot per frame instead of a summary
    #[arg(long)]
    json: bool,
}

fn parse_point(text: &str) -> Result<DVec2, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got {text:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    validate_point(DVec2::new(x, y)).map_err(|e| e.to_string())
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error("failed to serialize snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

fn run(cli: Cli) -> Result<(), RunError> {
    let mut config = match &cli.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(start) = cli.start {
        config.robot_start = start;
    }
    if let Some(goal) = cli.goal {
        config.goal = goal;
    }

    let mut driver = TickDriver::new(&config)?;
    // Count and speed go through the same boundary checks as interactive input
    if let Some(count) = cli.obstacles {
        driver.apply(Command::SetObstacleCount(count))?;
    }
    if let Some(speed) = cli.speed {
        driver.apply(Command::SetGlobalSpeed(speed))?;
    }
    driver.submit(Command::Start);

    for _ in 0..cli.frames {
        let frame = driver.frame();
        if cli.json {
            println!("{}", serde_json::to_string(&frame.snapshot)?);
        }
        if cli.stop_on_arrival && driver.state().arrived() {
            log::info!("Goal reached at tick {}", frame.snapshot.tick);
            break;
        }
    }

    if !cli.json {
        let state = driver.state();
        println!("seed:      {}", state.seed);
        println!("ticks:     {}", state.ticks);
        println!("obstacles: {}", state.field.len());
        println!("robot:     ({:.2}, {:.2})", state.robot.x, state.robot.y);
        println!("goal:      ({:.2}, {:.2})", state.goal.x, state.goal.y);
        println!("distance:  {:.2}", state.robot.distance(state.goal));
        println!("arrived:   {}", state.arrived());
    }
    Ok(())
}


fn main() {
    env_logger::init();
    log::info!("Elastic Band (headless) starting...");

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

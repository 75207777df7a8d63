//! Command-line harness for walking the walkable-area maps
//!
//! Classifies single points and replays scripted walks against the built-in
//! rooms or a room JSON file, so map tuning can be checked without starting
//! a browser scene.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use glam::Vec2;
use nav::{MoveInput, Room, Walker};
use tracing::info;
use tracing_subscriber::EnvFilter;
use walkmap::WalkPoint;

#[derive(Parser)]
#[command(name = "walksim")]
#[command(about = "Walkable-area map checker and walk simulator", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RoomArgs {
    /// Built-in room name (hub, exhibit)
    #[arg(short, long, default_value = "hub")]
    room: String,

    /// Load the room from a JSON file instead
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single world-space point
    Check {
        #[command(flatten)]
        room: RoomArgs,

        /// X coordinate in world units
        x: f32,
        /// Y coordinate in world units
        y: f32,
    },

    /// Replay a held-key script, one tick per character
    Walk {
        #[command(flatten)]
        room: RoomArgs,

        /// Tick script: w/a/s/d per tick, uppercase to sprint, '.' to idle
        #[arg(short, long, default_value = "")]
        script: String,

        /// Walk toward this target after the script, as "x,y"
        #[arg(short, long, value_parser = parse_point)]
        target: Option<Vec2>,

        /// Tick budget for reaching the target
        #[arg(long, default_value_t = 1000)]
        ticks: usize,
    },
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got {s:?}"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok(Vec2::new(x, y))
}

fn load_room(args: &RoomArgs) -> Result<Room> {
    match &args.file {
        Some(path) => {
            Room::load(path).with_context(|| format!("loading room from {}", path.display()))
        }
        None => Room::builtin(&args.room).context("unknown built-in room"),
    }
}

fn tick_input(key: char) -> Option<MoveInput> {
    let mut input = MoveInput {
        sprint: key.is_ascii_uppercase(),
        ..Default::default()
    };
    match key.to_ascii_lowercase() {
        'w' => input.forward = true,
        's' => input.backward = true,
        'a' => input.left = true,
        'd' => input.right = true,
        '.' => {}
        _ => return None,
    }
    Some(input)
}

fn run_check(room: &Room, x: f32, y: f32) -> bool {
    let walkable = room.is_walkable(WalkPoint::new(x, y));
    println!(
        "({x}, {y}) in room '{}': {}",
        room.name,
        if walkable { "walkable" } else { "blocked" }
    );
    walkable
}

fn run_walk(room: &Room, script: &str, target: Option<Vec2>, ticks: usize) -> Result<()> {
    let mut walker = Walker::new(room.spawn);
    info!(room = %room.name, spawn = ?room.spawn, "starting walk");

    for (tick, key) in script.chars().enumerate() {
        let input = tick_input(key)
            .with_context(|| format!("invalid script character {key:?} at tick {tick}"))?;
        let moved = walker.step(&input, &room.regions);
        info!(
            tick,
            key = %key,
            moved,
            x = walker.position().x,
            y = walker.position().y,
        );
    }

    if let Some(target) = target {
        walker.set_target(target);
        for _ in 0..ticks {
            if walker.target().is_none() {
                break;
            }
            walker.step(&MoveInput::idle(), &room.regions);
        }
        if walker.target().is_some() {
            println!("target not reached within {ticks} ticks");
        }
    }

    let end = walker.position();
    println!("final position: ({}, {})", end.x, end.y);
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Commands::Check { room, x, y } => {
            let room = load_room(&room)?;
            let walkable = run_check(&room, x, y);
            Ok(if walkable {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Walk {
            room,
            script,
            target,
            ticks,
        } => {
            let room = load_room(&room)?;
            run_walk(&room, &script, target, ticks)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

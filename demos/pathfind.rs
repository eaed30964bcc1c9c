//! Command-line pathfinding demo.
//!
//! Run: cargo run --bin pathfind -- --width 40 --height 20 --ratio 0.3
//!      cargo run --bin pathfind -- --map level.txt --mover flyer -v

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::{Level, LevelFilter, Metadata, Record};
use tilepath::{
    AStarHeuristic, AStarPathFinder, ClosestHeuristic, ClosestSquaredHeuristic, GridMap,
    ManhattanHeuristic, PathFinderConfig,
};
use tilepath_core::Point;
use tilepath_demos::{DemoError, Scenario, Terrain, Unit, render, summary};

#[derive(Parser)]
#[command(name = "pathfind", version, about = "Find a path across a tile map and draw it")]
struct Cli {
    /// Map file (`.` floor, `#` wall, `~` water, `S` start, `T` target)
    #[arg(short, long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// Width of a random map
    #[arg(short = 'W', long, default_value_t = 40)]
    width: i32,

    /// Height of a random map
    #[arg(short = 'H', long, default_value_t = 20)]
    height: i32,

    /// Seed for the random map
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Fraction of random-map tiles turned into walls
    #[arg(short, long, default_value_t = 0.25)]
    ratio: f64,

    /// Start position as `x,y`
    #[arg(long, value_parser = parse_point)]
    start: Option<Point>,

    /// Target position as `x,y`
    #[arg(long, value_parser = parse_point)]
    target: Option<Point>,

    /// Maximum search depth before giving up
    #[arg(short = 'd', long, default_value_t = PathFinderConfig::default().max_search_distance)]
    max_distance: u32,

    /// Only move orthogonally
    #[arg(long)]
    no_diagonal: bool,

    /// Add the √2−1 surcharge to diagonal steps
    #[arg(short = 'p', long)]
    diagonal_penalty: bool,

    #[arg(long, value_enum, default_value_t = MoverArg::Walker)]
    mover: MoverArg,

    #[arg(long, value_enum, default_value_t = HeuristicArg::Closest)]
    heuristic: HeuristicArg,

    /// Log search details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum MoverArg {
    Walker,
    Flyer,
}

#[derive(Clone, Copy, ValueEnum)]
enum HeuristicArg {
    Closest,
    Squared,
    Manhattan,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn run<H>(cli: &Cli, heuristic: H) -> Result<(), DemoError>
where
    H: for<'a> AStarHeuristic<GridMap<'a, Terrain>>,
{
    let scenario = match &cli.map {
        Some(file) => Scenario::parse(&std::fs::read_to_string(file)?)?,
        None => Scenario::random(cli.width, cli.height, cli.seed, cli.ratio),
    };
    let (start, target) = scenario.endpoints(cli.start, cli.target)?;
    let mover = match cli.mover {
        MoverArg::Walker => Unit::Walker,
        MoverArg::Flyer => Unit::Flyer,
    };

    let map = GridMap::new(&scenario.grid, Terrain);
    let config = PathFinderConfig {
        max_search_distance: cli.max_distance,
        allow_diagonal_movement: !cli.no_diagonal,
    };
    let mut finder = AStarPathFinder::with_heuristic(&map, config, heuristic);
    let path = finder.find_path(&map, &mover, start, target, cli.diagonal_penalty)?;

    print!("{}", render(&map, path.as_ref(), start, target));
    println!("{}", summary(path.as_ref(), map.visit_count()));
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if cli.verbose && log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }

    let result = match cli.heuristic {
        HeuristicArg::Closest => run(&cli, ClosestHeuristic),
        HeuristicArg::Squared => run(&cli, ClosestSquaredHeuristic),
        HeuristicArg::Manhattan => run(&cli, ManhattanHeuristic::default()),
    };
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

//! VyuhaNav - Blind maze explorer
//!
//! Loads a maze into the oracle simulator, lets the explorer find an exit one
//! step at a time, and saves the believed map for inspection.
//!
//! ## Usage
//!
//! ```text
//! vyuha-nav [CONFIG] [--maze PATH] [--start ROW,COL] [--output PATH] [--trace]
//! ```
//!
//! Without a config argument, `vyuha.toml` in the working directory is used
//! when present, otherwise built-in defaults. Command-line flags override the
//! file.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::{info, warn};
use vyuha_map::Position;
use vyuha_map::io::{load_maze, save_text_map};
use vyuha_nav::exploration::ExplorationEvent;
use vyuha_nav::{ExplorationOutcome, Explorer, GridMaze, NavConfig, NavError, Result};

/// Find a maze exit without seeing the maze.
#[derive(Parser, Debug)]
#[command(name = "vyuha-nav", version)]
struct Args {
    /// Configuration file (TOML)
    config: Option<PathBuf>,

    /// Maze text file ('.' wall, 'X' exit, anything else open)
    #[arg(long)]
    maze: Option<PathBuf>,

    /// Start cell as ROW,COL (defaults to the maze's 'S' marker)
    #[arg(long, value_parser = parse_position)]
    start: Option<Position>,

    /// Where to write the believed map
    #[arg(long)]
    output: Option<PathBuf>,

    /// Record the per-step exploration trace
    #[arg(long)]
    trace: bool,
}

fn parse_position(s: &str) -> std::result::Result<Position, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {:?}", s))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad row {:?}: {}", row, e))?;
    let col = col
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad column {:?}: {}", col, e))?;
    Ok(Position::new(row, col))
}

fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vyuha_nav=info")),
        )
        .init();

    let args = Args::parse();
    let config = resolve_config(&args)?;

    info!("VyuhaNav v{}", env!("CARGO_PKG_VERSION"));

    // Ground truth
    info!("Loading maze from {:?}", config.maze.path);
    let grid = load_maze(&config.maze.path)?;
    config.check_fits(&grid)?;
    let mut maze = match config.start() {
        Some(start) => GridMaze::new(grid, start)?,
        None => GridMaze::from_start_marker(grid)?,
    };
    info!(
        "Maze {}x{}, agent starting at {}",
        maze.grid().height(),
        maze.grid().width(),
        maze.start()
    );

    // Explore
    let mut explorer = Explorer::new(config.explorer_config()?);
    let started = Instant::now();
    let outcome = explorer.run(&mut maze)?;
    let elapsed = started.elapsed();

    log_summary(&explorer, &maze, elapsed.as_secs_f64() * 1000.0);

    let code = match &outcome {
        ExplorationOutcome::ExitFound { exit, route } => {
            let offset = *exit - explorer.start();
            info!(
                "Exit reached {} cells from start ({:+} rows, {:+} cols), route of {} moves",
                exit.manhattan(explorer.start()),
                offset.row,
                offset.col,
                route.len()
            );
            ExitCode::SUCCESS
        }
        ExplorationOutcome::NoSolution => {
            warn!("No reachable exit: every open cell around the start was explored");
            ExitCode::from(2)
        }
    };

    // Save the believed map
    let options = config.text_map_options(explorer.start(), explorer.exit());
    save_text_map(explorer.map(), &options, &config.output.map_path)?;
    info!("Virtual map saved to {:?}", config.output.map_path);

    info!("VyuhaNav finished");
    Ok(code)
}

/// Load the config file (if any) and apply command-line overrides.
fn resolve_config(args: &Args) -> Result<NavConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            NavConfig::load(path)?
        }
        None if Path::new("vyuha.toml").exists() => {
            info!("Loading configuration from vyuha.toml");
            NavConfig::load(Path::new("vyuha.toml"))?
        }
        None => {
            info!("Using default configuration");
            NavConfig::default()
        }
    };

    if let Some(maze) = &args.maze {
        config.maze.path = maze.clone();
    }
    if let Some(start) = args.start {
        config.maze.start_row = Some(start.row);
        config.maze.start_col = Some(start.col);
    }
    if let Some(output) = &args.output {
        config.output.map_path = output.clone();
    }
    if args.trace {
        config.exploration.record_trace = true;
    }

    config.validate()?;
    if config.output.map_path.as_os_str().is_empty() {
        return Err(NavError::Config("output map_path is empty".into()));
    }

    Ok(config)
}

/// Log run statistics.
fn log_summary(explorer: &Explorer, maze: &GridMaze, elapsed_ms: f64) {
    let stats = explorer.stats();
    let counts = explorer.map().count_by_state();

    info!(
        "Explored in {:.1}ms: {} oracle calls ({} moves, {} blocked), {} prechecked",
        elapsed_ms, stats.oracle_calls, stats.moves, stats.blocked, stats.prechecked
    );
    info!(
        "Backtracking: {} retraces, {} retrace moves; frontier peak {}, {} pushed, {} popped",
        stats.retraces,
        stats.retrace_moves,
        stats.peak_frontier,
        stats.branches_pushed,
        stats.branches_popped
    );
    info!(
        "Map statistics: {} path cells, {} wall cells",
        counts.path, counts.wall
    );

    if maze.attempts() != stats.oracle_calls {
        warn!(
            "Oracle counted {} attempts but explorer issued {}",
            maze.attempts(),
            stats.oracle_calls
        );
    }

    let trace = explorer.trace();
    if !trace.is_empty() {
        let retrace_calls = trace
            .iter()
            .filter(|e| matches!(e, ExplorationEvent::OracleCall { retrace: true, .. }))
            .count();
        info!(
            "Trace: {} events, {} oracle calls spent retracing",
            trace.len(),
            retrace_calls
        );
    }
}

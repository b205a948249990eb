//! Configuration loading for VyuhaNav

use std::path::{Path, PathBuf};

use serde::Deserialize;
use vyuha_map::io::{Crop, Legend, MazeGrid, TextMapOptions};
use vyuha_map::{Direction, Position, VirtualMap};

use crate::error::{NavError, Result};
use crate::exploration::ExplorerConfig;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub maze: MazeConfig,
    #[serde(default)]
    pub exploration: ExplorationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Ground-truth maze settings
#[derive(Clone, Debug, Deserialize)]
pub struct MazeConfig {
    /// Maze text file (default: resources/maze.txt)
    #[serde(default = "default_maze_path")]
    pub path: PathBuf,

    /// Start row; falls back to the maze's 'S' marker when unset
    #[serde(default)]
    pub start_row: Option<i32>,

    /// Start column; falls back to the maze's 'S' marker when unset
    #[serde(default)]
    pub start_col: Option<i32>,
}

/// Explorer settings
#[derive(Clone, Debug, Deserialize)]
pub struct ExplorationConfig {
    /// Virtual map reach from the start cell (default: 998)
    #[serde(default = "default_half_extent")]
    pub half_extent: usize,

    /// Seed push order; the last entry is tried first
    #[serde(default = "default_seed_order")]
    pub seed_order: Vec<Direction>,

    /// Keep a per-step event trace (default: false)
    #[serde(default)]
    pub record_trace: bool,

    /// Iterations between progress log lines (default: 10000)
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
}

/// Output configuration
#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Path to save the exported virtual map
    #[serde(default = "default_map_path")]
    pub map_path: PathBuf,

    /// Exported region: "known" or "full"
    #[serde(default)]
    pub crop: Crop,

    /// Unknown cells kept around the known region
    #[serde(default = "default_margin")]
    pub margin: usize,

    /// Characters used in the export
    #[serde(default)]
    pub legend: Legend,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            path: default_maze_path(),
            start_row: None,
            start_col: None,
        }
    }
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            half_extent: default_half_extent(),
            seed_order: default_seed_order(),
            record_trace: false,
            progress_interval: default_progress_interval(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            map_path: default_map_path(),
            crop: Crop::default(),
            margin: default_margin(),
            legend: Legend::default(),
        }
    }
}

// Default value functions
fn default_maze_path() -> PathBuf {
    PathBuf::from("resources/maze.txt")
}
fn default_half_extent() -> usize {
    VirtualMap::DEFAULT_HALF_EXTENT
}
fn default_seed_order() -> Vec<Direction> {
    ExplorerConfig::DEFAULT_SEED_ORDER.to_vec()
}
fn default_progress_interval() -> u64 {
    10_000
}
fn default_map_path() -> PathBuf {
    PathBuf::from("output/virtual-maze.txt")
}
fn default_margin() -> usize {
    1
}

impl NavConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| NavError::Config(format!("Failed to read config file: {}", e)))?;
        let config: NavConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the explorer cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.exploration.half_extent == 0 {
            return Err(NavError::Config("half_extent must be at least 1".into()));
        }
        if self.exploration.half_extent > VirtualMap::MAX_HALF_EXTENT {
            return Err(NavError::Config(format!(
                "half_extent {} exceeds the maximum of {}",
                self.exploration.half_extent,
                VirtualMap::MAX_HALF_EXTENT
            )));
        }
        if self.exploration.progress_interval == 0 {
            return Err(NavError::Config(
                "progress_interval must be at least 1".into(),
            ));
        }
        self.seed_order()?;
        Ok(())
    }

    /// Seed order as a fixed array, checked to name every direction once.
    pub fn seed_order(&self) -> Result<[Direction; 4]> {
        let order: [Direction; 4] = self
            .exploration
            .seed_order
            .as_slice()
            .try_into()
            .map_err(|_| {
                NavError::Config(format!(
                    "seed_order needs exactly 4 directions, got {}",
                    self.exploration.seed_order.len()
                ))
            })?;

        for d in Direction::ALL {
            if !order.contains(&d) {
                return Err(NavError::Config(format!("seed_order is missing {}", d)));
            }
        }
        Ok(order)
    }

    /// Reject a virtual map too small to hold every walk through `grid`.
    ///
    /// An agent can end up at most `max(height, width)` cells from its start,
    /// so a smaller reach would turn cells past the map edge into false walls.
    pub fn check_fits(&self, grid: &MazeGrid) -> Result<()> {
        let needed = grid.height().max(grid.width());
        if self.exploration.half_extent < needed {
            return Err(NavError::Config(format!(
                "half_extent {} is too small for a {}x{} maze (needs at least {})",
                self.exploration.half_extent,
                grid.height(),
                grid.width(),
                needed
            )));
        }
        Ok(())
    }

    /// Start position from the config, if both coordinates are set.
    pub fn start(&self) -> Option<Position> {
        match (self.maze.start_row, self.maze.start_col) {
            (Some(row), Some(col)) => Some(Position::new(row, col)),
            _ => None,
        }
    }

    /// Build the runtime explorer configuration.
    pub fn explorer_config(&self) -> Result<ExplorerConfig> {
        Ok(ExplorerConfig {
            half_extent: self.exploration.half_extent,
            seed_order: self.seed_order()?,
            record_trace: self.exploration.record_trace,
            progress_interval: self.exploration.progress_interval,
        })
    }

    /// Export options with start and exit markers filled in.
    pub fn text_map_options(&self, start: Position, exit: Option<Position>) -> TextMapOptions {
        TextMapOptions {
            legend: self.output.legend.clone(),
            crop: self.output.crop,
            margin: self.output.margin,
            start: Some(start),
            exit,
        }
    }
}

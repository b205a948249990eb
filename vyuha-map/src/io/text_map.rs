//! Character export of a [`VirtualMap`] for inspection.

use std::io::Write;
use std::path::Path;

use serde::Deserialize;

use crate::core::{CellState, Position};
use crate::error::MapError;
use crate::grid::VirtualMap;

/// Characters used for each cell in an exported map.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Legend {
    /// Unknown cells
    #[serde(default = "default_unknown")]
    pub unknown: char,
    /// Cells on the agent's trail
    #[serde(default = "default_path")]
    pub path: char,
    /// Cells the oracle refused
    #[serde(default = "default_wall")]
    pub wall: char,
    /// The starting cell
    #[serde(default = "default_start")]
    pub start: char,
    /// The exit cell, when one was found
    #[serde(default = "default_exit")]
    pub exit: char,
}

fn default_unknown() -> char {
    ' '
}
fn default_path() -> char {
    '*'
}
fn default_wall() -> char {
    '.'
}
fn default_start() -> char {
    'R'
}
fn default_exit() -> char {
    'G'
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            unknown: default_unknown(),
            path: default_path(),
            wall: default_wall(),
            start: default_start(),
            exit: default_exit(),
        }
    }
}

impl Legend {
    /// Character for a plain cell state.
    pub fn symbol(&self, state: CellState) -> char {
        match state {
            CellState::Unknown => self.unknown,
            CellState::Path => self.path,
            CellState::Wall => self.wall,
        }
    }
}

/// Which part of the grid to export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    /// Bounding box of known cells, widened by a margin
    #[default]
    Known,
    /// The whole grid
    Full,
}

/// Export settings.
#[derive(Clone, Debug, Default)]
pub struct TextMapOptions {
    /// Cell characters
    pub legend: Legend,
    /// Exported region
    pub crop: Crop,
    /// Extra cells around the known region (ignored for [`Crop::Full`])
    pub margin: usize,
    /// Cell drawn with the start marker
    pub start: Option<Position>,
    /// Cell drawn with the exit marker
    pub exit: Option<Position>,
}

/// Inclusive row/column window to export.
fn export_window(map: &VirtualMap, options: &TextMapOptions) -> (Position, Position) {
    let last = Position::new(map.height() as i32 - 1, map.width() as i32 - 1);

    match options.crop {
        Crop::Full => (Position::new(0, 0), last),
        Crop::Known => {
            let anchor = options.start.unwrap_or_else(|| map.center());
            let (min, max) = map.known_bounds().unwrap_or((anchor, anchor));
            let m = options.margin as i32;
            (
                Position::new((min.row - m).max(0), (min.col - m).max(0)),
                Position::new((max.row + m).min(last.row), (max.col + m).min(last.col)),
            )
        }
    }
}

/// Render the map as one string per row.
pub fn render_rows(map: &VirtualMap, options: &TextMapOptions) -> Vec<String> {
    let (min, max) = export_window(map, options);
    let legend = &options.legend;

    (min.row..=max.row)
        .map(|row| {
            (min.col..=max.col)
                .map(|col| {
                    let p = Position::new(row, col);
                    if options.exit == Some(p) {
                        legend.exit
                    } else if options.start == Some(p) {
                        legend.start
                    } else {
                        legend.symbol(map.cell_state(p))
                    }
                })
                .collect()
        })
        .collect()
}

/// Write the rendered map to a writer, one line per row.
pub fn write_text_map<W: Write>(
    map: &VirtualMap,
    options: &TextMapOptions,
    writer: &mut W,
) -> Result<(), MapError> {
    for row in render_rows(map, options) {
        writeln!(writer, "{}", row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Save the rendered map to a file, creating parent directories as needed.
pub fn save_text_map(
    map: &VirtualMap,
    options: &TextMapOptions,
    path: &Path,
) -> Result<(), MapError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    write_text_map(map, options, &mut writer)?;

    log::debug!("Saved virtual map to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    fn sample_map() -> VirtualMap {
        let mut map = VirtualMap::new(3);
        let c = map.center();
        map.set_cell_state(c, CellState::Path);
        map.set_cell_state(c.step(Direction::Right), CellState::Path);
        map.set_cell_state(c.step(Direction::Up), CellState::Wall);
        map
    }

    #[test]
    fn test_render_known_no_margin() {
        let map = sample_map();
        let c = map.center();
        let options = TextMapOptions {
            start: Some(c),
            ..Default::default()
        };

        let rows = render_rows(&map, &options);
        assert_eq!(rows, vec![". ".to_string(), "R*".to_string()]);
    }

    #[test]
    fn test_render_with_margin_and_exit() {
        let map = sample_map();
        let c = map.center();
        let options = TextMapOptions {
            margin: 1,
            start: Some(c),
            exit: Some(c.step(Direction::Right)),
            ..Default::default()
        };

        let rows = render_rows(&map, &options);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.chars().count() == 4));
        assert_eq!(rows[1], " .  ");
        assert_eq!(rows[2], " RG ");
    }

    #[test]
    fn test_render_full() {
        let map = sample_map();
        let options = TextMapOptions {
            crop: Crop::Full,
            ..Default::default()
        };
        let rows = render_rows(&map, &options);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[3], "   **  ");
    }

    #[test]
    fn test_render_empty_map_uses_anchor() {
        let map = VirtualMap::new(5);
        let rows = render_rows(&map, &TextMapOptions::default());
        assert_eq!(rows, vec![" ".to_string()]);
    }

    #[test]
    fn test_custom_legend() {
        let map = sample_map();
        let options = TextMapOptions {
            legend: Legend {
                unknown: '?',
                path: 'o',
                wall: '#',
                ..Default::default()
            },
            ..Default::default()
        };
        let rows = render_rows(&map, &options);
        assert_eq!(rows, vec!["#?".to_string(), "oo".to_string()]);
    }

    #[test]
    fn test_write_lines() {
        let map = sample_map();
        let mut out = Vec::new();
        write_text_map(&map, &TextMapOptions::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ". \n**\n");
    }
}

//! Scenario assembly.

use crate::board::{Board, DEFAULT_COLS, DEFAULT_ROWS};
use crate::core::{EngineConfig, Grid, Terrain, Tile};
use crate::phase::Engine;
use crate::policy::{CaptureFirst, EnemyPolicy};
use crate::units::Unit;

use super::error::ScenarioError;

/// Parse an ASCII terrain map.
///
/// One line per row, one glyph per tile: `.` empty, `#` impassable,
/// `G` goal. Surrounding whitespace and blank lines are ignored.
pub fn parse_terrain(map: &str) -> Result<Grid<Terrain>, ScenarioError> {
    let rows: Vec<Vec<char>> = map
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().collect())
        .collect();

    let Some(first) = rows.first() else {
        return Err(ScenarioError::EmptyMap);
    };
    let expected = first.len();

    let mut cells = Vec::with_capacity(rows.len() * expected);
    for (row, glyphs) in rows.iter().enumerate() {
        if glyphs.len() != expected {
            return Err(ScenarioError::RaggedRow {
                row,
                expected,
                found: glyphs.len(),
            });
        }
        for (col, &glyph) in glyphs.iter().enumerate() {
            let terrain = match glyph {
                '.' => Terrain::Empty,
                '#' => Terrain::Impassable,
                'G' => Terrain::Goal,
                _ => {
                    return Err(ScenarioError::UnknownGlyph {
                        glyph,
                        tile: Tile::new(row, col),
                    })
                }
            };
            cells.push(terrain);
        }
    }

    Ok(Grid::new(rows.len(), expected, |tile| {
        cells[tile.row * expected + tile.col]
    }))
}

/// Builder for creating an [`Engine`] from a scenario description.
///
/// ```
/// use rust_tactics::core::{MovementType, PhaseKind, Tile};
/// use rust_tactics::scenario::ScenarioBuilder;
/// use rust_tactics::units::Unit;
///
/// let engine = ScenarioBuilder::new()
///     .terrain_map(
///         "..G
///          .#.
///          ...",
///     )
///     .unit(Unit::player("hero", MovementType::King), Tile::new(2, 0))
///     .unit(Unit::enemy("grunt", MovementType::Rook), Tile::new(0, 0))
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.phase().kind(), PhaseKind::PlayerPhaseBanner);
/// ```
#[derive(Debug)]
pub struct ScenarioBuilder {
    rows: usize,
    cols: usize,
    map: Option<String>,
    terrain: Vec<(Tile, Terrain)>,
    units: Vec<(Unit, Tile)>,
    config: EngineConfig,
    policy: Option<Box<dyn EnemyPolicy>>,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            map: None,
            terrain: Vec::new(),
            units: Vec::new(),
            config: EngineConfig::default(),
            policy: None,
        }
    }
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board dimensions for an all-empty layout. Ignored when a terrain map is given.
    pub fn size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Use an ASCII terrain map; see [`parse_terrain`].
    pub fn terrain_map(mut self, map: impl Into<String>) -> Self {
        self.map = Some(map.into());
        self
    }

    /// Override a single tile's terrain.
    pub fn terrain(mut self, tile: Tile, terrain: Terrain) -> Self {
        self.terrain.push((tile, terrain));
        self
    }

    /// Place a unit.
    pub fn unit(mut self, unit: Unit, tile: Tile) -> Self {
        self.units.push((unit, tile));
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the default [`CaptureFirst`] enemy policy.
    pub fn policy(mut self, policy: impl EnemyPolicy + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    /// Assemble just the board.
    pub fn build_board(&self) -> Result<Board, ScenarioError> {
        let mut terrain = match &self.map {
            Some(map) => parse_terrain(map)?,
            None => {
                if self.rows == 0 || self.cols == 0 {
                    return Err(ScenarioError::ZeroSize {
                        rows: self.rows,
                        cols: self.cols,
                    });
                }
                Grid::with_value(self.rows, self.cols, Terrain::Empty)
            }
        };

        for &(tile, kind) in &self.terrain {
            if kind.is_shield() {
                return Err(ScenarioError::AuthoredShield { tile });
            }
            match terrain.get_mut(tile) {
                Some(slot) => *slot = kind,
                None => return Err(out_of_bounds(tile, &terrain)),
            }
        }

        let mut board = Board::from_terrain(terrain);
        for (unit, tile) in &self.units {
            match board.terrain(*tile) {
                None => return Err(out_of_bounds(*tile, board.terrain_grid())),
                Some(Terrain::Impassable) => return Err(ScenarioError::Impassable { tile: *tile }),
                Some(_) => {}
            }
            if board.occupant_id(*tile).is_some() {
                return Err(ScenarioError::Occupied { tile: *tile });
            }
            board.add_unit(unit.clone(), *tile);
        }

        Ok(board)
    }

    /// Assemble the engine, starting on the player-phase banner.
    pub fn build(self) -> Result<Engine, ScenarioError> {
        let board = self.build_board()?;
        let policy = self.policy.unwrap_or_else(|| Box::new(CaptureFirst));
        Ok(Engine::with_policy(board, self.config, policy))
    }
}

fn out_of_bounds<T>(tile: Tile, grid: &Grid<T>) -> ScenarioError {
    ScenarioError::OutOfBounds {
        tile,
        rows: grid.rows(),
        cols: grid.cols(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alignment, MovementType, WeaponType};

    #[test]
    fn test_parse_terrain() {
        let grid = parse_terrain(
            "
            .#G
            ...
            ",
        )
        .unwrap();

        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid[Tile::new(0, 1)], Terrain::Impassable);
        assert_eq!(grid[Tile::new(0, 2)], Terrain::Goal);
        assert_eq!(grid[Tile::new(1, 2)], Terrain::Empty);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_terrain("  \n "), Err(ScenarioError::EmptyMap));
        assert_eq!(
            parse_terrain("...\n..\n"),
            Err(ScenarioError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            parse_terrain("..\n.x"),
            Err(ScenarioError::UnknownGlyph {
                glyph: 'x',
                tile: Tile::new(1, 1)
            })
        );
    }

    #[test]
    fn test_default_board_is_eight_by_eight() {
        let board = ScenarioBuilder::new().build_board().unwrap();
        assert_eq!((board.rows(), board.cols()), (8, 8));
    }

    #[test]
    fn test_units_and_shields_are_placed() {
        let board = ScenarioBuilder::new()
            .size(4, 4)
            .terrain(Tile::new(3, 3), Terrain::Goal)
            .unit(
                Unit::enemy("w", MovementType::King).with_defense(WeaponType::Magical),
                Tile::new(0, 0),
            )
            .unit(Unit::player("p", MovementType::Knight), Tile::new(2, 2))
            .build_board()
            .unwrap();

        assert_eq!(board.terrain(Tile::new(1, 1)), Some(Terrain::MagicalShield));
        assert_eq!(board.terrain(Tile::new(3, 3)), Some(Terrain::Goal));
        assert_eq!(board.tiles_with_units_of(Alignment::Player), vec![Tile::new(2, 2)]);
    }

    #[test]
    fn test_placement_errors() {
        let knight = || Unit::player("k", MovementType::Knight);

        assert_eq!(
            ScenarioBuilder::new()
                .size(2, 2)
                .unit(knight(), Tile::new(2, 0))
                .build_board()
                .unwrap_err(),
            ScenarioError::OutOfBounds {
                tile: Tile::new(2, 0),
                rows: 2,
                cols: 2
            }
        );
        assert_eq!(
            ScenarioBuilder::new()
                .size(2, 2)
                .unit(knight(), Tile::new(0, 0))
                .unit(knight(), Tile::new(0, 0))
                .build_board()
                .unwrap_err(),
            ScenarioError::Occupied { tile: Tile::new(0, 0) }
        );
        assert_eq!(
            ScenarioBuilder::new()
                .terrain_map("#.")
                .unit(knight(), Tile::new(0, 0))
                .build_board()
                .unwrap_err(),
            ScenarioError::Impassable { tile: Tile::new(0, 0) }
        );
        assert_eq!(
            ScenarioBuilder::new()
                .terrain(Tile::new(0, 0), Terrain::PhysicalShield)
                .build_board()
                .unwrap_err(),
            ScenarioError::AuthoredShield { tile: Tile::new(0, 0) }
        );
        assert_eq!(
            ScenarioBuilder::new().size(0, 3).build_board().unwrap_err(),
            ScenarioError::ZeroSize { rows: 0, cols: 3 }
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ScenarioError::OutOfBounds {
            tile: Tile::new(9, 1),
            rows: 8,
            cols: 8,
        };
        assert_eq!(err.to_string(), "(9, 1) is outside the 8x8 board");
        assert_eq!(
            ScenarioError::UnknownGlyph { glyph: '?', tile: Tile::new(0, 0) }.to_string(),
            "unknown terrain glyph '?' at (0, 0)"
        );
    }
}

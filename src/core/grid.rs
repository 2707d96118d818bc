//! Tile coordinates and dense row-major grids.
//!
//! ## Tile
//!
//! A `(row, col)` pair. Rows grow downward, columns grow rightward.
//! Offsets that would go negative produce `None`; upper bounds are the
//! grid's business.
//!
//! ## Grid
//!
//! Fixed-size 2D storage backed by a single `Vec<T>`, indexable by `Tile`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// A board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Tile {
    /// Create a tile coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by a signed offset. Returns `None` if either index would go negative.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl From<(usize, usize)> for Tile {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Row-major 2D storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a grid with values from a factory function.
    pub fn new(rows: usize, cols: usize, factory: impl Fn(Tile) -> T) -> Self {
        assert!(rows > 0 && cols > 0, "Grid must have at least one tile");

        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Tile::new(row, col)))
            .map(factory)
            .collect();

        Self { rows, cols, cells }
    }

    /// Create a grid with every tile set to the same value.
    pub fn with_value(rows: usize, cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(rows, cols, |_| value.clone())
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether a tile lies on the grid.
    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        tile.row < self.rows && tile.col < self.cols
    }

    /// Get a tile's value, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, tile: Tile) -> Option<&T> {
        if self.contains(tile) {
            Some(&self.cells[self.flat(tile)])
        } else {
            None
        }
    }

    /// Mutable variant of [`Grid::get`].
    pub fn get_mut(&mut self, tile: Tile) -> Option<&mut T> {
        if self.contains(tile) {
            let i = self.flat(tile);
            Some(&mut self.cells[i])
        } else {
            None
        }
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> {
        let cols = self.cols;
        (0..self.rows * cols).map(move |i| Tile::new(i / cols, i % cols))
    }

    /// Iterate over `(Tile, &T)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Tile, &T)> {
        self.tiles().zip(self.cells.iter())
    }

    /// In-bounds tiles within one king step of `center`, `center` included.
    #[must_use]
    pub fn neighborhood(&self, center: Tile) -> SmallVec<[Tile; 9]> {
        let mut out = SmallVec::new();
        for d_row in -1..=1 {
            for d_col in -1..=1 {
                if let Some(tile) = center.offset(d_row, d_col) {
                    if self.contains(tile) {
                        out.push(tile);
                    }
                }
            }
        }
        out
    }

    /// Map every cell into a new grid of the same shape.
    pub fn map<U>(&self, f: impl Fn(Tile, &T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.iter().map(|(tile, v)| f(tile, v)).collect(),
        }
    }

    fn flat(&self, tile: Tile) -> usize {
        tile.row * self.cols + tile.col
    }
}

impl<T> Index<Tile> for Grid<T> {
    type Output = T;

    fn index(&self, tile: Tile) -> &Self::Output {
        assert!(self.contains(tile), "Tile {tile} outside {}x{} grid", self.rows, self.cols);
        &self.cells[self.flat(tile)]
    }
}

impl<T> IndexMut<Tile> for Grid<T> {
    fn index_mut(&mut self, tile: Tile) -> &mut Self::Output {
        assert!(self.contains(tile), "Tile {tile} outside {}x{} grid", self.rows, self.cols);
        let i = self.flat(tile);
        &mut self.cells[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_offset() {
        let t = Tile::new(1, 1);
        assert_eq!(t.offset(-1, 1), Some(Tile::new(0, 2)));
        assert_eq!(t.offset(-2, 0), None);
        assert_eq!(t.offset(0, -2), None);
    }

    #[test]
    fn test_grid_indexing() {
        let mut grid: Grid<i32> = Grid::new(2, 3, |t| (t.row * 10 + t.col) as i32);

        assert_eq!(grid[Tile::new(1, 2)], 12);
        grid[Tile::new(0, 1)] = 99;
        assert_eq!(grid.get(Tile::new(0, 1)), Some(&99));
        assert_eq!(grid.get(Tile::new(2, 0)), None);
        assert_eq!(grid.get(Tile::new(0, 3)), None);
    }

    #[test]
    fn test_tiles_are_row_major() {
        let grid = Grid::with_value(2, 2, 0u8);
        let tiles: Vec<_> = grid.tiles().collect();
        assert_eq!(
            tiles,
            vec![Tile::new(0, 0), Tile::new(0, 1), Tile::new(1, 0), Tile::new(1, 1)]
        );
    }

    #[test]
    fn test_neighborhood_clips_at_edges() {
        let grid = Grid::with_value(8, 8, ());
        assert_eq!(grid.neighborhood(Tile::new(0, 0)).len(), 4);
        assert_eq!(grid.neighborhood(Tile::new(0, 4)).len(), 6);
        assert_eq!(grid.neighborhood(Tile::new(4, 4)).len(), 9);
        assert!(grid.neighborhood(Tile::new(4, 4)).contains(&Tile::new(4, 4)));
    }

    #[test]
    #[should_panic(expected = "outside 2x2 grid")]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::with_value(2, 2, 0u8);
        let _ = grid[Tile::new(2, 0)];
    }

    #[test]
    fn test_serialization() {
        let grid: Grid<u8> = Grid::new(2, 2, |t| t.col as u8);
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, back);
    }
}

//! Scenario setup errors.

use thiserror::Error;

use crate::core::Tile;

/// Why a scenario could not be assembled.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScenarioError {
    /// The terrain map has no rows.
    #[error("terrain map is empty")]
    EmptyMap,

    /// A board dimension is zero.
    #[error("board must be at least 1x1, got {rows}x{cols}")]
    ZeroSize {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// A terrain map row differs in width from the first row.
    #[error("terrain map row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },

    /// A terrain map glyph has no meaning.
    #[error("unknown terrain glyph {glyph:?} at {tile}")]
    UnknownGlyph {
        /// The offending character.
        glyph: char,
        /// Where it appeared.
        tile: Tile,
    },

    /// Shield terrain was authored instead of derived.
    #[error("shield terrain at {tile} is derived and cannot be authored")]
    AuthoredShield {
        /// Where it was authored.
        tile: Tile,
    },

    /// A tile lies outside the board.
    #[error("{tile} is outside the {rows}x{cols} board")]
    OutOfBounds {
        /// The offending tile.
        tile: Tile,
        /// Board rows.
        rows: usize,
        /// Board columns.
        cols: usize,
    },

    /// Two units were placed on one tile.
    #[error("{tile} already holds a unit")]
    Occupied {
        /// The contested tile.
        tile: Tile,
    },

    /// A unit was placed on impassable terrain.
    #[error("{tile} is impassable and cannot hold a unit")]
    Impassable {
        /// The offending tile.
        tile: Tile,
    },
}

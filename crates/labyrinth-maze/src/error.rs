// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types for grid construction and layout queries.

use thiserror::Error;

/// Errors raised while constructing a [`crate::CellGrid`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero.
    #[error("degenerate grid {width}x{height}: both dimensions must be non-zero")]
    Degenerate {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// A dimension does not fit the `u16` cell coordinate space.
    #[error("grid dimension {0} exceeds {}", u16::MAX)]
    TooLarge(usize),
    /// Text rows passed to [`crate::CellGrid::from_rows`] differ in length.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        /// Offending row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A character other than `#` or `.` appeared in a text row.
    #[error("unrecognised cell glyph {glyph:?} at ({x}, {y})")]
    BadGlyph {
        /// The character found.
        glyph: char,
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },
}

/// Errors raised by layout queries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The grid has no open cell at all.
    #[error("no open cell available")]
    NoOpenCell,
    /// Rejection sampling ran out of attempts before hitting an open cell.
    #[error("no open cell found after {attempts} samples")]
    SamplingExhausted {
        /// Attempts spent.
        attempts: u32,
    },
}

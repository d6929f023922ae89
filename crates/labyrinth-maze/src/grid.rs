// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-size blocked/open cell grid.

use core::fmt;

use crate::error::GridError;

/// Rectangular grid of cells, `true` = blocked, `false` = open.
///
/// Invariants:
/// - `cells.len() == width * height`, row-major, index `y * width + x`.
/// - Dimensions are non-zero and never change after construction.
/// - Reads outside the grid return `None` from [`CellGrid::get`]; neighbour
///   lookups through [`CellGrid::is_blocked_at`] treat them as blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    width: u16,
    height: u16,
    cells: Vec<bool>,
}

impl CellGrid {
    /// Grid with every cell open.
    pub fn open(width: u16, height: u16) -> Result<Self, GridError> {
        Self::filled(width, height, false)
    }

    /// Grid with every cell blocked.
    pub fn blocked(width: u16, height: u16) -> Result<Self, GridError> {
        Self::filled(width, height, true)
    }

    fn filled(width: u16, height: u16, blocked: bool) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Degenerate {
                width: usize::from(width),
                height: usize::from(height),
            });
        }
        let len = usize::from(width) * usize::from(height);
        Ok(Self { width, height, cells: vec![blocked; len] })
    }

    /// Parses rows of text: `#` is blocked, `.` is open. Row `0` is `y = 0`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let width = u16::try_from(expected).map_err(|_| GridError::TooLarge(expected))?;
        let height = u16::try_from(rows.len()).map_err(|_| GridError::TooLarge(rows.len()))?;
        let mut grid = Self::open(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != expected {
                return Err(GridError::RaggedRows { row: y, expected, found });
            }
            for (x, glyph) in row.chars().enumerate() {
                let blocked = match glyph {
                    '#' => true,
                    '.' => false,
                    _ => return Err(GridError::BadGlyph { glyph, x, y }),
                };
                grid.cells[y * usize::from(width) + x] = blocked;
            }
        }
        Ok(grid)
    }

    /// Number of columns.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells (`width * height`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major index of `(x, y)`, or `None` outside the grid.
    pub fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Cell coordinates for a row-major index, or `None` outside the grid.
    pub fn coords(&self, index: usize) -> Option<(u16, u16)> {
        if index >= self.cells.len() {
            return None;
        }
        let width = usize::from(self.width);
        let x = u16::try_from(index % width).ok()?;
        let y = u16::try_from(index / width).ok()?;
        Some((x, y))
    }

    /// `Some(blocked)` for cells inside the grid.
    pub fn get(&self, x: u16, y: u16) -> Option<bool> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Neighbour-safe lookup: coordinates outside the grid read as blocked.
    pub fn is_blocked_at(&self, x: i32, y: i32) -> bool {
        match (u16::try_from(x), u16::try_from(y)) {
            (Ok(x), Ok(y)) => self.get(x, y).unwrap_or(true),
            _ => true,
        }
    }

    /// `true` when `index` names an open cell.
    pub fn is_open_index(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(|blocked| !blocked)
    }

    /// Marks `(x, y)` blocked; coordinates outside the grid are ignored.
    pub(crate) fn block(&mut self, x: u16, y: u16) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = true;
        }
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|blocked| !**blocked).count()
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.cells.len() - self.open_count()
    }

    /// Open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, blocked)| !**blocked)
            .filter_map(|(i, _)| self.coords(i))
    }
}

/// Two characters per cell: `##` blocked, two spaces open; one line per row.
impl fmt::Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(usize::from(self.width)) {
            for blocked in row {
                f.write_str(if *blocked { "##" } else { "  " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

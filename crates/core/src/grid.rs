//! Grid module - occupancy state for the board
//!
//! Flat row-major storage of optional visual handles plus a per-row count of
//! occupied cells. A row is clearable iff its count equals the column count.
//! Boundary enforcement belongs to callers: `is_occupied` answers false for
//! out-of-bounds coordinates, so edge checks and occupancy checks can be
//! tested independently.

use arrayvec::ArrayVec;

use crate::types::{BoardEvent, Point, SquareId};

/// Occupancy table for a `rows x cols` board.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: u8,
    cols: u8,
    /// Settled cells, row-major order (y * cols + x).
    cells: Vec<Option<SquareId>>,
    /// Occupied-cell count per row; `filled[y] == cols` means row y is full.
    filled: Vec<u8>,
}

impl Grid {
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
            filled: vec![0; rows as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.cols as i8 || y < 0 || y >= self.rows as i8 {
            return None;
        }
        Some(y as usize * self.cols as usize + x as usize)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether a settled cell occupies `(x, y)`.
    ///
    /// Out-of-bounds coordinates are not occupied by this query alone.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.index(x, y).map_or(false, |idx| self.cells[idx].is_some())
    }

    /// Handle of the settled square at `(x, y)`, if any.
    pub fn handle_at(&self, x: i8, y: i8) -> Option<SquareId> {
        self.index(x, y).and_then(|idx| self.cells[idx])
    }

    /// Occupied-cell count for row `y`.
    pub fn filled_count(&self, y: usize) -> u8 {
        self.filled.get(y).copied().unwrap_or(0)
    }

    /// Commit a settled piece: each cell becomes occupied and carries its
    /// visual handle.
    ///
    /// Occupying a cell twice without an intervening clear is a contract
    /// violation, not a runtime condition.
    pub fn occupy(&mut self, cells: &[Point], squares: &[SquareId]) {
        debug_assert_eq!(cells.len(), squares.len());
        for (cell, &square) in cells.iter().zip(squares) {
            let idx = self.index(cell.x, cell.y);
            debug_assert!(
                idx.is_some(),
                "occupy out of bounds: ({}, {})",
                cell.x,
                cell.y
            );
            let Some(idx) = idx else { continue };
            debug_assert!(
                self.cells[idx].is_none(),
                "cell ({}, {}) occupied twice",
                cell.x,
                cell.y
            );
            self.cells[idx] = Some(square);
            self.filled[cell.y as usize] += 1;
        }
    }

    /// Eliminate every full row and compact the stack downward.
    ///
    /// Emits `CellRemoved` for each square in an eliminated row, `RowCleared`
    /// per row, and `CellMoved` for every surviving square that descends.
    /// Each surviving row drops by the number of cleared rows below it; rows
    /// at or below every clear do not move.
    pub fn clear_full_rows(&mut self, events: &mut Vec<BoardEvent>) -> usize {
        let cols = self.cols as usize;

        // A settle commits at most 4 cells, so at most 4 rows fill at once.
        let mut cleared: ArrayVec<usize, 4> = ArrayVec::new();
        for y in 0..self.rows as usize {
            if self.filled[y] == self.cols {
                cleared.push(y);
            }
        }
        if cleared.is_empty() {
            return 0;
        }

        for &y in &cleared {
            for x in 0..cols {
                if let Some(id) = self.cells[y * cols + x].take() {
                    events.push(BoardEvent::CellRemoved { id });
                }
            }
            self.filled[y] = 0;
            events.push(BoardEvent::RowCleared { y: y as i8 });
        }

        // Bottom-up write pointer: surviving rows slide into the gaps.
        let mut write_y = self.rows as usize;
        for read_y in (0..self.rows as usize).rev() {
            if cleared.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                for x in 0..cols {
                    let square = self.cells[read_y * cols + x].take();
                    self.cells[write_y * cols + x] = square;
                    if let Some(id) = square {
                        events.push(BoardEvent::CellMoved {
                            id,
                            x: x as i8,
                            y: write_y as i8,
                        });
                    }
                }
                self.filled[write_y] = self.filled[read_y];
                self.filled[read_y] = 0;
            }
        }

        // Everything above the compacted stack is empty.
        for y in 0..write_y {
            for x in 0..cols {
                self.cells[y * cols + x] = None;
            }
            self.filled[y] = 0;
        }

        cleared.len()
    }

    /// Write row-major occupancy (1 = occupied) into `out`, reusing its
    /// allocation.
    pub fn write_u8_grid(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|cell| u8::from(cell.is_some())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupy_row(grid: &mut Grid, y: i8, first_id: u32) {
        for x in 0..grid.cols() as i8 {
            grid.occupy(
                &[Point::new(x, y)],
                &[SquareId::from_raw(first_id + x as u32)],
            );
        }
    }

    #[test]
    fn test_out_of_bounds_not_occupied() {
        let grid = Grid::new(20, 10);
        assert!(!grid.is_occupied(-1, 0));
        assert!(!grid.is_occupied(0, -1));
        assert!(!grid.is_occupied(10, 0));
        assert!(!grid.is_occupied(0, 20));
    }

    #[test]
    fn test_occupy_updates_row_counts() {
        let mut grid = Grid::new(20, 10);
        grid.occupy(
            &[Point::new(3, 19), Point::new(4, 19), Point::new(4, 18)],
            &[
                SquareId::from_raw(0),
                SquareId::from_raw(1),
                SquareId::from_raw(2),
            ],
        );
        assert!(grid.is_occupied(3, 19));
        assert!(grid.is_occupied(4, 18));
        assert_eq!(grid.filled_count(19), 2);
        assert_eq!(grid.filled_count(18), 1);
        assert_eq!(grid.filled_count(17), 0);
    }

    #[test]
    fn test_clear_full_rows_consumes_the_row() {
        let mut grid = Grid::new(20, 10);
        occupy_row(&mut grid, 19, 0);
        let mut events = Vec::new();
        assert_eq!(grid.clear_full_rows(&mut events), 1);
        // Nothing left to clear on a second pass.
        assert_eq!(grid.clear_full_rows(&mut events), 0);
    }

    #[test]
    fn test_clear_resets_filled_count() {
        let mut grid = Grid::new(10, 5);
        occupy_row(&mut grid, 9, 0);
        let mut events = Vec::new();
        assert_eq!(grid.clear_full_rows(&mut events), 1);
        assert_eq!(grid.filled_count(9), 0);
        for x in 0..5 {
            assert!(!grid.is_occupied(x, 9));
        }
    }
}

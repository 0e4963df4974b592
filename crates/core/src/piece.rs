//! Piece module - tetromino layouts and axis rotation
//!
//! Each kind carries a canonical cell layout and an optional pivot index as
//! static data, resolved through one factory path rather than per-kind
//! constructors. Rotation is a clockwise quarter turn about the pivot cell
//! followed by a uniform worst-offender shift that keeps the whole piece in
//! bounds (a simple wall kick).

use arrayvec::ArrayVec;

use crate::types::{PieceDescriptor, PieceKind, Point, SquareId};

/// Cells of one piece.
pub type PieceCells = ArrayVec<Point, 4>;

/// Canonical layout for a kind, before mirroring and spawn offset.
///
/// The cell order is part of the contract: the pivot index refers into it.
fn base_layout(kind: PieceKind) -> [Point; 4] {
    match kind {
        PieceKind::Stick => [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(3, 0),
        ],
        PieceKind::Square => [
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(1, 0),
            Point::new(1, 1),
        ],
        PieceKind::TBone => [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(1, 1),
        ],
        PieceKind::Squiggle => [
            Point::new(0, 1),
            Point::new(1, 1),
            Point::new(1, 0),
            Point::new(2, 0),
        ],
        PieceKind::BendyGuy => [
            Point::new(1, 1),
            Point::new(1, 0),
            Point::new(1, 2),
            Point::new(0, 2),
        ],
    }
}

/// Pivot cell index for a kind; `None` means the piece never rotates.
pub fn pivot_index(kind: PieceKind) -> Option<usize> {
    match kind {
        PieceKind::Stick => Some(2),
        PieceKind::Square => None,
        PieceKind::TBone => Some(1),
        PieceKind::Squiggle => Some(1),
        PieceKind::BendyGuy => Some(0),
    }
}

/// Width in cells of a kind's canonical layout.
pub fn layout_width(kind: PieceKind) -> i8 {
    base_layout(kind).iter().map(|cell| cell.x).max().unwrap_or(0) + 1
}

/// Resolve a descriptor into spawn cells at row 0, shifted right by
/// `offset_x`.
///
/// Mirroring reflects the layout horizontally within its own width, so the
/// cell order (and with it the pivot index) is preserved.
pub fn spawn_cells(desc: PieceDescriptor, offset_x: i8) -> PieceCells {
    let mirror = desc.mirrored && desc.kind.mirrorable();
    let width = layout_width(desc.kind);
    base_layout(desc.kind)
        .iter()
        .map(|cell| {
            let x = if mirror { width - 1 - cell.x } else { cell.x };
            Point::new(x + offset_x, cell.y)
        })
        .collect()
}

/// Rotate `cells` a clockwise quarter turn about the cell at index `pivot`,
/// then shift the whole piece uniformly so every cell lies within
/// `[0, cols) x [0, rows)`.
///
/// The pivot cell does not rotate; it only takes the boundary shift, like
/// every other cell. The shift is sized by the worst offender per axis, one
/// shift for the whole piece, so the shape is preserved. Occupancy is the
/// caller's concern.
pub fn rotated_cells(cells: &[Point], pivot: usize, cols: u8, rows: u8) -> PieceCells {
    debug_assert!(pivot < cells.len());
    let axis = cells[pivot];

    let mut rotated: PieceCells = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            if i == pivot {
                axis
            } else {
                let dx = cell.x - axis.x;
                let dy = cell.y - axis.y;
                // Clockwise 90 degrees in a y-down coordinate system.
                Point::new(axis.x - dy, axis.y + dx)
            }
        })
        .collect();

    let max_x = cols as i8 - 1;
    let max_y = rows as i8 - 1;
    let min_cx = rotated.iter().map(|cell| cell.x).min().unwrap_or(0);
    let max_cx = rotated.iter().map(|cell| cell.x).max().unwrap_or(0);
    let min_cy = rotated.iter().map(|cell| cell.y).min().unwrap_or(0);
    let max_cy = rotated.iter().map(|cell| cell.y).max().unwrap_or(0);

    let shift_x = if min_cx < 0 {
        -min_cx
    } else if max_cx > max_x {
        max_x - max_cx
    } else {
        0
    };
    let shift_y = if min_cy < 0 {
        -min_cy
    } else if max_cy > max_y {
        max_y - max_cy
    } else {
        0
    };

    for cell in &mut rotated {
        cell.x += shift_x;
        cell.y += shift_y;
    }
    rotated
}

/// A live piece on the board: cells in board coordinates plus the
/// index-aligned visual handles its rendering collaborator owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    kind: PieceKind,
    cells: PieceCells,
    squares: ArrayVec<SquareId, 4>,
    pivot: Option<usize>,
}

impl Piece {
    /// Resolve a descriptor into a live piece, allocating one visual handle
    /// per cell through `next_id`.
    pub fn new(desc: PieceDescriptor, offset_x: i8, mut next_id: impl FnMut() -> SquareId) -> Self {
        let cells = spawn_cells(desc, offset_x);
        let squares = cells.iter().map(|_| next_id()).collect();
        Self {
            kind: desc.kind,
            cells,
            squares,
            pivot: pivot_index(desc.kind),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    pub fn squares(&self) -> &[SquareId] {
        &self.squares
    }

    pub fn can_rotate(&self) -> bool {
        self.pivot.is_some()
    }

    pub fn pivot(&self) -> Option<usize> {
        self.pivot
    }

    /// Translate every cell uniformly. Callers validate first.
    pub fn translate(&mut self, dx: i8, dy: i8) {
        for cell in &mut self.cells {
            cell.x += dx;
            cell.y += dy;
        }
    }

    /// Replace the cell positions wholesale (rotation commit).
    pub fn set_cells(&mut self, cells: PieceCells) {
        debug_assert_eq!(cells.len(), self.squares.len());
        self.cells = cells;
    }
}

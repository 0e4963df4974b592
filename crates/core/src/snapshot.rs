use crate::piece::Piece;
use crate::types::{PieceDescriptor, PieceKind, Point};

/// The active piece as seen by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: [Point; 4],
}

impl From<&Piece> for ActiveSnapshot {
    fn from(piece: &Piece) -> Self {
        let mut cells = [Point::new(0, 0); 4];
        for (slot, cell) in cells.iter_mut().zip(piece.cells()) {
            *slot = *cell;
        }
        Self {
            kind: piece.kind(),
            cells,
        }
    }
}

/// Observable board state, polled after `tick`/`apply_input` return.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub rows: u8,
    pub cols: u8,
    /// Row-major occupancy of settled cells, 1 = occupied.
    pub grid: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub next: PieceDescriptor,
    pub score: u32,
    pub level: u32,
    pub step_interval: u32,
    pub game_over: bool,
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            grid: Vec::new(),
            active: None,
            next: PieceDescriptor {
                kind: PieceKind::Stick,
                mirrored: false,
            },
            score: 0,
            level: 1,
            step_interval: 0,
            game_over: false,
        }
    }
}

//! SquareStore: the rendering side of the opaque-handle contract.
//!
//! The core emits create/move/remove signals addressed by `SquareId`; this
//! store resolves them into positioned visual squares. It is the only place
//! that knows what a handle refers to.

use std::collections::HashMap;

use crate::types::{BoardEvent, PieceKind, SquareId};

/// One visual square on the board, falling or settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualSquare {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
}

/// All live visual squares, keyed by the core's handles.
#[derive(Debug, Clone, Default)]
pub struct SquareStore {
    squares: HashMap<SquareId, VisualSquare>,
    game_over: bool,
}

impl SquareStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one drained board event.
    pub fn apply(&mut self, event: &BoardEvent) {
        match *event {
            BoardEvent::CellCreated { id, kind, x, y } => {
                self.squares.insert(id, VisualSquare { kind, x, y });
            }
            BoardEvent::CellMoved { id, x, y } => {
                if let Some(square) = self.squares.get_mut(&id) {
                    square.x = x;
                    square.y = y;
                }
            }
            BoardEvent::CellRemoved { id } => {
                self.squares.remove(&id);
            }
            BoardEvent::RowCleared { .. } => {}
            BoardEvent::GameOver => {
                self.game_over = true;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &VisualSquare> {
        self.squares.values()
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }
}

//! Board engine - the falling-piece state machine
//!
//! Orchestrates the active piece over the grid: spawning from queued
//! descriptors, gravity on frame-counted ticks, player movement and rotation,
//! settling, line clears, scoring and leveling. The engine is the single
//! writer of board state; observers poll the getters or drain the event
//! queue after each `tick`/`apply_input` returns.

use crate::factory::PieceFactory;
use crate::grid::Grid;
use crate::piece::{layout_width, rotated_cells, spawn_cells, Piece};
use crate::scoring::{clear_award, level_for_score, scaled_interval};
use crate::snapshot::{ActiveSnapshot, BoardSnapshot};
use crate::types::{
    BoardConfig, BoardEvent, GameAction, PieceDescriptor, Point, SquareId, TickResult,
};

/// The board simulation engine. One instance per game session; terminal once
/// `is_game_over` returns true.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    active: Option<Piece>,
    next: PieceDescriptor,
    factory: PieceFactory,
    score: u32,
    last_clear_score: u32,
    level: u32,
    step_interval: u32,
    score_divisor: u32,
    step_scale: f64,
    game_over: bool,
    next_square: u32,
    events: Vec<BoardEvent>,
}

impl Board {
    /// Create an engine for one game session.
    ///
    /// Any row/column ratio is accepted, but boards narrower than four
    /// columns cannot fit every piece.
    pub fn new(config: BoardConfig, seed: u32) -> Self {
        assert!(config.cols >= 4, "board needs at least 4 columns");
        assert!(config.rows >= 4, "board needs at least 4 rows");
        assert!(config.start_step_interval > 0);
        assert!(config.score_divisor > 0);

        let mut factory = PieceFactory::new(seed);
        let next = factory.draw();
        Self {
            grid: Grid::new(config.rows, config.cols),
            active: None,
            next,
            factory,
            score: 0,
            last_clear_score: 0,
            level: 1,
            step_interval: config.start_step_interval,
            score_divisor: config.score_divisor,
            step_scale: config.step_scale,
            game_over: false,
            next_square: 0,
            events: Vec::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Ticks between automatic falls; shrinks as the level rises.
    pub fn step_interval(&self) -> u32 {
        self.step_interval
    }

    /// The queued descriptor feeding the next-piece preview.
    pub fn next_piece(&self) -> PieceDescriptor {
        self.next
    }

    /// Cells of the active piece, if one is falling.
    pub fn active_cells(&self) -> Option<&[Point]> {
        self.active.as_ref().map(|piece| piece.cells())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Drain the queued collaborator signals.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, BoardEvent> {
        self.events.drain(..)
    }

    /// Advance one frame.
    ///
    /// A frame with no active piece spawns one; otherwise the automatic fall
    /// runs when `frame_count` is a positive multiple of the step interval.
    pub fn tick(&mut self, frame_count: u64) -> TickResult {
        let mut result = TickResult {
            game_over: self.game_over,
            ..TickResult::default()
        };
        if self.game_over {
            return result;
        }

        if self.active.is_none() {
            self.spawn();
            result.game_over = self.game_over;
            return result;
        }

        if frame_count == 0 || frame_count % self.step_interval as u64 != 0 {
            return result;
        }

        if self.shift_active(0, 1) {
            result.moved = true;
            return result;
        }

        // Blocked fall: the piece settles into the grid.
        result.settled = true;
        let Some(piece) = self.active.take() else {
            return result;
        };
        self.grid.occupy(piece.cells(), piece.squares());

        if piece.cells().iter().any(|cell| cell.y == 0) {
            // Came to rest touching the top row.
            self.game_over = true;
            self.events.push(BoardEvent::GameOver);
            result.game_over = true;
            return result;
        }

        let cleared = self.grid.clear_full_rows(&mut self.events);
        if cleared > 0 {
            let award = clear_award(self.grid.rows(), cleared, self.last_clear_score);
            self.score += award.points;
            self.last_clear_score = award.streak;
            self.update_level();
        }
        result.rows_cleared = cleared as u32;
        result
    }

    /// Apply a player action. Returns true iff board state changed.
    pub fn apply_input(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.shift_active(-1, 0),
            GameAction::MoveRight => self.shift_active(1, 0),
            GameAction::MoveDown => self.shift_active(0, 1),
            GameAction::Rotate => self.rotate_active(),
        }
    }

    /// Whether the active piece can translate by `(dx, dy)`.
    ///
    /// Pure with respect to board state: repeated calls with no intervening
    /// mutation return the same answer.
    pub fn can_move(&self, dx: i8, dy: i8) -> bool {
        self.active
            .as_ref()
            .map_or(false, |piece| valid_move(&self.grid, piece.cells(), dx, dy))
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        self.grid.write_u8_grid(&mut out.grid);
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.next = self.next;
        out.score = self.score;
        out.level = self.level;
        out.step_interval = self.step_interval;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snap = BoardSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    fn shift_active(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if !valid_move(&self.grid, piece.cells(), dx, dy) {
            return false;
        }
        piece.translate(dx, dy);
        for (&id, cell) in piece.squares().iter().zip(piece.cells()) {
            self.events.push(BoardEvent::CellMoved {
                id,
                x: cell.x,
                y: cell.y,
            });
        }
        true
    }

    fn rotate_active(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        let Some(pivot) = piece.pivot() else {
            // Rotation-invariant piece; nothing to do.
            return false;
        };

        let target = rotated_cells(piece.cells(), pivot, self.grid.cols(), self.grid.rows());
        if target
            .iter()
            .any(|cell| self.grid.is_occupied(cell.x, cell.y))
        {
            // Blocked rotation is silent: the piece keeps its position.
            return false;
        }

        piece.set_cells(target);
        for (&id, cell) in piece.squares().iter().zip(piece.cells()) {
            self.events.push(BoardEvent::CellMoved {
                id,
                x: cell.x,
                y: cell.y,
            });
        }
        true
    }

    /// Promote the queued descriptor to the active piece, horizontally
    /// centered at row 0, and queue a fresh descriptor for the preview.
    fn spawn(&mut self) {
        let desc = self.next;
        let offset_x = (self.grid.cols() as i8 - layout_width(desc.kind)) / 2;
        let cells = spawn_cells(desc, offset_x);

        if cells
            .iter()
            .any(|cell| self.grid.is_occupied(cell.x, cell.y))
        {
            // No room to spawn; committing the overlap later would corrupt
            // the grid, so the session ends here.
            self.game_over = true;
            self.events.push(BoardEvent::GameOver);
            return;
        }

        let mut counter = self.next_square;
        let piece = Piece::new(desc, offset_x, || {
            let id = SquareId::from_raw(counter);
            counter += 1;
            id
        });
        self.next_square = counter;

        for (&id, cell) in piece.squares().iter().zip(piece.cells()) {
            self.events.push(BoardEvent::CellCreated {
                id,
                kind: desc.kind,
                x: cell.x,
                y: cell.y,
            });
        }
        self.active = Some(piece);
        self.next = self.factory.draw();
    }

    fn update_level(&mut self) {
        let new_level = level_for_score(self.score, self.score_divisor);
        if new_level > self.level {
            self.level = new_level;
            self.step_interval = scaled_interval(self.step_interval, self.step_scale);
        }
    }
}

/// Per-cell move validation: every cell must clear the board edges for its
/// direction of travel and land on an unoccupied cell. A conjunction over
/// cells, not a check on the piece's bounding box.
fn valid_move(grid: &Grid, cells: &[Point], dx: i8, dy: i8) -> bool {
    cells.iter().all(|cell| {
        if dx < 0 && cell.x == 0 {
            return false;
        }
        if dx > 0 && cell.x == grid.cols() as i8 - 1 {
            return false;
        }
        if dy > 0 && cell.y == grid.rows() as i8 - 1 {
            return false;
        }
        !grid.is_occupied(cell.x + dx, cell.y + dy)
    })
}

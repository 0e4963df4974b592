//! Board simulation core - pure, deterministic, and testable
//!
//! This crate contains the whole falling-block simulation: grid occupancy,
//! piece layouts and rotation, randomized piece production, movement and
//! collision validation, line clears, scoring and leveling. It has **zero
//! dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: same seed, same piece sequence, same game
//! - **Testable**: every rule is reachable from plain function calls
//! - **Portable**: runs in any host (terminal, GUI, headless)
//!
//! # Module structure
//!
//! - [`grid`]: occupancy table with per-row filled counts and line clearing
//! - [`piece`]: piece layouts, mirroring, and axis rotation with boundary
//!   correction
//! - [`factory`]: seeded randomized piece descriptors
//! - [`board`]: the engine tying the pieces together behind the
//!   `tick`/`apply_input` API
//! - [`scoring`]: clear awards, streak carry-over, and the level curve
//! - [`snapshot`]: observable state polled by collaborators
//!
//! # Collaborator boundary
//!
//! Rendering, input mapping, and the frame loop live outside this crate. The
//! engine addresses visual squares only through opaque handles carried in
//! [`types::BoardEvent`] signals, drained by the rendering collaborator after
//! each call; presentation state (score, level, next piece, game over) is
//! polled through getters.
//!
//! # Example
//!
//! ```
//! use blockfall_core::Board;
//! use blockfall_core::types::{BoardConfig, GameAction};
//!
//! let mut board = Board::new(BoardConfig::default(), 42);
//! board.tick(0); // spawns the first piece
//! board.apply_input(GameAction::MoveLeft);
//!
//! let mut frame = 0;
//! while !board.tick(frame).settled {
//!     frame += 1;
//! }
//! assert!(board.snapshot().grid.iter().any(|&cell| cell == 1));
//! ```

pub mod board;
pub mod factory;
pub mod grid;
pub mod piece;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience.
pub use board::Board;
pub use factory::{PieceFactory, SimpleRng};
pub use grid::Grid;
pub use piece::{layout_width, pivot_index, rotated_cells, spawn_cells, Piece, PieceCells};
pub use scoring::{clear_award, level_for_score, scaled_interval, ClearAward};
pub use snapshot::{ActiveSnapshot, BoardSnapshot};

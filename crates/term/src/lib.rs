//! Terminal rendering collaborator.
//!
//! The simulation core addresses visual squares only through opaque handles;
//! this crate owns what those handles mean. [`SquareStore`] consumes the
//! core's cell events into positioned squares, [`GameView`] maps the store
//! plus the board's observable state into a framebuffer, and
//! [`TerminalRenderer`] flushes framebuffers to a real terminal.
//!
//! Goals:
//! - Keep the core free of rendering references
//! - Keep the view pure (no I/O) so it can be unit-tested
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod squares;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
pub use squares::{SquareStore, VisualSquare};

//! GameView: maps board state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Visual squares come from the [`SquareStore`] (fed by the core's cell
//! events); the HUD (score, level, next piece, game over) is polled from the
//! board's observable getters.

use crate::core::{spawn_cells, Board};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::squares::SquareStore;
use crate::types::PieceKind;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::Stick => Rgb::new(200, 60, 60),
        PieceKind::Square => Rgb::new(70, 110, 220),
        PieceKind::TBone => Rgb::new(160, 80, 200),
        PieceKind::Squiggle => Rgb::new(80, 180, 90),
        PieceKind::BendyGuy => Rgb::new(220, 150, 60),
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game into a framebuffer.
    pub fn render(&self, board: &Board, squares: &SquareStore, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let cols = board.grid().cols() as u16;
        let rows = board.grid().rows() as u16;
        let board_px_w = cols * self.cell_w;
        let board_px_h = rows * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + SIDE_PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let well = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(25, 25, 35),
            bold: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', well);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Every live square, falling or settled.
        for square in squares.iter() {
            if square.x < 0 || square.y < 0 {
                continue;
            }
            let style = CellStyle {
                fg: Rgb::new(10, 10, 10),
                bg: kind_color(square.kind),
                bold: false,
            };
            fb.fill_rect(
                start_x + 1 + square.x as u16 * self.cell_w,
                start_y + 1 + square.y as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                ' ',
                style,
            );
        }

        self.draw_side_panel(&mut fb, board, start_x + frame_w + 2, start_y);

        if board.is_game_over() {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        fb
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }
        for col in x + 1..x + w - 1 {
            fb.set(col, y, style.into_cell('─'));
            fb.set(col, y + h - 1, style.into_cell('─'));
        }
        for row in y + 1..y + h - 1 {
            fb.set(x, row, style.into_cell('│'));
            fb.set(x + w - 1, row, style.into_cell('│'));
        }
        fb.set(x, y, style.into_cell('┌'));
        fb.set(x + w - 1, y, style.into_cell('┐'));
        fb.set(x, y + h - 1, style.into_cell('└'));
        fb.set(x + w - 1, y + h - 1, style.into_cell('┘'));
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, board: &Board, x: u16, y: u16) {
        let label = CellStyle {
            fg: Rgb::new(150, 150, 160),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let value = CellStyle {
            fg: Rgb::new(240, 240, 240),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        fb.draw_text(x, y, "SCORE", label);
        fb.draw_text(x, y + 1, &board.score().to_string(), value);
        fb.draw_text(x, y + 3, "LEVEL", label);
        fb.draw_text(x, y + 4, &board.level().to_string(), value);

        fb.draw_text(x, y + 6, "NEXT", label);
        let next = board.next_piece();
        let style = CellStyle {
            fg: Rgb::new(10, 10, 10),
            bg: kind_color(next.kind),
            bold: false,
        };
        for cell in spawn_cells(next, 0) {
            fb.fill_rect(
                x + cell.x as u16 * self.cell_w,
                y + 7 + cell.y as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                ' ',
                style,
            );
        }

        fb.draw_text(x, y + 11, "q quit", label);
        fb.draw_text(x, y + 12, "←→↓ move  ↑ rotate", label);
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        text: &str,
    ) {
        let style = CellStyle {
            fg: Rgb::new(250, 250, 250),
            bg: Rgb::new(120, 30, 30),
            bold: true,
        };
        let text_x = x + w.saturating_sub(text.len() as u16) / 2;
        let text_y = y + h / 2;
        fb.draw_text(text_x, text_y, text, style);
    }
}

/// Columns reserved to the right of the well for the HUD.
const SIDE_PANEL_W: u16 = 20;

//! Terminal runner (default binary).
//!
//! The frame loop lives here, outside the simulation core: it polls keys
//! between fixed 16 ms frames, forwards actions to the engine, advances
//! `tick(frame_count)`, drains the engine's cell events into the square
//! store, and draws.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::Board;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, SquareStore, TerminalRenderer, Viewport};
use blockfall::types::{BoardConfig, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos())
        .unwrap_or(1);
    let mut board = Board::new(BoardConfig::default(), seed);
    let mut squares = SquareStore::new();
    let view = GameView::default();

    let mut last_frame = Instant::now();
    let frame_duration = Duration::from_millis(TICK_MS as u64);
    let mut frame_count: u64 = 0;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&board, &squares, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        board.apply_input(action);
                    }
                }
            }
        }

        if last_frame.elapsed() >= frame_duration {
            last_frame = Instant::now();
            frame_count += 1;
            board.tick(frame_count);
        }

        for event in board.drain_events() {
            squares.apply(&event);
        }
    }
}

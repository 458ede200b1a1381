//! Event handling functions for user input and application state updates.

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    grid::Point,
    types::{Command, Direction},
    world::SearchStatus,
    App,
};

/// Handles input events and advances the search when auto-run is on.
///
/// This function polls for keyboard events for at most one tick, translates the pressed key into a
/// [`Command`] and applies it. Whether or not a key arrived, the auto-run mode then gets its chance
/// to advance the search by one step.
///
/// # Errors
///
/// This function may return errors from polling or reading terminal events.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(app.tick)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(command) = command_for(key.code) {
                    apply_command(app, command)?;
                }
            }
        }
    }

    advance(app);

    Ok(())
}

/// Maps a key to the command bound to it.
///
/// This function holds every key binding of the application. Keys without a binding map to
/// `None` and are ignored by the caller.
pub(crate) const fn command_for(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('h') | KeyCode::Left => Some(Command::MoveCursor(Direction::Left)),
        KeyCode::Char('j') | KeyCode::Down => Some(Command::MoveCursor(Direction::Down)),
        KeyCode::Char('k') | KeyCode::Up => Some(Command::MoveCursor(Direction::Up)),
        KeyCode::Char('l') | KeyCode::Right => Some(Command::MoveCursor(Direction::Right)),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::ToggleWall),
        KeyCode::Char('1') => Some(Command::PlaceStart),
        KeyCode::Char('2') => Some(Command::PlaceEnd),
        KeyCode::Char('s') => Some(Command::Step),
        KeyCode::Char('f') => Some(Command::ToggleRun),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('p') => Some(Command::Reconstruct),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Applies a command to the application state.
///
/// Endpoint placements restart the search. Wall toggles leave the search state untouched until the
/// next reset. A failed path reconstruction is recorded as a notice for the status line, and a
/// later successful one clears it.
///
/// # Errors
///
/// This function may return errors if the cursor somehow left the grid.
pub(crate) fn apply_command(app: &mut App, command: Command) -> Result<()> {
    match command {
        Command::MoveCursor(direction) => move_cursor(app, direction),
        Command::ToggleWall => {
            let _ = app.world.toggle_wall_at(app.cursor)?;
        }
        Command::PlaceStart => {
            app.world.set_start(app.cursor)?;
            restart(app);
        }
        Command::PlaceEnd => {
            app.world.set_end(app.cursor)?;
            restart(app);
        }
        Command::Step => {
            let _ = app.world.step();
        }
        Command::ToggleRun => {
            app.running = !app.running;
            log::debug!("auto-run {}", if app.running { "on" } else { "off" });
        }
        Command::Reset => restart(app),
        Command::Reconstruct => match app.world.reconstruct() {
            Ok(()) => app.notice = None,
            Err(err) => {
                log::warn!("path reconstruction failed: {err}");
                app.notice = Some(err.to_string());
            }
        },
        Command::Quit => app.exit = true,
    }

    Ok(())
}

/// Performs one auto-run step.
///
/// This function steps the search once when auto-run is on, and switches auto-run off as soon as
/// the search stops on its own.
pub(crate) fn advance(app: &mut App) {
    if app.running && app.world.step() != SearchStatus::Searching {
        app.running = false;
    }
}

/// Moves the cursor one cell, stopping at the grid border.
fn move_cursor(app: &mut App, direction: Direction) {
    let Point { x, y } = app.cursor;
    app.cursor = match direction {
        Direction::Up => Point::new(x, y.saturating_sub(1)),
        Direction::Down => Point::new(x, (y + 1).min(app.world.height() - 1)),
        Direction::Left => Point::new(x.saturating_sub(1), y),
        Direction::Right => Point::new((x + 1).min(app.world.width() - 1), y),
    };
}

/// Resets the search and everything shown about the previous one.
fn restart(app: &mut App) {
    app.world.reset();
    app.notice = None;
}

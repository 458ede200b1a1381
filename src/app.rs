//! Core application state and main loop.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{events, grid::Point, ui, world::GridWorld, Config};

/// Application state container for the visualizer.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the grid and Crossterm events will write to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit but it starts off `false`.
    pub(crate) exit: bool,
    /// Grid world being searched.
    ///
    /// This field holds the walls, the endpoints and the search state. It is only ever modified in
    /// response to a [`Command`](crate::types::Command) or a tick of the auto-run mode.
    pub(crate) world: GridWorld,
    /// Cell under the keyboard cursor.
    ///
    /// This field holds the cell that wall toggles and endpoint placements apply to. It always
    /// lies inside the grid.
    pub(crate) cursor: Point,
    /// Auto-run flag.
    ///
    /// This field indicates whether the search advances by itself on every tick of the main loop.
    pub(crate) running: bool,
    /// Outcome of the last path reconstruction that failed.
    ///
    /// This field holds a short message shown in the status line until the next reset, so that a
    /// stale distance field is reported on screen instead of ending the program.
    pub(crate) notice: Option<String>,
    /// Time to wait for input on each pass of the main loop.
    pub(crate) tick: Duration,
}

impl App {
    /// Creates a new application with a fresh grid world sized from the configuration.
    ///
    /// # Errors
    ///
    /// - [`WorldError::EmptyGrid`](crate::WorldError::EmptyGrid) if a dimension is zero.
    /// - [`WorldError::TooLarge`](crate::WorldError::TooLarge) if the grid cannot be indexed.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            exit: false,
            world: GridWorld::new(config.width, config.height)?,
            cursor: Point::default(),
            running: false,
            notice: None,
            tick: config.tick(),
        })
    }

    /// Runs the main loop of the application.
    ///
    /// This function draws the grid, then handles user input and advances the search when the
    /// auto-run mode is on. The loop continues until the exit condition is `true`, after which the
    /// function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        log::info!(
            "starting on a {}x{} grid",
            self.world.width(),
            self.world.height()
        );

        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}

//! Type definitions for the commands the user can issue from the keyboard.

/// Direction in which the grid cursor moves.
///
/// This enumeration holds the four axis-aligned directions. The cursor never moves diagonally,
/// matching the way the search itself only walks between axis-aligned neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Towards the first row.
    Up,
    /// Towards the last row.
    Down,
    /// Towards the first column.
    Left,
    /// Towards the last column.
    Right,
}

/// Action requested by a key press.
///
/// This enumeration is the vocabulary between raw terminal events and the application state.
/// Events are translated into a command first, and only commands ever touch the grid world, which
/// keeps the key bindings in one place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Move the cursor one cell.
    ///
    /// This variant moves the cursor in the given direction. The cursor stops at the grid border
    /// instead of wrapping around.
    MoveCursor(Direction),
    /// Flip the wall under the cursor.
    ///
    /// This variant toggles the wall flag of the cell under the cursor. The search state is not
    /// reset, so distances computed so far stay on screen until the next reset.
    ToggleWall,
    /// Place the start under the cursor.
    ///
    /// This variant moves the start of the search to the cursor and restarts the search.
    PlaceStart,
    /// Place the end under the cursor.
    ///
    /// This variant moves the end of the search to the cursor and restarts the search.
    PlaceEnd,
    /// Advance the search once.
    Step,
    /// Start or stop stepping on every tick.
    ///
    /// This variant toggles the auto-run mode, in which the search advances by one step per tick
    /// of the main loop until it stops on its own.
    ToggleRun,
    /// Restart the search.
    Reset,
    /// Trace the shortest path back from the end.
    Reconstruct,
    /// Leave the application.
    Quit,
}

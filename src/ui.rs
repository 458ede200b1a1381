//! User interface rendering for the grid screen.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::{grid::Point, world::GridWorld, App};

/// Fewest digits reserved for a distance label.
const MIN_LABEL_DIGITS: usize = 3;

/// Key bindings listed in the tooltip below the grid.
const KEY_HELP: &str = "(hjkl) move / (space) wall / (1) start / (2) end / (s) step / (f) run / \
                        (r) reset / (p) path / (q) quit";

/// Updates the application UI based on the persistent state.
///
/// This function renders the grid centered in the terminal, with the search status in the bottom
/// border of the grid and the key bindings in a tooltip at the bottom of the screen.
///
/// # Errors
///
/// This function may return errors from layout lookups, dimension conversions or grid queries.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Grid and padding area
        Constraint::Length(3), // Tooltip block
    ])
    .split(frame.area());

    let grid_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get grid content area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let width = cell_width(&app.world);
    let grid_columns = u16::try_from(app.world.width().saturating_mul(width).saturating_add(2))?;
    let grid_rows = u16::try_from(app.world.height() + 2)?;

    let grid_area = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(grid_rows),
        Constraint::Min(0),
    ])
    .split(grid_content_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get grid rows from vertical layout")?;
    let grid_area = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(grid_columns),
        Constraint::Min(0),
    ])
    .split(grid_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get grid columns from horizontal layout")?;

    let block = Block::bordered()
        .title("Dijkstra")
        .title_bottom(status_line(app))
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let lines = (0..app.world.height())
        .map(|y| {
            (0..app.world.width())
                .map(|x| cell_span(app, Point::new(x, y), width))
                .collect::<Result<Vec<_>>>()
                .map(Line::from)
        })
        .collect::<Result<Vec<_>>>()?;

    frame.render_widget(Paragraph::new(lines).block(block), grid_area);

    let tooltip_block = Block::bordered()
        .title(KEY_HELP)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Terminal columns taken by one grid cell.
///
/// No distance can reach the cell count, so the widest label is the digit count of the last cell
/// index. One more column keeps neighbouring labels apart.
pub(crate) fn cell_width(world: &GridWorld) -> usize {
    let widest = world.width() * world.height() - 1;
    widest.to_string().len().max(MIN_LABEL_DIGITS) + 1
}

/// Builds the styled text of one grid cell, padded to `width` columns.
///
/// Endpoints take precedence over walls, walls over the path, and the path over plain settled
/// cells. Settled and path cells print their distance. The cursor cell is drawn reversed.
///
/// # Errors
///
/// This function may return errors if the point lies outside the grid.
pub(crate) fn cell_span(app: &App, point: Point, width: usize) -> Result<Span<'static>> {
    let world = &app.world;
    let settled = !world.is_unvisited(point)?;
    let on_path = world.path().contains(&point);

    let (foreground, background) = if point == world.start() {
        (Color::Black, Color::Green)
    } else if point == world.end() {
        (Color::Black, Color::Red)
    } else if world.wall_at(point)? {
        (Color::White, Color::Magenta)
    } else if on_path {
        (Color::Black, Color::LightGreen)
    } else if settled {
        (Color::White, Color::DarkGray)
    } else {
        (Color::Black, Color::White)
    };

    let digits = width.saturating_sub(1);
    let label = match world.distance_at(point)? {
        Some(distance) if settled || on_path => format!("{distance:>digits$} "),
        _ => " ".repeat(width),
    };

    let mut style = Style::default().fg(foreground).bg(background);
    if point == app.cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    Ok(Span::styled(label, style))
}

/// Text shown in the bottom border of the grid.
///
/// This function reports the search status, how many cells have been settled and whether auto-run
/// is on. A pending notice, such as a failed path reconstruction, replaces the counters.
pub(crate) fn status_line(app: &App) -> String {
    if let Some(notice) = &app.notice {
        return format!(" {notice} ");
    }

    let world = &app.world;
    let cells = world.width() * world.height();
    let mode = if app.running { "running" } else { "paused" };

    format!(
        " {} / {} of {cells} settled / {mode} ",
        world.status().label(),
        cells - world.unvisited_count()
    )
}

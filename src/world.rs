//! Step-wise Dijkstra search over an editable grid.
//!
//! The [`GridWorld`] aggregate owns the grid, the endpoints and every piece of search state. The
//! search advances one settled cell per [`GridWorld::step`] call so that a driver can pace it, and
//! the shortest path is recovered afterwards by descending the distance field from the end back to
//! the start.
//!
//! Edits never invalidate search state on their own. A caller that moves an endpoint or changes a
//! wall is expected to call [`GridWorld::reset`] before trusting the distances again.

use log::{debug, info, trace, warn};

use crate::{
    error::WorldError,
    grid::{Grid, Point},
};

/// Distance stored for cells the search has not reached.
const UNREACHED: u32 = u32::MAX;

/// Progress of the search since the last reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// The end has not been finalized and unexplored reachable cells remain.
    Searching,
    /// The end has been finalized. Further steps are no-ops.
    Reached,
    /// No unvisited cell has a finite distance while the end is still unvisited, so the end is
    /// unreachable with the current walls. Further steps are no-ops.
    Exhausted,
}

impl SearchStatus {
    /// Short lowercase name used in status lines and logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Searching => "searching",
            Self::Reached => "reached",
            Self::Exhausted => "exhausted",
        }
    }
}

/// Grid world holding the walls, the endpoints and the state of one single-source search.
///
/// A fresh world has no walls, starts at the top-left cell, ends at the bottom-right cell and is
/// already reset.
#[derive(Clone, Debug)]
pub struct GridWorld {
    /// Geometry and wall flags.
    grid: Grid,
    /// Source of the search.
    start: Point,
    /// Target of the search.
    end: Point,
    /// `true` for every cell the search has not finalized yet, indexed by [`Grid::linear`].
    unvisited: Vec<bool>,
    /// Number of `true` entries in [`GridWorld::unvisited`].
    unvisited_count: usize,
    /// Best known distance from the start, [`UNREACHED`] when none is known.
    distances: Vec<u32>,
    /// Cell the next step expands.
    current: Point,
    /// Set once frontier selection finds no unvisited cell with a finite distance.
    exhausted: bool,
    /// Last reconstructed path, from the end back to the start.
    path: Vec<Point>,
}

impl GridWorld {
    /// Creates a reset world of the given dimensions with no walls.
    ///
    /// # Errors
    ///
    /// - [`WorldError::EmptyGrid`] if either dimension is zero.
    /// - [`WorldError::TooLarge`] if the cell count overflows a `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, WorldError> {
        let grid = Grid::new(width, height)?;
        let cells = grid.cell_count();
        let start = Point::new(0, 0);
        let end = Point::new(width - 1, height - 1);

        let mut world = Self {
            grid,
            start,
            end,
            unvisited: vec![true; cells],
            unvisited_count: cells,
            distances: vec![UNREACHED; cells],
            current: start,
            exhausted: false,
            path: Vec::new(),
        };
        world.reset();

        Ok(world)
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// Source cell of the search.
    pub const fn start(&self) -> Point {
        self.start
    }

    /// Target cell of the search.
    pub const fn end(&self) -> Point {
        self.end
    }

    /// Cell the next [`step`](GridWorld::step) will expand.
    pub const fn current(&self) -> Point {
        self.current
    }

    /// Last reconstructed path, ordered from the end to the start. Empty until
    /// [`reconstruct`](GridWorld::reconstruct) succeeds.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Number of cells the search has not finalized.
    pub const fn unvisited_count(&self) -> usize {
        self.unvisited_count
    }

    /// Progress of the search.
    pub fn status(&self) -> SearchStatus {
        if !self.is_open(self.grid.linear(self.end)) {
            SearchStatus::Reached
        } else if self.exhausted {
            SearchStatus::Exhausted
        } else {
            SearchStatus::Searching
        }
    }

    /// Whether the cell at `point` is a wall.
    ///
    /// # Errors
    ///
    /// - [`WorldError::OutOfBounds`] if the point lies outside the grid.
    pub fn wall_at(&self, point: Point) -> Result<bool, WorldError> {
        self.grid.wall_at(point)
    }

    /// Whether the search has not finalized the cell at `point` yet.
    ///
    /// # Errors
    ///
    /// - [`WorldError::OutOfBounds`] if the point lies outside the grid.
    pub fn is_unvisited(&self, point: Point) -> Result<bool, WorldError> {
        let index = self.grid.index_of(point)?;
        Ok(self.is_open(index))
    }

    /// Best known distance from the start to `point`, or `None` while it is unreached.
    ///
    /// # Errors
    ///
    /// - [`WorldError::OutOfBounds`] if the point lies outside the grid.
    pub fn distance_at(&self, point: Point) -> Result<Option<u32>, WorldError> {
        let index = self.grid.index_of(point)?;
        Ok(Some(self.distance(index)).filter(|&distance| distance != UNREACHED))
    }

    /// Marks or clears a wall. Search state is left as it is.
    ///
    /// # Errors
    ///
    /// - [`WorldError::OutOfBounds`] if the point lies outside the grid.
    pub fn set_wall_at(&mut self, point: Point, value: bool) -> Result<(), WorldError> {
        self.grid.set_wall_at(point, value)?;
        debug!("wall at {point} set to {value}");

        Ok(())
    }

    /// Flips the wall flag at `point` and returns the new flag.
    ///
    /// # Errors
    ///
    /// - [`WorldError::OutOfBounds`] if the point lies outside the grid.
    pub fn toggle_wall_at(&mut self, point: Point) -> Result<bool, WorldError> {
        let wall = !self.grid.wall_at(point)?;
        self.set_wall_at(point, wall)?;

        Ok(wall)
    }

    /// Moves the start. Takes effect on the next [`reset`](GridWorld::reset).
    ///
    /// # Errors
    ///
    /// - [`WorldError::OutOfBounds`] if the point lies outside the grid.
    pub fn set_start(&mut self, point: Point) -> Result<(), WorldError> {
        let _ = self.grid.index_of(point)?;
        self.start = point;
        debug!("start moved to {point}");

        Ok(())
    }

    /// Moves the end. Search state is left as it is.
    ///
    /// # Errors
    ///
    /// - [`WorldError::OutOfBounds`] if the point lies outside the grid.
    pub fn set_end(&mut self, point: Point) -> Result<(), WorldError> {
        let _ = self.grid.index_of(point)?;
        self.end = point;
        debug!("end moved to {point}");

        Ok(())
    }

    /// Restarts the search from the current start.
    ///
    /// Every cell becomes unvisited and unreached except the start, which gets distance zero and
    /// becomes the current cell. The path is cleared. Walls and endpoints are kept.
    pub fn reset(&mut self) {
        self.distances.fill(UNREACHED);
        self.unvisited.fill(true);
        self.unvisited_count = self.unvisited.len();

        let start = self.grid.linear(self.start);
        if let Some(distance) = self.distances.get_mut(start) {
            *distance = 0;
        }

        self.current = self.start;
        self.exhausted = false;
        self.path.clear();

        debug!(
            "search reset from {} to {} on a {}x{} grid",
            self.start,
            self.end,
            self.width(),
            self.height()
        );
    }

    /// Advances the search by one settled cell and returns the resulting status.
    ///
    /// The open, non-wall neighbours of the current cell are relaxed with a unit edge cost, the
    /// current cell is finalized, and the unvisited cell with the smallest finite distance becomes
    /// the next current cell. Ties go to the lowest row-major index. Once the end is finalized or
    /// the frontier is exhausted, the call changes nothing.
    pub fn step(&mut self) -> SearchStatus {
        let status = self.status();
        if status != SearchStatus::Searching {
            return status;
        }

        let current = self.grid.linear(self.current);
        // Walls are impassable from either side, so a start placed on one never spreads.
        if !self.grid.is_blocked(current) {
            let candidate = self.distance(current).saturating_add(1);
            for neighbour in self.grid.neighbours(self.current) {
                let index = self.grid.linear(neighbour);
                if !self.is_open(index) || self.grid.is_blocked(index) {
                    continue;
                }

                if let Some(distance) = self.distances.get_mut(index) {
                    if candidate < *distance {
                        trace!("relaxed {neighbour} to {candidate}");
                        *distance = candidate;
                    }
                }
            }
        }

        self.finalize(current);

        match self.nearest_unvisited() {
            Some(next) => self.current = self.grid.point_at(next),
            None => self.exhausted = true,
        }

        let status = self.status();
        match status {
            SearchStatus::Reached => info!(
                "reached {} at distance {} with {} cells left unvisited",
                self.end,
                self.distance(self.grid.linear(self.end)),
                self.unvisited_count
            ),
            SearchStatus::Exhausted => info!(
                "{} is unreachable from {}; {} cells left unvisited",
                self.end, self.start, self.unvisited_count
            ),
            SearchStatus::Searching => {}
        }

        status
    }

    /// Rebuilds [`path`](GridWorld::path) by descending the distance field from the end.
    ///
    /// The path is cleared first and stays empty while the end is unvisited. Otherwise each hop
    /// moves to the non-wall neighbour with the smallest distance until the start is reached, so
    /// the result runs from the end to the start, both included.
    ///
    /// The distance field must match the current walls and endpoints, i.e. no edits since the last
    /// reset. The current cell is not touched.
    ///
    /// # Errors
    ///
    /// - [`WorldError::StalledBacktrace`] if some cell on the way has no neighbour with a strictly
    ///   smaller distance. The path is left empty.
    pub fn reconstruct(&mut self) -> Result<(), WorldError> {
        self.path.clear();

        if self.is_open(self.grid.linear(self.end)) {
            debug!("{} is still unvisited, no path to reconstruct", self.end);
            return Ok(());
        }

        let mut cell = self.end;
        let mut path = vec![cell];
        while cell != self.start {
            let Some(next) = self.descend(cell) else {
                warn!("backtrace from {} stalled at {cell}", self.end);
                return Err(WorldError::StalledBacktrace { at: cell });
            };
            cell = next;
            path.push(cell);
        }

        debug!("reconstructed a path of {} cells", path.len());
        self.path = path;

        Ok(())
    }

    /// Distance by linear index.
    fn distance(&self, index: usize) -> u32 {
        self.distances.get(index).copied().unwrap_or(UNREACHED)
    }

    /// Unvisited flag by linear index.
    fn is_open(&self, index: usize) -> bool {
        self.unvisited.get(index).copied().unwrap_or(false)
    }

    /// Removes a cell from the unvisited set. Calling it twice is harmless.
    fn finalize(&mut self, index: usize) {
        if let Some(open) = self.unvisited.get_mut(index) {
            if *open {
                *open = false;
                self.unvisited_count -= 1;
            }
        }
    }

    /// Unvisited cell with the smallest finite distance, lowest index first on ties.
    fn nearest_unvisited(&self) -> Option<usize> {
        self.unvisited
            .iter()
            .zip(&self.distances)
            .enumerate()
            .filter(|&(_, (&open, &distance))| open && distance != UNREACHED)
            .min_by_key(|&(_, (_, &distance))| distance)
            .map(|(index, _)| index)
    }

    /// Non-wall neighbour of `from` with the smallest distance below that of `from`.
    fn descend(&self, from: Point) -> Option<Point> {
        let here = self.distance(self.grid.linear(from));

        self.grid
            .neighbours(from)
            .map(|neighbour| (neighbour, self.grid.linear(neighbour)))
            .filter(|&(_, index)| !self.grid.is_blocked(index))
            .map(|(neighbour, index)| (neighbour, self.distance(index)))
            .filter(|&(_, distance)| distance < here)
            .min_by_key(|&(_, distance)| distance)
            .map(|(neighbour, _)| neighbour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Steps until the search stops, bounded by the number of cells.
    fn run_to_completion(world: &mut GridWorld) -> SearchStatus {
        for _ in 0..world.width() * world.height() {
            if world.step() != SearchStatus::Searching {
                break;
            }
        }

        world.status()
    }

    /// Every cell of the world in row-major order.
    fn cells(world: &GridWorld) -> Vec<Point> {
        (0..world.height())
            .flat_map(|y| (0..world.width()).map(move |x| Point::new(x, y)))
            .collect()
    }

    /// Unvisited flag and distance of every cell.
    fn snapshot(world: &GridWorld) -> Vec<(bool, Option<u32>)> {
        cells(world)
            .into_iter()
            .map(|point| {
                (
                    world.is_unvisited(point).expect("cell is in bounds"),
                    world.distance_at(point).expect("cell is in bounds"),
                )
            })
            .collect()
    }

    /// Builds a world and marks the listed cells as walls, then resets it.
    fn world_with_walls(width: usize, height: usize, walls: &[(usize, usize)]) -> GridWorld {
        let mut world = GridWorld::new(width, height).expect("dimensions are positive");
        for &(x, y) in walls {
            world
                .set_wall_at(Point::new(x, y), true)
                .expect("wall is in bounds");
        }
        world.reset();
        world
    }

    #[test]
    fn test_new_world_defaults() {
        let world = GridWorld::new(4, 3).expect("dimensions are positive");

        assert_eq!(world.width(), 4);
        assert_eq!(world.height(), 3);
        assert_eq!(world.start(), Point::new(0, 0));
        assert_eq!(world.end(), Point::new(3, 2));
        assert_eq!(world.current(), world.start());
        assert_eq!(world.unvisited_count(), 12);
        assert_eq!(world.status(), SearchStatus::Searching);
        assert!(world.path().is_empty());
        assert!(cells(&world)
            .into_iter()
            .all(|point| world.wall_at(point) == Ok(false)));
    }

    #[test]
    fn test_new_rejects_empty_grid() {
        assert_eq!(
            GridWorld::new(0, 5).map(|world| world.width()),
            Err(WorldError::EmptyGrid)
        );
    }

    #[test]
    fn test_new_rejects_oversized_grid() {
        assert_eq!(
            GridWorld::new(usize::MAX, 2).map(|world| world.width()),
            Err(WorldError::TooLarge {
                width: usize::MAX,
                height: 2,
            })
        );
    }

    #[test]
    fn test_reset_anchors_start() {
        let mut world = world_with_walls(4, 4, &[(1, 1)]);
        world
            .set_start(Point::new(2, 1))
            .expect("start is in bounds");
        let _ = run_to_completion(&mut world);
        world.reset();

        for point in cells(&world) {
            let expected = (point == Point::new(2, 1)).then_some(0);
            assert_eq!(
                world.distance_at(point),
                Ok(expected),
                "unexpected distance at {point}"
            );
            assert_eq!(world.is_unvisited(point), Ok(true));
        }
        assert_eq!(world.current(), Point::new(2, 1));
        assert_eq!(world.unvisited_count(), 16);
        assert_eq!(world.wall_at(Point::new(1, 1)), Ok(true));
    }

    #[test]
    fn test_straight_corridor_path() {
        let mut world = GridWorld::new(5, 1).expect("dimensions are positive");

        assert_eq!(run_to_completion(&mut world), SearchStatus::Reached);
        assert_eq!(world.distance_at(world.end()), Ok(Some(4)));

        world.reconstruct().expect("distances are consistent");
        assert_eq!(
            world.path(),
            [
                Point::new(4, 0),
                Point::new(3, 0),
                Point::new(2, 0),
                Point::new(1, 0),
                Point::new(0, 0),
            ]
        );
    }

    #[test]
    fn test_enclosed_end_is_unreachable() {
        let mut world = world_with_walls(3, 3, &[(2, 0), (1, 1), (0, 2)]);

        assert_eq!(run_to_completion(&mut world), SearchStatus::Exhausted);
        assert_eq!(world.is_unvisited(world.end()), Ok(true));
        assert_eq!(world.distance_at(world.end()), Ok(None));
        assert_eq!(world.unvisited_count(), 6);

        world.reconstruct().expect("unvisited end is not an error");
        assert!(world.path().is_empty());
    }

    #[test]
    fn test_first_step_relaxes_and_picks_lowest_index() {
        let mut world = GridWorld::new(3, 3).expect("dimensions are positive");

        assert_eq!(world.step(), SearchStatus::Searching);
        assert_eq!(world.is_unvisited(Point::new(0, 0)), Ok(false));
        assert_eq!(world.distance_at(Point::new(1, 0)), Ok(Some(1)));
        assert_eq!(world.distance_at(Point::new(0, 1)), Ok(Some(1)));
        assert_eq!(world.distance_at(Point::new(1, 1)), Ok(None));
        assert_eq!(world.current(), Point::new(1, 0));
    }

    #[test]
    fn test_walls_are_never_relaxed() {
        let mut world = world_with_walls(3, 1, &[(1, 0)]);

        assert_eq!(world.step(), SearchStatus::Exhausted);
        assert_eq!(world.distance_at(Point::new(1, 0)), Ok(None));
        assert_eq!(world.is_unvisited(Point::new(1, 0)), Ok(true));
        assert_eq!(world.current(), Point::new(0, 0));
    }

    #[test]
    fn test_distances_only_improve_and_cells_settle_once() {
        let mut world = world_with_walls(
            6,
            5,
            &[(1, 0), (1, 1), (1, 2), (3, 4), (3, 3), (4, 1)],
        );
        let mut before = snapshot(&world);

        while world.status() == SearchStatus::Searching {
            let count = world.unvisited_count();
            let _ = world.step();
            let after = snapshot(&world);

            assert!(
                count - world.unvisited_count() <= 1,
                "a step settles at most one cell"
            );
            for (index, (old, new)) in before.iter().zip(&after).enumerate() {
                let (was_open, old_distance) = *old;
                let (is_open, new_distance) = *new;
                if was_open {
                    if let Some(old_distance) = old_distance {
                        assert!(
                            new_distance.is_some_and(|distance| distance <= old_distance),
                            "distance of cell {index} got worse"
                        );
                    }
                } else {
                    assert!(!is_open, "cell {index} returned to the unvisited set");
                    assert_eq!(old_distance, new_distance, "settled cell {index} changed");
                }
            }
            before = after;
        }

        assert_eq!(world.status(), SearchStatus::Reached);
    }

    #[test]
    fn test_search_terminates_within_cell_count() {
        let layouts: [&[(usize, usize)]; 3] = [
            &[],
            &[(0, 1), (1, 1), (2, 1), (3, 1)],
            &[(4, 3), (3, 4)],
        ];

        for walls in layouts {
            let mut world = world_with_walls(5, 5, walls);
            for _ in 0..25 {
                let _ = world.step();
            }
            assert_ne!(
                world.status(),
                SearchStatus::Searching,
                "search over {walls:?} should have stopped"
            );
        }
    }

    #[test]
    fn test_step_after_completion_is_idempotent() {
        let mut world = world_with_walls(4, 4, &[(1, 1), (2, 2)]);
        assert_eq!(run_to_completion(&mut world), SearchStatus::Reached);

        let current = world.current();
        let state = snapshot(&world);
        let count = world.unvisited_count();
        for _ in 0..3 {
            assert_eq!(world.step(), SearchStatus::Reached);
        }

        assert_eq!(world.current(), current);
        assert_eq!(snapshot(&world), state);
        assert_eq!(world.unvisited_count(), count);
    }

    #[test]
    fn test_step_after_exhaustion_is_idempotent() {
        let mut world = world_with_walls(3, 3, &[(2, 0), (1, 1), (0, 2)]);
        assert_eq!(run_to_completion(&mut world), SearchStatus::Exhausted);

        let current = world.current();
        let state = snapshot(&world);
        assert_eq!(world.step(), SearchStatus::Exhausted);
        assert_eq!(world.current(), current);
        assert_eq!(snapshot(&world), state);
    }

    #[test]
    fn test_path_descends_around_walls() {
        let mut world = world_with_walls(
            5,
            5,
            &[
                (1, 0),
                (1, 1),
                (1, 2),
                (1, 3),
                (3, 4),
                (3, 3),
                (3, 2),
                (3, 1),
            ],
        );
        assert_eq!(run_to_completion(&mut world), SearchStatus::Reached);
        world.reconstruct().expect("distances are consistent");

        let path = world.path();
        assert_eq!(path.first(), Some(&world.end()));
        assert_eq!(path.last(), Some(&world.start()));

        let end_distance = world
            .distance_at(world.end())
            .expect("end is in bounds")
            .expect("end was reached");
        assert_eq!(
            path.len(),
            usize::try_from(end_distance).expect("distance fits in usize") + 1
        );

        for pair in path.windows(2) {
            if let [from, to] = pair {
                assert_eq!(
                    from.x.abs_diff(to.x) + from.y.abs_diff(to.y),
                    1,
                    "{from} and {to} are not adjacent"
                );
            }
        }
        assert!(path
            .iter()
            .all(|&point| world.wall_at(point) == Ok(false)));
    }

    #[test]
    fn test_backtrace_prefers_first_neighbour_on_ties() {
        let mut world = GridWorld::new(2, 2).expect("dimensions are positive");
        assert_eq!(run_to_completion(&mut world), SearchStatus::Reached);
        world.reconstruct().expect("distances are consistent");

        assert_eq!(
            world.path(),
            [Point::new(1, 1), Point::new(0, 1), Point::new(0, 0)]
        );
    }

    #[test]
    fn test_reconstruct_keeps_current() {
        let mut world = GridWorld::new(3, 2).expect("dimensions are positive");
        assert_eq!(run_to_completion(&mut world), SearchStatus::Reached);
        let current = world.current();

        world.reconstruct().expect("distances are consistent");
        assert_eq!(world.current(), current);
    }

    #[test]
    fn test_start_equal_to_end() {
        let mut world = GridWorld::new(3, 3).expect("dimensions are positive");
        world.set_end(Point::new(0, 0)).expect("end is in bounds");
        world.reset();

        assert_eq!(world.step(), SearchStatus::Reached);
        world.reconstruct().expect("distances are consistent");
        assert_eq!(world.path(), [Point::new(0, 0)]);
    }

    #[test]
    fn test_start_on_wall_never_spreads() {
        let mut world = world_with_walls(3, 3, &[(0, 0)]);

        assert_eq!(world.step(), SearchStatus::Exhausted);
        assert_eq!(world.distance_at(Point::new(0, 0)), Ok(Some(0)));
        assert_eq!(world.distance_at(Point::new(1, 0)), Ok(None));
        assert_eq!(world.is_unvisited(world.end()), Ok(true));
    }

    #[test]
    fn test_end_on_wall_is_never_finalized() {
        let mut world = world_with_walls(3, 3, &[(2, 2)]);

        assert_eq!(run_to_completion(&mut world), SearchStatus::Exhausted);
        assert_eq!(world.is_unvisited(world.end()), Ok(true));
        assert_eq!(world.distance_at(world.end()), Ok(None));
        assert_eq!(world.unvisited_count(), 1);
    }

    #[test]
    fn test_wall_edits_leave_distances_alone() {
        let mut world = GridWorld::new(4, 4).expect("dimensions are positive");
        for _ in 0..5 {
            let _ = world.step();
        }
        let state = snapshot(&world);

        let _ = world
            .toggle_wall_at(Point::new(1, 0))
            .expect("wall is in bounds");
        world
            .set_wall_at(Point::new(2, 2), true)
            .expect("wall is in bounds");

        assert_eq!(snapshot(&world), state);
    }

    #[test]
    fn test_toggle_wall_flips_flag() {
        let mut world = GridWorld::new(2, 2).expect("dimensions are positive");
        let point = Point::new(1, 0);

        assert_eq!(world.toggle_wall_at(point), Ok(true));
        assert_eq!(world.wall_at(point), Ok(true));
        assert_eq!(world.toggle_wall_at(point), Ok(false));
        assert_eq!(world.wall_at(point), Ok(false));
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut world = GridWorld::new(3, 2).expect("dimensions are positive");
        let outside = Point::new(3, 1);
        let expected = WorldError::OutOfBounds {
            point: outside,
            width: 3,
            height: 2,
        };

        assert_eq!(world.wall_at(outside), Err(expected));
        assert_eq!(world.is_unvisited(outside), Err(expected));
        assert_eq!(world.distance_at(outside), Err(expected));
        assert_eq!(world.set_wall_at(outside, true), Err(expected));
        assert_eq!(world.toggle_wall_at(outside), Err(expected));
        assert_eq!(world.set_start(outside), Err(expected));
        assert!(world.set_end(Point::new(0, 2)).is_err());

        assert_eq!(world.start(), Point::new(0, 0));
        assert_eq!(world.end(), Point::new(2, 1));
    }

    #[test]
    fn test_stale_distances_stall_backtrace() {
        let mut world = GridWorld::new(5, 1).expect("dimensions are positive");
        assert_eq!(run_to_completion(&mut world), SearchStatus::Reached);
        world
            .set_wall_at(Point::new(2, 0), true)
            .expect("wall is in bounds");

        assert_eq!(
            world.reconstruct(),
            Err(WorldError::StalledBacktrace {
                at: Point::new(3, 0)
            })
        );
        assert!(world.path().is_empty());

        world.reset();
        assert_eq!(run_to_completion(&mut world), SearchStatus::Exhausted);
    }

    #[test]
    fn test_reset_clears_path() {
        let mut world = GridWorld::new(3, 1).expect("dimensions are positive");
        let _ = run_to_completion(&mut world);
        world.reconstruct().expect("distances are consistent");
        assert_eq!(world.path().len(), 3);

        world.reset();
        assert!(world.path().is_empty());
        assert_eq!(world.status(), SearchStatus::Searching);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(SearchStatus::Searching.label(), "searching");
        assert_eq!(SearchStatus::Reached.label(), "reached");
        assert_eq!(SearchStatus::Exhausted.label(), "exhausted");
    }
}

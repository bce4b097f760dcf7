use crate::Status;
use tracing::debug;

/// The number of cells in the ring the automaton runs on
pub const WORLD_SIZE: usize = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub(crate) status: Status,
    /// `left + self + right` for the current generation, always in `0..=6`
    pub(crate) local_sum: u8,
    /// Running total of every status this cell has held, generation 0 included
    pub(crate) count: u32,
}

impl Cell {
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }
    #[inline]
    pub fn local_sum(&self) -> u8 {
        self.local_sum
    }
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// A fixed-length ring of cells
///
/// Index 0 and the last index are neighbors. The local sums of all cells are
/// kept in step with the statuses: they are refreshed right after every
/// change of statuses, so they always describe the current generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    cells: Vec<Cell>,
}

impl World {
    /// Creates a [`WORLD_SIZE`] ring holding a single `seed` cell in the center
    pub fn new(seed: Status) -> Self {
        Self::with_size(WORLD_SIZE, seed)
    }

    /// Creates a ring of `size` cells, all zero except the one at `size / 2`
    ///
    /// # Panics
    /// If `size < 3`, since a cell and its two neighbors must be distinct.
    pub fn with_size(size: usize, seed: Status) -> Self {
        assert!(size >= 3, "a ring needs at least 3 cells, got {size}");
        debug_assert!(seed != Status::Zero, "seeding with zero gives an empty world");

        let mut cells = vec![Cell::default(); size];
        let center = &mut cells[size / 2];
        center.status = seed;
        center.count = seed.value().into();

        let mut world = Self { cells };
        world.recompute_local_sums();
        debug!(size, seed = seed.value(), "seeded world");
        world
    }

    /// Refreshes every cell's local sum from the current statuses
    ///
    /// The left neighbor of cell 0 is the last cell, and the right neighbor of
    /// the last cell is cell 0.
    pub(crate) fn recompute_local_sums(&mut self) {
        let cells = &mut self.cells;
        let last = cells.len() - 1;
        let first = cells[0].status.value();

        let mut prev = cells[last].status.value();
        for i in 0..last {
            let cur = cells[i].status.value();
            cells[i].local_sum = prev + cur + cells[i + 1].status.value();
            prev = cur;
        }
        cells[last].local_sum = prev + first + cells[last].status.value();
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The index of the seeded cell
    #[inline]
    pub fn center(&self) -> usize {
        self.cells.len() / 2
    }

    pub fn statuses(&self) -> impl ExactSizeIterator<Item = Status> + '_ {
        self.cells.iter().map(Cell::status)
    }

    pub fn local_sums(&self) -> impl ExactSizeIterator<Item = u8> + '_ {
        self.cells.iter().map(Cell::local_sum)
    }

    pub fn counts(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
        self.cells.iter().map(Cell::count)
    }

    /// The sum of every cell's status in the current generation
    pub fn status_sum(&self) -> u32 {
        self.statuses().map(|s| u32::from(s.value())).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_center_only() {
        let world = World::new(Status::Two);

        assert_eq!(world.len(), WORLD_SIZE);
        assert_eq!(world.center(), 32);
        for (i, cell) in world.cells().iter().enumerate() {
            let expected = if i == 32 { Status::Two } else { Status::Zero };
            assert_eq!(cell.status(), expected);
            assert_eq!(cell.count(), u32::from(expected.value()));
        }
        assert_eq!(world.status_sum(), 2);
    }

    #[test]
    fn initial_sums_only_touch_neighbors() {
        let world = World::new(Status::One);
        let sums: Vec<u8> = world.local_sums().collect();

        for (i, &sum) in sums.iter().enumerate() {
            let expected = if (31..=33).contains(&i) { 1 } else { 0 };
            assert_eq!(sum, expected, "local sum at {i}");
        }
        assert_eq!(sums[0], 0);
        assert_eq!(sums[64], 0);
    }

    #[test]
    fn sums_wrap_around_the_ring() {
        let mut world = World::with_size(5, Status::One);
        world.cells_mut()[0].status = Status::Two;
        world.cells_mut()[4].status = Status::One;
        world.recompute_local_sums();

        // statuses: [2, 0, 1, 0, 1]
        let sums: Vec<u8> = world.local_sums().collect();
        assert_eq!(sums, vec![3, 3, 1, 2, 3]);
    }

    #[test]
    fn last_cell_sees_first() {
        let mut world = World::with_size(6, Status::One);
        world.cells_mut()[0].status = Status::Two;
        world.cells_mut()[3].status = Status::Zero;
        world.cells_mut()[4].status = Status::One;
        world.recompute_local_sums();

        // statuses: [2, 0, 0, 0, 1, 0]
        let sums: Vec<u8> = world.local_sums().collect();
        assert_eq!(sums, vec![2, 2, 0, 1, 1, 3]);
    }

    #[test]
    fn smallest_ring() {
        let world = World::with_size(3, Status::Two);

        assert_eq!(world.local_sums().collect::<Vec<_>>(), vec![2, 2, 2]);
    }

    #[test]
    #[should_panic(expected = "at least 3 cells")]
    fn rejects_tiny_rings() {
        World::with_size(2, Status::One);
    }
}

// grid.rs - Double-buffered cell grid for Conway's Game of Life

use log::trace;

/// Cell state queries and edits the controller and presets drive.
pub trait LifeGrid {
    fn size(&self) -> usize;
    fn is_alive(&self, x: usize, y: usize) -> bool;
    fn set_alive(&mut self, x: usize, y: usize, value: bool);
    fn step_generation(&mut self);
    fn clear_all(&mut self);
}

/// A square N x N board of cells, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.size && y < self.size,
            "cell ({x}, {y}) is outside the {n}x{n} grid",
            n = self.size
        );
        y * self.size + x
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        let i = self.index(x, y);
        self.cells[i] = value;
    }

    pub fn fill(&mut self, value: bool) {
        self.cells.fill(value);
    }

    /// Live cells among the 8 neighbours. Edges do not wrap.
    pub fn live_neighbors(&self, x: usize, y: usize) -> usize {
        let mut count = 0;
        for dy in -1isize..=1 {
            for dx in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                    continue;
                };
                if nx < self.size && ny < self.size && self.get(nx, ny) {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

/// Birth on exactly 3, survival on 2 or 3.
pub fn next_state(alive: bool, live_neighbors: usize) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3)            => true, // Birth
        _                     => false, // Death or stays dead
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Buffer {
    A,
    B,
}

impl Buffer {
    fn other(self) -> Self {
        match self {
            Buffer::A => Buffer::B,
            Buffer::B => Buffer::A,
        }
    }
}

/// Two owned grids; `current` is read and edited, the other one receives
/// the next generation and becomes current once it is complete.
#[derive(Debug, Clone)]
pub struct GridState {
    buffer_a: Grid,
    buffer_b: Grid,
    current: Buffer,
    generation: u64,
}

impl GridState {
    pub fn new(size: usize) -> Self {
        Self {
            buffer_a: Grid::new(size),
            buffer_b: Grid::new(size),
            current: Buffer::A,
            generation: 0,
        }
    }

    pub fn current(&self) -> &Grid {
        match self.current {
            Buffer::A => &self.buffer_a,
            Buffer::B => &self.buffer_b,
        }
    }

    fn current_mut(&mut self) -> &mut Grid {
        match self.current {
            Buffer::A => &mut self.buffer_a,
            Buffer::B => &mut self.buffer_b,
        }
    }

    pub fn count_live_neighbors(&self, x: usize, y: usize) -> usize {
        self.current().live_neighbors(x, y)
    }

    /// Completed generations since construction or the last clear.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current().population()
    }

    /// Coordinates of every live cell in the current buffer, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let grid = self.current();
        let n = grid.size();
        (0..n)
            .flat_map(move |y| (0..n).map(move |x| (x, y)))
            .filter(move |&(x, y)| grid.get(x, y))
    }
}

impl LifeGrid for GridState {
    fn size(&self) -> usize {
        self.buffer_a.size()
    }

    fn is_alive(&self, x: usize, y: usize) -> bool {
        self.current().get(x, y)
    }

    fn set_alive(&mut self, x: usize, y: usize, value: bool) {
        self.current_mut().set(x, y, value);
    }

    fn step_generation(&mut self) {
        let (current, next) = match self.current {
            Buffer::A => (&self.buffer_a, &mut self.buffer_b),
            Buffer::B => (&self.buffer_b, &mut self.buffer_a),
        };

        let n = current.size();
        for y in 0..n {
            for x in 0..n {
                let count = current.live_neighbors(x, y);
                next.set(x, y, next_state(current.get(x, y), count));
            }
        }

        // The whole next generation is written before the roles change
        self.current = self.current.other();
        self.generation += 1;
        trace!("generation {} computed, population {}", self.generation, self.population());
    }

    fn clear_all(&mut self) {
        self.current_mut().fill(false);
        self.generation = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const N: usize = 16;

    fn state_with(cells: &[(usize, usize)]) -> GridState {
        let mut state = GridState::new(N);
        for &(x, y) in cells {
            state.set_alive(x, y, true);
        }
        state
    }

    fn live(state: &GridState) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = state.live_cells().collect();
        cells.sort();
        cells
    }

    #[test]
    fn new_grid_is_all_dead() {
        let state = GridState::new(N);
        assert_eq!(state.size(), N);
        assert_eq!(state.population(), 0);
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn rule_matches_birth_and_survival_counts() {
        for count in 0..=8 {
            assert_eq!(next_state(false, count), count == 3, "dead cell with {count}");
            assert_eq!(next_state(true, count), count == 2 || count == 3, "live cell with {count}");
        }
    }

    #[test]
    fn all_dead_grid_stays_dead() {
        let mut state = GridState::new(N);
        state.step_generation();
        assert_eq!(state.population(), 0);
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn block_is_a_still_life() {
        let block = [(4, 4), (5, 4), (4, 5), (5, 5)];
        let mut state = state_with(&block);
        state.step_generation();
        assert_eq!(live(&state), vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
        state.step_generation();
        assert_eq!(live(&state), vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut state = state_with(&[(6, 7), (7, 7), (8, 7)]);

        state.step_generation();
        assert_eq!(live(&state), vec![(7, 6), (7, 7), (7, 8)]);

        state.step_generation();
        assert_eq!(live(&state), vec![(6, 7), (7, 7), (8, 7)]);
    }

    #[test]
    fn corner_cells_do_not_wrap() {
        // A blinker on the top edge would wrap onto the bottom row on a torus
        let mut state = state_with(&[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(state.count_live_neighbors(N - 1, N - 1), 0);
        assert_eq!(state.count_live_neighbors(1, N - 1), 0);

        state.step_generation();
        assert_eq!(live(&state), vec![(1, 0), (1, 1)]);
    }

    #[test]
    fn neighbor_count_excludes_the_cell_itself() {
        let state = state_with(&[(3, 3)]);
        assert_eq!(state.count_live_neighbors(3, 3), 0);
        assert_eq!(state.count_live_neighbors(2, 2), 1);
        assert_eq!(state.count_live_neighbors(5, 5), 0);
    }

    #[test]
    fn fully_surrounded_cell_has_eight_neighbors() {
        let mut state = GridState::new(N);
        for y in 0..3 {
            for x in 0..3 {
                state.set_alive(x, y, true);
            }
        }
        assert_eq!(state.count_live_neighbors(1, 1), 8);
        assert_eq!(state.count_live_neighbors(0, 0), 3);
    }

    #[test]
    fn step_swaps_buffers_without_copying_back() {
        let mut state = state_with(&[(6, 7), (7, 7), (8, 7)]);
        let before = state.current().clone();
        state.step_generation();
        state.step_generation();
        assert_eq!(state.current(), &before);
        assert_eq!(state.current, Buffer::A);
    }

    #[test]
    fn clear_resets_active_buffer_without_swapping() {
        let mut state = state_with(&[(1, 1), (2, 2)]);
        state.step_generation();
        let active = state.current;
        state.clear_all();

        assert_eq!(state.current, active);
        assert_eq!(state.generation(), 0);
        for y in 0..N {
            for x in 0..N {
                assert!(!state.is_alive(x, y));
            }
        }
    }

    #[test]
    fn stale_scratch_buffer_is_overwritten_by_step() {
        let mut state = state_with(&[(0, 0), (9, 9), (10, 9), (11, 9)]);
        state.step_generation(); // scratch now holds the old configuration
        state.clear_all();
        state.step_generation();
        assert_eq!(state.population(), 0);
    }

    #[test]
    #[should_panic(expected = "outside the 16x16 grid")]
    fn out_of_range_access_fails_fast() {
        let state = GridState::new(N);
        state.is_alive(N, 0);
    }

    proptest! {
        #[test]
        fn neighbor_count_matches_bounded_reference(
            cells in proptest::collection::vec((0..N, 0..N), 0..80),
            x in 0..N,
            y in 0..N,
        ) {
            let state = state_with(&cells);
            let mut expected = 0;
            for ny in y.saturating_sub(1)..=(y + 1).min(N - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(N - 1) {
                    if (nx, ny) != (x, y) && state.is_alive(nx, ny) {
                        expected += 1;
                    }
                }
            }
            let count = state.count_live_neighbors(x, y);
            prop_assert!(count <= 8);
            prop_assert_eq!(count, expected);
        }

        #[test]
        fn set_then_get_returns_value(
            cells in proptest::collection::vec((0..N, 0..N), 0..40),
            steps in 0usize..3,
            x in 0..N,
            y in 0..N,
            value in any::<bool>(),
        ) {
            let mut state = state_with(&cells);
            for _ in 0..steps {
                state.step_generation();
            }
            state.set_alive(x, y, value);
            prop_assert_eq!(state.is_alive(x, y), value);
        }
    }
}

// patterns.rs - Preset starting patterns and random fill

use crate::grid::LifeGrid;

/// A named preset drawn as text: `#` is a live cell, anything else is dead.
pub struct Pattern {
    pub name: &'static str,
    pub art: &'static str,
}

impl Pattern {
    /// Live cell offsets `(x, y)` from the pattern's top-left corner.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows().enumerate().flat_map(|(y, row)| {
            row.chars()
                .enumerate()
                .filter_map(move |(x, c)| (c == '#').then_some((x, y)))
        })
    }

    pub fn width(&self) -> usize {
        self.rows().map(|row| row.chars().count()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows().count()
    }

    fn rows(&self) -> impl Iterator<Item = &'static str> {
        self.art.lines().map(str::trim).filter(|row| !row.is_empty())
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        art: "
            .#.
            ..#
            ###
        ",
    },
    Pattern {
        name: "Blinker",
        art: "
            ###
        ",
    },
    Pattern {
        name: "Toad",
        art: "
            .###
            ###.
        ",
    },
    Pattern {
        name: "Beacon",
        art: "
            ##..
            ##..
            ..##
            ..##
        ",
    },
    Pattern {
        name: "Pulsar",
        art: "
            ..###...###..
            .............
            #....#.#....#
            #....#.#....#
            #....#.#....#
            ..###...###..
            .............
            ..###...###..
            #....#.#....#
            #....#.#....#
            #....#.#....#
            .............
            ..###...###..
        ",
    },
    Pattern {
        name: "R-pentomino",
        art: "
            .##
            ##.
            .#.
        ",
    },
    Pattern {
        name: "Gosper Glider Gun",
        art: "
            ........................#...........
            ......................#.#...........
            ............##......##............##
            ...........#...#....##............##
            ##........#.....#...##..............
            ##........#...#.##....#.#...........
            ..........#.....#.......#...........
            ...........#...#....................
            ............##......................
        ",
    },
];

/// Clears the grid and draws `pattern` centred on it. Cells that do not fit are dropped.
pub fn stamp<G: LifeGrid>(grid: &mut G, pattern: &Pattern) {
    grid.clear_all();

    let n = grid.size();
    let left = n.saturating_sub(pattern.width()) / 2;
    let top = n.saturating_sub(pattern.height()) / 2;
    for (x, y) in pattern.cells() {
        let (x, y) = (left + x, top + y);
        if x < n && y < n {
            grid.set_alive(x, y, true);
        }
    }
}

/// Clears the grid and brings roughly a third of the cells to life, deterministically per seed.
pub fn randomize<G: LifeGrid>(grid: &mut G, seed: u64) {
    grid.clear_all();

    let mut rng = fastrand::Rng::with_seed(seed);
    let n = grid.size();
    for y in 0..n {
        for x in 0..n {
            if rng.u32(0..3) == 0 {
                grid.set_alive(x, y, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridState;

    fn find(name: &str) -> &'static Pattern {
        PATTERNS.iter().find(|p| p.name == name).unwrap()
    }

    fn live(state: &GridState) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = state.live_cells().collect();
        cells.sort();
        cells
    }

    #[test]
    fn art_parses_into_offsets() {
        let glider = find("Glider");
        assert_eq!(glider.width(), 3);
        assert_eq!(glider.height(), 3);
        assert_eq!(glider.cells().collect::<Vec<_>>(), vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn preset_sizes() {
        assert_eq!(find("Pulsar").cells().count(), 48);
        assert_eq!(find("Gosper Glider Gun").cells().count(), 36);
        assert_eq!(find("Gosper Glider Gun").width(), 36);
    }

    #[test]
    fn stamp_centres_the_pattern() {
        let mut state = GridState::new(10);
        stamp(&mut state, find("Blinker"));
        assert_eq!(live(&state), vec![(3, 4), (4, 4), (5, 4)]);
    }

    #[test]
    fn stamp_replaces_previous_cells() {
        let mut state = GridState::new(10);
        state.set_alive(0, 0, true);
        stamp(&mut state, find("Blinker"));
        assert!(!state.is_alive(0, 0));
        assert_eq!(state.population(), 3);
    }

    #[test]
    fn stamp_drops_cells_that_do_not_fit() {
        let mut state = GridState::new(8);
        stamp(&mut state, find("Gosper Glider Gun"));
        assert!(state.population() < 36);
        assert!(state.population() > 0);
    }

    #[test]
    fn stamped_pulsar_has_period_three() {
        let mut state = GridState::new(32);
        stamp(&mut state, find("Pulsar"));
        let start = live(&state);
        state.step_generation();
        assert_ne!(live(&state), start);
        state.step_generation();
        state.step_generation();
        assert_eq!(live(&state), start);
    }

    #[test]
    fn randomize_is_deterministic_per_seed() {
        let mut a = GridState::new(32);
        let mut b = GridState::new(32);
        randomize(&mut a, 7);
        randomize(&mut b, 7);
        assert_eq!(live(&a), live(&b));

        let population = a.population();
        assert!(population > 32 * 32 / 5 && population < 32 * 32 / 2, "population {population}");
    }
}

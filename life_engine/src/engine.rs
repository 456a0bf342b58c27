// engine.rs - Pure generation functions over bounded grids
//
// None of these functions mutate their input: each returns a new `Grid`.
// The generation counter lives with the caller (see `Simulation`).

use rand::Rng;

use crate::{error::Result, grid::Grid, patterns};

/// Relative positions of the 8 neighbours of a cell.
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

pub fn empty_grid(rows: usize, cols: usize) -> Grid {
    Grid::new(rows, cols)
}

/// Each cell is independently alive with probability `alive_probability`.
/// Values at or below 0 give an empty grid, values at or above 1 a full one.
pub fn random_grid<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    alive_probability: f64,
    rng: &mut R,
) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            if rng.random::<f64>() < alive_probability {
                grid.set(row, col, true);
            }
        }
    }
    grid
}

/// Returns a copy of `grid` with the cell at (`row`, `col`) flipped.
pub fn toggle_cell(grid: &Grid, row: usize, col: usize) -> Result<Grid> {
    grid.check_index(row, col)?;
    let mut next = grid.clone();
    next.set(row, col, !grid[row][col]);
    Ok(next)
}

/// Stamps the named pattern onto an empty `rows` x `cols` grid.
///
/// Cells falling outside the grid are dropped, and an unknown name yields an
/// empty grid rather than an error.
pub fn load_pattern(name: &str, rows: usize, cols: usize) -> Grid {
    match patterns::find(name) {
        Some(pattern) => stamp(pattern.cells, rows, cols),
        None => empty_grid(rows, cols),
    }
}

/// Sets every in-bounds coordinate of `cells` alive on an empty grid.
pub fn stamp(cells: &[(usize, usize)], rows: usize, cols: usize) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for &(row, col) in cells {
        if row < rows && col < cols {
            grid.set(row, col, true);
        }
    }
    grid
}

/// Advances `grid` by one generation.
///
/// Every cell of the result is computed from `grid` alone. Positions outside
/// the grid are not neighbours, so border cells see at most 5 (edges) or
/// 3 (corners) of them.
pub fn step(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.rows(), grid.cols());
    for row in 0..grid.rows() {
        for (col, alive) in next_row(grid, row).into_iter().enumerate() {
            if alive {
                next.set(row, col, true);
            }
        }
    }
    next
}

fn next_row(grid: &Grid, row: usize) -> Vec<bool> {
    (0..grid.cols())
        .map(|col| {
            let count = live_neighbours(grid, row, col);
            match (grid[row][col], count) {
                (true, 2) | (true, 3) => true, // Survival
                (false, 3)            => true, // Birth
                _                     => false, // Death or stays dead
            }
        })
        .collect()
}

fn live_neighbours(grid: &Grid, row: usize, col: usize) -> usize {
    NEIGHBOURS
        .iter()
        .filter_map(|&(dr, dc)| Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?)))
        .filter(|&(r, c)| grid.get(r, c) == Some(true))
        .count()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::error::LifeError;

    fn grid(s: &str) -> Grid {
        Grid::from_str(s).unwrap()
    }

    #[test]
    fn step_keeps_dimensions() {
        let mut rng = StdRng::seed_from_u64(7);
        for (rows, cols) in [(1, 1), (3, 7), (25, 40)] {
            let g = random_grid(rows, cols, 0.5, &mut rng);
            let next = step(&g);
            assert_eq!((next.rows(), next.cols()), (rows, cols));
        }
    }

    #[test]
    fn empty_grid_stays_empty() {
        let g = empty_grid(25, 40);
        assert_eq!(step(&g), g);
    }

    #[test]
    fn blinker_has_period_two() {
        let horizontal = load_pattern("blinker", 3, 3);
        let vertical = grid(
            "
            .o.
            .o.
            .o.
            ",
        );
        assert_eq!(horizontal.alive_cells().collect::<Vec<_>>(), vec![(1, 0), (1, 1), (1, 2)]);
        assert_eq!(step(&horizontal), vertical);
        assert_eq!(step(&vertical), horizontal);
        assert_eq!(step(&step(&step(&step(&horizontal)))), horizontal);
    }

    #[test]
    fn glider_moves_down_and_right() {
        let start = load_pattern("glider", 8, 8);
        let mut g = start.clone();
        for _ in 0..4 {
            g = step(&g);
        }
        let expected: Vec<_> = start.alive_cells().map(|(r, c)| (r + 1, c + 1)).collect();
        assert_eq!(g.alive_cells().collect::<Vec<_>>(), expected);
        assert_eq!(g.population(), 5);
    }

    #[test]
    fn lonely_and_crowded_cells_die() {
        let single = grid(
            "
            ...
            .o.
            ...
            ",
        );
        assert!(step(&single).is_empty());

        let plus = grid(
            "
            .o.
            ooo
            .o.
            ",
        );
        assert_eq!(step(&plus).get(1, 1), Some(false));
    }

    #[test]
    fn birth_needs_exactly_three() {
        let two = grid(
            "
            o.o
            ...
            ...
            ",
        );
        let three = grid(
            "
            o.o
            ...
            o..
            ",
        );
        let four = grid(
            "
            o.o
            ...
            o.o
            ",
        );
        assert_eq!(step(&two).get(1, 1), Some(false));
        assert_eq!(step(&three).get(1, 1), Some(true));
        assert_eq!(step(&four).get(1, 1), Some(false));
    }

    #[test]
    fn border_does_not_wrap() {
        // A vertical blinker on the left edge loses the half of its
        // horizontal phase that would sit left of column 0.
        let edge = grid(
            "
            .....
            o....
            o....
            o....
            .....
            ",
        );
        let expected = grid(
            "
            .....
            .....
            oo...
            .....
            .....
            ",
        );
        assert_eq!(step(&edge), expected);
        assert!(step(&expected).is_empty());
    }

    #[test]
    fn corner_block_is_stable() {
        let block = grid(
            "
            oo.
            oo.
            ...
            ",
        );
        assert_eq!(step(&block), block);
    }

    #[test]
    fn step_leaves_input_untouched() {
        let g = load_pattern("gliderGun", 25, 40);
        let before = g.clone();
        let next = step(&g);
        assert_eq!(g, before);
        assert_ne!(next, g);
    }

    #[test]
    fn load_pattern_clips_out_of_range_cells() {
        // The gun's right-hand block sits in columns 35 and 36.
        let clipped = load_pattern("gliderGun", 10, 30);
        assert_eq!(clipped.population(), 32);
        for &(row, col) in patterns::find("gliderGun").unwrap().cells {
            assert_eq!(clipped.get(row, col), (col < 30).then_some(true));
        }
        assert_eq!(load_pattern("gliderGun", 25, 40).population(), 36);
    }

    #[test]
    fn unknown_pattern_is_blank() {
        let g = load_pattern("spaceship", 25, 40);
        assert_eq!((g.rows(), g.cols()), (25, 40));
        assert!(g.is_empty());
    }

    #[test]
    fn stamp_drops_rows_and_columns_past_the_edge() {
        let g = stamp(&[(0, 0), (5, 1), (1, 9), (3, 3)], 3, 3);
        assert_eq!(g.alive_cells().collect::<Vec<_>>(), vec![(0, 0)]);

        // Rows 5..=9 of the gun fall off a five-row grid.
        let gun = patterns::find("gliderGun").unwrap().cells;
        let short = load_pattern("gliderGun", 5, 40);
        assert_eq!(short.population(), gun.iter().filter(|&&(row, _)| row < 5).count());
        assert!(short.alive_cells().all(|(row, _)| row < 5));
    }

    #[test]
    fn duplicate_cells_are_harmless() {
        let g = stamp(&[(0, 0), (0, 0), (1, 1)], 2, 2);
        assert_eq!(g.population(), 2);
    }

    #[test]
    fn toggle_flips_one_cell() {
        let g = empty_grid(4, 4);
        let on = toggle_cell(&g, 2, 3).unwrap();
        assert_eq!(on.alive_cells().collect::<Vec<_>>(), vec![(2, 3)]);
        assert!(g.is_empty());
        assert_eq!(toggle_cell(&on, 2, 3).unwrap(), g);
    }

    #[test]
    fn toggle_out_of_bounds_is_an_error() {
        let g = empty_grid(4, 4);
        assert!(matches!(toggle_cell(&g, 4, 0), Err(LifeError::InvalidIndex { .. })));
        assert!(matches!(toggle_cell(&g, 0, 4), Err(LifeError::InvalidIndex { .. })));
    }

    #[test]
    fn random_grid_is_reproducible_and_sparse() {
        let a = random_grid(25, 40, 0.3, &mut StdRng::seed_from_u64(42));
        let b = random_grid(25, 40, 0.3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        // 1000 cells at 30%: the count is within 200..400 with overwhelming odds.
        assert!((200..400).contains(&a.population()), "population {}", a.population());
    }

    #[test]
    fn random_grid_extreme_probabilities() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_grid(5, 5, 0.0, &mut rng).is_empty());
        assert_eq!(random_grid(5, 5, 1.0, &mut rng).population(), 25);
    }
}

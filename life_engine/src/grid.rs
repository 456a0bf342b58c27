// grid.rs - Bounded grid type for Conway's Game of Life

use std::{
    fmt::{self, Display, Write},
    ops::Index,
    str::FromStr,
};

use crate::error::{LifeError, Result};

const ALIVE: char = 'o';
const DEAD: char = '.';

/// A fixed-size field of cells, stored row-major.
///
/// The public API never mutates a grid in place; every engine operation
/// returns a fresh `Grid`. `grid[row][col]` reads a single cell and panics
/// outside the bounds, `get` is the non-panicking variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// A grid with every cell dead.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.contains(row, col)
            .then(|| self.cells[row * self.cols + col])
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[row * self.cols + col] = alive;
    }

    pub(crate) fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(LifeError::InvalidIndex {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl Index<usize> for Grid {
    type Output = [bool];

    fn index(&self, row: usize) -> &[bool] {
        assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                f.write_char('\n')?;
            }
            for &alive in &self[row] {
                f.write_char(if alive { ALIVE } else { DEAD })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = LifeError;

    /// Parses one line per row, `o` for alive and `.` for dead. Surrounding
    /// whitespace and blank lines are ignored so grids can be written as
    /// indented string literals.
    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(LifeError::ParseGrid("no rows".to_string()));
        };
        let cols = first.chars().count();
        let mut grid = Grid::new(lines.len(), cols);
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(LifeError::ParseGrid(format!(
                    "row {row} has {} cells, expected {cols}",
                    line.chars().count()
                )));
            }
            for (col, c) in line.chars().enumerate() {
                match c {
                    ALIVE => grid.set(row, col, true),
                    DEAD => (),
                    _ => return Err(LifeError::ParseGrid(format!("unexpected character {c:?}"))),
                }
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(25, 40);
        assert_eq!((grid.rows(), grid.cols()), (25, 40));
        assert_eq!(grid.population(), 0);
        assert!(grid.is_empty());
        assert!((0..25).all(|row| grid[row].len() == 40));
    }

    #[test]
    fn indexing_and_get_agree() {
        let grid = Grid::from_str(
            "
            .o.
            ..o
            ",
        )
        .unwrap();
        assert!(grid[0][1]);
        assert!(!grid[1][1]);
        assert_eq!(grid.get(1, 2), Some(true));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.alive_cells().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    #[should_panic]
    fn indexing_past_last_row_panics() {
        let grid = Grid::new(2, 2);
        let _ = grid[2][0];
    }

    #[test]
    fn display_round_trips_through_parse() {
        let text = "o..\n.o.\n..o";
        let grid = Grid::from_str(text).unwrap();
        assert_eq!(grid.to_string(), text);
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn parse_rejects_ragged_rows_and_unknown_characters() {
        assert!(matches!(Grid::from_str("oo\no"), Err(LifeError::ParseGrid(_))));
        assert!(matches!(Grid::from_str("o#"), Err(LifeError::ParseGrid(_))));
        assert!(matches!(Grid::from_str("  \n"), Err(LifeError::ParseGrid(_))));
    }

    #[test]
    fn check_index_reports_bounds() {
        let grid = Grid::new(3, 4);
        assert!(grid.check_index(2, 3).is_ok());
        assert_eq!(
            grid.check_index(3, 0),
            Err(LifeError::InvalidIndex {
                row: 3,
                col: 0,
                rows: 3,
                cols: 4
            })
        );
    }
}

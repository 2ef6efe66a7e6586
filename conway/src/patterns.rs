// patterns.rs - Named starting patterns

use log::warn;

use crate::grid::{Cell, Grid};

/// A preset given as `(row, col)` offsets from its top-left corner.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Columns spanned by the pattern.
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }

    /// Rows spanned by the pattern.
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Looks a preset up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|p| p.name)
}

/// Clears `grid` and stamps `pattern` centered in it.
///
/// Cells that land outside the grid are dropped. Returns how many cells
/// were placed.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) -> usize {
    grid.clear();

    let left = (grid.width() as isize - pattern.width() as isize) / 2;
    let top = (grid.height() as isize - pattern.height() as isize) / 2;

    let mut placed = 0;
    for &(row, col) in pattern.cells {
        let x = left + col as isize;
        let y = top + row as isize;
        if x < 0 || y < 0 || !grid.contains(x as usize, y as usize) {
            continue;
        }
        grid.set(x as usize, y as usize, Cell::Alive);
        placed += 1;
    }

    if placed < pattern.cells.len() {
        warn!(
            "pattern {} clipped to {}x{} grid: {} of {} cells placed",
            pattern.name,
            grid.width(),
            grid.height(),
            placed,
            pattern.cells.len()
        );
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_ignores_case() {
        assert_eq!(find("glider").map(|p| p.name), Some("Glider"));
        assert_eq!(find("GOSPER GLIDER GUN").map(|p| p.name), Some("Gosper Glider Gun"));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn extents() {
        let gun = find("Gosper Glider Gun").unwrap();
        assert_eq!((gun.width(), gun.height()), (36, 9));
        let pulsar = find("Pulsar").unwrap();
        assert_eq!((pulsar.width(), pulsar.height()), (13, 13));
        assert_eq!(pulsar.cells.len(), 48);
    }

    #[test]
    fn presets_have_no_duplicate_cells() {
        for pattern in PATTERNS {
            let mut cells = pattern.cells.to_vec();
            cells.sort_unstable();
            cells.dedup();
            assert_eq!(cells.len(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn blinker_is_centered() {
        let mut grid = Grid::new(5, 5).unwrap();
        let placed = apply_pattern(&mut grid, find("Blinker").unwrap());
        assert_eq!(placed, 3);
        assert!(grid.is_alive(1, 2) && grid.is_alive(2, 2) && grid.is_alive(3, 2));
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn applying_clears_previous_cells() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set(0, 0, Cell::Alive);
        apply_pattern(&mut grid, find("Glider").unwrap());
        assert!(!grid.is_alive(0, 0));
        assert_eq!(grid.population(), 5);
    }

    #[test]
    fn oversized_pattern_is_clipped() {
        let mut grid = Grid::new(10, 10).unwrap();
        let gun = find("Gosper Glider Gun").unwrap();
        let placed = apply_pattern(&mut grid, gun);
        assert!(placed < gun.cells.len());
        assert_eq!(grid.population(), placed);
    }
}

// grid.rs - Generation buffer for Conway's Game of Life

use std::fmt;

use rand::Rng;

use crate::error::GridError;

/// State of a single cell. One byte per cell, `Dead` is the zero value.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Cell {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// A `width x height` grid of cells stored row-major in one allocation.
///
/// Every access goes through [`Grid::offset`], so neighbor counting,
/// transitions and rendering all agree on `(x, y)` meaning (column, row).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocates an all-dead grid.
    ///
    /// Allocation goes through `try_reserve_exact` so that a grid too large
    /// for memory is reported instead of aborting the process.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroSized { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|source| GridError::Allocation { cells: len, source })?;
        cells.resize(len, Cell::Dead);

        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells, `width * height`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn same_dimensions(&self, other: &Grid) -> bool {
        self.width == other.width && self.height == other.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Row-major offset of `(x, y)`, or `None` when outside the grid.
    pub fn offset(&self, x: usize, y: usize) -> Option<usize> {
        self.contains(x, y).then(|| y * self.width + x)
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    /// Panics if `(x, y)` is outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        match self.offset(x, y) {
            Some(i) => self.cells[i],
            None => panic!("cell ({x}, {y}) outside {}x{} grid", self.width, self.height),
        }
    }

    /// Panics if `(x, y)` is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        match self.offset(x, y) {
            Some(i) => self.cells[i] = cell,
            None => panic!("cell ({x}, {y}) outside {}x{} grid", self.width, self.height),
        }
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some_and(Cell::is_alive)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Rows from top to bottom, each `width` cells long.
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.width)
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Independent Bernoulli(`density`) draw for every cell.
    /// `density` must lie in `[0, 1]`.
    pub fn fill_random<R: Rng>(&mut self, rng: &mut R, density: f64) {
        for cell in &mut self.cells {
            *cell = Cell::from(rng.gen_bool(density));
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        for row in self.rows() {
            let line: String = row
                .iter()
                .map(|c| if c.is_alive() { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

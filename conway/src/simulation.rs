// simulation.rs - Double-buffered driver state

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use log::debug;
use rand::Rng;

use crate::error::GridResult;
use crate::grid::{Cell, Grid};
use crate::patterns::{self, Pattern};
use crate::rules;

/// Number of past generations remembered by [`CycleDetector`].
pub const HISTORY_LEN: usize = 10;

/// Which buffer holds the latest generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A is current, B receives the next generation.
    A,
    /// B is current, A receives the next generation.
    B,
}

impl Role {
    pub fn flipped(self) -> Role {
        match self {
            Role::A => Role::B,
            Role::B => Role::A,
        }
    }
}

/// Remembers hashes of the last few generations to spot still lifes and
/// short oscillators.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    history: [u64; HISTORY_LEN],
    count: usize,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `grid`, returning true if it matches one of the remembered
    /// generations.
    pub fn record(&mut self, grid: &Grid) -> bool {
        let hash = hash_grid(grid);
        let filled = self.count.min(HISTORY_LEN);
        if self.history[..filled].contains(&hash) {
            return true;
        }
        self.history[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        self.history = [0; HISTORY_LEN];
        self.count = 0;
    }
}

fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

/// Two equally sized generation buffers that swap roles every step.
pub struct Simulation {
    a: Grid,
    b: Grid,
    role: Role,
    generation: u64,
    history: CycleDetector,
    cycling: bool,
}

impl Simulation {
    /// Allocates both buffers, all dead, with A as the current one.
    pub fn new(width: usize, height: usize) -> GridResult<Self> {
        let a = Grid::new(width, height)?;
        let b = Grid::new(width, height)?;
        Ok(Self {
            a,
            b,
            role: Role::A,
            generation: 0,
            history: CycleDetector::new(),
            cycling: false,
        })
    }

    pub fn width(&self) -> usize {
        self.a.width()
    }

    pub fn height(&self) -> usize {
        self.a.height()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Generations computed since the last seeding.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once the latest generation repeats one of the last
    /// [`HISTORY_LEN`] generations.
    pub fn is_cycling(&self) -> bool {
        self.cycling
    }

    /// The latest generation.
    pub fn current(&self) -> &Grid {
        match self.role {
            Role::A => &self.a,
            Role::B => &self.b,
        }
    }

    fn current_mut(&mut self) -> &mut Grid {
        match self.role {
            Role::A => &mut self.a,
            Role::B => &mut self.b,
        }
    }

    /// Computes the next generation into the idle buffer, flips roles and
    /// returns the new generation.
    pub fn step(&mut self) -> &Grid {
        match self.role {
            Role::A => rules::step(&self.a, &mut self.b),
            Role::B => rules::step(&self.b, &mut self.a),
        }
        self.role = self.role.flipped();
        self.generation += 1;

        let latest = match self.role {
            Role::A => &self.a,
            Role::B => &self.b,
        };
        let cycling = self.history.record(latest);
        if cycling && !self.cycling {
            debug!(
                "generation {} repeats a recent generation (population {})",
                self.generation,
                self.current().population()
            );
        }
        self.cycling = cycling;

        self.current()
    }

    /// Fills the current buffer with Bernoulli(`density`) cells.
    pub fn seed_random<R: Rng>(&mut self, rng: &mut R, density: f64) {
        self.current_mut().fill_random(rng, density);
        debug!(
            "seeded {}x{} grid at density {density}: {} alive",
            self.width(),
            self.height(),
            self.current().population()
        );
        self.restart();
    }

    /// Replaces the current buffer with `pattern` centered in the grid.
    pub fn seed_pattern(&mut self, pattern: &Pattern) {
        let placed = patterns::apply_pattern(self.current_mut(), pattern);
        debug!("seeded pattern {} ({placed} cells)", pattern.name);
        self.restart();
    }

    pub fn clear(&mut self) {
        self.current_mut().clear();
        self.restart();
    }

    /// Flips one cell of the current generation. Coordinates outside the
    /// grid are ignored.
    pub fn toggle(&mut self, x: usize, y: usize) {
        let grid = self.current_mut();
        if let Some(cell) = grid.cell(x, y) {
            grid.set(x, y, cell.toggled());
            self.forget_history();
        }
    }

    /// Sets one cell of the current generation. Panics outside the grid.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.current_mut().set(x, y, cell);
        self.forget_history();
    }

    /// Restarts cycle tracking from the current grid.
    fn forget_history(&mut self) {
        self.cycling = false;
        self.history.reset();
        let current = match self.role {
            Role::A => &self.a,
            Role::B => &self.b,
        };
        self.history.record(current);
    }

    fn restart(&mut self) {
        self.generation = 0;
        self.forget_history();
    }
}

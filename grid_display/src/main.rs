// main.rs - Windowed Game of Life viewer over the shared engine
//
// Usage: grid_display [<width> <height>]

use eframe::egui;
use egui::Color32;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use conway::{GridResult, Simulation, patterns};

mod ui;

/// Grid size when none is given on the command line.
pub const DEFAULT_SIZE: usize = 50;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let (width, height) = match parse_size(std::env::args().skip(1)) {
        Some(size) => size,
        None => {
            eprintln!("USAGE: grid_display [<width> <height>]");
            return ExitCode::FAILURE;
        }
    };

    let viewer = match Viewer::new(width, height) {
        Ok(viewer) => viewer,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!("opening {width}x{height} viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    match eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(viewer)),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("viewer failed: {err}");
            ExitCode::FAILURE
        }
    }
}

/// No arguments gives the default square grid; otherwise exactly two
/// positive integers.
fn parse_size<I: Iterator<Item = String>>(args: I) -> Option<(usize, usize)> {
    let args: Vec<String> = args.collect();
    match args.as_slice() {
        [] => Some((DEFAULT_SIZE, DEFAULT_SIZE)),
        [w, h] => {
            let width = w.parse().ok().filter(|&n: &usize| n > 0)?;
            let height = h.parse().ok().filter(|&n: &usize| n > 0)?;
            Some((width, height))
        }
        _ => None,
    }
}

/// Window state around a [`Simulation`].
pub struct Viewer {
    pub sim: Simulation,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    rng: StdRng,
}

impl Viewer {
    pub fn new(width: usize, height: usize) -> GridResult<Self> {
        let mut rng = StdRng::from_entropy();
        let mut sim = Simulation::new(width, height)?;
        sim.seed_random(&mut rng, 0.5);

        Ok(Self {
            sim,
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(80),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            rng,
        })
    }

    /// Advances one generation; pauses once the grid starts repeating.
    pub fn update_generation(&mut self) {
        self.sim.step();
        if self.sim.is_cycling() {
            info!("paused: generation {} repeats a recent one", self.sim.generation());
            self.is_running = false;
        }
    }

    pub fn clear_grid(&mut self) {
        self.sim.clear();
    }

    pub fn random_pattern(&mut self) {
        self.sim.seed_random(&mut self.rng, 0.5);
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            self.sim.seed_pattern(pattern);
        }
    }

    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        self.sim.toggle(x, y);
    }
}

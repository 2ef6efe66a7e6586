// config.rs - Fixed runtime settings for the terminal driver

use std::time::Duration;

use crossterm::style::Color;

/// Delay between generations.
pub const TICK: Duration = Duration::from_millis(80);

/// Probability that a cell starts alive.
pub const DEFAULT_DENSITY: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct Config {
    pub tick: Duration,
    pub density: f64,
    /// Key that ends the run; matched case-insensitively.
    pub quit_key: char,
    /// Screen column/row of cell (0, 0).
    pub origin: (u16, u16),
    pub live_glyph: char,
    pub dead_glyph: char,
    pub live_color: Color,
    pub background: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick: TICK,
            density: DEFAULT_DENSITY,
            quit_key: 'q',
            origin: (1, 1),
            live_glyph: '1',
            dead_glyph: ' ',
            live_color: Color::Green,
            background: Color::Black,
        }
    }
}

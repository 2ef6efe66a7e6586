// display.rs - Terminal session and grid renderer

use std::io::{self, Stdout, Write};

use conway::Grid;
use crossterm::{
    cursor, execute, queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, error, warn};

use crate::config::Config;

/// Visible `(columns, rows)` of a `width x height` grid drawn at `origin`
/// on a terminal of `bounds` columns and rows.
pub fn visible(bounds: (u16, u16), origin: (u16, u16), width: usize, height: usize) -> (usize, usize) {
    let cols = bounds.0.saturating_sub(origin.0) as usize;
    let rows = bounds.1.saturating_sub(origin.1) as usize;
    (width.min(cols), height.min(rows))
}

/// Logs a warning if a `width x height` grid will be clipped. Returns false
/// in that case.
///
/// Call before the display session opens, while log output still lands on
/// the normal screen.
pub fn check_fit(bounds: (u16, u16), origin: (u16, u16), width: usize, height: usize) -> bool {
    let (cols, rows) = visible(bounds, origin, width, height);
    if (cols, rows) == (width, height) {
        return true;
    }
    warn!(
        "{width}x{height} grid does not fit the {}x{} terminal; showing {cols}x{rows}",
        bounds.0, bounds.1
    );
    false
}

/// Draws generations onto any writer. Cells past `bounds` are clipped.
pub struct Renderer<W: Write> {
    out: W,
    config: Config,
    /// Terminal size in columns and rows.
    bounds: (u16, u16),
    /// Wipe the whole screen before the next frame.
    stale: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, config: Config, bounds: (u16, u16)) -> Self {
        Self { out, config, bounds, stale: false }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn bounds(&self) -> (u16, u16) {
        self.bounds
    }

    /// Adopts a new terminal size; the next frame starts from a blank screen.
    pub fn resize(&mut self, bounds: (u16, u16)) {
        if bounds != self.bounds {
            debug!("terminal resized to {}x{}", bounds.0, bounds.1);
            self.bounds = bounds;
            self.stale = true;
        }
    }

    /// Visible `(columns, rows)` of a `width x height` grid.
    pub fn visible(&self, width: usize, height: usize) -> (usize, usize) {
        visible(self.bounds, self.config.origin, width, height)
    }

    /// Draws the status line and every visible cell, then flushes.
    pub fn draw(&mut self, grid: &Grid, generation: u64) -> io::Result<()> {
        if self.stale {
            queue!(self.out, ResetColor, Clear(ClearType::All))?;
            self.stale = false;
        }
        let status = format!(
            "generation {generation}  population {}  [{} to quit]",
            grid.population(),
            self.config.quit_key
        );
        let status: String = status.chars().take(self.bounds.0 as usize).collect();
        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            ResetColor,
            Print(status),
            Clear(ClearType::UntilNewLine),
            SetForegroundColor(self.config.live_color),
            SetBackgroundColor(self.config.background),
        )?;

        let (cols, rows) = self.visible(grid.width(), grid.height());
        let (origin_x, origin_y) = self.config.origin;
        let mut line = String::with_capacity(cols);
        for (y, row) in grid.rows().take(rows).enumerate() {
            line.clear();
            line.extend(row[..cols].iter().map(|cell| {
                if cell.is_alive() {
                    self.config.live_glyph
                } else {
                    self.config.dead_glyph
                }
            }));
            queue!(self.out, cursor::MoveTo(origin_x, origin_y + y as u16), Print(&line))?;
        }

        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}

/// Raw mode and the alternate screen, held for the life of the run and
/// restored on drop.
pub struct DisplaySession {
    renderer: Renderer<Stdout>,
}

impl DisplaySession {
    pub fn open(config: Config) -> io::Result<Self> {
        let bounds = terminal::size()?;
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, cursor::Hide, Clear(ClearType::All)) {
            if let Err(restore) = terminal::disable_raw_mode() {
                error!("failed to disable raw mode: {restore}");
            }
            return Err(err);
        }

        Ok(Self { renderer: Renderer::new(stdout, config, bounds) })
    }

    pub fn renderer(&mut self) -> &mut Renderer<Stdout> {
        &mut self.renderer
    }
}

impl Drop for DisplaySession {
    fn drop(&mut self) {
        if let Err(err) = execute!(
            self.renderer.out,
            ResetColor,
            cursor::Show,
            LeaveAlternateScreen
        ) {
            error!("failed to leave alternate screen: {err}");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            error!("failed to disable raw mode: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::Cell;

    fn output(renderer: &Renderer<Vec<u8>>) -> String {
        String::from_utf8_lossy(&renderer.out).into_owned()
    }

    fn config() -> Config {
        Config { live_glyph: '#', dead_glyph: '.', ..Config::default() }
    }

    #[test]
    fn draws_rows_with_live_and_dead_glyphs() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(0, 0, Cell::Alive);
        grid.set(2, 1, Cell::Alive);

        let mut renderer = Renderer::new(Vec::new(), config(), (80, 24));
        renderer.draw(&grid, 5).unwrap();
        let out = output(&renderer);

        assert!(out.contains("generation 5  population 2"));
        assert!(out.contains("#.."));
        assert!(out.contains("..#"));
        assert!(out.find("#..").unwrap() < out.find("..#").unwrap());
    }

    #[test]
    fn row_zero_is_drawn_at_the_origin() {
        let grid = Grid::new(4, 1).unwrap();
        let mut renderer = Renderer::new(Vec::new(), config(), (80, 24));
        renderer.draw(&grid, 0).unwrap();

        // CSI row;col H is one-based: origin (1, 1) lands on row 2, column 2.
        assert!(output(&renderer).contains("\x1b[2;2H...."));
    }

    #[test]
    fn clips_to_terminal_size() {
        let mut grid = Grid::new(10, 10).unwrap();
        for x in 0..10 {
            grid.set(x, 0, Cell::Alive);
        }
        let renderer = Renderer::new(Vec::new(), config(), (6, 4));
        assert_eq!(renderer.visible(10, 10), (5, 3));
        assert_eq!(renderer.visible(2, 2), (2, 2));

        let mut renderer = renderer;
        renderer.draw(&grid, 1).unwrap();
        let out = output(&renderer);
        assert!(out.contains("#####"));
        assert!(!out.contains("######"));
    }

    #[test]
    fn fit_is_judged_from_bounds_and_origin() {
        assert_eq!(visible((80, 24), (1, 1), 200, 100), (79, 23));
        assert_eq!(visible((80, 24), (0, 0), 80, 24), (80, 24));
        assert!(check_fit((80, 24), (1, 1), 79, 23));
        assert!(!check_fit((80, 24), (1, 1), 80, 23));
        assert!(!check_fit((80, 24), (1, 1), 200, 100));
    }

    #[test]
    fn resize_clips_later_frames_and_clears_once() {
        let mut grid = Grid::new(10, 3).unwrap();
        for x in 0..10 {
            grid.set(x, 0, Cell::Alive);
        }
        let mut renderer = Renderer::new(Vec::new(), config(), (80, 24));
        renderer.draw(&grid, 0).unwrap();
        assert!(output(&renderer).contains("##########"));
        assert!(!output(&renderer).contains("\x1b[2J"));

        renderer.resize((5, 24));
        assert_eq!(renderer.bounds(), (5, 24));
        renderer.out.clear();
        renderer.draw(&grid, 1).unwrap();
        let out = output(&renderer);
        assert!(out.contains("\x1b[2J"));
        assert!(out.contains("####") && !out.contains("#####"));

        renderer.out.clear();
        renderer.draw(&grid, 2).unwrap();
        assert!(!output(&renderer).contains("\x1b[2J"));
    }

    #[test]
    fn resize_to_same_size_does_not_clear() {
        let grid = Grid::new(2, 2).unwrap();
        let mut renderer = Renderer::new(Vec::new(), config(), (80, 24));
        renderer.resize((80, 24));
        renderer.draw(&grid, 0).unwrap();
        assert!(!output(&renderer).contains("\x1b[2J"));
    }

    #[test]
    fn tiny_terminal_draws_no_cells() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, Cell::Alive);
        let mut renderer = Renderer::new(Vec::new(), config(), (1, 1));
        assert_eq!(renderer.visible(3, 3), (0, 0));
        renderer.draw(&grid, 0).unwrap();
        assert!(!output(&renderer).contains('#'));
    }
}

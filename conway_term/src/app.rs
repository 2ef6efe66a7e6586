// app.rs - Fixed-tick driver loop

use std::io::{self, Write};
use std::thread;

use conway::Simulation;
use log::{debug, info};

use crate::config::Config;
use crate::display::Renderer;
use crate::input::Poll;

/// Runs until `poll` reports a quit.
///
/// Each tick polls input, sleeps, computes the next generation and draws
/// it, in that order. Returns the number of generations computed.
pub fn run<W, P>(
    sim: &mut Simulation,
    renderer: &mut Renderer<W>,
    config: &Config,
    mut poll: P,
) -> io::Result<u64>
where
    W: Write,
    P: FnMut() -> io::Result<Poll>,
{
    renderer.draw(sim.current(), sim.generation())?;

    let mut reported_cycle = false;
    loop {
        let input = poll()?;
        if input.quit {
            debug!("quit requested at generation {}", sim.generation());
            break;
        }
        if let Some(bounds) = input.resized {
            renderer.resize(bounds);
        }

        thread::sleep(config.tick);

        sim.step();
        renderer.draw(sim.current(), sim.generation())?;

        if sim.is_cycling() && !reported_cycle {
            info!(
                "settled into a cycle at generation {} with {} cells alive",
                sim.generation(),
                sim.current().population()
            );
            reported_cycle = true;
        }
    }

    Ok(sim.generation())
}

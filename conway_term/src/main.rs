// main.rs - Conway's Game of Life in the terminal
//
// Usage: conway_term <width> <height> [--seed <n>] [--pattern <name>] [--density <p>]

use std::process::ExitCode;

use conway::Simulation;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

mod app;
mod cli;
mod config;
mod display;
mod input;

use cli::Command;
use config::Config;
use display::DisplaySession;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut argv = std::env::args();
    let program = argv.next().unwrap_or_else(|| "conway_term".to_string());

    let args = match cli::parse(argv) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => {
            print!("{}", cli::usage(&program));
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprint!("{}", cli::usage(&program));
            return ExitCode::FAILURE;
        }
    };

    let mut config = Config::default();
    if let Some(density) = args.density {
        config.density = density;
    }

    // Both buffers are allocated before the terminal is touched so that an
    // allocation failure prints on a normal screen.
    let mut sim = match Simulation::new(args.width, args.height) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match args.pattern {
        Some(pattern) => sim.seed_pattern(pattern),
        None => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            sim.seed_random(&mut rng, config.density);
        }
    }

    // Checked on the normal screen so the warning stays visible.
    match crossterm::terminal::size() {
        Ok(bounds) => {
            display::check_fit(bounds, config.origin, args.width, args.height);
        }
        Err(err) => {
            eprintln!("error: cannot read terminal size: {err}");
            return ExitCode::FAILURE;
        }
    }

    let mut session = match DisplaySession::open(config.clone()) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("error: cannot open terminal display: {err}");
            return ExitCode::FAILURE;
        }
    };

    let quit_key = config.quit_key;
    let result = app::run(&mut sim, session.renderer(), &config, || input::poll(quit_key));
    drop(session);

    match result {
        Ok(generations) => {
            info!("stopped after {generations} generations");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("display loop failed: {err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

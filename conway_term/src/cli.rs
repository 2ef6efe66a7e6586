// cli.rs - Command line parsing

use conway::Pattern;
use conway::patterns;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("missing <width> and <height>")]
    MissingDimensions,

    #[error("invalid {name} '{value}': expected a positive integer")]
    InvalidDimension { name: &'static str, value: String },

    #[error("invalid seed '{0}': expected an unsigned integer")]
    InvalidSeed(String),

    #[error("invalid density '{0}': expected a number between 0 and 1")]
    InvalidDensity(String),

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("option {0} needs a value")]
    MissingValue(&'static str),

    #[error("unexpected argument '{0}'")]
    Unexpected(String),

    #[error("{0} only applies to random grids and cannot be combined with --pattern")]
    RandomOnly(&'static str),
}

/// What the program was asked to do.
#[derive(Debug)]
pub enum Command {
    Run(Args),
    Help,
}

#[derive(Debug)]
pub struct Args {
    pub width: usize,
    pub height: usize,
    pub seed: Option<u64>,
    pub pattern: Option<&'static Pattern>,
    pub density: Option<f64>,
}

/// Parses everything after the program name.
pub fn parse<I, S>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut positional = Vec::new();
    let mut seed = None;
    let mut pattern = None;
    let mut density = None;

    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--seed" => {
                let value = args.next().ok_or(CliError::MissingValue("--seed"))?;
                seed = Some(value.parse().map_err(|_| CliError::InvalidSeed(value))?);
            }
            "--pattern" => {
                let value = args.next().ok_or(CliError::MissingValue("--pattern"))?;
                pattern = Some(patterns::find(&value).ok_or(CliError::UnknownPattern(value))?);
            }
            "--density" => {
                let value = args.next().ok_or(CliError::MissingValue("--density"))?;
                density = Some(parse_density(value)?);
            }
            _ if arg.starts_with("--") => return Err(CliError::Unexpected(arg)),
            _ => positional.push(arg),
        }
    }

    if pattern.is_some() {
        if seed.is_some() {
            return Err(CliError::RandomOnly("--seed"));
        }
        if density.is_some() {
            return Err(CliError::RandomOnly("--density"));
        }
    }

    if positional.len() < 2 {
        return Err(CliError::MissingDimensions);
    }
    if positional.len() > 2 {
        return Err(CliError::Unexpected(positional.swap_remove(2)));
    }
    let height = parse_dimension("height", positional.pop())?;
    let width = parse_dimension("width", positional.pop())?;

    Ok(Command::Run(Args { width, height, seed, pattern, density }))
}

fn parse_dimension(name: &'static str, value: Option<String>) -> Result<usize, CliError> {
    let value = value.ok_or(CliError::MissingDimensions)?;
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CliError::InvalidDimension { name, value }),
    }
}

fn parse_density(value: String) -> Result<f64, CliError> {
    match value.parse::<f64>() {
        Ok(p) if (0.0..=1.0).contains(&p) => Ok(p),
        _ => Err(CliError::InvalidDensity(value)),
    }
}

pub fn usage(program: &str) -> String {
    let names: Vec<&str> = patterns::names().collect();
    format!(
        "USAGE: {program} <width> <height> [--seed <n>] [--pattern <name>] [--density <p>]\n\
         \n\
         Runs Conway's Game of Life on a <width> x <height> grid. Press q to quit.\n\
         \n\
         Options:\n\
         \x20 --seed <n>        seed for the random starting grid\n\
         \x20 --pattern <name>  start from a preset instead of random cells\n\
         \x20                   (not with --seed or --density)\n\
         \x20 --density <p>     chance that a random cell starts alive (default 0.5)\n\
         \n\
         Patterns: {}\n",
        names.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Args {
        match parse(args.iter().copied()) {
            Ok(Command::Run(args)) => args,
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn width_then_height() {
        let args = run(&["80", "24"]);
        assert_eq!((args.width, args.height), (80, 24));
        assert!(args.seed.is_none() && args.pattern.is_none() && args.density.is_none());
    }

    #[test]
    fn options_may_appear_anywhere() {
        let args = run(&["--seed", "7", "40", "20", "--density", "0.25"]);
        assert_eq!((args.width, args.height), (40, 20));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.density, Some(0.25));

        let args = run(&["40", "--pattern", "pulsar", "20"]);
        assert_eq!(args.pattern.map(|p| p.name), Some("Pulsar"));
    }

    #[test]
    fn random_options_conflict_with_pattern() {
        assert_eq!(
            parse(["40", "20", "--pattern", "glider", "--seed", "7"]).unwrap_err(),
            CliError::RandomOnly("--seed")
        );
        assert_eq!(
            parse(["--density", "0.3", "--pattern", "glider", "40", "20"]).unwrap_err(),
            CliError::RandomOnly("--density")
        );
    }

    #[test]
    fn missing_arguments() {
        assert_eq!(parse(Vec::<String>::new()).unwrap_err(), CliError::MissingDimensions);
        assert_eq!(parse(["10"]).unwrap_err(), CliError::MissingDimensions);
    }

    #[test]
    fn dimensions_must_be_positive_integers() {
        assert_eq!(
            parse(["0", "10"]).unwrap_err(),
            CliError::InvalidDimension { name: "width", value: "0".into() }
        );
        assert_eq!(
            parse(["10", "tall"]).unwrap_err(),
            CliError::InvalidDimension { name: "height", value: "tall".into() }
        );
        assert!(matches!(parse(["-3", "10"]), Err(CliError::InvalidDimension { .. })));
    }

    #[test]
    fn bad_options() {
        assert_eq!(parse(["10", "10", "--seed"]).unwrap_err(), CliError::MissingValue("--seed"));
        assert_eq!(
            parse(["10", "10", "--seed", "x"]).unwrap_err(),
            CliError::InvalidSeed("x".into())
        );
        assert_eq!(
            parse(["10", "10", "--density", "1.5"]).unwrap_err(),
            CliError::InvalidDensity("1.5".into())
        );
        assert_eq!(
            parse(["10", "10", "--pattern", "spaceship"]).unwrap_err(),
            CliError::UnknownPattern("spaceship".into())
        );
        assert_eq!(
            parse(["10", "10", "--fast"]).unwrap_err(),
            CliError::Unexpected("--fast".into())
        );
        assert_eq!(parse(["10", "10", "3"]).unwrap_err(), CliError::Unexpected("3".into()));
    }

    #[test]
    fn help_wins() {
        assert!(matches!(parse(["--help"]), Ok(Command::Help)));
        assert!(matches!(parse(["10", "-h"]), Ok(Command::Help)));
    }

    #[test]
    fn usage_lists_patterns() {
        let text = usage("conway_term");
        assert!(text.starts_with("USAGE: conway_term <width> <height>"));
        assert!(text.contains("Gosper Glider Gun"));
    }
}

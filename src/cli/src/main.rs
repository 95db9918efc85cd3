#![warn(clippy::pedantic)]

mod style;

use std::{fs, path::PathBuf};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::WrapErr;
use cube_core::{Cube, CubeConfig, MoveSequence, scramble, solve_random};
use env_logger::TimestampPrecision;
use fastrand::Rng;
use log::{LevelFilter, info};
use owo_colors::OwoColorize;
use style::Colored;

/// Scrambles, turns, and draws N×N×N cubes
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Cube size, scramble bounds, and solve budget, in TOML format.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// The cube size. Overrides the config file; values below 2 become 2.
    #[arg(long, short = 'n')]
    size: Option<usize>,

    /// Seed every random draw, for reproducible scrambles and walks.
    #[arg(long)]
    seed: Option<u64>,

    /// Draw facelets in color.
    #[arg(long)]
    color: bool,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    log_level: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a solved cube.
    Show {
        /// Scramble the cube before printing it.
        #[arg(long)]
        scrambled: bool,
    },
    /// Scramble a solved cube, then print the moves used and the result.
    Scramble,
    /// Apply a move sequence to a solved cube.
    Apply {
        /// The moves to apply, e.g. "X[0] Y[1]' Z[2]2".
        moves: String,
    },
    /// Make random moves until the cube is solved or the budget runs out.
    SolveRandom {
        /// The most moves to try. Defaults to the config file's budget.
        #[arg(long, short)]
        budget: Option<usize>,
        /// Start from these moves applied to a solved cube instead of a scramble.
        #[arg(long)]
        moves: Option<String>,
    },
    /// Turn the whole cube without moving any layer relative to another.
    Reorient {
        /// Reorientations to apply in order.
        #[arg(required = true)]
        directions: Vec<Reorientation>,
        /// Scramble the cube first.
        #[arg(long)]
        scrambled: bool,
    },
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Reorientation {
    Left,
    Right,
    Up,
    Down,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = load_config(&cli)?;
    info!(target: "config", "Configuration: {config:?}");

    let mut rng = seeded_rng(cli.seed);

    match cli.command {
        Commands::Show { scrambled } => {
            let cube = if scrambled {
                Cube::new_scrambled(config.size, &config.scramble, &mut rng)
            } else {
                Cube::new_solved(config.size)
            };
            print_cube(&cube, cli.color);
        }
        Commands::Scramble => {
            let mut cube = Cube::new_solved(config.size);
            let moves = scramble(&mut cube, &config.scramble, &mut rng);
            println!("{} moves: {moves}", moves.len());
            print_cube(&cube, cli.color);
        }
        Commands::Apply { moves } => {
            let moves = parse_moves(&moves)?;
            let mut cube = Cube::new_solved(config.size);
            cube.apply_sequence(&moves)?;
            print_cube(&cube, cli.color);
            println!("Solved: {}", cube.is_solved());
        }
        Commands::SolveRandom { budget, moves } => {
            let mut cube = match moves {
                Some(moves) => {
                    let moves = parse_moves(&moves)?;
                    let mut cube = Cube::new_solved(config.size);
                    cube.apply_sequence(&moves)?;
                    cube
                }
                None => Cube::new_scrambled(config.size, &config.scramble, &mut rng),
            };
            print_cube(&cube, cli.color);

            let budget = budget.unwrap_or(config.solve_budget);
            let outcome = solve_random(&mut cube, budget, &mut rng);
            print_cube(&cube, cli.color);
            if outcome.solved {
                println!("{} after {} moves", "Solved".green(), outcome.moves_used);
            } else {
                println!(
                    "{} after {} moves",
                    "Not solved".red(),
                    outcome.moves_used
                );
            }
        }
        Commands::Reorient {
            directions,
            scrambled,
        } => {
            let mut cube = if scrambled {
                Cube::new_scrambled(config.size, &config.scramble, &mut rng)
            } else {
                Cube::new_solved(config.size)
            };
            for direction in directions {
                match direction {
                    Reorientation::Left => cube.reorient_left(),
                    Reorientation::Right => cube.reorient_right(),
                    Reorientation::Up => cube.reorient_up(),
                    Reorientation::Down => cube.reorient_down(),
                }
            }
            print_cube(&cube, cli.color);
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> color_eyre::Result<CubeConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read configuration file {path:?}"))?;
            toml::from_str::<CubeConfig>(&text)
                .wrap_err_with(|| format!("Failed to parse configuration file {path:?}"))?
        }
        None => CubeConfig::default(),
    };

    if let Some(size) = cli.size {
        config.size = size;
    }

    Ok(config.normalized())
}

fn seeded_rng(seed: Option<u64>) -> Rng {
    let rng = seed.map_or_else(Rng::new, Rng::with_seed);
    info!(target: "rng", "Using seed {}", rng.get_seed());
    rng
}

fn parse_moves(text: &str) -> color_eyre::Result<MoveSequence> {
    text.parse::<MoveSequence>()
        .wrap_err_with(|| format!("Could not read move sequence {text:?}"))
}

fn print_cube(cube: &Cube, color: bool) {
    if color {
        print!("{}", cube.net_with(Colored));
    } else {
        print!("{cube}");
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use cube_core::{CubeConfig, ScrambleConfig};

    use super::Cli;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn partial_config_files_use_defaults() {
        let config = toml::from_str::<CubeConfig>("size = 5").unwrap();
        assert_eq!(config.size, 5);
        assert_eq!(config.scramble, ScrambleConfig::default());
        assert_eq!(config.solve_budget, CubeConfig::default().solve_budget);

        let config = toml::from_str::<CubeConfig>("[scramble]\nmin_moves = 3\nmax_moves = 9").unwrap();
        assert_eq!(config.scramble, ScrambleConfig::new(3, 9).unwrap());
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        assert!(toml::from_str::<CubeConfig>("sise = 5").is_err());
        assert!(toml::from_str::<CubeConfig>("[scramble]\nmin_move = 5").is_err());
    }

    #[test]
    fn reversed_scramble_bounds_are_rejected() {
        let err = toml::from_str::<CubeConfig>("[scramble]\nmin_moves = 9\nmax_moves = 2")
            .unwrap_err();
        assert!(err.to_string().contains("reversed"), "{err}");

        assert!(toml::from_str::<CubeConfig>("[scramble]\nmax_moves = 0\nmin_moves = 0").is_err());
        assert!(toml::from_str::<CubeConfig>("[scramble]\nmax_moves = 50").is_err());
    }

    #[test]
    fn size_flag_overrides_and_clamps() {
        let cli = Cli::try_parse_from(["cube", "--size", "1", "show"]).unwrap();
        let config = super::load_config(&cli).unwrap();
        assert_eq!(config.size, 2);
    }
}

mod analysis;
mod config;
mod log_presenter;
mod self_play;
mod verify;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_common::config::ConfigManager;
use tictactoe_common::tictactoe::{Board, Mark};
use tictactoe_common::{log, logger};

use config::{CliConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_PREFIX};
use log_presenter::LogPresenter;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Perfect-play tic-tac-toe engine")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[arg(long)]
    use_log_prefix: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score every legal move and play the best one.
    BestMove {
        /// Rows separated by '/', e.g. "X_O/_X_/___".
        #[arg(long)]
        board: Board,
        /// Mark the engine plays; defaults to the side to move.
        #[arg(long)]
        ai: Option<Mark>,
    },
    /// Classify a board as won, drawn or in progress.
    Outcome {
        #[arg(long)]
        board: Board,
    },
    /// Play the engine against a random opponent.
    SelfPlay {
        #[arg(long)]
        games: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        verbose: bool,
    },
    /// Check every human move sequence against the engine.
    Verify,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager: ConfigManager<_, CliConfig> = ConfigManager::from_yaml_file(args.config.clone());
    let config = config_manager.get_config()?;

    let prefix = if args.use_log_prefix {
        Some(
            config
                .log_prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_PREFIX.to_string()),
        )
    } else {
        None
    };
    logger::init_logger(prefix);

    match args.command {
        Command::BestMove { board, ai } => {
            let report = analysis::best_move(&board, ai)?;
            analysis::log_best_move(&report);
        }
        Command::Outcome { board } => {
            analysis::log_outcome(&board);
        }
        Command::SelfPlay {
            games,
            seed,
            verbose,
        } => {
            let self_play_config = config.self_play.merged(games, seed, verbose)?;
            let games = self_play_config.games;
            let seed = self_play_config.seed.unwrap_or_else(rand::random);
            let mut presenter = LogPresenter::new(self_play_config.verbose);

            log!("Self-play: {} games, seed {}", games, seed);
            let summary = self_play::run_self_play(&config.game, games, seed, &mut presenter)?;
            log!(
                "AI wins {}, draws {}, human wins {} (AI moved first in {})",
                summary.ai_wins,
                summary.draws,
                summary.human_wins,
                summary.ai_first
            );

            if summary.human_wins > 0 {
                return Err(format!("engine lost {} games", summary.human_wins).into());
            }
        }
        Command::Verify => {
            let reports = verify::verify_both_seatings()?;
            verify::log_reports(&reports);

            if reports.iter().any(|(_, report)| !report.is_unbeaten()) {
                return Err("engine can be beaten".into());
            }
            log!("Engine is unbeaten from every reachable position");
        }
    }

    Ok(())
}

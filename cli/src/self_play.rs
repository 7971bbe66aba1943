use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use tictactoe_common::EngineError;
use tictactoe_common::tictactoe::{RoundPresenter, RoundStatus, TicTacToeGameState, TicTacToeSettings};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelfPlaySummary {
    pub games: u32,
    pub ai_wins: u32,
    pub human_wins: u32,
    pub draws: u32,
    pub ai_first: u32,
}

/// Plays `games` rounds of the engine against a uniformly random opponent.
pub fn run_self_play(
    settings: &TicTacToeSettings,
    games: u32,
    seed: u64,
    presenter: &mut dyn RoundPresenter,
) -> Result<SelfPlaySummary, EngineError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut summary = SelfPlaySummary::default();
    let mut game = TicTacToeGameState::new(settings, &mut rng);

    for round in 0..games {
        if round > 0 {
            game.reset(&mut rng);
        }
        if game.status() == RoundStatus::AiTurn {
            summary.ai_first += 1;
        }

        while !game.status().is_over() {
            match game.status() {
                RoundStatus::AiTurn => {
                    game.play_ai_move_with(presenter)?;
                }
                _ => {
                    let moves = game.board().available_moves();
                    let position = moves.choose(&mut rng).ok_or(EngineError::NoLegalMove)?;
                    game.place_human_mark_with(position.row, position.col, presenter)?;
                }
            }
        }

        summary.games += 1;
        match game.status() {
            RoundStatus::AiWon => summary.ai_wins += 1,
            RoundStatus::HumanWon => summary.human_wins += 1,
            _ => summary.draws += 1,
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::tictactoe::{FirstPlayerMode, NullPresenter};

    #[test]
    fn test_engine_never_loses_to_random_play() {
        let settings = TicTacToeSettings {
            first_player_mode: FirstPlayerMode::Random,
        };
        let summary = run_self_play(&settings, 40, 2024, &mut NullPresenter).unwrap();

        assert_eq!(summary.games, 40);
        assert_eq!(summary.human_wins, 0);
        assert_eq!(summary.ai_wins + summary.draws, 40);
        assert!(summary.ai_first > 0 && summary.ai_first < 40);
    }

    #[test]
    fn test_same_seed_same_summary() {
        let settings = TicTacToeSettings::default();
        let first = run_self_play(&settings, 10, 7, &mut NullPresenter).unwrap();
        let second = run_self_play(&settings, 10, 7, &mut NullPresenter).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.ai_first, 0);
    }
}

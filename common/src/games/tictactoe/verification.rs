use crate::error::EngineError;
use super::game_state::{RoundStatus, TicTacToeGameState};
use super::types::Side;

/// Outcome counts over every human move sequence against the engine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VerificationReport {
    pub games: u64,
    pub ai_wins: u64,
    pub draws: u64,
    pub human_wins: u64,
}

impl VerificationReport {
    pub fn is_unbeaten(&self) -> bool {
        self.human_wins == 0
    }
}

pub fn verify_unbeatable(first_player: Side) -> Result<VerificationReport, EngineError> {
    let mut report = VerificationReport::default();
    explore(&TicTacToeGameState::with_first_player(first_player), &mut report)?;
    Ok(report)
}

fn explore(game: &TicTacToeGameState, report: &mut VerificationReport) -> Result<(), EngineError> {
    match game.status() {
        RoundStatus::HumanWon => record(report, |r| r.human_wins += 1),
        RoundStatus::AiWon => record(report, |r| r.ai_wins += 1),
        RoundStatus::Draw => record(report, |r| r.draws += 1),
        RoundStatus::AiTurn => {
            let mut next = game.clone();
            next.play_ai_move()?;
            explore(&next, report)?;
        }
        RoundStatus::HumanTurn(_) => {
            for position in game.board().available_moves() {
                let mut next = game.clone();
                next.place_human_mark(position.row, position.col)?;
                explore(&next, report)?;
            }
        }
    }
    Ok(())
}

fn record(report: &mut VerificationReport, bump: impl FnOnce(&mut VerificationReport)) {
    report.games += 1;
    bump(report);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_never_loses_moving_second() {
        let report = verify_unbeatable(Side::Human).unwrap();

        assert!(report.is_unbeaten(), "{:?}", report);
        assert_eq!(report.games, report.ai_wins + report.draws);
        assert!(report.draws > 0);
        assert!(report.ai_wins > 0);
    }

    #[test]
    fn test_engine_never_loses_moving_first() {
        let report = verify_unbeatable(Side::Ai).unwrap();

        assert!(report.is_unbeaten(), "{:?}", report);
        assert_eq!(report.games, report.ai_wins + report.draws);
        assert!(report.ai_wins > 0);
    }

    #[test]
    fn test_report_flags_human_wins() {
        let report = VerificationReport {
            games: 3,
            ai_wins: 1,
            draws: 1,
            human_wins: 1,
        };
        assert!(!report.is_unbeaten());
    }
}

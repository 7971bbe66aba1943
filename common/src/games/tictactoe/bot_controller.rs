use crate::error::EngineError;
use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::minimax::{SearchStats, minimax};
use super::types::{Mark, Position};
use super::win_detector::winner;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            bot_mark: state.ai_mark(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvaluation {
    pub position: Position,
    pub score: i32,
}

/// Minimax scores for every legal bot move, in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveAnalysis {
    pub evaluations: Vec<MoveEvaluation>,
    pub stats: SearchStats,
}

impl MoveAnalysis {
    /// Highest score; ties keep the earliest cell in scan order.
    pub fn best(&self) -> Option<MoveEvaluation> {
        let mut best: Option<MoveEvaluation> = None;
        for evaluation in &self.evaluations {
            match best {
                Some(current) if evaluation.score <= current.score => {}
                _ => best = Some(*evaluation),
            }
        }
        best
    }
}

pub fn analyze_moves(board: &Board, bot_mark: Mark) -> Result<MoveAnalysis, EngineError> {
    let opponent_mark = bot_mark.opponent().ok_or(EngineError::InvalidMark)?;
    let mut scratch = *board;
    let mut analysis = MoveAnalysis::default();

    for position in board.available_moves() {
        let mut stats = SearchStats::default();
        let mut child = scratch.place_scoped(position, bot_mark);
        let score = minimax(&mut child, 1, false, bot_mark, opponent_mark, &mut stats);
        drop(child);

        analysis.stats.merge(stats);
        analysis.evaluations.push(MoveEvaluation { position, score });
    }

    Ok(analysis)
}

/// Best move for the bot without touching the board.
pub fn calculate_minimax_move(input: &BotInput) -> Option<Position> {
    analyze_moves(&input.board, input.bot_mark)
        .ok()?
        .best()
        .map(|evaluation| evaluation.position)
}

/// Picks the optimal move for `ai_mark` and commits it to `board`.
///
/// A full board yields `NoLegalMove` and a board that already has a winner
/// yields `GameAlreadyOver`; in both cases the board is left as it was.
pub fn choose_ai_move(board: &mut Board, ai_mark: Mark) -> Result<Position, EngineError> {
    if board.is_full() {
        return Err(EngineError::NoLegalMove);
    }
    if winner(board).is_some() {
        return Err(EngineError::GameAlreadyOver);
    }

    let best = analyze_moves(board, ai_mark)?
        .best()
        .ok_or(EngineError::NoLegalMove)?;

    board.place(best.position.row, best.position.col, ai_mark)?;
    Ok(best.position)
}

mod board;
mod bot_controller;
mod game_state;
mod minimax;
mod presenter;
mod settings;
mod types;
mod verification;
mod win_detector;

pub use board::{ALL_POSITIONS, BOARD_SIZE, Board};
pub use bot_controller::{
    BotInput, MoveAnalysis, MoveEvaluation, analyze_moves, calculate_minimax_move, choose_ai_move,
};
pub use game_state::{RoundStatus, TicTacToeGameState};
pub use minimax::{AI_WIN_SCORE, DRAW_SCORE, HUMAN_WIN_SCORE, SearchStats, score, score_with_stats};
pub use presenter::{NullPresenter, RoundPresenter};
pub use settings::{FirstPlayerMode, TicTacToeSettings};
pub use types::{GameOutcome, Mark, Position, Side};
pub use verification::{VerificationReport, verify_unbeatable};
pub use win_detector::{LINES, has_won, is_draw, outcome, winner};

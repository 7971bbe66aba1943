use rand::Rng;
use std::fmt;

use crate::error::EngineError;
use super::board::Board;
use super::bot_controller::choose_ai_move;
use super::presenter::{NullPresenter, RoundPresenter};
use super::settings::{FirstPlayerMode, TicTacToeSettings};
use super::types::{Mark, Position, Side};
use super::win_detector::has_won;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    HumanTurn(Mark),
    AiTurn,
    HumanWon,
    AiWon,
    Draw,
}

impl RoundStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, RoundStatus::HumanWon | RoundStatus::AiWon | RoundStatus::Draw)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundStatus::HumanTurn(mark) => write!(f, "Your Turn ({})", mark),
            RoundStatus::AiTurn => write!(f, "AI Thinking..."),
            RoundStatus::HumanWon => write!(f, "You Win!"),
            RoundStatus::AiWon => write!(f, "AI Wins!"),
            RoundStatus::Draw => write!(f, "Game Draw!"),
        }
    }
}

/// One human-vs-engine round. Whoever moves first plays X.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    first_player_mode: FirstPlayerMode,
    human_mark: Mark,
    ai_mark: Mark,
    status: RoundStatus,
    last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new<R: Rng>(settings: &TicTacToeSettings, rng: &mut R) -> Self {
        let first = settings.first_player_mode.resolve(rng);
        Self::start(settings.first_player_mode, first)
    }

    pub fn with_first_player(first: Side) -> Self {
        Self::start(FirstPlayerMode::from(first), first)
    }

    fn start(first_player_mode: FirstPlayerMode, first: Side) -> Self {
        let (human_mark, ai_mark) = match first {
            Side::Human => (Mark::X, Mark::O),
            Side::Ai => (Mark::O, Mark::X),
        };
        let status = match first {
            Side::Human => RoundStatus::HumanTurn(human_mark),
            Side::Ai => RoundStatus::AiTurn,
        };

        Self {
            board: Board::new(),
            first_player_mode,
            human_mark,
            ai_mark,
            status,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn ai_mark(&self) -> Mark {
        self.ai_mark
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn current_side(&self) -> Option<Side> {
        match self.status {
            RoundStatus::HumanTurn(_) => Some(Side::Human),
            RoundStatus::AiTurn => Some(Side::Ai),
            _ => None,
        }
    }

    pub fn winner_side(&self) -> Option<Side> {
        match self.status {
            RoundStatus::HumanWon => Some(Side::Human),
            RoundStatus::AiWon => Some(Side::Ai),
            _ => None,
        }
    }

    pub fn mark_of(&self, side: Side) -> Mark {
        match side {
            Side::Human => self.human_mark,
            Side::Ai => self.ai_mark,
        }
    }

    pub fn place_human_mark(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        self.place_human_mark_with(row, col, &mut NullPresenter)
    }

    pub fn place_human_mark_with(
        &mut self,
        row: usize,
        col: usize,
        presenter: &mut dyn RoundPresenter,
    ) -> Result<(), EngineError> {
        self.ensure_turn(Side::Human)?;

        self.board.place(row, col, self.human_mark)?;
        self.finish_move(Side::Human, Position::new(row, col), presenter);
        Ok(())
    }

    pub fn play_ai_move(&mut self) -> Result<Position, EngineError> {
        self.play_ai_move_with(&mut NullPresenter)
    }

    pub fn play_ai_move_with(
        &mut self,
        presenter: &mut dyn RoundPresenter,
    ) -> Result<Position, EngineError> {
        self.ensure_turn(Side::Ai)?;

        let position = choose_ai_move(&mut self.board, self.ai_mark)?;
        self.finish_move(Side::Ai, position, presenter);
        Ok(position)
    }

    /// Starts a new round on a cleared board; `Random` mode draws the first mover again.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        let first = self.first_player_mode.resolve(rng);
        *self = Self::start(self.first_player_mode, first);
    }

    fn ensure_turn(&self, side: Side) -> Result<(), EngineError> {
        if self.status.is_over() {
            return Err(EngineError::GameAlreadyOver);
        }
        if self.current_side() != Some(side) {
            return Err(EngineError::NotYourTurn);
        }
        Ok(())
    }

    fn finish_move(&mut self, side: Side, position: Position, presenter: &mut dyn RoundPresenter) {
        let mark = self.mark_of(side);
        self.last_move = Some(position);
        presenter.mark_placed(side, position, mark, &self.board);

        self.status = if has_won(&self.board, mark) {
            match side {
                Side::Human => RoundStatus::HumanWon,
                Side::Ai => RoundStatus::AiWon,
            }
        } else if self.board.is_full() {
            RoundStatus::Draw
        } else {
            match side.other() {
                Side::Human => RoundStatus::HumanTurn(self.human_mark),
                Side::Ai => RoundStatus::AiTurn,
            }
        };
        presenter.status_changed(self.status);
    }
}

use super::board::Board;
use super::game_state::RoundStatus;
use super::types::{Mark, Position, Side};

/// Receives round transitions so that any front end can display them.
pub trait RoundPresenter {
    fn mark_placed(&mut self, side: Side, position: Position, mark: Mark, board: &Board);
    fn status_changed(&mut self, status: RoundStatus);
}

pub struct NullPresenter;

impl RoundPresenter for NullPresenter {
    fn mark_placed(&mut self, _side: Side, _position: Position, _mark: Mark, _board: &Board) {}

    fn status_changed(&mut self, _status: RoundStatus) {}
}

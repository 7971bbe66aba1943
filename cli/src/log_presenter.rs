use tictactoe_common::log;
use tictactoe_common::tictactoe::{Board, Mark, Position, RoundPresenter, RoundStatus, Side};

/// Writes round transitions to the process log.
pub struct LogPresenter {
    verbose: bool,
}

impl LogPresenter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl RoundPresenter for LogPresenter {
    fn mark_placed(&mut self, side: Side, position: Position, mark: Mark, board: &Board) {
        if self.verbose {
            log!("{:?} placed {} at {}\n{}", side, mark, position, board.pretty());
        }
    }

    fn status_changed(&mut self, status: RoundStatus) {
        if self.verbose {
            log!("{}", status);
        }
    }
}

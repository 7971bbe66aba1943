use crate::games::tictactoe::TicTacToeSettings;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

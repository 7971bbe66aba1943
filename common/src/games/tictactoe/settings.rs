use rand::Rng;
use serde::{Deserialize, Serialize};

use super::types::Side;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Ai,
    Random,
}

impl FirstPlayerMode {
    pub fn resolve<R: Rng>(&self, rng: &mut R) -> Side {
        match self {
            FirstPlayerMode::Human => Side::Human,
            FirstPlayerMode::Ai => Side::Ai,
            FirstPlayerMode::Random => {
                if rng.random() {
                    Side::Human
                } else {
                    Side::Ai
                }
            }
        }
    }
}

impl From<Side> for FirstPlayerMode {
    fn from(side: Side) -> Self {
        match side {
            Side::Human => FirstPlayerMode::Human,
            Side::Ai => FirstPlayerMode::Ai,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeSettings {
    pub first_player_mode: FirstPlayerMode,
}

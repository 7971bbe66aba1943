use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::tictactoe::TicTacToeSettings;

pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.yaml";
pub const DEFAULT_LOG_PREFIX: &str = "TicTacToe";
pub const MAX_SELF_PLAY_GAMES: u32 = 100_000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    pub games: u32,
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            verbose: false,
        }
    }
}

impl SelfPlayConfig {
    /// Applies command-line overrides and checks the result against the same bounds as the file.
    pub fn merged(&self, games: Option<u32>, seed: Option<u64>, verbose: bool) -> Result<Self, String> {
        let merged = Self {
            games: games.unwrap_or(self.games),
            seed: seed.or(self.seed),
            verbose: verbose || self.verbose,
        };
        merged.validate()?;
        Ok(merged)
    }
}

impl Validate for SelfPlayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 || self.games > MAX_SELF_PLAY_GAMES {
            return Err(format!(
                "self_play.games must be between 1 and {}",
                MAX_SELF_PLAY_GAMES
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub log_prefix: Option<String>,
    pub game: TicTacToeSettings,
    pub self_play: SelfPlayConfig,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<(), String> {
        self.self_play.validate()?;
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("log_prefix must not be blank".to_string());
        }
        self.game.validate()
    }
}

use crate::error::TurnError;
use crate::result::{GameResult, TurnReport};

use super::{Game, GameState};

impl Game {
    /// Plays turns until one hand is empty.
    ///
    /// `on_turn` is called after every turn with the game and that turn's
    /// report, so callers can narrate the game as it unfolds. There is no
    /// turn limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the hands have not been dealt, or a turn fails
    /// because no card could be drawn.
    pub fn play_to_end<F>(&mut self, mut on_turn: F) -> Result<GameResult, TurnError>
    where
        F: FnMut(&Self, &TurnReport),
    {
        while self.state == GameState::InProgress {
            let report = self.take_turn()?;
            on_turn(&*self, &report);
        }

        let winner = self.winner.ok_or(TurnError::InvalidState)?;
        log::info!("game over: {winner} wins after {} turns", self.turns);

        Ok(GameResult {
            winner,
            turns: self.turns,
            retired: self.retired,
        })
    }
}

use alloc::vec::Vec;

use tracing::info;

use crate::card::Card;
use crate::deck::CardSource;
use crate::error::ActionError;

use super::{Table, TableState};

impl Table {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer draws one card at a time while below `dealer_stands_on`
    /// (hitting a soft total equal to it only when `stand_on_soft_17` is off),
    /// then stands. A bust or blackjack ends the turn on its own. The loop
    /// takes no outside input.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in dealer turn state or the
    /// source is empty while the dealer must draw.
    pub fn dealer_phase<S: CardSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<Vec<Card>, ActionError> {
        if self.state != TableState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        let mut drawn = Vec::new();
        while self.dealer.is_drawable(&self.options) {
            drawn.push(self.dealer.draw(source)?);
        }
        if self.dealer.hand().is_playable() {
            self.dealer.stop()?;
        }

        self.state = TableState::RoundOver;

        info!(
            drawn = drawn.len(),
            dealer_score = self.dealer.hand().score(),
            dealer_status = ?self.dealer.hand().status(),
            "dealer phase complete"
        );
        Ok(drawn)
    }
}

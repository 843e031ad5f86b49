use tracing::{debug, info, warn};

use crate::deck::CardSource;
use crate::error::{ActionError, DrawError, WagerError};
use crate::participant::INITIAL_CARDS;

use super::{Table, TableState};

impl Table {
    /// Places a wager for the named gambler, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking wagers or no gambler has
    /// that name.
    pub fn place_wager(&mut self, name: &str, amount: u64) -> Result<(), WagerError> {
        if self.state != TableState::Betting {
            return Err(WagerError::InvalidState);
        }

        let gambler = self
            .gamblers
            .iter_mut()
            .find(|gambler| gambler.name() == name)
            .ok_or(WagerError::PlayerNotFound)?;
        gambler.set_wager(amount);

        debug!(gambler = name, amount, "wager placed");
        Ok(())
    }

    /// Deals two cards to every participant.
    ///
    /// The dealer takes both of its cards first, then each gambler takes two
    /// in seating order. Gamblers dealt a blackjack are skipped when turns
    /// begin; if nobody can act the table goes straight to the dealer turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in betting state, or the source
    /// holds fewer cards than the deal needs. No hand is touched in either
    /// case.
    pub fn initial_draw<S: CardSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<(), ActionError> {
        if self.state != TableState::Betting {
            return Err(ActionError::InvalidState);
        }

        let cards_needed = (self.gamblers.len() + 1) * INITIAL_CARDS;
        if source.remaining() < cards_needed {
            warn!(
                cards_needed,
                remaining = source.remaining(),
                "not enough cards for the deal"
            );
            return Err(DrawError::ExhaustedSource.into());
        }

        self.dealer.initial_draw(source)?;
        for gambler in &mut self.gamblers {
            gambler.initial_draw(source)?;
        }

        self.current = 0;
        self.state = TableState::GamblerTurns;
        self.advance_if_current_done()?;

        info!(
            dealer_score = self.dealer.hand().score(),
            state = ?self.state,
            "initial deal complete"
        );
        Ok(())
    }
}

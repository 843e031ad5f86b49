use tracing::info;

use crate::error::ShowdownError;
use crate::ledger::Ledger;
use crate::outcome::resolve;
use crate::result::{PlayerResult, RoundResult};

use super::{Table, TableState};

impl Table {
    /// Compares every gambler's hand with the dealer's.
    ///
    /// Results come back in seating order, one per gambler.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn resolve_all(&self) -> Result<RoundResult, ShowdownError> {
        if self.state != TableState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let dealer = self.dealer.hand();
        let players = self
            .gamblers
            .iter()
            .map(|gambler| PlayerResult {
                name: gambler.name().into(),
                outcome: resolve(gambler.hand(), dealer),
                score: gambler.hand().score(),
                status: gambler.hand().status(),
            })
            .collect();

        Ok(RoundResult {
            players,
            dealer_score: dealer.score(),
            dealer_status: dealer.status(),
        })
    }

    /// Resolves the round and converts each outcome into a payout.
    ///
    /// Gamblers who never placed a wager settle with a stake of 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn settle(&self) -> Result<Ledger, ShowdownError> {
        let round = self.resolve_all()?;
        let ledger = Ledger::settle(
            round
                .players
                .iter()
                .zip(&self.gamblers)
                .map(|(result, gambler)| (result, gambler.wager().unwrap_or(0))),
            &self.options,
        );

        info!(
            gamblers = ledger.entries().len(),
            dealer_net = ledger.dealer_net(),
            "round settled"
        );
        Ok(ledger)
    }
}

//! Round result types for showdown.

use alloc::string::String;
use alloc::vec::Vec;

use crate::hand::HandStatus;
use crate::outcome::Outcome;

/// Result for a single gambler after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The gambler's name.
    pub name: String,
    /// The outcome against the dealer.
    pub outcome: Outcome,
    /// The gambler's final hand value.
    pub score: u8,
    /// The gambler's final hand status.
    pub status: HandStatus,
}

/// The dealer's tally across every gambler, from the dealer's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DealerRecord {
    /// Gamblers the dealer beat.
    pub wins: usize,
    /// Gamblers who beat the dealer.
    pub losses: usize,
    /// Gamblers who tied the dealer.
    pub pushes: usize,
}

/// Result of the entire round after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each gambler, in seating order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand value.
    pub dealer_score: u8,
    /// The dealer's final hand status.
    pub dealer_status: HandStatus,
}

impl RoundResult {
    /// Returns the outcome for the gambler called `name`.
    #[must_use]
    pub fn outcome(&self, name: &str) -> Option<Outcome> {
        self.players
            .iter()
            .find(|player| player.name == name)
            .map(|player| player.outcome)
    }

    /// Counts the dealer's wins, losses and pushes.
    #[must_use]
    pub fn dealer_record(&self) -> DealerRecord {
        self.players
            .iter()
            .fold(DealerRecord::default(), |mut record, player| {
                match player.outcome.for_dealer() {
                    Outcome::Win | Outcome::BlackjackWin => record.wins += 1,
                    Outcome::Lose => record.losses += 1,
                    Outcome::Push => record.pushes += 1,
                }
                record
            })
    }
}

//! Wager settlement.

use alloc::string::String;
use alloc::vec::Vec;

use crate::options::{RoundingMode, TableOptions};
use crate::outcome::Outcome;
use crate::result::PlayerResult;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> i64 {
    match mode {
        RoundingMode::Up => amount.ceil() as i64,
        RoundingMode::Down => amount.floor() as i64,
        RoundingMode::Nearest => amount.round() as i64,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> i64 {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as i64,
        RoundingMode::Down => libm::floor(amount) as i64,
        RoundingMode::Nearest => libm::round(amount) as i64,
    }
}

/// Returns the signed amount a gambler gains (positive) or loses (negative).
///
/// A blackjack win pays `wager * blackjack_pays`, rounded with
/// `rounding_blackjack`. The default 1.5 with [`RoundingMode::Down`] turns a
/// wager of 15 into 22. A plain win pays the wager, a push pays nothing and a
/// loss forfeits the wager.
///
/// ```
/// use bjtable::{Outcome, TableOptions, payout};
///
/// let options = TableOptions::default();
/// assert_eq!(payout(Outcome::BlackjackWin, 1000, &options), 1500);
/// assert_eq!(payout(Outcome::Lose, 1000, &options), -1000);
/// ```
#[must_use]
pub fn payout(outcome: Outcome, wager: u64, options: &TableOptions) -> i64 {
    let stake = i64::try_from(wager).unwrap_or(i64::MAX);
    match outcome {
        Outcome::BlackjackWin => {
            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for monetary values"
            )]
            let winnings = (wager as f64) * options.blackjack_pays;
            round_amount(winnings, options.rounding_blackjack)
        }
        Outcome::Win => stake,
        Outcome::Push => 0,
        Outcome::Lose => -stake,
    }
}

/// One settled gambler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    /// The gambler's name.
    pub name: String,
    /// Amount staked (0 if no wager was placed).
    pub wager: u64,
    /// The outcome the payout was computed from.
    pub outcome: Outcome,
    /// Signed payout.
    pub payout: i64,
}

/// Per-gambler payouts for a round, plus the dealer's net.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    /// Settles each result against its wager.
    #[must_use]
    pub fn settle<'a>(
        results: impl IntoIterator<Item = (&'a PlayerResult, u64)>,
        options: &TableOptions,
    ) -> Self {
        let entries = results
            .into_iter()
            .map(|(result, wager)| LedgerEntry {
                name: result.name.clone(),
                wager,
                outcome: result.outcome,
                payout: payout(result.outcome, wager, options),
            })
            .collect();
        Self { entries }
    }

    /// Returns the entries in seating order.
    #[must_use]
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Returns the payout for the gambler called `name`.
    #[must_use]
    pub fn payout_of(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.payout)
    }

    /// Returns the sum of all wagers.
    #[must_use]
    pub fn total_wagered(&self) -> u64 {
        self.entries
            .iter()
            .fold(0, |total, entry| total.saturating_add(entry.wager))
    }

    /// Returns the dealer's result: the negated sum of gambler payouts.
    #[must_use]
    pub fn dealer_net(&self) -> i64 {
        self.entries
            .iter()
            .fold(0_i64, |total, entry| total.saturating_add(entry.payout))
            .saturating_neg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::HandStatus;

    fn result(name: &str, outcome: Outcome) -> PlayerResult {
        PlayerResult {
            name: name.into(),
            outcome,
            score: 20,
            status: HandStatus::Stopped,
        }
    }

    #[test]
    fn blackjack_payout_truncates() {
        let options = TableOptions::default();
        assert_eq!(payout(Outcome::BlackjackWin, 15, &options), 22);
        assert_eq!(payout(Outcome::BlackjackWin, 1, &options), 1);
        assert_eq!(payout(Outcome::BlackjackWin, 0, &options), 0);
    }

    #[test]
    fn custom_ratio_and_rounding() {
        let options = TableOptions::default()
            .with_blackjack_pays(1.2)
            .with_rounding_blackjack(RoundingMode::Up);
        assert_eq!(payout(Outcome::BlackjackWin, 11, &options), 14);
    }

    #[test]
    fn dealer_net_negates_gambler_total() {
        let pobi = result("pobi", Outcome::BlackjackWin);
        let jason = result("jason", Outcome::Lose);
        let brown = result("brown", Outcome::Push);
        let ledger = Ledger::settle(
            [(&pobi, 10_000), (&jason, 20_000), (&brown, 5_000)],
            &TableOptions::default(),
        );

        assert_eq!(ledger.payout_of("pobi"), Some(15_000));
        assert_eq!(ledger.payout_of("jason"), Some(-20_000));
        assert_eq!(ledger.payout_of("brown"), Some(0));
        assert_eq!(ledger.payout_of("nobody"), None);
        assert_eq!(ledger.dealer_net(), 5_000);
        assert_eq!(ledger.total_wagered(), 35_000);
    }
}

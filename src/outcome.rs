//! Pairwise resolution of a gambler's hand against the dealer's.

use crate::hand::Hand;

/// Result of a single gambler against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Gambler wins with a natural blackjack.
    BlackjackWin,
    /// Gambler wins (dealer busts or gambler has the higher total).
    Win,
    /// Tie; the wager is returned.
    Push,
    /// Gambler loses (gambler busts, dealer blackjack, or lower total).
    Lose,
}

impl Outcome {
    /// Returns whether the outcome is a tie.
    #[must_use]
    pub const fn is_tie(self) -> bool {
        matches!(self, Self::Push)
    }

    /// Returns whether the gambler won, by blackjack or otherwise.
    #[must_use]
    pub const fn is_gambler_win(self) -> bool {
        matches!(self, Self::BlackjackWin | Self::Win)
    }

    /// Returns the same result seen from the dealer's seat.
    #[must_use]
    pub const fn for_dealer(self) -> Self {
        match self {
            Self::BlackjackWin | Self::Win => Self::Lose,
            Self::Push => Self::Push,
            Self::Lose => Self::Win,
        }
    }
}

/// Resolves `gambler` against `dealer`.
///
/// Checks run in a fixed order: gambler blackjack, dealer blackjack, gambler
/// bust, dealer bust, then a plain score comparison. A busted gambler never
/// wins; two busts tie, as do two blackjacks.
#[must_use]
pub fn resolve(gambler: &Hand, dealer: &Hand) -> Outcome {
    if gambler.is_blackjack() {
        return if dealer.is_blackjack() {
            Outcome::Push
        } else {
            Outcome::BlackjackWin
        };
    }
    if dealer.is_blackjack() {
        return Outcome::Lose;
    }
    if gambler.is_bust() {
        return if dealer.is_bust() {
            Outcome::Push
        } else {
            Outcome::Lose
        };
    }
    if dealer.is_bust() {
        return Outcome::Win;
    }

    match gambler.score().cmp(&dealer.score()) {
        core::cmp::Ordering::Greater => Outcome::Win,
        core::cmp::Ordering::Less => Outcome::Lose,
        core::cmp::Ordering::Equal => Outcome::Push,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add(Card::new(Suit::Spades, rank)).unwrap();
        }
        hand
    }

    #[test]
    fn resolves_house_table() {
        use Rank::{Ace, Eight, Jack, King, Seven, Six};

        let cases: &[(&[Rank], &[Rank], Outcome)] = &[
            (&[Ace, Jack], &[Ace, Jack], Outcome::Push),
            (&[Ace, Jack], &[Jack, Jack], Outcome::BlackjackWin),
            (&[Ace, Jack], &[Jack, Six, Jack], Outcome::BlackjackWin),
            (&[Jack, Jack], &[Jack, Ace], Outcome::Lose),
            (&[Jack, Jack, Jack], &[Jack, Ace], Outcome::Lose),
            (&[Jack, Jack], &[Jack, Eight], Outcome::Win),
            (&[Jack, Jack], &[Jack, Jack], Outcome::Push),
            (&[Jack, Seven], &[Jack, Jack], Outcome::Lose),
            (&[Jack, Seven], &[Jack, Six, Jack], Outcome::Win),
            (&[Jack, Seven, King], &[Jack, Seven], Outcome::Lose),
            (&[Jack, Six, King], &[Jack, Six, King], Outcome::Push),
        ];

        for (gambler, dealer, expected) in cases {
            assert_eq!(
                resolve(&hand_of(gambler), &hand_of(dealer)),
                *expected,
                "gambler {gambler:?} vs dealer {dealer:?}"
            );
        }
    }

    #[test]
    fn dealer_view_mirrors_gambler_view() {
        assert_eq!(Outcome::BlackjackWin.for_dealer(), Outcome::Lose);
        assert_eq!(Outcome::Win.for_dealer(), Outcome::Lose);
        assert_eq!(Outcome::Lose.for_dealer(), Outcome::Win);
        assert_eq!(Outcome::Push.for_dealer(), Outcome::Push);
    }
}

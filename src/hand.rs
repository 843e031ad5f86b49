//! Hand representation and scoring.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::HandError;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u32, bool) {
    let mut hard: u32 = 0;
    let mut has_ace = false;

    for card in cards {
        if card.is_ace() {
            has_ace = true;
            hard = hard.saturating_add(1);
        } else {
            hard = hard.saturating_add(u32::from(card.points()));
        }
    }

    // At most one ace can count as 11 without busting.
    if has_ace && hard <= u32::from(BLACKJACK) - 10 {
        (hard + 10, true)
    } else {
        (hard, false)
    }
}

/// Returns the ace-adjusted total of `cards`.
///
/// Every ace starts at 11 and is lowered to 1, one at a time, while the total
/// exceeds 21. The result is the best non-busting total, or the lowest
/// possible total when busting cannot be avoided. Saturates at `u32::MAX`.
///
/// ```
/// use bjtable::{best_score, full_deck};
///
/// let deck: Vec<_> = full_deck().collect();
/// assert_eq!(best_score(&deck), 340);
/// ```
#[must_use]
pub fn best_score(cards: &[Card]) -> u32 {
    evaluate_cards(cards).0
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandStatus {
    /// Hand may still take cards.
    Playable,
    /// Owner has stood.
    Stopped,
    /// Every interpretation exceeds 21.
    Bust,
    /// Exactly two cards totaling 21.
    Blackjack,
}

impl HandStatus {
    /// Returns whether the status can no longer change.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playable)
    }
}

/// An append-only hand of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    status: HandStatus,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Playable,
        }
    }

    /// Adds a card and recomputes the status.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Terminal`] if the hand is bust, blackjack or
    /// stopped. The card is not added in that case.
    pub fn add(&mut self, card: Card) -> Result<(), HandError> {
        self.ensure_playable()?;
        self.cards.push(card);

        let value = self.score();
        if value > BLACKJACK {
            self.status = HandStatus::Bust;
        } else if self.cards.len() == 2 && value == BLACKJACK {
            self.status = HandStatus::Blackjack;
        }

        Ok(())
    }

    /// Stands on the hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Terminal`] if the hand has already finished.
    pub fn stop(&mut self) -> Result<(), HandError> {
        self.ensure_playable()?;
        self.status = HandStatus::Stopped;
        Ok(())
    }

    const fn ensure_playable(&self) -> Result<(), HandError> {
        if self.status.is_terminal() {
            return Err(HandError::Terminal {
                status: self.status,
            });
        }
        Ok(())
    }

    /// Returns the cards in the order they were added.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Returns whether the hand may still take cards.
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        matches!(self.status, HandStatus::Playable)
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub const fn is_blackjack(&self) -> bool {
        matches!(self.status, HandStatus::Blackjack)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        matches!(self.status, HandStatus::Bust)
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    /// A hand stops taking cards once bust, so its total never exceeds 31.
    #[must_use]
    pub fn score(&self) -> u8 {
        u8::try_from(best_score(&self.cards)).unwrap_or(u8::MAX)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit, full_deck};

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add(Card::new(Suit::Spades, rank)).unwrap();
        }
        hand
    }

    #[test]
    fn lone_ace_counts_high() {
        assert_eq!(hand_of(&[Rank::Ace]).score(), 11);
    }

    #[test]
    fn soft_total_hardens_after_a_big_card() {
        let hand = hand_of(&[Rank::Ace, Rank::Six, Rank::Nine]);
        assert_eq!(hand.score(), 16);
        assert!(!hand.is_soft());
        assert!(hand.is_playable());
    }

    #[test]
    fn three_cards_totaling_21_is_not_blackjack() {
        let hand = hand_of(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        assert_eq!(hand.score(), 21);
        assert_eq!(hand.status(), HandStatus::Playable);
    }

    #[test]
    fn many_cards_score_their_lowest_total() {
        let deck: Vec<Card> = full_deck().collect();
        assert_eq!(best_score(&deck), 340);

        let aces = [Card::new(Suit::Hearts, Rank::Ace); 30];
        assert_eq!(best_score(&aces), 30);
        assert_eq!(best_score(&aces[..11]), 21);
    }

    #[test]
    fn display_joins_cards() {
        let hand = hand_of(&[Rank::Ace, Rank::Ten]);
        assert_eq!(alloc::format!("{hand}"), "A♠, 10♠");
    }
}

//! Seated participants: the dealer and the gamblers.

use alloc::string::{String, ToString};
use core::fmt;

use tracing::debug;

use crate::card::Card;
use crate::deck::CardSource;
use crate::error::{ActionError, HandError, RosterError};
use crate::hand::{BLACKJACK, Hand};
use crate::options::{DrawCeiling, TableOptions};

/// Name reserved for the dealer.
pub const DEALER_NAME: &str = "Dealer";

/// Cards each participant receives in the opening deal.
pub const INITIAL_CARDS: usize = 2;

/// A non-empty participant name, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Validates and trims a gambler name.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::BlankName`] if nothing is left after trimming.
    pub fn new(raw: &str) -> Result<Self, RosterError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RosterError::BlankName {
                name: raw.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    fn dealer() -> Self {
        Self(DEALER_NAME.to_string())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a participant does at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The house. Draws by a fixed rule and never wagers.
    Dealer,
    /// A wagering player whose hits and stands come from outside.
    Gambler {
        /// Amount staked on the round, if one has been placed.
        wager: Option<u64>,
    },
}

/// A gambler decision for one step of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one more card.
    Hit,
    /// Stop drawing.
    Stand,
}

/// Supplies hit or stand decisions for gamblers.
///
/// Any re-prompting on malformed input happens inside the implementation.
pub trait DecisionSource {
    /// Returns the next decision for the gambler called `name`.
    fn next_action(&mut self, name: &str) -> Action;
}

impl<F: FnMut(&str) -> Action> DecisionSource for F {
    fn next_action(&mut self, name: &str) -> Action {
        self(name)
    }
}

/// A dealer or gambler together with the hand they own.
#[derive(Debug, Clone)]
pub struct Participant {
    name: Name,
    hand: Hand,
    role: Role,
}

impl Participant {
    /// Creates the dealer with an empty hand.
    #[must_use]
    pub fn dealer() -> Self {
        Self {
            name: Name::dealer(),
            hand: Hand::new(),
            role: Role::Dealer,
        }
    }

    /// Creates a gambler with an empty hand and no wager.
    #[must_use]
    pub const fn gambler(name: Name) -> Self {
        Self {
            name,
            hand: Hand::new(),
            role: Role::Gambler { wager: None },
        }
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the participant's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns whether this is the dealer.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        matches!(self.role, Role::Dealer)
    }

    /// Returns the gambler's wager. Always `None` for the dealer.
    #[must_use]
    pub const fn wager(&self) -> Option<u64> {
        match self.role {
            Role::Dealer => None,
            Role::Gambler { wager } => wager,
        }
    }

    /// Stakes `amount` on the round; only gamblers can wager.
    pub(crate) const fn set_wager(&mut self, amount: u64) -> bool {
        match &mut self.role {
            Role::Dealer => false,
            Role::Gambler { wager } => {
                *wager = Some(amount);
                true
            }
        }
    }

    /// Returns whether the participant is allowed another card.
    ///
    /// The dealer draws while below `dealer_stands_on`, and on a soft total
    /// equal to it when `stand_on_soft_17` is off. A gambler draws while the
    /// hand is playable and the draw ceiling is not reached.
    #[must_use]
    pub fn is_drawable(&self, options: &TableOptions) -> bool {
        if !self.hand.is_playable() {
            return false;
        }

        let value = self.hand.score();
        match self.role {
            Role::Dealer => {
                value < options.dealer_stands_on
                    || (value == options.dealer_stands_on
                        && self.hand.is_soft()
                        && !options.stand_on_soft_17)
            }
            Role::Gambler { .. } => match options.draw_ceiling {
                DrawCeiling::AnyNonBust => true,
                DrawCeiling::StopAtTwentyOne => value < BLACKJACK,
            },
        }
    }

    /// Draws one card from `source` into the hand.
    ///
    /// # Errors
    ///
    /// Fails with [`ActionError::Hand`] before touching the source if the
    /// hand is terminal, or with [`ActionError::Source`] if the source is
    /// exhausted.
    pub fn draw<S: CardSource + ?Sized>(&mut self, source: &mut S) -> Result<Card, ActionError> {
        if !self.hand.is_playable() {
            return Err(HandError::Terminal {
                status: self.hand.status(),
            }
            .into());
        }

        let card = source.draw()?;
        self.hand.add(card)?;
        debug!(
            participant = %self.name,
            %card,
            score = self.hand.score(),
            status = ?self.hand.status(),
            "drew card"
        );
        Ok(card)
    }

    /// Draws the two opening cards.
    ///
    /// # Errors
    ///
    /// Propagates any failure from [`Participant::draw`].
    pub fn initial_draw<S: CardSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<(), ActionError> {
        for _ in 0..INITIAL_CARDS {
            self.draw(source)?;
        }
        Ok(())
    }

    /// Stands on the current hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Terminal`] if the hand has already finished.
    pub fn stop(&mut self) -> Result<(), HandError> {
        self.hand.stop()?;
        debug!(participant = %self.name, score = self.hand.score(), "stopped");
        Ok(())
    }

    /// Discards the hand and any wager for a new round.
    pub(crate) fn reset(&mut self) {
        self.hand = Hand::new();
        if let Role::Gambler { wager } = &mut self.role {
            *wager = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::deck::StackedDeck;

    fn deck(ranks: &[Rank]) -> StackedDeck {
        StackedDeck::new(ranks.iter().map(|&rank| Card::new(Suit::Clubs, rank)))
    }

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(
            Name::new("   ").unwrap_err(),
            RosterError::BlankName {
                name: "   ".into()
            }
        );
        assert_eq!(Name::new(" pobi ").unwrap().as_str(), "pobi");
    }

    #[test]
    fn dealer_draws_on_sixteen_and_stands_on_seventeen() {
        let options = TableOptions::default();

        let mut dealer = Participant::dealer();
        dealer.initial_draw(&mut deck(&[Rank::Jack, Rank::Six])).unwrap();
        assert!(dealer.is_drawable(&options));

        let mut dealer = Participant::dealer();
        dealer.initial_draw(&mut deck(&[Rank::Jack, Rank::Seven])).unwrap();
        assert!(!dealer.is_drawable(&options));
    }

    #[test]
    fn dealer_hits_soft_seventeen_when_configured() {
        let mut dealer = Participant::dealer();
        dealer.initial_draw(&mut deck(&[Rank::Ace, Rank::Six])).unwrap();

        assert!(!dealer.is_drawable(&TableOptions::default()));
        assert!(dealer.is_drawable(&TableOptions::default().with_stand_on_soft_17(false)));
    }

    #[test]
    fn draw_ceiling_controls_hitting_on_twenty_one() {
        let mut gambler = Participant::gambler(Name::new("jason").unwrap());
        gambler
            .initial_draw(&mut deck(&[Rank::Seven, Rank::Seven]))
            .unwrap();
        gambler.draw(&mut deck(&[Rank::Seven])).unwrap();
        assert_eq!(gambler.hand().score(), 21);

        assert!(gambler.is_drawable(&TableOptions::default()));
        assert!(!gambler.is_drawable(
            &TableOptions::default().with_draw_ceiling(DrawCeiling::StopAtTwentyOne)
        ));
    }

    #[test]
    fn terminal_hand_does_not_consume_a_card() {
        let mut gambler = Participant::gambler(Name::new("pobi").unwrap());
        let mut source = deck(&[Rank::Ace, Rank::King, Rank::Two]);
        gambler.initial_draw(&mut source).unwrap();

        let err = gambler.draw(&mut source).unwrap_err();
        assert!(matches!(err, ActionError::Hand(HandError::Terminal { .. })));
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn dealer_cannot_wager() {
        let mut dealer = Participant::dealer();
        assert!(!dealer.set_wager(100));
        assert_eq!(dealer.wager(), None);
    }
}

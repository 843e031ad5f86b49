//! Card sources the table draws from.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use crate::card::{Card, DECK_SIZE, full_deck};
use crate::error::DrawError;

/// A supply of unique cards, drawn one at a time.
///
/// Implementations must never hand out the same card twice within a round;
/// the table does not re-check.
pub trait CardSource {
    /// Draws the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::ExhaustedSource`] if no cards remain.
    fn draw(&mut self) -> Result<Card, DrawError>;

    /// Returns the number of cards left to draw.
    fn remaining(&self) -> usize;
}

impl<S: CardSource + ?Sized> CardSource for &mut S {
    fn draw(&mut self) -> Result<Card, DrawError> {
        (**self).draw()
    }

    fn remaining(&self) -> usize {
        (**self).remaining()
    }
}

/// A single 52-card deck shuffled with a seeded RNG.
#[derive(Debug, Clone)]
pub struct ShuffledDeck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl ShuffledDeck {
    /// Creates a freshly shuffled deck from the given seed.
    ///
    /// The same seed always yields the same draw order.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::shuffled(&mut rng);
        Self { cards, rng }
    }

    fn shuffled(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        cards.extend(full_deck());
        cards.shuffle(rng);
        cards
    }

    /// Restores all 52 cards and shuffles them again, continuing the RNG stream.
    pub fn reshuffle(&mut self) {
        self.cards = Self::shuffled(&mut self.rng);
    }
}

impl CardSource for ShuffledDeck {
    fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop().ok_or_else(|| {
            warn!("shuffled deck exhausted");
            DrawError::ExhaustedSource
        })
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}

/// A deck that deals a fixed sequence of cards, first card first.
///
/// Useful for replaying a recorded round or pinning a scenario in tests.
#[derive(Debug, Clone, Default)]
pub struct StackedDeck {
    // Stored reversed so drawing is a pop.
    cards: Vec<Card>,
}

impl StackedDeck {
    /// Creates a deck that will deal `cards` in order.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Self { cards }
    }
}

impl CardSource for StackedDeck {
    fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop().ok_or_else(|| {
            warn!("stacked deck exhausted");
            DrawError::ExhaustedSource
        })
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}

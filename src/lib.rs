//! A dealer-versus-gamblers blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that seats one dealer and one to six
//! gamblers and runs a round: wagers, the opening deal, gambler hit/stand
//! turns, the dealer's forced draw, outcome resolution, and settlement.
//! Cards come from any [`CardSource`]; decisions from any [`DecisionSource`].
//!
//! # Example
//!
//! ```
//! use bjtable::{Action, ShuffledDeck, Table, TableOptions};
//!
//! let mut table = Table::new(["pobi", "jason"], TableOptions::default()).unwrap();
//! table.place_wager("pobi", 1000).unwrap();
//! table.place_wager("jason", 500).unwrap();
//!
//! let mut deck = ShuffledDeck::new(42);
//! table.initial_draw(&mut deck).unwrap();
//! let mut stand = |_: &str| Action::Stand;
//! table.play_gambler_turns(&mut stand, &mut deck).unwrap();
//! table.dealer_phase(&mut deck).unwrap();
//!
//! let ledger = table.settle().unwrap();
//! let gamblers: i64 = ledger.entries().iter().map(|entry| entry.payout).sum();
//! assert_eq!(ledger.dealer_net(), -gamblers);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod outcome;
pub mod participant;
pub mod result;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, full_deck};
pub use deck::{CardSource, ShuffledDeck, StackedDeck};
pub use error::{ActionError, DrawError, HandError, RosterError, ShowdownError, WagerError};
pub use hand::{BLACKJACK, Hand, HandStatus, best_score};
pub use ledger::{Ledger, LedgerEntry, payout};
pub use options::{DrawCeiling, RoundingMode, TableOptions};
pub use outcome::{Outcome, resolve};
pub use participant::{Action, DEALER_NAME, DecisionSource, Name, Participant, Role};
pub use result::{DealerRecord, PlayerResult, RoundResult};
pub use table::{MAX_GAMBLERS, MIN_GAMBLERS, Table, TableState};

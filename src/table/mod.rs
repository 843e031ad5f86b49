//! Table engine: roster, turn order and round flow.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;
use tracing::info;

use crate::error::RosterError;
use crate::options::TableOptions;
use crate::participant::{DEALER_NAME, Name, Participant};

mod deal;
mod dealer;
mod settle;
pub mod state;
mod turns;

pub use state::TableState;

/// Fewest gamblers a table seats.
pub const MIN_GAMBLERS: usize = 1;

/// Most gamblers a table seats.
pub const MAX_GAMBLERS: usize = 6;

/// A blackjack table: one dealer, one to six gamblers, and the round in play.
///
/// The roster is fixed at construction. Each round runs through
/// [`TableState`] in order: wagers, [`Table::initial_draw`], gambler turns,
/// [`Table::dealer_phase`], then [`Table::resolve_all`] and
/// [`Table::settle`]. [`Table::clear_round`] starts the next round with the
/// same roster.
#[derive(Debug, Clone)]
pub struct Table {
    dealer: Participant,
    /// Gamblers in seating order.
    gamblers: Vec<Participant>,
    options: TableOptions,
    state: TableState,
    /// Index into `gamblers` of the one whose turn it is.
    current: usize,
}

impl Table {
    /// Seats the dealer and the named gamblers.
    ///
    /// # Errors
    ///
    /// Returns a [`RosterError`] if a name is blank, a name is the dealer's
    /// reserved name, two names are equal, or there are not 1 to 6 names.
    pub fn new<I, N>(names: I, options: TableOptions) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let raw: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        let names = Self::validate_names(&raw)?;

        info!(gamblers = names.len(), "table seated");

        Ok(Self {
            dealer: Participant::dealer(),
            gamblers: names.into_iter().map(Participant::gambler).collect(),
            options,
            state: TableState::Betting,
            current: 0,
        })
    }

    fn validate_names(raw: &[String]) -> Result<Vec<Name>, RosterError> {
        let names = raw
            .iter()
            .map(|name| Name::new(name))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(name) = names.iter().find(|name| name.as_str() == DEALER_NAME) {
            return Err(RosterError::ReservedName {
                name: name.to_string(),
            });
        }

        // `seen` borrows `names` and must be dropped before `names` is returned.
        let unique = {
            let mut seen = HashSet::with_capacity(names.len());
            names.iter().all(|name| seen.insert(name.as_str()))
        };
        if !unique {
            return Err(RosterError::DuplicateNames {
                names: raw.to_vec(),
            });
        }

        if !(MIN_GAMBLERS..=MAX_GAMBLERS).contains(&names.len()) {
            return Err(RosterError::GamblerCount { count: names.len() });
        }

        Ok(names)
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn state(&self) -> TableState {
        self.state
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the gamblers in seating order.
    #[must_use]
    pub fn gamblers(&self) -> &[Participant] {
        &self.gamblers
    }

    /// Returns every participant, dealer first.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        core::iter::once(&self.dealer).chain(&self.gamblers)
    }

    /// Returns the participant called `name`, dealer included.
    #[must_use]
    pub fn participant(&self, name: &str) -> Option<&Participant> {
        self.participants().find(|participant| participant.name() == name)
    }

    fn gambler_index(&self, name: &str) -> Option<usize> {
        self.gamblers
            .iter()
            .position(|gambler| gambler.name() == name)
    }

    /// Discards every hand and wager and reopens betting.
    pub fn clear_round(&mut self) {
        self.dealer.reset();
        for gambler in &mut self.gamblers {
            gambler.reset();
        }
        self.current = 0;
        self.state = TableState::Betting;
    }
}

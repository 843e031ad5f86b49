use alloc::string::ToString;

use crate::card::Card;
use crate::deck::CardSource;
use crate::error::ActionError;
use crate::participant::{Action, DecisionSource};

use super::{Table, TableState};

impl Table {
    fn ensure_gambler_turn(&self, name: &str) -> Result<usize, ActionError> {
        if self.state != TableState::GamblerTurns {
            return Err(ActionError::InvalidState);
        }

        let index = self
            .gambler_index(name)
            .ok_or(ActionError::PlayerNotFound)?;
        if index != self.current {
            return Err(ActionError::NotYourTurn);
        }

        Ok(index)
    }

    /// Moves past every gambler who can no longer draw.
    ///
    /// A hand that is still playable but capped by the draw ceiling is stopped
    /// on the way. Once no gambler is left the dealer's turn begins.
    pub(super) fn advance_if_current_done(&mut self) -> Result<(), ActionError> {
        while let Some(gambler) = self.gamblers.get_mut(self.current) {
            if gambler.is_drawable(&self.options) {
                return Ok(());
            }
            if gambler.hand().is_playable() {
                gambler.stop()?;
            }
            self.current += 1;
        }

        self.state = TableState::DealerTurn;
        Ok(())
    }

    /// Returns the name of the gambler whose turn it is.
    ///
    /// Returns `None` outside the gambler turn phase.
    #[must_use]
    pub fn current_gambler(&self) -> Option<&str> {
        if self.state != TableState::GamblerTurns {
            return None;
        }
        self.gamblers.get(self.current).map(|gambler| gambler.name())
    }

    /// Gambler action: Hit (draw a card).
    ///
    /// # Errors
    ///
    /// Returns an error if gamblers are not acting, the gambler is unknown or
    /// it is not their turn, the hand is terminal, or the source is empty.
    pub fn hit<S: CardSource + ?Sized>(
        &mut self,
        name: &str,
        source: &mut S,
    ) -> Result<Card, ActionError> {
        let index = self.ensure_gambler_turn(name)?;
        let gambler = self
            .gamblers
            .get_mut(index)
            .ok_or(ActionError::PlayerNotFound)?;

        let card = gambler.draw(source)?;
        self.advance_if_current_done()?;

        Ok(card)
    }

    /// Gambler action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if gamblers are not acting, the gambler is unknown or
    /// it is not their turn, or the hand is terminal.
    pub fn stand(&mut self, name: &str) -> Result<(), ActionError> {
        let index = self.ensure_gambler_turn(name)?;
        self.gamblers
            .get_mut(index)
            .ok_or(ActionError::PlayerNotFound)?
            .stop()?;

        self.advance_if_current_done()
    }

    /// Runs every remaining gambler turn, asking `decisions` at each step.
    ///
    /// Does nothing if the deal already left no gambler able to act.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have not been dealt or the round is
    /// over, or if a hit fails.
    pub fn play_gambler_turns<D, S>(
        &mut self,
        decisions: &mut D,
        source: &mut S,
    ) -> Result<(), ActionError>
    where
        D: DecisionSource + ?Sized,
        S: CardSource + ?Sized,
    {
        match self.state {
            TableState::GamblerTurns => {}
            TableState::DealerTurn => return Ok(()),
            TableState::Betting | TableState::RoundOver => {
                return Err(ActionError::InvalidState);
            }
        }

        while let Some(name) = self.current_gambler().map(ToString::to_string) {
            self.take_action(&name, decisions.next_action(&name), source)?;
        }

        Ok(())
    }

    fn take_action<S: CardSource + ?Sized>(
        &mut self,
        name: &str,
        action: Action,
        source: &mut S,
    ) -> Result<(), ActionError> {
        match action {
            Action::Hit => self.hit(name, source).map(|_| ()),
            Action::Stand => self.stand(name),
        }
    }
}

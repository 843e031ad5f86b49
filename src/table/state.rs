//! Table state types.

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableState {
    /// Hands are empty and wagers are being taken.
    Betting,
    /// Gamblers act one at a time in seating order.
    GamblerTurns,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and results can be resolved and settled.
    RoundOver,
}

//! Table configuration options.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down (truncation for non-negative amounts).
    Down,
    /// Round to nearest.
    Nearest,
}

/// How far a gambler may keep drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DrawCeiling {
    /// Any hand that is neither bust nor stopped may draw, including 21.
    #[default]
    AnyNonBust,
    /// A hand reaching 21 is stopped automatically.
    StopAtTwentyOne,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::{DrawCeiling, TableOptions};
///
/// let options = TableOptions::default()
///     .with_blackjack_pays(1.5)
///     .with_stand_on_soft_17(true)
///     .with_draw_ceiling(DrawCeiling::StopAtTwentyOne);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Total at which the dealer stops drawing.
    pub dealer_stands_on: u8,
    /// Whether the dealer stands on a soft total equal to `dealer_stands_on`.
    pub stand_on_soft_17: bool,
    /// Drawing limit for gamblers.
    pub draw_ceiling: DrawCeiling,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            dealer_stands_on: 17,
            stand_on_soft_17: true,
            draw_ceiling: DrawCeiling::AnyNonBust,
        }
    }
}

impl TableOptions {
    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the total at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets whether dealer stands on soft 17.
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the gambler drawing limit.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{DrawCeiling, TableOptions};
    ///
    /// let options = TableOptions::default().with_draw_ceiling(DrawCeiling::StopAtTwentyOne);
    /// assert_eq!(options.draw_ceiling, DrawCeiling::StopAtTwentyOne);
    /// ```
    #[must_use]
    pub const fn with_draw_ceiling(mut self, ceiling: DrawCeiling) -> Self {
        self.draw_ceiling = ceiling;
        self
    }
}

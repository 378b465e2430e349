//! Turn result types reported to display code.

use crate::card::Card;

/// Outcome of a draw attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOutcome {
    /// The card added to the hand, or `None` if no card was available.
    pub card: Option<Card>,
    /// Number of discard-pile cards moved back into the draw pile, if a
    /// reshuffle was attempted because the draw pile was empty.
    pub reshuffled: Option<usize>,
}

/// What the active player did on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// A matching card was played from the hand.
    Played {
        /// Hand position the card was taken from.
        position: usize,
        /// The played card, now the table card.
        card: Card,
    },
    /// No card matched, so the player drew.
    Drew(DrawOutcome),
}

/// Report for a single completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Index of the player who took the turn.
    pub player: usize,
    /// The action taken.
    pub action: TurnAction,
    /// The table card after the turn.
    pub table_card: Option<Card>,
    /// The winner, if this turn ended the game.
    pub winner: Option<usize>,
}

/// Result of a game played to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    /// Index of the winning player.
    pub winner: usize,
    /// Number of turns played.
    pub turns: usize,
}

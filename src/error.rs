//! Error types for deck and game operations.

use thiserror::Error;

/// Errors that can occur while mutating a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The position does not name a card in the deck.
    #[error("position {position} is out of range for a deck of {len} cards")]
    PositionOutOfRange {
        /// The requested position, counted from the top.
        position: usize,
        /// The number of cards in the deck.
        len: usize,
    },
    /// Growing the deck's storage failed.
    #[error("failed to allocate deck storage")]
    AllocationFailed,
}

/// Errors that can occur while creating a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InitError {
    /// The pack count was zero.
    #[error("at least one pack is required")]
    NoPacks,
    /// A caller-arranged draw pile held no cards.
    #[error("the draw pile is empty")]
    EmptyDrawPile,
    /// Allocating the draw pile failed.
    #[error("failed to allocate the draw pile")]
    AllocationFailed,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Cards have already been dealt.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Growing a hand or the discard pile failed.
    #[error("failed to allocate while dealing")]
    AllocationFailed,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The hand position does not name a card.
    #[error("hand position out of range")]
    PositionOutOfRange,
    /// Growing the discard pile failed.
    #[error("failed to allocate the discard pile")]
    AllocationFailed,
}

/// Errors that can occur when drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Growing a hand or the draw pile failed.
    #[error("failed to allocate while drawing")]
    AllocationFailed,
}

/// Errors that can occur when reshuffling the discard pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Growing the draw pile failed.
    #[error("failed to allocate the draw pile")]
    AllocationFailed,
}

/// Errors that can occur while running a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The game is not in the playing state.
    #[error("invalid game state for a turn")]
    InvalidState,
    /// Neither player can match the table card and there is nothing left to
    /// draw, so no further turn can change the game.
    #[error("stalemate: neither player can play or draw")]
    Stalemate,
    /// Dealing the initial hands failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Playing the matching card failed.
    #[error(transparent)]
    Play(#[from] PlayError),
    /// Drawing a card failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

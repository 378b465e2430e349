//! A two-player suit-or-rank matching card game engine with optional
//! `no_std` support.
//!
//! The crate provides a [`Deck`] type with distinct top and bottom ends and
//! a [`Game`] type that deals, validates moves, draws with reshuffling, and
//! detects the winner. On each turn the active player plays the first card
//! in their hand that shares the table card's suit or rank, or draws one
//! card. The first player to empty their hand wins.
//!
//! The engine never prints; it reports through the [`log`] facade and
//! returns [`TurnReport`]s for display code to render.
//!
//! # Example
//!
//! ```
//! use suitmatch::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! game.deal_initial_cards().unwrap();
//! assert_eq!(game.players()[0].hand_size(), 8);
//!
//! let summary = game.run().unwrap();
//! assert_eq!(game.players()[summary.winner].hand_size(), 0);
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
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, PACK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    DealError, DeckError, DrawError, InitError, PlayError, ReshuffleError, TurnError,
};
pub use game::{Game, GameState, is_valid_move};
pub use options::{GameOptions, INITIAL_HAND_SIZE, NUM_PLAYERS};
pub use player::Player;
pub use result::{DrawOutcome, GameSummary, TurnAction, TurnReport};

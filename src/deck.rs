//! Ordered card collections with a top and a bottom end.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::collections::vec_deque::Iter;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, PACK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered sequence of cards.
///
/// Position 0 is the top card. Draws take from the top; hands grow at the
/// bottom so earlier cards keep their position. Every mutation that can grow
/// the deck reserves storage first, so a failed allocation leaves the deck
/// exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    /// Cards from top (front) to bottom (back).
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates a deck holding `packs` complete packs in generation order.
    ///
    /// Each pack lists every suit of [`Suit::ALL`] with ranks Two through Ace.
    /// The first generated card ends up on top. Zero packs yields an empty
    /// deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AllocationFailed`] if storage for the cards
    /// cannot be reserved.
    pub fn with_packs(packs: u8) -> Result<Self, DeckError> {
        let total = usize::from(packs) * PACK_SIZE;
        let mut cards = VecDeque::new();
        cards
            .try_reserve_exact(total)
            .map_err(|_| DeckError::AllocationFailed)?;

        for _ in 0..packs {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push_back(Card::new(suit, rank));
                }
            }
        }

        Ok(Self { cards })
    }

    /// Shuffles the deck in place with a Fisher-Yates pass.
    ///
    /// Decks with fewer than two cards are left untouched.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.cards.len() <= 1 {
            return;
        }
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Reserves room for at least `additional` more cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AllocationFailed`] if the storage cannot grow.
    pub fn reserve(&mut self, additional: usize) -> Result<(), DeckError> {
        self.cards
            .try_reserve(additional)
            .map_err(|_| DeckError::AllocationFailed)
    }

    /// Adds a card on top of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AllocationFailed`] if the storage cannot grow.
    pub fn insert_top(&mut self, card: Card) -> Result<(), DeckError> {
        self.reserve(1)?;
        self.cards.push_front(card);
        Ok(())
    }

    /// Adds a card at the bottom of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AllocationFailed`] if the storage cannot grow.
    pub fn insert_bottom(&mut self, card: Card) -> Result<(), DeckError> {
        self.reserve(1)?;
        self.cards.push_back(card);
        Ok(())
    }

    /// Removes and returns the top card, or `None` if the deck is empty.
    pub fn remove_top(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Removes and returns the bottom card, or `None` if the deck is empty.
    pub fn remove_bottom(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Removes and returns the card at `position`, counted from the top.
    ///
    /// Cards below the removed one move up by one; the relative order of
    /// the remaining cards is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::PositionOutOfRange`] if `position >= len()`.
    /// The deck is not modified in that case.
    pub fn remove_at(&mut self, position: usize) -> Result<Card, DeckError> {
        let len = self.cards.len();
        self.cards
            .remove(position)
            .ok_or(DeckError::PositionOutOfRange { position, len })
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek_top(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns the card at `position`, counted from the top.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Iterates over the cards from top to bottom.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }

    /// Sorts the deck into ascending card order (suit, then rank).
    ///
    /// The sort is stable, so duplicate cards from multiple packs keep their
    /// relative order.
    pub fn sort(&mut self) {
        self.cards.make_contiguous().sort();
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Deck {
    /// Builds a deck whose first yielded card is the top.
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Players and their hands.

extern crate alloc;

use alloc::string::String;

use crate::deck::Deck;

/// A player seated at the table.
///
/// The player owns its hand. Cards enter the hand at the bottom, so the
/// first card dealt stays at position 0 until the hand is sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name.
    name: String,
    /// Cards in the hand, top first.
    hand: Deck,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            hand: Deck::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Deck {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Deck {
        &mut self.hand
    }

    /// Returns the number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the player has no cards left, which wins the game.
    #[must_use]
    pub fn has_emptied_hand(&self) -> bool {
        self.hand.is_empty()
    }

    /// Sorts the hand into display order (suit, then rank).
    pub fn sort_hand(&mut self) {
        self.hand.sort();
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::card::{Card, Rank, Suit};

    #[test]
    fn new_player_has_empty_hand() {
        let player = Player::new("Player 1".to_string());
        assert_eq!(player.name(), "Player 1");
        assert_eq!(player.hand_size(), 0);
        assert!(player.has_emptied_hand());
    }

    #[test]
    fn sort_hand_reorders_cards() {
        let mut player = Player::new("Player 2".to_string());
        player
            .hand_mut()
            .insert_bottom(Card::new(Suit::Heart, Rank::Two))
            .unwrap();
        player
            .hand_mut()
            .insert_bottom(Card::new(Suit::Club, Rank::Ace))
            .unwrap();

        player.sort_hand();
        assert_eq!(
            player.hand().peek_top(),
            Some(&Card::new(Suit::Club, Rank::Ace))
        );
        assert!(!player.has_emptied_hand());
    }
}

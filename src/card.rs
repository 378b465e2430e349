//! Card types and labels.

use core::fmt;

/// Card suit.
///
/// The declaration order (Club, Spade, Heart, Diamond) is the ordering used
/// when sorting a hand for display. It has no meaning for play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Club,
    /// Spades.
    Spade,
    /// Hearts.
    Heart,
    /// Diamonds.
    Diamond,
}

impl Suit {
    /// All suits in pack generation order.
    pub const ALL: [Self; 4] = [Self::Club, Self::Spade, Self::Heart, Self::Diamond];

    /// Returns the label of the suit, for example `"Heart"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Club => "Club",
            Self::Spade => "Spade",
            Self::Heart => "Heart",
            Self::Diamond => "Diamond",
        }
    }
}

/// Card rank, from Two (lowest) to Ace (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Two.
    Two = 2,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in pack generation order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the label of the rank, for example `"Queen"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }
}

/// A playing card.
///
/// Cards compare by suit first, then by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns whether this card may be played on `table`, i.e. it shares
    /// the table card's suit or rank.
    #[must_use]
    pub fn matches(&self, table: &Self) -> bool {
        self.suit == table.suit || self.rank == table.rank
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit, self.rank)
    }
}

/// Number of cards per pack.
pub const PACK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn pack_size_is_fifty_two() {
        assert_eq!(PACK_SIZE, 52);
    }

    #[test]
    fn ordering_is_suit_then_rank() {
        let club_ace = Card::new(Suit::Club, Rank::Ace);
        let spade_two = Card::new(Suit::Spade, Rank::Two);
        let spade_king = Card::new(Suit::Spade, Rank::King);
        assert!(club_ace < spade_two);
        assert!(spade_two < spade_king);
        assert!(Suit::Heart < Suit::Diamond);
    }

    #[test]
    fn matches_on_suit_or_rank() {
        let table = Card::new(Suit::Heart, Rank::Two);
        assert!(Card::new(Suit::Heart, Rank::King).matches(&table));
        assert!(Card::new(Suit::Club, Rank::Two).matches(&table));
        assert!(!Card::new(Suit::Club, Rank::King).matches(&table));
    }

    #[test]
    fn labels() {
        assert_eq!(Card::new(Suit::Heart, Rank::Queen).to_string(), "Heart Queen");
        assert_eq!(Rank::Ten as u8, 10);
        assert_eq!(Rank::Ace as u8, 14);
    }
}

//! Deck property tests.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use suitmatch::{Card, Deck, DeckError, Game, GameOptions, Rank, Suit};

fn any_card() -> impl Strategy<Value = Card> {
    (0..Suit::ALL.len(), 0..Rank::ALL.len())
        .prop_map(|(suit, rank)| Card::new(Suit::ALL[suit], Rank::ALL[rank]))
}

fn sorted(deck: &Deck) -> Vec<Card> {
    let mut cards: Vec<Card> = deck.iter().copied().collect();
    cards.sort();
    cards
}

proptest! {
    #[test]
    fn shuffle_keeps_the_same_cards(cards in prop::collection::vec(any_card(), 0..120), seed: u64) {
        let mut deck: Deck = cards.iter().copied().collect();
        let before = sorted(&deck);

        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        prop_assert_eq!(deck.len(), cards.len());
        prop_assert_eq!(sorted(&deck), before);
    }

    #[test]
    fn remove_at_preserves_remaining_order(
        cards in prop::collection::vec(any_card(), 1..60),
        pick in any::<prop::sample::Index>(),
    ) {
        let position = pick.index(cards.len());
        let mut deck: Deck = cards.iter().copied().collect();

        let removed = deck.remove_at(position).unwrap();

        let mut expected = cards.clone();
        let expected_removed = expected.remove(position);
        prop_assert_eq!(removed, expected_removed);
        prop_assert_eq!(deck.len(), cards.len() - 1);
        prop_assert_eq!(deck.iter().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn remove_at_past_the_end_fails(cards in prop::collection::vec(any_card(), 0..30), extra in 0usize..5) {
        let mut deck: Deck = cards.iter().copied().collect();
        let position = cards.len() + extra;

        prop_assert_eq!(
            deck.remove_at(position),
            Err(DeckError::PositionOutOfRange { position, len: cards.len() })
        );
        prop_assert_eq!(deck.iter().copied().collect::<Vec<_>>(), cards);
    }

    #[test]
    fn inserts_grow_the_chosen_end(cards in prop::collection::vec(any_card(), 0..30), top in any_card(), bottom in any_card()) {
        let mut deck: Deck = cards.iter().copied().collect();

        deck.insert_top(top).unwrap();
        deck.insert_bottom(bottom).unwrap();

        prop_assert_eq!(deck.len(), cards.len() + 2);
        prop_assert_eq!(deck.remove_top(), Some(top));
        prop_assert_eq!(deck.remove_bottom(), Some(bottom));
        prop_assert_eq!(deck.iter().copied().collect::<Vec<_>>(), cards);
    }

    #[test]
    fn games_conserve_cards(seed: u64, packs in 1u8..4) {
        let options = GameOptions::default().with_packs(packs);
        let mut game = Game::new(options, seed).unwrap();
        game.deal_initial_cards().unwrap();

        while !game.is_over() {
            game.play_turn().unwrap();
            prop_assert_eq!(game.cards_in_play(), game.total_cards());
        }
        prop_assert!(game.winner().is_some());
    }
}

#[test]
fn packs_hold_every_card_once_per_pack() {
    let deck = Deck::with_packs(2).unwrap();
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let copies = deck
                .iter()
                .filter(|card| **card == Card::new(suit, rank))
                .count();
            assert_eq!(copies, 2);
        }
    }
}

use log::debug;

use crate::error::DealError;
use crate::options::INITIAL_HAND_SIZE;

use super::{Game, GameState};

impl Game {
    /// Deals the initial hands and flips the first table card.
    ///
    /// Cards go one at a time to each player in turn, taken from the top of
    /// the draw pile and added to the bottom of the hand. A dry draw pile
    /// simply stops the deal; it never triggers a reshuffle. The next card
    /// becomes the table card. Both hands are then sorted into display order
    /// (suit, then rank), and the game moves to [`GameState::Playing`].
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidState`] unless the game is in
    /// [`GameState::Dealing`], and [`DealError::AllocationFailed`] if a hand
    /// or the discard pile cannot grow. Nothing is dealt on error.
    pub fn deal_initial_cards(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        for player in &mut self.players {
            player
                .hand_mut()
                .reserve(INITIAL_HAND_SIZE)
                .map_err(|_| DealError::AllocationFailed)?;
        }
        self.discard_pile
            .reserve(1)
            .map_err(|_| DealError::AllocationFailed)?;

        for _ in 0..INITIAL_HAND_SIZE {
            for player in &mut self.players {
                let Some(card) = self.draw_pile.remove_top() else {
                    break;
                };
                player
                    .hand_mut()
                    .insert_bottom(card)
                    .map_err(|_| DealError::AllocationFailed)?;
            }
        }

        if let Some(card) = self.draw_pile.remove_top() {
            self.discard_pile
                .insert_top(card)
                .map_err(|_| DealError::AllocationFailed)?;
            self.table_card = Some(card);
        }

        for player in &mut self.players {
            player.sort_hand();
        }

        debug!(
            "dealt {} and {} cards, table card {:?}, {} left to draw",
            self.players[0].hand_size(),
            self.players[1].hand_size(),
            self.table_card,
            self.draw_pile.len()
        );

        self.state = GameState::Playing;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::card::PACK_SIZE;
    use crate::error::DealError;
    use crate::options::{GameOptions, INITIAL_HAND_SIZE};

    use crate::game::{Game, GameState};

    #[test]
    fn deal_fills_both_hands_and_flips_table_card() {
        let mut game = Game::new(GameOptions::default(), 3).unwrap();
        let top_before = *game.draw_pile().peek_top().unwrap();

        game.deal_initial_cards().unwrap();

        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.players()[0].hand_size(), INITIAL_HAND_SIZE);
        assert_eq!(game.players()[1].hand_size(), INITIAL_HAND_SIZE);
        assert_eq!(game.draw_pile_len(), PACK_SIZE - 2 * INITIAL_HAND_SIZE - 1);
        assert_eq!(game.discard_pile_len(), 1);
        assert_eq!(game.discard_pile().peek_top().copied(), game.table_card());
        assert!(game.players()[0].hand().iter().any(|card| *card == top_before));
        for player in game.players() {
            assert!(player.hand().iter().is_sorted());
        }
    }

    #[test]
    fn deal_twice_is_rejected() {
        let mut game = Game::new(GameOptions::default(), 3).unwrap();
        game.deal_initial_cards().unwrap();
        let draw_before = game.draw_pile_len();

        assert_eq!(game.deal_initial_cards(), Err(DealError::InvalidState));
        assert_eq!(game.draw_pile_len(), draw_before);
    }
}

use log::{debug, info};

use crate::card::Card;
use crate::error::{DrawError, PlayError, ReshuffleError};
use crate::result::DrawOutcome;

use super::{Game, is_valid_move};

impl Game {
    /// Returns the hand position of the first card in `seat`'s hand that
    /// matches the table card.
    ///
    /// The hand is scanned from the top, and the first match wins whether it
    /// matches by suit or by rank. Returns `None` if nothing matches, if
    /// there is no table card yet, or if `seat` is not a player.
    #[must_use]
    pub fn find_matching_card(&self, seat: usize) -> Option<usize> {
        let table_card = self.table_card?;
        self.players
            .get(seat)?
            .hand()
            .iter()
            .position(|card| is_valid_move(card, &table_card))
    }

    /// Plays the card at `position` in `seat`'s hand.
    ///
    /// The card becomes the table card and goes on top of the discard pile.
    /// The move is not checked against the table card; see
    /// [`Game::find_matching_card`].
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::PlayerNotFound`] for an unknown seat,
    /// [`PlayError::PositionOutOfRange`] if `position` does not name a card
    /// in the hand, and [`PlayError::AllocationFailed`] if the discard pile
    /// cannot grow. The game is unchanged on error.
    pub fn play_card(&mut self, seat: usize, position: usize) -> Result<Card, PlayError> {
        let player = self
            .players
            .get_mut(seat)
            .ok_or(PlayError::PlayerNotFound)?;

        if position >= player.hand_size() {
            return Err(PlayError::PositionOutOfRange);
        }

        self.discard_pile
            .reserve(1)
            .map_err(|_| PlayError::AllocationFailed)?;

        let card = player
            .hand_mut()
            .remove_at(position)
            .map_err(|_| PlayError::PositionOutOfRange)?;
        self.discard_pile
            .insert_top(card)
            .map_err(|_| PlayError::AllocationFailed)?;
        self.table_card = Some(card);

        debug!("{} played {card}", player.name());
        Ok(card)
    }

    /// Draws one card for `seat`, reshuffling first if the draw pile is
    /// empty.
    ///
    /// If no card is available even after the reshuffle attempt (the discard
    /// pile holds only the table card), nothing is drawn. That is a normal
    /// outcome, reported as `card: None`.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::PlayerNotFound`] for an unknown seat and
    /// [`DrawError::AllocationFailed`] if the draw pile or the hand cannot
    /// grow.
    pub fn draw_card_for_player(&mut self, seat: usize) -> Result<DrawOutcome, DrawError> {
        if seat >= self.players.len() {
            return Err(DrawError::PlayerNotFound);
        }

        let reshuffled = if self.draw_pile.is_empty() {
            Some(
                self.reshuffle_draw_pile()
                    .map_err(|_| DrawError::AllocationFailed)?,
            )
        } else {
            None
        };

        let player = self
            .players
            .get_mut(seat)
            .ok_or(DrawError::PlayerNotFound)?;
        player
            .hand_mut()
            .reserve(1)
            .map_err(|_| DrawError::AllocationFailed)?;

        let card = self.draw_pile.remove_top();
        if let Some(card) = card {
            player
                .hand_mut()
                .insert_bottom(card)
                .map_err(|_| DrawError::AllocationFailed)?;
            debug!("{} drew {card}", player.name());
        } else {
            debug!("{} had nothing to draw", player.name());
        }

        Ok(DrawOutcome { card, reshuffled })
    }

    /// Moves every discarded card except the table card back into the draw
    /// pile, then shuffles the draw pile.
    ///
    /// Cards leave from the bottom of the discard pile (oldest first) and
    /// join the bottom of the draw pile, so the table card on top is never
    /// touched. Returns the number of cards moved, which is 0 when the
    /// discard pile holds one card or none.
    ///
    /// # Errors
    ///
    /// Returns [`ReshuffleError::AllocationFailed`] if the draw pile cannot
    /// grow. Both piles are unchanged on error.
    pub fn reshuffle_draw_pile(&mut self) -> Result<usize, ReshuffleError> {
        if self.discard_pile.len() <= 1 {
            debug!("nothing to reshuffle");
            return Ok(0);
        }

        let moving = self.discard_pile.len() - 1;
        self.draw_pile
            .reserve(moving)
            .map_err(|_| ReshuffleError::AllocationFailed)?;

        for _ in 0..moving {
            let Some(card) = self.discard_pile.remove_bottom() else {
                break;
            };
            self.draw_pile
                .insert_bottom(card)
                .map_err(|_| ReshuffleError::AllocationFailed)?;
        }
        self.draw_pile.shuffle(&mut self.rng);

        info!(
            "reshuffled {moving} cards, draw pile now has {}",
            self.draw_pile.len()
        );
        Ok(moving)
    }
}

use log::{info, trace};

use crate::error::TurnError;
use crate::options::NUM_PLAYERS;
use crate::player::Player;
use crate::result::{GameSummary, TurnAction, TurnReport};

use super::{Game, GameState};

impl Game {
    /// Passes the turn to the other player.
    pub fn next_turn(&mut self) {
        self.current_player = (self.current_player + 1) % NUM_PLAYERS;
        trace!("turn passes to seat {}", self.current_player);
    }

    /// Returns whether any player has emptied their hand.
    #[must_use]
    pub fn check_game_over(&self) -> bool {
        self.players.iter().any(Player::has_emptied_hand)
    }

    /// Returns whether the game can no longer change: no hand is empty,
    /// neither player holds a card matching the table card (or there is no
    /// table card), and nothing can be drawn even after a reshuffle.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        let nothing_to_draw = self.draw_pile.is_empty() && self.discard_pile.len() <= 1;
        nothing_to_draw
            && !self.check_game_over()
            && (0..NUM_PLAYERS).all(|seat| self.find_matching_card(seat).is_none())
    }

    /// Plays one turn for the current player.
    ///
    /// The hand is first sorted into display order (suit, then rank), so the
    /// lowest matching card in that order is played. Without a match the
    /// player draws one card, reshuffling the discard pile if needed; a
    /// drawn card is not played until a later turn, and the hand is sorted
    /// again after it. If a hand is then empty the game ends, otherwise the
    /// turn passes.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::InvalidState`] unless the game is in
    /// [`GameState::Playing`], [`TurnError::Stalemate`] if
    /// [`Game::is_stalemate`] holds, or the underlying play or draw error.
    /// The game is unchanged when a stalemate is reported.
    pub fn play_turn(&mut self) -> Result<TurnReport, TurnError> {
        if self.state != GameState::Playing {
            return Err(TurnError::InvalidState);
        }
        if self.is_stalemate() {
            return Err(TurnError::Stalemate);
        }

        let seat = self.current_player;
        self.players[seat].sort_hand();

        let action = match self.find_matching_card(seat) {
            Some(position) => {
                let card = self.play_card(seat, position)?;
                TurnAction::Played { position, card }
            }
            None => {
                let outcome = self.draw_card_for_player(seat)?;
                if outcome.card.is_some() {
                    self.players[seat].sort_hand();
                }
                TurnAction::Drew(outcome)
            }
        };
        self.turns += 1;

        let winner = if self.check_game_over() {
            let winner = if self.players[seat].has_emptied_hand() {
                seat
            } else {
                (seat + 1) % NUM_PLAYERS
            };
            self.state = GameState::GameOver;
            self.winner = Some(winner);
            info!(
                "{} wins after {} turns",
                self.players[winner].name(),
                self.turns
            );
            Some(winner)
        } else {
            self.next_turn();
            None
        };

        Ok(TurnReport {
            player: seat,
            action,
            table_card: self.table_card,
            winner,
        })
    }

    /// Deals if needed, then plays turns until a player empties their hand.
    ///
    /// Returns immediately if the game is already over.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::Stalemate`] once neither player can play or draw,
    /// otherwise the first deal, play, or draw error encountered.
    pub fn run(&mut self) -> Result<GameSummary, TurnError> {
        if self.state == GameState::Dealing {
            self.deal_initial_cards()?;
        }

        loop {
            if let Some(winner) = self.winner {
                return Ok(GameSummary {
                    winner,
                    turns: self.turns,
                });
            }
            self.play_turn()?;
        }
    }
}

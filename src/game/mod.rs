//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::InitError;
use crate::options::{GameOptions, NUM_PLAYERS};
use crate::player::Player;

mod actions;
mod deal;
pub mod state;
mod turn;

pub use state::GameState;

/// Returns whether `card` may be played on `table_card`: the two share a
/// suit or a rank.
#[must_use]
pub fn is_valid_move(card: &Card, table_card: &Card) -> bool {
    card.matches(table_card)
}

/// A two-player matching game engine.
///
/// The game owns both players, the face-down draw pile, and the face-up
/// discard pile whose top card is the table card. All mutation goes through
/// the engine's operations; display code reads state through the query
/// methods and the [`TurnReport`](crate::TurnReport)s returned by
/// [`Game::play_turn`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Players, indexed by seat.
    players: [Player; NUM_PLAYERS],
    /// Face-down cards players draw from. Top is drawn first.
    draw_pile: Deck,
    /// Face-up played cards. Top is the table card.
    discard_pile: Deck,
    /// The card new plays must match.
    table_card: Option<Card>,
    /// Seat of the player to act.
    current_player: usize,
    /// Current game state.
    state: GameState,
    /// Seat of the winner once the game is over.
    winner: Option<usize>,
    /// Cards in the game, fixed at construction.
    total_cards: usize,
    /// Completed turns.
    turns: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a shuffled draw pile of `options.packs` packs.
    ///
    /// Both hands and the discard pile start empty; player 0 acts first once
    /// the cards are dealt.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::NoPacks`] if `options.packs` is zero and
    /// [`InitError::AllocationFailed`] if the draw pile cannot be allocated.
    ///
    /// # Example
    ///
    /// ```
    /// use suitmatch::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.state(), GameState::Dealing);
    /// assert_eq!(game.draw_pile_len(), 52);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, InitError> {
        if options.packs == 0 {
            return Err(InitError::NoPacks);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut draw_pile =
            Deck::with_packs(options.packs).map_err(|_| InitError::AllocationFailed)?;
        draw_pile.shuffle(&mut rng);

        Ok(Self::assemble(options, draw_pile, rng))
    }

    /// Creates a game over a caller-arranged draw pile, which is not
    /// shuffled. Position 0 of `draw_pile` is the first card dealt.
    ///
    /// `options.packs` is ignored; the card total is the pile's length.
    /// The seed only drives later reshuffles.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::EmptyDrawPile`] if `draw_pile` holds no cards.
    pub fn with_draw_pile(
        options: GameOptions,
        seed: u64,
        draw_pile: Deck,
    ) -> Result<Self, InitError> {
        if draw_pile.is_empty() {
            return Err(InitError::EmptyDrawPile);
        }

        Ok(Self::assemble(
            options,
            draw_pile,
            ChaCha8Rng::seed_from_u64(seed),
        ))
    }

    fn assemble(options: GameOptions, draw_pile: Deck, rng: ChaCha8Rng) -> Self {
        let [first, second] = options.player_names.clone();
        let total_cards = draw_pile.len();

        Self {
            options,
            players: [Player::new(first), Player::new(second)],
            draw_pile,
            discard_pile: Deck::new(),
            table_card: None,
            current_player: 0,
            state: GameState::Dealing,
            winner: None,
            total_cards,
            turns: 0,
            rng,
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether a player has won.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Returns the winner's seat once the game is over.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Returns the seat of the player to act.
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current_player
    }

    /// Returns the table card, or `None` before one has been flipped.
    #[must_use]
    pub const fn table_card(&self) -> Option<Card> {
        self.table_card
    }

    /// Returns the player in `seat`.
    #[must_use]
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns both players.
    #[must_use]
    pub const fn players(&self) -> &[Player; NUM_PLAYERS] {
        &self.players
    }

    /// Returns the draw pile.
    #[must_use]
    pub const fn draw_pile(&self) -> &Deck {
        &self.draw_pile
    }

    /// Returns the discard pile.
    #[must_use]
    pub const fn discard_pile(&self) -> &Deck {
        &self.discard_pile
    }

    /// Returns the number of cards in the draw pile.
    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Returns the number of cards in the discard pile.
    #[must_use]
    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Returns the number of cards the game was created with.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Counts the cards currently in both piles and both hands.
    ///
    /// This always equals [`Game::total_cards`].
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.players.iter().map(Player::hand_size).sum::<usize>()
    }

    /// Returns the number of completed turns.
    #[must_use]
    pub const fn turns_played(&self) -> usize {
        self.turns
    }
}

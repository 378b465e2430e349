//! Game configuration options.

extern crate alloc;

use alloc::string::String;

/// Number of players at the table.
pub const NUM_PLAYERS: usize = 2;

/// Number of cards dealt to each player before the first turn.
pub const INITIAL_HAND_SIZE: usize = 8;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use suitmatch::GameOptions;
///
/// let options = GameOptions::default()
///     .with_packs(2)
///     .with_player_names("Ada", "Grace");
/// assert_eq!(options.packs, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of 52-card packs in the draw pile. Zero is rejected by
    /// [`Game::new`](crate::Game::new).
    pub packs: u8,
    /// Display names, indexed by player.
    pub player_names: [String; NUM_PLAYERS],
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            packs: 1,
            player_names: [String::from("Player 1"), String::from("Player 2")],
        }
    }
}

impl GameOptions {
    /// Sets the number of packs.
    ///
    /// # Example
    ///
    /// ```
    /// use suitmatch::GameOptions;
    ///
    /// let options = GameOptions::default().with_packs(3);
    /// assert_eq!(options.packs, 3);
    /// ```
    #[must_use]
    pub fn with_packs(mut self, packs: u8) -> Self {
        self.packs = packs;
        self
    }

    /// Sets both player names.
    ///
    /// # Example
    ///
    /// ```
    /// use suitmatch::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_names("North", "South");
    /// assert_eq!(options.player_names[1], "South");
    /// ```
    #[must_use]
    pub fn with_player_names(
        mut self,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        self.player_names = [first.into(), second.into()];
        self
    }
}

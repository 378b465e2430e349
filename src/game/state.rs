//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Piles are built; initial hands have not been dealt yet.
    Dealing,
    /// Players take turns.
    Playing,
    /// A player has emptied their hand. Terminal.
    GameOver,
}

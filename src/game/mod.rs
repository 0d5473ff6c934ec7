//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::PACK_SIZE;
use crate::deck::Deck;
use crate::error::OptionsError;
use crate::options::GameOptions;

mod deal;
mod play;
pub mod state;
pub mod turn;

pub use state::{GameState, Player};

/// Returns whether either hand has run out of cards.
#[must_use]
pub fn is_game_finished(first: &Deck, second: &Deck) -> bool {
    first.is_empty() || second.is_empty()
}

/// A two-player matching game that owns the piles, the hands and the
/// random source.
///
/// Use [`GameOptions`] to configure the number of packs and the deal.
pub struct Game {
    /// Face-down pile that players draw from.
    pub draw_pile: Deck,
    /// Face-up pile of played cards; its top is the card to match.
    pub discard_pile: Deck,
    /// Player hands, indexed by [`Player::index`].
    pub hands: [Deck; 2],
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Player whose turn is next.
    current: Player,
    /// Player who emptied their hand.
    winner: Option<Player>,
    /// Turns taken so far.
    turns: usize,
    /// Reference cards drawn onto an empty discard pile and left out of play.
    retired: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed and a shuffled draw pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use matchdeck::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.draw_pile.len(), 52);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut draw_pile = Deck::initialize(options.packs);
        draw_pile.shuffle(&mut rng);
        log::info!(
            "shuffled {} cards from {} pack(s)",
            draw_pile.len(),
            options.packs
        );

        Ok(Self {
            draw_pile,
            discard_pile: Deck::new(),
            hands: [Deck::new(), Deck::new()],
            options,
            state: GameState::Dealing,
            current: Player::One,
            winner: None,
            turns: 0,
            retired: 0,
            rng,
        })
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player whose turn is next.
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.current
    }

    /// Returns the player who emptied their hand, once the game is finished.
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the hand of `player`.
    #[must_use]
    pub const fn hand(&self, player: Player) -> &Deck {
        &self.hands[player.index()]
    }

    /// Returns whether either hand is empty.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        let [first, second] = &self.hands;
        is_game_finished(first, second)
    }

    /// Returns the number of turns taken.
    #[must_use]
    pub const fn turns(&self) -> usize {
        self.turns
    }

    /// Returns the number of reference cards retired from play.
    #[must_use]
    pub const fn retired(&self) -> usize {
        self.retired
    }

    /// Returns the number of cards in the draw pile, the discard pile and
    /// both hands.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.hands.iter().map(Deck::len).sum::<usize>()
    }

    /// Returns the number of cards the game started with.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.options.packs as usize * PACK_SIZE
    }
}

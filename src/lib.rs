//! A two-player card matching game engine with optional `no_std` support.
//!
//! Players take turns laying a card that matches the top of the discard pile
//! by rank or by suit, drawing from the draw pile when they cannot. The first
//! player to empty their hand wins. The crate provides a [`Game`] type that
//! owns the piles, the hands and the random source, and a free
//! [`take_turn`] resolver that works on bare [`Deck`]s.
//!
//! # Example
//!
//! ```
//! use matchdeck::{Game, GameOptions};
//!
//! let options = GameOptions::default().with_packs(2);
//! let mut game = Game::new(options, 42).unwrap();
//! game.deal().unwrap();
//! let result = game.play_to_end(|_, _| {});
//! let _ = result;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, PACK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, OptionsError, TurnError};
pub use game::turn::{can_play, take_turn};
pub use game::{Game, GameState, Player, is_game_finished};
pub use options::{DEFAULT_HAND_SIZE, GameOptions, MAX_PACKS, MIN_PACKS};
pub use result::{GameResult, Reference, TurnAction, TurnReport};

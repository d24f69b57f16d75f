//! Non-transitive dice under a commit-reveal fairness protocol.
//!
//! The program and the player jointly produce every random outcome that
//! affects the game: the program commits to a secret draw with an
//! HMAC-SHA3-256 tag, the player contributes a summand, and the result is
//! the modular sum. After each round the key and draw are disclosed, so the
//! full transcript is verifiable by anyone.
//!
//! ## Determinism requirements
//! - All player-visible output goes through the [`console::Console`]
//!   channel; the logger never carries game state.
//! - Randomness comes only from the [`rng::Entropy`] source owned by the
//!   game controller; no process-wide generator.
//!
//! The primary entrypoint is [`game::Game`].

pub mod commitment;
pub mod console;
pub mod dice;
pub mod game;
pub mod protocol;
pub mod rng;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

#[cfg(test)]
mod scenario_tests;

pub use dice::{parse_dice, ConfigError, Die};
pub use game::{Game, GameError, Outcome};
pub use protocol::{fair_value, verify_round, FairOutcome, RoundStyle, RoundTranscript};
pub use rng::{Entropy, KEY_LEN};

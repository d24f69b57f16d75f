//! The two-party fair-value protocol.
//!
//! One round produces an integer in `[0, n)` that neither side can bias.
//! The program draws `c` and commits to it before the player contributes
//! `u`; the result is `r = (c + u) mod n`. Because the tag binds `c` before
//! `u` is known, the program cannot adapt its draw to the player's choice.
//! Because `u -> (c + u) mod n` is a bijection on `[0, n)` for any fixed
//! `c`, a player drawing `u` uniformly forces `r` uniform regardless of
//! `c`. Either party acting honestly suffices.
//!
//! Message order within a round is load-bearing and must not change:
//!
//! 1. range + base64 HMAC tag
//! 2. prompt for the player's number (re-prompted until valid)
//! 3. the program's number + base64 key
//! 4. the modular sum (roll rounds only; the first-move round announces
//!    the outcome as who goes first instead)

use std::io;

use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::commitment;
use crate::console::Console;
use crate::rng::Entropy;

/// Wording used for the prompt and reveal lines of a round.
///
/// The first-move round keeps the original guess wording; roll rounds use
/// the modular wording. The protocol steps are identical in both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStyle {
    /// `Try to guess my selection: (0 or 1)` / `My selection: ...`
    Guess,
    /// `Select a number between 0 and <n-1> (mod <n>):` / `My number is ...`
    Modulo,
}

/// Everything disclosed during one round, in disclosure order.
///
/// Sufficient to re-verify the round: recompute the tag from the key and
/// the committed value, and check the modular sum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundTranscript {
    pub bound: u32,
    pub tag_b64: String,
    pub player: u32,
    pub committed: u32,
    pub key_b64: String,
    pub result: u32,
}

/// Result of one fair-value round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FairOutcome {
    /// The jointly produced value, `(committed + player) mod bound`.
    pub value: u32,
    pub transcript: RoundTranscript,
}

/// Run one fair-value round over the console.
///
/// `bound` must be nonzero. `bound == 1` short-circuits the prompt (the
/// only possible contribution is 0) but still commits and discloses a
/// tag/key pair so the transcript shape stays uniform.
pub fn fair_value<R, C>(
    entropy: &mut Entropy<R>,
    console: &mut C,
    bound: u32,
    style: RoundStyle,
) -> io::Result<FairOutcome>
where
    R: RngCore + CryptoRng,
    C: Console,
{
    let committed = entropy.next_int(bound);
    let key = entropy.fresh_key();
    let tag_b64 = commitment::encode(&commitment::commit(&key, u64::from(committed)));
    console.write_line(&format!(
        "I selected a random value in the range 0..{} (HMAC={}).",
        bound - 1,
        tag_b64
    ))?;

    let player = if bound > 1 {
        prompt_contribution(console, bound, style)?
    } else {
        0
    };

    let key_b64 = commitment::encode(&key);
    match style {
        RoundStyle::Guess => {
            console.write_line(&format!("My selection: {} (KEY={}).", committed, key_b64))?
        }
        RoundStyle::Modulo => {
            console.write_line(&format!("My number is {} (KEY={}).", committed, key_b64))?
        }
    }

    // u64 arithmetic: committed + player can exceed u32 for large bounds.
    let result = ((u64::from(committed) + u64::from(player)) % u64::from(bound)) as u32;
    if style == RoundStyle::Modulo {
        console.write_line(&format!(
            "The fair number generation result is {} + {} = {} (mod {}).",
            committed, player, result, bound
        ))?;
    }
    debug!(bound, committed, player, result, "fair value round");

    Ok(FairOutcome {
        value: result,
        transcript: RoundTranscript {
            bound,
            tag_b64,
            player,
            committed,
            key_b64,
            result,
        },
    })
}

/// Prompt until the player supplies a decimal integer in `[0, bound)`.
/// Invalid input never advances state.
fn prompt_contribution<C: Console>(
    console: &mut C,
    bound: u32,
    style: RoundStyle,
) -> io::Result<u32> {
    loop {
        match style {
            RoundStyle::Guess => console.write_line("Try to guess my selection: (0 or 1)")?,
            RoundStyle::Modulo => console.write_line(&format!(
                "Select a number between 0 and {} (mod {}):",
                bound - 1,
                bound
            ))?,
        }
        let line = console.read_line()?;
        if let Ok(value) = line.parse::<u32>() {
            if value < bound {
                return Ok(value);
            }
        }
        console.write_line("Invalid selection.")?;
    }
}

/// Verify one disclosed round from its transcript alone.
pub fn verify_round(transcript: &RoundTranscript) -> bool {
    let Some(key) = commitment::decode(&transcript.key_b64) else {
        return false;
    };
    let sum = (u64::from(transcript.committed) + u64::from(transcript.player))
        % u64::from(transcript.bound.max(1));
    transcript.bound > 0
        && transcript.player < transcript.bound
        && transcript.committed < transcript.bound
        && u64::from(transcript.result) == sum
        && commitment::verify(&key, u64::from(transcript.committed), &transcript.tag_b64)
}

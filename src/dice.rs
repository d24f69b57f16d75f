//! Dice configuration: the [`Die`] type and command-line parsing.
//!
//! Argument format: one positional argument per die, each a comma-separated
//! list of exactly six integers, e.g. `2,2,4,4,9,9`. At least three dice are
//! required. Any face count other than six is rejected.

use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// Number of faces on every die.
pub const FACES: usize = 6;

/// Minimum number of dice required for a meaningful game.
pub const MIN_DICE: usize = 3;

/// A six-faced die. Faces are arbitrary integers; duplicates are allowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Die {
    faces: [i32; FACES],
}

impl Die {
    pub fn new(faces: [i32; FACES]) -> Self {
        Self { faces }
    }

    /// Face at `index`, which must be in `[0, FACES)`.
    pub fn face(&self, index: usize) -> i32 {
        self.faces[index]
    }

    pub fn faces(&self) -> &[i32; FACES] {
        &self.faces
    }
}

impl fmt::Display for Die {
    /// Renders `[2, 2, 4, 4, 9, 9]`, the format every transcript line uses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, face) in self.faces.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", face)?;
        }
        write!(f, "]")
    }
}

/// Errors in the dice configuration supplied on the command line.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least {MIN_DICE} dice configurations are required, got {0}")]
    NotEnoughDice(usize),
    #[error("dice #{index} has {count} faces, each dice must have {FACES}")]
    WrongFaceCount { index: usize, count: usize },
    #[error("dice #{index} contains a non-integer face")]
    BadFace {
        index: usize,
        #[source]
        source: ParseIntError,
    },
}

/// Parse one die per argument.
///
/// Faces must fit a signed 32-bit integer. `index` in errors is 1-based, as
/// shown to the user.
pub fn parse_dice(args: &[String]) -> Result<Vec<Die>, ConfigError> {
    if args.len() < MIN_DICE {
        return Err(ConfigError::NotEnoughDice(args.len()));
    }
    let mut dice = Vec::with_capacity(args.len());
    for (position, arg) in args.iter().enumerate() {
        let index = position + 1;
        let parts: Vec<&str> = arg.split(',').collect();
        if parts.len() != FACES {
            return Err(ConfigError::WrongFaceCount {
                index,
                count: parts.len(),
            });
        }
        let mut faces = [0i32; FACES];
        for (slot, part) in faces.iter_mut().zip(parts) {
            *slot = part
                .parse()
                .map_err(|source| ConfigError::BadFace { index, source })?;
        }
        dice.push(Die::new(faces));
    }
    Ok(dice)
}

//! Game controller: an explicit phase machine over the fair-value protocol.
//!
//! Phase diagram:
//!
//! ```text
//! FirstMove -> {PlayerPicks, ProgramPicks}
//! PlayerPicks -> ProgramPicksRemaining -> RollProgram -> RollPlayer -> Decide -> End
//! ProgramPicks -> PlayerPicksRemaining -> RollProgram -> RollPlayer -> Decide -> End
//! ```
//!
//! plus `End(Aborted)` when the player types the exit sentinel at a dice
//! prompt. Three fair-value rounds run per game: the first-move coin
//! (bound 2), then one roll per side (bound 6, program's die first). The
//! controller records every round transcript for after-the-fact
//! verification.

use std::cmp::Ordering;
use std::io;

use rand::{CryptoRng, RngCore};
use thiserror::Error;
use tracing::{debug, info};

use crate::console::Console;
use crate::dice::{Die, FACES};
use crate::protocol::{fair_value, RoundStyle, RoundTranscript};
use crate::rng::Entropy;

const HELP_TEXT: [&str; 2] = [
    "Hint: Your goal is to select a die that has a statistical advantage over the computer's choice.",
    "Each die has different probabilities of rolling higher numbers. Think strategically!",
];

#[derive(Debug, Error)]
pub enum GameError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Final result of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    PlayerWins,
    ProgramWins,
    Tie,
    /// Player typed the exit sentinel at a dice prompt.
    Aborted,
}

/// Where the controller currently is in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    FirstMove,
    PlayerPicks,
    ProgramPicksRemaining,
    ProgramPicks,
    PlayerPicksRemaining,
    RollProgram,
    RollPlayer,
    Decide,
    End(Outcome),
}

/// One game between the program and the player.
///
/// Owns the entropy source for the duration of the game; dice move from
/// the pool to a side on selection and never back.
pub struct Game<'a, R: RngCore + CryptoRng, C: Console> {
    entropy: Entropy<R>,
    console: &'a mut C,
    pool: Vec<Die>,
    program_die: Option<Die>,
    player_die: Option<Die>,
    program_roll: Option<i32>,
    player_roll: Option<i32>,
    transcripts: Vec<RoundTranscript>,
}

impl<'a, R: RngCore + CryptoRng, C: Console> Game<'a, R, C> {
    /// `dice` must already be validated (>= 3 dice, 6 faces each).
    pub fn new(entropy: Entropy<R>, console: &'a mut C, dice: Vec<Die>) -> Self {
        Self {
            entropy,
            console,
            pool: dice,
            program_die: None,
            player_die: None,
            program_roll: None,
            player_roll: None,
            transcripts: Vec::new(),
        }
    }

    /// Play the game to completion (or player abort).
    pub fn run(&mut self) -> Result<Outcome, GameError> {
        let mut phase = Phase::FirstMove;
        loop {
            phase = match phase {
                Phase::FirstMove => self.first_move()?,
                Phase::PlayerPicks => match self.player_pick()? {
                    true => Phase::ProgramPicksRemaining,
                    false => Phase::End(Outcome::Aborted),
                },
                Phase::ProgramPicksRemaining => {
                    self.program_pick()?;
                    Phase::RollProgram
                }
                Phase::ProgramPicks => {
                    self.program_pick()?;
                    Phase::PlayerPicksRemaining
                }
                Phase::PlayerPicksRemaining => match self.player_pick()? {
                    true => Phase::RollProgram,
                    false => Phase::End(Outcome::Aborted),
                },
                Phase::RollProgram => {
                    let die = self
                        .program_die
                        .clone()
                        .expect("program die assigned before rolling");
                    self.program_roll = Some(self.roll(&die)?);
                    Phase::RollPlayer
                }
                Phase::RollPlayer => {
                    let die = self
                        .player_die
                        .clone()
                        .expect("player die assigned before rolling");
                    self.player_roll = Some(self.roll(&die)?);
                    Phase::Decide
                }
                Phase::Decide => self.decide()?,
                Phase::End(outcome) => return Ok(outcome),
            };
        }
    }

    /// Round transcripts in the order they were produced, for verification.
    pub fn transcripts(&self) -> &[RoundTranscript] {
        &self.transcripts
    }

    /// Dice still unassigned.
    pub fn remaining_dice(&self) -> &[Die] {
        &self.pool
    }

    pub fn program_die(&self) -> Option<&Die> {
        self.program_die.as_ref()
    }

    pub fn player_die(&self) -> Option<&Die> {
        self.player_die.as_ref()
    }

    fn first_move(&mut self) -> Result<Phase, GameError> {
        self.console
            .write_line("Let's determine who makes the first move.")?;
        let outcome = fair_value(&mut self.entropy, self.console, 2, RoundStyle::Guess)?;
        let player_first = outcome.value == 0;
        self.transcripts.push(outcome.transcript);
        self.console.write_line(if player_first {
            "You go first!"
        } else {
            "I go first!"
        })?;
        debug!(player_first, "first move decided");
        Ok(if player_first {
            Phase::PlayerPicks
        } else {
            Phase::ProgramPicks
        })
    }

    /// Uniform pick from the remaining pool. Not committed: the pick is
    /// announced immediately and gives the program no outcome advantage.
    fn program_pick(&mut self) -> Result<(), GameError> {
        let index = self.entropy.next_int(self.pool.len() as u32) as usize;
        let die = self.pool.remove(index);
        self.console
            .write_line(&format!("I choose the dice: {}", die))?;
        debug!(%die, "program picked");
        self.program_die = Some(die);
        Ok(())
    }

    /// Returns `false` when the player typed the exit sentinel.
    fn player_pick(&mut self) -> Result<bool, GameError> {
        loop {
            self.console.write_line("Choose your dice:")?;
            for (index, die) in self.pool.iter().enumerate() {
                self.console.write_line(&format!("{} - {}", index, die))?;
            }
            self.console.write_line("X - exit")?;
            self.console.write_line("? - help")?;

            let line = self.console.read_line()?;
            if line.eq_ignore_ascii_case("x") {
                info!("player exited at dice selection");
                return Ok(false);
            }
            if line == "?" {
                for help_line in HELP_TEXT {
                    self.console.write_line(help_line)?;
                }
                continue;
            }
            if let Ok(index) = line.parse::<usize>() {
                if index < self.pool.len() {
                    let die = self.pool.remove(index);
                    debug!(index, %die, "player picked");
                    self.player_die = Some(die);
                    return Ok(true);
                }
            }
            self.console.write_line("Invalid selection.")?;
        }
    }

    fn roll(&mut self, die: &Die) -> Result<i32, GameError> {
        let outcome = fair_value(
            &mut self.entropy,
            self.console,
            FACES as u32,
            RoundStyle::Modulo,
        )?;
        let face = die.face(outcome.value as usize);
        self.transcripts.push(outcome.transcript);
        Ok(face)
    }

    fn decide(&mut self) -> Result<Phase, GameError> {
        let player = self.player_roll.expect("player rolled before deciding");
        let program = self.program_roll.expect("program rolled before deciding");
        self.console.write_line(&format!("Your roll: {}", player))?;
        self.console.write_line(&format!("My roll: {}", program))?;
        let outcome = match player.cmp(&program) {
            Ordering::Greater => Outcome::PlayerWins,
            Ordering::Less => Outcome::ProgramWins,
            Ordering::Equal => Outcome::Tie,
        };
        self.console.write_line(match outcome {
            Outcome::PlayerWins => "You win!",
            Outcome::ProgramWins => "I win!",
            Outcome::Tie => "It's a tie!",
            Outcome::Aborted => unreachable!("decide phase never aborts"),
        })?;
        info!(?outcome, player, program, "game decided");
        Ok(Phase::End(outcome))
    }
}

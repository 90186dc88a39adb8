use std::io::{self, Cursor};

use tictactoe::{session::INVALID_MOVE, Coordinate, GameState, Mark, Outcome, Seat, Session};

/// Run a whole session over `input`, returning the session and everything it wrote.
fn run(input: &str) -> (io::Result<Outcome>, String, GameState) {
    let mut output = Vec::new();
    let mut session = Session::new(Cursor::new(input.to_owned()), &mut output);
    let result = session.run();
    let state = session.game().state();
    drop(session);
    (result, String::from_utf8(output).unwrap(), state)
}

#[test]
fn first_player_wins_across_top_row() {
    // Trailing moves must never be asked for.
    let (result, output, state) = run("Alice\nBob\na1\nb1\na2\nb2\na3\nc1\nc2\n");

    assert_eq!(
        result.unwrap(),
        Outcome::Winner {
            name: "Alice".to_owned(),
            mark: Mark::X,
        }
    );
    assert_eq!(state, GameState::WinDetected(Seat::First));
    assert_eq!(output.matches("Alice's turn: ").count(), 3);
    assert_eq!(output.matches("Bob's turn: ").count(), 2);
    assert!(output.ends_with("\nWe have a winner! Congratulations, Alice!\n"));
    assert!(output.contains("  a  X | X | X\n"));
    assert!(output.contains("  b  O | O |  \n"));
}

#[test]
fn bad_moves_ask_the_same_player_again() {
    let input = "Alice\nBob\nz9\na4\na1\na1\nb1\na2\nb2\na3\n";
    let (result, output, _) = run(input);

    assert!(matches!(result, Ok(Outcome::Winner { mark: Mark::X, .. })));
    assert_eq!(output.matches(INVALID_MOVE).count(), 3);
    // Two rejections for Alice's first move, one for Bob's reuse of a1.
    assert_eq!(output.matches("Alice's turn: ").count(), 5);
    assert_eq!(output.matches("Bob's turn: ").count(), 3);
    // The board is only redrawn after accepted moves: once at start plus five moves.
    assert_eq!(output.matches("    ---+---+---\n").count(), 2 * 6);
}

#[test]
fn near_miss_moves_leave_turn_and_board_alone() {
    let input = "Alice\nBob\na01\nb2x\nbb2\nb002\na1\nb1\na2\nb2\na3\n";
    let (result, output, state) = run(input);

    assert!(matches!(result, Ok(Outcome::Winner { mark: Mark::X, .. })));
    assert_eq!(state, GameState::WinDetected(Seat::First));
    assert_eq!(output.matches(INVALID_MOVE).count(), 4);
    // Every near miss asks Alice again; Bob never gets an extra turn.
    let retries = format!("Alice's turn: {}\n", INVALID_MOVE);
    assert_eq!(output.matches(&retries).count(), 4);
    assert_eq!(output.matches("Alice's turn: ").count(), 7);
    assert_eq!(output.matches("Bob's turn: ").count(), 2);
    // The first board drawn after the rejections holds only Alice's a1.
    assert!(output.contains("  a  X |   |  \n    ---+---+---\n  b    |   |  \n"));
    assert!(!output.contains("  b    | X |  \n"));
    assert_eq!(output.matches("    ---+---+---\n").count(), 2 * 6);
}

#[test]
fn coordinates_may_be_padded_or_upper_case() {
    let (result, output, _) = run("Alice\nBob\n  A1 \nb1\nA2\nB2\na3\n");
    assert!(result.is_ok());
    assert!(!output.contains(INVALID_MOVE));
}

#[test]
fn full_board_is_a_draw() {
    let moves = ["a1", "a2", "a3", "b2", "b1", "b3", "c2", "c1", "c3"];
    let input = format!("Alice\nBob\n{}\n", moves.join("\n"));
    let (result, output, state) = run(&input);

    assert_eq!(result.unwrap(), Outcome::Draw);
    assert_eq!(state, GameState::Draw);
    assert!(!output.contains("We have a winner!"));
    assert!(output.ends_with("It's a draw! No more moves are available.\n"));
    assert!(output.contains("  a  X | O | X\n"));
    assert!(output.contains("  b  X | O | O\n"));
    assert!(output.contains("  c  O | X | X\n"));
}

#[test]
fn input_ending_mid_game_is_fatal() {
    let (result, _, state) = run("Alice\nBob\nb2\n");
    assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    assert_eq!(state, GameState::PlayerTurn(Seat::Second));
}

#[test]
fn rendered_marks_track_accepted_moves() {
    let mut output = Vec::new();
    let mut session = Session::new(Cursor::new("A\nB\nc3\nc3\nb2\nzz\na1\n"), &mut output);
    let _ = session.run();
    let game = session.game();

    assert_eq!(game.board().mark_count(), 3);
    let rendered: usize = game
        .board()
        .render()
        .iter()
        .map(|line| line.matches(|c: char| c == 'X' || c == 'O').count())
        .sum();
    assert_eq!(rendered, 3);
    assert!(!game.is_available(Coordinate::C3));
    assert_eq!(game.player(Seat::First).last_move(), Some(Coordinate::A1));
}

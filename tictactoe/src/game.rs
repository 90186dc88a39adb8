//! Game state: the two players, whose turn it is, and which cells are still open.
//!
//! A [`Game`] starts out waiting for the two player names, then alternates turns
//! starting with the first player until somebody completes a line or the board fills
//! up. All moves go through [`Game::play`], which rejects anything that does not name
//! an open cell without touching the board or the turn order.

use tracing::{debug, trace};

use crate::{
    board::{Board, Mark},
    coordinate::{
        Coordinate, CoordinateMap, CoordinateSet, InvalidCoordinateError,
        InvalidCoordinateReason,
    },
};

pub use self::errors::PlayError;

mod errors;
pub mod win;

/// Which of the two players is meant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Seat {
    /// The player who moves first and plays [`Mark::X`].
    First,
    /// The player who moves second and plays [`Mark::O`].
    Second,
}

impl Seat {
    /// Get the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// The mark assigned to this seat.
    pub fn mark(self) -> Mark {
        match self {
            Seat::First => Mark::X,
            Seat::Second => Mark::O,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// A participant in the game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Player {
    /// Name shown in prompts and announcements.
    name: String,
    /// Mark this player places.
    mark: Mark,
    /// The last coordinate this player claimed.
    last: Option<Coordinate>,
}

impl Player {
    fn new(mark: Mark) -> Self {
        Self {
            name: String::new(),
            mark,
            last: None,
        }
    }

    /// The player's display name. Empty until it has been entered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// The most recent coordinate this player claimed, if any.
    pub fn last_move(&self) -> Option<Coordinate> {
        self.last
    }
}

/// Phase of the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameState {
    /// Waiting for the name of the player in the given seat.
    AwaitingName(Seat),
    /// Waiting for the player in the given seat to move.
    PlayerTurn(Seat),
    /// The player in the given seat completed a line. Terminal.
    WinDetected(Seat),
    /// Every cell was claimed without a line being completed. Terminal.
    Draw,
}

/// Result of a successful move.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MoveOutcome {
    /// The game goes on with the given seat to move.
    Continue(Seat),
    /// The mover completed a line.
    Win(Seat),
    /// The mover claimed the last open cell without completing a line.
    Draw,
}

/// A single game of tic-tac-toe.
#[derive(Debug, Clone)]
pub struct Game {
    /// The shared board.
    board: Board,

    /// Maps coordinates onto the board's grid.
    map: CoordinateMap,

    /// Players indexed by [`Seat`].
    players: [Player; 2],

    /// Cells nobody has claimed yet.
    available: CoordinateSet,

    /// Current phase.
    state: GameState,
}

impl Game {
    /// Set up a game with an empty board, waiting for the first player's name.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            map: CoordinateMap::standard(),
            players: [Player::new(Seat::First.mark()), Player::new(Seat::Second.mark())],
            available: CoordinateSet::all(),
            state: GameState::AwaitingName(Seat::First),
        }
    }

    /// Name the next unnamed player. The first name goes to the player with
    /// [`Mark::X`], the second to the player with [`Mark::O`].
    pub fn enter_name(&mut self, name: impl Into<String>) -> Result<(), PlayError> {
        let seat = match self.state {
            GameState::AwaitingName(seat) => seat,
            state => return Err(PlayError::NotAwaitingName(state)),
        };
        let player = &mut self.players[seat.index()];
        player.name = name.into();
        debug!(?seat, name = %player.name, "player named");
        self.state = match seat {
            Seat::First => GameState::AwaitingName(Seat::Second),
            Seat::Second => GameState::PlayerTurn(Seat::First),
        };
        Ok(())
    }

    /// Interpret `input` as a coordinate and claim it for the player whose turn it is.
    ///
    /// Input that is malformed, names no cell, or names a claimed cell is rejected and
    /// the same player stays on turn.
    pub fn play(&mut self, input: &str) -> Result<MoveOutcome, PlayError> {
        self.current_turn()?;
        let coord = input.parse::<Coordinate>().map_err(|err| {
            trace!(%err, "rejected move");
            err
        })?;
        self.play_at(coord)
    }

    /// Claim `coord` for the player whose turn it is.
    pub fn play_at(&mut self, coord: Coordinate) -> Result<MoveOutcome, PlayError> {
        let seat = self.current_turn()?;
        if !self.available.contains(coord) {
            trace!(%coord, "rejected move on claimed cell");
            return Err(InvalidCoordinateError::new(
                InvalidCoordinateReason::Occupied,
                coord.to_string(),
            )
            .into());
        }
        self.available.remove(coord);

        let player = &mut self.players[seat.index()];
        player.last = Some(coord);
        self.board.set(self.map.resolve(coord), player.mark);
        debug!(?seat, %coord, "move applied");

        let outcome = if win::is_winner(&self.board.cells(), player.mark) {
            self.state = GameState::WinDetected(seat);
            MoveOutcome::Win(seat)
        } else if self.available.is_empty() {
            self.state = GameState::Draw;
            MoveOutcome::Draw
        } else {
            self.state = GameState::PlayerTurn(seat.opponent());
            MoveOutcome::Continue(seat.opponent())
        };
        debug!(?outcome, "turn finished");
        Ok(outcome)
    }

    /// Get the seat on turn, or an error if the game is not accepting moves.
    fn current_turn(&self) -> Result<Seat, PlayError> {
        match self.state {
            GameState::PlayerTurn(seat) => Ok(seat),
            state => Err(PlayError::NotPlaying(state)),
        }
    }

    /// Get the current phase of the game.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Get the seat whose turn it is, if the game is accepting moves.
    pub fn current(&self) -> Option<Seat> {
        self.current_turn().ok()
    }

    /// Get the winning seat, if somebody has won.
    pub fn winner(&self) -> Option<Seat> {
        match self.state {
            GameState::WinDetected(seat) => Some(seat),
            _ => None,
        }
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        match self.state {
            GameState::WinDetected(_) | GameState::Draw => true,
            GameState::AwaitingName(_) | GameState::PlayerTurn(_) => false,
        }
    }

    /// Get the player in the given seat.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Get the shared board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the set of cells nobody has claimed yet.
    pub fn available(&self) -> CoordinateSet {
        self.available
    }

    /// Returns true if nobody has claimed the given cell yet.
    pub fn is_available(&self, coord: Coordinate) -> bool {
        self.available.contains(coord)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_game() -> Game {
        let mut game = Game::new();
        game.enter_name("Alice").unwrap();
        game.enter_name("Bob").unwrap();
        game
    }

    fn reason(err: PlayError) -> InvalidCoordinateReason {
        err.invalid_coordinate()
            .expect("expected a coordinate error")
            .reason()
    }

    #[test]
    fn names_are_assigned_in_seat_order() {
        let mut game = Game::new();
        assert_eq!(game.state(), GameState::AwaitingName(Seat::First));
        game.enter_name("Alice").unwrap();
        assert_eq!(game.state(), GameState::AwaitingName(Seat::Second));
        game.enter_name("Bob").unwrap();
        assert_eq!(game.state(), GameState::PlayerTurn(Seat::First));

        assert_eq!(game.player(Seat::First).name(), "Alice");
        assert_eq!(game.player(Seat::First).mark(), Mark::X);
        assert_eq!(game.player(Seat::Second).name(), "Bob");
        assert_eq!(game.player(Seat::Second).mark(), Mark::O);

        assert_eq!(
            game.enter_name("Carol"),
            Err(PlayError::NotAwaitingName(GameState::PlayerTurn(Seat::First)))
        );
    }

    #[test]
    fn moves_are_refused_before_names() {
        let mut game = Game::new();
        assert_eq!(
            game.play("a1"),
            Err(PlayError::NotPlaying(GameState::AwaitingName(Seat::First)))
        );
        assert_eq!(game.board().mark_count(), 0);
    }

    #[test]
    fn turns_alternate() {
        let mut game = named_game();
        assert_eq!(game.play("b2"), Ok(MoveOutcome::Continue(Seat::Second)));
        assert_eq!(game.current(), Some(Seat::Second));
        assert_eq!(game.play("a1"), Ok(MoveOutcome::Continue(Seat::First)));
        assert_eq!(game.current(), Some(Seat::First));

        assert_eq!(game.player(Seat::First).last_move(), Some(Coordinate::B2));
        assert_eq!(game.player(Seat::Second).last_move(), Some(Coordinate::A1));
        assert_eq!(game.board().cells()[1][1], Some(Mark::X));
        assert_eq!(game.board().cells()[0][0], Some(Mark::O));
    }

    #[test]
    fn reused_coordinate_is_rejected() {
        let mut game = named_game();
        game.play("a1").unwrap();
        assert!(!game.is_available(Coordinate::A1));

        let before = game.board().render();
        let err = game.play("a1").unwrap_err();
        assert_eq!(reason(err), InvalidCoordinateReason::Occupied);
        assert_eq!(game.current(), Some(Seat::Second));
        assert_eq!(game.board().render(), before);
        assert_eq!(game.available().bits().count_ones(), 8);
    }

    #[test]
    fn malformed_input_keeps_turn_and_board() {
        let mut game = named_game();
        for &input in &["z9", "a4", "", "hello", "a01", "b002", "b2x", "bb2"] {
            let before = game.board().render();
            assert!(game.play(input).is_err(), "{:?} should be rejected", input);
            assert_eq!(game.current(), Some(Seat::First));
            assert_eq!(game.board().render(), before);
        }
        assert_eq!(reason(game.play("z9").unwrap_err()), InvalidCoordinateReason::OutOfRange);
        assert_eq!(reason(game.play("zz").unwrap_err()), InvalidCoordinateReason::Malformed);
        assert_eq!(reason(game.play("a01").unwrap_err()), InvalidCoordinateReason::OutOfRange);
        assert_eq!(game.available().bits().count_ones(), 9);
        assert_eq!(game.board().mark_count(), 0);
    }

    #[test]
    fn board_holds_one_mark_per_move() {
        let mut game = named_game();
        let moves = ["a1", "b1", "c3", "b2", "a3"];
        for (applied, input) in moves.iter().enumerate() {
            game.play(input).unwrap();
            assert_eq!(game.board().mark_count(), applied + 1);
            assert_eq!(game.available().bits().count_ones() as usize, 9 - (applied + 1));
        }
    }

    #[test]
    fn top_row_wins_for_first_player() {
        let mut game = named_game();
        for &input in &["a1", "b1", "a2", "b2"] {
            assert!(matches!(game.play(input), Ok(MoveOutcome::Continue(_))));
        }
        assert_eq!(game.play("a3"), Ok(MoveOutcome::Win(Seat::First)));
        assert_eq!(game.state(), GameState::WinDetected(Seat::First));
        assert_eq!(game.winner(), Some(Seat::First));
        assert!(game.is_over());
        assert_eq!(
            game.play("c3"),
            Err(PlayError::NotPlaying(GameState::WinDetected(Seat::First)))
        );
    }

    #[test]
    fn second_player_can_win_on_anti_diagonal() {
        let mut game = named_game();
        for &input in &["a1", "c1", "a2", "b2", "c3"] {
            game.play(input).unwrap();
        }
        assert_eq!(game.play("a3"), Ok(MoveOutcome::Win(Seat::Second)));
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let mut game = named_game();
        let moves = ["a1", "a2", "a3", "b2", "b1", "b3", "c2", "c1"];
        for input in moves.iter() {
            assert!(matches!(game.play(input), Ok(MoveOutcome::Continue(_))));
        }
        assert_eq!(game.play("c3"), Ok(MoveOutcome::Draw));
        assert_eq!(game.state(), GameState::Draw);
        assert_eq!(game.winner(), None);
        assert!(game.is_over());
        assert!(game.available().is_empty());
        assert_eq!(game.board().mark_count(), 9);
    }
}

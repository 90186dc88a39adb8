//! Console front end: reads names and moves from a line source and writes the game to a
//! text sink.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::{
    board::Mark,
    game::{Game, MoveOutcome, Seat},
};

/// Warning written when a move is rejected, before asking again.
pub const INVALID_MOVE: &str = "Invalid input or non-occupiable, put the right coordinates.";

/// How a finished session ended.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The named player completed a line.
    Winner {
        /// Name the winner entered.
        name: String,
        /// Mark the winner played.
        mark: Mark,
    },
    /// The board filled up without a winner.
    Draw,
}

/// One game played over a pair of text streams.
pub struct Session<R, W> {
    console: Console<R, W>,
    game: Game,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Set up a session reading from `read` and writing to `write`. Nothing is read or
    /// written until [`Session::run`].
    pub fn new(read: R, write: W) -> Self {
        Self {
            console: Console::new(read, write),
            game: Game::new(),
        }
    }

    /// Get the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Play the game to the end.
    ///
    /// Rejected moves are reported and asked for again without limit. Fails if the
    /// input ends before the game does, with [`io::ErrorKind::UnexpectedEof`], or if
    /// either stream fails.
    pub fn run(&mut self) -> io::Result<Outcome> {
        self.welcome()?;
        self.show_board()?;
        self.instructions()?;
        self.input_names()?;

        let mut seat = Seat::First;
        loop {
            match self.take_turn(seat)? {
                MoveOutcome::Continue(next) => seat = next,
                MoveOutcome::Win(winner) => return self.declare_winner(winner),
                MoveOutcome::Draw => return self.declare_draw(),
            }
        }
    }

    fn welcome(&mut self) -> io::Result<()> {
        let out = &mut self.console.write;
        writeln!(out, " -------------")?;
        writeln!(out, " |TIC-TAC-TOE|")?;
        writeln!(out, " -------------")?;
        writeln!(out)
    }

    fn instructions(&mut self) -> io::Result<()> {
        let out = &mut self.console.write;
        writeln!(out)?;
        writeln!(out, "Instructions: To input a turn, type the coordinates. e.g. a1, c3")?;
        writeln!(out, "The player with three consecutive X or O will win the game.")
    }

    fn show_board(&mut self) -> io::Result<()> {
        for line in self.game.board().render() {
            writeln!(self.console.write, "{}", line)?;
        }
        Ok(())
    }

    /// Ask for both names, first player first.
    fn input_names(&mut self) -> io::Result<()> {
        writeln!(self.console.write, " ")?;
        for &seat in &[Seat::First, Seat::Second] {
            let prompt = format!(
                "Input the name of player that will choose {}: ",
                seat.mark()
            );
            let name = self
                .console
                .read_input(&prompt, |line, _| Ok(Some(line.to_owned())))?;
            self.game
                .enter_name(name)
                .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        }
        Ok(())
    }

    /// Read moves from the player in `seat` until one is accepted, then show the board.
    fn take_turn(&mut self, seat: Seat) -> io::Result<MoveOutcome> {
        let Self { console, game } = self;
        writeln!(console.write)?;
        let prompt = format!("{}'s turn: ", game.player(seat).name());
        let outcome = console.read_input(&prompt, |line, out| match game.play(line) {
            Ok(outcome) => Ok(Some(outcome)),
            Err(err) => {
                debug!(%err, "asking again");
                writeln!(out, "{}", INVALID_MOVE)?;
                Ok(None)
            }
        })?;
        writeln!(self.console.write)?;
        self.show_board()?;
        Ok(outcome)
    }

    fn declare_winner(&mut self, seat: Seat) -> io::Result<Outcome> {
        let player = self.game.player(seat);
        info!(name = player.name(), mark = %player.mark(), "game won");
        writeln!(self.console.write)?;
        writeln!(self.console.write, "We have a winner! Congratulations, {}!", player.name())?;
        self.console.write.flush()?;
        Ok(Outcome::Winner {
            name: player.name().to_owned(),
            mark: player.mark(),
        })
    }

    fn declare_draw(&mut self) -> io::Result<Outcome> {
        info!("game drawn");
        writeln!(self.console.write)?;
        writeln!(self.console.write, "It's a draw! No more moves are available.")?;
        self.console.write.flush()?;
        Ok(Outcome::Draw)
    }
}

/// Helper to prompt for and read lines of input.
struct Console<R, W> {
    read: R,
    write: W,
    buf: String,
}

impl<R, W> Console<R, W> {
    fn new(read: R, write: W) -> Self {
        Self {
            read,
            write,
            buf: String::new(),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Repeatedly prompts and reads a line until the checker returns `Some`. The checker
    /// gets the trimmed line and the output stream so it can explain a rejection.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str, &mut W) -> io::Result<Option<T>>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim(), &mut self.write)? {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.write, "{}", prompt)?;
        self.write.flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            writeln!(self.write)?;
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game finished",
            ));
        }
        Ok(())
    }
}

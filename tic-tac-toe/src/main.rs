use std::io;

use clap::{App, Arg};
use tracing::{info, Level};

use tictactoe::{Outcome, Session};

fn main() -> io::Result<()> {
    let matches = App::new("Tic-Tac-Toe")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Two-player command line tic-tac-toe.")
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("log diagnostics to stderr, repeat for more detail"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    match session.run()? {
        Outcome::Winner { name, mark } => info!(%name, %mark, "session finished"),
        Outcome::Draw => info!("session finished in a draw"),
    }
    Ok(())
}

/// Send log output to stderr so it never mixes with the board on stdout.
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

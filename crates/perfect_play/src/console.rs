//! Console display and console input.

use perfect_core::{GameEvent, GameState, InvalidMove, MoveInput, Observer};
use perfect_nim::{MAX_TAKE, Pot};
use perfect_tictactoe::Grid;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{debug, warn};

/// Game-specific console wording.
pub trait Narrate: GameState {
    /// Sentence announcing a move, e.g. `A takes 2.`
    fn narrate(player: &str, mv: &Self::Move) -> String;

    /// Question put to a human whose turn it is.
    fn prompt(&self, player: &str) -> String;
}

impl Narrate for Pot {
    fn narrate(player: &str, take: &Self::Move) -> String {
        format!("{player} takes {take}.")
    }

    fn prompt(&self, player: &str) -> String {
        let most = MAX_TAKE.min(self.count());
        format!("{player}, how many tokens do you take (1-{most})? ")
    }
}

impl Narrate for Grid {
    fn narrate(player: &str, position: &Self::Move) -> String {
        format!("{player} plays {position}.")
    }

    fn prompt(&self, player: &str) -> String {
        format!("{player} ({}), where do you play? (e.g. A1) ", self.mark_to_move())
    }
}

/// Prints every state, announcement and outcome to a writer.
#[derive(Debug)]
pub struct ConsoleObserver<W> {
    out: W,
}

impl<W: Write> ConsoleObserver<W> {
    /// Creates an observer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render<G: Narrate>(&mut self, event: &GameEvent<G>) -> io::Result<()> {
        match event {
            GameEvent::StateChanged(state) => writeln!(self.out, "{state}\n")?,
            GameEvent::MoveAnnounced { player, mv } => {
                writeln!(self.out, "{}", G::narrate(player, mv))?
            }
            GameEvent::GameOver(outcome) => writeln!(self.out, "{outcome}!\n")?,
        }
        self.out.flush()
    }
}

impl ConsoleObserver<io::Stdout> {
    /// Creates an observer printing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<G: Narrate, W: Write> Observer<G> for ConsoleObserver<W> {
    fn notify(&mut self, event: &GameEvent<G>) {
        if let Err(e) = self.render(event) {
            warn!(error = %e, "Failed to write to console");
        }
    }
}

/// A source of console lines.
pub trait ReadLine {
    /// Appends the next line to `buf`, returning the bytes read (0 at end of input).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl ReadLine for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> ReadLine for io::Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Reads a human's moves from the console, one line per request.
///
/// Unparseable text is reported as an ordinary [`InvalidMove`]; end of
/// input as [`InvalidMove::input_closed`], which ends the game.
#[derive(Debug)]
pub struct ConsoleInput<R> {
    name: String,
    reader: R,
}

impl<R: ReadLine> ConsoleInput<R> {
    /// Creates an input prompting `name` and reading from `reader`.
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }
}

impl ConsoleInput<io::Stdin> {
    /// Creates an input reading from standard input.
    pub fn stdin(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin())
    }
}

impl<G, R> MoveInput<G> for ConsoleInput<R>
where
    G: Narrate,
    G::Move: FromStr<Err = InvalidMove>,
    R: ReadLine,
{
    fn request_move(&mut self, state: &G) -> Result<G::Move, InvalidMove> {
        print!("{}", state.prompt(&self.name));
        if let Err(e) = io::stdout().flush() {
            debug!(error = %e, "Prompt not flushed");
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(InvalidMove::input_closed()),
            Ok(_) => line.parse(),
            Err(e) => Err(InvalidMove::new(format!("failed to read input: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfect_core::{Outcome, Seat};
    use perfect_nim::{NimRule, Take};
    use perfect_tictactoe::{Position, Scoring};

    fn rendered<G: Narrate>(events: &[GameEvent<G>]) -> String {
        let mut observer = ConsoleObserver::new(Vec::new());
        for event in events {
            observer.notify(event);
        }
        String::from_utf8(observer.into_inner()).unwrap()
    }

    #[test]
    fn test_nim_console_lines() {
        let pot = Pot::new(4, NimRule::Normal);
        let text = rendered(&[
            GameEvent::StateChanged(pot),
            GameEvent::MoveAnnounced {
                player: "A".to_string(),
                mv: Take(2),
            },
            GameEvent::GameOver(Outcome::Winner {
                seat: Seat::First,
                name: "A".to_string(),
            }),
        ]);
        assert!(text.contains("The pot now has 4 tokens"));
        assert!(text.contains("A takes 2."));
        assert!(text.contains("A wins!"));
    }

    #[test]
    fn test_tictactoe_console_lines() {
        let text = rendered(&[
            GameEvent::MoveAnnounced {
                player: "O".to_string(),
                mv: Position::Center,
            },
            GameEvent::<Grid>::GameOver(Outcome::Tie),
        ]);
        assert!(text.contains("O plays B2."));
        assert!(text.contains("Tie game!"));
    }

    #[test]
    fn test_input_parses_moves() {
        let mut input = ConsoleInput::new("You", io::Cursor::new("2\nb3\n"));
        let pot = Pot::new(5, NimRule::Normal);
        assert_eq!(input.request_move(&pot).unwrap(), Take(2));

        let grid = Grid::new(Scoring::Unit);
        assert_eq!(input.request_move(&grid).unwrap(), Position::BottomCenter);
    }

    #[test]
    fn test_input_reports_garbage_and_eof() {
        let mut input = ConsoleInput::new("You", io::Cursor::new("lots\n"));
        let pot = Pot::new(5, NimRule::Normal);
        let err = MoveInput::<Pot>::request_move(&mut input, &pot).unwrap_err();
        assert!(!err.is_input_closed());

        let err = MoveInput::<Pot>::request_move(&mut input, &pot).unwrap_err();
        assert!(err.is_input_closed());
    }

    #[test]
    fn test_prompt_caps_take_at_pot() {
        let pot = Pot::new(2, NimRule::Normal);
        assert_eq!(pot.prompt("You"), "You, how many tokens do you take (1-2)? ");
    }
}

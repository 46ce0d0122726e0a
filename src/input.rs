use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use lib_2048::{Difficulty, Direction};
use log::debug;

const SEED_PROMPT: &str = "Enter random seed: ";
const MODE_PROMPT: &str = "Choose game mode: Easy (E), Medium (M), or Hard (H): ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

/// Splits input into whitespace separated tokens, reading a line at a time.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R> Tokens<R>
where
    R: BufRead,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();

            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

pub fn parse_command(token: &str) -> Option<Command> {
    match token {
        "Q" | "q" => Some(Command::Quit),
        _ => token.parse().ok().map(Command::Move),
    }
}

fn prompt(out: &mut impl Write, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

pub fn read_seed(
    tokens: &mut Tokens<impl BufRead>,
    out: &mut impl Write,
) -> io::Result<Option<u64>> {
    loop {
        prompt(out, SEED_PROMPT)?;

        let Some(token) = tokens.next_token()? else {
            return Ok(None);
        };

        match token.parse() {
            Ok(seed) => return Ok(Some(seed)),
            Err(err) => {
                debug!("rejected seed {token:?}: {err}");
                writeln!(out, "Error: Invalid seed.")?;
            }
        }
    }
}

pub fn read_difficulty(
    tokens: &mut Tokens<impl BufRead>,
    out: &mut impl Write,
) -> io::Result<Option<Difficulty>> {
    loop {
        prompt(out, MODE_PROMPT)?;

        let Some(token) = tokens.next_token()? else {
            return Ok(None);
        };

        match token.parse() {
            Ok(difficulty) => return Ok(Some(difficulty)),
            Err(err) => {
                debug!("{err}");
                writeln!(out, "Error: Invalid mode.")?;
            }
        }
    }
}

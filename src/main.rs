use std::io::{self, BufRead, Write};

use clap::Parser;
use env_logger::Env;
use lib_2048::{Board, Difficulty, RandomSource};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::input::{Command, Tokens};

mod input;
mod render;

const MOVE_PROMPT: &str = "Enter move: U, D, L, or R. Q to quit: ";

#[derive(Debug, Parser)]
#[command(version, about = "Slide and merge tiles until one reaches the target value")]
struct Cli {
    /// Seed for tile spawning; prompted for when omitted
    #[arg(short, long, value_name = "N")]
    seed: Option<u64>,

    /// Game mode: E (256), M (512) or H (1024); prompted for when omitted
    #[arg(short, long, value_name = "MODE")]
    difficulty: Option<Difficulty>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Won,
    Lost,
    Quit,
}

fn play<R>(
    out: &mut impl Write,
    tokens: &mut Tokens<impl BufRead>,
    board: &mut Board<R>,
) -> io::Result<Outcome>
where
    R: RandomSource,
{
    while !board.is_terminal() {
        render::draw_board(out, board.grid())?;

        out.write_all(MOVE_PROMPT.as_bytes())?;
        out.flush()?;

        let Some(token) = tokens.next_token()? else {
            break;
        };

        let direction = match input::parse_command(&token) {
            Some(Command::Move(direction)) => direction,
            Some(Command::Quit) => break,
            None => {
                writeln!(out, "Error: Invalid move.")?;
                continue;
            }
        };

        if !board.make_move(direction) {
            writeln!(out, "Invalid move direction.")?;
            continue;
        }

        if board.check_win() {
            render::draw_board(out, board.grid())?;
            writeln!(out, "You win!")?;

            return Ok(Outcome::Won);
        }
    }

    if board.is_terminal() {
        render::draw_board(out, board.grid())?;
        writeln!(out, "You lose.")?;

        return Ok(Outcome::Lost);
    }

    Ok(Outcome::Quit)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut stdout = io::stdout().lock();
    let mut tokens = Tokens::new(io::stdin().lock());

    let seed = match cli.seed {
        Some(seed) => seed,
        None => match input::read_seed(&mut tokens, &mut stdout)? {
            Some(seed) => seed,
            None => return Ok(()),
        },
    };

    let difficulty = match cli.difficulty {
        Some(difficulty) => difficulty,
        None => match input::read_difficulty(&mut tokens, &mut stdout)? {
            Some(difficulty) => difficulty,
            None => return Ok(()),
        },
    };

    info!("starting {difficulty} game with seed {seed}");

    let mut board = Board::new(difficulty, ChaCha8Rng::seed_from_u64(seed));
    let outcome = play(&mut stdout, &mut tokens, &mut board)?;

    info!("game ended: {outcome:?}, largest tile {}", board.max_tile());

    Ok(())
}

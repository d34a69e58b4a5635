//! Interactive driver: argument parsing, input validation, session loop.
//!
//! All validation lives here. The engine accepts whatever integers it is
//! handed, so this module keeps guesses inside the configured range and
//! refuses to start with an empty range or a zero budget.

use std::io::{self, Write};

use anyhow::{bail, Result};
use clap::Parser;
use log::{debug, info};

use hilo::{Difficulty, GameConfig, GameRng, GuessGame};

use crate::display;

/// Budget bounds offered when the player picks the custom tier.
const CUSTOM_ATTEMPTS_MIN: u32 = 3;
const CUSTOM_ATTEMPTS_MAX: u32 = 20;

#[derive(Parser, Debug)]
#[command(name = "hilo")]
#[command(about = "Guess the secret number from higher/lower hints", long_about = None)]
pub struct Args {
    /// Difficulty tier; selected interactively when omitted.
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Custom attempt budget; implies the custom tier.
    #[arg(short, long)]
    pub attempts: Option<u32>,

    /// Smallest number the secret can be.
    #[arg(long, default_value_t = 1)]
    pub min: i64,

    /// Largest number the secret can be.
    #[arg(long, default_value_t = 100)]
    pub max: i64,

    /// Seed for the RNG, making the whole session replayable.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: Args) -> Result<()> {
    if args.min > args.max {
        bail!("--min ({}) must not exceed --max ({})", args.min, args.max);
    }
    if args.attempts == Some(0) {
        bail!("--attempts must be at least 1");
    }

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    debug!("rng seed: {}", rng.seed());

    display::show_welcome(args.min, args.max);

    let (difficulty, custom_attempts) = match (args.difficulty, args.attempts) {
        (_, Some(attempts)) => (Difficulty::Custom, Some(attempts)),
        (Some(level), None) => (level, None),
        (None, None) => match select_difficulty()? {
            Some(choice) => choice,
            None => return Ok(()),
        },
    };

    let mut config = GameConfig::new(args.min, args.max, difficulty);
    if let Some(attempts) = custom_attempts {
        config = config.with_max_attempts(attempts);
    }
    display::show_mode(&config);

    let mut game = GuessGame::new(config, rng);

    loop {
        let secret = game.start_new_game();
        debug!("secret drawn: {}", secret);
        info!(
            "round started: {} attempts allowed",
            game.config().max_attempts()
        );

        while game.can_continue() {
            let guess = match read_guess(game.attempts() + 1, game.config())? {
                Some(guess) => guess,
                None => {
                    display::show_farewell();
                    return Ok(());
                }
            };

            let outcome = game.make_guess(guess);
            display::show_guess_result(&outcome);
            if outcome.is_correct() {
                break;
            }
        }

        display::show_game_over(secret, game.game_won(), game.attempts());

        match ask_play_again()? {
            Some(true) => display::show_new_round(),
            _ => {
                display::show_farewell();
                return Ok(());
            }
        }
    }
}

/// Present the tier menu and read a selection. `None` means the player
/// quit at the prompt.
fn select_difficulty() -> Result<Option<(Difficulty, Option<u32>)>> {
    display::show_difficulty_menu();
    loop {
        let line = match prompt_line("Choose an option (1-4): ")? {
            Some(line) => line,
            None => return Ok(None),
        };
        if line.is_empty() {
            continue;
        }

        let choice: usize = match line.parse() {
            Ok(choice) => choice,
            Err(_) => {
                println!("Please enter a valid number.");
                continue;
            }
        };

        match choice
            .checked_sub(1)
            .and_then(|index| Difficulty::ALL.get(index).copied())
        {
            Some(Difficulty::Custom) => {
                return match read_custom_attempts()? {
                    Some(attempts) => Ok(Some((Difficulty::Custom, Some(attempts)))),
                    None => Ok(None),
                };
            }
            Some(level) => return Ok(Some((level, None))),
            None => println!(
                "Please choose an option between 1 and {}.",
                Difficulty::ALL.len()
            ),
        }
    }
}

/// Ask for a custom budget between the offered bounds. `None` on quit.
fn read_custom_attempts() -> Result<Option<u32>> {
    let prompt = format!(
        "How many attempts do you want? ({}-{}): ",
        CUSTOM_ATTEMPTS_MIN, CUSTOM_ATTEMPTS_MAX
    );
    loop {
        let line = match prompt_line(&prompt)? {
            Some(line) => line,
            None => return Ok(None),
        };
        if line.is_empty() {
            continue;
        }

        match line.parse::<u32>() {
            Ok(attempts) if (CUSTOM_ATTEMPTS_MIN..=CUSTOM_ATTEMPTS_MAX).contains(&attempts) => {
                return Ok(Some(attempts));
            }
            Ok(_) => println!(
                "The attempt budget must be between {} and {}.",
                CUSTOM_ATTEMPTS_MIN, CUSTOM_ATTEMPTS_MAX
            ),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}

/// Read one in-range guess. `None` on end of input or an explicit quit.
fn read_guess(attempt: u32, config: &GameConfig) -> Result<Option<i64>> {
    let prompt = format!(
        "Guess #{}/{} - enter a number between {} and {}: ",
        attempt,
        config.max_attempts(),
        config.min_number(),
        config.max_number()
    );
    loop {
        let line = match prompt_line(&prompt)? {
            Some(line) => line,
            None => return Ok(None),
        };
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }

        match line.parse::<i64>() {
            Ok(guess) if guess >= config.min_number() && guess <= config.max_number() => {
                return Ok(Some(guess));
            }
            Ok(_) => println!(
                "The number must be between {} and {}.",
                config.min_number(),
                config.max_number()
            ),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}

/// `Some(true)` to keep playing, `Some(false)` to stop, `None` on end of
/// input.
fn ask_play_again() -> Result<Option<bool>> {
    loop {
        let line = match prompt_line("\nPlay again? (y/n): ")? {
            Some(line) => line.to_ascii_lowercase(),
            None => return Ok(None),
        };

        match line.as_str() {
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" | "q" | "quit" => return Ok(Some(false)),
            _ => println!("Please answer 'y' for yes or 'n' for no."),
        }
    }
}

/// Print a prompt and read one trimmed line. `None` on end of input.
fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}

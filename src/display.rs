//! Terminal rendering for banners, menus, and results.

use hilo::{Difficulty, GameConfig, GuessOutcome};

pub fn show_welcome(min: i64, max: i64) {
    println!("\n{}", "=".repeat(60));
    println!("  GUESS THE NUMBER");
    println!("{}\n", "=".repeat(60));

    println!("I will think of a secret number between {} and {}.", min, max);
    println!("Guess it in as few attempts as you can; after every guess");
    println!("I will tell you whether the secret is higher or lower.");
    println!("Enter 'q' at any prompt to quit. Good luck!\n");
}

pub fn show_difficulty_menu() {
    println!("Select a difficulty:");
    for (index, level) in Difficulty::ALL.iter().enumerate() {
        match level {
            Difficulty::Custom => println!("{}. {}", index + 1, level.display_name()),
            _ => println!(
                "{}. {} - {} attempts",
                index + 1,
                level.display_name(),
                level.default_attempts()
            ),
        }
    }
}

pub fn show_mode(config: &GameConfig) {
    println!(
        "\nMode: {} - {} attempts",
        config.difficulty().display_name(),
        config.max_attempts()
    );
    println!(
        "Thinking of a number between {} and {}...",
        config.min_number(),
        config.max_number()
    );
    println!("{}", "-".repeat(60));
}

pub fn show_guess_result(outcome: &GuessOutcome) {
    println!("\n{}", outcome);
    if !outcome.is_correct() {
        println!("Attempts remaining: {}", outcome.remaining_attempts());
    }
    println!("{}", "-".repeat(60));
}

pub fn show_game_over(secret: i64, game_won: bool, attempts: u32) {
    println!("\n{}", "=".repeat(60));
    if game_won {
        println!("  YOU WIN - solved in {} attempts", attempts);
    } else {
        println!("  GAME OVER - the number was {}", secret);
    }
    println!("{}", "=".repeat(60));
}

pub fn show_new_round() {
    println!("\n{}", "=".repeat(60));
    println!("  STARTING A NEW ROUND");
    println!("{}", "=".repeat(60));
}

pub fn show_farewell() {
    println!("\nThanks for playing!");
}

//! End-to-end rounds driven through the public API.

use hilo::{Difficulty, GameConfig, GameRng, GuessGame, Hint};

fn custom_config(min: i64, max: i64, attempts: u32) -> GameConfig {
    GameConfig::new(min, max, Difficulty::Custom).with_max_attempts(attempts)
}

// =============================================================================
// Full Rounds
// =============================================================================

#[test]
fn test_binary_search_wins_within_budget() {
    // ceil(log2(100)) = 7, so halving the range always wins in time.
    let mut game = GuessGame::new(custom_config(1, 100, 7), GameRng::new(42));
    let secret = game.start_new_game();

    let (mut low, mut high) = (1, 100);
    let mut won = false;
    while game.can_continue() {
        let guess = low + (high - low) / 2;
        let outcome = game.make_guess(guess);
        if outcome.is_correct() {
            won = true;
            break;
        }
        match outcome.hint().unwrap() {
            Hint::Higher => low = guess + 1,
            Hint::Lower => high = guess - 1,
        }
    }

    assert!(won, "binary search should find the secret within 7 guesses");
    assert!(game.game_won());
    assert_eq!(*game.status().guess_history.last().unwrap(), secret);
}

#[test]
fn test_round_exhausts_after_budget() {
    let mut game = GuessGame::new(custom_config(1, 100, 3), GameRng::new(7));
    game.start_new_game();

    // 0 is below the whole range, so it can never win.
    for _ in 0..3 {
        assert!(game.can_continue());
        let outcome = game.make_guess(0);
        assert!(!outcome.is_correct());
        assert_eq!(outcome.hint(), Some(Hint::Higher));
    }

    assert!(!game.can_continue());
    assert!(!game.game_won());
    assert_eq!(game.status().remaining_attempts, 0);
}

#[test]
fn test_session_reuses_engine_across_rounds() {
    let mut game = GuessGame::new(custom_config(1, 100, 5), GameRng::new(13));

    let secret = game.start_new_game();
    let outcome = game.make_guess(secret);
    assert!(outcome.is_correct());
    assert!(game.game_won());

    game.start_new_game();

    let status = game.status();
    assert_eq!(status.attempts, 0);
    assert!(!status.game_won);
    assert!(status.guess_history.is_empty());
    assert!(game.can_continue());
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_draws_same_secrets() {
    let mut game1 = GuessGame::new(custom_config(1, 1000, 5), GameRng::new(42));
    let mut game2 = GuessGame::new(custom_config(1, 1000, 5), GameRng::new(42));

    let secrets1: Vec<_> = (0..10).map(|_| game1.start_new_game()).collect();
    let secrets2: Vec<_> = (0..10).map(|_| game2.start_new_game()).collect();

    assert_eq!(secrets1, secrets2);
}

#[test]
fn test_different_seeds_draw_different_secrets() {
    let mut game1 = GuessGame::new(custom_config(1, 1000, 5), GameRng::new(111));
    let mut game2 = GuessGame::new(custom_config(1, 1000, 5), GameRng::new(222));

    let secrets1: Vec<_> = (0..10).map(|_| game1.start_new_game()).collect();
    let secrets2: Vec<_> = (0..10).map(|_| game2.start_new_game()).collect();

    assert_ne!(secrets1, secrets2);
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn test_status_is_independent_of_engine() {
    let mut game = GuessGame::new(custom_config(1, 100, 5), GameRng::new(3));
    game.start_new_game();
    game.make_guess(0);
    game.make_guess(101);

    let mut snapshot = game.status();
    snapshot.guess_history.clear();
    snapshot.attempts = 99;

    let fresh = game.status();
    assert_eq!(fresh.attempts, 2);
    assert_eq!(fresh.guess_history, vec![0, 101]);
}

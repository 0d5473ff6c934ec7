//! Interactive two-player matching game.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use matchdeck::{Game, GameOptions, Player, Reference, TurnAction, TurnReport};

fn main() {
    env_logger::init();

    let Some(packs) = prompt_packs() else {
        return;
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    log::debug!("seed {seed}");

    let options = GameOptions::default().with_packs(packs);
    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Options error: {err}");
            return;
        }
    };

    if let Err(err) = game.deal() {
        println!("Deal error: {err}");
        return;
    }

    print_hand(&game, Player::One);
    println!();
    print_hand(&game, Player::Two);

    println!("\nGame started!");

    match game.play_to_end(narrate) {
        Ok(result) => {
            println!("\nGame over!");
            println!("{} wins after {} turns.", result.winner, result.turns);
        }
        Err(err) => {
            println!("\nGame over!");
            println!("Turn error: {err}");
        }
    }
}

/// Asks for the pack count until a number in range is entered.
///
/// Returns `None` once input is exhausted.
fn prompt_packs() -> Option<u8> {
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("Enter the number of packs of cards from one to ten: ");
        let _ = io::stdout().flush();

        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }

        match input.trim().parse::<u8>() {
            Ok(packs) if GameOptions::is_valid_pack_count(packs) => return Some(packs),
            _ => {}
        }
    }
}

fn narrate(game: &Game, report: &TurnReport) {
    let player = report.player;

    match report.reference {
        Reference::Drawn(card) => println!("\n{player}'s turn - Top card: {card}"),
        Reference::LastPlayed(card) => {
            println!("\n{player}'s turn - Top card: {card} (last played)");
        }
    }

    match report.action {
        TurnAction::Played(card) => println!("{player} played card {card}"),
        TurnAction::Drew(_) => println!("{player} picks a card from the hidden deck"),
    }

    println!();
    print_hand(game, player);

    if report.reshuffled.is_some() {
        println!("\nReshuffling the deck!");
    }
}

fn print_hand(game: &Game, player: Player) {
    println!("{player}'s cards:");
    print!("{}", game.hand(player));
}

//! CLI suit-matching game example.
//!
//! Set `RUST_LOG=debug` to see the engine's own log lines.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use suitmatch::{Card, Deck, Game, GameOptions, Suit, TurnAction, TurnError, TurnReport};

fn main() {
    env_logger::init();

    println!("=== Suit or rank: a two-player matching game ===");

    let packs = prompt_packs("Enter number of card packs to use: ");
    println!("Using {packs} pack(s) of cards.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_packs(packs);
    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Game did not start: {err}");
            return;
        }
    };

    if let Err(err) = game.deal_initial_cards() {
        println!("Deal error: {err}");
        return;
    }

    for player in game.players() {
        println!("{}: {}", player.name(), format_hand(player.hand()));
    }

    match game.table_card() {
        Some(card) => println!("\nInitial card on table: {}\n", format_card(&card)),
        None => println!("\nNo card left to put on the table.\n"),
    }

    while !game.is_over() {
        let seat = game.current_player();
        let name = game.players()[seat].name().to_string();
        println!("It's {name}'s turn!");
        print_table(&game);

        match game.play_turn() {
            Ok(report) => print_report(&game, &name, &report),
            Err(TurnError::Stalemate) => {
                println!("Neither player can play or draw. Calling it a draw.");
                return;
            }
            Err(err) => {
                println!("Turn error: {err}");
                return;
            }
        }
        println!();
    }

    println!("=== Game Over! ===");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_packs(prompt: &str) -> u8 {
    let input = prompt_line(prompt);
    match input.parse::<i64>() {
        Ok(value) if value > 0 => u8::try_from(value).unwrap_or_else(|_| {
            println!("At most {} packs are supported. Using {}.", u8::MAX, u8::MAX);
            u8::MAX
        }),
        _ => {
            println!("Invalid number of packs. Using 1 pack by default.");
            1
        }
    }
}

fn print_table(game: &Game) {
    let table = game
        .table_card()
        .map_or_else(|| "(none)".to_string(), |card| format_card(&card));
    println!(
        "Table: {table} | draw pile {} | discard pile {}",
        game.draw_pile_len(),
        game.discard_pile_len()
    );

    let seat = game.current_player();
    let player = &game.players()[seat];
    println!("{}'s hand: {}", player.name(), format_hand(player.hand()));
}

fn print_report(game: &Game, name: &str, report: &TurnReport) {
    match report.action {
        TurnAction::Played { card, .. } => {
            println!("{name} plays {}", format_card(&card));
        }
        TurnAction::Drew(outcome) => {
            println!("{name} has no matching card and must draw!");
            if let Some(moved) = outcome.reshuffled {
                if moved == 0 {
                    println!("Draw pile empty and nothing to reshuffle.");
                } else {
                    println!("Draw pile empty! Reshuffled {moved} card(s) back into it.");
                }
            }
            match outcome.card {
                Some(card) => println!("{name} draws {}", format_card(&card)),
                None => println!("No card available to draw."),
            }
        }
    }

    let player = &game.players()[report.player];
    println!("{}'s hand: {}", player.name(), format_hand(player.hand()));

    if let Some(winner) = report.winner {
        println!("Game Over! {} wins!", game.players()[winner].name());
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &Deck) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.iter().map(format_card).collect::<Vec<_>>().join(", ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Heart | Suit::Diamond => "31",
        Suit::Club => "32",
        Suit::Spade => "34",
    };
    colorize(&card.to_string(), color_code)
}

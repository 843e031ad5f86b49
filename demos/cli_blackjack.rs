//! CLI blackjack table example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{Action, Participant, ShuffledDeck, Table, TableOptions};

const MAX_ATTEMPTS: usize = 5;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    println!("Blackjack table example");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = ShuffledDeck::new(seed);

    let Some(mut table) = seat_table() else {
        println!("Too many invalid attempts. Goodbye.");
        return;
    };

    let names: Vec<String> = table
        .gamblers()
        .iter()
        .map(|gambler| gambler.name().to_string())
        .collect();
    for name in &names {
        let Some(wager) = prompt_wager(name) else {
            println!("Too many invalid attempts. Goodbye.");
            return;
        };
        if let Err(err) = table.place_wager(name, wager) {
            println!("Wager error: {err}");
            return;
        }
    }

    if let Err(err) = table.initial_draw(&mut deck) {
        println!("Deal error: {err}");
        return;
    }
    println!("\nDealt two cards to {}, {}.", table.dealer().name(), names.join(", "));
    print_opening(&table);

    let mut ask = prompt_action;
    let mut turns = table.play_gambler_turns(&mut ask, &mut deck);
    if turns.is_ok() {
        // Show each gambler's final cards before the dealer plays.
        for gambler in table.gamblers() {
            print_cards(gambler);
        }
        let stands_on = table.options().dealer_stands_on;
        turns = table.dealer_phase(&mut deck).map(|drawn| {
            for _ in drawn {
                println!(
                    "\n{} is under {stands_on} and draws another card.",
                    table.dealer().name()
                );
            }
        });
    }
    if let Err(err) = turns {
        println!("Round error: {err}");
        return;
    }

    println!();
    for participant in table.participants() {
        println!(
            "{} cards: {} - score: {}",
            participant.name(),
            participant.hand(),
            participant.hand().score()
        );
    }

    match (table.resolve_all(), table.settle()) {
        (Ok(result), Ok(ledger)) => {
            let record = result.dealer_record();
            println!("\n## Results");
            println!(
                "{}: {} win(s), {} loss(es), {} push(es)",
                table.dealer().name(),
                record.wins,
                record.losses,
                record.pushes
            );
            for player in &result.players {
                println!("{}: {:?}", player.name, player.outcome);
            }

            println!("\n## Net earnings");
            println!("{}: {}", table.dealer().name(), ledger.dealer_net());
            for entry in ledger.entries() {
                println!("{}: {}", entry.name, entry.payout);
            }
        }
        (Err(err), _) | (_, Err(err)) => println!("Showdown error: {err}"),
    }
}

fn seat_table() -> Option<Table> {
    for _ in 0..MAX_ATTEMPTS {
        let line = prompt_line("Enter gambler names separated by commas: ");
        match Table::new(line.split(','), TableOptions::default()) {
            Ok(table) => return Some(table),
            Err(err) => println!("[ERROR] {err}"),
        }
    }
    None
}

fn prompt_wager(name: &str) -> Option<u64> {
    for _ in 0..MAX_ATTEMPTS {
        match prompt_line(&format!("\n{name}'s wager: ")).parse::<u64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("[ERROR] Please enter a non-negative whole number."),
        }
    }
    None
}

fn prompt_action(name: &str) -> Action {
    loop {
        let answer = prompt_line(&format!("Does {name} want another card? (y/n): ")).to_lowercase();
        match answer.as_str() {
            "y" | "yes" | "h" | "hit" => return Action::Hit,
            // End of input stands so the round can finish.
            "n" | "no" | "s" | "stand" | "" => return Action::Stand,
            _ => println!("[ERROR] Answer y or n."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn print_opening(table: &Table) {
    let dealer = table.dealer();
    if let Some(up) = dealer.hand().cards().first() {
        println!("{} cards: {up}", dealer.name());
    }
    for gambler in table.gamblers() {
        print_cards(gambler);
    }
    println!();
}

fn print_cards(participant: &Participant) {
    println!("{} cards: {}", participant.name(), participant.hand());
}

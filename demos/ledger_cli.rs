//! Interactive hand logger.
//!
//! Stores the session under `$BJLEDGER_DIR` (default `.bjledger`) and copies
//! exports with `$BJLEDGER_CLIPBOARD` (default: the platform clipboard tool),
//! printing them for manual copy when the clipboard is unavailable.

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::io::{self, Write};

use bjledger::{
    Card, CommandSink, Decimal, Decision, Delivery, FileStorage, Ledger, LedgerOptions, Outcome,
    PendingHand, RecordedHand, WriterSink, settle_with,
};

const HELP: &str = "\
Commands:
  p <cards..>     add player cards (e.g. `p A 10`)
  d <cards..>     add dealer cards
  s <cards..>     add cards seen outside the hand
  rp <n> / rd <n> remove player / dealer card n (from 1)
  bet <amount>    set the bet
  cash <amount>   set the cashout (blank clears)
  dec <decision>  Stand | Cashout | Double | Split | Blackjack
  res <result>    Win | Lose | Push
  ok              submit the hand
  stats           session statistics
  history         recorded hands
  decks <n>       set the number of decks in the shoe
  export          copy the spreadsheet export
  new             start a new session
  q               quit";

fn main() {
    env_logger::init();

    let dir = env::var("BJLEDGER_DIR").unwrap_or_else(|_| ".bjledger".to_string());
    let mut ledger = Ledger::open(FileStorage::new(dir), LedgerOptions::default());
    let mut pending = ledger.new_entry();

    println!("Blackjack ledger ({} hands loaded, `help` for commands)", ledger.session().len());

    loop {
        print_entry(&pending);
        let line = prompt_line("> ");
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();

        match command.to_lowercase().as_str() {
            "p" => add_cards(&args, |card| pending.add_player_card(card)),
            "d" => add_cards(&args, |card| pending.add_dealer_card(card)),
            "s" => add_cards(&args, |card| ledger.observe(card)),
            "rp" => remove_card(&args, |index| pending.remove_player_card(index)),
            "rd" => remove_card(&args, |index| pending.remove_dealer_card(index)),
            "bet" => {
                if let Err(err) = pending.set_bet_text(&args.join(" ")) {
                    println!("Bet error: {err}");
                }
            }
            "cash" => {
                if let Err(err) = pending.set_cashout_text(&args.join(" ")) {
                    println!("Cashout error: {err}");
                }
            }
            "dec" => match args.join(" ").parse::<Decision>() {
                Ok(decision) => pending.set_decision(decision),
                Err(err) => println!("Decision error: {err}"),
            },
            "res" => match args.join(" ").parse::<Outcome>() {
                Ok(result) => pending.set_result(result),
                Err(err) => println!("Result error: {err}"),
            },
            "ok" | "submit" => match ledger.submit(&mut pending) {
                Ok(id) => println!("Recorded hand #{id}."),
                Err(err) => println!("Not recorded: {err}"),
            },
            "stats" => print_stats(&ledger),
            "history" => print_history(&ledger),
            "decks" => match args.first().and_then(|n| n.parse::<u32>().ok()) {
                Some(decks) if decks > 0 => ledger.set_deck_count(decks),
                _ => println!("Please enter a positive number of decks."),
            },
            "export" => copy_export(&ledger),
            "new" => {
                if prompt_line("Clear all data? (y/n): ").eq_ignore_ascii_case("y") {
                    match ledger.reset() {
                        Ok(()) => {
                            pending = ledger.new_entry();
                            println!("New session started.");
                        }
                        Err(err) => println!("Reset error: {err}"),
                    }
                }
            }
            "help" | "h" | "?" => println!("{HELP}"),
            "q" | "quit" => break,
            _ => println!("Unknown command. Type `help`."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_string(),
    }
}

fn add_cards(args: &[&str], mut add: impl FnMut(Card)) {
    for arg in args {
        match arg.parse::<Card>() {
            Ok(card) => add(card),
            Err(err) => println!("`{arg}`: {err}"),
        }
    }
}

fn remove_card(args: &[&str], remove: impl FnOnce(usize) -> Option<Card>) {
    let removed = args
        .first()
        .and_then(|n| n.parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1))
        .and_then(remove);
    if removed.is_none() {
        println!("No such card.");
    }
}

fn print_entry(pending: &PendingHand) {
    println!(
        "\nPlayer: {} ({}) | Dealer: {} ({})",
        format_cards(pending.player_cards()),
        pending.player_total(),
        format_cards(pending.dealer_cards()),
        pending.dealer_total()
    );
    println!(
        "Bet: {} | Cashout: {} | Decision: {} | Result: {}",
        pending.bet().map_or_else(|| "-".to_string(), |bet| bet.to_string()),
        pending.cashout().map_or_else(|| "-".to_string(), |cash| cash.to_string()),
        pending.decision().map_or("-", Decision::label),
        pending.result().map_or("-", Outcome::label),
    );
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(none)".to_string();
    }
    cards
        .iter()
        .map(|card| colorize(card.label(), if card.hi_lo() > 0 { "32" } else { "0" }))
        .collect::<Vec<_>>()
        .join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn print_stats(ledger: &Ledger<FileStorage>) {
    let stats = ledger.session().stats();
    let count = ledger.session().count();

    println!("Total hands: {}", stats.hands);
    println!("Total bet: {}", stats.total_bet.normalize());
    println!("Total profit: {}", stats.total_profit.normalize());
    println!("Net profit: {}", stats.net_profit.normalize());
    println!("Avg profit per hand: {:.2}", stats.avg_profit_per_hand);
    println!("RTP: {:.1}%", stats.return_to_player);
    match count.true_count {
        Some(true_count) => println!(
            "Running count: {} | True count: {true_count:.2} ({} decks)",
            count.running_count,
            ledger.session().deck_count()
        ),
        None => println!(
            "Running count: {} | True count: n/a (shoe exhausted)",
            count.running_count
        ),
    }
}

fn print_history(ledger: &Ledger<FileStorage>) {
    let session = ledger.session();
    if session.is_empty() {
        println!("No hands recorded.");
        return;
    }
    for hand in session.hands() {
        print_hand(hand, ledger.options().blackjack_pays);
    }
}

fn print_hand(hand: &RecordedHand, blackjack_pays: Decimal) {
    let settlement = settle_with(hand, blackjack_pays);
    println!(
        "#{} Player {} ({}) | Dealer {} ({}) | Bet {} | Cashout {} | {} {} | {} [{}]",
        hand.id,
        format_cards(&hand.player_cards),
        hand.player_total(),
        format_cards(&hand.dealer_cards),
        hand.dealer_total(),
        hand.bet,
        hand.cashout,
        hand.decision,
        hand.result,
        settlement.profit,
        settlement.tag,
    );
}

fn clipboard() -> CommandSink {
    env::var("BJLEDGER_CLIPBOARD")
        .ok()
        .and_then(|line| CommandSink::from_command_line(&line))
        .unwrap_or_else(|| {
            let tool = if cfg!(target_os = "macos") {
                "pbcopy"
            } else if cfg!(target_os = "windows") {
                "clip"
            } else {
                "wl-copy"
            };
            CommandSink::new(tool, Vec::<String>::new())
        })
}

fn copy_export(ledger: &Ledger<FileStorage>) {
    let mut clipboard = clipboard();
    let mut fallback = WriterSink::new(io::stdout());

    match ledger.copy_export(&mut clipboard, &mut fallback) {
        Ok(Delivery::Primary) => println!("Export copied to the clipboard."),
        Ok(Delivery::Fallback) => println!("Clipboard unavailable; copy the export above."),
        Err(err) => println!("Export failed: {err}"),
    }
}

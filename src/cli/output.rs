use std::error::Error;

use crate::list::SortMode;
use crate::model::card::{Card, VoteDirection};

pub fn sort_mode_name(mode: SortMode) -> &'static str {
    match mode {
        SortMode::Default => "manual",
        SortMode::Votes => "votes",
    }
}

fn vote_marker(card: &Card) -> &'static str {
    match card.user_vote {
        Some(VoteDirection::Up) => " [voted up]",
        Some(VoteDirection::Down) => " [voted down]",
        None => "",
    }
}

pub fn print_cards(cards: &[Card], json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(cards)?);
        return Ok(());
    }
    for card in cards {
        println!(
            "{:<14} {:+4}  {} ({}\u{2191} {}\u{2193}){}",
            card.id,
            card.votes.score(),
            card.title,
            card.votes.up,
            card.votes.down,
            vote_marker(card),
        );
    }
    Ok(())
}

pub fn print_card(card: &Card, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(card)?);
        return Ok(());
    }
    println!("{}  {}", card.id, card.title);
    if !card.description.is_empty() {
        println!("  {}", card.description);
    }
    println!("  image:  {}", card.image);
    println!("  button: {} \u{2192} {}", card.button.label, card.button.url);
    println!(
        "  votes:  {}\u{2191} {}\u{2193} ({:+}){}",
        card.votes.up,
        card.votes.down,
        card.votes.score(),
        vote_marker(card),
    );
    Ok(())
}

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ib", version, about = "Collect ideas on cards, vote them up or down")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Board state file (default: board.json, or [board] file from ideaboard.toml)
    #[arg(short, long, global = true)]
    pub board: Option<String>,

    /// Seed deck loaded when the board file does not exist
    #[arg(long, global = true)]
    pub seed: Option<String>,

    /// Config file (default: ideaboard.toml, if present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Print as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Write a debug log to ideaboard.log
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all cards in their current order
    List,
    /// Show one card
    Show(ShowArgs),
    /// Add a card
    Add(AddArgs),
    /// Remove a card
    Remove(RemoveArgs),
    /// Vote a card up or down; repeating a vote retracts it
    Vote(VoteArgs),
    /// Toggle between manual order and sorting by votes
    Sort,
    /// Delete the board file so the next run starts from the seed deck
    Reset,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Card id, e.g. card_0
    pub id: String,
}

#[derive(Args)]
pub struct AddArgs {
    pub title: String,

    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Action button label
    #[arg(long)]
    pub button_label: Option<String>,

    /// Action button URL
    #[arg(long)]
    pub button_url: Option<String>,
}

#[derive(Args)]
pub struct RemoveArgs {
    pub id: String,
}

#[derive(Args)]
pub struct VoteArgs {
    pub id: String,
    /// "up" or "down"
    pub direction: String,
}

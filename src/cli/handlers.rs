use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::io::cache;
use crate::io::source::seed_source;
use crate::list::view::NullView;
use crate::list::{CardList, SortMode, display_order};
use crate::model::card::{Card, CardButton, CardData, VoteDirection};
use crate::model::config::BoardConfig;

use super::commands::{AddArgs, Cli, Commands};
use super::output;

pub struct BoardPaths {
    pub board: PathBuf,
    pub seed: Option<PathBuf>,
}

/// Flags win over config; the board file defaults to board.json.
pub fn resolve_paths(cli: &Cli, config: &BoardConfig) -> BoardPaths {
    let board = cli
        .board
        .clone()
        .or_else(|| config.board.file.clone())
        .unwrap_or_else(|| "board.json".to_string());
    let seed = cli.seed.clone().or_else(|| config.board.seed.clone());
    BoardPaths {
        board: PathBuf::from(board),
        seed: seed.map(PathBuf::from),
    }
}

/// Run one subcommand against the board file.
pub fn dispatch(cli: Cli, config: BoardConfig) -> Result<(), Box<dyn Error>> {
    let paths = resolve_paths(&cli, &config);
    let Some(command) = &cli.command else {
        return Ok(());
    };

    if let Commands::Reset = command {
        if paths.board.exists() {
            fs::remove_file(&paths.board)?;
        }
        println!("board cleared; the next run starts from the seed deck");
        return Ok(());
    }

    let mut list = load_board(&paths)?;

    match command {
        Commands::List => {
            // Listed the way the board shows them, not in stored order.
            let all = list.get_all();
            let ordered: Vec<Card> = display_order(&all, list.sort_mode())
                .into_iter()
                .cloned()
                .collect();
            output::print_cards(&ordered, cli.json)?;
        }
        Commands::Show(args) => {
            let card = list
                .card(&args.id)
                .ok_or_else(|| format!("no such card: {}", args.id))?;
            output::print_card(card, cli.json)?;
        }
        Commands::Add(args) => {
            let id = list
                .add(card_data_from(args))
                .map_err(|e| e.to_string())?;
            save(&list, &paths.board)?;
            let card = list.card(&id).ok_or("card vanished after add")?;
            if cli.json {
                output::print_card(card, true)?;
            } else {
                println!("added {id}");
            }
        }
        Commands::Remove(args) => {
            if list.card(&args.id).is_none() {
                return Err(format!("no such card: {}", args.id).into());
            }
            list.remove(&args.id).map_err(|e| e.to_string())?;
            save(&list, &paths.board)?;
            println!("removed {}", args.id);
        }
        Commands::Vote(args) => {
            let direction: VoteDirection = args
                .direction
                .parse()
                .map_err(|_| format!("direction must be \"up\" or \"down\", got {:?}", args.direction))?;
            if list.card(&args.id).is_none() {
                return Err(format!("no such card: {}", args.id).into());
            }
            list.vote(&args.id, direction).map_err(|e| e.to_string())?;
            save(&list, &paths.board)?;
            let card = list.card(&args.id).ok_or("card vanished after vote")?;
            if cli.json {
                output::print_card(card, true)?;
            } else {
                println!(
                    "{}: {}\u{2191} {}\u{2193} ({:+})",
                    card.id,
                    card.votes.up,
                    card.votes.down,
                    card.votes.score(),
                );
            }
        }
        Commands::Sort => {
            let mode = list.toggle_sort().map_err(|e| e.to_string())?;
            save(&list, &paths.board)?;
            println!("sort: {}", output::sort_mode_name(mode));
        }
        Commands::Reset => unreachable!("handled above"),
    }
    Ok(())
}

/// Read the board file, or seed a fresh board and persist it right away.
fn load_board(paths: &BoardPaths) -> Result<CardList<NullView>, Box<dyn Error>> {
    let mut list = CardList::new(NullView);
    match cache::read_board(&paths.board) {
        Some(state) => {
            let saved_sort = state.sort_mode;
            list.load(state.cards, false).map_err(|e| e.to_string())?;
            if saved_sort == SortMode::Votes {
                list.toggle_sort().map_err(|e| e.to_string())?;
            }
        }
        None => {
            let source = seed_source(paths.seed.as_deref());
            let cards = source.fetch()?;
            list.load(cards, true).map_err(|e| e.to_string())?;
            save(&list, &paths.board)?;
        }
    }
    Ok(list)
}

fn save(list: &CardList<NullView>, board: &Path) -> Result<(), Box<dyn Error>> {
    cache::write_board(board, &list.get_all(), list.sort_mode())?;
    Ok(())
}

fn card_data_from(args: &AddArgs) -> CardData {
    let button = if args.button_label.is_some() || args.button_url.is_some() {
        let mut button = CardButton::default();
        if let Some(label) = &args.button_label {
            button.label = label.clone();
        }
        if let Some(url) = &args.button_url {
            button.url = url.clone();
        }
        Some(button)
    } else {
        None
    };
    CardData {
        title: args.title.clone(),
        description: args.description.clone(),
        image: args.image.clone(),
        button,
        ..Default::default()
    }
}

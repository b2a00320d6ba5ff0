use std::path::Path;
use std::process::exit;

use clap::Parser;

use ideaboard::cli::commands::Cli;
use ideaboard::cli::handlers;
use ideaboard::io::config_io;
use ideaboard::logging;
use ideaboard::tui;
use ideaboard::tui::theme::Theme;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.debug) {
        eprintln!("warning: could not set up logging: {err}");
    }

    let config = match config_io::load_config(cli.config.as_deref().map(Path::new)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            exit(1);
        }
    };

    let result = if cli.command.is_none() {
        let paths = handlers::resolve_paths(&cli, &config);
        let theme = Theme::from_config(&config.ui);
        tui::run(&paths.board, paths.seed.as_deref(), theme)
    } else {
        handlers::dispatch(cli, config)
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        exit(1);
    }
}

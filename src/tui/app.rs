use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::cache;
use crate::io::source::seed_source;
use crate::list::{CardList, SortMode};
use crate::model::card::VoteDirection;
use crate::tui::drag::DragController;
use crate::tui::input;
use crate::tui::input::dialog::CardDialog;
use crate::tui::render;
use crate::tui::render::board_view::BoardView;
use crate::tui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Dialog,
    Confirm,
}

/// Top-level TUI state: the card list, the drag gesture, and whatever
/// overlay is open.
pub struct App {
    pub list: CardList<BoardView>,
    pub drag: DragController,
    pub mode: Mode,
    pub theme: Theme,
    pub cursor: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub status_message: Option<String>,
    pub error_text: Option<String>,
    pub dialog: Option<CardDialog>,
    pub confirm_delete: Option<String>,
    /// Reorder from a completed drop, held until one frame has drawn with the
    /// drag marks cleared.
    pub pending_reorder: Option<(String, String)>,
    board_path: PathBuf,
    seed_path: Option<PathBuf>,
}

impl App {
    pub fn new(board_path: &Path, seed_path: Option<&Path>, theme: Theme) -> Self {
        App {
            list: CardList::new(BoardView::default()),
            drag: DragController::default(),
            mode: Mode::Navigate,
            theme,
            cursor: 0,
            should_quit: false,
            show_help: false,
            status_message: None,
            error_text: None,
            dialog: None,
            confirm_delete: None,
            pending_reorder: None,
            board_path: board_path.to_path_buf(),
            seed_path: seed_path.map(Path::to_path_buf),
        }
    }

    /// Load the saved board, or fall back to the seed deck on first run.
    pub fn bootstrap(&mut self) {
        match cache::read_board(&self.board_path) {
            Some(state) => {
                let saved_sort = state.sort_mode;
                if let Err(err) = self.list.load(state.cards, false) {
                    log::error!("initial render failed: {err}");
                }
                if saved_sort == SortMode::Votes {
                    let _ = self.list.toggle_sort();
                }
            }
            None => self.load_from_seed(true),
        }
    }

    fn load_from_seed(&mut self, mark_as_origin: bool) {
        let source = seed_source(self.seed_path.as_deref());
        match source.fetch() {
            Ok(cards) => {
                if let Err(err) = self.list.load(cards, mark_as_origin) {
                    log::error!("initial render failed: {err}");
                }
                self.persist();
                self.status_message =
                    Some(format!("Loaded {} ideas from {}", self.list.len(), source.describe()));
            }
            Err(err) => {
                // The current collection stays as it was.
                log::error!("seed load failed: {err}");
                self.error_text = Some(err.to_string());
            }
        }
    }

    /// Write the board file. Failures are logged, never surfaced, and never
    /// roll back in-memory state.
    pub fn persist(&mut self) {
        if let Err(err) = cache::write_board(
            &self.board_path,
            &self.list.get_all(),
            self.list.sort_mode(),
        ) {
            log::warn!("could not save {}: {err}", self.board_path.display());
        }
    }

    pub fn cursor_card_id(&self) -> Option<String> {
        self.list.view.card_id_at(self.cursor).map(str::to_string)
    }

    pub fn move_cursor(&mut self, delta: i64) {
        let len = self.list.view.len();
        if len == 0 {
            return;
        }
        let next = self.cursor as i64 + delta;
        self.cursor = next.clamp(0, len as i64 - 1) as usize;
    }

    pub fn vote_cursor(&mut self, direction: VoteDirection) {
        if let Some(id) = self.cursor_card_id() {
            if let Err(err) = self.list.vote(&id, direction) {
                log::error!("vote re-render failed: {err}");
            }
            self.persist();
        }
    }

    /// Keyboard reorder: swap the selected card with its display neighbor.
    pub fn move_cursor_card(&mut self, delta: i64) {
        let len = self.list.view.len();
        let target_index = self.cursor as i64 + delta;
        if target_index < 0 || target_index >= len as i64 {
            return;
        }
        let (Some(source), Some(target)) = (
            self.list.view.card_id_at(self.cursor).map(str::to_string),
            self.list
                .view
                .card_id_at(target_index as usize)
                .map(str::to_string),
        ) else {
            return;
        };
        self.apply_reorder(&source, &target);
    }

    pub fn apply_reorder(&mut self, source: &str, target: &str) {
        match self.list.reorder(source, target) {
            Ok(()) => {
                if let Some(index) = self.list.view.index_of(source) {
                    self.cursor = index;
                }
                self.persist();
            }
            Err(err) => {
                // Already rolled back; just tell the user.
                log::warn!("reorder failed: {err}");
                self.status_message = Some("Reorder failed, order restored".into());
            }
        }
    }

    pub fn toggle_sort_action(&mut self) {
        match self.list.toggle_sort() {
            Ok(SortMode::Votes) => self.status_message = Some("Sorted by votes".into()),
            Ok(SortMode::Default) => self.status_message = Some("Manual order".into()),
            Err(err) => log::error!("sort re-render failed: {err}"),
        }
        self.persist();
    }

    /// Restore the deck the board started from.
    pub fn reset_action(&mut self) {
        if self.list.has_origin() {
            if let Err(err) = self.list.reset() {
                log::error!("reset re-render failed: {err}");
            }
            self.status_message = Some("Board reset".into());
            self.persist();
        } else {
            self.load_from_seed(true);
        }
        self.cursor = 0;
    }
}

/// Run the TUI until the user quits.
pub fn run(board: &Path, seed: Option<&Path>, theme: Theme) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Restore the terminal before the panic message prints.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(info);
    }));

    let mut app = App::new(board, seed, theme);
    app.bootstrap();

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // A drop's reorder is applied only after the frame above has shown
        // the drag marks cleared.
        if let Some((source, target)) = app.pending_reorder.take() {
            app.apply_reorder(&source, &target);
            continue;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

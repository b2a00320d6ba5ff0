pub mod cli;
pub mod io;
pub mod list;
pub mod logging;
pub mod model;
pub mod tui;

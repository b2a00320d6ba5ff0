/// Log file written next to the board when `--debug` is set.
pub const LOG_FILE: &str = "ideaboard.log";

/// Install the file logger. Without `--debug` nothing is installed and the
/// `log` macros are no-ops; the TUI never logs to the terminal it draws on.
pub fn init(debug: bool) -> Result<(), fern::InitError> {
    if !debug {
        return Ok(());
    }
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(LOG_FILE)?)
        .apply()?;
    Ok(())
}

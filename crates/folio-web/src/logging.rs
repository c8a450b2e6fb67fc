//! Console logging through the `console_log` backend.

use log::LevelFilter;

fn normalize_level(level: &str) -> Result<LevelFilter, String> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| format!("unsupported log level `{}`", level.trim()))
}

/// Route `log` macros to the browser console at `level`.
///
/// Fails if the level is unknown or a logger is already installed. `off`
/// installs nothing and silences the facade.
pub fn init_logging(level: &str) -> Result<(), String> {
    let filter = normalize_level(level)?;
    match filter.to_level() {
        Some(level) => console_log::init_with_level(level)
            .map_err(|e| format!("logger already installed: {}", e)),
        None => {
            log::set_max_level(LevelFilter::Off);
            Ok(())
        }
    }
}

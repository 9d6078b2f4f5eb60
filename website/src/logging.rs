//! Browser console logging
//!
//! `juxin-core` logs through `tracing`, whose `log` feature forwards events to
//! the `log` facade when no subscriber is installed. `console_log` sends both
//! to the browser console.

use juxin_core::{Error, Result};

/// Install the panic hook and the console logger.
///
/// Unknown level names fall back to `info`.
pub fn init(level: &str) -> Result<()> {
    console_error_panic_hook::set_once();

    let (parsed, known) = match level.parse::<log::Level>() {
        Ok(parsed) => (parsed, true),
        Err(_) => (log::Level::Info, false),
    };
    console_log::init_with_level(parsed).map_err(|e| Error::logging(e.to_string()))?;

    if !known {
        log::warn!("Unknown log level {level:?}, using info");
    }
    log::info!("JuXin site starting");
    Ok(())
}

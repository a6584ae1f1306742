use log::{debug, error, info, log_enabled, warn, Level};

/// Initializes the logger with the `env_logger` crate.
///
/// The level is taken from `RUST_LOG`. Like `env_logger::init`, this panics
/// if a logger is already installed; use [`try_init_logger`] where that can
/// happen (tests, embedding applications).
pub fn init_logger() {
    env_logger::init();
}

/// Initializes the logger, ignoring a logger that is already installed.
///
/// Returns `true` if this call installed the logger.
pub fn try_init_logger() -> bool {
    env_logger::builder().is_test(cfg!(test)).try_init().is_ok()
}

/// Logs an error message.
pub fn log_error(message: &str) {
    if log_enabled!(Level::Error) {
        error!("{message}");
    }
}

/// Logs a warning message.
pub fn log_warn(message: &str) {
    if log_enabled!(Level::Warn) {
        warn!("{message}");
    }
}

/// Logs an informational message.
pub fn log_info(message: &str) {
    if log_enabled!(Level::Info) {
        info!("{message}");
    }
}

/// Logs a debug message.
pub fn log_debug(message: &str) {
    if log_enabled!(Level::Debug) {
        debug!("{message}");
    }
}

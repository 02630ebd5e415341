//! Interactive todo session entry point.
//!
//! # Responsibility
//! - Wire the real terminal streams into the menu controller.
//! - Bootstrap file logging from the environment; never let logging
//!   failures block the session.

use jotlist_cli::controller::MenuController;
use jotlist_core::{core_version, default_log_level, init_logging, TodoStore};
use log::info;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

const LOG_LEVEL_ENV: &str = "JOTLIST_LOG_LEVEL";
const LOG_DIR_ENV: &str = "JOTLIST_LOG_DIR";

fn main() -> ExitCode {
    init_session_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut controller = MenuController::new(stdin.lock(), stdout.lock(), stderr.lock());
    let mut store = TodoStore::new();

    match controller.run(&mut store) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The only abnormal exit: the terminal streams themselves broke.
            eprintln!("terminal I/O failed: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes file logging; the session runs without a log file when
/// initialization fails.
fn init_session_logging() {
    let level =
        std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    let log_dir = std::env::var(LOG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("jotlist-logs"));

    match init_logging(&level, &log_dir.to_string_lossy()) {
        Ok(()) => info!(
            "event=session_start module=cli status=ok core_version={}",
            core_version()
        ),
        Err(err) => eprintln!("warning: file logging disabled: {err}"),
    }
}

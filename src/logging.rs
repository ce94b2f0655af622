use std::fs::OpenOptions;
use std::path::PathBuf;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::eval::Decision;

/// Directory holding the decision log, relative to $HOME.
const LOG_DIR: &str = "~/.local/share/cc-killgate";

/// Longest command prefix written to the log.
const MAX_COMMAND_CHARS: usize = 200;

/// Full path of `decisions.log`.
pub fn log_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(LOG_DIR).into_owned()).join("decisions.log")
}

/// Route `log` records to ~/.local/share/cc-killgate/decisions.log.
///
/// Best-effort: returns false and leaves logging disabled on any failure.
/// Logging must never block the hook or write to stdout.
pub fn init() -> bool {
    let path = log_path();
    if let Some(dir) = path.parent()
        && std::fs::create_dir_all(dir).is_err()
    {
        return false;
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return false;
    };

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    WriteLogger::init(LevelFilter::Info, config, file).is_ok()
}

/// Append one decision record.
pub fn log_decision(command: &str, decision: &Decision) {
    log::info!("{}", decision_line(command, decision));
}

/// Tab-separated `decision  command  reason`, always a single line.
fn decision_line(command: &str, decision: &Decision) -> String {
    let cmd_truncated: String = command
        .chars()
        .take(MAX_COMMAND_CHARS)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    // Compact single-line reason for the log (replace newlines with "; ")
    let reason_oneline = decision.reason().replace('\n', "; ");
    format!(
        "{decision}\t{cmd_truncated}\t{reason_oneline}",
        decision = decision.permission.as_str(),
    )
}

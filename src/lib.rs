//! cc-killgate: a PreToolUse hook for Claude Code that blocks broad process kills.
//!
//! Agents like to "clean up" with `pkill -f node` or `killall vite`, which also
//! takes down the runtime the agent host itself is running on. This crate
//! checks each proposed Bash command against a short denylist and, on a match,
//! answers with a `deny` decision that suggests killing by port instead.
//! Everything else is allowed by saying nothing.
//!
//! # Architecture
//!
//! - **[`hook`]**: Wire types: the host's request and the denial payload.
//! - **[`eval`]**: [`CommandGuard`](crate::eval::CommandGuard) and the decision types.
//! - **[`rules`]**: The ordered denylist and its regex shapes.
//! - **[`config`]**: Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]**: Decision logging to `~/.local/share/cc-killgate/decisions.log`.
//! - **[`error`]**: Internal errors; the binary fails open on all of them.

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Internal error type.
pub mod error;
/// Evaluation engine: guard and decision types.
pub mod eval;
/// Host request/response JSON.
pub mod hook;
/// File-based decision logging.
pub mod logging;
/// Broad-kill denylist.
pub mod rules;

use eval::{CommandGuard, Decision};
use hook::HookOutput;

/// Build a guard from the embedded default config.
fn default_guard() -> Option<CommandGuard> {
    CommandGuard::from_config(&config::Config::default_config()).ok()
}

/// Evaluate a shell command string with the default denylist.
///
/// This is the main entry point for tests and simple usage.
/// For hook usage with the user config, build the guard directly.
pub fn evaluate(command: &str) -> Decision {
    default_guard()
        .map(|g| g.evaluate_command(command))
        .unwrap_or_else(Decision::allow)
}

/// Run raw hook input through the default guard. `None` means allow.
pub fn respond(input: &str) -> Option<HookOutput> {
    default_guard()?.respond(input)
}

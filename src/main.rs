//! cc-killgate: PreToolUse hook for Claude Code.
//!
//! Reads the hook JSON from stdin. Prints a deny decision to stdout when a
//! Bash command would broadly kill node/bun/vite processes; prints nothing
//! otherwise. Always exits 0: any internal failure means allow.
//!
//! With `log_decisions = false` nothing is logged at all, warnings included.

use std::io::{Read, Write};

use cc_killgate::config::Config;
use cc_killgate::error::GuardError;
use cc_killgate::eval::CommandGuard;
use cc_killgate::logging;

fn main() {
    let (config, overlay_error) = Config::load();
    if config.settings.log_decisions {
        logging::init();
    }
    if let Some(e) = overlay_error {
        log::warn!("ignoring ~/.config/cc-killgate/config.toml: {e}");
    }

    if let Err(e) = run(&config) {
        log::warn!("{e}; allowing");
    }
}

fn run(config: &Config) -> Result<(), GuardError> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(GuardError::Stdin)?;

    let guard = CommandGuard::from_config(config)?;
    let output = guard.respond_with(&input, |command, decision| {
        if config.settings.log_decisions {
            logging::log_decision(command, decision);
        }
    });

    if let Some(output) = output {
        let json = output.to_json()?;
        writeln!(std::io::stdout().lock(), "{json}").map_err(GuardError::Stdout)?;
    }
    Ok(())
}

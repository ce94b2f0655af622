pub mod decision;

pub use decision::{Decision, PRE_TOOL_USE, Permission};

use crate::config::Config;
use crate::error::GuardError;
use crate::hook::{HookOutput, InvocationRequest};
use crate::rules::Denylist;

/// Stateless PreToolUse guard: a tool name to watch plus the denylist.
#[derive(Debug, Clone)]
pub struct CommandGuard {
    tool_name: String,
    denylist: Denylist,
}

impl CommandGuard {
    /// Build the guard from configuration.
    pub fn from_config(config: &Config) -> Result<Self, GuardError> {
        Ok(Self {
            tool_name: config.guard.tool_name.clone(),
            denylist: Denylist::new(config.guard.process_names.as_slice())?,
        })
    }

    /// Whether the request targets the shell-execution tool.
    pub fn applies_to(&self, request: &InvocationRequest) -> bool {
        request.tool_name() == self.tool_name
    }

    /// Evaluate a parsed request. Non-shell tools are always allowed.
    pub fn evaluate(&self, request: &InvocationRequest) -> Decision {
        if !self.applies_to(request) {
            return Decision::allow();
        }
        self.evaluate_command(request.command())
    }

    /// Evaluate a shell command string against the denylist.
    pub fn evaluate_command(&self, command: &str) -> Decision {
        match self.denylist.first_match(command) {
            Some(rule) => {
                log::debug!("rule {} matched", rule.kind.as_str());
                Decision::deny(rule.reason())
            }
            None => Decision::allow(),
        }
    }

    /// Full hook round-trip on raw stdin text.
    ///
    /// Unparseable input fails open: `None`, i.e. print nothing.
    pub fn respond(&self, raw: &str) -> Option<HookOutput> {
        self.respond_with(raw, |_, _| {})
    }

    /// Like [`respond`](Self::respond), calling `on_decision` with the command
    /// and decision whenever a shell command was actually evaluated.
    pub fn respond_with<F>(&self, raw: &str, on_decision: F) -> Option<HookOutput>
    where
        F: FnOnce(&str, &Decision),
    {
        let request = match InvocationRequest::from_json(raw) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("{e}; allowing");
                return None;
            }
        };
        if !self.applies_to(&request) || request.command().is_empty() {
            return None;
        }

        let decision = self.evaluate_command(request.command());
        on_decision(request.command(), &decision);
        HookOutput::from_decision(&decision)
    }
}

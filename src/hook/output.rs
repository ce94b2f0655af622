use serde::Serialize;

use crate::error::GuardError;
use crate::eval::Decision;

/// The JSON object printed to stdout when the guard has an opinion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: String,
    pub permission_decision: String,
    pub permission_decision_reason: String,
}

impl HookOutput {
    /// Convert a decision into wire form. Allow decisions produce no output.
    pub fn from_decision(decision: &Decision) -> Option<Self> {
        if !decision.is_deny() {
            return None;
        }
        Some(Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: decision.event_name.to_string(),
                permission_decision: decision.permission.as_str().to_string(),
                permission_decision_reason: decision.reason.clone().unwrap_or_default(),
            },
        })
    }

    pub fn to_json(&self) -> Result<String, GuardError> {
        serde_json::to_string(self).map_err(GuardError::Serialize)
    }
}

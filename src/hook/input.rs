use serde::Deserialize;
use serde_json::Value;

use crate::error::GuardError;

/// The slice of a PreToolUse request the guard cares about.
///
/// Every other field the host sends (session id, cwd, transcript path, ...)
/// is ignored by serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvocationRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub tool_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_tool_input")]
    pub tool_input: Option<ToolInput>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default, deserialize_with = "lenient_string")]
    pub command: Option<String>,
}

impl InvocationRequest {
    /// Build a shell-execution request, mostly for tests and library callers.
    pub fn bash(command: impl Into<String>) -> Self {
        Self {
            tool_name: Some("Bash".into()),
            tool_input: Some(ToolInput {
                command: Some(command.into()),
            }),
        }
    }

    /// Parse the raw stdin payload.
    pub fn from_json(raw: &str) -> Result<Self, GuardError> {
        serde_json::from_str(raw).map_err(GuardError::InvalidInput)
    }

    /// The requested tool, or `""` when the host didn't send one.
    pub fn tool_name(&self) -> &str {
        self.tool_name.as_deref().unwrap_or("")
    }

    /// The shell command, or `""` when absent.
    pub fn command(&self) -> &str {
        self.tool_input
            .as_ref()
            .and_then(|t| t.command.as_deref())
            .unwrap_or("")
    }
}

/// Accept any JSON value; only a string counts.
fn lenient_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Accept any JSON value; only an object is read as tool input.
fn lenient_tool_input<'de, D>(de: D) -> Result<Option<ToolInput>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(de)? {
        v @ Value::Object(_) => Ok(serde_json::from_value(v).ok()),
        _ => Ok(None),
    }
}

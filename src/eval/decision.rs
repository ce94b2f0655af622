/// The hook phase this guard runs in.
pub const PRE_TOOL_USE: &str = "PreToolUse";

/// Reason used if a deny is ever built from an empty string.
const FALLBACK_REASON: &str = "Blocked: broad process kill";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Permission {
    Allow,
    Deny,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::Allow => "allow",
            Permission::Deny => "deny",
        }
    }
}

/// Outcome of one evaluation. A deny always carries a non-empty reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub event_name: &'static str,
    pub permission: Permission,
    pub reason: Option<String>,
}

impl Decision {
    pub fn allow() -> Self {
        Self {
            event_name: PRE_TOOL_USE,
            permission: Permission::Allow,
            reason: None,
        }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        let reason = if reason.trim().is_empty() {
            FALLBACK_REASON.to_string()
        } else {
            reason
        };
        Self {
            event_name: PRE_TOOL_USE,
            permission: Permission::Deny,
            reason: Some(reason),
        }
    }

    pub fn is_deny(&self) -> bool {
        self.permission == Permission::Deny
    }

    /// Reason text, or `""` for an allow.
    pub fn reason(&self) -> &str {
        self.reason.as_deref().unwrap_or("")
    }
}

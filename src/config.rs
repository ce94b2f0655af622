use serde::{Deserialize, Serialize};

use crate::error::GuardError;

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

/// Location of the optional user overlay.
const USER_CONFIG_PATH: &str = "~/.config/cc-killgate/config.toml";

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub guard: GuardConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default = "default_true")]
    pub log_decisions: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_decisions: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GuardConfig {
    /// The host's name for the shell-execution tool.
    #[serde(default = "default_tool_name")]
    pub tool_name: String,
    /// Process names protected from pattern and name kills.
    #[serde(default)]
    pub process_names: Vec<String>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            tool_name: default_tool_name(),
            process_names: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tool_name() -> String {
    "Bash".into()
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    guard: GuardOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    log_decisions: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct GuardOverlay {
    #[serde(default)]
    replace: bool,
    tool_name: Option<String>,
    #[serde(default)]
    process_names: Vec<String>,
    #[serde(default)]
    remove_process_names: Vec<String>,
}

// ── Merge logic ──

/// Merge a user list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove items first, then extend with additions (deduped).
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

impl Config {
    /// Parse the embedded default configuration.
    pub fn try_default_config() -> Result<Self, GuardError> {
        Ok(toml::from_str(DEFAULT_CONFIG)?)
    }

    /// Load the default embedded configuration.
    ///
    /// Falls back to the built-in struct defaults if the embedded file is
    /// somehow unparseable; the guard must come up regardless.
    pub fn default_config() -> Self {
        Self::try_default_config().unwrap_or_else(|e| {
            log::warn!("embedded default config did not parse: {e}");
            Self {
                settings: Settings::default(),
                guard: GuardConfig {
                    process_names: vec!["node".into(), "bun".into(), "vite".into()],
                    ..GuardConfig::default()
                },
            }
        })
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/cc-killgate/config.toml (if exists)
    ///
    /// A broken overlay is skipped and its error handed back, so the caller
    /// can report it once logging is set up (or not at all).
    pub fn load() -> (Self, Option<GuardError>) {
        let mut config = Self::default_config();
        match Self::load_overlay() {
            Ok(Some(overlay)) => {
                config.apply_overlay(overlay);
                (config, None)
            }
            Ok(None) => (config, None),
            Err(e) => (config, Some(e)),
        }
    }

    /// Try to load the user overlay. `Ok(None)` when the file does not exist.
    fn load_overlay() -> Result<Option<ConfigOverlay>, GuardError> {
        let path = shellexpand::tilde(USER_CONFIG_PATH);
        let content = match std::fs::read_to_string(&*path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(GuardError::ConfigRead(e)),
        };
        Ok(Some(toml::from_str(&content)?))
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        if let Some(v) = overlay.settings.log_decisions {
            self.settings.log_decisions = v;
        }

        let g = overlay.guard;
        merge_list(
            &mut self.guard.process_names,
            g.process_names,
            &g.remove_process_names,
            g.replace,
        );
        if let Some(v) = g.tool_name {
            self.guard.tool_name = v;
        }
    }

    /// Apply an overlay from a TOML string.
    pub fn apply_overlay_str(&mut self, toml_str: &str) -> Result<(), GuardError> {
        let overlay: ConfigOverlay = toml::from_str(toml_str)?;
        self.apply_overlay(overlay);
        Ok(())
    }
}

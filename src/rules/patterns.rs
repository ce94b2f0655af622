//! Regex sources for each broad-kill shape.
//!
//! Every builder takes `names`, an already-escaped alternation such as
//! `node|bun|vite`. Matching is made case-insensitive by the caller.

/// Argument text within one simple command: stops at `;`, `&`, `|` and newlines.
const ARGS: &str = r"[^;&|\n]*";

/// `pkill [...] -f|--full [...] <name>`: kill everything whose full command line mentions a name.
pub fn pkill_full(names: &str) -> String {
    format!(r"\bpkill\s+(?:{ARGS}\s)?(?:-f|--full)\s+{ARGS}\b(?:{names})\b")
}

/// `pkill [flags] <name>`: the name must be the whole pattern word.
pub fn pkill_name(names: &str) -> String {
    format!(r#"\bpkill\s+(?:-\S+\s+)*["']?(?:{names})\b"#)
}

/// `killall [flags] <name>`.
pub fn killall(names: &str) -> String {
    format!(r#"\bkillall\s+(?:-\S+\s+)*["']?(?:{names})\b"#)
}

/// `kill ... $(pgrep ... <name>)`.
pub fn kill_pgrep(names: &str) -> String {
    format!(r"\bkill\b{ARGS}\$\(\s*pgrep\b[^)]*\b(?:{names})\b")
}

/// Escape and join process names into a regex alternation.
/// Returns `None` when no usable name remains.
pub fn name_alternation<S: AsRef<str>>(names: &[S]) -> Option<String> {
    let escaped: Vec<String> = names
        .iter()
        .map(|n| n.as_ref().trim())
        .filter(|n| !n.is_empty())
        .map(regex::escape)
        .collect();
    if escaped.is_empty() {
        None
    } else {
        Some(escaped.join("|"))
    }
}

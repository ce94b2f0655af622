//! The denylist: an ordered, immutable table of broad-kill rules.
//!
//! Built once from the configured process names and never mutated.
//! Evaluation is a linear scan; the first matching rule wins.

/// Regex sources for the individual rule shapes.
pub mod patterns;

use regex::{Regex, RegexBuilder};

use crate::error::GuardError;

/// Suggested replacement included in every denial.
pub const SAFE_ALTERNATIVE: &str = "kill by port instead: kill $(lsof -t -i :<port>)";

/// The dangerous invocation shapes, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    PkillFull,
    PkillName,
    Killall,
    KillPgrep,
}

impl RuleKind {
    pub const ALL: [RuleKind; 4] = [
        RuleKind::PkillFull,
        RuleKind::PkillName,
        RuleKind::Killall,
        RuleKind::KillPgrep,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::PkillFull => "pkill-full",
            RuleKind::PkillName => "pkill-name",
            RuleKind::Killall => "killall",
            RuleKind::KillPgrep => "kill-pgrep",
        }
    }

    /// Human-readable shape, used in the denial reason.
    pub fn description(self) -> &'static str {
        match self {
            RuleKind::PkillFull => "`pkill -f` matching a runtime name",
            RuleKind::PkillName => "`pkill` of a runtime by name",
            RuleKind::Killall => "`killall` of a runtime",
            RuleKind::KillPgrep => "`kill $(pgrep ...)` of a runtime",
        }
    }

    fn source(self, names: &str) -> String {
        match self {
            RuleKind::PkillFull => patterns::pkill_full(names),
            RuleKind::PkillName => patterns::pkill_name(names),
            RuleKind::Killall => patterns::killall(names),
            RuleKind::KillPgrep => patterns::kill_pgrep(names),
        }
    }
}

/// One compiled (pattern, reason) pair.
#[derive(Debug, Clone)]
pub struct Rule {
    pub kind: RuleKind,
    regex: Regex,
    reason: String,
}

impl Rule {
    fn build(kind: RuleKind, alternation: &str, display_names: &str) -> Result<Self, GuardError> {
        let regex = RegexBuilder::new(&kind.source(alternation))
            .case_insensitive(true)
            .build()?;
        let reason = format!(
            "Blocked: {} would kill every matching process ({display_names}), \
             including ones the agent host itself runs on. Target the specific process; \
             {SAFE_ALTERNATIVE}",
            kind.description(),
        );
        Ok(Self {
            kind,
            regex,
            reason,
        })
    }

    pub fn is_match(&self, command: &str) -> bool {
        self.regex.is_match(command)
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Ordered rule table.
#[derive(Debug, Clone, Default)]
pub struct Denylist {
    rules: Vec<Rule>,
}

impl Denylist {
    /// Compile every rule shape for the given process names.
    ///
    /// An empty (or all-blank) name list yields an empty denylist.
    pub fn new<S: AsRef<str>>(process_names: &[S]) -> Result<Self, GuardError> {
        let Some(alternation) = patterns::name_alternation(process_names) else {
            return Ok(Self::default());
        };
        let display_names = process_names
            .iter()
            .map(|n| n.as_ref().trim())
            .filter(|n| !n.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        let rules = RuleKind::ALL
            .iter()
            .map(|&kind| Rule::build(kind, &alternation, &display_names))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// First rule matching `command`, if any.
    pub fn first_match(&self, command: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.is_match(command))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_list() -> Denylist {
        Denylist::new(&["node", "bun", "vite"]).unwrap()
    }

    fn kind_for(cmd: &str) -> Option<RuleKind> {
        default_list().first_match(cmd).map(|r| r.kind)
    }

    #[test]
    fn builds_all_rules_in_order() {
        let kinds: Vec<RuleKind> = default_list().rules().iter().map(|r| r.kind).collect();
        assert_eq!(kinds, RuleKind::ALL.to_vec());
    }

    #[test]
    fn first_match_wins() {
        // Also matches the bare-name rule, but the -f rule comes first.
        assert_eq!(kind_for("pkill -f bun"), Some(RuleKind::PkillFull));
        assert_eq!(kind_for("pkill bun"), Some(RuleKind::PkillName));
        assert_eq!(kind_for("killall vite"), Some(RuleKind::Killall));
        assert_eq!(kind_for("kill $(pgrep -f node)"), Some(RuleKind::KillPgrep));
    }

    #[test]
    fn no_match() {
        assert_eq!(kind_for("ls -la"), None);
        assert_eq!(kind_for("kill $(lsof -t -i :3000)"), None);
        assert_eq!(kind_for("pkill bunny"), None);
    }

    #[test]
    fn reasons_are_blocked_with_alternative() {
        for rule in default_list().rules() {
            assert!(rule.reason().starts_with("Blocked:"), "{}", rule.reason());
            assert!(rule.reason().contains("lsof -t -i"));
            assert!(rule.reason().contains("node, bun, vite"));
        }
    }

    #[test]
    fn empty_names_give_empty_list() {
        let list = Denylist::new::<&str>(&[]).unwrap();
        assert!(list.is_empty());
        assert!(list.first_match("pkill -f node").is_none());
    }

    #[test]
    fn names_with_regex_metacharacters_are_literal() {
        let list = Denylist::new(&["next.js"]).unwrap();
        assert!(list.first_match("killall next.js").is_some());
        assert!(list.first_match("killall nextxjs").is_none());
    }

    #[test]
    fn extra_names_are_protected() {
        let list = Denylist::new(&["deno"]).unwrap();
        assert_eq!(
            list.first_match("pkill -f deno").map(|r| r.kind),
            Some(RuleKind::PkillFull)
        );
        assert!(list.first_match("pkill -f node").is_none());
    }
}

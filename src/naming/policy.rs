//! Transformation policy: which characters go, and what happens to spaces.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// What to do with spaces in a base name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpacePolicy {
    /// Delete every space (default)
    #[default]
    Remove,
    /// Replace each space with `_`
    Underscore,
    /// Replace each space with `-`
    Dash,
}

impl SpacePolicy {
    /// Underscore wins when both flags are set, matching the command line's
    /// historical precedence; the CLI itself rejects the combination.
    pub fn from_flags(underscore: bool, dash: bool) -> Self {
        if underscore {
            SpacePolicy::Underscore
        } else if dash {
            SpacePolicy::Dash
        } else {
            SpacePolicy::Remove
        }
    }

    /// Replacement character, or `None` when spaces are deleted.
    pub fn replacement(self) -> Option<char> {
        match self {
            SpacePolicy::Remove => None,
            SpacePolicy::Underscore => Some('_'),
            SpacePolicy::Dash => Some('-'),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remove" | "none" | "delete" => Some(SpacePolicy::Remove),
            "underscore" | "_" => Some(SpacePolicy::Underscore),
            "dash" | "hyphen" | "-" => Some(SpacePolicy::Dash),
            _ => None,
        }
    }
}

impl fmt::Display for SpacePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SpacePolicy::Remove => "remove",
            SpacePolicy::Underscore => "underscore",
            SpacePolicy::Dash => "dash",
        })
    }
}

impl FromStr for SpacePolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid space policy: '{s}'"))
    }
}

/// Immutable name-transformation settings for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformPolicy {
    strip: BTreeSet<char>,
    spaces: SpacePolicy,
}

impl TransformPolicy {
    pub fn new(strip: &str, spaces: SpacePolicy) -> Self {
        Self {
            strip: strip.chars().collect(),
            spaces,
        }
    }

    pub fn strip_set(&self) -> &BTreeSet<char> {
        &self.strip
    }

    pub fn spaces(&self) -> SpacePolicy {
        self.spaces
    }

    /// True when applying the policy twice gives the same result as once.
    /// Fails only if the space replacement is itself a stripped character.
    pub fn is_idempotent(&self) -> bool {
        self.spaces
            .replacement()
            .is_none_or(|c| !self.strip.contains(&c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_precedence() {
        assert_eq!(SpacePolicy::from_flags(false, false), SpacePolicy::Remove);
        assert_eq!(SpacePolicy::from_flags(false, true), SpacePolicy::Dash);
        assert_eq!(SpacePolicy::from_flags(true, true), SpacePolicy::Underscore);
    }

    #[test]
    fn parse_names() {
        assert_eq!("Dash".parse::<SpacePolicy>().unwrap(), SpacePolicy::Dash);
        assert_eq!(SpacePolicy::parse(" underscore "), Some(SpacePolicy::Underscore));
        assert!("tabs".parse::<SpacePolicy>().is_err());
    }

    #[test]
    fn duplicate_strip_chars_collapse() {
        let p = TransformPolicy::new("aab", SpacePolicy::Remove);
        assert_eq!(p.strip_set().len(), 2);
    }

    #[test]
    fn idempotence_guard() {
        assert!(TransformPolicy::new("_", SpacePolicy::Dash).is_idempotent());
        assert!(!TransformPolicy::new("_", SpacePolicy::Underscore).is_idempotent());
    }
}

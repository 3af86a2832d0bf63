//! Deciding whether captured `id` output means superuser.
//!
//! Anything a predicate cannot positively identify as root is reported as
//! not root: a missing `id` binary, empty output or an unexpected format all
//! classify as non-root.

use std::fmt;

/// Substring `id` prints when the caller is UID 0 bound to the root account.
pub const ROOT_MARKER: &str = "uid=0(root)";

/// Classifies the standard output of the identity command
pub trait RootPredicate: Send + Sync + fmt::Debug {
    /// Short name used in logs and configuration
    fn name(&self) -> &'static str;

    /// Returns true if `stdout` shows the container running as root
    fn is_root(&self, stdout: &str) -> bool;
}

/// Matches the literal `uid=0(root)` marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct UidMarker;

impl RootPredicate for UidMarker {
    fn name(&self) -> &'static str {
        "marker"
    }

    fn is_root(&self, stdout: &str) -> bool {
        stdout.contains(ROOT_MARKER)
    }
}

/// Parses the numeric `uid=` field and treats UID 0 as root whatever the
/// account is called.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericUid;

impl NumericUid {
    /// Extract the real UID from `id` output
    #[must_use]
    pub fn parse_uid(stdout: &str) -> Option<u32> {
        let rest = stdout
            .split_whitespace()
            .find_map(|field| field.strip_prefix("uid="))?;
        let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
        digits.parse().ok()
    }
}

impl RootPredicate for NumericUid {
    fn name(&self) -> &'static str {
        "numeric-uid"
    }

    fn is_root(&self, stdout: &str) -> bool {
        Self::parse_uid(stdout) == Some(0)
    }
}

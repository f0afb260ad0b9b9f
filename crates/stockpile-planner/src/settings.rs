//! Per-call resolution settings.

use serde::{Deserialize, Serialize};

/// Settings controlling how a cart is resolved.
///
/// Passed explicitly into every resolution call rather than read from any
/// ambient state, so concurrent callers can use different settings against
/// the same catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveSettings {
    /// Expand craftable materials recursively down to leaf items. When off,
    /// expansion stops after one level even for craftable materials.
    pub recursive: bool,
    /// Inflate craft counts to compensate for recipe success chance.
    pub account_for_chance: bool,
}

impl ResolveSettings {
    /// Both flags off: shallow expansion, chance ignored.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            recursive: false,
            account_for_chance: false,
        }
    }

    /// Sets recursive expansion.
    #[must_use]
    pub const fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Sets chance compensation.
    #[must_use]
    pub const fn with_account_for_chance(mut self, account: bool) -> Self {
        self.account_for_chance = account;
        self
    }
}

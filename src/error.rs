//! Navigation outcomes.
//!
//! There is no exception-style error taxonomy here: every failure mode of a
//! navigation is "it did not happen", expressed as [`NavigationResult`].
//! A guard veto is expected and frequent (the user declining to discard a
//! draft), so it is an ordinary outcome rather than an `Err`.
//!
//! # Examples
//!
//! ```
//! use gpui_waypoint::NavigationResult;
//!
//! let result = NavigationResult::Committed { path: "/home".into() };
//! assert!(result.is_committed());
//! assert_eq!(result.path(), Some("/home"));
//!
//! let blocked = NavigationResult::Blocked {
//!     reason: "guard 'UnsavedChangesGuard' vetoed navigation".into(),
//! };
//! assert!(blocked.is_blocked());
//! ```

/// Outcome of a navigation attempt.
///
/// Returned by [`GlobalNavigator::push`](crate::GlobalNavigator::push) and
/// friends. A transition either commits atomically (location and host history
/// updated together) or is dropped atomically with no side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationResult {
    /// The transition committed; `path` is the new normalized location.
    Committed { path: String },
    /// A guard vetoed the transition; nothing changed.
    Blocked { reason: String },
}

impl NavigationResult {
    /// Check if the transition committed.
    pub fn is_committed(&self) -> bool {
        matches!(self, NavigationResult::Committed { .. })
    }

    /// Check if the transition was vetoed.
    pub fn is_blocked(&self) -> bool {
        matches!(self, NavigationResult::Blocked { .. })
    }

    /// The committed location, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            NavigationResult::Committed { path } => Some(path),
            NavigationResult::Blocked { .. } => None,
        }
    }

    /// The veto reason, if the transition was blocked.
    pub fn blocked_reason(&self) -> Option<&str> {
        match self {
            NavigationResult::Blocked { reason } => Some(reason),
            NavigationResult::Committed { .. } => None,
        }
    }
}

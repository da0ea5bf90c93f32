//! Navigation guards: veto predicates with disposable registrations.
//!
//! A guard is a **synchronous** predicate evaluated against every requested
//! transition — programmatic navigation and host back/forward gestures alike.
//! If any guard returns `false`, the transition is dropped with no side
//! effects. GPUI is a single-threaded desktop framework, so there is no async
//! guard variant: a guard that needs user confirmation must block on a
//! synchronous dialog and return the answer.
//!
//! Guards are contributed by independent features for the duration of their
//! mounted lifetime (an open editor with unsaved content is the canonical
//! case) and withdrawn through the [`GuardId`] handle returned at
//! registration. A guard that is never withdrawn keeps vetoing forever — the
//! registering feature owns its disposal.
//!
//! # Evaluation
//!
//! The registry reduces guards with logical AND, short-circuiting on the
//! first `false`. Evaluation order is unspecified; a correct guard set never
//! depends on which guard is asked first.
//!
//! # Example
//!
//! ```no_run
//! use gpui_waypoint::{guard_fn, GuardRegistry};
//!
//! let mut registry = GuardRegistry::new();
//! let id = registry.register(guard_fn(|_cx, request| {
//!     request.to != "/admin"
//! }));
//! // ... feature unmounts:
//! registry.unregister(id);
//! ```

use crate::navigator::NavigationRequest;
use crate::{debug_log, trace_log};
use gpui::App;
use std::sync::Arc;

// ============================================================================
// NavigationGuard trait
// ============================================================================

/// Trait for veto predicates consulted before every transition commits.
///
/// Return `true` to allow the transition, `false` to veto it. A veto is not
/// an error — the navigator silently drops the request, and the feature that
/// registered the guard is responsible for any user-facing feedback (usually
/// raised synchronously inside [`allow`](Self::allow) itself, e.g. a native
/// confirm dialog).
///
/// A guard that panics terminates the navigation attempt before anything is
/// committed. The navigator does not catch it: failing closed keeps unsaved
/// work from being silently discarded.
///
/// # Example
///
/// ```no_run
/// use gpui_waypoint::{NavigationGuard, NavigationRequest};
///
/// struct DraftGuard {
///     editing: bool,
/// }
///
/// impl NavigationGuard for DraftGuard {
///     fn allow(&self, _cx: &gpui::App, _request: &NavigationRequest) -> bool {
///         !self.editing
///     }
/// }
/// ```
///
/// For simple guards, use [`guard_fn`] to wrap a closure.
pub trait NavigationGuard: Send + Sync + 'static {
    /// Decide whether the requested transition may proceed.
    ///
    /// `request.to` is already normalized when the guard sees it.
    fn allow(&self, cx: &App, request: &NavigationRequest) -> bool;

    /// Guard name for debugging and log output.
    fn name(&self) -> &'static str {
        "NavigationGuard"
    }
}

// ============================================================================
// guard_fn helper
// ============================================================================

/// Create a guard from a function or closure.
///
/// # Example
///
/// ```no_run
/// use gpui_waypoint::guard_fn;
///
/// let guard = guard_fn(|_cx, request| {
///     // Block leaving the editor while a save is in flight
///     !request.to.starts_with("/logout")
/// });
/// ```
pub const fn guard_fn<F>(f: F) -> FnGuard<F>
where
    F: Fn(&App, &NavigationRequest) -> bool + Send + Sync + 'static,
{
    FnGuard { f }
}

/// Guard created from a function or closure.
pub struct FnGuard<F> {
    f: F,
}

impl<F> NavigationGuard for FnGuard<F>
where
    F: Fn(&App, &NavigationRequest) -> bool + Send + Sync + 'static,
{
    fn allow(&self, cx: &App, request: &NavigationRequest) -> bool {
        (self.f)(cx, request)
    }
}

// ============================================================================
// UnsavedChangesGuard
// ============================================================================

/// Function type for dirty-state checks.
///
/// Returns `true` while the feature has unsaved content worth protecting.
pub type DirtyCheckFn = Box<dyn Fn(&App) -> bool + Send + Sync>;

/// Function type for synchronous discard confirmation.
///
/// Called only when the dirty check reports unsaved content. Returns `true`
/// if the user agreed to discard it. May block on a native dialog.
pub type ConfirmDiscardFn = Box<dyn Fn(&App, &NavigationRequest) -> bool + Send + Sync>;

/// Guard protecting unsaved editor content.
///
/// This packages the pattern used by editor pages: while the current document
/// differs from its saved snapshot, any navigation away first asks the user
/// to confirm discarding the draft. When the document is clean the guard is
/// transparent.
///
/// # Example
///
/// ```no_run
/// use gpui_waypoint::UnsavedChangesGuard;
///
/// let guard = UnsavedChangesGuard::new(
///     |_cx| true, // replace with a snapshot comparison
///     |_cx, _request| {
///         // replace with a blocking confirm dialog
///         false
///     },
/// );
/// ```
pub struct UnsavedChangesGuard {
    is_dirty: DirtyCheckFn,
    confirm_discard: ConfirmDiscardFn,
}

impl UnsavedChangesGuard {
    /// Create a guard from a dirty check and a confirmation prompt.
    pub fn new<D, C>(is_dirty: D, confirm_discard: C) -> Self
    where
        D: Fn(&App) -> bool + Send + Sync + 'static,
        C: Fn(&App, &NavigationRequest) -> bool + Send + Sync + 'static,
    {
        Self {
            is_dirty: Box::new(is_dirty),
            confirm_discard: Box::new(confirm_discard),
        }
    }
}

impl NavigationGuard for UnsavedChangesGuard {
    fn allow(&self, cx: &App, request: &NavigationRequest) -> bool {
        if !(self.is_dirty)(cx) {
            return true;
        }
        (self.confirm_discard)(cx, request)
    }

    fn name(&self) -> &'static str {
        "UnsavedChangesGuard"
    }
}

// ============================================================================
// GuardRegistry
// ============================================================================

/// Handle identifying a registered guard.
///
/// Returned by [`GuardRegistry::register`]; pass it back to
/// [`GuardRegistry::unregister`] when the contributing feature unmounts.
/// Unregistering an already-removed handle is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuardId(u64);

/// The live set of veto predicates, keyed by [`GuardId`].
///
/// Owned by the navigator; all mutation funnels through
/// [`register`](Self::register) and [`unregister`](Self::unregister).
pub struct GuardRegistry {
    guards: Vec<(GuardId, Arc<dyn NavigationGuard>)>,
    next_id: u64,
}

impl GuardRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            guards: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a guard, returning the handle that removes it.
    pub fn register(&mut self, guard: impl NavigationGuard) -> GuardId {
        self.register_shared(Arc::new(guard))
    }

    /// Register a shared guard.
    ///
    /// Registration is idempotent per identity: registering the same `Arc`
    /// twice returns the original handle instead of adding a duplicate.
    pub fn register_shared(&mut self, guard: Arc<dyn NavigationGuard>) -> GuardId {
        if let Some((id, _)) = self
            .guards
            .iter()
            .find(|(_, existing)| Arc::ptr_eq(existing, &guard))
        {
            trace_log!("Guard '{}' already registered as {:?}", guard.name(), id);
            return *id;
        }

        self.next_id += 1;
        let id = GuardId(self.next_id);
        debug_log!("Registered guard '{}' as {:?}", guard.name(), id);
        self.guards.push((id, guard));
        id
    }

    /// Remove a guard by handle. Returns `false` if it was already gone.
    pub fn unregister(&mut self, id: GuardId) -> bool {
        let before = self.guards.len();
        self.guards.retain(|(existing, _)| *existing != id);
        let removed = self.guards.len() != before;
        if removed {
            debug_log!("Unregistered guard {:?}", id);
        }
        removed
    }

    /// Number of registered guards.
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    /// Evaluate all guards against a request, short-circuiting on the first
    /// veto. Returns the vetoing guard's name, or `None` if all allowed.
    pub fn first_veto(&self, cx: &App, request: &NavigationRequest) -> Option<&'static str> {
        for (id, guard) in &self.guards {
            let allowed = guard.allow(cx, request);
            trace_log!(
                "Guard '{}' ({:?}) for '{}' → {}",
                guard.name(),
                id,
                request.to,
                if allowed { "allow" } else { "veto" }
            );
            if !allowed {
                debug_log!(
                    "Guard '{}' vetoed navigation to '{}'",
                    guard.name(),
                    request.to
                );
                return Some(guard.name());
            }
        }
        None
    }
}

impl Default for GuardRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(to: &str) -> NavigationRequest {
        NavigationRequest::new(to.to_string())
    }

    // --- registry bookkeeping (no App needed) ---

    #[test]
    fn test_register_returns_distinct_ids() {
        let mut registry = GuardRegistry::new();
        let a = registry.register(guard_fn(|_, _| true));
        let b = registry.register(guard_fn(|_, _| true));
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_register_shared_is_idempotent_per_identity() {
        let mut registry = GuardRegistry::new();
        let guard: Arc<dyn NavigationGuard> = Arc::new(guard_fn(|_, _| true));

        let a = registry.register_shared(Arc::clone(&guard));
        let b = registry.register_shared(guard);
        assert_eq!(a, b);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister_is_idempotent() {
        let mut registry = GuardRegistry::new();
        let id = registry.register(guard_fn(|_, _| false));

        assert!(registry.unregister(id));
        assert!(!registry.unregister(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister_removes_exactly_one() {
        let mut registry = GuardRegistry::new();
        let a = registry.register(guard_fn(|_, _| false));
        let _b = registry.register(guard_fn(|_, _| false));

        registry.unregister(a);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_guard_fn_default_name() {
        let guard = guard_fn(|_, _| true);
        assert_eq!(guard.name(), "NavigationGuard");
    }

    // --- evaluation (needs an App for the guard signature) ---

    #[gpui::test]
    fn test_first_veto_empty_registry(cx: &mut gpui::TestAppContext) {
        let registry = GuardRegistry::new();
        let request = make_request("/home");
        let veto = cx.update(|cx| registry.first_veto(cx, &request));
        assert!(veto.is_none());
    }

    #[gpui::test]
    fn test_first_veto_all_allow(cx: &mut gpui::TestAppContext) {
        let mut registry = GuardRegistry::new();
        registry.register(guard_fn(|_, _| true));
        registry.register(guard_fn(|_, _| true));

        let request = make_request("/home");
        let veto = cx.update(|cx| registry.first_veto(cx, &request));
        assert!(veto.is_none());
    }

    #[gpui::test]
    fn test_first_veto_either_ordering(cx: &mut gpui::TestAppContext) {
        // AND-reduction must veto regardless of which guard is consulted first
        let request = make_request("/home");

        let mut deny_first = GuardRegistry::new();
        deny_first.register(guard_fn(|_, _| false));
        deny_first.register(guard_fn(|_, _| true));
        assert!(cx.update(|cx| deny_first.first_veto(cx, &request)).is_some());

        let mut deny_last = GuardRegistry::new();
        deny_last.register(guard_fn(|_, _| true));
        deny_last.register(guard_fn(|_, _| false));
        assert!(cx.update(|cx| deny_last.first_veto(cx, &request)).is_some());
    }

    #[gpui::test]
    fn test_first_veto_short_circuits(cx: &mut gpui::TestAppContext) {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);

        let mut registry = GuardRegistry::new();
        registry.register(guard_fn(|_, _| false));
        registry.register(guard_fn(move |_, _| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            true
        }));

        let request = make_request("/home");
        let veto = cx.update(|cx| registry.first_veto(cx, &request));
        assert!(veto.is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[gpui::test]
    fn test_unsaved_changes_guard_clean(cx: &mut gpui::TestAppContext) {
        let guard = UnsavedChangesGuard::new(|_| false, |_, _| false);
        assert_eq!(guard.name(), "UnsavedChangesGuard");

        let request = make_request("/home");
        // Clean document: allowed without consulting the confirm prompt
        assert!(cx.update(|cx| guard.allow(cx, &request)));
    }

    #[gpui::test]
    fn test_unsaved_changes_guard_dirty_declined(cx: &mut gpui::TestAppContext) {
        let guard = UnsavedChangesGuard::new(|_| true, |_, _| false);
        let request = make_request("/home");
        assert!(!cx.update(|cx| guard.allow(cx, &request)));
    }

    #[gpui::test]
    fn test_unsaved_changes_guard_dirty_confirmed(cx: &mut gpui::TestAppContext) {
        let guard = UnsavedChangesGuard::new(|_| true, |_, _| true);
        let request = make_request("/home");
        assert!(cx.update(|cx| guard.allow(cx, &request)));
    }
}

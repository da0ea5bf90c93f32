//! Navigation controller integration for GPUI.
//!
//! This module provides the global navigation state management through GPUI's
//! context system. It contains three key types:
//!
//! - [`GlobalNavigator`] — the central navigation object stored as a GPUI
//!   `Global`. It owns the current location, the
//!   [`GuardRegistry`](crate::GuardRegistry), and the boxed
//!   [`HostHistory`](crate::HostHistory), and it is the sole authority that
//!   commits a transition.
//!
//! - [`Navigator`] — a convenience API with static methods
//!   (`Navigator::push`, `Navigator::pop`, …) that read/write the
//!   `GlobalNavigator` through `cx`.
//!
//! - [`NavigatorHandle`] — returned by [`Navigator::of(cx)`](Navigator::of),
//!   enables fluent chained navigation calls.
//!
//! # Initialization
//!
//! Set up the global navigator before any navigation:
//!
//! ```ignore
//! use gpui_waypoint::init_navigator;
//!
//! init_navigator(cx);
//! ```
//!
//! # Transition pipeline
//!
//! Every transition — programmatic or a host back/forward gesture — goes
//! through the same steps:
//!
//! 1. normalize the destination;
//! 2. consult every registered guard, short-circuiting on the first veto —
//!    a veto aborts with no history mutation, no location mutation, and no
//!    window refresh;
//! 3. commit: write the host history, update the location mirror, and (via
//!    the [`Navigator`] facade) refresh windows.
//!
//! Subscribers therefore never observe a partially-applied transition.
//!
//! # Reentrancy
//!
//! A guard cannot issue a navigation from inside its own evaluation: guards
//! receive `&App`, while navigation requires exclusive access to the global.
//! A feature that wants to redirect after vetoing should inspect the
//! [`NavigationResult`] it gets back and navigate then.

use crate::error::NavigationResult;
use crate::guards::{GuardId, GuardRegistry, NavigationGuard};
use crate::history::{HostHistory, MemoryHistory};
use crate::path::normalize_path;
use crate::{debug_log, info_log};
use gpui::{App, BorrowAppContext, Global};
use std::borrow::BorrowMut;
use std::sync::Arc;

// ============================================================================
// NavigationRequest
// ============================================================================

/// Request for navigation.
///
/// The ephemeral value evaluated against the guard chain: where we are, where
/// we want to go (already normalized), and whether the transition replaces
/// the current history entry instead of pushing a new one. It is either
/// committed or dropped; it is never stored.
///
/// # Example
///
/// ```
/// use gpui_waypoint::NavigationRequest;
///
/// let request = NavigationRequest::new("/resolutions".to_string());
/// assert_eq!(request.to, "/resolutions");
/// assert!(!request.replace);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// The path we're navigating from (if any).
    pub from: Option<String>,

    /// The normalized path we're navigating to.
    pub to: String,

    /// Whether the transition replaces the current history entry.
    pub replace: bool,
}

impl NavigationRequest {
    /// Create a new navigation request.
    pub fn new(to: String) -> Self {
        Self {
            from: None,
            to,
            replace: false,
        }
    }

    /// Create a navigation request with a source path.
    pub fn with_from(to: String, from: String) -> Self {
        Self {
            from: Some(from),
            to,
            replace: false,
        }
    }

    /// Mark the request as a replace transition.
    #[must_use]
    pub fn replacing(mut self) -> Self {
        self.replace = true;
        self
    }
}

// ============================================================================
// NavigateOptions
// ============================================================================

/// Options for [`Navigator::navigate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl NavigateOptions {
    /// Options for a replace transition.
    pub fn replace() -> Self {
        Self { replace: true }
    }
}

// ============================================================================
// GlobalNavigator
// ============================================================================

/// Global navigation state accessible from any component.
///
/// This is the central navigation object stored as a GPUI global. It holds
/// the location mirror, the guard registry, and the host history, and it
/// mediates every transition through the guard chain.
pub struct GlobalNavigator {
    /// Last committed location. Always normalized; mutated only by a
    /// committed transition.
    location: String,
    guards: GuardRegistry,
    host: Box<dyn HostHistory>,
}

impl GlobalNavigator {
    /// Create a navigator backed by an in-process [`MemoryHistory`].
    pub fn new() -> Self {
        Self::with_host(MemoryHistory::new())
    }

    /// Create a navigator backed by a custom host environment.
    ///
    /// The initial location is read from the host and normalized.
    pub fn with_host(host: impl HostHistory) -> Self {
        let host: Box<dyn HostHistory> = Box::new(host);
        let location = normalize_path(host.current()).into_owned();
        Self {
            location,
            guards: GuardRegistry::new(),
            host,
        }
    }

    // ========================================================================
    // Navigation pipeline
    // ========================================================================

    /// Navigate to a path, pushing a new host history entry on commit.
    pub fn push(&mut self, path: String, cx: &App) -> NavigationResult {
        self.navigate_checked(path, cx, NavigateOp::Push)
    }

    /// Navigate to a path, replacing the current host history entry on commit.
    pub fn replace(&mut self, path: String, cx: &App) -> NavigationResult {
        self.navigate_checked(path, cx, NavigateOp::Replace)
    }

    /// Core pipeline for programmatic navigation.
    fn navigate_checked(&mut self, path: String, cx: &App, op: NavigateOp) -> NavigationResult {
        let target = normalize_path(&path).into_owned();
        let mut request = NavigationRequest::with_from(target.clone(), self.location.clone());
        if matches!(op, NavigateOp::Replace) {
            request = request.replacing();
        }

        if let Some(guard) = self.guards.first_veto(cx, &request) {
            return NavigationResult::Blocked {
                reason: format!("guard '{guard}' vetoed navigation to '{target}'"),
            };
        }

        match op {
            NavigateOp::Push => self.host.push(&target),
            NavigateOp::Replace => self.host.replace(&target),
        }
        info_log!("Navigation {:?}: '{}' → '{}'", op, self.location, target);
        self.location = target.clone();

        NavigationResult::Committed { path: target }
    }

    /// Go back in host history, subject to the guard chain.
    ///
    /// Returns `None` at the history boundary. The navigator moved the
    /// cursor itself, so a veto is undone by moving it straight back: every
    /// entry survives intact.
    pub fn back(&mut self, cx: &App) -> Option<NavigationResult> {
        if !self.host.go_back() {
            return None;
        }
        let result = self.evaluate_host_move(cx);
        if result.is_blocked() {
            self.host.go_forward();
        }
        Some(result)
    }

    /// Go forward in host history, subject to the guard chain.
    pub fn forward(&mut self, cx: &App) -> Option<NavigationResult> {
        if !self.host.go_forward() {
            return None;
        }
        let result = self.evaluate_host_move(cx);
        if result.is_blocked() {
            self.host.go_back();
        }
        Some(result)
    }

    /// Reconcile the navigator with a host that moved on its own.
    ///
    /// This is the entry point for external back/forward gestures (for
    /// embedders with a real address bar, the popstate-equivalent hook). The
    /// host already shows the new path by the time we are told and the
    /// direction of the move is unknown, so a veto is undone by **replacing**
    /// the host's current entry with the last committed location — a push
    /// would corrupt the forward/back stacks with a duplicate entry, and the
    /// cursor cannot be moved without firing another gesture. The entry the
    /// gesture landed on is overwritten, exactly as a browser's
    /// replace-state rollback would.
    pub fn sync_with_host(&mut self, cx: &App) -> NavigationResult {
        let result = self.evaluate_host_move(cx);
        if result.is_blocked() {
            self.host.replace(&self.location);
        }
        result
    }

    /// Guard-check the host's current path and commit it on approval.
    ///
    /// Never touches the host; callers undo a vetoed move themselves, since
    /// only they know whether the cursor can be restored or the entry must
    /// be replaced.
    fn evaluate_host_move(&mut self, cx: &App) -> NavigationResult {
        let target = normalize_path(self.host.current()).into_owned();
        if target == self.location {
            return NavigationResult::Committed { path: target };
        }

        let request = NavigationRequest::with_from(target.clone(), self.location.clone());
        if let Some(guard) = self.guards.first_veto(cx, &request) {
            debug_log!(
                "Host move to '{}' vetoed by '{}'; keeping '{}'",
                target,
                guard,
                self.location
            );
            return NavigationResult::Blocked {
                reason: format!("guard '{guard}' vetoed navigation to '{target}'"),
            };
        }

        info_log!("Host move committed: '{}' → '{}'", self.location, target);
        self.location = target.clone();
        NavigationResult::Committed { path: target }
    }

    /// Ask the guard chain whether the app may be left entirely.
    ///
    /// The desktop analog of a `beforeunload` check: wire this into window
    /// close or quit confirmation. No location changes either way.
    pub fn can_leave(&self, cx: &App) -> bool {
        let request =
            NavigationRequest::with_from(self.location.clone(), self.location.clone());
        self.guards.first_veto(cx, &request).is_none()
    }

    // ========================================================================
    // Guard registration
    // ========================================================================

    /// Register a guard; returns the handle that removes it.
    pub fn register_guard(&mut self, guard: impl NavigationGuard) -> GuardId {
        self.guards.register(guard)
    }

    /// Register a shared guard (idempotent per `Arc` identity).
    pub fn register_guard_shared(&mut self, guard: Arc<dyn NavigationGuard>) -> GuardId {
        self.guards.register_shared(guard)
    }

    /// Remove a guard by handle. A no-op if it was already removed.
    pub fn unregister_guard(&mut self, id: GuardId) -> bool {
        self.guards.unregister(id)
    }

    /// Number of currently registered guards.
    pub fn guard_count(&self) -> usize {
        self.guards.len()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The current normalized location.
    pub fn current_path(&self) -> &str {
        &self.location
    }

    /// Check if the host has an earlier entry.
    pub fn can_go_back(&self) -> bool {
        self.host.can_go_back()
    }

    /// Check if the host has a later entry.
    pub fn can_go_forward(&self) -> bool {
        self.host.can_go_forward()
    }

    /// Depth of the host history stack.
    pub fn history_depth(&self) -> usize {
        self.host.len()
    }

    /// The host environment the navigator reads and writes through.
    pub fn host(&self) -> &dyn HostHistory {
        self.host.as_ref()
    }

    /// Mutable access to the host environment.
    ///
    /// Embedders apply externally observed history changes here, then call
    /// [`sync_with_host`](Self::sync_with_host) to let the guard chain rule
    /// on the move.
    pub fn host_mut(&mut self) -> &mut dyn HostHistory {
        self.host.as_mut()
    }
}

impl Default for GlobalNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Global for GlobalNavigator {}

/// Internal enum for the kind of transition to perform after guard checks.
#[derive(Debug, Clone, Copy)]
enum NavigateOp {
    Push,
    Replace,
}

// ============================================================================
// UseNavigator trait
// ============================================================================

/// Trait for accessing the global navigator from context.
pub trait UseNavigator {
    /// Get reference to the global navigator.
    fn navigator(&self) -> &GlobalNavigator;

    /// Update the global navigator.
    fn update_navigator<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut GlobalNavigator, &mut App) -> R;
}

impl UseNavigator for App {
    fn navigator(&self) -> &GlobalNavigator {
        self.global::<GlobalNavigator>()
    }

    fn update_navigator<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut GlobalNavigator, &mut App) -> R,
    {
        self.update_global(f)
    }
}

// ============================================================================
// init_navigator
// ============================================================================

/// Initialize the global navigator with an in-process history.
///
/// # Example
///
/// ```ignore
/// use gpui_waypoint::init_navigator;
///
/// init_navigator(cx);
/// ```
pub fn init_navigator(cx: &mut App) {
    cx.set_global(GlobalNavigator::new());
}

/// Initialize the global navigator with a custom host environment.
///
/// Use this to start somewhere other than `/`, or to plug in a real
/// address-bar-backed host.
///
/// # Example
///
/// ```ignore
/// use gpui_waypoint::{init_navigator_with_host, MemoryHistory};
///
/// init_navigator_with_host(cx, MemoryHistory::starting_at("/resolutions"));
/// ```
pub fn init_navigator_with_host(cx: &mut App, host: impl HostHistory) {
    cx.set_global(GlobalNavigator::with_host(host));
}

// ============================================================================
// NavigatorHandle
// ============================================================================

/// Handle returned by [`Navigator::of`] for fluent chained navigation.
///
/// Each method consumes and returns `self`, allowing patterns like:
///
/// ```ignore
/// Navigator::of(cx)
///     .push("/resolutions")
///     .push("/resolutions/42");
/// ```
pub struct NavigatorHandle<'a, C: BorrowAppContext> {
    cx: &'a mut C,
}

impl<C: BorrowAppContext + BorrowMut<App>> NavigatorHandle<'_, C> {
    /// Navigate to a new path.
    pub fn push(self, path: impl Into<String>) -> Self {
        Navigator::push(self.cx, path);
        self
    }

    /// Replace the current path without adding to history.
    pub fn replace(self, path: impl Into<String>) -> Self {
        Navigator::replace(self.cx, path);
        self
    }

    /// Go back to the previous location.
    pub fn pop(self) -> Self {
        Navigator::pop(self.cx);
        self
    }

    /// Go forward in history.
    pub fn forward(self) -> Self {
        Navigator::forward(self.cx);
        self
    }
}

// ============================================================================
// Navigator
// ============================================================================

/// Navigation API for convenient guarded navigation.
///
/// Provides static methods over the [`GlobalNavigator`]:
/// - `Navigator::push(cx, "/path")` — navigate to a new location
/// - `Navigator::replace(cx, "/path")` — replace the current location
/// - `Navigator::pop(cx)` — go back
/// - `Navigator::register_guard(cx, guard)` — contribute a veto predicate
///
/// All methods run the guard chain; windows are refreshed only after a
/// transition commits, so a vetoed navigation is invisible to subscribers.
///
/// # Example
///
/// ```ignore
/// use gpui_waypoint::Navigator;
///
/// Navigator::push(cx, "/resolutions");
/// Navigator::pop(cx);
/// Navigator::replace(cx, "/login");
/// ```
pub struct Navigator;

impl Navigator {
    /// Get a [`NavigatorHandle`] for chained navigation calls.
    pub fn of<C: BorrowAppContext + BorrowMut<App>>(cx: &mut C) -> NavigatorHandle<'_, C> {
        NavigatorHandle { cx }
    }

    /// Navigate to a new path.
    pub fn push(cx: &mut (impl BorrowAppContext + BorrowMut<App>), path: impl Into<String>) {
        let path = path.into();
        debug_log!("Navigator::push: '{}'", path);
        let result = cx.update_global::<GlobalNavigator, _>(|navigator, cx| {
            let app: &App = cx.borrow_mut();
            navigator.push(path, app)
        });
        if result.is_committed() {
            cx.borrow_mut().refresh_windows();
        }
    }

    /// Replace the current path without adding to history.
    pub fn replace(cx: &mut (impl BorrowAppContext + BorrowMut<App>), path: impl Into<String>) {
        let path = path.into();
        let result = cx.update_global::<GlobalNavigator, _>(|navigator, cx| {
            let app: &App = cx.borrow_mut();
            navigator.replace(path, app)
        });
        if result.is_committed() {
            cx.borrow_mut().refresh_windows();
        }
    }

    /// Navigate with explicit [`NavigateOptions`].
    pub fn navigate(
        cx: &mut (impl BorrowAppContext + BorrowMut<App>),
        path: impl Into<String>,
        options: NavigateOptions,
    ) {
        if options.replace {
            Self::replace(cx, path);
        } else {
            Self::push(cx, path);
        }
    }

    /// Go back to the previous location, subject to the guard chain.
    pub fn pop(cx: &mut (impl BorrowAppContext + BorrowMut<App>)) {
        let result = cx.update_global::<GlobalNavigator, _>(|navigator, cx| {
            let app: &App = cx.borrow_mut();
            navigator.back(app)
        });
        if result.is_some_and(|r| r.is_committed()) {
            cx.borrow_mut().refresh_windows();
        }
    }

    /// Alias for [`pop`](Navigator::pop).
    pub fn back(cx: &mut (impl BorrowAppContext + BorrowMut<App>)) {
        Self::pop(cx);
    }

    /// Go forward in history, subject to the guard chain.
    pub fn forward(cx: &mut (impl BorrowAppContext + BorrowMut<App>)) {
        let result = cx.update_global::<GlobalNavigator, _>(|navigator, cx| {
            let app: &App = cx.borrow_mut();
            navigator.forward(app)
        });
        if result.is_some_and(|r| r.is_committed()) {
            cx.borrow_mut().refresh_windows();
        }
    }

    /// Get the current normalized location.
    pub fn current_path(cx: &App) -> String {
        cx.global::<GlobalNavigator>().current_path().to_string()
    }

    /// Check if the navigator can go back.
    pub fn can_pop(cx: &App) -> bool {
        cx.global::<GlobalNavigator>().can_go_back()
    }

    /// Alias for [`can_pop`](Navigator::can_pop).
    pub fn can_go_back(cx: &App) -> bool {
        Self::can_pop(cx)
    }

    /// Check if the navigator can go forward.
    pub fn can_go_forward(cx: &App) -> bool {
        cx.global::<GlobalNavigator>().can_go_forward()
    }

    /// Register a guard; returns the handle that removes it.
    pub fn register_guard(cx: &mut impl BorrowAppContext, guard: impl NavigationGuard) -> GuardId {
        cx.update_global::<GlobalNavigator, _>(|navigator, _| navigator.register_guard(guard))
    }

    /// Remove a guard by handle. A no-op if it was already removed.
    pub fn unregister_guard(cx: &mut impl BorrowAppContext, id: GuardId) -> bool {
        cx.update_global::<GlobalNavigator, _>(|navigator, _| navigator.unregister_guard(id))
    }

    /// Ask the guard chain whether the app may be left entirely.
    pub fn can_leave(cx: &App) -> bool {
        cx.global::<GlobalNavigator>().can_leave(cx)
    }
}

// ============================================================================
// Tests
// ============================================================================

//! # gpui-waypoint
//!
//! Guarded navigation for [GPUI](https://gpui.rs) applications: a single
//! source of truth for "where the user is", veto-able transitions, and
//! widgets that keep UI and history in step.
//!
//! ## Features
//!
//! - **Normalized locations** — every destination is canonicalized before
//!   anything sees it, so `/drafts/` and `drafts` are the same place
//! - **Navigation guards** — synchronous veto predicates with disposable
//!   registrations; one veto silently cancels a transition
//! - **Host history abstraction** — back/forward and the address stack live
//!   behind a trait, with an in-process default and test double
//! - **Gesture rollback** — a vetoed back/forward gesture snaps the host
//!   back by replacing in place, never corrupting the history stack
//! - **Links and redirects** — click-to-navigate widgets that leave
//!   modified activations to the host environment
//!
//! ## Quick Start
//!
//! ```ignore
//! use gpui::*;
//! use gpui_waypoint::{guard_fn, init_navigator, link, Navigator};
//!
//! fn main() {
//!     Application::new().run(|cx: &mut App| {
//!         init_navigator(cx);
//!
//!         // Keep users out of half-finished drafts
//!         Navigator::register_guard(
//!             cx,
//!             guard_fn(|_cx, request| !request.to.starts_with("/drafts")),
//!         );
//!
//!         Navigator::push(cx, "/home");
//!         // ... open windows that render `link(cx, "/home", "Home")` etc.
//!     });
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature    | Description                          | Default |
//! |------------|--------------------------------------|---------|
//! | `log`      | Logging via the `log` crate          | yes     |
//! | `tracing`  | Logging via the `tracing` crate      | no      |

pub mod error;
pub mod guards;
pub mod history;
pub mod logging;
pub mod navigator;
pub mod path;
pub mod widgets;

pub use error::NavigationResult;
pub use guards::{
    guard_fn, ConfirmDiscardFn, DirtyCheckFn, FnGuard, GuardId, GuardRegistry, NavigationGuard,
    UnsavedChangesGuard,
};
pub use history::{HostHistory, MemoryHistory};
pub use navigator::{
    init_navigator, init_navigator_with_host, GlobalNavigator, NavigateOptions, NavigationRequest,
    Navigator, NavigatorHandle, UseNavigator,
};
pub use path::{normalize_path, same_location};
pub use widgets::{ensure_location, is_plain_activation, link, Link, Redirect};

//! Navigation widgets.
//!
//! This module provides the GPUI components that connect UI to the navigator:
//!
//! - [`Link`] / [`link`] — clickable navigation element with optional
//!   active-state styling. Activations with a modifier key held are left
//!   alone so the host environment can apply its own meaning (open in a
//!   new window, add to selection, and so on).
//! - [`Redirect`] — declarative "you should not be here": rendering it
//!   steers the navigator to its target.
//! - [`ensure_location`] — the imperative form of [`Redirect`], usable from
//!   any update context.

use crate::navigator::Navigator;
use crate::path::{normalize_path, same_location};
use crate::trace_log;
use gpui::*;

// ============================================================================
// Activation filtering
// ============================================================================

/// Whether a pointer activation is a plain one the navigator should handle.
///
/// Returns `false` when any modifier key is held. A modified activation is a
/// request to the host environment, not to the navigator, so [`Link`] ignores
/// it entirely rather than consuming the click.
pub fn is_plain_activation(modifiers: &Modifiers) -> bool {
    !(modifiers.control
        || modifiers.alt
        || modifiers.shift
        || modifiers.platform
        || modifiers.function)
}

// ============================================================================
// Link
// ============================================================================

/// A clickable element that navigates to a path on plain left click.
///
/// Only the primary mouse button is wired up, so middle- and right-click keep
/// their native behavior. Supports optional active-state styling via
/// [`active_class`](Self::active_class).
///
/// # Examples
///
/// ```ignore
/// Link::new("/resolutions")
///     .child("Resolutions")
///     .active_class(|div| div.text_color(gpui::rgb(0x2196f3)))
///     .build(cx)
/// ```
pub struct Link {
    /// Target path
    path: SharedString,
    /// Replace the current history entry instead of pushing
    replace: bool,
    /// Optional custom styling when the link points at the current location
    active_class: Option<Box<dyn Fn(Div) -> Div>>,
    /// Child elements
    children: Vec<AnyElement>,
}

impl Link {
    /// Create a new link to the specified path.
    pub fn new(path: impl Into<SharedString>) -> Self {
        Self {
            path: path.into(),
            replace: false,
            active_class: None,
            children: Vec::new(),
        }
    }

    /// Make activation replace the current history entry.
    pub fn replace(mut self) -> Self {
        self.replace = true;
        self
    }

    /// Add a child element.
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Set custom styling for when this link points at the current location.
    pub fn active_class(mut self, style: impl Fn(Div) -> Div + 'static) -> Self {
        self.active_class = Some(Box::new(style));
        self
    }

    /// Build the link element with the given context.
    pub fn build<V: 'static>(self, cx: &mut Context<'_, V>) -> Div {
        let path = self.path.clone();
        let replace = self.replace;
        let current_path = Navigator::current_path(cx);
        let is_active = same_location(&current_path, path.as_ref());

        let mut link = div().cursor_pointer().on_mouse_down(
            MouseButton::Left,
            cx.listener(move |_view, event: &MouseDownEvent, _window, cx| {
                if !is_plain_activation(&event.modifiers) {
                    trace_log!("Link '{}': modified activation, deferring to host", path);
                    return;
                }
                if replace {
                    Navigator::replace(cx, path.to_string());
                } else {
                    Navigator::push(cx, path.to_string());
                }
                cx.notify();
            }),
        );

        if is_active {
            if let Some(active_fn) = self.active_class {
                link = active_fn(link);
            }
        }

        for child in self.children {
            link = link.child(child);
        }

        link
    }
}

/// Create a simple text link with built-in active-state color.
///
/// For more control (custom children, styling, replace semantics), use
/// [`Link`] directly.
pub fn link<V: 'static>(
    cx: &mut Context<'_, V>,
    path: impl Into<SharedString>,
    label: impl Into<SharedString>,
) -> Div {
    let path_str: SharedString = path.into();
    let label_str: SharedString = label.into();
    let current_path = Navigator::current_path(cx);
    let is_active = same_location(&current_path, path_str.as_ref());

    div()
        .cursor_pointer()
        .text_color(if is_active {
            rgb(0x2196f3)
        } else {
            rgb(0x333333)
        })
        .hover(|this| this.text_color(rgb(0x2196f3)))
        .child(label_str)
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |_view, event: &MouseDownEvent, _window, cx| {
                if !is_plain_activation(&event.modifiers) {
                    return;
                }
                Navigator::push(cx, path_str.to_string());
                cx.notify();
            }),
        )
}

// ============================================================================
// Redirect
// ============================================================================

/// Steer the navigator to `to` unless it is already there.
///
/// Returns `true` if a navigation was issued (committed or not), `false` if
/// the location already matched and nothing happened. The guard chain applies
/// as usual, so a vetoed redirect leaves the location alone.
pub fn ensure_location(cx: &mut App, to: &str, replace: bool) -> bool {
    let target = normalize_path(to).into_owned();
    if same_location(&Navigator::current_path(cx), &target) {
        return false;
    }
    if replace {
        Navigator::replace(cx, target);
    } else {
        Navigator::push(cx, target);
    }
    true
}

/// Declarative redirect component.
///
/// Rendering a `Redirect` navigates to its target; once the location matches,
/// further renders are no-ops, so the element converges instead of looping.
/// Render it in place of content the current user should not see:
///
/// ```ignore
/// if !session.is_chair() {
///     return cx.new(|_| Redirect::replacing("/home")).into_any_element();
/// }
/// ```
pub struct Redirect {
    to: SharedString,
    replace: bool,
}

impl Redirect {
    /// Redirect by pushing a new history entry.
    pub fn new(to: impl Into<SharedString>) -> Self {
        Self {
            to: to.into(),
            replace: false,
        }
    }

    /// Redirect by replacing the current history entry. Use this for access
    /// gates, so back does not land on the gated page again.
    pub fn replacing(to: impl Into<SharedString>) -> Self {
        Self {
            to: to.into(),
            replace: true,
        }
    }
}

impl Render for Redirect {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        if ensure_location(cx, &self.to, self.replace) {
            trace_log!("Redirect: steering to '{}'", self.to);
        }
        div()
    }
}

#[cfg(test)]
mod tests {
    // No glob import here: `gpui::*` would shadow the built-in `#[test]`
    // attribute with gpui's own `test` macro.
    use super::{ensure_location, is_plain_activation, Link};
    use crate::navigator::{init_navigator, Navigator};
    use gpui::{Modifiers, TestAppContext};

    #[test]
    fn test_plain_activation() {
        assert!(is_plain_activation(&Modifiers::default()));

        let ctrl = Modifiers {
            control: true,
            ..Default::default()
        };
        assert!(!is_plain_activation(&ctrl));

        let shift = Modifiers {
            shift: true,
            ..Default::default()
        };
        assert!(!is_plain_activation(&shift));

        let platform = Modifiers {
            platform: true,
            ..Default::default()
        };
        assert!(!is_plain_activation(&platform));

        let alt = Modifiers {
            alt: true,
            ..Default::default()
        };
        assert!(!is_plain_activation(&alt));

        let function = Modifiers {
            function: true,
            ..Default::default()
        };
        assert!(!is_plain_activation(&function));
    }

    #[test]
    fn test_link_builder() {
        let plain = Link::new("/home");
        assert!(!plain.replace);
        assert!(plain.active_class.is_none());

        let styled = Link::new("/home")
            .replace()
            .child("Home")
            .active_class(|div| div);
        assert!(styled.replace);
        assert!(styled.active_class.is_some());
        assert_eq!(styled.children.len(), 1);
    }

    #[gpui::test]
    fn test_ensure_location(cx: &mut TestAppContext) {
        cx.update(init_navigator);

        // First call navigates, second is a no-op
        assert!(cx.update(|cx| ensure_location(cx, "/login", false)));
        assert_eq!(cx.read(Navigator::current_path), "/login");
        assert!(!cx.update(|cx| ensure_location(cx, "/login", false)));

        // Raw target is normalized before the comparison
        assert!(!cx.update(|cx| ensure_location(cx, "login/", false)));
    }

    #[gpui::test]
    fn test_ensure_location_replace(cx: &mut TestAppContext) {
        cx.update(init_navigator);
        cx.update(|cx| Navigator::push(cx, "/gated"));

        assert!(cx.update(|cx| ensure_location(cx, "/home", true)));
        assert_eq!(cx.read(Navigator::current_path), "/home");

        // The gated page was replaced, so back lands at the start
        cx.update(|cx| Navigator::pop(cx));
        assert_eq!(cx.read(Navigator::current_path), "/");
    }
}

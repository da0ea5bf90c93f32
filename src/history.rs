//! Host history abstraction.
//!
//! The host environment's history stack (a browser address bar, a webview, or
//! an in-process stack in a plain desktop app) is inherently global, mutable
//! state. The navigator never touches it directly — it reads and writes
//! through the [`HostHistory`] trait, so tests and embedders can swap the
//! real thing for a fake.
//!
//! The navigator is the only writer in the normal flow, but the host can move
//! on its own (the user pressing back/forward). The contract for that case
//! lives in [`GlobalNavigator::sync_with_host`](crate::GlobalNavigator::sync_with_host):
//! the host has already changed by the time the navigator is told, so a
//! vetoed gesture is undone by **replacing** the host's current entry with
//! the last committed location — never by pushing, which would grow the stack.
//!
//! [`MemoryHistory`] is the built-in implementation, used both as the default
//! host for desktop apps and as the test double.

/// The host environment capability the navigator reads and writes through.
///
/// Implementations store normalized paths; the navigator normalizes before
/// every write, and normalizes again after every read (a real host may have
/// been mutated from outside with an arbitrary string).
pub trait HostHistory: 'static {
    /// The path of the entry the host currently points at.
    fn current(&self) -> &str;

    /// Append a new entry after the current one, dropping any forward entries.
    fn push(&mut self, path: &str);

    /// Overwrite the current entry in place. Stack depth is unchanged.
    fn replace(&mut self, path: &str);

    /// Move the cursor one entry back. Returns `false` at the boundary.
    fn go_back(&mut self) -> bool;

    /// Move the cursor one entry forward. Returns `false` at the boundary.
    fn go_forward(&mut self) -> bool;

    /// Whether an earlier entry exists.
    fn can_go_back(&self) -> bool;

    /// Whether a later entry exists.
    fn can_go_forward(&self) -> bool;

    /// Number of entries in the stack.
    fn len(&self) -> usize;

    /// A history stack always holds at least the initial entry.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-process history stack: a vector of entries plus a cursor.
///
/// `push` truncates everything after the cursor before appending, matching
/// how a browser discards the forward stack on a new navigation.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    current: usize,
}

impl MemoryHistory {
    /// Create a history stack with `/` as the only entry.
    pub fn new() -> Self {
        Self::starting_at("/")
    }

    /// Create a history stack with a single initial entry.
    pub fn starting_at(path: impl Into<String>) -> Self {
        Self {
            entries: vec![path.into()],
            current: 0,
        }
    }

    /// Snapshot of all entries, oldest first. Test and debugging aid.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HostHistory for MemoryHistory {
    fn current(&self) -> &str {
        &self.entries[self.current]
    }

    fn push(&mut self, path: &str) {
        self.entries.truncate(self.current + 1);
        self.entries.push(path.to_string());
        self.current += 1;
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.current] = path.to_string();
    }

    fn go_back(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    fn go_forward(&mut self) -> bool {
        if self.current < self.entries.len() - 1 {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn can_go_back(&self) -> bool {
        self.current > 0
    }

    fn can_go_forward(&self) -> bool {
        self.current < self.entries.len() - 1
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

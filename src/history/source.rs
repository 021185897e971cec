//! History backends.
//!
//! # Responsibilities
//! - Define the session-history operations the shell depends on
//! - Provide an in-memory backend for tests and non-browser hosts
//!
//! # Design Decisions
//! - The trait mirrors the History API surface: push, replace, back, forward
//! - `location` returns an owned `String`; a backend may read environment
//!   state it cannot lend a borrow into
//! - `back`/`forward` report whether they moved, never panic at a boundary
//! - `MemoryHistory` models the two stacks explicitly; push clears the future

/// A source of session history the router shell can drive.
pub trait HistorySource {
    /// The path of the current history entry.
    fn location(&self) -> String;

    /// Append a new entry and make it current.
    fn push(&mut self, to: &str);

    /// Overwrite the current entry in place.
    fn replace(&mut self, to: &str);

    /// Move one entry back. Returns `false` at the start of history.
    fn back(&mut self) -> bool;

    /// Move one entry forward. Returns `false` at the end of history.
    fn forward(&mut self) -> bool;
}

/// In-memory session history.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    past: Vec<String>,
    current: String,
    future: Vec<String>,
}

impl MemoryHistory {
    /// A fresh session positioned at the site root.
    pub fn new() -> Self {
        Self::starting_at("/")
    }

    /// A fresh session positioned at `path`.
    pub fn starting_at(path: impl Into<String>) -> Self {
        Self {
            past: Vec::new(),
            current: path.into(),
            future: Vec::new(),
        }
    }

    /// Total number of entries in the session.
    pub fn depth(&self) -> usize {
        self.past.len() + 1 + self.future.len()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistorySource for MemoryHistory {
    fn location(&self) -> String {
        self.current.clone()
    }

    fn push(&mut self, to: &str) {
        let previous = std::mem::replace(&mut self.current, to.to_string());
        self.past.push(previous);
        // Pushing from the middle of a session discards what was ahead.
        self.future.clear();
    }

    fn replace(&mut self, to: &str) {
        self.current = to.to_string();
    }

    fn back(&mut self) -> bool {
        match self.past.pop() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.current, previous);
                self.future.push(current);
                true
            }
            None => false,
        }
    }

    fn forward(&mut self) -> bool {
        match self.future.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.current, next);
                self.past.push(current);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_at_root() {
        let history = MemoryHistory::new();
        assert_eq!(history.location(), "/");
        assert_eq!(history.depth(), 1);
    }

    #[test]
    fn test_push_advances_and_back_returns() {
        let mut history = MemoryHistory::new();
        history.push("/blog");
        history.push("/blog/3jxyz");
        assert_eq!(history.location(), "/blog/3jxyz");

        assert!(history.back());
        assert_eq!(history.location(), "/blog");
        assert!(history.back());
        assert_eq!(history.location(), "/");
        assert!(!history.back());
    }

    #[test]
    fn test_forward_retraces_after_back() {
        let mut history = MemoryHistory::new();
        history.push("/movies");
        assert!(history.back());
        assert!(history.forward());
        assert_eq!(history.location(), "/movies");
        assert!(!history.forward());
    }

    #[test]
    fn test_push_clears_forward_entries() {
        let mut history = MemoryHistory::new();
        history.push("/movies");
        history.back();
        history.push("/shows");

        assert!(!history.forward());
        assert_eq!(history.location(), "/shows");
        assert_eq!(history.depth(), 2);
    }

    #[test]
    fn test_replace_keeps_depth() {
        let mut history = MemoryHistory::starting_at("/gallery");
        history.replace("/gallery/9");
        assert_eq!(history.location(), "/gallery/9");
        assert_eq!(history.depth(), 1);
        assert!(!history.back());
    }
}

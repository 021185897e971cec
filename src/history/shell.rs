//! The router shell: navigation state plus listeners.
//!
//! # Responsibilities
//! - Own the route table and a history backend
//! - Drive navigation (push, replace, back, forward) through that backend
//! - Resolve the current path against the table on demand
//! - Notify subscribers after every location change
//!
//! # Design Decisions
//! - An explicit instance, constructed by the host; no global singleton
//! - State updates happen before listeners run
//! - `back`/`forward` at a session boundary are no-ops with no event
//! - External links are classified up front, never pushed into history

use std::fmt;

use url::Url;

use crate::history::source::{HistorySource, MemoryHistory};
use crate::routing::route::{RouteMatch, RouteTable};

/// How a location change came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// A new entry was pushed.
    Push,
    /// The current entry was overwritten.
    Replace,
    /// The session moved to an existing entry (back, forward, or an
    /// external history traversal picked up by `sync`).
    Pop,
}

/// Emitted to subscribers after the shell's location changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    /// The path before the change.
    pub from: String,
    /// The path after the change.
    pub to: String,
    pub kind: NavigationKind,
}

type Listener = Box<dyn Fn(&NavigationEvent)>;

/// A client-side router instance: table, history, and subscribers.
pub struct Router<T> {
    table: RouteTable<T>,
    history: Box<dyn HistorySource>,
    current: String,
    listeners: Vec<Listener>,
}

impl<T> Router<T> {
    /// A shell over a fresh in-memory session positioned at the site root.
    pub fn new(table: RouteTable<T>) -> Self {
        Self::with_history(table, MemoryHistory::new())
    }

    /// A shell over the given history backend.
    pub fn with_history(table: RouteTable<T>, history: impl HistorySource + 'static) -> Self {
        let current = history.location();
        Self {
            table,
            history: Box::new(history),
            current,
            listeners: Vec::new(),
        }
    }

    /// The path of the current history entry.
    pub fn current_path(&self) -> &str {
        &self.current
    }

    /// Resolve the current path against the table. Matching is stateless, so
    /// this is recomputed per call rather than cached.
    pub fn current_match(&self) -> Option<RouteMatch<'_, T>> {
        self.table.match_path(&self.current)
    }

    pub fn table(&self) -> &RouteTable<T> {
        &self.table
    }

    /// Push `to` as a new history entry and notify subscribers.
    ///
    /// The push is unconditional; navigating to the current path still adds
    /// an entry, matching how the History API treats repeated pushes.
    pub fn navigate(&mut self, to: &str) {
        self.history.push(to);
        let from = std::mem::replace(&mut self.current, to.to_string());
        tracing::debug!(from = %from, to = %to, "navigate");
        self.notify(from, NavigationKind::Push);
    }

    /// Overwrite the current history entry with `to` and notify subscribers.
    pub fn replace(&mut self, to: &str) {
        self.history.replace(to);
        let from = std::mem::replace(&mut self.current, to.to_string());
        tracing::debug!(from = %from, to = %to, "replace");
        self.notify(from, NavigationKind::Replace);
    }

    /// Move one entry back. Returns `false` without an event when the
    /// session is already at its oldest entry.
    pub fn back(&mut self) -> bool {
        if !self.history.back() {
            return false;
        }
        self.adopt_location(NavigationKind::Pop);
        true
    }

    /// Move one entry forward. Returns `false` without an event when the
    /// session is already at its newest entry.
    pub fn forward(&mut self) -> bool {
        if !self.history.forward() {
            return false;
        }
        self.adopt_location(NavigationKind::Pop);
        true
    }

    /// Adopt a location change made directly on the backend, for example a
    /// host-level popstate. No-op when the backend still agrees.
    pub fn sync(&mut self) {
        if self.history.location() != self.current {
            self.adopt_location(NavigationKind::Pop);
        }
    }

    /// Register a listener called after every location change, in
    /// subscription order.
    pub fn subscribe(&mut self, listener: impl Fn(&NavigationEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn adopt_location(&mut self, kind: NavigationKind) {
        let to = self.history.location();
        let from = std::mem::replace(&mut self.current, to);
        tracing::debug!(from = %from, to = %self.current, kind = ?kind, "history moved");
        self.notify(from, kind);
    }

    fn notify(&self, from: String, kind: NavigationKind) {
        let event = NavigationEvent {
            from,
            to: self.current.clone(),
            kind,
        };
        for listener in &self.listeners {
            listener(&event);
        }
    }
}

impl<T> fmt::Debug for Router<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("current", &self.current)
            .field("routes", &self.table.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Where a link points: into this site, or out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// A path the shell should resolve itself.
    Internal(String),
    /// An absolute URL the host should hand to the environment.
    External(Url),
}

impl NavigationTarget {
    /// Classify a link destination. Anything that parses as an absolute URL
    /// (`https:`, `mailto:`, ...) is external; everything else is a path for
    /// the shell.
    pub fn classify(target: &str) -> Self {
        match Url::parse(target) {
            Ok(url) => Self::External(url),
            Err(_) => Self::Internal(target.to_string()),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

impl From<&str> for NavigationTarget {
    fn from(target: &str) -> Self {
        Self::classify(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn shell() -> Router<&'static str> {
        let table = RouteTable::builder()
            .route("/", "home")
            .route("/blog/:rkey", "post")
            .route("*", "not-found")
            .build();
        Router::new(table)
    }

    #[test]
    fn test_starts_at_backend_location() {
        let router = shell();
        assert_eq!(router.current_path(), "/");
        assert_eq!(*router.current_match().unwrap().handler(), "home");
    }

    #[test]
    fn test_navigate_updates_match_and_params() {
        let mut router = shell();
        router.navigate("/blog/3jxyz");
        let matched = router.current_match().unwrap();
        assert_eq!(*matched.handler(), "post");
        assert_eq!(matched.params().get("rkey"), Some("3jxyz"));
    }

    #[test]
    fn test_listeners_see_state_after_update() {
        let mut router = shell();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        router.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        router.navigate("/blog/3jxyz");
        router.back();

        let events = seen.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].from, "/");
        assert_eq!(events[0].to, "/blog/3jxyz");
        assert_eq!(events[0].kind, NavigationKind::Push);
        assert_eq!(events[1].to, "/");
        assert_eq!(events[1].kind, NavigationKind::Pop);
    }

    #[test]
    fn test_back_at_boundary_is_silent() {
        let mut router = shell();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        router.subscribe(move |_| *sink.borrow_mut() += 1);

        assert!(!router.back());
        assert!(!router.forward());
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_replace_does_not_grow_history() {
        let mut router = shell();
        router.navigate("/blog/a");
        router.replace("/blog/b");
        assert_eq!(router.current_path(), "/blog/b");

        assert!(router.back());
        assert_eq!(router.current_path(), "/");
    }

    /// A backend whose state something other than the shell can move,
    /// standing in for a host-level history listener.
    #[derive(Clone)]
    struct SharedHistory(Rc<RefCell<MemoryHistory>>);

    impl HistorySource for SharedHistory {
        fn location(&self) -> String {
            self.0.borrow().location()
        }
        fn push(&mut self, to: &str) {
            self.0.borrow_mut().push(to);
        }
        fn replace(&mut self, to: &str) {
            self.0.borrow_mut().replace(to);
        }
        fn back(&mut self) -> bool {
            self.0.borrow_mut().back()
        }
        fn forward(&mut self) -> bool {
            self.0.borrow_mut().forward()
        }
    }

    #[test]
    fn test_sync_adopts_external_movement() {
        let backend = SharedHistory(Rc::new(RefCell::new(MemoryHistory::new())));
        let handle = backend.clone();
        let table = RouteTable::builder().route("*", "any").build();
        let mut router = Router::with_history(table, backend);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        router.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        // The host moves the session behind the shell's back.
        handle.0.borrow_mut().push("/shows");
        router.sync();

        assert_eq!(router.current_path(), "/shows");
        let events = seen.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, NavigationKind::Pop);
        assert_eq!(events[0].to, "/shows");
        drop(events);

        // A second sync with nothing moved stays silent.
        router.sync();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_unmatched_path_is_not_an_error() {
        let table: RouteTable<&str> = RouteTable::builder().route("/", "home").build();
        let mut router = Router::new(table);
        router.navigate("/nowhere");
        assert!(router.current_match().is_none());
        assert_eq!(router.current_path(), "/nowhere");
    }

    #[test]
    fn test_classify_external_schemes() {
        assert!(NavigationTarget::classify("https://bsky.app/profile/luna").is_external());
        assert!(NavigationTarget::classify("mailto:luna@example.com").is_external());
    }

    #[test]
    fn test_classify_internal_paths() {
        let target = NavigationTarget::classify("/blog/3jxyz");
        assert_eq!(target, NavigationTarget::Internal("/blog/3jxyz".into()));
        assert!(!target.is_external());
    }
}

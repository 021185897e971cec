//! Route registration and lookup.
//!
//! # Responsibilities
//! - Pair a compiled pattern with its handler payload
//! - Store routes in registration order, immutable after construction
//! - Resolve a path to the first matching route plus its bound parameters
//!
//! # Design Decisions
//! - Handler payload is a generic `T`; the table never calls it
//! - O(n) ordered scan (route counts here are tens, not thousands)
//! - Duplicate patterns are allowed but logged; the earlier one shadows
//! - Explicit `Option` rather than a silent default route

use std::collections::HashSet;
use std::fmt;

use crate::routing::matcher::route_matches;
use crate::routing::params::PathParams;
use crate::routing::pattern::RoutePattern;

/// A single registered route: one pattern, one handler payload.
#[derive(Clone)]
pub struct Route<T> {
    pattern: RoutePattern,
    exact: bool,
    handler: T,
}

impl<T> Route<T> {
    /// Register a pattern with the full rule family (wildcard, params, plain).
    pub fn new(pattern: impl AsRef<str>, handler: T) -> Self {
        Self {
            pattern: RoutePattern::parse(pattern.as_ref()),
            exact: false,
            handler,
        }
    }

    /// Register a pattern matched by literal string equality only.
    pub fn exact(pattern: impl AsRef<str>, handler: T) -> Self {
        Self {
            pattern: RoutePattern::parse(pattern.as_ref()),
            exact: true,
            handler,
        }
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }

    pub fn handler(&self) -> &T {
        &self.handler
    }
}

// Handlers are often closures without Debug, so the payload is elided.
impl<T> fmt::Debug for Route<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern.as_str())
            .field("exact", &self.exact)
            .finish_non_exhaustive()
    }
}

/// An ordered, immutable collection of routes.
pub struct RouteTable<T> {
    routes: Vec<Route<T>>,
}

impl<T> RouteTable<T> {
    /// Freeze a list of routes. Order is match priority.
    pub fn new(routes: Vec<Route<T>>) -> Self {
        warn_on_duplicates(&routes);
        Self { routes }
    }

    pub fn builder() -> RouteTableBuilder<T> {
        RouteTableBuilder::new()
    }

    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolve `path` to the first matching route, with parameters bound.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_, T>> {
        let index = match self
            .routes
            .iter()
            .position(|route| route_matches(route, path))
        {
            Some(index) => index,
            None => {
                tracing::debug!(path = %path, "no route matched");
                return None;
            }
        };
        let route = &self.routes[index];
        let params = PathParams::bind(route.pattern(), path);
        tracing::debug!(path = %path, pattern = %route.pattern(), "route matched");
        Some(RouteMatch {
            route,
            index,
            params,
        })
    }
}

impl<T> fmt::Debug for RouteTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.routes)
            .finish()
    }
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<T> FromIterator<Route<T>> for RouteTable<T> {
    fn from_iter<I: IntoIterator<Item = Route<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A successful lookup: the route, its registration index, and parameters.
pub struct RouteMatch<'t, T> {
    route: &'t Route<T>,
    index: usize,
    params: PathParams,
}

impl<'t, T> RouteMatch<'t, T> {
    pub fn route(&self) -> &'t Route<T> {
        self.route
    }

    pub fn handler(&self) -> &'t T {
        self.route.handler()
    }

    pub fn params(&self) -> &PathParams {
        &self.params
    }

    /// Position of the matched route in registration order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The matched pattern text. Stable across navigations that only change
    /// parameter values, which makes it a useful render key.
    pub fn route_key(&self) -> &'t str {
        self.route.pattern().as_str()
    }
}

impl<T> fmt::Debug for RouteMatch<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("pattern", &self.route.pattern().as_str())
            .field("index", &self.index)
            .field("params", &self.params)
            .finish()
    }
}

/// Incremental construction of a [`RouteTable`].
pub struct RouteTableBuilder<T> {
    routes: Vec<Route<T>>,
}

impl<T> RouteTableBuilder<T> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Append a route with the full rule family.
    pub fn route(mut self, pattern: impl AsRef<str>, handler: T) -> Self {
        self.routes.push(Route::new(pattern, handler));
        self
    }

    /// Append a route matched by literal equality only.
    pub fn exact_route(mut self, pattern: impl AsRef<str>, handler: T) -> Self {
        self.routes.push(Route::exact(pattern, handler));
        self
    }

    /// Append an already-built route.
    pub fn push(mut self, route: Route<T>) -> Self {
        self.routes.push(route);
        self
    }

    pub fn build(self) -> RouteTable<T> {
        RouteTable::new(self.routes)
    }
}

impl<T> Default for RouteTableBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn warn_on_duplicates<T>(routes: &[Route<T>]) {
    let mut seen: HashSet<(&str, bool)> = HashSet::new();
    for route in routes {
        if !seen.insert((route.pattern().as_str(), route.is_exact())) {
            tracing::warn!(
                pattern = %route.pattern(),
                "Duplicate route pattern; the earlier registration always wins"
            );
        }
    }
}

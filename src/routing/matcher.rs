//! Route matching logic.
//!
//! # Responsibilities
//! - Normalize the current path and each pattern before comparison
//! - Apply the rule family a pattern belongs to (exact, wildcard, dynamic, plain)
//! - Return the first registered route that matches
//!
//! # Design Decisions
//! - Matching is case-sensitive
//! - Registration order is the only tie-break; no specificity scoring
//! - Optional parameters consume greedily at their own position, no lookahead
//! - No regex to guarantee O(n) matching per route

use crate::routing::pattern::{normalize_path, MatchKind, Segment};
use crate::routing::route::Route;

/// Find the first route whose pattern matches `current_path`.
///
/// Routes are scanned in registration order. Returns `None` when nothing
/// matches; there is no fallback here, callers decide what "no route" means.
pub fn match_route<'r, T>(current_path: &str, routes: &'r [Route<T>]) -> Option<&'r Route<T>> {
    let matched = routes.iter().find(|route| route_matches(route, current_path));
    match matched {
        Some(route) => {
            tracing::debug!(path = %current_path, pattern = %route.pattern(), "route matched");
        }
        None => {
            tracing::debug!(path = %current_path, "no route matched");
        }
    }
    matched
}

/// Whether a single route matches `current_path`.
pub(crate) fn route_matches<T>(route: &Route<T>, current_path: &str) -> bool {
    let path = normalize_path(current_path);
    let pattern = normalize_path(route.pattern().as_str());

    // Exact routes compare the whole string; `:` and `*` are inert.
    if route.is_exact() {
        return path == pattern;
    }

    match route.pattern().kind() {
        MatchKind::Wildcard { prefix } => matches_wildcard(path, prefix),
        MatchKind::Dynamic => matches_dynamic(path, route.pattern().segments()),
        MatchKind::Static => matches_static(path, pattern),
    }
}

/// Prefix match at a segment boundary: the path is the prefix itself, or
/// continues past it with a `/`.
fn matches_wildcard(path: &str, prefix: &str) -> bool {
    if path == prefix {
        return true;
    }
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Walk pattern segments against path segments, left to right.
fn matches_dynamic(path: &str, segments: &[Segment]) -> bool {
    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let has_optional = segments
        .iter()
        .any(|s| matches!(s, Segment::OptionalParam(_)));

    // Without optionals the depths must agree exactly; with optionals the
    // path may only be shorter than the pattern.
    if !has_optional && parts.len() != segments.len() {
        return false;
    }
    if has_optional && parts.len() > segments.len() {
        return false;
    }

    let mut path_index = 0;
    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if parts.get(path_index) != Some(&text.as_str()) {
                    return false;
                }
                path_index += 1;
            }
            Segment::Param(_) => {
                if path_index >= parts.len() {
                    return false;
                }
                path_index += 1;
            }
            Segment::OptionalParam(_) => {
                // Consumes iff a path segment remains at this position.
                if path_index < parts.len() {
                    path_index += 1;
                }
            }
            // A dynamic pattern never contains a wildcard segment.
            Segment::Wildcard => return false,
        }
    }

    // Every path segment must have been consumed.
    path_index == parts.len()
}

/// Plain patterns: a deeper pattern can never match a shallower path, and a
/// shallower pattern only matches the identical string.
fn matches_static(path: &str, pattern: &str) -> bool {
    let pattern_depth = pattern.split('/').filter(|s| !s.is_empty()).count();
    let path_depth = path.split('/').filter(|s| !s.is_empty()).count();
    if pattern_depth > path_depth {
        return false;
    }
    path == pattern
}

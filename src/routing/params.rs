//! Bound path parameters.
//!
//! # Responsibilities
//! - Carry name → value bindings for a matched route
//! - Bind values by re-walking the matched pattern against the path
//!
//! # Design Decisions
//! - Keys are the names after `:`, minus any trailing `?`
//! - An optional parameter that consumed nothing is absent, not empty
//! - Exact, wildcard, and plain routes bind nothing

use std::collections::HashMap;

use crate::routing::pattern::{normalize_path, MatchKind, RoutePattern, Segment};

/// Parameter values extracted from a matched path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    values: HashMap<String, String>,
}

impl PathParams {
    /// The value bound to `name`, if that parameter consumed a segment.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether `name` bound a value.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Bind parameter values for a pattern that already matched `path`,
    /// walking segments the same way the matcher consumed them.
    pub(crate) fn bind(pattern: &RoutePattern, path: &str) -> Self {
        if !matches!(pattern.kind(), MatchKind::Dynamic) {
            return Self::default();
        }

        let path = normalize_path(path);
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let mut values = HashMap::new();
        let mut path_index = 0;
        for segment in pattern.segments() {
            match segment {
                Segment::OptionalParam(name) => {
                    // Consumes only when a path segment remains here.
                    if let Some(part) = parts.get(path_index) {
                        values.insert(name.clone(), (*part).to_string());
                        path_index += 1;
                    }
                }
                Segment::Param(name) => {
                    if let Some(part) = parts.get(path_index) {
                        values.insert(name.clone(), (*part).to_string());
                    }
                    path_index += 1;
                }
                Segment::Literal(_) | Segment::Wildcard => {
                    path_index += 1;
                }
            }
        }

        Self { values }
    }
}

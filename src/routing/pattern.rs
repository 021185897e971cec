//! Route pattern parsing and path normalization.
//!
//! # Responsibilities
//! - Parse the pattern DSL (`:name`, `:name?`, `*`) into segment variants
//! - Normalize paths for comparison (strip a single trailing slash)
//! - Precompute the wildcard prefix so matching never re-parses strings
//!
//! # Design Decisions
//! - Patterns parse exactly once, at registration time
//! - Parsing is total: a malformed pattern is a route-table author's
//!   mistake and degrades to matching little or nothing, never an error
//! - Normalization borrows from its input; it never allocates

use std::fmt;

/// One `/`-delimited component of a parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text; the path segment at this position must equal it.
    Literal(String),
    /// Named parameter (`:name`); consumes one path segment of any value.
    Param(String),
    /// Optional named parameter (`:name?`); consumes one path segment if
    /// any remain at its position, nothing otherwise.
    OptionalParam(String),
    /// Trailing wildcard (`*`); matches the segment it occupies and
    /// everything after it, to any depth.
    Wildcard,
}

/// How a pattern participates in matching, fixed at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MatchKind {
    /// No parameters, no wildcard: whole-string comparison.
    Static,
    /// At least one parameter segment: segment-by-segment walk.
    Dynamic,
    /// Contains a wildcard: prefix comparison against the text before it.
    Wildcard { prefix: String },
}

/// A parsed, immutable route pattern.
///
/// Parsing never fails, so any string becomes a pattern; strings that mix
/// wildcard and parameter markers in one segment are undefined
/// configuration and simply match little or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
    kind: MatchKind,
}

impl RoutePattern {
    /// Parse a pattern string into its segment sequence.
    pub fn parse(pattern: &str) -> Self {
        let segments: Vec<Segment> = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(parse_segment)
            .collect();

        // Wildcard takes precedence over parameters when both appear;
        // such patterns are author mistakes and match by prefix only.
        let kind = if pattern.contains('*') {
            MatchKind::Wildcard {
                prefix: wildcard_prefix(pattern),
            }
        } else if segments
            .iter()
            .any(|s| matches!(s, Segment::Param(_) | Segment::OptionalParam(_)))
        {
            MatchKind::Dynamic
        } else {
            MatchKind::Static
        };

        Self {
            raw: pattern.to_string(),
            segments,
            kind,
        }
    }

    /// The pattern text as registered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed segment sequence.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub(crate) fn kind(&self) -> &MatchKind {
        &self.kind
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for RoutePattern {
    fn from(pattern: &str) -> Self {
        Self::parse(pattern)
    }
}

fn parse_segment(segment: &str) -> Segment {
    if segment.contains('*') {
        return Segment::Wildcard;
    }
    match segment.strip_prefix(':') {
        Some(name) => match name.strip_suffix('?') {
            Some(name) => Segment::OptionalParam(name.to_string()),
            None => Segment::Param(name.to_string()),
        },
        None => Segment::Literal(segment.to_string()),
    }
}

/// The literal text a wildcard pattern requires in front of the `*`: the
/// normalized pattern up to the wildcard, minus the slash that introduced
/// it. A bare `*` or `/*` leaves an empty prefix and matches every path.
fn wildcard_prefix(pattern: &str) -> String {
    let normalized = normalize_path(pattern);
    let before = match normalized.find('*') {
        Some(index) => &normalized[..index],
        None => normalized,
    };
    before.strip_suffix('/').unwrap_or(before).to_string()
}

/// Strip exactly one trailing `/` from any path longer than the root.
///
/// The literal root path `/` is never stripped. Output that is already
/// normalized comes back unchanged.
pub fn normalize_path(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

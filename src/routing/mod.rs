//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Pattern Registration (once, at startup):
//!     "/blog/:rkey?" ...
//!     → pattern.rs (parse into segments, classify match kind)
//!     → route.rs (pair with handler, freeze as immutable RouteTable)
//!
//! Path Resolution (per navigation):
//!     current path
//!     → matcher.rs (normalize, scan routes in order)
//!     → params.rs (bind :name values for the winner)
//!     → Return: RouteMatch or None
//! ```
//!
//! # Design Decisions
//! - Patterns parsed once at registration, never re-parsed per lookup
//! - No regex in the lookup path (string and segment comparison only)
//! - Deterministic: same path against same table always matches same route
//! - First match wins (ordered by registration)

pub mod matcher;
pub mod params;
pub mod pattern;
pub mod route;

pub use matcher::match_route;
pub use params::PathParams;
pub use pattern::{normalize_path, RoutePattern, Segment};
pub use route::{Route, RouteMatch, RouteTable, RouteTableBuilder};

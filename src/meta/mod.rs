//! Page metadata subsystem.
//!
//! # Data Flow
//! ```text
//! pages.toml / pages.json
//!     → loader.rs (read, parse, collect entries)
//!     → schema.rs (compile entries into a RouteTable<PageMeta>)
//!     → PageMetaMap::resolve(path) per navigation
//!     → host applies title + description
//! ```
//!
//! # Design Decisions
//! - Entries are matched with the same rules as page routes, one mental model
//! - Declarative files over code so metadata edits need no rebuild of pages
//! - A missing entry is `None`, not an error; hosts keep their defaults

pub mod loader;
pub mod schema;

pub use loader::{from_file, from_json_str, from_toml_str, MetaError};
pub use schema::{PageEntry, PageMeta, PageMetaMap};

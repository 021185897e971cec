//! Page metadata schema definitions.
//!
//! Declarative title and description entries, keyed by route pattern and
//! resolved through the same matching rules as page routes.

use serde::{Deserialize, Serialize};

use crate::routing::route::{Route, RouteTable};

/// Metadata attached to a page.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PageMeta {
    /// Document title.
    pub title: String,

    /// Short description for link previews.
    pub description: String,
}

/// One declarative entry: a route pattern and the metadata it carries.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PageEntry {
    /// Route pattern, same syntax as page routes (`/blog/:rkey?`, `*` ...).
    pub pattern: String,

    /// Match by literal equality only, ignoring pattern syntax.
    #[serde(default)]
    pub exact: bool,

    pub title: String,

    pub description: String,
}

/// Page metadata resolved by route matching. Entry order is match priority,
/// so a catch-all `*` entry belongs last.
#[derive(Debug, Default)]
pub struct PageMetaMap {
    table: RouteTable<PageMeta>,
}

impl PageMetaMap {
    /// Compile entries into a matchable table.
    pub fn from_entries(entries: impl IntoIterator<Item = PageEntry>) -> Self {
        let table = entries
            .into_iter()
            .map(|entry| {
                let meta = PageMeta {
                    title: entry.title,
                    description: entry.description,
                };
                if entry.exact {
                    Route::exact(entry.pattern, meta)
                } else {
                    Route::new(entry.pattern, meta)
                }
            })
            .collect();
        Self { table }
    }

    /// Metadata for `path`, or `None` when no entry matches.
    pub fn resolve(&self, path: &str) -> Option<&PageMeta> {
        self.table.match_path(path).map(|matched| matched.handler())
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

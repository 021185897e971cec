//! Client-side routing for a personal website: path matching, navigation
//! history, and declarative page metadata.

pub mod history;
pub mod meta;
pub mod routing;

pub use history::{
    HistorySource, MemoryHistory, NavigationEvent, NavigationKind, NavigationTarget, Router,
};
pub use meta::{MetaError, PageEntry, PageMeta, PageMetaMap};
pub use routing::{
    match_route, normalize_path, PathParams, Route, RouteMatch, RouteTable, RouteTableBuilder,
    RoutePattern, Segment,
};

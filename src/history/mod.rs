//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Link activation
//!     → NavigationTarget::classify (internal path vs external URL)
//!     → shell.rs Router::navigate (push entry, update current)
//!     → routing (resolve path to a RouteMatch)
//!     → listeners (render, title updates, scroll restoration ...)
//!
//! Host history movement (popstate):
//!     backend location changes
//!     → Router::sync (adopt, emit Pop)
//! ```
//!
//! # Design Decisions
//! - The shell is an owned instance; hosts decide sharing and threading
//! - History is a trait so tests and non-browser hosts swap the backend
//! - Events fire after state settles, never during

pub mod shell;
pub mod source;

pub use shell::{NavigationEvent, NavigationKind, NavigationTarget, Router};
pub use source::{HistorySource, MemoryHistory};

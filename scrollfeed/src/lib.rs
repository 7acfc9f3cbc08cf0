//! A headless list reconciliation and bidirectional pagination engine.
//!
//! For adapter-level workflows (scroll-triggered loading, request/complete fetch cycles,
//! scroll-position preservation, polling timers), see the `scrollfeed-adapter` crate.
//!
//! This crate focuses on the state machines behind infinite lists, feeds and chats:
//! cursor/offset pagination tracking in both directions, keyed diffing of collections,
//! divider (group header) placement across paginated batches, and reconciliation of an
//! ordered collection against its rendered rows.
//!
//! It is UI-agnostic. A TUI/GUI/DOM layer is expected to provide:
//! - a [`RowRenderer`] that builds, inserts, finds, replaces and removes rows
//! - scroll geometry ([`ScrollMetrics`]) when asking whether to load more
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod diff;
mod divider;
mod error;
mod key;
mod list;
mod options;
mod render;
mod scroll;
mod tracker;
mod types;

#[cfg(test)]
mod tests;

pub use diff::{Patch, diff, modify};
pub use divider::RowDivider;
pub use error::{ConfigError, PlacementError};
pub use key::RowKey;
pub use list::ListReconciler;
pub use options::{
    DEFAULT_LIMIT, DEFAULT_OFFSET, GroupBy, GroupCompare, GroupFn, KeyFn, ListOptions,
    PaginationOptions, PlacementHook,
};
pub use render::{RenderedRow, RowRenderer};
pub use scroll::{DEFAULT_THRESHOLD, can_load, can_load_with_threshold, should_load};
pub use tracker::PaginationTracker;
pub use types::{
    Cursor, DeletedRow, DiffResult, DiffRow, DiffStatus, Edge, Placement, ScrollDirection,
    ScrollMetrics,
};

//! Adapter workflows for the `scrollfeed` crate.
//!
//! The `scrollfeed` crate is UI-agnostic and owns the list and pagination state machines. This
//! crate provides small, framework-neutral pieces commonly needed to drive them:
//!
//! - A pagination controller that turns scroll events and polling into fetch requests, and
//!   applies the fetched pages (request/complete, no I/O of its own)
//! - Scroll anchoring (e.g. loading older messages above a chat without visual jumps)
//! - An adapter-driven periodic scheduler for polling and timestamp refreshes
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod fetch;
mod scheduler;
mod viewport;


pub use anchor::{ScrollAnchor, apply_anchor, capture_anchor};
pub use controller::PaginationController;
pub use fetch::{BackwardPage, BackwardRequest, ForwardPage, ForwardRequest, LoadOutcome};
pub use scheduler::{DEFAULT_INTERVAL_MS, Scheduler, SubscriptionId};
pub use viewport::Viewport;

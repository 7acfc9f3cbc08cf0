//! Load-more decisions from scroll container geometry.
//!
//! Everything here is pure and cheap: it runs on every scroll notification and must never
//! trigger I/O on its own.

use crate::{Edge, PaginationTracker, ScrollMetrics};

/// Distance from an edge (in scroll units, typically pixels) that counts as "near".
pub const DEFAULT_THRESHOLD: u64 = 100;

/// Returns whether the viewport is within `threshold` of `edge`.
///
/// - `End`: `scroll_offset + viewport_size >= content_size - threshold`
/// - `Start`: `scroll_offset <= threshold`
pub fn should_load(metrics: ScrollMetrics, edge: Edge, threshold: u64) -> bool {
    match edge {
        Edge::End => {
            let bottom = metrics.scroll_offset.saturating_add(metrics.viewport_size);
            bottom >= metrics.content_size.saturating_sub(threshold)
        }
        Edge::Start => metrics.scroll_offset <= threshold,
    }
}

/// `should_load` with [`DEFAULT_THRESHOLD`], gated on the tracker still having older pages.
pub fn can_load<K>(metrics: ScrollMetrics, tracker: &PaginationTracker<K>, edge: Edge) -> bool {
    can_load_with_threshold(metrics, tracker, edge, DEFAULT_THRESHOLD)
}

pub fn can_load_with_threshold<K>(
    metrics: ScrollMetrics,
    tracker: &PaginationTracker<K>,
    edge: Edge,
    threshold: u64,
) -> bool {
    should_load(metrics, edge, threshold) && tracker.can_load_more()
}

use core::fmt;

use crate::Viewport;

/// Scroll state captured before content is inserted above the viewport.
///
/// Typical use case: a chat loading older messages at the top. Re-applying the anchor after
/// the insert shifts the scroll offset by the content growth, so the rows the user was
/// reading stay where they were.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ScrollAnchor {
    pub scroll_offset: u64,
    pub content_size: u64,
}

impl fmt::Debug for ScrollAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollAnchor")
            .field("scroll_offset", &self.scroll_offset)
            .field("content_size", &self.content_size)
            .finish()
    }
}

/// Captures the current offset and content size of `viewport`.
pub fn capture_anchor<V: Viewport + ?Sized>(viewport: &V) -> ScrollAnchor {
    let metrics = viewport.metrics();
    ScrollAnchor {
        scroll_offset: metrics.scroll_offset,
        content_size: metrics.content_size,
    }
}

/// Restores a previously captured anchor after content was inserted above it.
///
/// Returns the requested offset (the viewport may clamp it). Content that shrank requests the
/// captured offset unchanged.
pub fn apply_anchor<V: Viewport + ?Sized>(viewport: &mut V, anchor: &ScrollAnchor) -> u64 {
    let grown = viewport
        .metrics()
        .content_size
        .saturating_sub(anchor.content_size);
    let target = anchor.scroll_offset.saturating_add(grown);
    viewport.scroll_to(target);
    target
}

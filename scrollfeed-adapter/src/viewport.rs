use scrollfeed::ScrollMetrics;

/// The scroll container a [`crate::PaginationController`] reads geometry from and moves.
///
/// Implement this over a DOM element, a TUI list state, or a test double.
pub trait Viewport {
    fn metrics(&self) -> ScrollMetrics;

    /// Moves the scroll position. Implementations may clamp `offset`.
    fn scroll_to(&mut self, offset: u64);

    fn scroll_to_bottom(&mut self) {
        let bottom = self.metrics().max_scroll_offset();
        self.scroll_to(bottom);
    }
}

impl<V: Viewport + ?Sized> Viewport for &mut V {
    fn metrics(&self) -> ScrollMetrics {
        (**self).metrics()
    }

    fn scroll_to(&mut self, offset: u64) {
        (**self).scroll_to(offset);
    }

    fn scroll_to_bottom(&mut self) {
        (**self).scroll_to_bottom();
    }
}

use crate::Cursor;
use crate::options::{DEFAULT_LIMIT, DEFAULT_OFFSET};

/// Cursor/offset pagination state for one list, in both directions.
///
/// Backward (older) pagination is driven by `cursor`/`offset`/`has_more`; forward (newer)
/// pagination by `newest_id`/`has_newer`. Each direction carries its own single-flight flag.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaginationTracker<K> {
    cursor: Option<Cursor>,
    offset: usize,
    limit: usize,
    has_more: bool,
    newest_id: Option<K>,
    has_newer: bool,
    loading: bool,
    loading_newer: bool,
}

impl<K> Default for PaginationTracker<K> {
    fn default() -> Self {
        Self::new(DEFAULT_OFFSET, DEFAULT_LIMIT)
    }
}

impl<K> PaginationTracker<K> {
    /// Creates a tracker. A zero `limit` is bumped to 1; validated configs never pass one.
    pub fn new(offset: usize, limit: usize) -> Self {
        Self {
            cursor: None,
            offset,
            limit: limit.max(1),
            has_more: true,
            newest_id: None,
            has_newer: false,
            loading: false,
            loading_newer: false,
        }
    }

    /// Returns the tracker to its freshly constructed state, with a zero offset.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.cursor = None;
        self.newest_id = None;
        self.has_more = true;
        self.has_newer = false;
        self.loading = false;
        self.loading_newer = false;
    }

    pub fn record_backward_page(&mut self, count: usize, cursor: Option<Cursor>) {
        if count < self.limit {
            self.has_more = false;
        }
        self.offset = self.offset.saturating_add(count);
        self.cursor = cursor;
    }

    pub fn record_newest(&mut self, id: Option<K>) {
        self.has_newer = id.is_some();
        self.newest_id = id;
    }

    /// Marks backward pagination as exhausted.
    pub fn mark_exhausted(&mut self) {
        self.has_more = false;
    }

    /// Marks forward pagination as caught up.
    pub fn mark_caught_up(&mut self) {
        self.has_newer = false;
    }

    pub fn can_load_more(&self) -> bool {
        self.has_more
    }

    pub fn can_load_newer(&self) -> bool {
        self.has_newer && self.newest_id.is_some()
    }

    /// Claims the backward single-flight slot. Returns `false` if a load is already in flight.
    pub fn begin_loading(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Claims the forward single-flight slot. Returns `false` if a load is already in flight.
    pub fn begin_loading_newer(&mut self) -> bool {
        if self.loading_newer {
            return false;
        }
        self.loading_newer = true;
        true
    }

    pub fn finish_loading_newer(&mut self) {
        self.loading_newer = false;
    }

    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn newest_id(&self) -> Option<&K> {
        self.newest_id.as_ref()
    }

    pub fn has_newer(&self) -> bool {
        self.has_newer
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loading_newer(&self) -> bool {
        self.loading_newer
    }
}

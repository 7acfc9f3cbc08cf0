use alloc::string::String;
use alloc::vec::Vec;

/// Opaque continuation token returned by a backward page fetch.
pub type Cursor = String;

/// Which end of the list a batch of rows lands on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    Start,
    #[default]
    End,
}

/// Which boundary of the viewport is checked for load-more.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Start,
    End,
}

/// Layout convention of a paginated list.
///
/// - `Down` (feeds): scrolling toward the bottom loads older items, which are appended. Newer
///   items are prepended to the top.
/// - `Up` (chat): scrolling toward the top loads older items, which are prepended. Newer items
///   are appended to the bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    #[default]
    Down,
    Up,
}

impl ScrollDirection {
    /// The viewport edge that triggers loading older items.
    pub fn older_edge(self) -> Edge {
        match self {
            Self::Down => Edge::End,
            Self::Up => Edge::Start,
        }
    }

    /// Where older items are inserted.
    pub fn older_placement(self) -> Placement {
        match self {
            Self::Down => Placement::End,
            Self::Up => Placement::Start,
        }
    }

    /// Where newer items are inserted.
    pub fn newer_placement(self) -> Placement {
        match self {
            Self::Down => Placement::Start,
            Self::Up => Placement::End,
        }
    }
}

/// Geometry of a scroll container along its scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub scroll_offset: u64,
    pub viewport_size: u64,
    pub content_size: u64,
}

impl ScrollMetrics {
    pub fn new(scroll_offset: u64, viewport_size: u64, content_size: u64) -> Self {
        Self {
            scroll_offset,
            viewport_size,
            content_size,
        }
    }

    /// The largest valid scroll offset (content end aligned with viewport end).
    pub fn max_scroll_offset(&self) -> u64 {
        self.content_size.saturating_sub(self.viewport_size)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiffStatus {
    Added,
    Updated,
    Unchanged,
}

/// One entry of a diff, positioned in the new collection.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffRow<T> {
    pub index: usize,
    pub item: T,
    pub status: DiffStatus,
}

impl<T> DiffRow<T> {
    pub fn new(index: usize, item: T, status: DiffStatus) -> Self {
        Self {
            index,
            item,
            status,
        }
    }
}

/// A row present in the old collection but missing from the new one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeletedRow<T> {
    /// Index in the old collection.
    pub index: usize,
    pub item: T,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffResult<T> {
    /// In the order of the new collection.
    pub changes: Vec<DiffRow<T>>,
    /// In the order of the old collection.
    pub deleted: Vec<DeletedRow<T>>,
}

impl<T> DiffResult<T> {
    pub fn count(&self, status: DiffStatus) -> usize {
        self.changes.iter().filter(|c| c.status == status).count()
    }

    pub fn is_noop(&self) -> bool {
        self.deleted.is_empty()
            && self
                .changes
                .iter()
                .all(|c| c.status == DiffStatus::Unchanged)
    }
}

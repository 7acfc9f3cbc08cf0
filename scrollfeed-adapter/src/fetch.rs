//! Fetch tickets and the pages that answer them.
//!
//! The controller never performs I/O. It hands out a request, the host runs the fetch however
//! it likes (blocking, async, over a channel), and passes the request back together with the
//! page it got. Requests carry the controller generation they were issued under, so answers
//! to requests issued before a [`crate::PaginationController::refresh`] are dropped.

use alloc::vec::Vec;

use scrollfeed::Cursor;

/// A request for the next page of older rows.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackwardRequest {
    pub generation: u64,
    /// `None` on the first page.
    pub cursor: Option<Cursor>,
    pub offset: usize,
    pub limit: usize,
    /// Set for the initial load and for refreshes: the answer replaces the whole list.
    pub replace: bool,
}

/// A request for rows newer than `since`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForwardRequest<K> {
    pub generation: u64,
    pub since: Option<K>,
    pub limit: usize,
}

/// A page of older rows, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BackwardPage<T> {
    #[cfg_attr(feature = "serde", serde(alias = "items"))]
    pub rows: Vec<T>,
    #[cfg_attr(feature = "serde", serde(alias = "lastCursor"))]
    pub last_cursor: Option<Cursor>,
}

impl<T> Default for BackwardPage<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            last_cursor: None,
        }
    }
}

impl<T> BackwardPage<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            last_cursor: None,
        }
    }

    pub fn with_cursor(mut self, cursor: impl Into<Cursor>) -> Self {
        self.last_cursor = Some(cursor.into());
        self
    }
}

/// A page of rows newer than the request's `since`, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ForwardPage<T, K> {
    #[cfg_attr(feature = "serde", serde(alias = "items"))]
    pub rows: Vec<T>,
    /// The id to poll from next. Derived from the rows when absent.
    #[cfg_attr(feature = "serde", serde(alias = "latestId"))]
    pub newest_id: Option<K>,
}

impl<T, K> Default for ForwardPage<T, K> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            newest_id: None,
        }
    }
}

impl<T, K> ForwardPage<T, K> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            newest_id: None,
        }
    }

    pub fn with_newest_id(mut self, id: K) -> Self {
        self.newest_id = Some(id);
        self
    }
}

/// What a completed fetch did to the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Rows were inserted at `placement`.
    Applied {
        rows: usize,
        placement: scrollfeed::Placement,
    },
    /// The page was empty or missing; the direction is now exhausted.
    Empty,
    /// The request predates the latest refresh and was ignored.
    Stale,
}

impl LoadOutcome {
    pub fn rows(&self) -> usize {
        match self {
            Self::Applied { rows, .. } => *rows,
            Self::Empty | Self::Stale => 0,
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale)
    }
}

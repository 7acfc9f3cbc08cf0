use alloc::string::String;
use alloc::sync::Arc;

use crate::scroll::DEFAULT_THRESHOLD;
use crate::{ConfigError, DiffRow, Placement, PlacementError, ScrollDirection};

pub const DEFAULT_OFFSET: usize = 0;
pub const DEFAULT_LIMIT: usize = 20;

/// Maps an item to its identity key.
pub type KeyFn<T, K> = Arc<dyn Fn(&T) -> K + Send + Sync>;

/// Maps an item to its divider group value (e.g. a date bucket).
pub type GroupFn<T, G> = Arc<dyn Fn(&T) -> G + Send + Sync>;

/// Returns `true` when two group values belong to different groups.
pub type GroupCompare<G> = Arc<dyn Fn(&G, &G) -> bool + Send + Sync>;

/// Decides where a row classified as added during a merge is inserted.
///
/// An `Err` is not propagated: the reconciler logs it and falls back to
/// [`ListOptions::added_placement`].
pub type PlacementHook<T> =
    Arc<dyn Fn(&DiffRow<T>) -> Result<Placement, PlacementError> + Send + Sync>;

/// Divider configuration: which value groups rows and how values are compared.
pub struct GroupBy<T, G> {
    pub group_of: GroupFn<T, G>,
    /// Custom "is a different group" comparator. Defaults to `!=`.
    pub compare: Option<GroupCompare<G>>,
    /// Suppresses the divider in front of the very first row.
    pub skip_first: bool,
}

impl<T, G> GroupBy<T, G> {
    pub fn new(group_of: impl Fn(&T) -> G + Send + Sync + 'static) -> Self {
        Self {
            group_of: Arc::new(group_of),
            compare: None,
            skip_first: false,
        }
    }

    pub fn with_compare(
        mut self,
        compare: impl Fn(&G, &G) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.compare = Some(Arc::new(compare));
        self
    }

    pub fn with_skip_first(mut self, skip_first: bool) -> Self {
        self.skip_first = skip_first;
        self
    }
}

impl<T, G> Clone for GroupBy<T, G> {
    fn clone(&self) -> Self {
        Self {
            group_of: Arc::clone(&self.group_of),
            compare: self.compare.clone(),
            skip_first: self.skip_first,
        }
    }
}

impl<T, G> core::fmt::Debug for GroupBy<T, G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GroupBy")
            .field("compare", &self.compare.is_some())
            .field("skip_first", &self.skip_first)
            .finish_non_exhaustive()
    }
}

/// Configuration for [`crate::ListReconciler`].
///
/// Cheap to clone: closures are stored in `Arc`s.
pub struct ListOptions<T, K, G = String> {
    pub key_of: KeyFn<T, K>,
    /// Enables divider rows when set.
    pub group_by: Option<GroupBy<T, G>>,
    /// Where rows classified as added by `replace`/`mingle`/`modify` are inserted.
    pub added_placement: Placement,
    /// Optional per-row override of `added_placement`, consulted by `mingle`.
    pub placement_hook: Option<PlacementHook<T>>,
}

impl<T, K, G> ListOptions<T, K, G> {
    pub fn new(key_of: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        Self {
            key_of: Arc::new(key_of),
            group_by: None,
            added_placement: Placement::End,
            placement_hook: None,
        }
    }

    pub fn with_group_by(mut self, group_by: GroupBy<T, G>) -> Self {
        self.group_by = Some(group_by);
        self
    }

    pub fn with_added_placement(mut self, placement: Placement) -> Self {
        self.added_placement = placement;
        self
    }

    pub fn with_placement_hook(
        mut self,
        hook: impl Fn(&DiffRow<T>) -> Result<Placement, PlacementError> + Send + Sync + 'static,
    ) -> Self {
        self.placement_hook = Some(Arc::new(hook));
        self
    }
}

impl<T, K, G> Clone for ListOptions<T, K, G> {
    fn clone(&self) -> Self {
        Self {
            key_of: Arc::clone(&self.key_of),
            group_by: self.group_by.clone(),
            added_placement: self.added_placement,
            placement_hook: self.placement_hook.clone(),
        }
    }
}

impl<T, K, G> core::fmt::Debug for ListOptions<T, K, G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("group_by", &self.group_by)
            .field("added_placement", &self.added_placement)
            .field("placement_hook", &self.placement_hook.is_some())
            .finish_non_exhaustive()
    }
}

/// Pagination configuration shared by the tracker and the pagination controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaginationOptions {
    pub offset: usize,
    /// Page size requested per fetch. Must be greater than zero.
    pub limit: usize,
    pub scroll_direction: ScrollDirection,
    /// Whether merges remove rows missing from the fresh collection.
    pub with_delete: bool,
    /// Edge distance for load-more checks.
    pub threshold: u64,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
            scroll_direction: ScrollDirection::Down,
            with_delete: false,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl PaginationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_scroll_direction(mut self, scroll_direction: ScrollDirection) -> Self {
        self.scroll_direction = scroll_direction;
        self
    }

    pub fn with_delete(mut self, with_delete: bool) -> Self {
        self.with_delete = with_delete;
        self
    }

    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        Ok(())
    }
}

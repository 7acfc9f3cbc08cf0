use crate::options::{GroupBy, GroupCompare, GroupFn};

/// Decides where grouping divider rows (e.g. date headers) go as rows stream in.
///
/// Appends and prepends each track their own "last seen" group value, so dividers come out
/// the same whether the data arrived in one batch or across many paginated fetches.
///
/// A prepend batch must be preceded by [`RowDivider::set_prepend_boundary`] with the item
/// currently displayed first. A batch whose tail continues that item's group does not get a
/// second divider for it.
///
/// Each `append`/`prepend` call returns the divider value to render for that row, if any.
pub struct RowDivider<T, G> {
    group_of: GroupFn<T, G>,
    compare: Option<GroupCompare<G>>,
    skip_first: bool,

    last_append: Option<G>,
    last_prepend: Option<G>,
    last_divider_value: Option<G>,
    prepend_boundary: Option<G>,
}

impl<T, G: Clone + PartialEq> RowDivider<T, G> {
    pub fn new(group_by: &GroupBy<T, G>) -> Self {
        Self {
            group_of: group_by.group_of.clone(),
            compare: group_by.compare.clone(),
            skip_first: group_by.skip_first,
            last_append: None,
            last_prepend: None,
            last_divider_value: None,
            prepend_boundary: None,
        }
    }

    pub fn reset(&mut self) {
        self.last_append = None;
        self.last_prepend = None;
        self.last_divider_value = None;
        self.prepend_boundary = None;
    }

    pub fn value_of(&self, item: &T) -> G {
        (self.group_of)(item)
    }

    /// `true` when `a` and `b` are different groups.
    pub fn differs(&self, a: &G, b: &G) -> bool {
        match &self.compare {
            Some(compare) => compare(a, b),
            None => a != b,
        }
    }

    /// Records the group of the currently-first displayed item before a prepend batch.
    ///
    /// `None` (empty list) forgets every group seen so far, so the batch is treated like a
    /// first load even when the list was emptied by deletions rather than [`RowDivider::reset`].
    pub fn set_prepend_boundary(&mut self, first_item: Option<&T>) {
        let Some(first) = first_item else {
            self.reset();
            return;
        };
        let value = self.value_of(first);
        self.last_prepend = Some(value.clone());
        self.prepend_boundary = Some(value);
        self.last_divider_value = None;
    }

    pub fn prepend_boundary(&self) -> Option<&G> {
        self.prepend_boundary.as_ref()
    }

    pub fn last_append(&self) -> Option<&G> {
        self.last_append.as_ref()
    }

    pub fn last_prepend(&self) -> Option<&G> {
        self.last_prepend.as_ref()
    }

    pub fn last_divider_value(&self) -> Option<&G> {
        self.last_divider_value.as_ref()
    }

    /// Seeds both directions on the very first row. Returns whether this was the first row.
    fn seed_first(&mut self, value: &G) -> bool {
        if self.last_append.is_some() {
            return false;
        }
        self.last_append = Some(value.clone());
        self.last_prepend = Some(value.clone());
        true
    }

    pub fn append(&mut self, item: &T) -> Option<G> {
        self.prepend_boundary = None;

        let value = self.value_of(item);
        if self.seed_first(&value) {
            return self.first_divider(value);
        }

        let emitted = match &self.last_append {
            Some(last) if !self.differs(last, &value) => None,
            _ => self.emit(value.clone()),
        };
        self.last_append = Some(value);
        emitted
    }

    pub fn prepend(&mut self, item: &T) -> Option<G> {
        let value = self.value_of(item);
        if self.seed_first(&value) {
            return self.first_divider(value);
        }

        if let Some(boundary) = &self.prepend_boundary {
            if !self.differs(boundary, &value) {
                self.last_prepend = Some(value);
                return None;
            }
        }

        let emitted = match &self.last_prepend {
            Some(last) if !self.differs(last, &value) => None,
            _ => self.emit(value.clone()),
        };
        self.last_prepend = Some(value);
        emitted
    }

    fn first_divider(&mut self, value: G) -> Option<G> {
        if self.skip_first {
            return None;
        }
        self.emit(value)
    }

    /// Never emits the same group twice in a row.
    fn emit(&mut self, value: G) -> Option<G> {
        if let Some(last) = &self.last_divider_value {
            if !self.differs(last, &value) {
                return None;
            }
        }
        self.last_divider_value = Some(value.clone());
        Some(value)
    }
}

impl<T, G: core::fmt::Debug> core::fmt::Debug for RowDivider<T, G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RowDivider")
            .field("skip_first", &self.skip_first)
            .field("last_append", &self.last_append)
            .field("last_prepend", &self.last_prepend)
            .field("last_divider_value", &self.last_divider_value)
            .field("prepend_boundary", &self.prepend_boundary)
            .finish_non_exhaustive()
    }
}

use alloc::vec::Vec;

use crate::diff::{self, Patch};
use crate::divider::RowDivider;
use crate::render::{RenderedRow, RowRenderer};
use crate::{DiffRow, DiffStatus, ListOptions, Placement, PlacementError, RowKey};

/// Owns the ordered item collection of one list and keeps its rendered rows in sync.
///
/// Every mutation goes through this type: it updates the collection, asks the
/// [`RowRenderer`] to build rows (and divider rows when grouping is configured), and hands back
/// batched insert/remove/replace instructions.
///
/// Rows are always addressed by key, never by a cached index: a concurrent prepend may shift
/// every position. Lookups for keys that are no longer present are silent no-ops.
pub struct ListReconciler<T, K, G, R> {
    options: ListOptions<T, K, G>,
    items: Vec<T>,
    divider: Option<RowDivider<T, G>>,
    renderer: R,
}

impl<T, K, G, R> ListReconciler<T, K, G, R>
where
    T: Clone + PartialEq,
    K: RowKey,
    G: Clone + PartialEq,
    R: RowRenderer<T, K, G>,
{
    pub fn new(options: ListOptions<T, K, G>, renderer: R) -> Self {
        let divider = options.group_by.as_ref().map(RowDivider::new);
        Self {
            options,
            items: Vec::new(),
            divider,
            renderer,
        }
    }

    /// Creates a list and appends `items` as its first batch.
    pub fn with_items(
        options: ListOptions<T, K, G>,
        renderer: R,
        items: impl IntoIterator<Item = T>,
    ) -> Self {
        let mut list = Self::new(options, renderer);
        list.append(items);
        list
    }

    pub fn options(&self) -> &ListOptions<T, K, G> {
        &self.options
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn divider(&self) -> Option<&RowDivider<T, G>> {
        self.divider.as_ref()
    }

    pub fn key_of(&self, item: &T) -> K {
        (self.options.key_of)(item)
    }

    pub fn rows(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Current position of the item with `key` (linear scan).
    pub fn position(&self, key: &K) -> Option<usize> {
        self.items.iter().position(|item| self.key_of(item) == *key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    pub fn reset(&mut self) {
        ftrace!(len = self.items.len(), "ListReconciler::reset");
        self.items.clear();
        if let Some(divider) = self.divider.as_mut() {
            divider.reset();
        }
        self.renderer.clear();
        self.renderer.set_has_items(false);
    }

    /// Hard reset to `rows` without diffing.
    pub fn set_rows(&mut self, rows: impl IntoIterator<Item = T>) {
        self.reset();
        self.append(rows);
    }

    /// Appends a batch at the end, in order, as a single render insertion.
    pub fn append(&mut self, items: impl IntoIterator<Item = T>) {
        let batch: Vec<T> = items.into_iter().collect();
        if batch.is_empty() {
            return;
        }
        ftrace!(count = batch.len(), "ListReconciler::append");

        let mut rendered = Vec::with_capacity(batch.len());
        for item in batch {
            if let Some(divider) = self.divider.as_mut() {
                if let Some(value) = divider.append(&item) {
                    if let Some(row) = self.renderer.build_divider(&value) {
                        rendered.push(RenderedRow::Divider(row));
                    }
                }
            }

            let index = self.items.len();
            if let Some(row) = self.renderer.build_row(&item, index) {
                let key = self.key_of(&item);
                rendered.push(RenderedRow::Item { key, row });
            }
            self.items.push(item);
        }

        if !rendered.is_empty() {
            self.renderer.insert_rows(rendered, Placement::End);
        }
        self.notify_has_items();
    }

    /// Prepends a batch so that `[a, b, c]` ends up as `a, b, c, <existing>`.
    ///
    /// Rows are processed bottom-up (from `c` to `a`) so divider decisions follow the same
    /// transitions a reader sees scrolling up. Each divider lands above the run of rows it heads.
    /// When the bottom of the batch continues the group of the current first row, the divider
    /// already on screen for that group is moved up to the top of the run instead of duplicated.
    pub fn prepend(&mut self, items: impl IntoIterator<Item = T>) {
        let batch: Vec<T> = items.into_iter().collect();
        if batch.is_empty() {
            return;
        }
        ftrace!(count = batch.len(), "ListReconciler::prepend");

        let boundary = match self.divider.as_mut() {
            Some(divider) => {
                divider.set_prepend_boundary(self.items.first());
                divider.prepend_boundary().cloned()
            }
            None => None,
        };

        // Built bottom-up; reversed before insertion.
        let mut built: Vec<RenderedRow<K, R::Row>> = Vec::with_capacity(batch.len());
        let mut pending: Option<G> = None;
        let mut in_boundary_run = boundary.is_some();
        let mut boundary_rendered = 0usize;

        for (index, item) in batch.iter().enumerate().rev() {
            if let Some(divider) = self.divider.as_mut() {
                if in_boundary_run {
                    let value = divider.value_of(item);
                    in_boundary_run = boundary
                        .as_ref()
                        .is_some_and(|b| !divider.differs(b, &value));
                }

                if let Some(value) = divider.prepend(item) {
                    if let Some(previous) = pending.replace(value) {
                        if let Some(row) = self.renderer.build_divider(&previous) {
                            built.push(RenderedRow::Divider(row));
                        }
                    }
                }
            }

            if let Some(row) = self.renderer.build_row(item, index) {
                let key = self.key_of(item);
                built.push(RenderedRow::Item { key, row });
                if in_boundary_run {
                    boundary_rendered += 1;
                }
            }
        }

        if let Some(value) = pending {
            if let Some(row) = self.renderer.build_divider(&value) {
                built.push(RenderedRow::Divider(row));
            }
        }

        if boundary_rendered > 0 {
            if let Some(value) = boundary {
                self.move_leading_divider(&mut built, boundary_rendered, &value);
            }
        }

        built.reverse();
        if !built.is_empty() {
            self.renderer.insert_rows(built, Placement::Start);
        }
        let mut merged = batch;
        merged.append(&mut self.items);
        self.items = merged;
        self.notify_has_items();
    }

    /// Moves the on-screen divider heading `value` above the first `run` rows built bottom-up.
    fn move_leading_divider(
        &mut self,
        built: &mut Vec<RenderedRow<K, R::Row>>,
        run: usize,
        value: &G,
    ) {
        let Some(handle) = self.renderer.find_leading_divider() else {
            return;
        };
        let Some(row) = self.renderer.build_divider(value) else {
            return;
        };
        ftrace!(run, "ListReconciler::move_leading_divider");
        self.renderer.remove_row(handle);
        built.insert(run, RenderedRow::Divider(row));
    }

    /// Removes the item with `key`. Returns `false` (and does nothing) if it is not present.
    pub fn delete(&mut self, key: &K) -> bool {
        let removed = self.delete_quiet(key);
        if removed {
            self.notify_has_items();
        }
        removed
    }

    fn delete_quiet(&mut self, key: &K) -> bool {
        let Some(pos) = self.position(key) else {
            return false;
        };
        self.items.remove(pos);
        if let Some(handle) = self.renderer.find_row_by_key(key) {
            self.renderer.remove_row(handle);
        }
        ftrace!(pos, "ListReconciler::delete");
        true
    }

    /// Deletes each item by key, then reports has-items once.
    pub fn remove<'a>(&mut self, items: impl IntoIterator<Item = &'a T>)
    where
        T: 'a,
    {
        for item in items {
            let key = self.key_of(item);
            self.delete_quiet(&key);
        }
        self.notify_has_items();
    }

    /// Applies one diff row using the configured added-row placement.
    pub fn replace(&mut self, row: DiffRow<T>) {
        let placement = self.options.added_placement;
        self.replace_at(row, placement);
    }

    /// Applies one diff row. `placement` is only used for `Added` rows.
    ///
    /// An `Added` row whose key is already present is applied as an update, so a row delivered
    /// twice by racing fetches is never duplicated.
    pub fn replace_at(&mut self, row: DiffRow<T>, placement: Placement) {
        match row.status {
            DiffStatus::Unchanged => {}
            DiffStatus::Added if !self.contains_key(&self.key_of(&row.item)) => match placement {
                Placement::End => self.append([row.item]),
                Placement::Start => self.prepend([row.item]),
            },
            DiffStatus::Added | DiffStatus::Updated => self.update_in_place(row.item),
        }
    }

    fn update_in_place(&mut self, item: T) {
        let key = self.key_of(&item);
        let Some(pos) = self.position(&key) else {
            return;
        };
        self.items[pos] = item;

        let Some(handle) = self.renderer.find_row_by_key(&key) else {
            return;
        };
        match self.renderer.build_row(&self.items[pos], pos) {
            Some(row) => self.renderer.replace_row(handle, row),
            None => self.renderer.remove_row(handle),
        }
    }

    /// Merges a freshly fetched collection into the list.
    ///
    /// With `with_delete`, rows missing from `items` are removed first, so later updates never
    /// act on positions that a deletion is about to shift. Unchanged rows are not rebuilt.
    ///
    /// Added rows go where [`ListOptions::placement_hook`] says, or to
    /// [`ListOptions::added_placement`] when no hook is configured.
    pub fn mingle(&mut self, items: &[T], with_delete: bool) {
        match self.options.placement_hook.clone() {
            Some(hook) => self.mingle_with(items, with_delete, &*hook),
            None => {
                let placement = self.options.added_placement;
                self.mingle_with(items, with_delete, &|_| Ok(placement));
            }
        }
    }

    /// Like [`ListReconciler::mingle`], with a per-row placement decision for added rows.
    ///
    /// A hook error falls back to the configured added-row placement.
    pub fn mingle_with(
        &mut self,
        items: &[T],
        with_delete: bool,
        place: &dyn Fn(&DiffRow<T>) -> Result<Placement, PlacementError>,
    ) {
        let result = diff::diff(&self.items, items, &*self.options.key_of);
        fdebug!(
            changes = result.changes.len(),
            deleted = result.deleted.len(),
            with_delete,
            "ListReconciler::mingle"
        );

        if with_delete {
            for deleted in &result.deleted {
                let key = self.key_of(&deleted.item);
                self.delete_quiet(&key);
            }
        }

        self.apply_changes(result.changes, place);
        self.notify_has_items();
    }

    /// Updates rows in place, then inserts added rows as one batch per edge so they keep the
    /// order they have in `changes`.
    fn apply_changes(
        &mut self,
        changes: Vec<DiffRow<T>>,
        place: &dyn Fn(&DiffRow<T>) -> Result<Placement, PlacementError>,
    ) {
        let mut at_start: Vec<T> = Vec::new();
        let mut at_end: Vec<T> = Vec::new();

        for change in changes {
            match change.status {
                DiffStatus::Unchanged => {}
                DiffStatus::Added if !self.contains_key(&self.key_of(&change.item)) => {
                    let key = self.key_of(&change.item);
                    let queued = at_start
                        .iter_mut()
                        .chain(at_end.iter_mut())
                        .find(|item| (self.options.key_of)(&**item) == key);
                    if let Some(slot) = queued {
                        *slot = change.item;
                        continue;
                    }
                    match self.resolve_placement(place, &change) {
                        Placement::Start => at_start.push(change.item),
                        Placement::End => at_end.push(change.item),
                    }
                }
                DiffStatus::Added | DiffStatus::Updated => self.update_in_place(change.item),
            }
        }

        self.prepend(at_start);
        self.append(at_end);
    }

    fn resolve_placement(
        &self,
        place: &dyn Fn(&DiffRow<T>) -> Result<Placement, PlacementError>,
        row: &DiffRow<T>,
    ) -> Placement {
        match place(row) {
            Ok(placement) => placement,
            Err(err) => {
                fwarn!(error = %err, index = row.index, "placement hook failed; using default");
                let _ = err;
                self.options.added_placement
            }
        }
    }

    /// One-sided merge of partial updates. Unmatched patches are added only with `add_missing`.
    pub fn modify<P: Patch<T, K>>(
        &mut self,
        patches: impl IntoIterator<Item = P>,
        add_missing: bool,
    ) {
        let rows = diff::modify(patches, &self.items, &*self.options.key_of, add_missing);
        let placement = self.options.added_placement;
        self.apply_changes(rows, &|_| Ok(placement));
    }

    fn notify_has_items(&mut self) {
        let has_items = !self.items.is_empty();
        self.renderer.set_has_items(has_items);
    }
}

impl<T, K, G, R> core::fmt::Debug for ListReconciler<T, K, G, R>
where
    T: core::fmt::Debug,
    G: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListReconciler")
            .field("items", &self.items)
            .field("divider", &self.divider)
            .finish_non_exhaustive()
    }
}

//! Keyed collection diffing.

use alloc::vec::Vec;

use crate::key::KeyIndexMap;
use crate::{DeletedRow, DiffResult, DiffRow, DiffStatus, RowKey};

/// A partial update for an item of type `T`, addressed by key.
///
/// Used by [`modify`] for field-level patches (e.g. a status field ticking over) that do not
/// carry a full record.
pub trait Patch<T, K> {
    /// Key of the item this patch targets.
    fn key(&self) -> K;

    /// Writes the patched fields onto `item`. Fields the patch carries win.
    fn apply_to(&self, item: &mut T);

    /// Converts the patch into a full item when nothing matched. `None` skips it.
    fn into_item(self) -> Option<T>;
}

struct Slot<'a, T> {
    item: &'a T,
    index: usize,
}

fn index_by_key<'a, T, K: RowKey>(
    items: &'a [T],
    key_of: &dyn Fn(&T) -> K,
) -> KeyIndexMap<K, Slot<'a, T>> {
    let mut map = KeyIndexMap::new();
    for (index, item) in items.iter().enumerate() {
        map.insert(key_of(item), Slot { item, index });
    }
    map
}

/// Classifies every row of `new` against `old`.
///
/// - key absent from `old`: `Added`
/// - key present with a different payload: `Updated`
/// - key present with an equal payload: `Unchanged`
///
/// Keys of `old` that `new` never mentions come back in `deleted`, in their original order.
/// `changes` follows the order of `new`.
pub fn diff<T, K>(old: &[T], new: &[T], key_of: &dyn Fn(&T) -> K) -> DiffResult<T>
where
    T: Clone + PartialEq,
    K: RowKey,
{
    let mut remaining = index_by_key(old, key_of);
    let mut changes = Vec::with_capacity(new.len());

    for (index, item) in new.iter().enumerate() {
        let key = key_of(item);
        let status = match remaining.remove(&key) {
            None => DiffStatus::Added,
            Some(slot) if slot.item != item => DiffStatus::Updated,
            Some(_) => DiffStatus::Unchanged,
        };
        changes.push(DiffRow::new(index, item.clone(), status));
    }

    let mut deleted: Vec<DeletedRow<T>> = remaining
        .into_values()
        .map(|slot| DeletedRow {
            index: slot.index,
            item: slot.item.clone(),
        })
        .collect();
    deleted.sort_unstable_by_key(|row| row.index);

    ftrace!(
        old = old.len(),
        new = new.len(),
        deleted = deleted.len(),
        "diff"
    );

    DiffResult { changes, deleted }
}

/// One-sided merge: applies each patch onto its matching item in `existing`.
///
/// Matched patches yield `Updated` rows carrying the merged item. Unmatched patches yield
/// `Added` rows only when `add_missing` is set and the patch converts into a full item; otherwise
/// they are skipped. Row indexes are positions in `updates`.
pub fn modify<T, K, P>(
    updates: impl IntoIterator<Item = P>,
    existing: &[T],
    key_of: &dyn Fn(&T) -> K,
    add_missing: bool,
) -> Vec<DiffRow<T>>
where
    T: Clone,
    K: RowKey,
    P: Patch<T, K>,
{
    let by_key = index_by_key(existing, key_of);
    let mut out = Vec::new();

    for (index, patch) in updates.into_iter().enumerate() {
        match by_key.get(&patch.key()) {
            Some(slot) => {
                let mut merged = slot.item.clone();
                patch.apply_to(&mut merged);
                out.push(DiffRow::new(index, merged, DiffStatus::Updated));
            }
            None if add_missing => {
                if let Some(item) = patch.into_item() {
                    out.push(DiffRow::new(index, item, DiffStatus::Added));
                }
            }
            None => {}
        }
    }

    out
}

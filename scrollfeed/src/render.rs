use alloc::vec::Vec;

use crate::Placement;

/// A row built for insertion, tagged so the host can tell dividers from content rows.
///
/// Content rows carry the key of their item: the host must be able to find them again by key
/// (see [`RowRenderer::find_row_by_key`]), since dividers and prepends shift positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderedRow<K, R> {
    Divider(R),
    Item { key: K, row: R },
}

impl<K, R> RenderedRow<K, R> {
    pub fn is_divider(&self) -> bool {
        matches!(self, Self::Divider(_))
    }

    pub fn row(&self) -> &R {
        match self {
            Self::Divider(row) | Self::Item { row, .. } => row,
        }
    }

    pub fn into_row(self) -> R {
        match self {
            Self::Divider(row) | Self::Item { row, .. } => row,
        }
    }
}

/// The host-side rendering collaborator driven by [`crate::ListReconciler`].
///
/// The reconciler never touches UI objects directly. It asks the renderer to build rows and
/// hands back ordered insert/remove/replace instructions. A list, a table body, or a test
/// recorder are all just different renderers.
pub trait RowRenderer<T, K, G> {
    /// A constructed but not yet inserted row.
    type Row;
    /// A reference to a row already in the rendered output.
    type Handle;

    /// Builds the visual row for `item` at collection position `index`.
    ///
    /// Returning `None` suppresses the row.
    fn build_row(&mut self, item: &T, index: usize) -> Option<Self::Row>;

    /// Builds a divider row for a group value. Without an override, dividers are never rendered.
    fn build_divider(&mut self, value: &G) -> Option<Self::Row> {
        let _ = value;
        None
    }

    /// Inserts a batch of rows, in order, at the start or end of the rendered output.
    fn insert_rows(&mut self, rows: Vec<RenderedRow<K, Self::Row>>, at: Placement);

    fn find_row_by_key(&self, key: &K) -> Option<Self::Handle>;

    /// The divider rendered above every content row, if there is one.
    fn find_leading_divider(&self) -> Option<Self::Handle> {
        None
    }

    fn remove_row(&mut self, handle: Self::Handle);

    fn replace_row(&mut self, handle: Self::Handle, row: Self::Row);

    /// Drops every rendered row, dividers included.
    fn clear(&mut self);

    /// Called after every batch with whether the list holds any items.
    fn set_has_items(&mut self, has_items: bool) {
        let _ = has_items;
    }
}

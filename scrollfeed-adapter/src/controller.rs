use scrollfeed::{
    ConfigError, ListReconciler, PaginationOptions, PaginationTracker, Placement, RowKey,
    RowRenderer, ScrollDirection, ScrollMetrics, can_load_with_threshold,
};

use crate::{
    BackwardPage, BackwardRequest, ForwardPage, ForwardRequest, LoadOutcome, Viewport,
    apply_anchor, capture_anchor,
};

/// A framework-neutral controller that wires a [`ListReconciler`] to a [`PaginationTracker`]
/// and provides the common infinite-list workflows (scroll-triggered loading, polling for
/// newer rows, refresh, scroll preservation).
///
/// This type does not perform I/O and holds no UI objects. Adapters drive it by calling:
/// - `start` on mount, then `on_scroll` whenever the UI reports a scroll change
/// - `fetch_new` to poll for newer rows (e.g. from a [`crate::Scheduler`] subscription)
/// - `complete_older` / `complete_newer` with the request and whatever page the fetch produced
///
/// In [`ScrollDirection::Down`] (feeds) older rows are appended and newer rows prepended.
/// In [`ScrollDirection::Up`] (chats) older rows are prepended with the scroll position
/// preserved, newer rows are appended, and the first load scrolls to the bottom.
pub struct PaginationController<T, K, G, R> {
    list: ListReconciler<T, K, G, R>,
    tracker: PaginationTracker<K>,
    options: PaginationOptions,
    generation: u64,
    loaded_once: bool,
    scroll_after_newer: bool,
}

impl<T, K, G, R> PaginationController<T, K, G, R>
where
    T: Clone + PartialEq,
    K: RowKey,
    G: Clone + PartialEq,
    R: RowRenderer<T, K, G>,
{
    pub fn new(
        list: ListReconciler<T, K, G, R>,
        options: PaginationOptions,
    ) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self {
            list,
            tracker: PaginationTracker::new(options.offset, options.limit),
            options,
            generation: 0,
            loaded_once: false,
            scroll_after_newer: false,
        })
    }

    pub fn list(&self) -> &ListReconciler<T, K, G, R> {
        &self.list
    }

    /// Direct access for live updates (`mingle`, `replace`, `delete`) between fetches.
    pub fn list_mut(&mut self) -> &mut ListReconciler<T, K, G, R> {
        &mut self.list
    }

    pub fn into_list(self) -> ListReconciler<T, K, G, R> {
        self.list
    }

    pub fn tracker(&self) -> &PaginationTracker<K> {
        &self.tracker
    }

    pub fn options(&self) -> &PaginationOptions {
        &self.options
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.options.scroll_direction
    }

    /// Bumped by every [`Self::refresh`]. Requests from older generations complete as stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_loaded(&self) -> bool {
        self.loaded_once
    }

    /// Issues the initial backward fetch. Its page replaces whatever the list holds.
    ///
    /// Returns `None` if a backward fetch is already in flight.
    pub fn start(&mut self) -> Option<BackwardRequest> {
        self.begin_older(true)
    }

    /// Issues a backward fetch if the viewport is near the older edge and more pages exist.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<BackwardRequest> {
        let edge = self.options.scroll_direction.older_edge();
        if !can_load_with_threshold(metrics, &self.tracker, edge, self.options.threshold) {
            return None;
        }
        self.begin_older(false)
    }

    /// Issues a backward fetch regardless of scroll position, e.g. from a "load more" button.
    pub fn load_older(&mut self) -> Option<BackwardRequest> {
        if !self.tracker.can_load_more() {
            adebug!("load_older: no more pages");
            return None;
        }
        self.begin_older(false)
    }

    /// Resets pagination and issues a fresh initial fetch.
    ///
    /// The list keeps its rows until the answer arrives. Answers to requests issued before
    /// this call are ignored.
    pub fn refresh(&mut self) -> BackwardRequest {
        self.generation = self.generation.wrapping_add(1);
        self.tracker.reset();
        self.loaded_once = false;
        self.scroll_after_newer = false;
        adebug!(generation = self.generation, "refresh");
        // The reset released the single-flight slot, so this always claims it.
        self.tracker.begin_loading();
        self.backward_request(true)
    }

    fn begin_older(&mut self, replace: bool) -> Option<BackwardRequest> {
        if !self.tracker.begin_loading() {
            atrace!("backward fetch already in flight");
            return None;
        }
        Some(self.backward_request(replace))
    }

    fn backward_request(&self, replace: bool) -> BackwardRequest {
        BackwardRequest {
            generation: self.generation,
            cursor: self.tracker.cursor().cloned(),
            offset: self.tracker.offset(),
            limit: self.tracker.limit(),
            replace,
        }
    }

    /// Applies the answer to a backward request. `None` means the fetch produced no payload
    /// and is treated like an empty page.
    ///
    /// The backward loading flag is released on every path except a stale request, whose
    /// flag was already released by the refresh that made it stale.
    pub fn complete_older<V: Viewport + ?Sized>(
        &mut self,
        request: BackwardRequest,
        page: Option<BackwardPage<T>>,
        viewport: &mut V,
    ) -> LoadOutcome {
        if request.generation != self.generation {
            adebug!(
                request = request.generation,
                current = self.generation,
                "dropping stale backward page"
            );
            return LoadOutcome::Stale;
        }

        let outcome = self.apply_older(request.replace, page.unwrap_or_default(), viewport);
        self.tracker.finish_loading();
        outcome
    }

    fn apply_older<V: Viewport + ?Sized>(
        &mut self,
        replace: bool,
        page: BackwardPage<T>,
        viewport: &mut V,
    ) -> LoadOutcome {
        if replace {
            self.list.reset();
        }

        let count = page.rows.len();
        if count == 0 {
            adebug!("backward page empty, history exhausted");
            self.tracker.mark_exhausted();
            return LoadOutcome::Empty;
        }

        let first_load = !self.loaded_once;
        let direction = self.options.scroll_direction;
        if first_load && self.tracker.newest_id().is_none() {
            let newest = self.newest_in(&page.rows);
            self.tracker.record_newest(newest);
        }

        let placement = direction.older_placement();
        match placement {
            Placement::End => self.list.append(page.rows),
            Placement::Start if first_load => self.list.prepend(page.rows),
            Placement::Start => {
                let anchor = capture_anchor(viewport);
                self.list.prepend(page.rows);
                apply_anchor(viewport, &anchor);
            }
        }

        self.tracker.record_backward_page(count, page.last_cursor);
        self.loaded_once = true;
        atrace!(
            count,
            offset = self.tracker.offset(),
            has_more = self.tracker.has_more(),
            "backward page applied"
        );

        if first_load && direction == ScrollDirection::Up {
            viewport.scroll_to_bottom();
        }
        LoadOutcome::Applied {
            rows: count,
            placement,
        }
    }

    /// Issues a forward fetch for rows newer than the newest known id.
    ///
    /// Only gated on the forward single-flight flag: polling keeps asking even after a short
    /// page. With `scroll_to_bottom` in [`ScrollDirection::Up`], the viewport is moved to the
    /// bottom once the answer has been applied (chat "new message" behavior). Feeds ignore it,
    /// since their newer rows land at the top.
    pub fn fetch_new(&mut self, scroll_to_bottom: bool) -> Option<ForwardRequest<K>> {
        if !self.tracker.begin_loading_newer() {
            atrace!("forward fetch already in flight");
            return None;
        }
        self.scroll_after_newer = scroll_to_bottom;
        Some(ForwardRequest {
            generation: self.generation,
            since: self.tracker.newest_id().cloned(),
            limit: self.tracker.limit(),
        })
    }

    /// Applies the answer to a forward request. `None` is treated like an empty page.
    pub fn complete_newer<V: Viewport + ?Sized>(
        &mut self,
        request: ForwardRequest<K>,
        page: Option<ForwardPage<T, K>>,
        viewport: &mut V,
    ) -> LoadOutcome {
        if request.generation != self.generation {
            adebug!(
                request = request.generation,
                current = self.generation,
                "dropping stale forward page"
            );
            return LoadOutcome::Stale;
        }

        let scroll = core::mem::take(&mut self.scroll_after_newer);
        let outcome = self.apply_newer(page.unwrap_or_default());
        self.tracker.finish_loading_newer();

        if scroll && self.options.scroll_direction == ScrollDirection::Up {
            viewport.scroll_to_bottom();
        }
        outcome
    }

    fn apply_newer(&mut self, page: ForwardPage<T, K>) -> LoadOutcome {
        let count = page.rows.len();
        if count == 0 {
            atrace!("forward page empty, caught up");
            self.tracker.mark_caught_up();
            return LoadOutcome::Empty;
        }

        let newest = match page.newest_id {
            Some(id) => Some(id),
            None => self.newest_in(&page.rows),
        };

        let placement = self.options.scroll_direction.newer_placement();
        match placement {
            Placement::Start => self.list.prepend(page.rows),
            Placement::End => self.list.append(page.rows),
        }

        self.tracker.record_newest(newest);
        if count < self.tracker.limit() {
            self.tracker.mark_caught_up();
        }
        atrace!(count, has_newer = self.tracker.has_newer(), "forward page applied");
        LoadOutcome::Applied {
            rows: count,
            placement,
        }
    }

    /// The key of the newest row in a page given in display order.
    fn newest_in(&self, rows: &[T]) -> Option<K> {
        let newest = match self.options.scroll_direction.newer_placement() {
            Placement::Start => rows.first(),
            Placement::End => rows.last(),
        };
        newest.map(|row| self.list.key_of(row))
    }

    /// Merges a fresh snapshot into the list, deleting missing rows per
    /// [`PaginationOptions::with_delete`].
    pub fn mingle(&mut self, rows: &[T]) {
        self.list.mingle(rows, self.options.with_delete);
    }

    /// Replaces the list with `rows` without diffing or touching pagination state.
    pub fn set_rows(&mut self, rows: impl IntoIterator<Item = T>) {
        self.list.set_rows(rows);
    }

    pub fn scroll_to_bottom<V: Viewport + ?Sized>(&self, viewport: &mut V) {
        viewport.scroll_to_bottom();
    }
}

impl<T, K, G, R> core::fmt::Debug for PaginationController<T, K, G, R>
where
    T: core::fmt::Debug,
    K: core::fmt::Debug,
    G: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PaginationController")
            .field("list", &self.list)
            .field("tracker", &self.tracker)
            .field("options", &self.options)
            .field("generation", &self.generation)
            .field("loaded_once", &self.loaded_once)
            .finish_non_exhaustive()
    }
}

use crate::*;

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

#[derive(Clone, Debug, PartialEq)]
struct Msg {
    id: u32,
    day: &'static str,
    text: &'static str,
}

fn msg(id: u32, day: &'static str, text: &'static str) -> Msg {
    Msg { id, day, text }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Line {
    Divider(String),
    Row(u32, &'static str),
}

/// In-memory renderer that records the rendered output as a flat list of lines.
#[derive(Debug, Default)]
struct Recorder {
    lines: Vec<Line>,
    built: Vec<u32>,
    inserts: usize,
    has_items: Option<bool>,
    with_dividers: bool,
}

impl Recorder {
    fn with_dividers() -> Self {
        Self {
            with_dividers: true,
            ..Self::default()
        }
    }

    fn row_keys(&self) -> Vec<u32> {
        self.lines
            .iter()
            .filter_map(|l| match l {
                Line::Row(id, _) => Some(*id),
                Line::Divider(_) => None,
            })
            .collect()
    }

    fn dividers(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|l| match l {
                Line::Divider(v) => Some(v.as_str()),
                Line::Row(..) => None,
            })
            .collect()
    }
}

impl RowRenderer<Msg, u32, String> for Recorder {
    type Row = Line;
    type Handle = usize;

    fn build_row(&mut self, item: &Msg, _index: usize) -> Option<Line> {
        self.built.push(item.id);
        Some(Line::Row(item.id, item.text))
    }

    fn build_divider(&mut self, value: &String) -> Option<Line> {
        self.with_dividers.then(|| Line::Divider(value.clone()))
    }

    fn insert_rows(&mut self, rows: Vec<RenderedRow<u32, Line>>, at: Placement) {
        self.inserts += 1;
        let lines: Vec<Line> = rows.into_iter().map(RenderedRow::into_row).collect();
        match at {
            Placement::End => self.lines.extend(lines),
            Placement::Start => {
                let tail = core::mem::replace(&mut self.lines, lines);
                self.lines.extend(tail);
            }
        }
    }

    fn find_row_by_key(&self, key: &u32) -> Option<usize> {
        self.lines
            .iter()
            .position(|l| matches!(l, Line::Row(id, _) if id == key))
    }

    fn find_leading_divider(&self) -> Option<usize> {
        match self.lines.first() {
            Some(Line::Divider(_)) => Some(0),
            _ => None,
        }
    }

    fn remove_row(&mut self, handle: usize) {
        self.lines.remove(handle);
    }

    fn replace_row(&mut self, handle: usize, row: Line) {
        self.lines[handle] = row;
    }

    fn clear(&mut self) {
        self.lines.clear();
    }

    fn set_has_items(&mut self, has_items: bool) {
        self.has_items = Some(has_items);
    }
}

type List = ListReconciler<Msg, u32, String, Recorder>;

fn plain_list(items: Vec<Msg>) -> List {
    ListReconciler::with_items(ListOptions::new(|m: &Msg| m.id), Recorder::default(), items)
}

fn grouped_options() -> ListOptions<Msg, u32, String> {
    ListOptions::new(|m: &Msg| m.id).with_group_by(GroupBy::new(|m: &Msg| m.day.to_string()))
}

fn grouped_list(items: Vec<Msg>) -> List {
    ListReconciler::with_items(grouped_options(), Recorder::with_dividers(), items)
}

fn ids(list: &List) -> Vec<u32> {
    list.rows().iter().map(|m| m.id).collect()
}

struct TextPatch {
    id: u32,
    text: &'static str,
}

impl Patch<Msg, u32> for TextPatch {
    fn key(&self) -> u32 {
        self.id
    }

    fn apply_to(&self, item: &mut Msg) {
        item.text = self.text;
    }

    fn into_item(self) -> Option<Msg> {
        Some(msg(self.id, "new", self.text))
    }
}

#[test]
fn tracker_full_then_short_page() {
    let mut t = PaginationTracker::<u32>::new(0, 20);
    t.record_backward_page(20, Some("c1".to_string()));
    assert!(t.has_more());
    assert_eq!(t.offset(), 20);
    assert_eq!(t.cursor().map(String::as_str), Some("c1"));

    t.record_backward_page(7, None);
    assert!(!t.has_more());
    assert!(!t.can_load_more());
    assert_eq!(t.offset(), 27);
    assert_eq!(t.cursor(), None);
}

#[test]
fn tracker_empty_page_ends_data() {
    let mut t = PaginationTracker::<u32>::new(0, 20);
    t.record_backward_page(0, None);
    assert!(!t.can_load_more());
    assert_eq!(t.offset(), 0);
}

#[test]
fn tracker_reset_twice_equals_reset_once() {
    let mut t = PaginationTracker::<u32>::new(5, 10);
    t.record_backward_page(3, Some("x".to_string()));
    t.record_newest(Some(42));
    assert!(t.begin_loading());
    assert!(t.begin_loading_newer());

    t.reset();
    let once = t.clone();
    t.reset();
    assert_eq!(t, once);

    assert_eq!(t.offset(), 0);
    assert_eq!(t.cursor(), None);
    assert_eq!(t.newest_id(), None);
    assert!(t.has_more());
    assert!(!t.has_newer());
    assert!(!t.is_loading());
    assert!(!t.is_loading_newer());
    assert_eq!(t.limit(), 10);
}

#[test]
fn tracker_newest_controls_can_load_newer() {
    let mut t = PaginationTracker::<u32>::default();
    assert_eq!(t.limit(), DEFAULT_LIMIT);
    assert!(!t.can_load_newer());

    t.record_newest(Some(7));
    assert!(t.has_newer());
    assert!(t.can_load_newer());
    assert_eq!(t.newest_id(), Some(&7));

    t.record_newest(None);
    assert!(!t.can_load_newer());

    t.record_newest(Some(8));
    t.mark_caught_up();
    assert!(!t.can_load_newer());
    assert_eq!(t.newest_id(), Some(&8));
}

#[test]
fn tracker_single_flight_per_direction() {
    let mut t = PaginationTracker::<u32>::default();
    assert!(t.begin_loading());
    assert!(!t.begin_loading());
    // The forward slot is independent.
    assert!(t.begin_loading_newer());
    assert!(!t.begin_loading_newer());

    t.finish_loading();
    assert!(t.begin_loading());
    assert!(t.is_loading_newer());
}

#[test]
fn should_load_end_edge() {
    // bottom = 750 + 200 = 950 >= 1000 - 100
    assert!(should_load(ScrollMetrics::new(750, 200, 1000), Edge::End, 100));
    // bottom = 600 + 200 = 800 < 900
    assert!(!should_load(ScrollMetrics::new(600, 200, 1000), Edge::End, 100));
    // Short content: always near the end.
    assert!(should_load(ScrollMetrics::new(0, 200, 50), Edge::End, 100));
}

#[test]
fn should_load_start_edge() {
    assert!(should_load(ScrollMetrics::new(100, 200, 1000), Edge::Start, 100));
    assert!(should_load(ScrollMetrics::new(0, 200, 1000), Edge::Start, 100));
    assert!(!should_load(ScrollMetrics::new(101, 200, 1000), Edge::Start, 100));
    assert!(!should_load(ScrollMetrics::new(30, 200, 1000), Edge::Start, 10));
}

#[test]
fn can_load_requires_more_pages() {
    let mut t = PaginationTracker::<u32>::new(0, 20);
    let near_end = ScrollMetrics::new(900, 100, 1000);
    assert!(can_load(near_end, &t, Edge::End));
    assert!(!can_load(near_end, &t, Edge::Start));

    t.mark_exhausted();
    assert!(!can_load(near_end, &t, Edge::End));
    assert!(!can_load_with_threshold(near_end, &t, Edge::End, 10_000));
}

#[test]
fn scroll_direction_maps_edges_and_placements() {
    assert_eq!(ScrollDirection::default(), ScrollDirection::Down);
    assert_eq!(ScrollDirection::Down.older_edge(), Edge::End);
    assert_eq!(ScrollDirection::Down.older_placement(), Placement::End);
    assert_eq!(ScrollDirection::Down.newer_placement(), Placement::Start);
    assert_eq!(ScrollDirection::Up.older_edge(), Edge::Start);
    assert_eq!(ScrollDirection::Up.older_placement(), Placement::Start);
    assert_eq!(ScrollDirection::Up.newer_placement(), Placement::End);
    assert_eq!(ScrollMetrics::new(0, 300, 1000).max_scroll_offset(), 700);
}

#[test]
fn pagination_options_validate() {
    let opts = PaginationOptions::new();
    assert_eq!(opts.limit, 20);
    assert_eq!(opts.offset, 0);
    assert_eq!(opts.threshold, DEFAULT_THRESHOLD);
    assert!(!opts.with_delete);
    assert_eq!(opts.validate(), Ok(()));
    assert_eq!(
        PaginationOptions::new().with_limit(0).validate(),
        Err(ConfigError::ZeroLimit)
    );
}

#[test]
fn diff_classifies_every_key_once() {
    let old = vec![msg(1, "d", "a"), msg(2, "d", "b"), msg(3, "d", "c")];
    let new = vec![msg(2, "d", "b"), msg(3, "d", "C"), msg(4, "d", "d")];
    let result = diff(&old, &new, &|m: &Msg| m.id);

    let statuses: Vec<(usize, u32, DiffStatus)> = result
        .changes
        .iter()
        .map(|c| (c.index, c.item.id, c.status))
        .collect();
    assert_eq!(
        statuses,
        vec![
            (0, 2, DiffStatus::Unchanged),
            (1, 3, DiffStatus::Updated),
            (2, 4, DiffStatus::Added),
        ]
    );
    assert_eq!(result.changes[1].item.text, "C");
    assert_eq!(
        result.deleted,
        vec![DeletedRow {
            index: 0,
            item: msg(1, "d", "a")
        }]
    );
    // Union of keys is {1, 2, 3, 4}.
    assert_eq!(result.changes.len() + result.deleted.len(), 4);
    assert_eq!(result.count(DiffStatus::Added), 1);
    assert!(!result.is_noop());
}

#[test]
fn diff_deleted_keep_old_order() {
    let old = vec![
        msg(1, "d", "a"),
        msg(2, "d", "b"),
        msg(3, "d", "c"),
        msg(4, "d", "e"),
    ];
    let new = vec![msg(3, "d", "c")];
    let result = diff(&old, &new, &|m: &Msg| m.id);
    let deleted: Vec<(usize, u32)> = result.deleted.iter().map(|d| (d.index, d.item.id)).collect();
    assert_eq!(deleted, vec![(0, 1), (1, 2), (3, 4)]);
}

#[test]
fn diff_of_equal_collections_is_noop() {
    let items = vec![msg(1, "d", "a"), msg(2, "d", "b")];
    let result = diff(&items, &items.clone(), &|m: &Msg| m.id);
    assert!(result.is_noop());
    assert_eq!(result.count(DiffStatus::Unchanged), 2);
}

#[test]
fn modify_merges_and_optionally_adds() {
    let existing = vec![msg(1, "d", "a"), msg(2, "d", "b")];

    let rows = modify(
        vec![
            TextPatch { id: 2, text: "B" },
            TextPatch { id: 9, text: "z" },
        ],
        &existing,
        &|m: &Msg| m.id,
        false,
    );
    assert_eq!(
        rows,
        vec![DiffRow::new(0, msg(2, "d", "B"), DiffStatus::Updated)]
    );

    let rows = modify(
        vec![TextPatch { id: 9, text: "z" }],
        &existing,
        &|m: &Msg| m.id,
        true,
    );
    assert_eq!(
        rows,
        vec![DiffRow::new(0, msg(9, "new", "z"), DiffStatus::Added)]
    );
}

#[test]
fn divider_append_emits_on_group_change() {
    let group_by = GroupBy::new(|m: &Msg| m.day.to_string());
    let mut d = RowDivider::new(&group_by);

    assert_eq!(d.append(&msg(1, "mon", "")), Some("mon".to_string()));
    assert_eq!(d.append(&msg(2, "mon", "")), None);
    assert_eq!(d.append(&msg(3, "tue", "")), Some("tue".to_string()));
    assert_eq!(d.last_append().map(String::as_str), Some("tue"));
    assert_eq!(d.last_prepend().map(String::as_str), Some("mon"));

    d.reset();
    assert_eq!(d.last_append(), None);
    assert_eq!(d.last_divider_value(), None);
    assert_eq!(d.append(&msg(4, "tue", "")), Some("tue".to_string()));
}

#[test]
fn divider_prepend_into_emptied_list_starts_over() {
    let group_by = GroupBy::new(|m: &Msg| m.day.to_string());
    let mut d = RowDivider::new(&group_by);
    assert_eq!(d.append(&msg(1, "mon", "")), Some("mon".to_string()));

    // Every row was deleted; the next prepend sees no first item.
    d.set_prepend_boundary(None);
    assert_eq!(d.last_prepend(), None);
    assert_eq!(d.prepend(&msg(2, "mon", "")), Some("mon".to_string()));

    let group_by = group_by.with_skip_first(true);
    let mut d = RowDivider::new(&group_by);
    assert_eq!(d.append(&msg(1, "mon", "")), None);
    assert_eq!(d.append(&msg(3, "tue", "")), Some("tue".to_string()));
    d.set_prepend_boundary(None);
    assert_eq!(d.prepend(&msg(4, "tue", "")), None);
}

#[test]
fn divider_skip_first() {
    let group_by = GroupBy::new(|m: &Msg| m.day.to_string()).with_skip_first(true);
    let mut d = RowDivider::new(&group_by);

    assert_eq!(d.append(&msg(1, "mon", "")), None);
    assert_eq!(d.append(&msg(2, "tue", "")), Some("tue".to_string()));
}

#[test]
fn divider_custom_compare() {
    // Same month ("2024-03-01" vs "2024-03-17") counts as the same group.
    let group_by = GroupBy::new(|m: &Msg| m.day.to_string())
        .with_compare(|a: &String, b: &String| a.get(..7) != b.get(..7));
    let mut d = RowDivider::new(&group_by);

    assert!(d.append(&msg(1, "2024-03-01", "")).is_some());
    assert_eq!(d.append(&msg(2, "2024-03-17", "")), None);
    assert_eq!(
        d.append(&msg(3, "2024-04-02", "")),
        Some("2024-04-02".to_string())
    );
}

#[test]
fn divider_prepend_suppresses_boundary_group() {
    let group_by = GroupBy::new(|m: &Msg| m.day.to_string());
    let mut d = RowDivider::new(&group_by);
    let a = msg(10, "g1", "");
    assert_eq!(d.append(&a), Some("g1".to_string()));

    d.set_prepend_boundary(Some(&a));
    assert_eq!(d.prepend_boundary().map(String::as_str), Some("g1"));
    assert_eq!(d.last_divider_value(), None);

    // Processed bottom-up: Y then X.
    assert_eq!(d.prepend(&msg(2, "g1", "")), None);
    assert_eq!(d.prepend(&msg(1, "g0", "")), Some("g0".to_string()));
    assert_eq!(d.last_prepend().map(String::as_str), Some("g0"));

    // Appending ends the prepend phase.
    d.append(&msg(11, "g1", ""));
    assert_eq!(d.prepend_boundary(), None);
}

#[test]
fn divider_never_repeats_last_emitted_value() {
    let group_by = GroupBy::new(|m: &Msg| m.day.to_string());
    let mut d = RowDivider::new(&group_by);
    assert!(d.append(&msg(1, "a", "")).is_some());
    assert!(d.append(&msg(2, "b", "")).is_some());

    // The prepend side still sits at "a"; its transition into "b" right after "b" was
    // emitted is deduplicated.
    assert_eq!(d.prepend(&msg(0, "b", "")), None);
}

#[test]
fn append_renders_rows_and_dividers_in_one_batch() {
    let list = grouped_list(vec![
        msg(1, "mon", "a"),
        msg(2, "mon", "b"),
        msg(3, "tue", "c"),
    ]);
    let r = list.renderer();
    assert_eq!(r.inserts, 1);
    assert_eq!(
        r.lines,
        vec![
            Line::Divider("mon".to_string()),
            Line::Row(1, "a"),
            Line::Row(2, "b"),
            Line::Divider("tue".to_string()),
            Line::Row(3, "c"),
        ]
    );
    assert_eq!(r.has_items, Some(true));
}

#[test]
fn prepend_keeps_argument_order() {
    let mut list = plain_list(vec![msg(4, "d", "d"), msg(5, "d", "e")]);
    list.prepend(vec![msg(1, "d", "a"), msg(2, "d", "b"), msg(3, "d", "c")]);

    assert_eq!(ids(&list), vec![1, 2, 3, 4, 5]);
    assert_eq!(list.renderer().row_keys(), vec![1, 2, 3, 4, 5]);
    assert_eq!(list.renderer().inserts, 2);
}

#[test]
fn prepend_boundary_keeps_one_divider_per_group() {
    let mut list = grouped_list(vec![msg(10, "g1", "A")]);
    list.prepend(vec![msg(1, "g0", "X"), msg(2, "g1", "Y")]);

    assert_eq!(ids(&list), vec![1, 2, 10]);
    assert_eq!(
        list.renderer().lines,
        vec![
            Line::Divider("g0".to_string()),
            Line::Row(1, "X"),
            Line::Divider("g1".to_string()),
            Line::Row(2, "Y"),
            Line::Row(10, "A"),
        ]
    );
    let g1 = list.renderer().dividers().iter().filter(|v| **v == "g1").count();
    assert_eq!(g1, 1);
}

#[test]
fn prepend_same_group_moves_leading_divider_up() {
    let mut list = grouped_list(vec![msg(10, "g1", "A")]);
    list.prepend(vec![msg(1, "g1", "B"), msg(2, "g1", "C")]);

    assert_eq!(
        list.renderer().lines,
        vec![
            Line::Divider("g1".to_string()),
            Line::Row(1, "B"),
            Line::Row(2, "C"),
            Line::Row(10, "A"),
        ]
    );
}

#[test]
fn prepend_into_empty_list_heads_each_run() {
    let mut list = ListReconciler::new(grouped_options(), Recorder::with_dividers());
    list.prepend(vec![msg(1, "d1", "a"), msg(2, "d1", "b"), msg(3, "d2", "c")]);
    assert_eq!(
        list.renderer().lines,
        vec![
            Line::Divider("d1".to_string()),
            Line::Row(1, "a"),
            Line::Row(2, "b"),
            Line::Divider("d2".to_string()),
            Line::Row(3, "c"),
        ]
    );

    // Newer rows appended at the bottom continue from the last row's group.
    list.append(vec![msg(4, "d2", "d"), msg(5, "d3", "e")]);
    assert_eq!(list.renderer().dividers(), vec!["d1", "d2", "d3"]);
    assert_eq!(list.renderer().row_keys(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn delete_by_key_after_prepend_shift() {
    let mut list = plain_list(vec![msg(4, "d", "d"), msg(5, "d", "e")]);
    list.prepend(vec![msg(1, "d", "a"), msg(2, "d", "b"), msg(3, "d", "c")]);

    assert!(list.delete(&4));
    assert_eq!(ids(&list), vec![1, 2, 3, 5]);
    assert_eq!(list.renderer().row_keys(), vec![1, 2, 3, 5]);
}

#[test]
fn stale_keys_are_noops() {
    let mut list = plain_list(vec![msg(1, "d", "a")]);
    assert!(!list.delete(&99));
    list.replace(DiffRow::new(0, msg(99, "d", "z"), DiffStatus::Updated));
    list.replace(DiffRow::new(0, msg(1, "d", "zz"), DiffStatus::Unchanged));
    assert_eq!(list.rows(), &[msg(1, "d", "a")]);
    assert_eq!(list.renderer().lines, vec![Line::Row(1, "a")]);
}

#[test]
fn replace_updates_row_in_place() {
    let mut list = plain_list(vec![msg(1, "d", "a"), msg(2, "d", "b"), msg(3, "d", "c")]);
    list.replace(DiffRow::new(1, msg(2, "d", "B"), DiffStatus::Updated));
    assert_eq!(list.get(1), Some(&msg(2, "d", "B")));
    assert_eq!(
        list.renderer().lines,
        vec![Line::Row(1, "a"), Line::Row(2, "B"), Line::Row(3, "c")]
    );
}

#[test]
fn replace_added_respects_placement() {
    let mut list = plain_list(vec![msg(2, "d", "b")]);
    list.replace(DiffRow::new(0, msg(3, "d", "c"), DiffStatus::Added));
    list.replace_at(
        DiffRow::new(0, msg(1, "d", "a"), DiffStatus::Added),
        Placement::Start,
    );
    assert_eq!(ids(&list), vec![1, 2, 3]);

    // A second delivery of the same key updates instead of duplicating.
    list.replace(DiffRow::new(0, msg(3, "d", "C"), DiffStatus::Added));
    assert_eq!(ids(&list), vec![1, 2, 3]);
    assert_eq!(list.last(), Some(&msg(3, "d", "C")));
}

#[test]
fn remove_deletes_each_key() {
    let mut list = plain_list(vec![msg(1, "d", "a"), msg(2, "d", "b"), msg(3, "d", "c")]);
    let gone = vec![msg(1, "d", "a"), msg(3, "d", "c"), msg(7, "d", "x")];
    list.remove(&gone);
    assert_eq!(ids(&list), vec![2]);

    list.remove(&[msg(2, "d", "b")]);
    assert!(list.is_empty());
    assert_eq!(list.renderer().has_items, Some(false));
}

#[test]
fn mingle_with_delete_skips_unchanged_rows() {
    let mut list = plain_list(vec![msg(1, "d", "a"), msg(3, "d", "z")]);
    list.renderer_mut().built.clear();

    list.mingle(&[msg(1, "d", "a"), msg(2, "d", "b")], true);

    assert_eq!(list.rows(), &[msg(1, "d", "a"), msg(2, "d", "b")]);
    assert_eq!(list.renderer().row_keys(), vec![1, 2]);
    // Only the added row was built.
    assert_eq!(list.renderer().built, vec![2]);
}

#[test]
fn mingle_without_delete_keeps_missing_rows() {
    let mut list = plain_list(vec![msg(1, "d", "a"), msg(3, "d", "z")]);
    list.mingle(&[msg(1, "d", "A"), msg(2, "d", "b")], false);
    assert_eq!(ids(&list), vec![1, 3, 2]);
    assert_eq!(list.get(0), Some(&msg(1, "d", "A")));
    assert_eq!(
        list.renderer().lines,
        vec![Line::Row(1, "A"), Line::Row(3, "z"), Line::Row(2, "b")]
    );
}

#[test]
fn mingle_keeps_snapshot_order_for_rows_added_at_start() {
    let options = ListOptions::new(|m: &Msg| m.id).with_added_placement(Placement::Start);
    let mut list = ListReconciler::with_items(options, Recorder::default(), vec![msg(3, "d", "c")]);

    list.mingle(&[msg(1, "d", "a"), msg(2, "d", "b"), msg(3, "d", "c")], false);
    assert_eq!(ids(&list), vec![1, 2, 3]);
    assert_eq!(list.renderer().row_keys(), vec![1, 2, 3]);

    list.mingle(&[msg(4, "d", "x"), msg(5, "d", "y"), msg(1, "d", "A")], false);
    assert_eq!(ids(&list), vec![4, 5, 1, 2, 3]);
    assert_eq!(list.get(2), Some(&msg(1, "d", "A")));
}

#[test]
fn modify_adds_missing_rows_in_patch_order() {
    let options = ListOptions::new(|m: &Msg| m.id).with_added_placement(Placement::Start);
    let mut list = ListReconciler::with_items(options, Recorder::default(), vec![msg(9, "d", "z")]);
    list.modify(
        vec![
            TextPatch { id: 5, text: "e" },
            TextPatch { id: 6, text: "f" },
        ],
        true,
    );
    assert_eq!(ids(&list), vec![5, 6, 9]);
    assert_eq!(list.renderer().row_keys(), vec![5, 6, 9]);
}

#[test]
fn placement_hook_error_falls_back_to_default() {
    let options = ListOptions::new(|m: &Msg| m.id).with_placement_hook(|row: &DiffRow<Msg>| {
        if row.item.id == 9 {
            Err(PlacementError::Undecided("no anchor".to_string()))
        } else {
            Ok(Placement::Start)
        }
    });
    let mut list = ListReconciler::with_items(options, Recorder::default(), vec![msg(1, "d", "a")]);

    list.mingle(&[msg(1, "d", "a"), msg(9, "d", "x"), msg(7, "d", "y")], false);
    assert_eq!(ids(&list), vec![7, 1, 9]);
}

#[test]
fn modify_patches_existing_rows() {
    let mut list = plain_list(vec![msg(1, "d", "a"), msg(2, "d", "b")]);
    list.modify(
        vec![
            TextPatch { id: 2, text: "B" },
            TextPatch { id: 5, text: "e" },
        ],
        false,
    );
    assert_eq!(list.rows(), &[msg(1, "d", "a"), msg(2, "d", "B")]);

    list.modify(vec![TextPatch { id: 5, text: "e" }], true);
    assert_eq!(ids(&list), vec![1, 2, 5]);
    assert_eq!(list.renderer().row_keys(), vec![1, 2, 5]);
}

#[test]
fn reset_and_set_rows() {
    let mut list = grouped_list(vec![msg(1, "mon", "a"), msg(2, "tue", "b")]);
    list.reset();
    assert!(list.is_empty());
    assert!(list.renderer().lines.is_empty());
    assert_eq!(list.renderer().has_items, Some(false));
    assert_eq!(list.divider().and_then(|d| d.last_append()), None);

    list.set_rows(vec![msg(3, "wed", "c")]);
    assert_eq!(ids(&list), vec![3]);
    assert_eq!(
        list.renderer().lines,
        vec![Line::Divider("wed".to_string()), Line::Row(3, "c")]
    );
    assert_eq!(list.position(&3), Some(0));
    assert!(list.contains_key(&3));
    assert_eq!(list.len(), 1);
}

#[test]
fn empty_batches_do_not_render() {
    let mut list = plain_list(Vec::new());
    list.append(Vec::new());
    list.prepend(Vec::new());
    assert_eq!(list.renderer().inserts, 0);
    assert!(list.first().is_none());
}

#[cfg(feature = "serde")]
#[test]
fn pagination_options_deserialize_with_defaults() {
    let opts: PaginationOptions =
        serde_json::from_str(r#"{"limit": 5, "scroll_direction": "Up"}"#).unwrap();
    assert_eq!(opts.limit, 5);
    assert_eq!(opts.offset, 0);
    assert_eq!(opts.scroll_direction, ScrollDirection::Up);
    assert_eq!(opts.threshold, DEFAULT_THRESHOLD);
}

// Example: merging a freshly fetched collection into a live list.
use scrollfeed::{DiffStatus, ListOptions, ListReconciler, Placement, RenderedRow, RowRenderer, diff};

#[derive(Clone, Debug, PartialEq)]
struct Task {
    id: u32,
    status: &'static str,
}

#[derive(Default)]
struct Log {
    rows: Vec<(u32, String)>,
}

impl RowRenderer<Task, u32, String> for Log {
    type Row = (u32, String);
    type Handle = usize;

    fn build_row(&mut self, item: &Task, _index: usize) -> Option<(u32, String)> {
        println!("build #{}", item.id);
        Some((item.id, item.status.to_string()))
    }

    fn insert_rows(&mut self, rows: Vec<RenderedRow<u32, (u32, String)>>, at: Placement) {
        let rows: Vec<_> = rows.into_iter().map(RenderedRow::into_row).collect();
        match at {
            Placement::End => self.rows.extend(rows),
            Placement::Start => {
                self.rows.splice(0..0, rows);
            }
        }
    }

    fn find_row_by_key(&self, key: &u32) -> Option<usize> {
        self.rows.iter().position(|(id, _)| id == key)
    }

    fn remove_row(&mut self, handle: usize) {
        self.rows.remove(handle);
    }

    fn replace_row(&mut self, handle: usize, row: (u32, String)) {
        self.rows[handle] = row;
    }

    fn clear(&mut self) {
        self.rows.clear();
    }
}

fn main() {
    let key_of = |t: &Task| t.id;
    let mut list = ListReconciler::<_, _, String, _>::with_items(
        ListOptions::new(key_of),
        Log::default(),
        vec![Task { id: 1, status: "open" }, Task { id: 3, status: "open" }],
    );

    let fresh = vec![Task { id: 1, status: "done" }, Task { id: 2, status: "open" }];
    let preview = diff(list.rows(), &fresh, &key_of);
    println!(
        "updated={} added={} deleted={}",
        preview.count(DiffStatus::Updated),
        preview.count(DiffStatus::Added),
        preview.deleted.len()
    );

    list.mingle(&fresh, true);
    println!("{:?}", list.renderer().rows);
}

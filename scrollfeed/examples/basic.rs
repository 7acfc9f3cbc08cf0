// Example: a grouped list receiving an appended page, then an older prepended page.
use scrollfeed::{GroupBy, ListOptions, ListReconciler, Placement, RenderedRow, RowRenderer};

#[derive(Clone, Debug, PartialEq)]
struct Message {
    id: u64,
    day: &'static str,
    body: &'static str,
}

#[derive(Default)]
struct Printer {
    lines: Vec<String>,
}

impl RowRenderer<Message, u64, String> for Printer {
    type Row = String;
    type Handle = usize;

    fn build_row(&mut self, item: &Message, _index: usize) -> Option<String> {
        Some(format!("  #{} {}", item.id, item.body))
    }

    fn build_divider(&mut self, value: &String) -> Option<String> {
        Some(format!("-- {value} --"))
    }

    fn insert_rows(&mut self, rows: Vec<RenderedRow<u64, String>>, at: Placement) {
        let rows = rows.into_iter().map(RenderedRow::into_row);
        match at {
            Placement::End => self.lines.extend(rows),
            Placement::Start => {
                let tail = std::mem::take(&mut self.lines);
                self.lines.extend(rows);
                self.lines.extend(tail);
            }
        }
    }

    fn find_row_by_key(&self, key: &u64) -> Option<usize> {
        let needle = format!("  #{key} ");
        self.lines.iter().position(|l| l.starts_with(&needle))
    }

    fn find_leading_divider(&self) -> Option<usize> {
        self.lines.first().filter(|l| l.starts_with("--")).map(|_| 0)
    }

    fn remove_row(&mut self, handle: usize) {
        self.lines.remove(handle);
    }

    fn replace_row(&mut self, handle: usize, row: String) {
        self.lines[handle] = row;
    }

    fn clear(&mut self) {
        self.lines.clear();
    }
}

fn main() {
    let options = ListOptions::new(|m: &Message| m.id)
        .with_group_by(GroupBy::new(|m: &Message| m.day.to_string()));
    let mut list = ListReconciler::new(options, Printer::default());

    list.append(vec![
        Message { id: 3, day: "Tue", body: "standup" },
        Message { id: 4, day: "Wed", body: "release" },
    ]);

    // Older page: its last row continues "Tue", so the "Tue" header moves up instead of repeating.
    list.prepend(vec![
        Message { id: 1, day: "Mon", body: "kickoff" },
        Message { id: 2, day: "Tue", body: "review" },
    ]);

    for line in &list.renderer().lines {
        println!("{line}");
    }
}

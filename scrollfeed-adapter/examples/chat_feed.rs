// Example: a chat that loads its latest page, scrolls up for history, and polls for new messages.
use std::cell::RefCell;
use std::rc::Rc;

use scrollfeed::{
    GroupBy, ListOptions, ListReconciler, PaginationOptions, Placement, RenderedRow, RowRenderer,
    ScrollDirection, ScrollMetrics,
};
use scrollfeed_adapter::{
    BackwardPage, BackwardRequest, ForwardPage, ForwardRequest, PaginationController, Scheduler,
    Viewport,
};

const LINE_HEIGHT: u64 = 20;

#[derive(Clone, Debug, PartialEq)]
struct Message {
    id: u64,
    day: &'static str,
    body: String,
}

type Lines = Rc<RefCell<Vec<String>>>;

/// Renders each row as one line of a terminal-ish transcript.
struct Transcript {
    lines: Lines,
}

impl RowRenderer<Message, u64, String> for Transcript {
    type Row = String;
    type Handle = usize;

    fn build_row(&mut self, item: &Message, _index: usize) -> Option<String> {
        Some(format!("  [{}] {}", item.id, item.body))
    }

    fn build_divider(&mut self, value: &String) -> Option<String> {
        Some(format!("== {value} =="))
    }

    fn insert_rows(&mut self, rows: Vec<RenderedRow<u64, String>>, at: Placement) {
        let rows = rows.into_iter().map(RenderedRow::into_row);
        let mut lines = self.lines.borrow_mut();
        match at {
            Placement::End => lines.extend(rows),
            Placement::Start => {
                lines.splice(0..0, rows);
            }
        }
    }

    fn find_row_by_key(&self, key: &u64) -> Option<usize> {
        let needle = format!("  [{key}] ");
        self.lines
            .borrow()
            .iter()
            .position(|l| l.starts_with(&needle))
    }

    fn find_leading_divider(&self) -> Option<usize> {
        let lines = self.lines.borrow();
        lines.first().filter(|l| l.starts_with("==")).map(|_| 0)
    }

    fn remove_row(&mut self, handle: usize) {
        self.lines.borrow_mut().remove(handle);
    }

    fn replace_row(&mut self, handle: usize, row: String) {
        self.lines.borrow_mut()[handle] = row;
    }

    fn clear(&mut self) {
        self.lines.borrow_mut().clear();
    }
}

/// The scroll container showing the transcript.
struct Window {
    lines: Lines,
    offset: u64,
    height: u64,
}

impl Viewport for Window {
    fn metrics(&self) -> ScrollMetrics {
        let content = self.lines.borrow().len() as u64 * LINE_HEIGHT;
        ScrollMetrics::new(self.offset, self.height, content)
    }

    fn scroll_to(&mut self, offset: u64) {
        let max = self.metrics().max_scroll_offset();
        self.offset = offset.min(max);
    }
}

fn message(id: u64) -> Message {
    Message {
        id,
        day: if id <= 12 { "Monday" } else { "Tuesday" },
        body: format!("message {id}"),
    }
}

/// Stand-in server history: ids `1..=total`, newest last, paged backwards by offset.
fn fetch_history(req: &BackwardRequest, total: u64) -> BackwardPage<Message> {
    let end = total.saturating_sub(req.offset as u64);
    let start = end.saturating_sub(req.limit as u64);
    let rows = (start + 1..=end).map(message).collect();
    BackwardPage::new(rows).with_cursor(format!("before-{}", start + 1))
}

fn fetch_newer(req: &ForwardRequest<u64>, total: u64) -> ForwardPage<Message, u64> {
    let since = req.since.unwrap_or(0);
    let rows = (since + 1..=total).take(req.limit).map(message).collect();
    ForwardPage::new(rows)
}

fn print(window: &Window, label: &str) {
    println!("-- {label} (offset {}) --", window.offset);
    for line in window.lines.borrow().iter() {
        println!("{line}");
    }
}

fn main() {
    let lines: Lines = Rc::default();
    let options = ListOptions::new(|m: &Message| m.id)
        .with_group_by(GroupBy::new(|m: &Message| m.day.to_string()));
    let list = ListReconciler::new(
        options,
        Transcript {
            lines: Rc::clone(&lines),
        },
    );
    let pagination = PaginationOptions::new()
        .with_limit(10)
        .with_scroll_direction(ScrollDirection::Up);
    let mut chat = match PaginationController::new(list, pagination) {
        Ok(chat) => chat,
        Err(err) => {
            eprintln!("invalid options: {err}");
            return;
        }
    };
    let mut window = Window {
        lines,
        offset: 0,
        height: 100,
    };
    let mut total = 25;

    if let Some(req) = chat.start() {
        let page = fetch_history(&req, total);
        chat.complete_older(req, Some(page), &mut window);
    }
    print(&window, "latest page, scrolled to bottom");

    // The user scrolls to the top: the older page lands above without moving the view.
    window.scroll_to(0);
    while let Some(req) = chat.on_scroll(window.metrics()) {
        let page = fetch_history(&req, total);
        chat.complete_older(req, Some(page), &mut window);
        window.scroll_to(0);
    }
    print(&window, "full history");

    // Poll once a minute; simulate three minutes with two new messages arriving.
    let mut scheduler = Scheduler::default();
    scheduler.start(0);
    for minute in 1..=3u64 {
        if minute == 2 {
            total += 2;
        }
        if scheduler.tick(minute * 60_000) {
            if let Some(req) = chat.fetch_new(true) {
                let page = fetch_newer(&req, total);
                chat.complete_newer(req, Some(page), &mut window);
            }
        }
    }
    print(&window, "after polling");
}

use goban_grid::{GridCache, MAX_SPAN};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

struct Capture(Mutex<Vec<String>>);

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if record.target().starts_with("goban_grid") {
            self.0.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

// Single test in this binary: the logger is process-wide.
#[test]
fn every_materialized_grid_is_logged_once() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let cache = GridCache::new();
    cache.get(9).unwrap();
    cache.get(9).unwrap();
    cache.warm_all();

    let records = CAPTURE.0.lock().unwrap().clone();
    for span in 1..=MAX_SPAN {
        let line = format!("built grid for span {span} ({} cells)", span * span);
        let hits = records.iter().filter(|r| **r == line).count();
        assert_eq!(hits, 1, "span {span}: {records:?}");
    }
}

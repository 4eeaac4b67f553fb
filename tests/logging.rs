//! Log levels of library events, captured with a recording layer.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::sync::{Arc, Mutex};

use asciigol::config;
use asciigol::{Engine, Grid};
use tempfile::TempDir;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

/// Records the level and target of every event.
#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        self.events
            .lock()
            .unwrap()
            .push((*meta.level(), meta.target().to_string()));
    }
}

fn capture(f: impl FnOnce()) -> Vec<(Level, String)> {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    tracing::subscriber::with_default(subscriber, f);
    let events = recorder.events.lock().unwrap().clone();
    events
}

#[test]
fn test_rejected_file_logs_below_warn() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "asciigol\n2,1\n1#\n").unwrap();

    let events = capture(|| {
        assert!(config::load(&path).is_err());
    });

    assert!(
        events.iter().all(|(level, _)| *level > Level::WARN),
        "{events:?}"
    );
    assert!(events
        .iter()
        .any(|(level, target)| *level == Level::DEBUG && target == "asciigol::config"));
}

#[test]
fn test_generations_log_at_debug() {
    let events = capture(|| {
        let mut engine = Engine::new(Grid::filled(3, 3, true).unwrap(), true);
        engine.step();
        engine.step();
    });

    let steps: Vec<_> = events
        .iter()
        .filter(|(_, target)| target == "asciigol::engine")
        .collect();
    assert_eq!(steps.len(), 2);
    assert!(steps.iter().all(|(level, _)| *level == Level::DEBUG));
}

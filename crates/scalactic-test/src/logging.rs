//! Logging setup for tests and benchmarks
//!
//! The library crates only emit `tracing` events; this installs a `fmt`
//! subscriber that honors `RUST_LOG`, falling back to `default_filter`.

use tracing_subscriber::EnvFilter;

/// Install a global test-friendly subscriber.
///
/// Returns `false` when a global subscriber was already installed, so it is
/// safe to call from every test.
pub fn init_logging(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use scalactic_core::{DefaultEquality, EquaSet, FastEquaSet};
    use scalactic_lazy::{LazySeq, LazyView};
    use scalactic_prettify::{Prettifier, PrettifierConfig};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer};
    use tracing_subscriber::prelude::*;

    struct LevelRecorder {
        events: Arc<Mutex<Vec<(Level, String)>>>,
    }

    impl<S: Subscriber> Layer<S> for LevelRecorder {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let meta = event.metadata();
            if let Ok(mut events) = self.events.lock() {
                events.push((*meta.level(), meta.target().to_string()));
            }
        }
    }

    fn record<F: FnOnce()>(f: F) -> Vec<(Level, String)> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(LevelRecorder {
            events: Arc::clone(&events),
        });
        tracing::subscriber::with_default(subscriber, f);
        let recorded = events.lock().map(|e| e.clone()).unwrap_or_default();
        recorded
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging("debug");
        assert!(!init_logging("debug"));
    }

    #[test]
    fn test_materialization_emits_trace() {
        let events = record(|| {
            LazySeq::from_vec(vec![1, 2]).map(|n| n + 1).to_list();
        });
        assert!(events
            .iter()
            .any(|(level, target)| *level == Level::TRACE && target.starts_with("scalactic_lazy")));
    }

    #[test]
    fn test_building_equa_set_emits_debug() {
        let events = record(|| {
            FastEquaSet::from_elements(DefaultEquality, vec![1, 1, 2]);
        });
        assert!(events
            .iter()
            .any(|(level, target)| *level == Level::DEBUG && target.starts_with("scalactic_core")));
    }

    #[test]
    fn test_depth_bound_warns_once() {
        let events = record(|| {
            let p = Prettifier::new(PrettifierConfig::default().with_max_depth(1));
            p.apply(&vec![vec![1], vec![2]]);
        });
        let warnings: Vec<_> = events
            .iter()
            .filter(|(level, _)| *level == Level::WARN)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].1.starts_with("scalactic_prettify"));
    }
}

//! Selection Event Port
//!
//! Observable interface for cascade sessions and menu bar aggregation.
//! Enables JSON event streams for scripting and recording in tests.

use crate::domain::entities::NodeSnapshot;

/// Event emitted while a selection is being made
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// A cascade session computed its initial level lists
    Initialized {
        root: NodeSnapshot,
        level_count: usize,
        checked: Vec<NodeSnapshot>,
    },

    /// A branch node was picked and deeper levels were recomputed
    Browsed {
        level: usize,
        position: usize,
        node: NodeSnapshot,
        /// Sticky position restored on each refreshed level
        restored: Vec<Option<usize>>,
    },

    /// A leaf was picked and became the single checked leaf
    Finalized {
        level: usize,
        position: usize,
        path: Vec<NodeSnapshot>,
    },

    /// A pick referred to no visible entry, or could not be applied
    PickIgnored { level: usize, position: usize },

    /// A group was refused by the menu bar
    GroupRejected { root: String, reason: String },

    /// Selections of every group were aggregated
    Collected {
        group_count: usize,
        invoked_index: Option<usize>,
    },
}

/// Trait for receiving selection events
///
/// Implementations can be:
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
pub trait SelectionEventSink: Send + Sync {
    /// Handle a selection event
    fn on_event(&self, event: SelectionEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SelectionEventSink for NoopEventSink {
    fn on_event(&self, _event: SelectionEvent) {}
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingEventSink;
    use super::*;

    #[test]
    fn recording_sink_captures_events() {
        let (sink, events) = RecordingEventSink::new();

        sink.on_event(SelectionEvent::PickIgnored {
            level: 0,
            position: 9,
        });
        sink.on_event(SelectionEvent::Collected {
            group_count: 2,
            invoked_index: Some(1),
        });

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[1],
            SelectionEvent::Collected {
                invoked_index: Some(1),
                ..
            }
        ));
    }

    #[test]
    fn noop_sink_accepts_events() {
        NoopEventSink.on_event(SelectionEvent::PickIgnored {
            level: 1,
            position: 1,
        });
    }
}

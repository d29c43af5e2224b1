//! JSON Event Sink
//!
//! Outputs selection events as NDJSON for scripting.

use crate::domain::ports::{SelectionEvent, SelectionEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl SelectionEventSink for JsonEventSink {
    fn on_event(&self, event: SelectionEvent) {
        let json = match event {
            SelectionEvent::Initialized {
                root,
                level_count,
                checked,
            } => serde_json::json!({
                "event": "initialized",
                "root": root,
                "level_count": level_count,
                "checked": checked,
            }),

            SelectionEvent::Browsed {
                level,
                position,
                node,
                restored,
            } => serde_json::json!({
                "event": "browsed",
                "level": level,
                "position": position,
                "node": node,
                "restored": restored,
            }),

            SelectionEvent::Finalized {
                level,
                position,
                path,
            } => serde_json::json!({
                "event": "finalized",
                "level": level,
                "position": position,
                "path": path,
            }),

            SelectionEvent::PickIgnored { level, position } => serde_json::json!({
                "event": "pick_ignored",
                "level": level,
                "position": position,
            }),

            SelectionEvent::GroupRejected { root, reason } => serde_json::json!({
                "event": "group_rejected",
                "root": root,
                "reason": reason,
            }),

            SelectionEvent::Collected {
                group_count,
                invoked_index,
            } => serde_json::json!({
                "event": "collected",
                "group_count": group_count,
                "invoked_index": invoked_index.map_or(-1, |i| i as i64),
            }),
        };

        self.write_event(json);
    }
}

//! Thread id collapsing.
//!
//! Rewrites every event's `tid` so the viewer shows two rows: one for
//! `...WaitForEvent` events and one for everything else.

use crate::parser::schema::{event_name, event_tid, TraceEvent};
use crate::utils::config::{DEFAULT_THREAD_ID, TID_FIELD, WAIT_EVENT_SUFFIX, WAIT_THREAD_ID};
use crate::utils::error::CollapseError;
use log::debug;
use serde_json::Value;

/// Row an event is assigned to after collapsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadBucket {
    /// Any event that is not a wait
    Default,
    /// Events named `*WaitForEvent`
    Wait,
}

impl ThreadBucket {
    /// Thread id written into collapsed events
    pub fn thread_id(self) -> u64 {
        match self {
            ThreadBucket::Default => DEFAULT_THREAD_ID,
            ThreadBucket::Wait => WAIT_THREAD_ID,
        }
    }
}

/// Classify an event by name
pub fn classify_event_name(name: &str) -> ThreadBucket {
    if name.ends_with(WAIT_EVENT_SUFFIX) {
        ThreadBucket::Wait
    } else {
        ThreadBucket::Default
    }
}

/// Overwrite the `tid` of every event with its bucket's thread id
///
/// **Public** - applied to the fully merged sequence
///
/// All events are checked before any is modified, so on error the
/// sequence is left untouched. No field other than `tid` changes.
///
/// # Errors
/// * `CollapseError::NotAnObject` - an event is not a JSON object
/// * `CollapseError::MissingName` - an event has no string `name`
pub fn collapse_threads(events: &mut [TraceEvent]) -> Result<(), CollapseError> {
    let buckets = events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            if !event.is_object() {
                return Err(CollapseError::NotAnObject { index });
            }
            event_name(event)
                .map(classify_event_name)
                .ok_or(CollapseError::MissingName { index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut waits = 0usize;
    let mut rewritten = 0usize;
    for (event, bucket) in events.iter_mut().zip(buckets) {
        let tid = Value::from(bucket.thread_id());
        if bucket == ThreadBucket::Wait {
            waits += 1;
        }
        if event_tid(event) != Some(&tid) {
            rewritten += 1;
        }
        if let Value::Object(fields) = event {
            fields.insert(TID_FIELD.to_string(), tid);
        }
    }

    debug!(
        "Collapsed {} events onto 2 threads ({} waits, {} tids rewritten)",
        events.len(),
        waits,
        rewritten
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_event_name() {
        assert_eq!(classify_event_name("ns.WaitForEvent"), ThreadBucket::Wait);
        assert_eq!(classify_event_name("WaitForEvent"), ThreadBucket::Wait);
        assert_eq!(classify_event_name("WaitForEvents"), ThreadBucket::Default);
        assert_eq!(classify_event_name("waitforevent"), ThreadBucket::Default);
        assert_eq!(classify_event_name(""), ThreadBucket::Default);
    }

    #[test]
    fn test_collapse_ignores_original_tid() {
        let mut events = vec![
            json!({"tid": 99, "name": "myevent"}),
            json!({"tid": 1, "name": "ns.WaitForEvent"}),
            json!({"name": "no tid"}),
        ];

        collapse_threads(&mut events).unwrap();

        assert_eq!(events[0]["tid"], json!(1));
        assert_eq!(events[1]["tid"], json!(2));
        assert_eq!(events[2], json!({"name": "no tid", "tid": 1}));
    }

    #[test]
    fn test_collapse_keeps_other_fields() {
        let mut events = vec![json!({"ph": "X", "tid": 5, "name": "a", "args": {"k": [1]}})];
        collapse_threads(&mut events).unwrap();
        assert_eq!(
            events[0],
            json!({"ph": "X", "tid": 1, "name": "a", "args": {"k": [1]}})
        );
    }

    #[test]
    fn test_collapse_missing_name_leaves_events_untouched() {
        let mut events = vec![json!({"tid": 5, "name": "a"}), json!({"tid": 6})];
        let before = events.clone();

        let err = collapse_threads(&mut events).unwrap_err();

        assert_eq!(err, CollapseError::MissingName { index: 1 });
        assert_eq!(events, before);
    }

    #[test]
    fn test_collapse_rejects_non_string_name_and_non_objects() {
        let mut events = vec![json!({"name": 12})];
        assert_eq!(
            collapse_threads(&mut events),
            Err(CollapseError::MissingName { index: 0 })
        );

        let mut events = vec![json!({"name": "a"}), json!([1, 2])];
        assert_eq!(
            collapse_threads(&mut events),
            Err(CollapseError::NotAnObject { index: 1 })
        );
    }

    #[test]
    fn test_collapse_empty() {
        let mut events: Vec<TraceEvent> = Vec::new();
        assert!(collapse_threads(&mut events).is_ok());
    }
}

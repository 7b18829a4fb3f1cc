//! Trace event representation.
//!
//! Events are kept as raw JSON values. No schema is enforced: the only
//! fields ever inspected are `name` and `tid`, and only when collapsing.

use crate::utils::config::{NAME_FIELD, TID_FIELD};
use serde_json::Value;

/// One recorded event, exactly as parsed from its input line
pub type TraceEvent = Value;

/// Returns the event's `name` if it is an object with a string name
pub fn event_name(event: &TraceEvent) -> Option<&str> {
    event.get(NAME_FIELD).and_then(Value::as_str)
}

/// Returns the event's `tid` if present
pub fn event_tid(event: &TraceEvent) -> Option<&Value> {
    event.get(TID_FIELD)
}

//! Configuration and constants for the CLI.

/// Field holding the event name in the trace-event format
pub const NAME_FIELD: &str = "name";

/// Field holding the thread identifier in the trace-event format
pub const TID_FIELD: &str = "tid";

/// Events whose name ends with this suffix are grouped on the wait thread
pub const WAIT_EVENT_SUFFIX: &str = "WaitForEvent";

// Thread ids used when collapsing. The viewer draws one row per tid,
// so every event lands on one of these two rows.
pub const DEFAULT_THREAD_ID: u64 = 1;
pub const WAIT_THREAD_ID: u64 = 2;

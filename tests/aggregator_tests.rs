use pretty_assertions::assert_eq;
use serde_json::json;
use trace_merge::aggregator::{classify_event_name, collapse_threads, ThreadBucket};
use trace_merge::parser::{filter_json_lines, TraceEvent};

fn sample_events() -> Vec<TraceEvent> {
    vec![
        json!({"ph": "B", "tid": 4, "name": "Debugger.Attach"}),
        json!({"ph": "E", "tid": 4, "name": "Listener.WaitForEvent"}),
        json!({"ph": "X", "tid": 9, "name": "WaitForEventually"}),
    ]
}

#[test]
fn test_collapse_assigns_buckets() {
    let mut events = sample_events();
    collapse_threads(&mut events).unwrap();

    let tids: Vec<_> = events.iter().map(|e| e["tid"].clone()).collect();
    assert_eq!(tids, vec![json!(1), json!(2), json!(1)]);
}

#[test]
fn test_collapse_is_idempotent() {
    let mut once = sample_events();
    collapse_threads(&mut once).unwrap();

    let mut twice = once.clone();
    collapse_threads(&mut twice).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_bucket_thread_ids() {
    assert_eq!(ThreadBucket::Default.thread_id(), 1);
    assert_eq!(ThreadBucket::Wait.thread_id(), 2);
    assert_eq!(
        classify_event_name("SbListener.WaitForEvent"),
        ThreadBucket::Wait
    );
}

#[test]
fn test_collapse_keeps_key_order() {
    let mut events = filter_json_lines(["{\"tid\":3,\"name\":\"ns.WaitForEvent\",\"ts\":10}"]);
    collapse_threads(&mut events).unwrap();

    assert_eq!(
        serde_json::to_string(&events[0]).unwrap(),
        "{\"tid\":2,\"name\":\"ns.WaitForEvent\",\"ts\":10}"
    );
}

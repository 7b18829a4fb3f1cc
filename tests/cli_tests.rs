use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn trace_merge() -> Command {
    Command::new(env!("CARGO_BIN_EXE_trace-merge"))
}

#[test]
fn test_cli_collapses_and_prints_array() {
    let mut a = NamedTempFile::new().unwrap();
    writeln!(a, "{{\"tid\":1,\"name\":\"myevent\"}}").unwrap();
    writeln!(a, "not json").unwrap();
    let mut b = NamedTempFile::new().unwrap();
    writeln!(b, "{{\"tid\":3,\"name\":\"ns.WaitForEvent\"}}").unwrap();

    let output = trace_merge()
        .arg("--collapse-threads")
        .arg(a.path())
        .arg(b.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "[{\"tid\":1,\"name\":\"myevent\"},{\"tid\":2,\"name\":\"ns.WaitForEvent\"}]\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_cli_missing_file_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();

    let output = trace_merge()
        .arg(dir.path().join("missing.log"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.log"));
}

#[test]
fn test_cli_requires_a_file() {
    let output = trace_merge().output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

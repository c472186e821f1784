//! End-to-end tests of the demonstration executables
//!
//! Each test spawns a built binary and checks its stdout and exit status.

use std::process::{Command, Output};

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "off")
        .env_remove("DEBUG_DEMOS_FAULT_STRATEGY")
        .env_remove("DEBUG_DEMOS_FAULT_KIND")
        .env_remove("DEBUG_DEMOS_BYTE_ORDER")
        .output()
        .expect("failed to spawn binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

const CRASH_PREFIX: &str = "Attempting to process data...\n\
                            Sum: 150\n\
                            First processing complete.\n\
                            \n\
                            Attempting second processing...\n";

#[test]
fn test_demo0_prints_sum() {
    let output = run(env!("CARGO_BIN_EXE_demo0"), &[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Sum: 15\n");
}

#[test]
fn test_demo1_prints_nested_sum() {
    let output = run(env!("CARGO_BIN_EXE_demo1"), &[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "The sum of 10, 20, and 15 is: 45\n");
}

#[test]
fn test_demo2_prints_addresses_and_values() {
    let output = run(env!("CARGO_BIN_EXE_demo2"), &[]);
    let text = stdout(&output);

    assert!(output.status.success());
    assert!(text.starts_with("Address of numbers[0]: 0x"));
    assert!(text.contains("\nValues:\nbig_number = 0xDEADBEEF\nsmall_number = 0xCAFE\n"));
    assert!(text.ends_with("greeting = \"Hello, GDB!\"\n"));
}

#[test]
fn test_demo3_terminates_abnormally_before_all_done() {
    let output = run(env!("CARGO_BIN_EXE_demo3"), &[]);
    let text = stdout(&output);

    assert!(!output.status.success());
    assert_eq!(text, CRASH_PREFIX);
    assert!(!text.contains("All done!"));
}

#[cfg(unix)]
#[test]
fn test_demo3_killed_by_signal() {
    use std::os::unix::process::ExitStatusExt;

    let output = run(env!("CARGO_BIN_EXE_demo3"), &[]);
    assert_eq!(output.status.code(), None);
    assert!(output.status.signal().is_some());
}

#[test]
fn test_fault_panic_kind_exits_nonzero() {
    let output = run(
        env!("CARGO_BIN_EXE_debug-demos"),
        &["fault", "--fault", "panic"],
    );

    assert!(!output.status.success());
    assert_eq!(stdout(&output), CRASH_PREFIX);
}

#[test]
fn test_fault_guarded_completes() {
    let output = run(
        env!("CARGO_BIN_EXE_debug-demos"),
        &["fault", "--strategy", "guarded"],
    );

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("{CRASH_PREFIX}Error: NULL data pointer\nAll done!\n")
    );
}

#[test]
fn test_fault_caller_checked_exits_with_one() {
    let output = run(
        env!("CARGO_BIN_EXE_debug-demos"),
        &["fault", "--strategy", "caller-checked"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        format!("{CRASH_PREFIX}Error: Failed to get data\n")
    );
}

#[test]
fn test_memory_json_big_endian() {
    let output = run(
        env!("CARGO_BIN_EXE_debug-demos"),
        &["memory", "--format", "json", "--byte-order", "big"],
    );
    let text = stdout(&output);

    assert!(output.status.success());
    assert!(text.contains("\"byte_order\": \"big\""));
    assert!(text.contains("\"0xde\""));
}

#[test]
fn test_invalid_strategy_rejected() {
    let output = run(
        env!("CARGO_BIN_EXE_debug-demos"),
        &["fault", "--strategy", "ignore"],
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("fault strategy"));
}

#[test]
fn test_script_plain_output() {
    let output = Command::new(env!("CARGO_BIN_EXE_debug-demos"))
        .args(["script", "demo3"])
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to spawn binary");
    let text = stdout(&output);

    assert!(output.status.success());
    assert!(text.starts_with("fault (demo3): "));
    assert!(text.contains("print bad_data"));
}

#[test]
fn test_demo3_logs_go_to_stderr_only() {
    let output = Command::new(env!("CARGO_BIN_EXE_demo3"))
        .env_remove("RUST_LOG")
        .env_remove("DEBUG_DEMOS_LOG_FORMAT")
        .output()
        .expect("failed to spawn binary");

    assert_eq!(stdout(&output), CRASH_PREFIX);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Processing without a presence check"));
}

#[test]
fn test_json_log_format_on_stderr() {
    let output = Command::new(env!("CARGO_BIN_EXE_demo3"))
        .env_remove("RUST_LOG")
        .env("DEBUG_DEMOS_LOG_FORMAT", "json")
        .output()
        .expect("failed to spawn binary");

    assert_eq!(stdout(&output), CRASH_PREFIX);

    let stderr = String::from_utf8_lossy(&output.stderr);
    let warning = stderr
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .find(|event| event["level"] == "WARN")
        .expect("no JSON WARN event on stderr");

    assert_eq!(warning["target"], "debug_demos_core::application::fault");
    assert_eq!(
        warning["fields"]["message"],
        "Processing without a presence check"
    );
}

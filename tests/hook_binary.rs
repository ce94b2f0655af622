//! Runs the built `cc-killgate` binary the way the host does: JSON on stdin,
//! decision on stdout, exit status checked. Each test gets its own `HOME` so
//! config and decision log stay inside a temp dir.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const DENY_INPUT: &str = r#"{"tool_name":"Bash","tool_input":{"command":"pkill -f bun"}}"#;
const ALLOW_INPUT: &str = r#"{"tool_name":"Bash","tool_input":{"command":"ls -la"}}"#;
const READ_INPUT: &str = r#"{"tool_name":"Read","tool_input":{"file_path":"/tmp/x"}}"#;

fn hook_command(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cc-killgate"));
    cmd.env("HOME", home)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

fn run_hook(home: &Path, input: &str) -> Output {
    let mut child = hook_command(home).spawn().expect("spawn cc-killgate");
    child
        .stdin
        .take()
        .expect("stdin pipe")
        .write_all(input.as_bytes())
        .expect("write hook input");
    child.wait_with_output().expect("wait for cc-killgate")
}

fn log_file(home: &Path) -> PathBuf {
    home.join(".local/share/cc-killgate/decisions.log")
}

fn write_user_config(home: &Path, toml: &str) {
    let dir = home.join(".config/cc-killgate");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), toml).unwrap();
}

#[test]
fn deny_prints_one_json_line() {
    let home = TempDir::new().unwrap();
    let output = run_hook(home.path(), DENY_INPUT);

    assert!(output.status.success(), "status: {:?}", output.status);
    let expected = cc_killgate::respond(DENY_INPUT)
        .unwrap()
        .to_json()
        .unwrap();
    assert_eq!(String::from_utf8(output.stdout).unwrap(), format!("{expected}\n"));
}

#[test]
fn allow_prints_nothing() {
    let home = TempDir::new().unwrap();
    let output = run_hook(home.path(), ALLOW_INPUT);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn garbage_stdin_prints_nothing() {
    let home = TempDir::new().unwrap();
    let output = run_hook(home.path(), "{\"tool_name\": \"Bash\", oops");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn non_bash_tool_prints_nothing() {
    let home = TempDir::new().unwrap();
    let output = run_hook(home.path(), READ_INPUT);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn closed_stdout_still_exits_zero() {
    let home = TempDir::new().unwrap();
    let mut child = hook_command(home.path()).spawn().expect("spawn cc-killgate");

    // Reader gone before the hook gets its input, so the write hits EPIPE.
    drop(child.stdout.take());
    child
        .stdin
        .take()
        .unwrap()
        .write_all(DENY_INPUT.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "status: {:?}", output.status);
    assert!(
        !String::from_utf8_lossy(&output.stderr).contains("panicked"),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn decisions_are_logged_by_default() {
    let home = TempDir::new().unwrap();
    run_hook(home.path(), DENY_INPUT);

    let log = std::fs::read_to_string(log_file(home.path())).unwrap();
    assert!(log.contains("deny\tpkill -f bun\tBlocked:"), "log: {log}");
}

#[test]
fn log_decisions_false_writes_no_log() {
    let home = TempDir::new().unwrap();
    write_user_config(home.path(), "[settings]\nlog_decisions = false\n");

    run_hook(home.path(), "not json");
    run_hook(home.path(), DENY_INPUT);

    assert!(!log_file(home.path()).exists());
}

#[test]
fn user_config_extends_process_names() {
    let home = TempDir::new().unwrap();
    write_user_config(home.path(), "[guard]\nprocess_names = [\"deno\"]\n");

    let output = run_hook(
        home.path(),
        r#"{"tool_name":"Bash","tool_input":{"command":"killall deno"}}"#,
    );
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["hookSpecificOutput"]["permissionDecision"], "deny");
}

#[test]
fn broken_user_config_falls_back_to_defaults() {
    let home = TempDir::new().unwrap();
    write_user_config(home.path(), "[guard\nprocess_names = ");

    let output = run_hook(home.path(), DENY_INPUT);
    assert!(output.status.success());
    assert!(!output.stdout.is_empty());
}

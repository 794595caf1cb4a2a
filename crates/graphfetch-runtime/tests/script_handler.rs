//! Integration tests for `ScriptHandler` against real shell scripts.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use graphfetch_core::ports::{InvocationError, TaskHandler};
use graphfetch_core::{BatchRunner, TaskId, TaskOutcome};
use graphfetch_runtime::ScriptHandler;

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn id(s: &str) -> TaskId {
    TaskId::new(s).unwrap()
}

#[tokio::test]
async fn success_captures_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(dir.path(), "ok.sh", r#"echo "fetched $1""#);

    let output = ScriptHandler::new(&script)
        .invoke(&id("cnr-2000"))
        .await
        .unwrap();

    assert!(output.success);
    assert_eq!(output.exit_code, Some(0));
    assert_eq!(output.stdout, "fetched cnr-2000\n");
    assert!(output.stderr.is_empty());
}

#[tokio::test]
async fn identifier_is_passed_verbatim_as_single_argument() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(dir.path(), "args.sh", r#"printf '%s|%s' "$#" "$1""#);

    let output = ScriptHandler::new(&script)
        .invoke(&id("uk-2007-05@100000"))
        .await
        .unwrap();

    assert_eq!(output.stdout, "1|uk-2007-05@100000");
}

#[tokio::test]
async fn non_zero_exit_captures_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(
        dir.path(),
        "fail.sh",
        r#"echo "no such dataset: $1" >&2
exit 4"#,
    );

    let output = ScriptHandler::new(&script)
        .invoke(&id("enron"))
        .await
        .unwrap();

    assert!(!output.success);
    assert_eq!(output.exit_code, Some(4));
    assert_eq!(output.stderr, "no such dataset: enron\n");

    let outcome = output.into_outcome();
    assert_eq!(
        outcome.diagnostic().as_deref(),
        Some("no such dataset: enron")
    );
}

#[tokio::test]
async fn missing_handler_is_invocation_fault() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("download_script.sh");

    let err = ScriptHandler::new(&missing)
        .invoke(&id("enron"))
        .await
        .unwrap_err();

    assert_eq!(err, InvocationError::NotFound { path: missing });
}

#[tokio::test]
async fn non_executable_handler_is_permission_denied() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("plain.sh");
    fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o644)).unwrap();

    let err = ScriptHandler::new(&script)
        .invoke(&id("enron"))
        .await
        .unwrap_err();

    assert!(
        matches!(err, InvocationError::PermissionDenied { .. }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn working_dir_is_applied() {
    let handler_dir = tempfile::tempdir().unwrap();
    let work_dir = tempfile::tempdir().unwrap();
    fs::write(work_dir.path().join("marker"), "").unwrap();
    let script = write_script(
        handler_dir.path(),
        "cwd.sh",
        r#"if [ -f marker ]; then echo here; else exit 1; fi"#,
    );

    let output = ScriptHandler::new(&script)
        .with_working_dir(work_dir.path())
        .invoke(&id("enron"))
        .await
        .unwrap();

    assert!(output.success, "stderr: {}", output.stderr);
    assert_eq!(output.stdout, "here\n");
}

#[tokio::test]
async fn batch_continues_past_failing_script() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("calls.log");
    let script = write_script(
        dir.path(),
        "download_script.sh",
        &format!(
            r#"echo "$1" >> "{}"
if [ "$1" = "b" ]; then
  echo "download of $1 failed" >&2
  exit 1
fi"#,
            log.display()
        ),
    );

    let runner = BatchRunner::new(Arc::new(ScriptHandler::new(&script)));
    let summary = runner.run(&[id("a"), id("b"), id("c")]).await;

    let calls = fs::read_to_string(&log).unwrap();
    assert_eq!(calls, "a\nb\nc\n");

    let failed: Vec<_> = summary.failures.iter().map(TaskId::as_str).collect();
    assert_eq!(failed, ["b"]);
    assert_eq!(
        summary.reports[1].outcome,
        TaskOutcome::HandlerFailed {
            exit_code: Some(1),
            stderr: "download of b failed\n".to_string(),
        }
    );
}

#[tokio::test]
async fn batch_with_missing_handler_fails_every_task() {
    let dir = tempfile::tempdir().unwrap();
    let runner = BatchRunner::new(Arc::new(ScriptHandler::new(
        dir.path().join("missing.sh"),
    )));

    let tasks = [id("a"), id("b")];
    let summary = runner.run(&tasks).await;

    let failed: Vec<_> = summary.failures.iter().cloned().collect();
    assert_eq!(failed, tasks);
    assert!(summary
        .reports
        .iter()
        .all(|r| matches!(r.outcome, TaskOutcome::InvocationFault { .. })));
}

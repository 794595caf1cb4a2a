//! External script handler.
//!
//! Runs `<handler> <identifier>` as a child process and captures its
//! output. The child inherits the environment; stdin is closed.

use std::io;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use graphfetch_core::ports::{HandlerOutput, InvocationError, TaskHandler};
use graphfetch_core::task::TaskId;
use tokio::process::Command;
use tracing::debug;

/// [`TaskHandler`] backed by an external executable.
#[derive(Debug, Clone)]
pub struct ScriptHandler {
    path: PathBuf,
    working_dir: Option<PathBuf>,
}

impl ScriptHandler {
    /// Create a handler that runs the executable at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            working_dir: None,
        }
    }

    /// Run the handler from `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    fn classify(&self, err: &io::Error) -> InvocationError {
        let path = self.path.clone();
        match err.kind() {
            io::ErrorKind::NotFound => InvocationError::NotFound { path },
            io::ErrorKind::PermissionDenied => InvocationError::PermissionDenied { path },
            _ => InvocationError::Spawn {
                path,
                message: err.to_string(),
            },
        }
    }
}

#[async_trait]
impl TaskHandler for ScriptHandler {
    async fn invoke(&self, task: &TaskId) -> Result<HandlerOutput, InvocationError> {
        let mut cmd = Command::new(&self.path);
        cmd.arg(task.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await.map_err(|e| self.classify(&e))?;

        debug!(
            %task,
            status = %output.status,
            "Handler exited"
        );

        Ok(HandlerOutput {
            exit_code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_are_classified() {
        let handler = ScriptHandler::new("./download_script.sh");

        let not_found = io::Error::from(io::ErrorKind::NotFound);
        assert!(matches!(
            handler.classify(&not_found),
            InvocationError::NotFound { .. }
        ));

        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert!(matches!(
            handler.classify(&denied),
            InvocationError::PermissionDenied { .. }
        ));

        let other = io::Error::other("exec format error");
        match handler.classify(&other) {
            InvocationError::Spawn { message, .. } => assert!(message.contains("exec format")),
            e => panic!("unexpected classification: {e:?}"),
        }
    }
}

//! Command execution.

use crate::runner::RunnerError;
use camino::Utf8PathBuf;
use std::fmt;
use std::future::Future;
use std::process::Stdio;
use tokio::process::Command;

/// A command to run: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name or path.
    pub program: String,
    /// Arguments, passed without shell interpretation.
    pub args: Vec<String>,
    /// Working directory.
    pub cwd: Utf8PathBuf,
}

impl Invocation {
    /// Creates an invocation with no arguments.
    pub fn new(program: impl Into<String>, cwd: impl Into<Utf8PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    /// Appends arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Exit status and captured output of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was killed by a signal.
    pub code: Option<i32>,
    /// Captured stdout.
    pub stdout: String,
    /// Captured stderr.
    pub stderr: String,
}

impl CommandOutput {
    /// Returns whether the command exited with code 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs commands to completion.
///
/// A non-zero exit is reported through [`CommandOutput::code`], not as an
/// error; only failing to start the process is an error here.
pub trait CommandExecutor: Send + Sync {
    /// Runs the invocation and waits for it to finish.
    fn execute(
        &self,
        invocation: &Invocation,
    ) -> impl Future<Output = Result<CommandOutput, RunnerError>> + Send;
}

/// Executor backed by `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioExecutor;

impl CommandExecutor for TokioExecutor {
    async fn execute(&self, invocation: &Invocation) -> Result<CommandOutput, RunnerError> {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| RunnerError::SpawnFailed {
                program: invocation.program.clone(),
                source,
            })?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_display() {
        let invocation =
            Invocation::new("yarn", "/project").args(["typechain", "--target", "web3-v1"]);
        assert_eq!(invocation.to_string(), "yarn typechain --target web3-v1");
    }

    #[test]
    fn test_output_success() {
        assert!(CommandOutput {
            code: Some(0),
            ..Default::default()
        }
        .success());
        assert!(!CommandOutput {
            code: Some(1),
            ..Default::default()
        }
        .success());
        assert!(!CommandOutput::default().success());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_tokio_executor_captures_output() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();

        let output = TokioExecutor
            .execute(&Invocation::new("sh", cwd).args(["-c", "echo out; echo err >&2; exit 3"]))
            .await
            .unwrap();

        assert_eq!(output.code, Some(3));
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
    }

    #[tokio::test]
    async fn test_tokio_executor_spawn_failure() {
        let err = TokioExecutor
            .execute(&Invocation::new("definitely-not-a-real-binary-7f3a", "."))
            .await
            .unwrap_err();

        assert!(matches!(err, RunnerError::SpawnFailed { .. }));
    }
}

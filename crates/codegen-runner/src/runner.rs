//! Codegen and install runner.

use crate::exec::{CommandExecutor, CommandOutput, Invocation, TokioExecutor};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Binary that generates typed bindings from ABI files.
pub const TYPECHAIN_BIN: &str = "typechain";

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Detect package manager from lockfiles in the workspace.
    /// Walks up the directory tree to support monorepo setups where lockfiles
    /// are at the root rather than in nested packages.
    pub fn detect_from_workspace(workspace_root: &Utf8Path) -> Option<Self> {
        let mut current = Some(workspace_root);

        while let Some(dir) = current {
            if dir.join("pnpm-lock.yaml").exists() {
                return Some(Self::Pnpm);
            }
            if dir.join("bun.lockb").exists() || dir.join("bun.lock").exists() {
                return Some(Self::Bun);
            }
            if dir.join("yarn.lock").exists() {
                return Some(Self::Yarn);
            }
            if dir.join("package-lock.json").exists() {
                return Some(Self::Npm);
            }

            current = dir.parent();
        }

        None
    }

    /// Detect any available package manager from PATH.
    pub fn detect_from_path() -> Option<Self> {
        [Self::Yarn, Self::Npm, Self::Pnpm, Self::Bun]
            .into_iter()
            .find(|pm| which::which(pm.command_name()).is_ok())
    }

    /// Returns the command name for this package manager.
    pub fn command_name(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Returns the arguments that install a package's declared dependencies.
    pub fn install_args(&self) -> Vec<String> {
        vec!["install".to_string()]
    }

    /// Returns the arguments that run a binary from the local dependencies.
    pub fn exec_args(&self, bin: &str, args: &[String]) -> Vec<String> {
        let mut out = match self {
            Self::Npm => vec!["exec".to_string(), "--".to_string()],
            Self::Pnpm => vec!["exec".to_string()],
            Self::Yarn => Vec::new(),
            Self::Bun => vec!["run".to_string()],
        };
        out.push(bin.to_string());
        out.extend(args.iter().cloned());
        out
    }

    /// Resolves the package manager binary on PATH.
    pub fn resolve_program(&self) -> Result<String, RunnerError> {
        let path = which::which(self.command_name())
            .map_err(|_| RunnerError::PackageManagerNotFound(self.command_name().to_string()))?;

        Ok(path.to_string_lossy().into_owned())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command_name())
    }
}

impl FromStr for PackageManager {
    type Err = RunnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            "yarn" => Ok(Self::Yarn),
            "bun" => Ok(Self::Bun),
            _ => Err(RunnerError::UnknownPackageManager(s.to_string())),
        }
    }
}

/// Error types for the codegen runner.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Failed to spawn the process.
    #[error("failed to spawn {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with a non-zero code.
    #[error("`{command}` exited with code {code}: {stderr}")]
    ProcessFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    /// Package manager not available.
    #[error("package manager not found: {0}")]
    PackageManagerNotFound(String),

    /// Unrecognised package manager name.
    #[error("unknown package manager: {0} (expected npm, pnpm, yarn or bun)")]
    UnknownPackageManager(String),
}

/// Runs binding generation and dependency installs through a package manager.
#[derive(Debug, Clone)]
pub struct CodegenRunner<E = TokioExecutor> {
    executor: E,
    package_manager: PackageManager,
    program: String,
    project_root: Utf8PathBuf,
}

impl CodegenRunner<TokioExecutor> {
    /// Creates a runner that spawns real processes.
    pub fn new(
        package_manager: PackageManager,
        project_root: Utf8PathBuf,
    ) -> Result<Self, RunnerError> {
        let program = package_manager.resolve_program()?;
        Ok(Self::with_executor(
            TokioExecutor,
            package_manager,
            program,
            project_root,
        ))
    }
}

impl<E: CommandExecutor> CodegenRunner<E> {
    /// Creates a runner on top of a custom executor.
    pub fn with_executor(
        executor: E,
        package_manager: PackageManager,
        program: impl Into<String>,
        project_root: Utf8PathBuf,
    ) -> Self {
        Self {
            executor,
            package_manager,
            program: program.into(),
            project_root,
        }
    }

    /// Returns the package manager used for invocations.
    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    /// Returns the underlying executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Generates bindings for `target` from the ABI files matching `abi_glob`.
    ///
    /// `out_dir` and `abi_glob` are interpreted relative to the project root.
    /// The glob is passed through unexpanded; typechain expands it itself.
    pub async fn generate_bindings(
        &self,
        target: &str,
        out_dir: &Utf8Path,
        abi_glob: &str,
    ) -> Result<CommandOutput, RunnerError> {
        let typechain_args = [
            "--target".to_string(),
            target.to_string(),
            "--out-dir".to_string(),
            out_dir.to_string(),
            abi_glob.to_string(),
        ];
        let invocation = Invocation::new(self.program.clone(), self.project_root.clone())
            .args(self.package_manager.exec_args(TYPECHAIN_BIN, &typechain_args));

        self.run(invocation).await
    }

    /// Installs the dependencies declared by the package in `package_dir`.
    pub async fn install_dependencies(
        &self,
        package_dir: &Utf8Path,
    ) -> Result<CommandOutput, RunnerError> {
        let cwd = if package_dir.is_absolute() {
            package_dir.to_path_buf()
        } else {
            self.project_root.join(package_dir)
        };
        let invocation =
            Invocation::new(self.program.clone(), cwd).args(self.package_manager.install_args());

        self.run(invocation).await
    }

    async fn run(&self, invocation: Invocation) -> Result<CommandOutput, RunnerError> {
        log::debug!("running `{}` in {}", invocation, invocation.cwd);
        let output = self.executor.execute(&invocation).await?;

        if !output.success() {
            return Err(RunnerError::ProcessFailed {
                command: invocation.to_string(),
                code: output.code.unwrap_or(-1),
                stderr: output.stderr,
            });
        }

        Ok(output)
    }
}

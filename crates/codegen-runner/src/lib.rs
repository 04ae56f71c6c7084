//! Package manager runner for ABI binding generation.
//!
//! This crate keeps every external process of an export run behind the
//! [`CommandExecutor`] trait: binding generation through `typechain` and the
//! final dependency install of the exported package. Commands are resolved
//! through the project's package manager, detected from lockfiles or `PATH`.
//!
//! # Example
//!
//! ```ignore
//! use camino::{Utf8Path, Utf8PathBuf};
//! use codegen_runner::{CodegenRunner, PackageManager};
//!
//! #[tokio::main]
//! async fn main() {
//!     let root = Utf8PathBuf::from("/path/to/project");
//!     let runner = CodegenRunner::new(PackageManager::Yarn, root).unwrap();
//!
//!     runner
//!         .generate_bindings("ethers-v6", Utf8Path::new("npm/ethers-v6"), "npm/abi/*.json")
//!         .await
//!         .unwrap();
//!     runner.install_dependencies(Utf8Path::new("npm")).await.unwrap();
//! }
//! ```

mod exec;
mod runner;

pub use exec::{CommandExecutor, CommandOutput, Invocation, TokioExecutor};
pub use runner::{CodegenRunner, PackageManager, RunnerError, TYPECHAIN_BIN};

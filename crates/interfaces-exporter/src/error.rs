//! Export errors.

use camino::Utf8PathBuf;
use codegen_runner::RunnerError;
use import_remapper::RemapError;
use miette::Diagnostic;
use thiserror::Error;

/// Errors that abort an export run.
#[derive(Debug, Error, Diagnostic)]
pub enum ExportError {
    /// A filesystem operation failed.
    #[error("failed to {action} {path}: {source}")]
    #[diagnostic(code(interfaces_exporter::io))]
    Io {
        action: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A path could not be represented as UTF-8.
    #[error("path is not valid UTF-8: {0}")]
    #[diagnostic(code(interfaces_exporter::non_utf8_path))]
    NonUtf8Path(std::path::PathBuf),

    /// The configuration file is not valid.
    #[error("invalid configuration in {path}: {source}")]
    #[diagnostic(code(interfaces_exporter::config))]
    InvalidConfig {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The project manifest is not valid.
    #[error("invalid package manifest {path}: {source}")]
    #[diagnostic(code(interfaces_exporter::manifest))]
    InvalidManifest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The exported manifest could not be serialized.
    #[error("failed to serialize package manifest: {0}")]
    #[diagnostic(code(interfaces_exporter::manifest))]
    ManifestSerialize(#[source] serde_json::Error),

    /// Invalid glob pattern.
    #[error("invalid glob pattern `{pattern}`: {message}")]
    #[diagnostic(code(interfaces_exporter::glob))]
    InvalidGlob { pattern: String, message: String },

    /// Walking the interfaces directory failed.
    #[error("failed to enumerate interfaces: {0}")]
    #[diagnostic(code(interfaces_exporter::walk))]
    Walk(#[from] walkdir::Error),

    /// The export directory would wipe the project.
    #[error("export directory {export_dir} contains the workspace {workspace}")]
    #[diagnostic(
        code(interfaces_exporter::export_dir),
        help("choose an export directory inside the project, e.g. `npm`")
    )]
    UnsafeExportDir {
        export_dir: Utf8PathBuf,
        workspace: Utf8PathBuf,
    },

    /// An interface file has no usable name.
    #[error("cannot derive an interface name from {0}")]
    #[diagnostic(code(interfaces_exporter::interface_name))]
    UnnamedInterface(Utf8PathBuf),

    /// The compiled artifact of an interface is missing.
    #[error("missing compiled artifact for {interface}: {path}")]
    #[diagnostic(
        code(interfaces_exporter::missing_artifact),
        help("compile the project before exporting, e.g. `forge build`")
    )]
    MissingArtifact { interface: String, path: Utf8PathBuf },

    /// No package manager could be determined.
    #[error("no package manager found for codegen and install")]
    #[diagnostic(
        code(interfaces_exporter::package_manager),
        help("install yarn, npm, pnpm or bun, or pass --skip-codegen --skip-install")
    )]
    NoPackageManager,

    /// Loading remappings failed.
    #[error(transparent)]
    #[diagnostic(code(interfaces_exporter::remappings))]
    Remap(#[from] RemapError),

    /// An external command failed.
    #[error(transparent)]
    #[diagnostic(code(interfaces_exporter::command))]
    Runner(#[from] RunnerError),
}

impl ExportError {
    /// Wraps an I/O error with the failed action and path.
    pub fn io(
        action: &'static str,
        path: impl Into<Utf8PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io {
            action,
            path,
            source,
        }
    }
}

//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use codegen_runner::PackageManager;

/// Packages Solidity interfaces for distribution.
#[derive(Debug, Parser)]
#[command(name = "interfaces-exporter")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Project root containing package.json and remappings
    #[arg(long, default_value = ".")]
    pub workspace: Utf8PathBuf,

    /// Path to the exporter configuration (JSON)
    #[arg(long)]
    pub config: Option<Utf8PathBuf>,

    /// Path segment that roots the interface tree
    #[arg(long)]
    pub anchor: Option<String>,

    /// Directory the package is exported to
    #[arg(long = "export-dir")]
    pub export_dir: Option<Utf8PathBuf>,

    /// Binding targets to generate (repeatable, replaces configured targets)
    #[arg(long = "target")]
    pub targets: Vec<String>,

    /// Package manager used for codegen and install
    #[arg(long = "package-manager")]
    pub package_manager: Option<PackageManager>,

    /// Skip typed binding generation
    #[arg(long = "skip-codegen")]
    pub skip_codegen: bool,

    /// Skip installing the exported package's dependencies
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Summary output format
    #[arg(long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output
    Json,
}

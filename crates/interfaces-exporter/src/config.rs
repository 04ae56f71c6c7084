//! Configuration loading.

use crate::cli::Args;
use crate::error::ExportError;
use camino::{Utf8Path, Utf8PathBuf};
use codegen_runner::PackageManager;
use import_remapper::{TransformOptions, DEFAULT_ANCHOR, DEFAULT_MODULES_MARKER};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;

/// Configuration file looked up in the workspace when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "interfaces-exporter.json";

/// Export configuration.
///
/// Relative paths are resolved against the workspace.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Name of the exported package.
    pub package_name: String,

    /// Description of the exported package.
    pub package_description: String,

    /// Compiler output directory holding `<File>.sol/<Name>.json` artifacts.
    pub out_dir: Utf8PathBuf,

    /// Directory the package is assembled in. Emptied on every run.
    pub export_dir: Utf8PathBuf,

    /// Root of the interface tree.
    pub interfaces_dir: Utf8PathBuf,

    /// Glob selecting interface files, relative to `interfaces_dir`.
    pub interfaces_glob: String,

    /// Remappings file.
    pub remappings: Utf8PathBuf,

    /// Readme copied to `README.md` in the package.
    pub readme: Utf8PathBuf,

    /// License copied to `LICENSE` in the package.
    pub license: Utf8PathBuf,

    /// Path segment that roots the interface tree.
    pub anchor: String,

    /// Package manager directory collapsed into bare specifiers.
    pub modules_marker: String,

    /// Dependencies added on top of the project's own.
    pub extra_dependencies: IndexMap<String, String>,

    /// Binding targets passed to typechain.
    pub targets: Vec<String>,

    /// Package manager; detected when unset.
    pub package_manager: Option<PackageManager>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            package_name: "opoo-core".to_string(),
            package_description: "Optimistic Oracle Interfaces and needed integration files"
                .to_string(),
            out_dir: Utf8PathBuf::from("out"),
            export_dir: Utf8PathBuf::from("npm"),
            interfaces_dir: Utf8PathBuf::from("solidity/interfaces"),
            interfaces_glob: "**/*.sol".to_string(),
            remappings: Utf8PathBuf::from("remappings.txt"),
            readme: Utf8PathBuf::from("interfaces-readme.md"),
            license: Utf8PathBuf::from("LICENSE"),
            anchor: DEFAULT_ANCHOR.to_string(),
            modules_marker: DEFAULT_MODULES_MARKER.to_string(),
            extra_dependencies: IndexMap::from([
                ("@ethersproject/abi".to_string(), "5.7.0".to_string()),
                ("@ethersproject/providers".to_string(), "5.7.2".to_string()),
                ("bn.js".to_string(), "5.2.1".to_string()),
                ("ethers".to_string(), "6.0.3".to_string()),
                ("web3-core".to_string(), "1.9.0".to_string()),
            ]),
            targets: vec!["web3-v1".to_string(), "ethers-v6".to_string()],
            package_manager: None,
        }
    }
}

impl ExportConfig {
    /// Loads configuration from a JSON file.
    pub fn load(path: &Utf8Path) -> Result<Self, ExportError> {
        let content = fs::read_to_string(path).map_err(ExportError::io("read", path))?;

        serde_json::from_str(&content).map_err(|source| ExportError::InvalidConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the explicit config, else `interfaces-exporter.json` in the
    /// workspace, else the defaults. CLI flags are applied last.
    pub fn resolve(workspace: &Utf8Path, args: &Args) -> Result<Self, ExportError> {
        let mut config = match &args.config {
            Some(path) => Self::load(&workspace.join(path))?,
            None => {
                let path = workspace.join(CONFIG_FILE_NAME);
                if path.exists() {
                    Self::load(&path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_args(args);
        Ok(config)
    }

    /// Applies CLI overrides.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(anchor) = &args.anchor {
            self.anchor = anchor.clone();
        }
        if let Some(export_dir) = &args.export_dir {
            self.export_dir = export_dir.clone();
        }
        if !args.targets.is_empty() {
            self.targets = args.targets.clone();
        }
        if let Some(pm) = args.package_manager {
            self.package_manager = Some(pm);
        }
    }

    /// Returns the import transformation options.
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            anchor: self.anchor.clone(),
            modules_marker: self.modules_marker.clone(),
        }
    }

    /// Directory inside the export that receives the rewritten sources.
    pub fn contracts_dir(&self) -> Utf8PathBuf {
        self.export_dir.join("contracts")
    }

    /// Directory inside the export that receives the ABI artifacts.
    pub fn abi_dir(&self) -> Utf8PathBuf {
        self.export_dir.join("abi")
    }

    /// Glob handed to typechain.
    pub fn abi_glob(&self) -> String {
        format!("{}/*.json", self.abi_dir())
    }
}

//! Output formatting.

use crate::cli::OutputFormat;
use camino::Utf8PathBuf;
use serde::Serialize;
use std::fmt::Write;

/// One exported interface.
#[derive(Debug, Clone, Serialize)]
pub struct ExportedInterface {
    /// Interface name (file stem).
    pub name: String,
    /// Source file, relative to the workspace.
    pub source: Utf8PathBuf,
    /// Rewritten copy inside the export.
    pub contract: Utf8PathBuf,
    /// Copied ABI inside the export.
    pub abi: Utf8PathBuf,
    /// Number of rewritten import lines.
    pub rewritten_imports: usize,
}

/// Summary of an export run.
#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub export_dir: Utf8PathBuf,
    pub interfaces: Vec<ExportedInterface>,
    pub generated_targets: Vec<String>,
    pub dependencies_installed: bool,
}

impl ExportSummary {
    /// Total number of rewritten import lines.
    pub fn rewritten_imports(&self) -> usize {
        self.interfaces.iter().map(|i| i.rewritten_imports).sum()
    }

    /// Formats the summary.
    pub fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Human => self.format_human(),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(self).unwrap_or_default();
                json.push('\n');
                json
            }
        }
    }

    fn format_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Exported {} interfaces to {} ({} imports rewritten)",
            self.interfaces.len(),
            self.export_dir,
            self.rewritten_imports()
        );
        if !self.generated_targets.is_empty() {
            let _ = writeln!(out, "Bindings: {}", self.generated_targets.join(", "));
        }
        if self.dependencies_installed {
            let _ = writeln!(out, "Dependencies installed");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn summary() -> ExportSummary {
        ExportSummary {
            export_dir: Utf8PathBuf::from("npm"),
            interfaces: vec![
                ExportedInterface {
                    name: "IOracle".to_string(),
                    source: Utf8PathBuf::from("solidity/interfaces/IOracle.sol"),
                    contract: Utf8PathBuf::from("npm/contracts/IOracle.sol"),
                    abi: Utf8PathBuf::from("npm/abi/IOracle.json"),
                    rewritten_imports: 2,
                },
                ExportedInterface {
                    name: "IModule".to_string(),
                    source: Utf8PathBuf::from("solidity/interfaces/IModule.sol"),
                    contract: Utf8PathBuf::from("npm/contracts/IModule.sol"),
                    abi: Utf8PathBuf::from("npm/abi/IModule.json"),
                    rewritten_imports: 1,
                },
            ],
            generated_targets: vec!["web3-v1".to_string(), "ethers-v6".to_string()],
            dependencies_installed: false,
        }
    }

    #[test]
    fn test_human_format() {
        assert_eq!(
            summary().format(OutputFormat::Human),
            "Exported 2 interfaces to npm (3 imports rewritten)\nBindings: web3-v1, ethers-v6\n"
        );
    }

    #[test]
    fn test_json_format() {
        let value: serde_json::Value =
            serde_json::from_str(&summary().format(OutputFormat::Json)).unwrap();
        assert_eq!(value["interfaces"][0]["name"], "IOracle");
        assert_eq!(value["interfaces"][1]["rewritten_imports"], 1);
        assert_eq!(value["dependencies_installed"], false);
    }
}

//! Package manifest assembly.

use crate::config::ExportConfig;
use crate::error::ExportError;
use camino::Utf8Path;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;

/// The fields of the project's `package.json` that carry over to the export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectManifest {
    pub version: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub license: Option<String>,
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
}

impl ProjectManifest {
    /// Loads a `package.json`.
    pub fn load(path: &Utf8Path) -> Result<Self, ExportError> {
        let content = fs::read_to_string(path).map_err(ExportError::io("read", path))?;

        serde_json::from_str(&content).map_err(|source| ExportError::InvalidManifest {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// The exported package's `package.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageManifest {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    pub dependencies: IndexMap<String, String>,
}

impl PackageManifest {
    /// Builds the export manifest from the project manifest and config.
    ///
    /// Extra dependencies override project dependencies of the same name in
    /// place; new ones are appended.
    pub fn assemble(project: &ProjectManifest, config: &ExportConfig) -> Self {
        let mut dependencies = project.dependencies.clone();
        for (name, version) in &config.extra_dependencies {
            dependencies.insert(name.clone(), version.clone());
        }

        Self {
            name: config.package_name.clone(),
            description: config.package_description.clone(),
            version: project.version.clone(),
            keywords: project.keywords.clone(),
            license: project.license.clone(),
            dependencies,
        }
    }

    /// Serializes with 4-space indentation.
    pub fn to_json(&self) -> Result<String, ExportError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .map_err(ExportError::ManifestSerialize)?;
        buf.push(b'\n');

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Writes the manifest to `path`.
    pub fn write(&self, path: &Utf8Path) -> Result<(), ExportError> {
        fs::write(path, self.to_json()?).map_err(ExportError::io("write", path))
    }
}

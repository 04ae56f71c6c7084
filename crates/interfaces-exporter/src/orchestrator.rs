//! Main orchestration logic.

use crate::cli::Args;
use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::manifest::{PackageManifest, ProjectManifest};
use crate::output::{ExportSummary, ExportedInterface};
use camino::{Utf8Path, Utf8PathBuf};
use codegen_runner::{CodegenRunner, PackageManager};
use globset::Glob;
use import_remapper::{interface_name, transform_source, RemappingTable, TransformOptions};
use rayon::prelude::*;
use std::fs;
use walkdir::WalkDir;

/// Runs a full export.
pub async fn run(args: Args) -> Result<ExportSummary, ExportError> {
    let workspace = if args.workspace.is_relative() {
        let cwd = std::env::current_dir().map_err(ExportError::io("resolve", "."))?;
        Utf8PathBuf::try_from(cwd)
            .map_err(|e| ExportError::NonUtf8Path(e.into_path_buf()))?
            .join(&args.workspace)
    } else {
        args.workspace.clone()
    };

    let config = ExportConfig::resolve(&workspace, &args)?;
    log::debug!("export configuration: {config:?}");

    let export_dir = workspace.join(&config.export_dir);
    prepare_export_dir(&workspace, &export_dir)?;

    write_manifest(&workspace, &export_dir, &config)?;
    copy_file(&workspace.join(&config.readme), &export_dir.join("README.md"))?;
    copy_file(&workspace.join(&config.license), &export_dir.join("LICENSE"))?;

    let table = RemappingTable::load(&workspace.join(&config.remappings))?;
    let files = find_interfaces(&workspace, &config.interfaces_dir, &config.interfaces_glob)?;
    log::debug!("found {} interface files", files.len());

    let options = config.transform_options();
    let interfaces: Vec<ExportedInterface> = files
        .par_iter()
        .map(|file| export_interface(&workspace, file, &config, &table, &options))
        .collect::<Result<_, _>>()?;

    eprintln!("Copied {} interfaces", interfaces.len());

    let mut generated_targets = Vec::new();
    let mut dependencies_installed = false;

    if !(args.skip_codegen && args.skip_install) {
        let package_manager = resolve_package_manager(&workspace, &config)?;
        let runner = CodegenRunner::new(package_manager, workspace.clone())?;

        if !args.skip_codegen {
            let abi_glob = config.abi_glob();
            for target in &config.targets {
                eprintln!("Generating types for {target}");
                runner
                    .generate_bindings(target, &config.export_dir.join(target), &abi_glob)
                    .await?;
                generated_targets.push(target.clone());
            }
        }

        if !args.skip_install {
            eprintln!("Installing package dependencies");
            runner.install_dependencies(&export_dir).await?;
            dependencies_installed = true;
        }
    }

    Ok(ExportSummary {
        export_dir: config.export_dir.clone(),
        interfaces,
        generated_targets,
        dependencies_installed,
    })
}

/// Empties the export directory, creating it when missing.
fn prepare_export_dir(workspace: &Utf8Path, export_dir: &Utf8Path) -> Result<(), ExportError> {
    let normalized_export = lexical_normalize(export_dir);
    if lexical_normalize(workspace).starts_with(&normalized_export) {
        return Err(ExportError::UnsafeExportDir {
            export_dir: export_dir.to_path_buf(),
            workspace: workspace.to_path_buf(),
        });
    }

    if !export_dir.exists() {
        return fs::create_dir_all(export_dir).map_err(ExportError::io("create", export_dir));
    }

    let entries = fs::read_dir(export_dir).map_err(ExportError::io("read", export_dir))?;
    for entry in entries {
        let entry = entry.map_err(ExportError::io("read", export_dir))?;
        let path = Utf8PathBuf::try_from(entry.path())
            .map_err(|e| ExportError::NonUtf8Path(e.into_path_buf()))?;
        let file_type = entry.file_type().map_err(ExportError::io("inspect", &path))?;
        if file_type.is_dir() {
            fs::remove_dir_all(&path).map_err(ExportError::io("remove", &path))?;
        } else {
            fs::remove_file(&path).map_err(ExportError::io("remove", &path))?;
        }
    }

    Ok(())
}

fn lexical_normalize(path: &Utf8Path) -> Utf8PathBuf {
    let mut out = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            camino::Utf8Component::CurDir => {}
            camino::Utf8Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_str()),
        }
    }
    out
}

fn write_manifest(
    workspace: &Utf8Path,
    export_dir: &Utf8Path,
    config: &ExportConfig,
) -> Result<(), ExportError> {
    let project = ProjectManifest::load(&workspace.join("package.json"))?;
    PackageManifest::assemble(&project, config).write(&export_dir.join("package.json"))
}

fn copy_file(from: &Utf8Path, to: &Utf8Path) -> Result<(), ExportError> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(ExportError::io("create", parent))?;
    }
    fs::copy(from, to).map_err(ExportError::io("copy", from))?;
    Ok(())
}

/// Lists interface files below `interfaces_dir` matching `pattern`.
///
/// Returned paths are `interfaces_dir`-prefixed, relative to the workspace and
/// sorted.
fn find_interfaces(
    workspace: &Utf8Path,
    interfaces_dir: &Utf8Path,
    pattern: &str,
) -> Result<Vec<Utf8PathBuf>, ExportError> {
    let matcher = Glob::new(pattern)
        .map_err(|e| ExportError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?
        .compile_matcher();

    let root = workspace.join(interfaces_dir);
    let mut files = Vec::new();
    for entry in WalkDir::new(&root).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = Utf8PathBuf::try_from(entry.into_path())
            .map_err(|e| ExportError::NonUtf8Path(e.into_path_buf()))?;
        let Ok(relative) = path.strip_prefix(&root) else {
            continue;
        };
        if matcher.is_match(relative.as_str()) {
            files.push(interfaces_dir.join(relative));
        }
    }

    files.sort();
    Ok(files)
}

/// Rewrites one interface into the export and copies its ABI next to it.
fn export_interface(
    workspace: &Utf8Path,
    file: &Utf8Path,
    config: &ExportConfig,
    table: &RemappingTable,
    options: &TransformOptions,
) -> Result<ExportedInterface, ExportError> {
    let source_path = workspace.join(file);
    let source =
        fs::read_to_string(&source_path).map_err(ExportError::io("read", &source_path))?;
    let transformed = transform_source(&source, file.as_str(), table, options);

    let relative = file.strip_prefix(&config.interfaces_dir).unwrap_or(file);
    let contract = config.contracts_dir().join(relative);
    let contract_path = workspace.join(&contract);
    if let Some(parent) = contract_path.parent() {
        fs::create_dir_all(parent).map_err(ExportError::io("create", parent))?;
    }
    fs::write(&contract_path, &transformed.text)
        .map_err(ExportError::io("write", &contract_path))?;

    let name =
        interface_name(file).ok_or_else(|| ExportError::UnnamedInterface(file.to_path_buf()))?;
    let file_name = file.file_name().unwrap_or(name);
    let artifact = workspace
        .join(&config.out_dir)
        .join(file_name)
        .join(format!("{name}.json"));
    if !artifact.is_file() {
        return Err(ExportError::MissingArtifact {
            interface: name.to_string(),
            path: artifact,
        });
    }

    let abi = config.abi_dir().join(format!("{name}.json"));
    copy_file(&artifact, &workspace.join(&abi))?;

    log::debug!(
        "{} -> {} ({} imports rewritten)",
        file,
        contract,
        transformed.rewritten_lines
    );

    Ok(ExportedInterface {
        name: name.to_string(),
        source: file.to_path_buf(),
        contract,
        abi,
        rewritten_imports: transformed.rewritten_lines,
    })
}

fn resolve_package_manager(
    workspace: &Utf8Path,
    config: &ExportConfig,
) -> Result<PackageManager, ExportError> {
    config
        .package_manager
        .or_else(|| PackageManager::detect_from_workspace(workspace))
        .or_else(PackageManager::detect_from_path)
        .ok_or(ExportError::NoPackageManager)
}

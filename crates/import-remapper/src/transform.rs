//! Per-line and per-file transformation.

use crate::classify::is_import_line;
use crate::remapping::RemappingTable;
use crate::rewrite::{collapse_module_path, rewrite_line};
use camino::Utf8Path;

/// Default anchor: the directory name that roots the interface tree.
pub const DEFAULT_ANCHOR: &str = "solidity";

/// Default package manager directory marker.
pub const DEFAULT_MODULES_MARKER: &str = "node_modules/";

/// Options for the import transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Path segment that locates the project root inside a file path.
    pub anchor: String,
    /// Substring identifying third-party package directories.
    pub modules_marker: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            anchor: DEFAULT_ANCHOR.to_string(),
            modules_marker: DEFAULT_MODULES_MARKER.to_string(),
        }
    }
}

/// Result of transforming a whole source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedSource {
    /// The rewritten file contents.
    pub text: String,
    /// Number of lines in both input and output.
    pub line_count: usize,
    /// Number of lines whose text changed.
    pub rewritten_lines: usize,
}

/// Transforms a single line of the file at `file_path`.
pub fn transform_line(
    line: &str,
    file_path: &str,
    table: &RemappingTable,
    options: &TransformOptions,
) -> String {
    if !is_import_line(line) {
        return line.to_string();
    }
    let Some(entry) = table.resolve(line) else {
        return line.to_string();
    };

    let rewritten = rewrite_line(line, file_path, entry, &options.anchor);
    collapse_module_path(&rewritten, &options.modules_marker).into_owned()
}

/// Transforms every line of `source`, keeping the line structure intact.
///
/// Lines are split on `\n` and rejoined with `\n`, so carriage returns and a
/// trailing newline survive untouched.
pub fn transform_source(
    source: &str,
    file_path: &str,
    table: &RemappingTable,
    options: &TransformOptions,
) -> TransformedSource {
    let mut line_count = 0;
    let mut rewritten_lines = 0;

    let lines: Vec<String> = source
        .split('\n')
        .map(|line| {
            line_count += 1;
            let transformed = transform_line(line, file_path, table, options);
            if transformed != line {
                rewritten_lines += 1;
            }
            transformed
        })
        .collect();

    TransformedSource {
        text: lines.join("\n"),
        line_count,
        rewritten_lines,
    }
}

/// Returns the bare interface name (file name without extension).
///
/// ```
/// use camino::Utf8Path;
/// use import_remapper::interface_name;
///
/// assert_eq!(
///     interface_name(Utf8Path::new("solidity/interfaces/oracle/IOracle.sol")),
///     Some("IOracle")
/// );
/// ```
pub fn interface_name(path: &Utf8Path) -> Option<&str> {
    path.file_stem()
}

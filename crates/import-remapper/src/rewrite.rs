//! Path rewriting and module path collapsing.

use crate::remapping::RemappingEntry;
use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

/// Computes the import prefix that replaces a remapping origin.
///
/// Everything in `file_path` from the first occurrence of `anchor` onward is
/// replaced by `destination`, and the result is made relative to the file's
/// directory. Same-directory results become `./`, everything else gets a
/// trailing `/`.
///
/// When `anchor` does not occur in `file_path` the candidate is the file path
/// itself, so the prefix points at the file rather than the destination.
pub fn relative_prefix(file_path: &str, destination: &str, anchor: &str) -> String {
    let candidate = match file_path.find(anchor) {
        Some(idx) => format!("{}{}", &file_path[..idx], destination),
        None => file_path.to_string(),
    };
    let source_dir = match file_path.rfind('/') {
        Some(idx) => &file_path[..idx],
        None => "",
    };

    let relative = lexical_relative(&candidate, source_dir);
    if relative.is_empty() {
        "./".to_string()
    } else {
        format!("{relative}/")
    }
}

/// Replaces the first occurrence of the entry's origin with its relative prefix.
pub fn rewrite_line(line: &str, file_path: &str, entry: &RemappingEntry, anchor: &str) -> String {
    let prefix = relative_prefix(file_path, &entry.destination, anchor);
    line.replacen(entry.origin.as_str(), &prefix, 1)
}

/// Collapses a reference through a package manager directory.
///
/// The kept prefix runs up to and including the first `.` in the line and the
/// kept suffix starts right after the first `marker`. Lines without the marker
/// are returned unchanged.
///
/// ```
/// use import_remapper::collapse_module_path;
///
/// assert_eq!(
///     collapse_module_path("import '../../node_modules/lib/A.sol';", "node_modules/"),
///     "import '.lib/A.sol';"
/// );
/// ```
pub fn collapse_module_path<'a>(line: &'a str, marker: &str) -> Cow<'a, str> {
    let Some(marker_idx) = line.find(marker) else {
        return Cow::Borrowed(line);
    };
    let suffix = &line[marker_idx + marker.len()..];
    let prefix = match line.find('.') {
        Some(dot) => &line[..=dot],
        None => "",
    };

    Cow::Owned(format!("{prefix}{suffix}"))
}

/// Relative path from `base` to `target` using only path text.
///
/// Falls back to the normalized target when `base` climbs above its own root,
/// since no lexical answer exists there.
fn lexical_relative(target: &str, base: &str) -> String {
    let target = normalize(Path::new(target));
    let base = normalize(Path::new(base));

    let relative = pathdiff::diff_paths(&target, &base).unwrap_or(target);
    join_forward(&relative)
}

/// Resolves `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.last() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }
    normalized.iter().collect()
}

fn join_forward(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::RootDir => out.push('/'),
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}

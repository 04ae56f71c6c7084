//! Import line classification.

const IMPORT_KEYWORD: &str = "import";

/// Returns whether a line is an import statement.
///
/// Leading whitespace is ignored, the keyword is matched case-insensitively and
/// must be followed by whitespace. Quote style and terminators are irrelevant.
pub fn is_import_line(line: &str) -> bool {
    let rest = line.trim_start();
    let Some(keyword) = rest.get(..IMPORT_KEYWORD.len()) else {
        return false;
    };
    if !keyword.eq_ignore_ascii_case(IMPORT_KEYWORD) {
        return false;
    }

    rest[IMPORT_KEYWORD.len()..]
        .chars()
        .next()
        .is_some_and(char::is_whitespace)
}

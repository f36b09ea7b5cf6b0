//! Branch name derivation.

/// True for characters allowed in a derived branch name: `[A-Za-z0-9_-]`.
#[inline]
#[must_use]
pub fn is_branch_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Append `suffix` to `identifier` and drop every character outside `[A-Za-z0-9_-]`.
///
/// An identifier made only of disallowed characters yields the (sanitized) bare suffix.
#[must_use]
pub fn derive_branch_name(identifier: &str, suffix: &str) -> String {
    identifier
        .chars()
        .chain(suffix.chars())
        .filter(|&c| is_branch_char(c))
        .collect()
}

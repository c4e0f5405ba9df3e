pub mod errors;
pub mod rfc3339;

/// Lowercases a display name and replaces whitespace with dashes, the way
/// the registry derives logins and category slugs (`John Doe` → `john-doe`).
pub fn dasherize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

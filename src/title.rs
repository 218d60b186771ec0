/// Fallback name for the page title.
const DEFAULT_TITLE: &str = "Document";

/// Resolve the page title from an explicit override or the repository
/// identifier.
///
/// A non-blank override always wins. Otherwise the identifier is expected
/// in GitHub Actions `owner/name` form and only the part after the first
/// `/` is used. Anything else falls back to `"Document"`.
pub fn resolve_title(title_override: Option<&str>, repo_identifier: Option<&str>) -> String {
    if let Some(title) = title_override {
        let title = title.trim();
        if !title.is_empty() {
            return title.to_string();
        }
    }

    if let Some(repo) = repo_identifier {
        if let Some((_, name)) = repo.trim().split_once('/') {
            return name.to_string();
        }
    }

    DEFAULT_TITLE.to_string()
}

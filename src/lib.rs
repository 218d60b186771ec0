mod template;
mod title;

pub use template::render;
pub use title::resolve_title;

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating the page.
#[derive(Debug, Error)]
pub enum Error {
    /// Directory creation or file write failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Inputs for a single generation run.
#[derive(Debug)]
pub struct GenerationRequest {
    /// Output HTML path.
    pub output_path: PathBuf,
    /// PDF href embedded in the page, treated as opaque text.
    pub pdf_href: String,
    /// Explicit title; blank falls through to the repository name.
    pub title_override: Option<String>,
    /// `GITHUB_REPOSITORY` in `owner/name` form, if set.
    pub repo_identifier: Option<String>,
}

/// Render the page for `request` and write it to the output path,
/// creating parent directories as needed and overwriting any existing
/// file.
pub fn generate(request: &GenerationRequest) -> Result<(), Error> {
    let title = resolve_title(
        request.title_override.as_deref(),
        request.repo_identifier.as_deref(),
    );
    let html = render(&title, &request.pdf_href);

    if let Some(parent) = request.output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: request.output_path.clone(),
                source,
            })?;
        }
    }

    fs::write(&request.output_path, html).map_err(|source| Error::Io {
        path: request.output_path.clone(),
        source,
    })
}

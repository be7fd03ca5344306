//! Static HTML export of the architecture document.

use std::path::Path;

use anyhow::{Context, Result};
use jukebox_mlops_ui::render::{render_component, standalone_document, write_document};

use crate::pages::{ArchitecturePage, DOCUMENT_TITLE};
use crate::theme::GLOBAL_STYLES;

/// Render the architecture page into a complete HTML document.
pub fn render_document() -> String {
    let body = render_component(ArchitecturePage);
    standalone_document(DOCUMENT_TITLE, GLOBAL_STYLES, &body)
}

/// Render the document and write it to `path`.
pub fn export_document(path: &Path) -> Result<()> {
    let html = render_document();
    tracing::debug!(bytes = html.len(), "Rendered architecture document");

    write_document(path, &html).context("Failed to export architecture document")?;

    tracing::info!(path = %path.display(), "Exported architecture document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn document_embeds_styles_and_page() {
        let html = render_document();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Jukebox Inc MLOps Architecture</title>"));
        assert!(html.contains(".section__title"));
        assert!(html.contains("<h1 class=\"site-header__title\">Jukebox Inc MLOps Architecture</h1>"));
    }

    #[test]
    fn export_writes_rendered_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("architecture.html");

        export_document(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), render_document());
    }

    #[test]
    fn export_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("architecture.html");

        let err = export_document(&path).unwrap_err();

        assert!(format!("{err:#}").contains("architecture.html"));
    }
}

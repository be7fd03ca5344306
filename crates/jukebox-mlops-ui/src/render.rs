//! Static HTML rendering
//!
//! Serialises component trees with `dioxus-ssr` so the same document shown
//! in the desktop window can be exported as a standalone page.

use std::path::Path;

use dioxus::prelude::*;

use crate::error::{RenderError, Result};

/// Render a single element tree to an HTML fragment.
pub fn render_element(element: Element) -> String {
    dioxus_ssr::render_element(element)
}

/// Render a root component (no props) to an HTML fragment.
pub fn render_component(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Wrap a rendered body into a complete HTML5 page.
///
/// The title is escaped; `styles` and `body` are inserted verbatim.
pub fn standalone_document(title: &str, styles: &str, body: &str) -> String {
    let title_tag = render_element(rsx! { title { "{title}" } });

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         {title_tag}\n\
         <style>{styles}</style>\n\
         </head>\n\
         <body>\n\
         {body}\n\
         </body>\n\
         </html>\n"
    )
}

/// Write a rendered document to `path`. Parent directories must exist.
pub fn write_document(path: &Path, html: &str) -> Result<()> {
    std::fs::write(path, html).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = html.len(), "Document written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Card, IconKind, Section};
    use tempfile::TempDir;

    fn sample() -> Element {
        rsx! {
            Section { title: "ML Applications", icon: IconKind::Boxes,
                Card { title: "License Optimization",
                    p { "Weekly batch processing" }
                }
            }
        }
    }

    #[test]
    fn render_component_matches_render_element() {
        assert_eq!(render_component(sample), render_element(sample()));
    }

    #[test]
    fn render_is_deterministic() {
        assert_eq!(render_component(sample), render_component(sample));
    }

    #[test]
    fn standalone_document_has_head_and_body() {
        let page = standalone_document("Doc", "body { margin: 0; }", "<p>hello</p>");

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<meta charset=\"utf-8\">"));
        assert!(page.contains("<title>Doc</title>"));
        assert!(page.contains("<style>body { margin: 0; }</style>"));
        let head_end = page.find("</head>").unwrap();
        assert!(page.find("<p>hello</p>").unwrap() > head_end);
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[test]
    fn standalone_document_escapes_title() {
        let page = standalone_document("R&D <draft>", "", "");

        assert!(page.contains("<title>R&amp;D &lt;draft&gt;</title>"));
    }

    #[test]
    fn write_document_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");

        write_document(&path, "<p>ok</p>").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>ok</p>");
    }

    #[test]
    fn write_document_reports_path_on_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("index.html");

        let err = write_document(&path, "<p>ok</p>").unwrap_err();

        assert!(matches!(err, RenderError::Write { .. }));
        assert!(err.to_string().contains("index.html"));
    }
}

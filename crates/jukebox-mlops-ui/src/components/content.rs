//! Content helpers
//!
//! Small structural wrappers for the prose inside cards.

use dioxus::prelude::*;

/// Sub-heading inside a card with its own body
#[component]
pub fn Topic(heading: String, children: Element) -> Element {
    rsx! {
        div { class: "topic",
            h4 { class: "topic__title", "{heading}" }
            {children}
        }
    }
}

/// Disc-bulleted list; children are expected to be `li` elements
#[component]
pub fn BulletList(children: Element) -> Element {
    rsx! {
        ul { class: "bullet-list", {children} }
    }
}

/// List item with a label and a nested circle-bulleted list
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     BulletList {
///         NestedItem {
///             label: "Model registry",
///             items: vec!["Model versioning and staging", "Model lineage tracking"],
///         }
///     }
/// }
/// ```
#[component]
pub fn NestedItem(label: String, items: Vec<&'static str>) -> Element {
    rsx! {
        li {
            "{label}"
            ul { class: "bullet-list bullet-list--nested",
                for item in items {
                    li { "{item}" }
                }
            }
        }
    }
}

/// Placeholder image for a figure that has no source yet
#[component]
pub fn Figure(alt: String) -> Element {
    rsx! {
        img { class: "card__figure", alt: "{alt}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_element;

    #[test]
    fn nested_item_keeps_item_order() {
        let html = render_element(rsx! {
            NestedItem {
                label: "Multi-layer data lake",
                items: vec!["Bronze layer", "Silver layer", "Gold layer"],
            }
        });

        let label = html.find("Multi-layer data lake").unwrap();
        let bronze = html.find("Bronze layer").unwrap();
        let silver = html.find("Silver layer").unwrap();
        let gold = html.find("Gold layer").unwrap();
        assert!(label < bronze && bronze < silver && silver < gold);
        assert_eq!(html.matches("<li>").count(), 4);
    }

    #[test]
    fn topic_heading_precedes_body() {
        let html = render_element(rsx! {
            Topic { heading: "Feature Store",
                BulletList {
                    li { "Online and offline feature serving" }
                }
            }
        });

        assert!(html.contains("<h4 class=\"topic__title\">Feature Store</h4>"));
        assert!(html.contains("<ul class=\"bullet-list\">"));
        assert!(html.find("Feature Store").unwrap() < html.find("feature serving").unwrap());
    }

    #[test]
    fn figure_carries_alt_text() {
        let html = render_element(rsx! {
            Figure { alt: "Data Pipeline Visualization" }
        });

        assert!(html.starts_with("<img"));
        assert!(html.contains("alt=\"Data Pipeline Visualization\""));
    }
}

//! Section Component
//!
//! Top-level grouping of the document: an icon and an `h2` title above
//! arbitrary content.

use dioxus::prelude::*;

use super::icon::{Icon, IconKind};

/// Properties for the Section component
#[derive(Clone, PartialEq, Props)]
pub struct SectionProps {
    /// Heading text
    pub title: String,
    /// Decorative icon shown left of the heading
    pub icon: IconKind,
    /// Section body
    pub children: Element,
}

/// Section with an icon heading followed by its children
///
/// The heading always comes first and the children are rendered once, in
/// the order given.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Section { title: "ML Applications", icon: IconKind::Boxes,
///         Card { title: "Fraud Detection",
///             p { "Stream processing for real-time anomaly detection." }
///         }
///     }
/// }
/// ```
#[component]
pub fn Section(props: SectionProps) -> Element {
    rsx! {
        section { class: "section",
            div { class: "section__heading",
                Icon { kind: props.icon }
                h2 { class: "section__title", "{props.title}" }
            }
            {props.children}
        }
    }
}

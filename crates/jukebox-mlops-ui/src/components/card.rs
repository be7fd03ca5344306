//! Card Component
//!
//! Titled box nested inside a section.

use dioxus::prelude::*;

/// Card with an `h3` title followed by its children
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Card { title: "Known Limitations",
///         BulletList {
///             li { "Limited offline capabilities for recommendation engine" }
///         }
///     }
/// }
/// ```
#[component]
pub fn Card(
    /// Card title (semibold, dark gray)
    title: String,
    /// Card body
    children: Element,
) -> Element {
    rsx! {
        div { class: "card",
            h3 { class: "card__title", "{title}" }
            {children}
        }
    }
}

//! Site header - indigo banner with the document title.

use dioxus::prelude::*;

/// Full-width banner holding the `h1` and tagline
#[component]
pub fn SiteHeader(
    /// Document title
    title: String,
    /// One-line summary under the title
    tagline: String,
) -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "container",
                h1 { class: "site-header__title", "{title}" }
                p { class: "site-header__tagline", "{tagline}" }
            }
        }
    }
}

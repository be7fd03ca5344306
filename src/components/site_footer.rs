//! Site footer

use dioxus::prelude::*;

#[component]
pub fn SiteFooter(notice: String) -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                p { class: "site-footer__notice", "{notice}" }
            }
        }
    }
}

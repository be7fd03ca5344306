use dioxus::prelude::*;

use crate::pages::ArchitecturePage;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the architecture document.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        ArchitecturePage {}
    }
}

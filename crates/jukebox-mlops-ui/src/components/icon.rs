//! Icon Component
//!
//! Inline stroke icons (24x24 grid, round caps) for section headings.

use dioxus::prelude::*;

/// Icons available to section headings
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    /// Stacked cylinder - data storage and pipelines
    Database,
    /// Two linked boxes - lifecycle and process flow
    Workflow,
    /// Cluster of cubes - applications
    Boxes,
    /// Warning triangle - limitations and assumptions
    AlertTriangle,
}

impl IconKind {
    /// Stable kebab-case name, used in the CSS class
    pub fn name(&self) -> &'static str {
        match self {
            IconKind::Database => "database",
            IconKind::Workflow => "workflow",
            IconKind::Boxes => "boxes",
            IconKind::AlertTriangle => "alert-triangle",
        }
    }

    /// Every icon, in declaration order
    pub fn all() -> [IconKind; 4] {
        [
            IconKind::Database,
            IconKind::Workflow,
            IconKind::Boxes,
            IconKind::AlertTriangle,
        ]
    }
}

/// Renders an icon as an inline SVG
///
/// Icons are decorative and hidden from assistive technology; the heading
/// next to them carries the meaning.
#[component]
pub fn Icon(kind: IconKind) -> Element {
    let name = kind.name();

    let glyph = match kind {
        IconKind::Database => rsx! {
            ellipse { cx: "12", cy: "5", rx: "9", ry: "3" }
            path { d: "M3 5V19A9 3 0 0 0 21 19V5" }
            path { d: "M3 12A9 3 0 0 0 21 12" }
        },
        IconKind::Workflow => rsx! {
            rect { x: "3", y: "3", width: "8", height: "8", rx: "2" }
            path { d: "M7 11v4a2 2 0 0 0 2 2h4" }
            rect { x: "13", y: "13", width: "8", height: "8", rx: "2" }
        },
        IconKind::Boxes => rsx! {
            path { d: "M2.97 12.92A2 2 0 0 0 2 14.63v3.24a2 2 0 0 0 .97 1.71l3 1.8a2 2 0 0 0 2.06 0L12 19v-5.5l-5-3-4.03 2.42Z" }
            path { d: "m7 16.5-4.74-2.85" }
            path { d: "m7 16.5 5-3" }
            path { d: "M7 16.5v5.17" }
            path { d: "M12 13.5V19l3.97 2.38a2 2 0 0 0 2.06 0l3-1.8a2 2 0 0 0 .97-1.71v-3.24a2 2 0 0 0-.97-1.71L17 10.5l-5 3Z" }
            path { d: "m17 16.5-5-3" }
            path { d: "m17 16.5 4.74-2.85" }
            path { d: "M17 16.5v5.17" }
            path { d: "M7.97 4.42A2 2 0 0 0 7 6.13v4.37l5 3 5-3V6.13a2 2 0 0 0-.97-1.71l-3-1.8a2 2 0 0 0-2.06 0l-3 1.8Z" }
            path { d: "M12 8 7.26 5.15" }
            path { d: "m12 8 4.74-2.85" }
            path { d: "M12 13.5V8" }
        },
        IconKind::AlertTriangle => rsx! {
            path { d: "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3" }
            path { d: "M12 9v4" }
            path { d: "M12 17h.01" }
        },
    };

    rsx! {
        svg {
            class: "icon icon--{name}",
            view_box: "0 0 24 24",
            width: "24",
            height: "24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {glyph}
        }
    }
}

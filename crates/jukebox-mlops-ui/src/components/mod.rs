//! Reusable layout components for the architecture document.
//!
//! All components render plain semantic markup; styling is carried by
//! class names defined in the host application's stylesheet.

mod card;
mod content;
mod icon;
mod section;

pub use card::Card;
pub use content::{BulletList, Figure, NestedItem, Topic};
pub use icon::{Icon, IconKind};
pub use section::Section;

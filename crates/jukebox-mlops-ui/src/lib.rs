//! Jukebox MLOps Architecture UI Components
//!
//! Presentational Dioxus components for the architecture document, plus the
//! helpers that turn a component tree into static HTML.
//!
//! ## Layout Vocabulary
//!
//! - **Section**: top-level labelled grouping with an icon heading
//! - **Card**: titled white box nested inside a section
//! - **Topic**: small `h4` sub-heading inside a card
//! - **BulletList / NestedItem**: the disc and circle lists used for prose
//!
//! None of these hold state; every component is a pure function of its props.

pub mod components;
pub mod error;
pub mod render;

pub use components::*;
pub use error::{RenderError, Result};

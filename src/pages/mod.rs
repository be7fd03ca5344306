//! Page components for the MLOps architecture viewer.

mod architecture;

pub use architecture::{ArchitecturePage, DOCUMENT_TITLE};

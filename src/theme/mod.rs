//! Visual theme: indigo accents on a light gray page.

mod styles;

pub use styles::GLOBAL_STYLES;

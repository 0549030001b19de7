//! Rendering-side helpers
//!
//! Turns render-space vertices into path commands; the drawing surface itself
//! belongs to the host.

pub mod path;

pub use path::{PathCommand, fill_path};

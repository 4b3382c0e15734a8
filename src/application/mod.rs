//! Application layer: rendering, sample trees and statistics
//!
//! This layer consumes the domain tree; it never mutates trees it did not build.

pub mod catalogue;
pub mod error;
pub mod error_ext;
pub mod render;

pub use catalogue::{movies, stats, TreeStats};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use render::{render, to_termtree, RenderStyle};

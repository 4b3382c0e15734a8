//! Domain layer: the node tree and its traversal
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod error;
pub mod node;
pub mod traits;
pub mod traverse;

pub use builder::TreeBuilder;
pub use error::{DomainError, DomainResult};
pub use node::{Container, Leaf, Node};
pub use traits::{Composite, Traversable};
pub use traverse::{NodeRef, PostOrder, Produce, Visit, Walk};

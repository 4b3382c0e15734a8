//! Uniform hierarchical node tree.
//!
//! Leaves and containers share one traversal interface ([`Traversable`]);
//! only containers can be mutated ([`Composite`]).
//!
//! ```
//! use nodetree::{Container, Leaf, Traversable};
//!
//! # fn main() -> Result<(), nodetree::DomainError> {
//! let mut action = Container::new("ActionMovies")?;
//! action.add(Leaf::new("FastAndFurious")?).add(Leaf::new("topGun")?);
//! let mut movies = Container::new("Movies")?;
//! movies.add(Leaf::new("SpiderMan")?).add(action);
//!
//! let names: Vec<&str> = movies.produce().collect();
//! assert_eq!(names, ["Movies", "SpiderMan", "ActionMovies", "FastAndFurious", "topGun"]);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{
    Composite, Container, DomainError, DomainResult, Leaf, Node, NodeRef, Traversable,
    TreeBuilder, Visit,
};

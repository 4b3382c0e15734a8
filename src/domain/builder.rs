//! Tree builder for assembling container hierarchies without hand-nesting values.

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{Container, Leaf, Node};

/// Builds a tree top-down with an explicit stack of open containers.
///
/// ```
/// use nodetree::{Traversable, TreeBuilder};
///
/// # fn main() -> Result<(), nodetree::DomainError> {
/// let movies = TreeBuilder::new("Movies")?
///     .leaf("SpiderMan")?
///     .open("ActionMovies")?
///     .leaf("FastAndFurious")?
///     .leaf("topGun")?
///     .close()?
///     .build();
///
/// assert_eq!(movies.node_count(), 5);
/// assert_eq!(movies.leaf_names(), ["SpiderMan", "FastAndFurious", "topGun"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
    root: Container,
    open: Vec<Container>,
}

impl TreeBuilder {
    pub fn new(root: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            root: Container::new(root)?,
            open: Vec::new(),
        })
    }

    /// Build a tree from `/`-separated paths, inserted in order.
    ///
    /// See [`Container::insert_path`] for path semantics.
    #[instrument(level = "debug", skip_all)]
    pub fn from_paths<I, S>(root: impl Into<String>, paths: I) -> DomainResult<Container>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::new(root)?;
        for path in paths {
            builder.insert_path(path.as_ref())?;
        }
        Ok(builder.build())
    }

    fn current(&mut self) -> &mut Container {
        match self.open.last_mut() {
            Some(container) => container,
            None => &mut self.root,
        }
    }

    /// Number of containers opened and not yet closed.
    pub fn open_depth(&self) -> usize {
        self.open.len()
    }

    /// Append a leaf to the current container.
    pub fn leaf(&mut self, name: impl Into<String>) -> DomainResult<&mut Self> {
        let leaf = Leaf::new(name)?;
        self.current().add(leaf);
        Ok(self)
    }

    /// Append an already-built node to the current container.
    pub fn node(&mut self, node: impl Into<Node>) -> &mut Self {
        self.current().add(node);
        self
    }

    /// Open a new container; subsequent nodes go inside it until [`close`](Self::close).
    pub fn open(&mut self, name: impl Into<String>) -> DomainResult<&mut Self> {
        let container = Container::new(name)?;
        debug!(container = %container.name(), depth = self.open.len() + 1, "open");
        self.open.push(container);
        Ok(self)
    }

    /// Close the innermost open container and append it to its parent.
    ///
    /// Fails with `InvalidOperation` when only the root is open.
    pub fn close(&mut self) -> DomainResult<&mut Self> {
        let container = self
            .open
            .pop()
            .ok_or_else(|| DomainError::invalid_operation("close", self.root.name()))?;
        debug!(container = %container.name(), "close");
        self.current().add(container);
        Ok(self)
    }

    /// Insert by path below the current container.
    pub fn insert_path(&mut self, path: &str) -> DomainResult<&mut Self> {
        self.current().insert_path(path)?;
        Ok(self)
    }

    /// Close any open containers and return the root.
    ///
    /// The builder is left holding an empty root of the same name.
    #[instrument(level = "debug", skip(self), fields(root = %self.root.name()))]
    pub fn build(&mut self) -> Container {
        while let Some(container) = self.open.pop() {
            self.current().add(container);
        }
        let fresh = self.root.empty_copy();
        std::mem::replace(&mut self.root, fresh)
    }
}

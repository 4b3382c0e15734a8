//! Node variants: leaves and containers
//!
//! A [`Container`] exclusively owns its children. Children are moved in by value,
//! so a container can never end up inside itself or one of its descendants.

use tracing::{debug, instrument, trace};

use crate::domain::error::{DomainError, DomainResult};

fn validate_name(name: impl Into<String>) -> DomainResult<String> {
    let name = name.into();
    if name.is_empty() {
        return Err(DomainError::invalid_argument("node name must not be empty"));
    }
    Ok(name)
}

/// Childless node holding only a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    name: String,
}

impl Leaf {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            name: validate_name(name)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Node holding an ordered sequence of children.
///
/// Insertion order is preserved and duplicate names are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    name: String,
    children: Vec<Node>,
}

impl Container {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            name: validate_name(name)?,
            children: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Same name, no children. The name was validated when `self` was built.
    pub(crate) fn empty_copy(&self) -> Self {
        Self {
            name: self.name.clone(),
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append `child` after all existing children.
    pub fn add(&mut self, child: impl Into<Node>) -> &mut Self {
        let child = child.into();
        trace!(parent = %self.name, child = %child.name(), "add");
        self.children.push(child);
        self
    }

    /// Append a child that may be absent.
    ///
    /// `None` is rejected with [`DomainError::InvalidArgument`] and the
    /// child sequence is left unchanged.
    pub fn try_add<N: Into<Node>>(&mut self, child: Option<N>) -> DomainResult<&mut Self> {
        match child {
            Some(child) => Ok(self.add(child)),
            None => Err(DomainError::invalid_argument(format!(
                "cannot add an absent child to '{}'",
                self.name
            ))),
        }
    }

    /// First direct child named `name`, of either variant.
    pub fn find_child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name() == name)
    }

    /// First direct child container named `name`.
    pub fn find_container(&self, name: &str) -> Option<&Container> {
        self.children.iter().find_map(|c| match c {
            Node::Container(c) if c.name == name => Some(c),
            _ => None,
        })
    }

    /// Mutable access to the first direct child container named `name`.
    pub fn find_container_mut(&mut self, name: &str) -> Option<&mut Container> {
        self.children.iter_mut().find_map(|c| match c {
            Node::Container(c) if c.name == name => Some(c),
            _ => None,
        })
    }

    /// Insert a node below this container by `/`-separated path.
    ///
    /// Intermediate segments resolve to the first child container of that name,
    /// creating it if missing. The last segment becomes a [`Leaf`], or an empty
    /// [`Container`] when the path ends in `/`.
    ///
    /// # Errors
    /// * `InvalidArgument` - empty path or empty segment (e.g. `a//b`, `/a`)
    /// * `InvalidOperation` - an intermediate segment names an existing leaf
    ///
    /// Both are detected before anything is appended.
    #[instrument(level = "debug", skip(self), fields(root = %self.name))]
    pub fn insert_path(&mut self, path: &str) -> DomainResult<&mut Self> {
        if path.is_empty() {
            return Err(DomainError::invalid_argument("path must not be empty"));
        }
        let (body, as_container) = match path.strip_suffix('/') {
            Some(body) => (body, true),
            None => (path, false),
        };
        let segments: Vec<&str> = body.split('/').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(DomainError::invalid_argument(format!(
                "path contains an empty segment: '{}'",
                path
            )));
        }
        // split always yields at least one segment
        let (last, parents) = match segments.split_last() {
            Some(split) => split,
            None => return Err(DomainError::invalid_argument("path must not be empty")),
        };

        let mut current: &mut Container = self;
        for segment in parents {
            let idx = match current
                .children
                .iter()
                .position(|c| c.is_container() && c.name() == *segment)
            {
                Some(idx) => idx,
                None => {
                    if current.find_child(segment).is_some() {
                        return Err(DomainError::invalid_operation(
                            "descend",
                            segment.to_string(),
                        ));
                    }
                    debug!(parent = %current.name, container = %segment, "creating intermediate container");
                    current.children.push(Container::new(*segment)?.into());
                    current.children.len() - 1
                }
            };
            current = match &mut current.children[idx] {
                Node::Container(c) => c,
                Node::Leaf(l) => {
                    return Err(DomainError::invalid_operation("descend", l.name.clone()))
                }
            };
        }

        if as_container {
            current.add(Container::new(*last)?);
        } else {
            current.add(Leaf::new(*last)?);
        }
        Ok(self)
    }
}

impl Drop for Container {
    fn drop(&mut self) {
        // Unlink descendants iteratively so dropping a deep tree does not recurse
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Container(mut c) = node {
                pending.append(&mut c.children);
            }
        }
    }
}

/// Any element of the tree: the closed set of node variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(Leaf),
    Container(Container),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Leaf(l) => l.name(),
            Node::Container(c) => c.name(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Node::Container(_))
    }

    /// Children of this node; always empty for a leaf.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Container(c) => c.children(),
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Node::Container(c) => Some(c),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Node::Container(c) => Some(c),
            Node::Leaf(_) => None,
        }
    }

    /// Append a child through the uniform handle.
    ///
    /// Leaves do not hold children: this fails with
    /// [`DomainError::InvalidOperation`] instead of silently doing nothing.
    pub fn add(&mut self, child: impl Into<Node>) -> DomainResult<()> {
        match self {
            Node::Container(c) => {
                c.add(child);
                Ok(())
            }
            Node::Leaf(l) => Err(DomainError::invalid_operation("add", l.name.clone())),
        }
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<Container> for Node {
    fn from(container: Container) -> Self {
        Node::Container(container)
    }
}

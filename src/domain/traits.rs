//! Capability traits
//!
//! Traversal is uniform across both variants ([`Traversable`]); mutation is only
//! offered where it makes sense ([`Composite`], containers only). A leaf therefore
//! has no `add` to reject at runtime unless reached through the uniform [`Node`] handle.

use tracing::instrument;

use crate::domain::error::DomainResult;
use crate::domain::node::{Container, Leaf, Node};
use crate::domain::traverse::{NodeRef, PostOrder, Produce, Visit, Walk};

/// Read-only operations shared by every node variant.
pub trait Traversable {
    /// Borrowed view used by all provided methods.
    fn view(&self) -> NodeRef<'_>;

    fn name(&self) -> &str {
        self.view().name()
    }

    /// Names of all nodes in this subtree, depth-first pre-order, children in
    /// insertion order. Lazy and restartable: each call walks the tree anew.
    fn produce(&self) -> Produce<'_> {
        Produce::new(self.view())
    }

    /// Pre-order walk yielding each node with its depth (this node = 0).
    fn walk(&self) -> Walk<'_> {
        Walk::new(self.view())
    }

    /// Walk yielding children before their parent.
    fn walk_postorder(&self) -> PostOrder<'_> {
        PostOrder::new(self.view())
    }

    /// Number of nodes in this subtree, including this one.
    fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Number of nodes on the longest path from this node down to a leaf.
    ///
    /// A single node has depth 1.
    #[instrument(level = "debug", skip(self), fields(node = self.name()))]
    fn depth(&self) -> usize {
        self.walk().map(|v| v.depth + 1).max().unwrap_or(1)
    }

    /// Names of all leaves in this subtree, pre-order.
    ///
    /// Empty containers are not leaves.
    fn leaf_names(&self) -> Vec<&str> {
        self.walk()
            .filter(|v| v.node.is_leaf())
            .map(|v| v.node.name())
            .collect()
    }

    /// Fold over the pre-order walk.
    fn fold<T, F>(&self, init: T, f: F) -> T
    where
        F: FnMut(T, Visit<'_>) -> T,
    {
        self.walk().fold(init, f)
    }

    /// Bottom-up aggregation: each leaf maps to a value, each container combines
    /// the values of its children (in insertion order) into its own.
    fn aggregate<T, L, C>(&self, mut leaf: L, mut container: C) -> T
    where
        L: FnMut(&Leaf) -> T,
        C: FnMut(&Container, Vec<T>) -> T,
    {
        aggregate_node(self.view(), &mut leaf, &mut container)
    }
}

fn aggregate_node<T, L, C>(node: NodeRef<'_>, leaf: &mut L, container: &mut C) -> T
where
    L: FnMut(&Leaf) -> T,
    C: FnMut(&Container, Vec<T>) -> T,
{
    match node {
        NodeRef::Leaf(l) => leaf(l),
        NodeRef::Container(c) => {
            let values = c
                .children()
                .iter()
                .map(|child| aggregate_node(child.into(), leaf, container))
                .collect();
            container(c, values)
        }
    }
}

/// Mutation capability, implemented by containers only.
pub trait Composite: Traversable {
    fn children(&self) -> &[Node];

    /// Append `child` after all existing children.
    fn add_child(&mut self, child: Node);

    /// Append a child that may be absent; `None` fails with `InvalidArgument`.
    fn try_add_child(&mut self, child: Option<Node>) -> DomainResult<()>;

    fn len(&self) -> usize {
        self.children().len()
    }

    fn is_empty(&self) -> bool {
        self.children().is_empty()
    }
}

impl Traversable for Leaf {
    fn view(&self) -> NodeRef<'_> {
        NodeRef::Leaf(self)
    }
}

impl Traversable for Container {
    fn view(&self) -> NodeRef<'_> {
        NodeRef::Container(self)
    }
}

impl Traversable for Node {
    fn view(&self) -> NodeRef<'_> {
        self.into()
    }
}

impl<'a> Traversable for NodeRef<'a> {
    fn view(&self) -> NodeRef<'_> {
        *self
    }
}

impl Composite for Container {
    fn children(&self) -> &[Node] {
        Container::children(self)
    }

    fn add_child(&mut self, child: Node) {
        self.add(child);
    }

    fn try_add_child(&mut self, child: Option<Node>) -> DomainResult<()> {
        self.try_add(child).map(|_| ())
    }
}

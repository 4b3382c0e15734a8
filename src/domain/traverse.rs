//! Lazy traversal iterators over node trees
//!
//! All iterators keep an explicit stack instead of recursing, so walking a deep
//! tree never grows the call stack. Nothing is cached: every call starts over.

use tracing::instrument;

use crate::domain::node::{Container, Leaf, Node};

/// Borrowed view of a node of either variant.
///
/// Lets standalone [`Leaf`] and [`Container`] values be traversed the same way
/// as a [`Node`] without wrapping them first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'a> {
    Leaf(&'a Leaf),
    Container(&'a Container),
}

impl<'a> NodeRef<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            NodeRef::Leaf(l) => l.name(),
            NodeRef::Container(c) => c.name(),
        }
    }

    pub fn children(&self) -> &'a [Node] {
        match self {
            NodeRef::Leaf(_) => &[],
            NodeRef::Container(c) => c.children(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, NodeRef::Leaf(_))
    }

    pub fn is_container(&self) -> bool {
        matches!(self, NodeRef::Container(_))
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Leaf(l) => NodeRef::Leaf(l),
            Node::Container(c) => NodeRef::Container(c),
        }
    }
}

/// A node reached during a walk, with its distance from the walk's start (start = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit<'a> {
    pub node: NodeRef<'a>,
    pub depth: usize,
}

/// Depth-first, pre-order walk in child insertion order.
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<Visit<'a>>,
}

impl<'a> Walk<'a> {
    #[instrument(level = "trace", skip(start), fields(start = start.name()))]
    pub(crate) fn new(start: NodeRef<'a>) -> Self {
        Self {
            stack: vec![Visit {
                node: start,
                depth: 0,
            }],
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in visit.node.children().iter().rev() {
            self.stack.push(Visit {
                node: child.into(),
                depth: visit.depth + 1,
            });
        }
        Some(visit)
    }
}

/// Names of the nodes of a [`Walk`], one per visited node.
#[derive(Debug)]
pub struct Produce<'a> {
    walk: Walk<'a>,
}

impl<'a> Produce<'a> {
    pub(crate) fn new(start: NodeRef<'a>) -> Self {
        Self {
            walk: Walk::new(start),
        }
    }
}

impl<'a> Iterator for Produce<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next().map(|visit| visit.node.name())
    }
}

/// Depth-first walk yielding children before their parent.
#[derive(Debug)]
pub struct PostOrder<'a> {
    stack: Vec<(Visit<'a>, bool)>,
}

impl<'a> PostOrder<'a> {
    #[instrument(level = "trace", skip(start), fields(start = start.name()))]
    pub(crate) fn new(start: NodeRef<'a>) -> Self {
        Self {
            stack: vec![(
                Visit {
                    node: start,
                    depth: 0,
                },
                false,
            )],
        }
    }
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((visit, expanded)) = self.stack.pop() {
            if expanded {
                return Some(visit);
            }
            self.stack.push((visit, true));
            for child in visit.node.children().iter().rev() {
                self.stack.push((
                    Visit {
                        node: child.into(),
                        depth: visit.depth + 1,
                    },
                    false,
                ));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //      root
    //      /  \
    //     a    b
    //     |
    //     a1
    fn sample() -> Container {
        let mut a = Container::new("a").unwrap();
        a.add(Leaf::new("a1").unwrap());
        let mut root = Container::new("root").unwrap();
        root.add(a).add(Leaf::new("b").unwrap());
        root
    }

    #[test]
    fn test_walk_is_preorder_with_depths() {
        let root = sample();
        let visits: Vec<(&str, usize)> = Walk::new(NodeRef::Container(&root))
            .map(|v| (v.node.name(), v.depth))
            .collect();
        assert_eq!(visits, vec![("root", 0), ("a", 1), ("a1", 2), ("b", 1)]);
    }

    #[test]
    fn test_postorder_yields_children_first() {
        let root = sample();
        let names: Vec<&str> = PostOrder::new(NodeRef::Container(&root))
            .map(|v| v.node.name())
            .collect();
        assert_eq!(names, vec!["a1", "a", "b", "root"]);
    }

    #[test]
    fn test_produce_on_leaf_yields_only_its_name() {
        let leaf = Leaf::new("solo").unwrap();
        let names: Vec<&str> = Produce::new(NodeRef::Leaf(&leaf)).collect();
        assert_eq!(names, vec!["solo"]);
    }
}

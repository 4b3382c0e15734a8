//! Tests for walks and aggregation over node trees

use nodetree::util::testing;
use nodetree::{Container, Leaf, Node, Traversable, TreeBuilder, Visit};
use rstest::{fixture, rstest};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

// root
// ├── a
// │   ├── a1
// │   └── a2
// │       └── a21
// ├── b
// └── c (empty)
#[fixture]
fn tree() -> Container {
    TreeBuilder::from_paths("root", ["a/a1", "a/a2/a21", "b", "c/"]).unwrap()
}

#[rstest]
fn given_tree_when_walking_then_depths_follow_nesting(tree: Container) {
    let visits: Vec<(&str, usize)> = tree.walk().map(|v| (v.node.name(), v.depth)).collect();
    assert_eq!(
        visits,
        vec![
            ("root", 0),
            ("a", 1),
            ("a1", 2),
            ("a2", 2),
            ("a21", 3),
            ("b", 1),
            ("c", 1),
        ]
    );
}

#[rstest]
fn given_tree_when_walking_postorder_then_children_precede_parents(tree: Container) {
    let names: Vec<&str> = tree.walk_postorder().map(|v| v.node.name()).collect();
    assert_eq!(names, vec!["a1", "a21", "a2", "a", "b", "c", "root"]);
}

#[rstest]
fn given_tree_when_counting_then_matches_produced_length(tree: Container) {
    assert_eq!(tree.node_count(), 7);
    assert_eq!(tree.node_count(), tree.produce().count());
    assert_eq!(tree.depth(), 4);
}

#[rstest]
fn given_tree_with_empty_container_when_listing_leaves_then_container_is_excluded(
    tree: Container,
) {
    assert_eq!(tree.leaf_names(), vec!["a1", "a21", "b"]);
}

#[rstest]
fn given_tree_when_folding_then_sees_every_visit(tree: Container) {
    let total_depth = tree.fold(0, |acc, v: Visit<'_>| acc + v.depth);
    assert_eq!(total_depth, 1 + 2 + 2 + 3 + 1 + 1);
}

#[rstest]
fn given_tree_when_aggregating_then_values_combine_bottom_up(tree: Container) {
    // Render each subtree as a nested s-expression
    let sexpr = tree.aggregate(
        |leaf: &Leaf| leaf.name().to_string(),
        |c: &Container, kids: Vec<String>| {
            if kids.is_empty() {
                format!("({})", c.name())
            } else {
                format!("({} {})", c.name(), kids.join(" "))
            }
        },
    );
    assert_eq!(sexpr, "(root (a a1 (a2 a21)) b (c))");
}

#[test]
fn given_single_leaf_when_aggregating_then_only_leaf_fn_runs() {
    let leaf = Leaf::new("solo").unwrap();
    let value = leaf.aggregate(|_| 1usize, |_, _| unreachable!("no containers"));
    assert_eq!(value, 1);
}

#[rstest]
fn given_child_node_when_walking_subtree_then_depth_restarts_at_zero(tree: Container) {
    let a: &Node = tree.find_child("a").unwrap();
    let visits: Vec<(&str, usize)> = a.walk().map(|v| (v.node.name(), v.depth)).collect();
    assert_eq!(visits, vec![("a", 0), ("a1", 1), ("a2", 1), ("a21", 2)]);
}

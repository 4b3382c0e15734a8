//! Sample catalogue and tree statistics

use tracing::{debug, instrument};

use crate::domain::{Container, DomainResult, Traversable, TreeBuilder};

/// The movie catalogue used by `nodetree demo`.
///
/// ```text
/// Movies
/// ├── SpiderMan
/// └── ActionMovies
///     ├── FastAndFurious
///     └── topGun
/// ```
pub fn movies() -> DomainResult<Container> {
    Ok(TreeBuilder::new("Movies")?
        .leaf("SpiderMan")?
        .open("ActionMovies")?
        .leaf("FastAndFurious")?
        .leaf("topGun")?
        .close()?
        .build())
}

/// Summary figures for a subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeStats {
    pub nodes: usize,
    pub containers: usize,
    pub leaves: usize,
    pub depth: usize,
    pub leaf_names: Vec<String>,
}

/// Collect [`TreeStats`] for `node`.
#[instrument(level = "debug", skip_all, fields(node = node.name()))]
pub fn stats<T: Traversable>(node: &T) -> TreeStats {
    let (containers, leaves) = node.fold((0, 0), |(containers, leaves), visit| {
        if visit.node.is_container() {
            (containers + 1, leaves)
        } else {
            (containers, leaves + 1)
        }
    });
    let stats = TreeStats {
        nodes: node.node_count(),
        containers,
        leaves,
        depth: node.depth(),
        leaf_names: node.leaf_names().into_iter().map(String::from).collect(),
    };
    debug!(?stats, "collected");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movies_stats() {
        let movies = movies().unwrap();
        let stats = stats(&movies);
        assert_eq!(stats.nodes, 5);
        assert_eq!(stats.containers, 2);
        assert_eq!(stats.leaves, 3);
        assert_eq!(stats.depth, 3);
        assert_eq!(
            stats.leaf_names,
            vec!["SpiderMan", "FastAndFurious", "topGun"]
        );
    }
}

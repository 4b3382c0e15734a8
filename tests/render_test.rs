//! Tests for rendering produced sequences

use nodetree::application::{movies, render, stats, RenderStyle};
use nodetree::config::Settings;
use nodetree::util::testing;
use nodetree::{Container, TreeBuilder};
use rstest::{fixture, rstest};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[fixture]
fn catalogue() -> Container {
    movies().unwrap()
}

fn settings(style: RenderStyle) -> Settings {
    Settings {
        style,
        ..Settings::default()
    }
}

#[rstest]
fn given_plain_style_when_rendering_then_one_name_per_line(catalogue: Container) {
    assert_eq!(
        render(&catalogue, &settings(RenderStyle::Plain)),
        "Movies\nSpiderMan\nActionMovies\nFastAndFurious\ntopGun"
    );
}

#[rstest]
fn given_outline_style_when_rendering_then_indents_by_depth(catalogue: Container) {
    assert_eq!(
        render(&catalogue, &settings(RenderStyle::Outline)),
        "Movies\n  SpiderMan\n  ActionMovies\n    FastAndFurious\n    topGun"
    );
}

#[rstest]
fn given_ls_style_when_rendering_then_labels_directories_and_files(catalogue: Container) {
    let out = render(&catalogue, &settings(RenderStyle::Ls));
    assert_eq!(
        out.lines().collect::<Vec<_>>(),
        vec![
            "Directory Name : Movies",
            "File Name : SpiderMan",
            "Directory Name : ActionMovies",
            "File Name : FastAndFurious",
            "File Name : topGun",
        ]
    );
}

#[rstest]
fn given_tree_style_when_rendering_then_draws_branches(catalogue: Container) {
    let out = render(&catalogue, &settings(RenderStyle::Tree));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5, "unexpected tree output:\n{}", out);
    assert_eq!(lines[0], "Movies");
    assert!(lines[1].ends_with("SpiderMan") && lines[1].contains("├"));
    assert!(lines[2].ends_with("ActionMovies") && lines[2].contains("└"));
    assert!(lines[4].ends_with("topGun"));
    assert!(!out.ends_with('\n'));
}

#[rstest]
#[case(RenderStyle::Plain)]
#[case(RenderStyle::Outline)]
#[case(RenderStyle::Tree)]
#[case(RenderStyle::Ls)]
fn given_empty_container_when_rendering_then_single_line(#[case] style: RenderStyle) {
    let empty = Container::new("Empty").unwrap();
    let out = render(&empty, &settings(style));
    assert_eq!(out.lines().count(), 1);
    assert!(out.ends_with("Empty"));
}

#[test]
fn given_paths_when_collecting_stats_then_counts_match() {
    let tree = TreeBuilder::from_paths("root", ["a/x", "a/y", "b/", "z"]).unwrap();
    let s = stats(&tree);
    assert_eq!(s.nodes, 6);
    assert_eq!(s.containers, 3);
    assert_eq!(s.leaves, 3);
    assert_eq!(s.depth, 3);
    assert_eq!(s.leaf_names, vec!["x", "y", "z"]);
}

//! Rendering of produced node sequences into text
//!
//! Rendering only consumes the traversal output; the tree itself never prints.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize};
use termtree::Tree;
use tracing::instrument;

use crate::config::{Settings, MAX_INDENT};
use crate::domain::{NodeRef, Traversable};

/// Output layout for a rendered tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// One name per line, pre-order
    #[default]
    Plain,
    /// Names indented by depth
    Outline,
    /// Box-drawing tree
    Tree,
    /// `Directory Name : ...` / `File Name : ...` listing
    Ls,
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RenderStyle::Plain => "plain",
            RenderStyle::Outline => "outline",
            RenderStyle::Tree => "tree",
            RenderStyle::Ls => "ls",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for RenderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| format!("unknown render style: '{}' (expected plain, outline, tree or ls)", s))
    }
}

impl<'de> Deserialize<'de> for RenderStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Render `node` and its subtree in the style given by `settings`.
///
/// Lines are joined with `\n`; there is no trailing newline.
#[instrument(level = "debug", skip_all, fields(node = node.name(), style = %settings.style))]
pub fn render<T: Traversable>(node: &T, settings: &Settings) -> String {
    let indent = settings.indent.min(MAX_INDENT);
    match settings.style {
        RenderStyle::Plain => node.produce().join("\n"),
        RenderStyle::Outline => node
            .walk()
            .map(|v| {
                format!(
                    "{:indent$}{}",
                    "",
                    v.node.name(),
                    indent = v.depth.saturating_mul(indent)
                )
            })
            .join("\n"),
        RenderStyle::Tree => to_termtree(node.view())
            .to_string()
            .trim_end_matches('\n')
            .to_string(),
        RenderStyle::Ls => node
            .walk()
            .map(|v| {
                if v.node.is_container() {
                    format!("Directory Name : {}", v.node.name())
                } else {
                    format!("File Name : {}", v.node.name())
                }
            })
            .join("\n"),
    }
}

/// Convert a subtree into a `termtree` for box-drawing display.
pub fn to_termtree(node: NodeRef<'_>) -> Tree<String> {
    // Recursively construct the children
    let leaves: Vec<_> = node
        .children()
        .iter()
        .map(|c| to_termtree(c.into()))
        .collect();

    Tree::new(node.name().to_string()).with_leaves(leaves)
}

//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::RenderStyle;

/// Build and render uniform node trees of leaves and containers
#[derive(Parser, Debug)]
#[command(name = "nodetree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(long, global = true, env = "NODETREE_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the sample movie catalogue
    Demo {
        /// Render style (default from settings)
        #[arg(short, long, value_enum, ignore_case = true)]
        style: Option<RenderStyle>,
    },

    /// Build a tree from paths and render it
    Render {
        /// Name of the root container
        root: String,
        /// Node paths below the root; a trailing '/' makes an empty container
        paths: Vec<String>,
        /// Render style (default from settings)
        #[arg(short, long, value_enum, ignore_case = true)]
        style: Option<RenderStyle>,
    },

    /// Show node count, depth and leaves of a tree built from paths
    Stats {
        /// Name of the root container
        root: String,
        /// Node paths below the root; a trailing '/' makes an empty container
        paths: Vec<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings as TOML
    Show,
    /// Show the global config file location
    Path,
}

//! Command dispatch: wires parsed arguments to the application layer

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{movies, render, stats, RenderStyle};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::TreeBuilder;

/// Execute the parsed command line.
///
/// Settings are loaded only by commands that use them, so `config path` and
/// `completion` still work when the config file is broken.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Demo { style }) => cmd_demo(&load_settings(cli)?, *style),
        Some(Commands::Render { root, paths, style }) => {
            cmd_render(&load_settings(cli)?, root, paths, *style)
        }
        Some(Commands::Stats { root, paths }) => cmd_stats(root, paths),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(&load_settings(cli)?),
            ConfigCommands::Path => cmd_config_path(),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see 'nodetree --help'".to_string(),
        )),
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load(cli.config.as_deref())?;
    if !settings.color {
        output::set_color(false);
    }
    debug!(?settings, "effective settings");
    Ok(settings)
}

fn with_style(settings: &Settings, style: Option<RenderStyle>) -> Settings {
    Settings {
        style: style.unwrap_or(settings.style),
        ..settings.clone()
    }
}

#[instrument(skip(settings))]
fn cmd_demo(settings: &Settings, style: Option<RenderStyle>) -> CliResult<()> {
    let tree = movies()?;
    output::info(&render(&tree, &with_style(settings, style)));
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_render(
    settings: &Settings,
    root: &str,
    paths: &[String],
    style: Option<RenderStyle>,
) -> CliResult<()> {
    let tree = TreeBuilder::from_paths(root, paths)?;
    output::info(&render(&tree, &with_style(settings, style)));
    Ok(())
}

#[instrument]
fn cmd_stats(root: &str, paths: &[String]) -> CliResult<()> {
    let tree = TreeBuilder::from_paths(root, paths)?;
    let stats = stats(&tree);
    output::header(&format!("Tree: {}", root));
    output::action("nodes", &stats.nodes);
    output::action("containers", &stats.containers);
    output::action("leaves", &stats.leaves);
    output::action("depth", &stats.depth);
    for leaf in &stats.leaf_names {
        output::detail(leaf);
    }
    Ok(())
}

fn cmd_config_show(settings: &Settings) -> CliResult<()> {
    output::info(settings.to_toml()?.trim_end());
    Ok(())
}

fn cmd_config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::info(&path.display()),
        None => output::error("could not determine config directory"),
    }
    Ok(())
}

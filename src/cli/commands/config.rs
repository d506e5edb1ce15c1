//! `vqt config` command - Configuration management
//!
//! Provides commands to view and modify VQT configuration.

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::config::CONFIG_KEYS;
use crate::core::project::Project;
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration values
    Show(ShowArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Unset (remove) a configuration value
    Unset(UnsetArgs),

    /// Show paths to configuration files
    Path,

    /// List all available configuration keys
    Keys,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Show only this key's value
    pub key: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Configuration key (e.g., price_list, catalog)
    pub key: String,

    /// Value to set
    pub value: String,

    /// Set in global (user) config instead of project config
    #[arg(long, short = 'g')]
    pub global: bool,
}

#[derive(clap::Args, Debug)]
pub struct UnsetArgs {
    /// Configuration key to remove
    pub key: String,

    /// Remove from global (user) config instead of project config
    #[arg(long, short = 'g')]
    pub global: bool,
}

pub fn run(cmd: ConfigCommands, _global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show(args) => run_show(args),
        ConfigCommands::Set(args) => run_set(args),
        ConfigCommands::Unset(args) => run_unset(args),
        ConfigCommands::Path => run_path(),
        ConfigCommands::Keys => run_keys(),
    }
}

fn run_show(args: ShowArgs) -> Result<()> {
    let config = Config::load();

    match args.key {
        Some(key) => {
            if !CONFIG_KEYS.contains(&key.as_str()) {
                return Err(miette::miette!(
                    "Unknown config key: {}. Valid keys: {}",
                    key,
                    CONFIG_KEYS.join(", ")
                ));
            }
            match config.get(&key) {
                Some(value) => println!("{}", value),
                None => println!("{}", style("(unset)").dim()),
            }
        }
        None => {
            for key in CONFIG_KEYS {
                match config.get(key) {
                    Some(value) => println!("{} = {}", style(key).bold(), value),
                    None => println!("{} = {}", style(key).bold(), style("(unset)").dim()),
                }
            }
        }
    }
    Ok(())
}

fn layer_path(global: bool) -> Result<std::path::PathBuf> {
    if global {
        Config::global_config_path()
            .ok_or_else(|| miette::miette!("Cannot determine the global config directory"))
    } else {
        let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
        Ok(project.config_path())
    }
}

fn run_set(args: SetArgs) -> Result<()> {
    let path = layer_path(args.global)?;

    let mut layer = Config::load_file(&path);
    layer
        .set(&args.key, &args.value)
        .map_err(|e| miette::miette!("{}", e))?;
    layer.save_file(&path).map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Set {} = {}",
        style("✓").green(),
        style(&args.key).bold(),
        style(&args.value).yellow()
    );
    println!("   {}", style(path.display()).dim());
    Ok(())
}

fn run_unset(args: UnsetArgs) -> Result<()> {
    let path = layer_path(args.global)?;

    let mut layer = Config::load_file(&path);
    layer
        .unset(&args.key)
        .map_err(|e| miette::miette!("{}", e))?;
    layer.save_file(&path).map_err(|e| miette::miette!("{}", e))?;

    println!("{} Unset {}", style("✓").green(), style(&args.key).bold());
    println!("   {}", style(path.display()).dim());
    Ok(())
}

fn run_path() -> Result<()> {
    if let Ok(project) = Project::discover() {
        println!(
            "{}: {}",
            style("project").bold(),
            project.config_path().display()
        );
    } else {
        println!("{}: {}", style("project").bold(), style("(no project)").dim());
    }

    match Config::global_config_path() {
        Some(path) => println!("{}: {}", style("global").bold(), path.display()),
        None => println!("{}: {}", style("global").bold(), style("(unavailable)").dim()),
    }
    Ok(())
}

fn run_keys() -> Result<()> {
    for key in CONFIG_KEYS {
        println!("{}", key);
    }
    Ok(())
}

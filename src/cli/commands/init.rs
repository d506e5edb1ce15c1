//! `vqt init` command - Initialize a new VQT project

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::core::project::{Project, ProjectError};

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: std::path::PathBuf,

    /// Force initialization even if .vqt/ already exists
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let path = if args.path.as_os_str() == "." {
        std::env::current_dir().into_diagnostic()?
    } else {
        args.path.clone()
    };

    // Create directory if it doesn't exist
    if !path.exists() {
        std::fs::create_dir_all(&path).into_diagnostic()?;
        println!(
            "{} Created directory {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
    }

    let project = if args.force {
        Project::init_force(&path)
    } else {
        Project::init(&path)
    };

    match project {
        Ok(project) => {
            println!(
                "{} Initialized VQT project at {}",
                style("✓").green(),
                style(project.root().display()).cyan()
            );
            println!();
            println!(
                "The catalog is expected at {} (change it with {}).",
                style("productos.csv").yellow(),
                style("vqt config set catalog <file>").yellow()
            );
            println!();
            println!("Next steps:");
            println!(
                "  {} Start an interactive quoting session",
                style("vqt quote").yellow()
            );
            println!(
                "  {} Browse the catalog",
                style("vqt catalog categories").yellow()
            );
            println!(
                "  {} Pick the price list for this project",
                style("vqt config set price_list contratista").yellow()
            );
            Ok(())
        }
        Err(ProjectError::AlreadyExists(path)) => {
            println!(
                "{} VQT project already exists at {}",
                style("!").yellow(),
                style(path.display()).cyan()
            );
            println!();
            println!(
                "Use {} to reinitialize",
                style("vqt init --force").yellow()
            );
            Ok(())
        }
        Err(e) => Err(miette::miette!("{}", e)),
    }
}

//! hpak - recipe-driven packager CLI

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hpak_cli::cmd;
use hpak_cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let quiet = cli.quiet;

    match cli.command {
        Commands::Describe { recipe_dir } => cmd::describe::describe(&recipe_dir),
        Commands::Export {
            recipe_dir,
            stage_dir,
        } => cmd::export::export(&recipe_dir, stage_dir.as_deref(), quiet),
        Commands::Package {
            recipe_dir,
            stage_dir,
            out_dir,
        } => cmd::package::package(&recipe_dir, stage_dir.as_deref(), out_dir.as_deref(), quiet),
        Commands::Create {
            recipe_dir,
            out_dir,
        } => cmd::create::create(&recipe_dir, out_dir.as_deref(), quiet),
        Commands::Check { path } => cmd::check::check(&path, quiet),
        Commands::New {
            name,
            version,
            header,
            output_dir,
        } => cmd::new::new(&name, &version, &header, &output_dir, quiet),
    }
}

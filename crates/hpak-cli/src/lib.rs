//! hpak - a recipe-driven packager for header-only libraries
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
//!
//! # Overview
//!
//! hpak reads a `recipe.toml` descriptor from a recipe directory and drives
//! it through three operations: describe (print the declared name/version),
//! export (stage the declared header), and package (copy the staged header
//! into an output package directory).
//!
//! # Directory Layout
//!
//! ```text
//! ~/.hpak/
//! ├── stage/      # Export staging areas by name/version
//! └── packages/   # Packaged output by name/version
//! ```

pub mod cmd;
pub mod ui;

// Re-exports from the core crate for convenience
pub use hpak_core::paths;
pub use hpak_core::{ExportError, Packager, Recipe, RecipeError, RECIPE_FILE};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "hpak")]
#[command(author, version, about = "hpak - package header-only libraries from recipes")]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the name and version declared by a recipe
    Describe {
        /// Recipe directory (containing recipe.toml)
        recipe_dir: PathBuf,
    },
    /// Export the declared header into a staging directory
    Export {
        /// Recipe directory (containing recipe.toml)
        recipe_dir: PathBuf,
        /// Staging directory (defaults to ~/.hpak/stage/<name>/<version>)
        #[arg(long)]
        stage_dir: Option<PathBuf>,
    },
    /// Copy a previously staged header into an output package directory
    Package {
        /// Recipe directory (containing recipe.toml)
        recipe_dir: PathBuf,
        /// Staging directory holding the exported header
        #[arg(long)]
        stage_dir: Option<PathBuf>,
        /// Output package directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Export and package in one step through a temporary staging area
    Create {
        /// Recipe directory (containing recipe.toml)
        recipe_dir: PathBuf,
        /// Output package directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Validate a recipe file
    Check {
        /// Recipe file or directory to check
        path: PathBuf,
    },
    /// Create a new recipe template
    New {
        /// Package name
        name: String,
        /// Package version
        #[arg(long, default_value = "0.1.0")]
        version: String,
        /// Relative path of the header to export
        #[arg(long)]
        header: String,
        /// Directory to save the recipe in
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
}

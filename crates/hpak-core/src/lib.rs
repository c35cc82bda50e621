//! Core library for hpak - recipe schema and packaging operations.
//!
//! A recipe directory holds a `recipe.toml` descriptor next to the source
//! tree of a header-only library. The descriptor names the package, pins a
//! version, and declares the single header file to export. [`Packager`]
//! implements the three operations the descriptor drives: describe, export
//! into a staging directory, and package into an output directory.

pub mod packager;
pub mod paths;
pub mod recipe;
pub mod types;

pub use packager::{ExportError, Packager};
pub use recipe::{Recipe, RecipeError};
pub use types::{PackageName, Version};

/// File name of the descriptor hpak looks for inside a recipe directory.
pub const RECIPE_FILE: &str = "recipe.toml";

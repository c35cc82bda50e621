//! Describe command: print a recipe's declared identity.

use anyhow::{Context, Result};
use hpak_core::Recipe;
use std::path::Path;

/// Print the name and version declared by the recipe in `recipe_dir`.
pub fn describe(recipe_dir: &Path) -> Result<()> {
    let recipe = Recipe::load_dir(recipe_dir)
        .with_context(|| format!("Failed to load recipe from {}", recipe_dir.display()))?;

    let (name, version) = recipe.describe();
    println!("  Name: {name}");
    println!("  Version: {version}");

    Ok(())
}

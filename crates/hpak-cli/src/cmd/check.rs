//! Check command: validate a recipe file.

use anyhow::{Context, Result};
use hpak_core::{Recipe, RECIPE_FILE};
use std::path::Path;

use crate::ui::Output;

/// Parse and validate a recipe file (or the `recipe.toml` in a directory).
pub fn check(path: &Path, quiet: bool) -> Result<()> {
    let output = Output::new(quiet);
    let file = if path.is_dir() {
        path.join(RECIPE_FILE)
    } else {
        path.to_path_buf()
    };

    let content = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read recipe file {}", file.display()))?;
    let recipe = Recipe::parse(&content).context("Failed to parse recipe")?;
    recipe.validate().context("Recipe failed validation")?;

    output.success("Recipe is valid");
    println!("  Name: {}", recipe.package.name);
    println!("  Version: {}", recipe.package.version);
    println!("  Export: {}", recipe.sources.export);

    if !recipe.sources.no_copy_source {
        output.warning("no_copy_source is disabled; export will copy the full source tree");
    }

    Ok(())
}

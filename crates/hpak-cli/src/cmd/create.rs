//! Create command: export and package in one step.

use anyhow::{Context, Result};
use hpak_core::{Packager, Recipe};
use std::path::Path;

use crate::ui::Output;

/// Run export followed by package through a temporary staging directory.
pub fn create(recipe_dir: &Path, out_dir: Option<&Path>, quiet: bool) -> Result<()> {
    let output = Output::new(quiet);
    let recipe = Recipe::load_dir(recipe_dir)
        .with_context(|| format!("Failed to load recipe from {}", recipe_dir.display()))?;
    recipe.validate().context("Invalid recipe")?;

    let (name, version) = recipe.describe();
    output.info(&format!("Creating package {name} {version}"));

    let stage = tempfile::tempdir().context("Failed to create staging directory")?;
    let out = out_dir.map_or_else(
        || super::package::default_out(&recipe),
        Path::to_path_buf,
    );

    let packager = Packager::new(&recipe, recipe_dir);
    let packaged = packager
        .create(stage.path(), &out)
        .with_context(|| format!("Create failed for {name}"))?;

    output.success(&format!("Packaged {}", packaged.display()));
    Ok(())
}

//! Export command: stage a recipe's declared header.

use anyhow::{Context, Result};
use hpak_core::{paths, Packager, Recipe};
use std::path::{Path, PathBuf};

use crate::ui::Output;

/// Export the declared header from `recipe_dir` into a staging directory.
pub fn export(recipe_dir: &Path, stage_dir: Option<&Path>, quiet: bool) -> Result<()> {
    let output = Output::new(quiet);
    let recipe = Recipe::load_dir(recipe_dir)
        .with_context(|| format!("Failed to load recipe from {}", recipe_dir.display()))?;
    recipe.validate().context("Invalid recipe")?;

    let stage = stage_dir.map_or_else(|| default_stage(&recipe), Path::to_path_buf);

    let packager = Packager::new(&recipe, recipe_dir);
    let staged = packager
        .export(&stage)
        .with_context(|| format!("Export failed for {}", recipe.package.name))?;

    output.success(&format!("Exported {}", staged.display()));
    Ok(())
}

/// Staging area keyed by the recipe's identity: ~/.hpak/stage/<name>/<version>
pub(crate) fn default_stage(recipe: &Recipe) -> PathBuf {
    paths::stage_path(&recipe.package.name, &recipe.package.version)
}

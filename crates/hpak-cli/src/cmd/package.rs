//! Package command: copy a staged header into an output package directory.

use anyhow::{Context, Result};
use hpak_core::{paths, Packager, Recipe};
use std::path::{Path, PathBuf};

use crate::ui::Output;

/// Package the staged header for the recipe in `recipe_dir`.
pub fn package(
    recipe_dir: &Path,
    stage_dir: Option<&Path>,
    out_dir: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let output = Output::new(quiet);
    let recipe = Recipe::load_dir(recipe_dir)
        .with_context(|| format!("Failed to load recipe from {}", recipe_dir.display()))?;
    recipe.validate().context("Invalid recipe")?;

    let stage = stage_dir.map_or_else(|| super::export::default_stage(&recipe), Path::to_path_buf);
    let out = out_dir.map_or_else(|| default_out(&recipe), Path::to_path_buf);

    let packager = Packager::new(&recipe, recipe_dir);
    let packaged = packager
        .package(&stage, &out)
        .with_context(|| format!("Packaging failed for {}", recipe.package.name))?;

    output.success(&format!("Packaged {}", packaged.display()));
    Ok(())
}

/// Package output keyed by the recipe's identity: ~/.hpak/packages/<name>/<version>
pub(crate) fn default_out(recipe: &Recipe) -> PathBuf {
    paths::package_path(&recipe.package.name, &recipe.package.version)
}

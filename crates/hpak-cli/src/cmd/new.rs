//! New command: scaffold a recipe template.

use anyhow::Result;
use hpak_core::RECIPE_FILE;
use std::path::Path;

use crate::ui::Output;

/// Create a new recipe template under `<output_dir>/<name>/recipe.toml`.
pub fn new(name: &str, version: &str, header: &str, output_dir: &Path, quiet: bool) -> Result<()> {
    let recipe_dir = output_dir.join(name);
    let path = recipe_dir.join(RECIPE_FILE);

    if path.exists() {
        anyhow::bail!("Recipe already exists: {}", path.display());
    }

    let template = format!(
        r#"[package]
name = "{name}"
version = "{version}"

[sources]
export = "{header}"
no_copy_source = true
"#
    );

    let output = Output::new(quiet);
    std::fs::create_dir_all(&recipe_dir)?;
    std::fs::write(&path, template)?;

    output.success(&format!("Created recipe template: {}", path.display()));
    output.info(&format!(
        "Edit it and run 'hpak check {}' to validate.",
        path.display()
    ));

    Ok(())
}

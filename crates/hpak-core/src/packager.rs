//! Export and package operations.
//!
//! [`Packager`] drives a parsed [`Recipe`] through the two copy actions the
//! descriptor declares:
//!
//! 1. *Export* copies the declared header out of the recipe directory into a
//!    staging directory, preserving its relative path.
//! 2. *Package* copies the staged header into the output package directory.
//!
//! Both actions are stateless, synchronous, and idempotent. Nothing is
//! compiled, linked, or rewritten; the header's bytes pass through verbatim.
//! Existence is checked before any directory is created, so a failed export
//! leaves no partial staging or package tree behind.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::recipe::Recipe;
use crate::types::{PackageName, Version};

/// Errors that can occur while exporting or packaging a recipe.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The declared header does not exist at the expected path. This is the
    /// only domain failure; everything else is ambient I/O.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// An I/O error occurred while copying.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Recursive copy of the source tree failed (`no_copy_source = false` only).
    #[error("Copy failed: {0}")]
    TreeCopy(String),
}

/// Orchestrates the export and package actions for one recipe revision.
#[derive(Debug)]
pub struct Packager<'a> {
    recipe: &'a Recipe,
    recipe_dir: &'a Path,
}

impl<'a> Packager<'a> {
    /// Create a packager for a recipe rooted at `recipe_dir`.
    pub fn new(recipe: &'a Recipe, recipe_dir: &'a Path) -> Self {
        Self { recipe, recipe_dir }
    }

    /// The static name/version pair identifying this package revision.
    pub fn describe(&self) -> (&PackageName, &Version) {
        self.recipe.describe()
    }

    /// Copy the declared header into `stage_dir`, preserving its relative
    /// path. When the recipe sets `no_copy_source = false`, the full recipe
    /// source tree is copied into staging as well.
    ///
    /// Returns the path of the staged header.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::FileNotFound`] if the declared header does not
    /// exist in the recipe directory. The check happens before any staging
    /// directory is created, so a failed export has no side effects.
    pub fn export(&self, stage_dir: &Path) -> Result<PathBuf, ExportError> {
        let export_rel = Path::new(&self.recipe.sources.export);
        let source = self.recipe_dir.join(export_rel);

        if !source.is_file() {
            return Err(ExportError::FileNotFound(source));
        }

        if self.recipe.sources.no_copy_source {
            let staged = stage_dir.join(export_rel);
            if let Some(parent) = staged.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(&source, &staged)?;
            debug!(from = %source.display(), to = %staged.display(), "exported header");
            Ok(staged)
        } else {
            // Full source tree requested: mirror the recipe directory into
            // staging, which carries the declared export along with it.
            fs::create_dir_all(stage_dir)?;
            fs_extra::dir::copy(
                self.recipe_dir,
                stage_dir,
                &fs_extra::dir::CopyOptions::new()
                    .content_only(true)
                    .overwrite(true),
            )
            .map_err(|e| ExportError::TreeCopy(e.to_string()))?;
            debug!(
                from = %self.recipe_dir.display(),
                to = %stage_dir.display(),
                "exported full source tree"
            );
            Ok(stage_dir.join(export_rel))
        }
    }

    /// Copy the staged header from `stage_dir` into `out_dir`, preserving
    /// its relative path (so an `include/foo.hpp` export lands in the
    /// package's `include/` area).
    ///
    /// Returns the path of the packaged header.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::FileNotFound`] if the header is missing from
    /// staging, which means no prior export ran against `stage_dir`.
    pub fn package(&self, stage_dir: &Path, out_dir: &Path) -> Result<PathBuf, ExportError> {
        let export_rel = Path::new(&self.recipe.sources.export);
        let staged = stage_dir.join(export_rel);

        if !staged.is_file() {
            return Err(ExportError::FileNotFound(staged));
        }

        let packaged = out_dir.join(export_rel);
        if let Some(parent) = packaged.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&staged, &packaged)?;
        debug!(from = %staged.display(), to = %packaged.display(), "packaged header");

        Ok(packaged)
    }

    /// Run export followed by package, the common end-to-end path.
    ///
    /// Returns the path of the packaged header.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Packager::export`] and
    /// [`Packager::package`].
    pub fn create(&self, stage_dir: &Path, out_dir: &Path) -> Result<PathBuf, ExportError> {
        self.export(stage_dir)?;
        self.package(stage_dir, out_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;
    use tempfile::tempdir;

    const HEADER_REL: &str = "include/argparse.hpp";

    fn recipe(version: &str, no_copy_source: bool) -> Recipe {
        Recipe::parse(&format!(
            r#"
[package]
name = "argparse"
version = "{version}"

[sources]
export = "{HEADER_REL}"
no_copy_source = {no_copy_source}
"#
        ))
        .unwrap()
    }

    /// Lay out a recipe directory containing the header with the given bytes.
    fn write_header(dir: &Path, content: &str) {
        let header = dir.join(HEADER_REL);
        fs::create_dir_all(header.parent().unwrap()).unwrap();
        fs::write(header, content).unwrap();
    }

    fn count_files(root: &Path) -> usize {
        walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .count()
    }

    #[test]
    fn test_describe_export_package_scenario() {
        // Spec scenario: header contains "X", version 3.0 recipe.
        let src = tempdir().unwrap();
        let stage = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_header(src.path(), "X");

        let recipe = recipe("3.0", true);
        let packager = Packager::new(&recipe, src.path());

        let (name, version) = packager.describe();
        assert_eq!(*name, "argparse");
        assert_eq!(*version, "3.0");

        packager.export(stage.path()).unwrap();
        let packaged = packager.package(stage.path(), out.path()).unwrap();

        assert_eq!(packaged, out.path().join(HEADER_REL));
        assert_eq!(fs::read_to_string(&packaged).unwrap(), "X");
    }

    #[test]
    fn test_export_then_package_is_idempotent() {
        let src = tempdir().unwrap();
        let stage = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_header(src.path(), "#pragma once\n");

        let recipe = recipe("2.7", true);
        let packager = Packager::new(&recipe, src.path());

        let first = packager.create(stage.path(), out.path()).unwrap();
        let bytes_first = fs::read(&first).unwrap();

        let second = packager.create(stage.path(), out.path()).unwrap();
        let bytes_second = fs::read(&second).unwrap();

        assert_eq!(first, second);
        assert_eq!(bytes_first, bytes_second);
        assert_eq!(count_files(out.path()), 1);
    }

    #[test]
    fn test_missing_header_fails_without_side_effects() {
        let src = tempdir().unwrap();
        let scratch = tempdir().unwrap();
        let stage = scratch.path().join("stage");
        let out = scratch.path().join("pkg");

        let recipe = recipe("1.0", true);
        let packager = Packager::new(&recipe, src.path());

        let err = packager.export(&stage).unwrap_err();
        assert!(matches!(err, ExportError::FileNotFound(_)));

        // No staging content was created, and package was never reached.
        assert!(!stage.exists());
        assert!(!out.exists());
    }

    #[test]
    fn test_package_without_export_reports_missing_staged_file() {
        let src = tempdir().unwrap();
        let stage = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_header(src.path(), "X");

        let recipe = recipe("1.0", true);
        let packager = Packager::new(&recipe, src.path());

        let err = packager.package(stage.path(), out.path()).unwrap_err();
        assert!(matches!(err, ExportError::FileNotFound(_)));
    }

    #[test]
    fn test_no_copy_source_stages_only_declared_file() {
        let src = tempdir().unwrap();
        let stage = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_header(src.path(), "X");
        // Extra files in the recipe tree that must NOT be staged or packaged.
        fs::write(src.path().join("README.md"), "docs").unwrap();
        fs::write(src.path().join("include/internal.hpp"), "internal").unwrap();

        let recipe = recipe("3.0", true);
        let packager = Packager::new(&recipe, src.path());
        packager.create(stage.path(), out.path()).unwrap();

        assert_eq!(count_files(stage.path()), 1);
        assert_eq!(count_files(out.path()), 1);
        assert!(out.path().join(HEADER_REL).is_file());
    }

    #[test]
    fn test_copy_source_mirrors_full_tree_into_staging() {
        let src = tempdir().unwrap();
        let stage = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_header(src.path(), "X");
        fs::write(src.path().join("README.md"), "docs").unwrap();

        let recipe = recipe("3.0", false);
        let packager = Packager::new(&recipe, src.path());
        packager.export(stage.path()).unwrap();

        assert!(stage.path().join(HEADER_REL).is_file());
        assert!(stage.path().join("README.md").is_file());

        // Packaging still only picks out the declared header.
        packager.package(stage.path(), out.path()).unwrap();
        assert_eq!(count_files(out.path()), 1);
    }

    #[test]
    fn test_three_recipe_instances_are_independent() {
        // The three shipped revisions differ only in version; each packages
        // on its own with no shared state.
        for version in ["1.0", "2.7", "3.0"] {
            let src = tempdir().unwrap();
            let stage = tempdir().unwrap();
            let out = tempdir().unwrap();
            write_header(src.path(), version);

            let recipe = recipe(version, true);
            let packager = Packager::new(&recipe, src.path());

            let (name, got) = packager.describe();
            assert_eq!(*name, "argparse");
            assert_eq!(*got, *version);

            let packaged = packager.create(stage.path(), out.path()).unwrap();
            assert_eq!(fs::read_to_string(packaged).unwrap(), version);
        }
    }
}

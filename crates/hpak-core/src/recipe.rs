//! TOML recipe parsing.
//!
//! Human-readable package descriptors for header-only libraries. A recipe
//! pins a name/version pair and declares the single header file that gets
//! exported and packaged.

use std::fs;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{PackageName, Version};
use crate::RECIPE_FILE;

/// Errors that can occur when loading or validating a recipe.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// An I/O error occurred while reading a recipe file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML content could not be deserialized into a valid recipe.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required field (name, version, or export path) is empty.
    #[error("Empty field: {0}")]
    EmptyField(&'static str),

    /// The export path is absolute; recipes may only export relative paths.
    #[error("Export path must be relative: {0}")]
    AbsoluteExport(String),

    /// The export path contains `..` components that escape the recipe directory.
    #[error("Export path escapes the recipe directory: {0}")]
    EscapingExport(String),
}

/// Metadata identifying a package revision in the `[package]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageInfo {
    /// Unique name that identifies this package.
    pub name: PackageName,
    /// Version string for the package revision.
    pub version: Version,
}

/// The `[sources]` section: what Export stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sources {
    /// Relative path of the single file to export (e.g. `include/argparse.hpp`).
    pub export: String,
    /// When true (the default), only the declared export is staged; the rest
    /// of the recipe's source tree is never copied.
    #[serde(default = "default_no_copy_source")]
    pub no_copy_source: bool,
}

fn default_no_copy_source() -> bool {
    true
}

/// A parsed `recipe.toml` descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Identity metadata (name, version).
    pub package: PackageInfo,
    /// Export declaration for the header file.
    pub sources: Sources,
}

impl Recipe {
    /// Parse a recipe from a TOML file on disk.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::Io` if the file cannot be read, or
    /// `RecipeError::Parse` if the TOML content is invalid.
    pub fn from_file(path: &Path) -> Result<Self, RecipeError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load the `recipe.toml` inside a recipe directory.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::Io` if the file cannot be read, or
    /// `RecipeError::Parse` if the TOML content is invalid.
    pub fn load_dir(dir: &Path) -> Result<Self, RecipeError> {
        Self::from_file(&dir.join(RECIPE_FILE))
    }

    /// Parse a recipe from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::Parse` if the TOML content is invalid or does
    /// not match the expected schema.
    pub fn parse(content: &str) -> Result<Self, RecipeError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize this recipe to a pretty-printed TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `toml::ser::Error` if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// The static name/version pair identifying this package revision.
    pub fn describe(&self) -> (&PackageName, &Version) {
        (&self.package.name, &self.package.version)
    }

    /// Validate the descriptor's fields.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::EmptyField`] if `name`, `version`, or the
    /// export path is empty, [`RecipeError::AbsoluteExport`] if the export
    /// path is absolute, or [`RecipeError::EscapingExport`] if it contains
    /// `..` components.
    pub fn validate(&self) -> Result<(), RecipeError> {
        if self.package.name.is_empty() {
            return Err(RecipeError::EmptyField("name"));
        }
        if self.package.version.is_empty() {
            return Err(RecipeError::EmptyField("version"));
        }
        if self.sources.export.is_empty() {
            return Err(RecipeError::EmptyField("export"));
        }

        let export = Path::new(&self.sources.export);
        if export.is_absolute() {
            return Err(RecipeError::AbsoluteExport(self.sources.export.clone()));
        }
        if export
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(RecipeError::EscapingExport(self.sources.export.clone()));
        }

        Ok(())
    }
}

impl std::str::FromStr for Recipe {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

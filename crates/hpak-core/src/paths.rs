//! Well-known directories for the hpak tool home.

use dirs::home_dir;
use std::path::PathBuf;

/// Returns the primary tool directory, or None if the user's home cannot be resolved.
pub fn try_hpak_home() -> Option<PathBuf> {
    if let Ok(val) = std::env::var("HPAK_HOME") {
        return Some(PathBuf::from(val));
    }
    home_dir().map(|h| h.join(".hpak"))
}

/// Returns the canonical hpak home directory (`~/.hpak`).
///
/// # Panics
///
/// Panics if neither `HPAK_HOME` is set nor the user's home directory can be
/// resolved.
pub fn hpak_home() -> PathBuf {
    try_hpak_home().expect("Could not determine home directory. Set HPAK_HOME to override.")
}

/// Default staging area: ~/.hpak/stage/<name>/<version>
pub fn stage_path(name: &str, version: &str) -> PathBuf {
    hpak_home().join("stage").join(name).join(version)
}

/// Default package output area: ~/.hpak/packages/<name>/<version>
pub fn package_path(name: &str, version: &str) -> PathBuf {
    hpak_home().join("packages").join(name).join(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_path_nests_name_and_version() {
        let p = stage_path("argparse", "3.0");
        assert!(p.ends_with("stage/argparse/3.0"));
    }
}

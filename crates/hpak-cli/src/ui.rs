//! Terminal output helpers.
//!
//! A thin handle commands use for user-facing status lines. Diagnostic
//! logging goes through `tracing`; this is only the human-readable surface.

/// Handle for printing user-facing status messages.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    quiet: bool,
}

impl Output {
    /// Create a new output handle.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Report a completed action.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("✓ {msg}");
        }
    }

    /// Print an informational line.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {msg}");
        }
    }

    /// Print a warning. Warnings are shown even in quiet mode.
    pub fn warning(&self, msg: &str) {
        eprintln!("! {msg}");
    }
}

//! End-to-end script generation.
//!
//! Builds the package table of a parsed manifest for the target platform,
//! resolves it and renders the script. Generation only fails in strict mode.

use thiserror::Error;
use tracing::info;

use crate::expand::load_packages;
use crate::manifest::Manifest;
use crate::platform::Platform;
use crate::render::render_script;
use crate::resolve::{resolve_packages, unresolved};

/// Errors that can occur during script generation.
#[derive(Debug, Error)]
pub enum GenerateError {
  /// Strict mode: placeholders were left after resolution.
  #[error("no installation method for: {}", .0.join(", "))]
  Unresolved(Vec<String>),
}

/// Options for [`generate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
  /// Fail instead of emitting placeholder comments.
  pub strict: bool,
}

/// A rendered script and what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
  pub text: String,
  /// Number of package blocks in the script.
  pub packages: usize,
  /// Placeholder names left in the script.
  pub unresolved: Vec<String>,
}

/// Generate the install script for a parsed manifest.
pub fn generate(manifest: &Manifest, platform: &Platform, options: GenerateOptions) -> Result<Script, GenerateError> {
  let table = load_packages(manifest, platform);
  let resolved = resolve_packages(&table);
  let remaining: Vec<String> = unresolved(&resolved).into_iter().map(str::to_string).collect();

  if options.strict && !remaining.is_empty() {
    return Err(GenerateError::Unresolved(remaining));
  }

  info!(%platform, packages = resolved.len(), unresolved = remaining.len(), "generated script");

  Ok(Script {
    text: render_script(&resolved),
    packages: resolved.len(),
    unresolved: remaining,
  })
}

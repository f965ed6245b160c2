//! Implementation of the script generation command.
//!
//! Reads a manifest, resolves it for the requested platform and writes the
//! script to stdout or to the `--out` file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use pkgscript_lib::{GenerateOptions, Platform, generate, manifest::Manifest};

use crate::output::{print_success, print_warning};

pub struct GenerateArgs {
  pub manifest: PathBuf,
  pub os: String,
  pub out: Option<PathBuf>,
  pub strict: bool,
}

pub fn cmd_generate(args: &GenerateArgs) -> Result<()> {
  let platform = Platform::parse(&args.os);
  if !platform.is_known() {
    print_warning(&format!(
      "Unknown platform '{}': native package declarations will be skipped",
      platform
    ));
  }

  let manifest = Manifest::from_path(&args.manifest)
    .with_context(|| format!("Failed to load manifest: {}", args.manifest.display()))?;
  debug!(entries = manifest.entries.len(), %platform, "loaded manifest");

  let options = GenerateOptions { strict: args.strict };
  let script = generate(&manifest, &platform, options).context("Failed to generate script")?;

  match &args.out {
    Some(path) => {
      fs::write(path, &script.text).with_context(|| format!("Failed to write script: {}", path.display()))?;

      if !script.unresolved.is_empty() {
        print_warning(&format!(
          "{} package(s) have no installation method: {}",
          script.unresolved.len(),
          script.unresolved.join(", ")
        ));
      }
      print_success(&format!(
        "Wrote {} package(s) for {} to {}",
        script.packages,
        platform,
        path.display()
      ));
    }
    None => println!("{}", script.text),
  }

  Ok(())
}

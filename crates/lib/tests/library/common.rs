//! Shared helpers for library tests.

use pkgscript_lib::expand::load_packages;
use pkgscript_lib::resolve::resolve_packages;
use pkgscript_lib::{GenerateOptions, Manifest, Package, Platform, generate};

/// Render the script for a YAML manifest on `platform`.
pub fn render(yaml: &str, platform: &str) -> String {
  let manifest = Manifest::parse(yaml).unwrap();
  generate(&manifest, &Platform::parse(platform), GenerateOptions::default())
    .unwrap()
    .text
}

/// Resolve a YAML manifest on `platform` into owned packages.
pub fn resolve(yaml: &str, platform: &str) -> Vec<Package> {
  let manifest = Manifest::parse(yaml).unwrap();
  let table = load_packages(&manifest, &Platform::parse(platform));
  resolve_packages(&table).into_iter().cloned().collect()
}

/// Lines of a script after the `set -e` preamble.
pub fn body(script: &str) -> Vec<&str> {
  script.lines().skip(4).collect()
}

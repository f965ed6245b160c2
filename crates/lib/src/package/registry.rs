//! Type-tag dispatch for package construction.
//!
//! The registry is a static table from the manifest `type` tag to a
//! constructor. Lookup never fails: an unknown or missing tag maps to the
//! placeholder constructor. Platform filtering happens inside each
//! constructor, not here.

use tracing::debug;

use crate::manifest::Declaration;
use crate::platform::Platform;

use super::Package;
use super::variants;

/// Builds the packages for one declaration of entry `name` on `platform`.
///
/// The result may be empty (the declaration does not apply to the platform) or
/// hold several packages, dependencies first and the declared package last.
pub type Constructor = fn(name: &str, decl: &Declaration, platform: &Platform) -> Vec<Package>;

static REGISTRY: &[(&str, Constructor)] = &[
  ("dnf", variants::dnf),
  ("apt", variants::apt),
  ("deb", variants::deb),
  ("snap", variants::snap),
  ("snapd", variants::snap),
  ("flatpak", variants::flatpak),
  ("pip", variants::pip),
  ("tarball", variants::tarball),
  ("github", variants::github),
  ("file", variants::file),
  ("shell", variants::shell),
];

/// Look up the constructor for a `type` tag.
pub fn constructor_for(kind: Option<&str>) -> Constructor {
  kind
    .and_then(|kind| REGISTRY.iter().find(|(tag, _)| *tag == kind))
    .map(|(_, constructor)| *constructor)
    .unwrap_or(variants::undefined)
}

/// Construct the packages for a declaration, dispatching on its `type`.
pub fn create(name: &str, decl: &Declaration, platform: &Platform) -> Vec<Package> {
  let packages = constructor_for(decl.kind())(name, decl, platform);
  debug!(
    package = name,
    kind = decl.kind().unwrap_or("<none>"),
    count = packages.len(),
    "constructed declaration"
  );
  packages
}

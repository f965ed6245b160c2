//! Dependency expansion and table construction.
//!
//! `depends_on` items are expanded ahead of the package that declares them:
//!
//! - a bare string becomes a placeholder keyed by that string, resolved later
//!   against the top-level table;
//! - an object is constructed through the registry with the parent's name
//!   (recursively, so it may declare its own dependencies), and each package
//!   it yields is keyed `__<parent>_<i>_<j>` so anonymous dependencies never
//!   collide.
//!
//! Only direct dependencies are guaranteed to precede their dependent here.
//! Ordering across named references is the resolver's job.

use serde_yaml::Value;
use tracing::{debug, warn};

use crate::manifest::{Declaration, Manifest, ManifestEntry, scalar_to_string};
use crate::package::{Package, registry};
use crate::platform::Platform;
use crate::table::PackageTable;

/// Insertion-ordered dependency packages keyed by reference.
///
/// Kept as a plain `Vec` so keys stay in insertion order. Declarations carry a
/// handful of dependencies, so lookups scan the list instead of keeping an
/// index the way [`PackageTable`] does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyMap {
  entries: Vec<(String, Package)>,
}

impl DependencyMap {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert a dependency. An existing key keeps its position and takes the new package.
  pub fn insert(&mut self, key: impl Into<String>, package: Package) {
    let key = key.into();
    match self.entries.iter_mut().find(|(k, _)| *k == key) {
      Some(entry) => entry.1 = package,
      None => self.entries.push((key, package)),
    }
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(|(key, _)| key.as_str())
  }

  pub fn packages(&self) -> impl Iterator<Item = &Package> {
    self.entries.iter().map(|(_, package)| package)
  }

  /// Split into keys and packages, both in insertion order.
  pub fn into_parts(self) -> (Vec<String>, Vec<Package>) {
    self.entries.into_iter().unzip()
  }
}

/// Expand the `depends_on` field of a declaration belonging to entry `name`.
pub fn expand_dependencies(name: &str, decl: &Declaration, platform: &Platform) -> DependencyMap {
  let mut deps = DependencyMap::new();

  for (i, item) in decl.items("depends_on").iter().enumerate() {
    match item {
      Value::Mapping(_) => {
        let dependency = Declaration::from_value(item);
        for (j, package) in registry::create(name, &dependency, platform).into_iter().enumerate() {
          deps.insert(format!("__{}_{}_{}", name, i, j), package);
        }
      }
      other => match scalar_to_string(other) {
        Some(reference) => deps.insert(reference.clone(), Package::undefined(reference)),
        None => warn!(package = name, index = i, "ignoring dependency that is neither a name nor a declaration"),
      },
    }
  }

  deps
}

/// Build the package list for one manifest entry, declarations in order.
pub fn load_entry(entry: &ManifestEntry, platform: &Platform) -> Vec<Package> {
  entry
    .declarations
    .iter()
    .flat_map(|decl| registry::create(&entry.name, decl, platform))
    .collect()
}

/// Build the Named Package Table for a manifest and platform.
///
/// Entries without declarations are left out. Entries whose declarations do
/// not apply to the platform are kept with an empty group.
pub fn load_packages(manifest: &Manifest, platform: &Platform) -> PackageTable {
  let mut table = PackageTable::new();

  for entry in &manifest.entries {
    if entry.declarations.is_empty() {
      debug!(package = %entry.name, "skipping entry without declarations");
      continue;
    }
    table.insert(entry.name.clone(), load_entry(entry, platform));
  }

  debug!(groups = table.len(), %platform, "built package table");
  table
}

//! The Named Package Table.
//!
//! Maps each manifest entry name to the ordered packages built from its
//! declarations. Groups keep insertion order; this order drives the resolver
//! and therefore the order of the rendered script.

use std::collections::HashMap;

use crate::package::Package;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageTable {
  groups: Vec<(String, Vec<Package>)>,
  index: HashMap<String, usize>,
}

impl PackageTable {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert a group. Re-inserting a name replaces its packages in place.
  pub fn insert(&mut self, name: impl Into<String>, packages: Vec<Package>) {
    let name = name.into();
    match self.index.get(&name) {
      Some(&i) => self.groups[i].1 = packages,
      None => {
        self.index.insert(name.clone(), self.groups.len());
        self.groups.push((name, packages));
      }
    }
  }

  /// The packages registered under `name`.
  ///
  /// `Some(&[])` means the entry exists but nothing applies to the platform.
  pub fn get(&self, name: &str) -> Option<&[Package]> {
    self.index.get(name).map(|&i| self.groups[i].1.as_slice())
  }

  /// Groups in insertion order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &[Package])> {
    self.groups.iter().map(|(name, packages)| (name.as_str(), packages.as_slice()))
  }

  pub fn len(&self) -> usize {
    self.groups.len()
  }

  pub fn is_empty(&self) -> bool {
    self.groups.is_empty()
  }
}

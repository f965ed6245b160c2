//! Placeholder resolution and deduplication.
//!
//! The resolver walks the table group by group. A placeholder whose name is
//! a table entry is replaced by that entry's packages, which are resolved in
//! turn, so named dependencies land ahead of their dependents even across
//! several levels. A name already being resolved is not expanded again and
//! keeps its placeholder, which bounds resolution on self-referential
//! manifests. Names missing from the table stay as placeholders.
//!
//! Each group is expanded at most once per pass. Once finished, its packages
//! are already in the output, so later references to it add nothing.
//!
//! The flattened sequence is deduplicated by value, keeping first occurrences.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::package::Package;
use crate::table::PackageTable;

/// State of one resolution pass over a table.
struct Resolution<'a> {
  table: &'a PackageTable,
  /// Groups currently being expanded, innermost last.
  stack: Vec<&'a str>,
  /// Groups fully expanded into `out`.
  done: HashSet<&'a str>,
  out: Vec<&'a Package>,
}

impl<'a> Resolution<'a> {
  fn new(table: &'a PackageTable) -> Self {
    Self {
      table,
      stack: Vec::new(),
      done: HashSet::new(),
      out: Vec::new(),
    }
  }

  fn group(&mut self, name: &'a str, packages: &'a [Package]) {
    self.stack.push(name);
    for package in packages {
      self.package(package);
    }
    self.stack.pop();
    self.done.insert(name);
  }

  fn package(&mut self, package: &'a Package) {
    let Some(name) = package.placeholder_name() else {
      self.out.push(package);
      return;
    };

    if self.done.contains(name) {
      return;
    }
    if self.stack.contains(&name) {
      debug!(package = name, "reference cycle, keeping placeholder");
      self.out.push(package);
      return;
    }

    match self.table.get(name) {
      Some(group) => self.group(name, group),
      None => self.out.push(package),
    }
  }
}

impl Package {
  /// Resolve this package against the table.
  ///
  /// Non-placeholders resolve to themselves. A placeholder resolves to the
  /// packages of the entry it names, or to itself when there is none.
  pub fn resolve<'a>(&'a self, table: &'a PackageTable) -> Vec<&'a Package> {
    let mut resolution = Resolution::new(table);
    resolution.package(self);
    resolution.out
  }
}

/// Flatten the table into one ordered, duplicate-free package sequence.
pub fn resolve_packages(table: &PackageTable) -> Vec<&Package> {
  let mut resolution = Resolution::new(table);
  for (name, group) in table.iter() {
    if !resolution.done.contains(name) {
      resolution.group(name, group);
    }
  }

  let mut seen = HashSet::new();
  let ordered: Vec<&Package> = resolution.out.into_iter().filter(|p| seen.insert(*p)).collect();

  for name in unresolved(&ordered) {
    warn!(package = name, "no installation method for package, leaving placeholder");
  }
  debug!(count = ordered.len(), "resolved packages");

  ordered
}

/// Names of the placeholders left in a resolved sequence.
pub fn unresolved<'a>(packages: &[&'a Package]) -> Vec<&'a str> {
  packages.iter().filter_map(|p| p.placeholder_name()).collect()
}

//! The package model.
//!
//! A [`Package`] is one installable unit produced from a declaration for a
//! single platform. Packages are immutable values with derived structural
//! equality and hashing: two independently declared but identical packages
//! compare equal, which is what lets the resolver collapse them into a single
//! install block.
//!
//! Packages are created through the [`registry`], which maps a declaration's
//! `type` tag to one of the constructors in [`variants`].

pub mod registry;
pub mod variants;

mod install;

use crate::command::Command;

/// How a shell package obtains its script.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShellSource {
  /// Fetch the script from a URL and run it.
  Url(String),
  /// Run an inline script body.
  Script(String),
}

/// The closed set of package kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PackageKind {
  /// Native install with dnf (RedHat family).
  Dnf { packages: Vec<String> },
  /// Native install with apt (Debian family).
  Apt { packages: Vec<String> },
  /// Local `.deb` files downloaded from URLs (Debian family).
  Deb { urls: Vec<String> },
  /// Snap packages.
  Snap { packages: Vec<String> },
  /// Flatpak applications from a remote.
  Flatpak { remote: String, packages: Vec<String> },
  /// Python packages installed with pip.
  Pip { packages: Vec<String> },
  /// A gzipped tarball streamed from a URL and extracted into a directory.
  Tarball {
    url: String,
    destination: String,
    sudo: bool,
  },
  /// A GitHub repository cloned to a temporary directory and built there.
  GitHub { repository: String, install: String },
  /// A single file streamed from a URL to a destination path.
  File {
    url: String,
    destination: String,
    sudo: bool,
  },
  /// A script run with a shell interpreter.
  Shell { shell: String, source: ShellSource },
  /// A named placeholder: an incomplete declaration, an unknown type or a
  /// reference to another manifest entry.
  Undefined { name: String },
}

/// One installable unit with its hooks and dependency references.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Package {
  pub kind: PackageKind,
  /// Commands emitted before the install line, in order.
  pub pre_install: Vec<Command>,
  /// Commands emitted after the install line, in order.
  pub post_install: Vec<Command>,
  /// Extra arguments appended to the install invocation.
  pub flags: Vec<String>,
  /// Keys of the packages this one depends on.
  pub dependencies: Vec<String>,
}

impl Package {
  /// A package with no hooks, flags or dependencies.
  pub fn new(kind: PackageKind) -> Self {
    Self {
      kind,
      pre_install: Vec::new(),
      post_install: Vec::new(),
      flags: Vec::new(),
      dependencies: Vec::new(),
    }
  }

  /// A bare placeholder for `name`.
  pub fn undefined(name: impl Into<String>) -> Self {
    Self::new(PackageKind::Undefined { name: name.into() })
  }

  /// The referenced name, if this package is a placeholder.
  pub fn placeholder_name(&self) -> Option<&str> {
    match &self.kind {
      PackageKind::Undefined { name } => Some(name),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn equality_is_structural() {
    assert_eq!(Package::undefined("snapd"), Package::undefined("snapd"));
    assert_ne!(Package::undefined("snapd"), Package::undefined("flatpak"));
  }

  #[test]
  fn hooks_take_part_in_equality() {
    let plain = Package::new(PackageKind::Apt {
      packages: vec!["git".to_string()],
    });
    let mut hooked = plain.clone();
    hooked.post_install.push(Command::shell("git --version"));
    assert_ne!(plain, hooked);
  }

  #[test]
  fn placeholder_name_only_for_undefined() {
    assert_eq!(Package::undefined("curl").placeholder_name(), Some("curl"));
    let pip = Package::new(PackageKind::Pip { packages: Vec::new() });
    assert_eq!(pip.placeholder_name(), None);
  }
}

//! Constructors for each package kind.
//!
//! Every constructor has the [`Constructor`](super::registry::Constructor)
//! signature and follows the same shape: filter on platform, read the
//! variant's fields, expand `depends_on` and any implicit dependency, then
//! return the dependencies followed by the package itself. Required fields
//! that are missing turn the whole declaration into a single placeholder.

use tracing::warn;

use crate::command::Command;
use crate::expand::{DependencyMap, expand_dependencies};
use crate::manifest::Declaration;
use crate::platform::{Family, Platform};

use super::{Package, PackageKind, ShellSource};

/// Interpreters assumed to be present on every target.
const DEFAULT_SHELLS: &[&str] = &["bash", "sh"];

/// Fields shared by every non-placeholder kind.
struct Common {
  pre_install: Vec<Command>,
  post_install: Vec<Command>,
  flags: Vec<String>,
  deps: DependencyMap,
}

impl Common {
  fn read(name: &str, decl: &Declaration, platform: &Platform) -> Self {
    Self {
      pre_install: Command::list_from(decl, "pre_install"),
      post_install: Command::list_from(decl, "post_install"),
      flags: decl.string_list("flags").unwrap_or_default(),
      deps: expand_dependencies(name, decl, platform),
    }
  }

  /// Dependencies in key order, then the package.
  fn finish(self, kind: PackageKind) -> Vec<Package> {
    let (keys, mut packages) = self.deps.into_parts();
    packages.push(Package {
      kind,
      pre_install: self.pre_install,
      post_install: self.post_install,
      flags: self.flags,
      dependencies: keys,
    });
    packages
  }

  /// Drop `flags` for kinds whose install line has no place for them.
  fn without_flags(mut self) -> Self {
    self.flags.clear();
    self
  }

  /// Record a dependency the kind always needs, such as `snapd` for snaps.
  fn implicit(&mut self, name: &str) {
    self.deps.insert(name, Package::undefined(name));
  }
}

/// `packages` when declared, otherwise the entry name.
fn package_names(name: &str, decl: &Declaration) -> Vec<String> {
  decl.string_list("packages").unwrap_or_else(|| vec![name.to_string()])
}

fn incomplete(name: &str, kind: &str, missing: &str) -> Vec<Package> {
  warn!(package = name, kind, missing, "declaration is missing required fields, emitting placeholder");
  vec![Package::undefined(name)]
}

pub fn dnf(name: &str, decl: &Declaration, platform: &Platform) -> Vec<Package> {
  if !platform.is_family(Family::RedHat) {
    return Vec::new();
  }

  let packages = package_names(name, decl);
  let mut common = Common::read(name, decl, platform);

  if let Some(repofile) = decl.text("repofile") {
    common.pre_install.push(Command::shell(format!(
      "sudo dnf config-manager addrepo --from-repofile={}\n",
      repofile
    )));
  }

  if let Some(repo) = decl.text("repo") {
    common.flags.push(format!("--repo {}", repo));
  }

  common.finish(PackageKind::Dnf { packages })
}

pub fn apt(name: &str, decl: &Declaration, platform: &Platform) -> Vec<Package> {
  if !platform.is_family(Family::Debian) {
    return Vec::new();
  }

  let packages = package_names(name, decl);
  Common::read(name, decl, platform).finish(PackageKind::Apt { packages })
}

pub fn deb(name: &str, decl: &Declaration, platform: &Platform) -> Vec<Package> {
  if !platform.is_family(Family::Debian) {
    return Vec::new();
  }

  let urls = package_names(name, decl);
  Common::read(name, decl, platform).finish(PackageKind::Deb { urls })
}

pub fn snap(name: &str, decl: &Declaration, platform: &Platform) -> Vec<Package> {
  if !platform.is_known() {
    return Vec::new();
  }

  let packages = package_names(name, decl);
  let mut common = Common::read(name, decl, platform);

  if decl.flag("classic") {
    common.flags.push("--classic".to_string());
  }
  common.implicit("snapd");

  common.finish(PackageKind::Snap { packages })
}

pub fn flatpak(name: &str, decl: &Declaration, platform: &Platform) -> Vec<Package> {
  if !platform.is_known() {
    return Vec::new();
  }

  let packages = package_names(name, decl);
  let remote = decl.text("remote").unwrap_or_else(|| "flathub".to_string());
  let mut common = Common::read(name, decl, platform);
  common.implicit("flatpak");

  common.finish(PackageKind::Flatpak { remote, packages })
}

pub fn pip(name: &str, decl: &Declaration, platform: &Platform) -> Vec<Package> {
  let packages = package_names(name, decl);
  let mut common = Common::read(name, decl, platform);
  common.implicit("pip");

  common.finish(PackageKind::Pip { packages })
}

pub fn tarball(name: &str, decl: &Declaration, platform: &Platform) -> Vec<Package> {
  let (Some(url), Some(destination)) = (decl.text("url"), decl.text("destination")) else {
    return incomplete(name, "tarball", "url, destination");
  };

  Common::read(name, decl, platform).without_flags().finish(PackageKind::Tarball {
    url,
    destination,
    sudo: decl.flag("sudo"),
  })
}

pub fn github(name: &str, decl: &Declaration, platform: &Platform) -> Vec<Package> {
  let (Some(repository), Some(install)) = (decl.text("repository"), decl.text("install")) else {
    return incomplete(name, "github", "repository, install");
  };

  Common::read(name, decl, platform)
    .without_flags()
    .finish(PackageKind::GitHub { repository, install })
}

pub fn file(name: &str, decl: &Declaration, platform: &Platform) -> Vec<Package> {
  let (Some(url), Some(destination)) = (decl.text("url"), decl.text("destination")) else {
    return incomplete(name, "file", "url, destination");
  };

  Common::read(name, decl, platform).without_flags().finish(PackageKind::File {
    url,
    destination,
    sudo: decl.flag("sudo"),
  })
}

pub fn shell(name: &str, decl: &Declaration, platform: &Platform) -> Vec<Package> {
  let source = match (decl.text("url"), decl.text("script")) {
    (Some(url), _) => ShellSource::Url(url),
    (None, Some(script)) => ShellSource::Script(script),
    (None, None) => return incomplete(name, "shell", "script or url"),
  };
  let shell = decl.text("shell").unwrap_or_else(|| "bash".to_string());

  let mut common = Common::read(name, decl, platform).without_flags();
  if !DEFAULT_SHELLS.contains(&shell.as_str()) {
    // The interpreter itself has to be installed by some other entry.
    common.implicit(&shell);
  }

  common.finish(PackageKind::Shell { shell, source })
}

/// Fallback for unknown or missing `type` tags.
pub fn undefined(name: &str, decl: &Declaration, _platform: &Platform) -> Vec<Package> {
  if let Some(kind) = decl.get("type") {
    warn!(package = name, kind = ?kind, "unknown package type, emitting placeholder");
  } else {
    warn!(package = name, "declaration has no type, emitting placeholder");
  }
  vec![Package::undefined(name)]
}

//! Target platform selection.
//!
//! Every variant constructor filters on the platform chosen with `--os`. Only
//! the distribution family matters for filtering: native package managers are
//! bound to one family, snap and flatpak to any known family.

use std::fmt;

/// Distribution family sharing one native package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
  /// Fedora, CentOS and RHEL (dnf).
  RedHat,
  /// Ubuntu and Debian (apt).
  Debian,
}

/// The platform a script is generated for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
  Fedora,
  Centos,
  Rhel,
  Ubuntu,
  Debian,
  /// Any other platform name. Accepted, but matches no family.
  Other(String),
}

impl Platform {
  /// Parse a platform name. Matching is case-insensitive and never fails.
  pub fn parse(name: &str) -> Self {
    let name = name.trim().to_lowercase();
    match name.as_str() {
      "fedora" => Self::Fedora,
      "centos" => Self::Centos,
      "rhel" => Self::Rhel,
      "ubuntu" => Self::Ubuntu,
      "debian" => Self::Debian,
      _ => Self::Other(name),
    }
  }

  /// Returns the lowercase platform name
  pub fn as_str(&self) -> &str {
    match self {
      Self::Fedora => "fedora",
      Self::Centos => "centos",
      Self::Rhel => "rhel",
      Self::Ubuntu => "ubuntu",
      Self::Debian => "debian",
      Self::Other(name) => name,
    }
  }

  /// Returns the distribution family, or `None` for unrecognized platforms
  pub fn family(&self) -> Option<Family> {
    match self {
      Self::Fedora | Self::Centos | Self::Rhel => Some(Family::RedHat),
      Self::Ubuntu | Self::Debian => Some(Family::Debian),
      Self::Other(_) => None,
    }
  }

  pub fn is_family(&self, family: Family) -> bool {
    self.family() == Some(family)
  }

  /// True for any platform of a recognized family.
  pub fn is_known(&self) -> bool {
    self.family().is_some()
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

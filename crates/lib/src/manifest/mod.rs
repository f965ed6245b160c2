//! Manifest loading.
//!
//! A manifest is a YAML mapping from package name to an ordered list of
//! declarations. Only the top-level shape is validated here: anything below
//! the declaration level is interpreted best-effort by the variant
//! constructors, so a malformed field never fails a run.
//!
//! ```yaml
//! git:
//!   - apt
//!   - type: dnf
//!     flags: [--refresh]
//! code:
//!   - type: snap
//!     classic: true
//! ```

mod declaration;

pub use declaration::{Declaration, scalar_to_string};

use std::path::{Path, PathBuf};

use serde_yaml::Value;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
  /// The manifest file could not be read.
  #[error("failed to read manifest {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The manifest is not valid YAML.
  #[error("invalid manifest YAML: {0}")]
  Yaml(#[from] serde_yaml::Error),

  /// The document is valid YAML but not a mapping of package names.
  #[error("manifest must be a mapping of package names, found {0}")]
  NotAMapping(&'static str),

  /// A top-level key is not a scalar that can name a package.
  #[error("manifest keys must be package names, found {0}")]
  InvalidKey(&'static str),
}

/// One named manifest entry with its declarations in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestEntry {
  pub name: String,
  pub declarations: Vec<Declaration>,
}

/// A parsed manifest, entries kept in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
  pub entries: Vec<ManifestEntry>,
}

impl Manifest {
  /// Parse a manifest from YAML text.
  ///
  /// An empty document is an empty manifest. A declaration list given as a
  /// single value is treated as a one-element list, and `null` as an empty one.
  pub fn parse(text: &str) -> Result<Self, ManifestError> {
    let document: Value = serde_yaml::from_str(text)?;

    let mapping = match document {
      Value::Mapping(mapping) => mapping,
      Value::Null => return Ok(Self::default()),
      other => return Err(ManifestError::NotAMapping(value_kind(&other))),
    };

    let mut entries = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
      let name = scalar_to_string(&key).ok_or(ManifestError::InvalidKey(value_kind(&key)))?;

      let declarations = match value {
        Value::Sequence(items) => items.iter().map(Declaration::from_value).collect(),
        Value::Null => Vec::new(),
        single => vec![Declaration::from_value(&single)],
      };

      entries.push(ManifestEntry { name, declarations });
    }

    debug!(entries = entries.len(), "parsed manifest");
    Ok(Self { entries })
  }

  /// Read and parse a manifest file.
  pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
    let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::parse(&text)
  }
}

/// Human-readable name of a YAML value's kind, for error messages.
fn value_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Sequence(_) => "a sequence",
    Value::Mapping(_) => "a mapping",
    Value::Tagged(_) => "a tagged value",
  }
}

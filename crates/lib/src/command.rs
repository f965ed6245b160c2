//! Shell fragments attached to packages as pre- and post-install steps.
//!
//! In a manifest, `pre_install` and `post_install` accept a string, a command
//! object or a list of either:
//!
//! ```yaml
//! pre_install:
//!   - echo "plain strings are shell commands"
//!   - type: tee
//!     destination: /etc/apt/sources.list.d/example.list
//!     sudo: true
//!     content: |
//!       deb https://example.com/apt stable main
//! ```

use serde_yaml::Value;
use tracing::warn;

use crate::manifest::Declaration;

/// A renderable shell fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
  /// Literal shell text, emitted verbatim.
  Shell { command: String },
  /// Write `content` to `destination` through `printf | tee`.
  Tee {
    content: String,
    destination: String,
    sudo: bool,
  },
}

impl Command {
  pub fn shell(command: impl Into<String>) -> Self {
    Self::Shell {
      command: command.into(),
    }
  }

  /// Build a command from one manifest item.
  ///
  /// Strings are shell commands. Objects dispatch on `type`; an unknown type or
  /// missing field yields a visible comment rather than failing.
  pub fn from_value(value: &Value) -> Self {
    let decl = match value {
      Value::Mapping(_) => Declaration::from_value(value),
      other => {
        return match crate::manifest::scalar_to_string(other) {
          Some(command) => Self::shell(command),
          None => unsupported(None),
        };
      }
    };

    match decl.kind() {
      Some("shell") => match decl.str("command") {
        Some(command) => Self::shell(command),
        None => unsupported(Some("shell")),
      },
      Some("tee") => match (decl.str("content"), decl.str("destination")) {
        (Some(content), Some(destination)) => Self::Tee {
          content: content.to_string(),
          destination: destination.to_string(),
          sudo: decl.flag("sudo"),
        },
        _ => unsupported(Some("tee")),
      },
      kind => unsupported(kind),
    }
  }

  /// Build the command list for a `pre_install` or `post_install` field.
  pub fn list_from(decl: &Declaration, key: &str) -> Vec<Self> {
    decl.items(key).iter().map(Self::from_value).collect()
  }

  /// Render as shell text.
  pub fn render(&self) -> String {
    match self {
      Self::Shell { command } => command.clone(),
      Self::Tee {
        content,
        destination,
        sudo,
      } => {
        // One quoted printf argument per line keeps quoting out of here-docs.
        let lines = content.strip_suffix('\n').unwrap_or(content).replace('\n', "\" \"");
        let sudo = if *sudo { "sudo " } else { "" };
        format!("printf \"%s\\n\" \"{}\" | {}tee {}\n", lines, sudo, destination)
      }
    }
  }
}

fn unsupported(kind: Option<&str>) -> Command {
  warn!(kind = kind.unwrap_or("<none>"), "unsupported command declaration");
  Command::shell("# TODO: unsupported command declaration")
}

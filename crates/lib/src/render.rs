//! Script rendering.

use crate::package::Package;

/// Interpreter line of every generated script.
pub const SHEBANG: &str = "#!/bin/bash";

/// Render one package block: pre-install commands, install line, post-install commands.
pub fn render_package(package: &Package) -> String {
  let mut block = String::new();

  for command in &package.pre_install {
    block.push_str(&command.render());
    block.push('\n');
  }

  block.push_str(&package.install_line());
  block.push('\n');

  for command in &package.post_install {
    block.push('\n');
    block.push_str(&command.render());
  }

  block
}

/// Render the full script for a resolved package sequence.
///
/// Blocks follow the `set -e` preamble in the given order, separated by a
/// blank line. Surrounding whitespace is trimmed from the result.
pub fn render_script(packages: &[&Package]) -> String {
  let mut parts = vec![SHEBANG.to_string(), String::new(), "set -e".to_string(), String::new()];
  parts.extend(packages.iter().map(|p| render_package(p)));
  parts.join("\n").trim().to_string()
}

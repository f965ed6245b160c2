//! Install-line templates, one per package kind.

use super::{Package, PackageKind, ShellSource};

impl Package {
  /// Render the package's own install action, without hooks.
  pub fn install_line(&self) -> String {
    let flags = self.flags.join(" ");

    match &self.kind {
      PackageKind::Dnf { packages } => {
        format!("sudo dnf install -y {} {}", packages.join(" "), flags).trim().to_string()
      }
      PackageKind::Apt { packages } => {
        format!("sudo apt-get install -y {} {}", packages.join(" "), flags).trim().to_string()
      }
      PackageKind::Deb { urls } => urls
        .iter()
        .flat_map(|url| {
          [
            "TMP_FILE=$(mktemp)".to_string(),
            format!("wget -O $TMP_FILE {}", url),
            format!("sudo apt-get install -y $TMP_FILE {}", flags).trim_end().to_string(),
            "rm $TMP_FILE".to_string(),
          ]
        })
        .collect::<Vec<_>>()
        .join("\n"),
      PackageKind::Snap { packages } => {
        format!("sudo snap install {} {}", packages.join(" "), flags).trim().to_string()
      }
      PackageKind::Flatpak { remote, packages } => {
        format!("flatpak install -y {} {} {}", remote, packages.join(" "), flags)
          .trim()
          .to_string()
      }
      PackageKind::Pip { packages } => {
        format!("pip install -U {} {}", packages.join(" "), flags).trim().to_string()
      }
      PackageKind::Tarball {
        url,
        destination,
        sudo,
      } => format!("curl -fsSL \"{}\" | {}tar xzvC {}", url, sudo_prefix(*sudo), destination),
      PackageKind::File {
        url,
        destination,
        sudo,
      } => format!("curl -fsSL \"{}\" | {}tee {}", url, sudo_prefix(*sudo), destination),
      PackageKind::GitHub { repository, install } => {
        let mut lines = vec![
          "TMP_DIR=$(mktemp -d)".to_string(),
          format!("git clone https://github.com/{}.git $TMP_DIR", repository),
          "(".to_string(),
          "  cd $TMP_DIR".to_string(),
        ];
        lines.extend(install.lines().map(|line| format!("  {}", line)));
        lines.push(")".to_string());
        lines.push("rm -rf $TMP_DIR".to_string());
        lines.join("\n")
      }
      PackageKind::Shell { shell, source } => match source {
        ShellSource::Url(url) => format!("{} -c \"$(curl -fsSL \"{}\")\"", shell, url),
        ShellSource::Script(script) => {
          let newline = if script.ends_with('\n') { "" } else { "\n" };
          format!("{} <<'EOF'\n{}{}EOF", shell, script, newline)
        }
      },
      PackageKind::Undefined { name } => {
        format!("# TODO: Add installation command for package: {}", name)
      }
    }
  }
}

fn sudo_prefix(sudo: bool) -> &'static str {
  if sudo { "sudo " } else { "" }
}

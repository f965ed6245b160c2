//! Platform filtering across declaration types.

use pkgscript_lib::PackageKind;

use super::common::{body, render, resolve};

#[test]
fn dnf_declaration_depends_on_platform() {
  assert!(resolve("git: [dnf]", "ubuntu").is_empty());

  let fedora = resolve("git: [dnf]", "fedora");
  assert_eq!(fedora.len(), 1);
  assert!(matches!(fedora[0].kind, PackageKind::Dnf { .. }));
}

#[test]
fn apt_and_deb_only_on_debian_family() {
  let yaml = "tool:\n  - type: deb\n    packages: [https://x/tool.deb]\n";
  assert!(resolve(yaml, "centos").is_empty());
  assert_eq!(resolve(yaml, "debian").len(), 1);
}

#[test]
fn same_manifest_differs_per_family() {
  let yaml = "git:\n  - apt\n  - dnf\n";
  assert_eq!(body(&render(yaml, "ubuntu")), ["sudo apt-get install -y git"]);
  assert_eq!(body(&render(yaml, "rhel")), ["sudo dnf install -y git"]);
}

#[test]
fn url_based_types_apply_everywhere() {
  let yaml = "\
tool:
  - type: file
    url: https://x/tool
    destination: /usr/local/bin/tool
    sudo: true
";
  for platform in ["fedora", "ubuntu", "arch"] {
    assert_eq!(
      body(&render(yaml, platform)),
      ["curl -fsSL \"https://x/tool\" | sudo tee /usr/local/bin/tool"],
      "{}",
      platform
    );
  }
}

//! Value-based deduplication.

use super::common::{body, render};

#[test]
fn two_entries_sharing_a_bare_dependency() {
  let yaml = "\
a:
  - type: apt
    depends_on: [curl]
b:
  - type: apt
    depends_on: [curl]
";
  let script = render(yaml, "ubuntu");
  assert_eq!(script.matches("package: curl").count(), 1);
}

#[test]
fn two_snaps_install_snapd_once() {
  let yaml = "\
snapd: [apt]
code:
  - type: snap
    classic: true
spotify: [snap]
";
  assert_eq!(
    body(&render(yaml, "ubuntu")),
    [
      "sudo apt-get install -y snapd",
      "",
      "sudo snap install code --classic",
      "",
      "sudo snap install spotify",
    ]
  );
}

#[test]
fn identical_inline_dependencies_collapse() {
  let yaml = "\
a:
  - type: pip
    depends_on:
      - type: apt
        packages: [python3-pip]
b:
  - type: pip
    depends_on:
      - type: apt
        packages: [python3-pip]
";
  let script = render(yaml, "debian");
  assert_eq!(script.matches("sudo apt-get install -y python3-pip").count(), 1);
  assert_eq!(script.matches("package: pip").count(), 1);
}

#[test]
fn packages_differing_in_hooks_are_kept() {
  let yaml = "\
a:
  - type: apt
    packages: [git]
b:
  - type: apt
    packages: [git]
    post_install: git --version
";
  let script = render(yaml, "ubuntu");
  assert_eq!(script.matches("sudo apt-get install -y git").count(), 2);
}

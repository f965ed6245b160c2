//! Placeholder resolution and ordering.

use pkgscript_lib::Package;

use super::common::{body, render, resolve};

#[test]
fn snap_without_dependencies_yields_snapd_then_snap() {
  let resolved = resolve("code: [snap]", "ubuntu");
  assert_eq!(resolved.len(), 2);
  assert_eq!(resolved[0], Package::undefined("snapd"));
  assert_eq!(resolved[1].install_line(), "sudo snap install code");
}

#[test]
fn forward_reference_resolves_to_later_entry() {
  let yaml = "\
app:
  - type: apt
    depends_on: [foo]
foo:
  - type: apt
    packages: [foo-bin]
";
  assert_eq!(
    body(&render(yaml, "ubuntu")),
    ["sudo apt-get install -y foo-bin", "", "sudo apt-get install -y app"]
  );
}

#[test]
fn missing_reference_stays_a_stub() {
  let yaml = "\
app:
  - type: apt
    depends_on: [foo]
";
  assert_eq!(
    body(&render(yaml, "ubuntu")),
    [
      "# TODO: Add installation command for package: foo",
      "",
      "sudo apt-get install -y app",
    ]
  );
}

#[test]
fn flatpak_with_custom_remote() {
  let yaml = "\
flatpak: [apt]
app:
  - type: flatpak
    remote: custom
    packages: [org.app]
";
  assert_eq!(body(&render(yaml, "fedora")), ["flatpak install -y custom org.app"]);
  assert!(render(yaml, "ubuntu").contains("sudo apt-get install -y flatpak\n\nflatpak install -y custom org.app"));
}

#[test]
fn shell_interpreter_resolves_against_manifest() {
  let yaml = "\
zsh: [apt]
ohmyzsh:
  - type: shell
    shell: zsh
    script: |
      echo installing
";
  assert_eq!(
    body(&render(yaml, "ubuntu")),
    [
      "sudo apt-get install -y zsh",
      "",
      "zsh <<'EOF'",
      "echo installing",
      "EOF",
    ]
  );
}

#[test]
fn hooks_surround_install_line() {
  let yaml = "\
docker:
  - type: apt
    packages: [docker.io]
    pre_install:
      - sudo apt-get update
    post_install:
      - sudo systemctl enable --now docker
      - sudo usermod -aG docker $USER
";
  assert_eq!(
    body(&render(yaml, "ubuntu")),
    [
      "sudo apt-get update",
      "sudo apt-get install -y docker.io",
      "",
      "sudo systemctl enable --now docker",
      "sudo usermod -aG docker $USER",
    ]
  );
}

#[test]
fn declarations_keep_manifest_order() {
  let yaml = "zsh: [apt]\nbash: [apt]\ncurl: [apt]\n";
  let rendered = render(yaml, "ubuntu");
  let lines: Vec<_> = body(&rendered).into_iter().filter(|l| !l.is_empty()).collect();
  assert_eq!(
    lines,
    [
      "sudo apt-get install -y zsh",
      "sudo apt-get install -y bash",
      "sudo apt-get install -y curl",
    ]
  );
}

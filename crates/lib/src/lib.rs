//! pkgscript-lib: install script generation from package manifests.
//!
//! A manifest declares named packages, each with one or more ways to install
//! it (`apt`, `dnf`, `snap`, `flatpak`, `pip`, `deb`, `tarball`, `file`,
//! `github`, `shell`). For a target platform the library:
//!
//! 1. builds every declaration that applies to the platform into [`Package`]s,
//!    expanding `depends_on` ahead of the declaring package ([`expand`]);
//! 2. resolves placeholders against the named entries and removes duplicates
//!    ([`resolve`]);
//! 3. renders the ordered packages as a bash script ([`render`]).
//!
//! [`generate::generate`] runs all three steps.

pub mod command;
pub mod expand;
pub mod generate;
pub mod manifest;
pub mod package;
pub mod platform;
pub mod render;
pub mod resolve;
pub mod table;

pub use generate::{GenerateError, GenerateOptions, Script, generate};
pub use manifest::{Manifest, ManifestError};
pub use package::{Package, PackageKind};
pub use platform::Platform;

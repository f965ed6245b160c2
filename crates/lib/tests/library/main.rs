//! Integration tests for pkgscript-lib.

mod common;
mod dedup_tests;
mod platform_tests;
mod resolution_tests;

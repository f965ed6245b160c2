mod cmd;
mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cmd::{GenerateArgs, cmd_generate};

/// Generate an install script for one platform from a package manifest
#[derive(Parser)]
#[command(name = "pkgscript")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Path to the YAML package manifest
  manifest: PathBuf,

  /// Target platform (fedora, centos, rhel, ubuntu, debian)
  #[arg(long = "os", env = "PKGSCRIPT_OS")]
  os: String,

  /// Write the script to this file instead of stdout
  #[arg(short, long)]
  out: Option<PathBuf>,

  /// Fail if any package has no installation method
  #[arg(long)]
  strict: bool,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,
}

fn main() {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .with_target(false)
    .init();

  let args = GenerateArgs {
    manifest: cli.manifest,
    os: cli.os,
    out: cli.out,
    strict: cli.strict,
  };

  if let Err(err) = cmd_generate(&args) {
    output::print_error(&format!("{:#}", err));
    std::process::exit(1);
  }
}

mod builder;

pub use builder::{BuildError, Builder, CargoBuilder, executables_from_messages, manifest_path};

use clap::Parser;
use sitekit_core::build::STATIC_BUILD_FLAG;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "sitebuild",
    version,
    about = "Compile a sitekit program and generate its static site",
    long_about = "Compiles the package at PACKAGE_PATH, runs the resulting binary with \
                  --ssr-static-build <DIR> and exits with the binary's exit code. The program \
                  must call sitekit_core::build::auto_build right after registering its modules."
)]
pub struct Cli {
    /// Directory the static site is written to
    #[arg(short = 'o', long = "out", value_name = "DIR", default_value = "dist")]
    pub out: PathBuf,

    /// Binary target to run when the package builds several
    #[arg(long, value_name = "NAME")]
    pub bin: Option<String>,

    /// Package directory or Cargo.toml of the program to build
    #[arg(value_name = "PACKAGE_PATH")]
    pub package: PathBuf,
}

/// Parses `args` (including the program name) and runs the build.
/// Returns the process exit code.
pub fn run<B, I, T>(builder: &B, args: I) -> i32
where
    B: Builder,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(normalize_args(args)) {
        Ok(cli) => execute(builder, &cli),
        Err(err) => {
            let _ = err.print();
            // Help and version go to stdout and are not failures.
            if err.use_stderr() { 1 } else { 0 }
        }
    }
}

/// Single-dash long form accepted by older scripts.
const LEGACY_OUT_FLAG: &str = "-out";

/// Rewrites `-out` to `--out`. Clap would otherwise read it as `-o ut`.
fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if arg == LEGACY_OUT_FLAG {
                OsString::from("--out")
            } else {
                arg
            }
        })
        .collect()
}

pub fn execute<B: Builder>(builder: &B, cli: &Cli) -> i32 {
    let target_dir = match tempfile::Builder::new().prefix("sitebuild-").tempdir() {
        Ok(dir) => dir,
        Err(e) => {
            error!("sitebuild: failed to create temp dir: {}", e);
            return 1;
        }
    };

    info!("sitebuild: compiling {}", cli.package.display());
    let binary = match builder.build(&cli.package, target_dir.path(), cli.bin.as_deref()) {
        Ok(binary) => binary,
        Err(e) => {
            error!("sitebuild: build failed: {}", e);
            return 1;
        }
    };

    info!("sitebuild: generating static site to {}", cli.out.display());
    let args = [
        OsString::from(STATIC_BUILD_FLAG),
        cli.out.clone().into_os_string(),
    ];
    match builder.run(&binary, &args) {
        Ok(0) => {
            info!("sitebuild: done → {}", cli.out.display());
            0
        }
        Ok(code) => {
            error!("sitebuild: static build failed with exit code {}", code);
            code
        }
        Err(e) => {
            error!("sitebuild: static build failed: {}", e);
            1
        }
    }
}

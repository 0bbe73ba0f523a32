//! Compiling and running the target program.

use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cargo build failed (exit code {0:?})")]
    CompilationFailed(Option<i32>),
    #[error("no executable produced for {0}")]
    NoExecutable(String),
    #[error("several executables produced ({0}), pick one with --bin")]
    AmbiguousExecutable(String),
    #[error("process terminated by signal")]
    Terminated,
}

/// Compiles a package and runs the resulting binary.
pub trait Builder {
    /// Builds `package` into `target_dir` and returns the executable path.
    fn build(&self, package: &Path, target_dir: &Path, bin: Option<&str>)
    -> Result<PathBuf, BuildError>;

    /// Runs `binary` with `args`, returning its exit code.
    fn run(&self, binary: &Path, args: &[OsString]) -> Result<i32, BuildError>;
}

/// [`Builder`] backed by `cargo build`.
pub struct CargoBuilder {
    cargo: OsString,
}

impl Default for CargoBuilder {
    fn default() -> Self {
        // Inside `cargo run` this points at the same toolchain.
        let cargo = std::env::var_os("CARGO").unwrap_or_else(|| OsString::from("cargo"));
        Self { cargo }
    }
}

impl Builder for CargoBuilder {
    fn build(
        &self,
        package: &Path,
        target_dir: &Path,
        bin: Option<&str>,
    ) -> Result<PathBuf, BuildError> {
        let manifest = manifest_path(package);
        let mut cmd = Command::new(&self.cargo);
        cmd.arg("build")
            .arg("--manifest-path")
            .arg(&manifest)
            .arg("--target-dir")
            .arg(target_dir)
            .arg("--message-format=json-render-diagnostics");
        if let Some(bin) = bin {
            cmd.arg("--bin").arg(bin);
        }
        cmd.stdout(Stdio::piped()).stderr(Stdio::inherit());

        tracing::debug!("Running {:?}", cmd);
        let output = cmd.output()?;
        if !output.status.success() {
            return Err(BuildError::CompilationFailed(output.status.code()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut executables = executables_from_messages(&stdout);
        if let Some(bin) = bin {
            executables.retain(|(name, _)| name == bin);
        }

        match executables.len() {
            0 => Err(BuildError::NoExecutable(manifest.display().to_string())),
            1 => Ok(executables.remove(0).1),
            _ => {
                let names: Vec<_> = executables.into_iter().map(|(name, _)| name).collect();
                Err(BuildError::AmbiguousExecutable(names.join(", ")))
            }
        }
    }

    fn run(&self, binary: &Path, args: &[OsString]) -> Result<i32, BuildError> {
        let status = Command::new(binary).args(args).status()?;
        status.code().ok_or(BuildError::Terminated)
    }
}

/// Accepts either a package directory or its `Cargo.toml`.
pub fn manifest_path(package: &Path) -> PathBuf {
    if package.file_name().is_some_and(|name| name == "Cargo.toml") {
        package.to_path_buf()
    } else {
        package.join("Cargo.toml")
    }
}

#[derive(Deserialize)]
struct CargoMessage {
    reason: String,
    #[serde(default)]
    target: Option<CargoTarget>,
    #[serde(default)]
    executable: Option<PathBuf>,
}

#[derive(Deserialize)]
struct CargoTarget {
    name: String,
    #[serde(default)]
    kind: Vec<String>,
}

/// Binary targets and their paths from `--message-format=json` output.
pub fn executables_from_messages(stdout: &str) -> Vec<(String, PathBuf)> {
    stdout
        .lines()
        .filter_map(|line| serde_json::from_str::<CargoMessage>(line).ok())
        .filter(|msg| msg.reason == "compiler-artifact")
        .filter_map(|msg| {
            let target = msg.target?;
            let executable = msg.executable?;
            target
                .kind
                .iter()
                .any(|k| k == "bin")
                .then_some((target.name, executable))
        })
        .collect()
}

//! One-shot static build: aggregate the site and write it to a directory.
//!
//! A program calls [`auto_build`] right after building its [`SiteContext`];
//! the `sitebuild` tool runs it with `--ssr-static-build <dir>`.

use crate::error::Result;
use crate::site::SiteContext;
use crate::ssr::{AggregatedDocument, Aggregator, AssetLinking};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

pub const STATIC_BUILD_FLAG: &str = "--ssr-static-build";

pub const INDEX_FILE: &str = "index.html";
pub const STYLESHEET_FILE: &str = "style.css";
pub const SCRIPT_FILE: &str = "script.js";
pub const SPRITE_FILE: &str = "icons.svg";

/// Files written by a static build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Directory following [`STATIC_BUILD_FLAG`] in `args`, if any.
pub fn static_build_dir<I, S>(args: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        if arg == STATIC_BUILD_FLAG {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

/// Aggregates the site and writes the page and its assets into `output_dir`.
///
/// Nothing is written unless aggregation succeeds.
pub fn build_static(context: Arc<SiteContext>, output_dir: &Path) -> Result<BuildReport> {
    let document = Aggregator::new(context).aggregate()?;
    write_document(&document, output_dir)
}

pub fn write_document(document: &AggregatedDocument, output_dir: &Path) -> Result<BuildReport> {
    std::fs::create_dir_all(output_dir)?;

    let page = document.render_page(&AssetLinking::External {
        stylesheet: STYLESHEET_FILE.to_string(),
        script: SCRIPT_FILE.to_string(),
    });

    let outputs = [
        (INDEX_FILE, page),
        (STYLESHEET_FILE, document.stylesheet()),
        (SCRIPT_FILE, document.script()),
        (SPRITE_FILE, document.sprite()),
    ];

    let mut files = Vec::with_capacity(outputs.len());
    for (name, content) in outputs {
        let path = output_dir.join(name);
        std::fs::write(&path, content)?;
        files.push(path);
    }

    info!("Static build written to {}", output_dir.display());
    Ok(BuildReport {
        output_dir: output_dir.to_path_buf(),
        files,
    })
}

/// Runs a static build when `args` carry [`STATIC_BUILD_FLAG`].
///
/// Returns `Ok(true)` when a build ran and the caller should exit, `Ok(false)`
/// when the flag is absent.
///
/// ```ignore
/// let site = SiteBuilder::new(SiteConfig::from_env()).register_all(modules()).build()?;
/// if auto_build(site.clone(), std::env::args_os())? {
///     return Ok(());
/// }
/// ```
pub fn auto_build<I, S>(context: Arc<SiteContext>, args: I) -> Result<bool>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    match static_build_dir(args) {
        Some(dir) => {
            build_static(context, &dir)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_build_dir() {
        assert_eq!(
            static_build_dir(["app", "--ssr-static-build", "dist"]),
            Some(PathBuf::from("dist"))
        );
        assert_eq!(static_build_dir(["app", "--ssr-static-build"]), None);
        assert_eq!(static_build_dir(["app", "-dev"]), None);
    }
}

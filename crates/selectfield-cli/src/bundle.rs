//! Library bundling: wasm-pack build, stylesheet and package.json.

use crate::config::BundleManifest;
use selectfield_core::Stylesheet;
use serde_json::{json, Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Bundling error.
#[derive(Debug, Error)]
pub enum BundleError {
    /// Filesystem operation failed
    #[error("{path}: {source}")]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },
    /// External tool could not be started
    #[error("failed to run {tool}: {source}")]
    Spawn {
        /// Tool name
        tool: &'static str,
        /// Underlying error
        source: io::Error,
    },
    /// External tool exited unsuccessfully
    #[error("{tool} failed ({status})")]
    Tool {
        /// Tool name
        tool: &'static str,
        /// Exit status
        status: std::process::ExitStatus,
    },
    /// package.json could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> BundleError + '_ {
    move |source| BundleError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Bundle flags from the command line.
#[derive(Debug, Clone)]
pub struct BundleOptions {
    /// Output directory
    pub output: PathBuf,
    /// Skip the wasm-pack build
    pub skip_wasm: bool,
    /// Run wasm-opt on the module
    pub optimize: bool,
}

/// Files produced by a bundle run.
#[derive(Debug, Clone, Default)]
pub struct BundleReport {
    /// Stylesheets, relative to the output directory
    pub css_files: Vec<String>,
    /// package.json path
    pub package_json: PathBuf,
    /// Size of the wasm module, when one was built
    pub wasm_size: Option<u64>,
}

/// Produce the library bundle in `options.output`.
pub fn run(
    manifest: &BundleManifest,
    sheets: &[Stylesheet],
    options: &BundleOptions,
) -> Result<BundleReport, BundleError> {
    fs::create_dir_all(&options.output).map_err(io_error(&options.output))?;

    let mut report = BundleReport::default();
    if !options.skip_wasm {
        build_wasm(manifest, &options.output)?;
        let wasm_file = wasm_path(manifest, &options.output);
        if options.optimize {
            optimize_wasm(&wasm_file);
        }
        report.wasm_size = fs::metadata(&wasm_file).map(|m| m.len()).ok();
    }

    report.css_files = write_styles(manifest, sheets, &options.output)?;
    report.package_json = write_package_json(manifest, &report.css_files, &options.output)?;
    info!(output = %options.output.display(), css = report.css_files.len(), "bundle written");
    Ok(report)
}

/// Path of the wasm module wasm-pack emits for `manifest`.
pub fn wasm_path(manifest: &BundleManifest, output: &Path) -> PathBuf {
    output.join(format!("{}_bg.wasm", manifest.file_name))
}

fn build_wasm(manifest: &BundleManifest, output: &Path) -> Result<(), BundleError> {
    // wasm-pack resolves --out-dir against the crate, not the cwd.
    let out_dir = fs::canonicalize(output).map_err(io_error(output))?;
    debug!(entry = %manifest.entry.display(), out_dir = %out_dir.display(), "running wasm-pack");

    let status = Command::new("wasm-pack")
        .arg("build")
        .arg(&manifest.entry)
        .args(["--target", "web", "--release", "--out-dir"])
        .arg(&out_dir)
        .args(["--out-name", manifest.file_name.as_str()])
        .status()
        .map_err(|source| BundleError::Spawn {
            tool: "wasm-pack",
            source,
        })?;

    if !status.success() {
        return Err(BundleError::Tool {
            tool: "wasm-pack",
            status,
        });
    }
    Ok(())
}

/// Shrink the module in place; a missing or failing wasm-opt keeps the
/// unoptimized module.
fn optimize_wasm(wasm_file: &Path) {
    if !wasm_file.exists() {
        return;
    }
    match Command::new("wasm-opt")
        .args(["-Oz", "-o"])
        .arg(wasm_file)
        .arg(wasm_file)
        .status()
    {
        Ok(status) if status.success() => debug!("wasm-opt finished"),
        Ok(status) => warn!(%status, "wasm-opt failed, keeping unoptimized module"),
        Err(err) => warn!(%err, "wasm-opt not available, keeping unoptimized module"),
    }
}

/// Write stylesheets: one combined `<file_name>.css` unless code splitting
/// is on, in which case one `<scope>.css` per sheet.
pub fn write_styles(
    manifest: &BundleManifest,
    sheets: &[Stylesheet],
    output: &Path,
) -> Result<Vec<String>, BundleError> {
    let files: Vec<(String, String)> = if manifest.css_code_split {
        sheets
            .iter()
            .map(|sheet| (format!("{}.css", sheet.scope()), sheet.to_css()))
            .collect()
    } else {
        vec![(
            format!("{}.css", manifest.file_name),
            Stylesheet::combine(sheets),
        )]
    };

    for (name, css) in &files {
        let path = output.join(name);
        fs::write(&path, css).map_err(io_error(&path))?;
    }
    Ok(files.into_iter().map(|(name, _)| name).collect())
}

/// package.json contents for the bundle.
pub fn package_json(manifest: &BundleManifest, css_files: &[String]) -> Value {
    let main = format!("{}.js", manifest.file_name);
    let types = format!("{}.d.ts", manifest.file_name);
    let wasm = format!("{}_bg.wasm", manifest.file_name);

    let mut files = vec![main.clone(), types.clone(), wasm];
    files.extend(css_files.iter().cloned());

    let peers: Map<String, Value> = manifest
        .externals
        .iter()
        .map(|ext| (ext.package.clone(), Value::String(ext.version.clone())))
        .collect();

    let mut pkg = json!({
        "name": manifest.file_name,
        "description": format!("{} dropdown component", manifest.name),
        "version": manifest.version,
        "type": "module",
        "main": main,
        "module": main,
        "types": types,
        "files": files,
        "sideEffects": css_files,
    });
    if let Some(style) = css_files.first() {
        pkg["style"] = Value::String(style.clone());
    }
    if !peers.is_empty() {
        pkg["peerDependencies"] = Value::Object(peers);
    }
    pkg
}

fn write_package_json(
    manifest: &BundleManifest,
    css_files: &[String],
    output: &Path,
) -> Result<PathBuf, BundleError> {
    let path = output.join("package.json");
    let mut text = serde_json::to_string_pretty(&package_json(manifest, css_files))?;
    text.push('\n');
    fs::write(&path, text).map_err(io_error(&path))?;
    Ok(path)
}

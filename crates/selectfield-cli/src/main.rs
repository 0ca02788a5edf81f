//! selectfield CLI - check manifests and bundle the component library.

#![allow(
    clippy::needless_pass_by_value,
    clippy::uninlined_format_args,
    clippy::unwrap_used,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::doc_markdown,
    unreachable_pub
)]

mod bundle;
mod config;

use bundle::{BundleOptions, BundleReport};
use clap::{Parser, Subcommand};
use config::{BundleManifest, DEFAULT_MANIFEST};
use selectfield_widgets::SelectField;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "selectfield")]
#[command(about = "Dropdown select component CLI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the library bundle
    Bundle {
        /// Path to manifest file
        #[arg(short, long, default_value = DEFAULT_MANIFEST)]
        manifest: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,

        /// Only write stylesheets and package.json
        #[arg(long)]
        skip_wasm: bool,

        /// Skip wasm-opt optimization
        #[arg(long)]
        no_optimize: bool,
    },

    /// Check bundle manifest validity
    Check {
        /// Path to manifest file
        #[arg(default_value = DEFAULT_MANIFEST)]
        manifest: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bundle {
            manifest,
            output,
            skip_wasm,
            no_optimize,
        } => {
            let options = BundleOptions {
                output,
                skip_wasm,
                optimize: !no_optimize,
            };
            run_bundle(&manifest, &options);
        }
        Commands::Check { manifest } => {
            check_manifest(&manifest);
        }
    }
}

fn load_manifest(path: &Path) -> BundleManifest {
    let manifest = match BundleManifest::load_or_default(path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Manifest invalid: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = manifest.validate() {
        eprintln!("Manifest invalid: {}", e);
        std::process::exit(1);
    }
    manifest
}

fn run_bundle(path: &Path, options: &BundleOptions) {
    let manifest = load_manifest(path);
    println!("Building {} bundle...", manifest.name);

    let sheets = [SelectField::stylesheet()];
    match bundle::run(&manifest, &sheets, options) {
        Ok(report) => print_report(&options.output, &report),
        Err(e) => {
            eprintln!("Bundle failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_report(output: &Path, report: &BundleReport) {
    println!();
    println!("Bundle built successfully!");
    println!("  Output: {}", output.display());
    for css in &report.css_files {
        println!("  Stylesheet: {}", css);
    }
    println!("  Package: {}", report.package_json.display());
    if let Some(size) = report.wasm_size {
        println!("  WASM size: {} KB", size / 1024);
    }
}

fn check_manifest(path: &Path) {
    println!("Checking manifest: {}", path.display());
    if !path.exists() {
        println!("  (not found, checking defaults)");
    }

    let manifest = load_manifest(path);
    println!("Manifest valid!");
    println!("  Name: {}", manifest.name);
    println!("  File name: {}", manifest.file_name);
    println!("  Entry: {}", manifest.entry.display());
    println!(
        "  CSS: {}",
        if manifest.css_code_split {
            "one file per scope"
        } else {
            "single file"
        }
    );
    println!("  Externals: {}", manifest.externals.len());
}

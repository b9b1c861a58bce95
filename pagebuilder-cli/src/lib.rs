//! # Page Builder CLI
//!
//! Reads a [`VisualDocument`] JSON snapshot, runs one export and writes the
//! artifact.
//!
//! ## Usage
//!
//! ```bash
//! pagebuilder document.json -o export.json
//! pagebuilder document.json --with-presets --tokens-only -o -
//! ```
//!
//! ## Architecture
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `CliConfig` - Resolved run configuration
//! - [`render`] / [`run`] - One export, returned as text or written out

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use pagebuilder_core::{DescriptorRegistry, VisualDocument};
use pagebuilder_export::export::{DEFAULT_COMPONENTS_LIBRARY, DEFAULT_FRAMEWORK};
use pagebuilder_export::serialize::DEFAULT_PAGE_TITLE;
use pagebuilder_export::{ExportConfig, Exporter};

/// Path argument selecting standard output.
const STDOUT_PATH: &str = "-";

/// Command-line arguments for pagebuilder.
#[derive(Debug, Clone, Parser)]
#[command(name = "pagebuilder")]
#[command(about = "Compile a page-builder document snapshot into an export artifact")]
#[command(version)]
pub struct CliArgs {
    /// Document snapshot to export (JSON)
    pub input: PathBuf,

    /// Output file, or `-` for standard output
    #[arg(short, long, default_value = "export.json")]
    pub output: PathBuf,

    /// Title given to every exported page
    #[arg(long, env = "PAGEBUILDER_TITLE", default_value = DEFAULT_PAGE_TITLE)]
    pub title: String,

    /// Target UI framework
    #[arg(long, env = "PAGEBUILDER_FRAMEWORK", default_value = DEFAULT_FRAMEWORK)]
    pub framework: String,

    /// Target component library
    #[arg(long, env = "PAGEBUILDER_COMPONENTS", default_value = DEFAULT_COMPONENTS_LIBRARY)]
    pub components_library: String,

    /// Also resolve components against the built-in launch-ui descriptors
    #[arg(long)]
    pub with_presets: bool,

    /// Write only the design-token configuration
    #[arg(long)]
    pub tokens_only: bool,

    /// Write compact JSON instead of indented JSON
    #[arg(long)]
    pub compact: bool,
}

/// Where the rendered output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output.
    Stdout,
    /// A file, created or truncated.
    File(PathBuf),
}

impl From<PathBuf> for OutputTarget {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == STDOUT_PATH {
            Self::Stdout
        } else {
            Self::File(path)
        }
    }
}

/// Resolved configuration of one CLI run.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Document snapshot to read.
    pub input: PathBuf,
    /// Output destination.
    pub output: OutputTarget,
    /// Export settings passed to the [`Exporter`].
    pub export: ExportConfig,
    /// Merge the launch-ui preset under the document's descriptors.
    pub with_presets: bool,
    /// Emit only the design-token configuration.
    pub tokens_only: bool,
    /// Emit compact JSON.
    pub compact: bool,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            input: args.input,
            output: OutputTarget::from(args.output),
            export: ExportConfig {
                framework: args.framework,
                components_library: args.components_library,
                page_title: args.title,
            },
            with_presets: args.with_presets,
            tokens_only: args.tokens_only,
            compact: args.compact,
        }
    }
}

/// Read and parse a document snapshot.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a document.
pub fn load_document(path: &Path) -> anyhow::Result<VisualDocument> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    VisualDocument::from_json(&json)
        .with_context(|| format!("failed to parse document {}", path.display()))
}

/// Descriptor registry for a document.
///
/// The document's own descriptors come first. With `with_presets`, launch-ui
/// descriptors fill in tags the document does not declare.
///
/// # Errors
///
/// Returns an error if the document declares one tag twice with different
/// parameters.
pub fn build_registry(
    document: &VisualDocument,
    with_presets: bool,
) -> anyhow::Result<DescriptorRegistry> {
    let mut registry = document
        .registry()
        .context("conflicting component descriptors in document")?;

    if with_presets {
        let added = registry.merge(&DescriptorRegistry::launch_ui());
        tracing::debug!(added, "merged launch-ui presets");
    }

    Ok(registry)
}

/// Run one export and return the rendered JSON.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or the export fails.
pub fn render(config: &CliConfig) -> anyhow::Result<String> {
    let document = load_document(&config.input)?;
    let registry = build_registry(&document, config.with_presets)?;

    let artifact = Exporter::new(config.export.clone())
        .export(&document, &registry)
        .with_context(|| format!("failed to export {}", config.input.display()))?;

    let rendered = match (config.tokens_only, config.compact) {
        (true, true) => artifact.tailwind_config.to_json()?,
        (true, false) => artifact.tailwind_config.to_json_pretty()?,
        (false, true) => artifact.to_json()?,
        (false, false) => artifact.to_json_pretty()?,
    };
    Ok(rendered)
}

/// Run one export and write it to the configured output.
///
/// # Errors
///
/// Returns an error if rendering fails or the output cannot be written.
pub fn run(config: &CliConfig) -> anyhow::Result<()> {
    let rendered = render(config)?;

    match &config.output {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{rendered}").context("failed to write to stdout")?;
        }
        OutputTarget::File(path) => {
            fs::write(path, rendered.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = rendered.len(), "wrote export");
        }
    }
    Ok(())
}

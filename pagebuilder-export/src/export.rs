//! Export entry point.
//!
//! [`Exporter`] runs one depth-first, document-order walk over a
//! [`VisualDocument`] and assembles the [`ExportArtifact`].

use pagebuilder_core::{DescriptorLookup, VisualDocument};

use crate::artifact::ExportArtifact;
use crate::error::ExportResult;
use crate::serialize::{PageSerializer, DEFAULT_PAGE_TITLE};
use crate::tokens::DesignTokenResolver;

/// Framework the generated artifact targets by default.
pub const DEFAULT_FRAMEWORK: &str = "solidjs";

/// Component library the generated artifact targets by default.
pub const DEFAULT_COMPONENTS_LIBRARY: &str = "solidui";

/// Configuration for an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Target UI framework (default: `solidjs`).
    pub framework: String,
    /// Target component library (default: `solidui`).
    pub components_library: String,
    /// Title given to every exported page (default: `Home`).
    pub page_title: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            framework: DEFAULT_FRAMEWORK.to_string(),
            components_library: DEFAULT_COMPONENTS_LIBRARY.to_string(),
            page_title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }
}

/// Compiles visual documents into export artifacts.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    /// Create a new exporter with the given configuration.
    #[must_use]
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Create an exporter with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ExportConfig::default())
    }

    /// The exporter's configuration.
    #[must_use]
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Export a document with a fresh token resolver.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered during the walk; no partial
    /// artifact is produced.
    pub fn export(
        &self,
        document: &VisualDocument,
        descriptors: &dyn DescriptorLookup,
    ) -> ExportResult<ExportArtifact> {
        let mut resolver = DesignTokenResolver::new();
        self.export_with(document, descriptors, &mut resolver)
    }

    /// Export a document with a caller-owned token resolver.
    ///
    /// Tokens registered by earlier exports through the same resolver are
    /// carried into this artifact's configuration. A failed export leaves
    /// `resolver` unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered during the walk; no partial
    /// artifact is produced.
    #[tracing::instrument(name = "export", skip_all, fields(framework = %self.config.framework))]
    pub fn export_with(
        &self,
        document: &VisualDocument,
        descriptors: &dyn DescriptorLookup,
        resolver: &mut DesignTokenResolver,
    ) -> ExportResult<ExportArtifact> {
        let serializer = PageSerializer::new(descriptors).with_title(&self.config.page_title);

        let mut scratch = resolver.clone();
        let pages = document
            .page_roots()
            .map(|page| serializer.serialize(page, &mut scratch))
            .collect::<ExportResult<Vec<_>>>()
            .inspect_err(|err| tracing::warn!(error = %err, "export failed"))?;
        *resolver = scratch;

        let tailwind_config = resolver.export_config();
        tracing::info!(
            pages = pages.len(),
            custom_tokens = !tailwind_config.is_empty(),
            "export complete"
        );

        Ok(ExportArtifact {
            framework: self.config.framework.clone(),
            components_library: self.config.components_library.clone(),
            pages,
            tailwind_config,
        })
    }
}

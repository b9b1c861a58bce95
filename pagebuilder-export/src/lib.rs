//! # Page Builder Export
//!
//! The artifact compiler. Walks a [`pagebuilder_core::VisualDocument`] and
//! produces an [`ExportArtifact`]: a nested page/layout/component model whose
//! classes come from design-token resolution, plus the design-token
//! configuration accumulated while resolving.
//!
//! ## Pipeline
//!
//! ```text
//! VisualDocument ──► PageSerializer ──► LayoutSerializer ──► ComponentSerializer
//!                          │                  │                     │
//!                          └──────────► DesignTokenResolver ◄───────┘
//!                                             │
//!                                             ▼
//!                                 ExportArtifact.tailwindConfig
//! ```
//!
//! The resolver is passed by `&mut` down the whole chain; two exports never
//! share extension state unless the caller hands the same resolver to both.
//!
//! ## Example
//!
//! ```
//! use pagebuilder_core::{DescriptorRegistry, VisualDocument, VisualNode};
//! use pagebuilder_export::Exporter;
//!
//! let page = VisualNode::page("page")
//!     .with_computed("width", 768)
//!     .with_computed("background-color", "rgb(255, 255, 255)");
//! let doc = VisualDocument::new(vec![page]);
//!
//! let artifact = Exporter::with_defaults()
//!     .export(&doc, &DescriptorRegistry::launch_ui())
//!     .expect("export");
//! assert_eq!(artifact.pages[0].classes, vec!["w-192", "bg-white"]);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod artifact;
pub mod error;
pub mod export;
pub mod serialize;
pub mod tokens;

pub use artifact::{Component, ComponentData, ExportArtifact, Layout, LayoutKind, Page, Props};
pub use error::{ExportError, ExportResult};
pub use export::{ExportConfig, Exporter};
pub use serialize::{ComponentSerializer, LayoutSerializer, PageSerializer};
pub use tokens::{
    ColorPalette, DesignTokenConfig, DesignTokenResolver, GridAxis, GridTemplateRegistry,
    SpacingScale,
};

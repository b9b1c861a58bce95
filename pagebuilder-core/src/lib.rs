//! # Page Builder Core
//!
//! Read-only input model consumed by the page-builder artifact compiler.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              pagebuilder-core               │
//! ├─────────────────────────────────────────────┤
//! │  Visual Tree         │  Component Schema    │
//! │  - Pages             │  - Descriptors       │
//! │  - Layout containers │  - Typed parameters  │
//! │  - Components        │  - Registry / lookup │
//! ├─────────────────────────────────────────────┤
//! │  Styles              │  Snapshot            │
//! │  - Computed values   │  - JSON document     │
//! │  - Inline values     │  - Page discovery    │
//! │  - Color parsing     │                      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate mutates a tree once it has been built; the compiler
//! in `pagebuilder-export` only ever reads from it.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod descriptor;
pub mod document;
pub mod error;
pub mod node;

pub use color::Rgba;
pub use descriptor::{
    ComponentDescriptor, ComponentParameter, DataType, DescriptorLookup, DescriptorRegistry,
    INNER_TEXT_PARAMETER,
};
pub use document::VisualDocument;
pub use error::{CoreError, CoreResult};
pub use node::{markers, NodeKind, StyleValue, VisualNode};

/// Page builder core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

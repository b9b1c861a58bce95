//! Grid template registry: grid cell sizes to generated template names.

use std::collections::BTreeMap;

/// Grid axis a registry serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    /// `grid-template-columns`.
    Columns,
    /// `grid-template-rows`.
    Rows,
}

impl GridAxis {
    /// Inline style property carrying this axis' template.
    #[must_use]
    pub fn property(self) -> &'static str {
        match self {
            Self::Columns => "grid-template-columns",
            Self::Rows => "grid-template-rows",
        }
    }

    /// Class prefix for this axis' template token.
    #[must_use]
    pub fn class_prefix(self) -> &'static str {
        match self {
            Self::Columns => "grid-cols-",
            Self::Rows => "grid-rows-",
        }
    }
}

/// Resolves repeated grid cell sizes to `auto-<N>px` templates.
///
/// There is no fixed table; every size becomes a custom template.
#[derive(Debug, Clone)]
pub struct GridTemplateRegistry {
    axis: GridAxis,
    templates: BTreeMap<String, String>,
}

impl GridTemplateRegistry {
    /// Create a registry for one axis.
    #[must_use]
    pub fn new(axis: GridAxis) -> Self {
        Self {
            axis,
            templates: BTreeMap::new(),
        }
    }

    /// Axis this registry serves.
    #[must_use]
    pub fn axis(&self) -> GridAxis {
        self.axis
    }

    /// Resolve a cell size in pixels to a template name.
    ///
    /// Registers `auto-<N>px -> repeat(auto-fill, <N>px)`.
    pub fn resolve(&mut self, cell_size_px: f64) -> String {
        let name = format!("auto-{cell_size_px}px");
        if !self.templates.contains_key(&name) {
            tracing::debug!(axis = ?self.axis, cell_size_px, template = %name, "registered grid template");
            self.templates
                .insert(name.clone(), format!("repeat(auto-fill, {cell_size_px}px)"));
        }
        name
    }

    /// Templates registered so far.
    #[must_use]
    pub fn extensions(&self) -> &BTreeMap<String, String> {
        &self.templates
    }

    /// Copy of the templates for the design-token configuration.
    #[must_use]
    pub fn export_extensions(&self) -> BTreeMap<String, String> {
        self.templates.clone()
    }

    /// Forget every template.
    pub fn reset(&mut self) {
        self.templates.clear();
    }
}

/// Extract the cell size from an inline `repeat(auto-fill, <N>px)` template.
///
/// The value is split on its single comma; the second segment must be a
/// positive pixel length followed by the closing parenthesis. Multi-track
/// templates are not supported and yield `None`.
#[must_use]
pub fn parse_auto_fill_cell(template: &str) -> Option<f64> {
    let mut segments = template.split(',');
    let leading = segments.next()?.trim();
    let size = segments.next()?.trim();
    if segments.next().is_some() || leading != "repeat(auto-fill" {
        return None;
    }

    let size = size.strip_suffix(')')?.trim_end().strip_suffix("px")?;
    size.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
}

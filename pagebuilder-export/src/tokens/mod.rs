//! Design-token resolution.
//!
//! [`DesignTokenResolver`] bundles the spacing scale, the color palette and
//! one grid template registry per axis. It is the only token source the
//! serializers see, and it is always passed to them explicitly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::artifact::to_json_indented;
use crate::error::ExportResult;

pub mod color;
pub mod grid;
pub mod spacing;

pub use color::ColorPalette;
pub use grid::{parse_auto_fill_cell, GridAxis, GridTemplateRegistry};
pub use spacing::SpacingScale;

/// Design-token configuration fragment listing every custom token of a run.
///
/// Serializes as `{ "theme": { "extend": { ... } } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignTokenConfig {
    /// Theme section.
    pub theme: ThemeConfig,
}

/// `theme` section of a [`DesignTokenConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Entries extending the default theme.
    pub extend: ThemeExtension,
}

/// `theme.extend` section of a [`DesignTokenConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtension {
    /// Custom spacing tokens (`name -> "<rem>rem"`).
    pub spacing: BTreeMap<String, String>,
    /// Custom colors (`hex digits -> "#hex"`).
    pub colors: BTreeMap<String, String>,
    /// Custom column templates.
    pub grid_template_columns: BTreeMap<String, String>,
    /// Custom row templates.
    pub grid_template_rows: BTreeMap<String, String>,
}

impl DesignTokenConfig {
    /// Whether no custom token was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let extend = &self.theme.extend;
        extend.spacing.is_empty()
            && extend.colors.is_empty()
            && extend.grid_template_columns.is_empty()
            && extend.grid_template_rows.is_empty()
    }

    /// Serialize to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> ExportResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to JSON indented with four spaces.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> ExportResult<String> {
        to_json_indented(self)
    }
}

/// Single façade over every token registry of one export run.
#[derive(Debug, Clone)]
pub struct DesignTokenResolver {
    spacing: SpacingScale,
    colors: ColorPalette,
    grid_columns: GridTemplateRegistry,
    grid_rows: GridTemplateRegistry,
}

impl Default for DesignTokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignTokenResolver {
    /// Create a resolver with empty extension registries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            spacing: SpacingScale::new(),
            colors: ColorPalette::new(),
            grid_columns: GridTemplateRegistry::new(GridAxis::Columns),
            grid_rows: GridTemplateRegistry::new(GridAxis::Rows),
        }
    }

    /// Resolve a pixel length to a spacing token.
    pub fn resolve_spacing(&mut self, px: i32) -> String {
        self.spacing.resolve(px)
    }

    /// Resolve a color to a palette token.
    pub fn resolve_color(&mut self, color: &str) -> String {
        self.colors.resolve(color)
    }

    /// Resolve a column cell size to a template name.
    pub fn resolve_grid_column(&mut self, cell_size_px: f64) -> String {
        self.grid_columns.resolve(cell_size_px)
    }

    /// Resolve a row cell size to a template name.
    pub fn resolve_grid_row(&mut self, cell_size_px: f64) -> String {
        self.grid_rows.resolve(cell_size_px)
    }

    /// Resolve a cell size on the given axis.
    pub fn resolve_grid(&mut self, axis: GridAxis, cell_size_px: f64) -> String {
        match axis {
            GridAxis::Columns => self.resolve_grid_column(cell_size_px),
            GridAxis::Rows => self.resolve_grid_row(cell_size_px),
        }
    }

    /// The spacing scale.
    #[must_use]
    pub fn spacing(&self) -> &SpacingScale {
        &self.spacing
    }

    /// The color palette.
    #[must_use]
    pub fn colors(&self) -> &ColorPalette {
        &self.colors
    }

    /// The registry for one grid axis.
    #[must_use]
    pub fn grid(&self, axis: GridAxis) -> &GridTemplateRegistry {
        match axis {
            GridAxis::Columns => &self.grid_columns,
            GridAxis::Rows => &self.grid_rows,
        }
    }

    /// Export every custom token registered so far.
    #[must_use]
    pub fn export_config(&self) -> DesignTokenConfig {
        DesignTokenConfig {
            theme: ThemeConfig {
                extend: ThemeExtension {
                    spacing: self.spacing.export_extensions(),
                    colors: self.colors.export_extensions(),
                    grid_template_columns: self.grid_columns.export_extensions(),
                    grid_template_rows: self.grid_rows.export_extensions(),
                },
            },
        }
    }

    /// Clear every extension registry.
    pub fn reset(&mut self) {
        self.spacing.reset();
        self.colors.reset();
        self.grid_columns.reset();
        self.grid_rows.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_config_shape() {
        let mut resolver = DesignTokenResolver::new();
        resolver.resolve_spacing(100);
        resolver.resolve_color("#abcdef");
        resolver.resolve_grid_column(120.0);
        resolver.resolve_grid_row(40.0);

        let json = serde_json::to_value(resolver.export_config()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "theme": {
                    "extend": {
                        "spacing": { "25": "6.25rem" },
                        "colors": { "abcdef": "#abcdef" },
                        "gridTemplateColumns": { "auto-120px": "repeat(auto-fill, 120px)" },
                        "gridTemplateRows": { "auto-40px": "repeat(auto-fill, 40px)" }
                    }
                }
            })
        );
    }

    #[test]
    fn test_axes_are_independent() {
        let mut resolver = DesignTokenResolver::new();
        resolver.resolve_grid(GridAxis::Columns, 120.0);

        assert_eq!(resolver.grid(GridAxis::Columns).extensions().len(), 1);
        assert!(resolver.grid(GridAxis::Rows).extensions().is_empty());
    }

    #[test]
    fn test_fixed_tokens_leave_config_empty() {
        let mut resolver = DesignTokenResolver::new();
        assert_eq!(resolver.resolve_spacing(16), "4");
        assert_eq!(resolver.resolve_color("#FFFFFF"), "white");
        assert!(resolver.export_config().is_empty());
    }

    #[test]
    fn test_reset_clears_all_registries() {
        let mut resolver = DesignTokenResolver::new();
        resolver.resolve_spacing(100);
        resolver.resolve_color("#abcdef");
        resolver.resolve_grid_row(10.0);
        resolver.reset();
        assert!(resolver.export_config().is_empty());
    }

    #[test]
    fn test_independent_resolvers_do_not_share_state() {
        let mut first = DesignTokenResolver::new();
        let second = DesignTokenResolver::new();
        first.resolve_spacing(100);

        assert_eq!(first.spacing().extensions().len(), 1);
        assert!(second.spacing().extensions().is_empty());
    }

    #[test]
    fn test_config_pretty_json_uses_four_space_indent() {
        let mut resolver = DesignTokenResolver::new();
        resolver.resolve_spacing(100);

        let pretty = resolver.export_config().to_json_pretty().expect("pretty");
        assert!(pretty.starts_with("{\n    \"theme\": {\n        \"extend\""));

        let compact = resolver.export_config().to_json().expect("compact");
        assert!(!compact.contains('\n'));
    }
}

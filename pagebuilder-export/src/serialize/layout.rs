//! Layout container serialization.

use pagebuilder_core::{markers, DescriptorLookup, VisualNode};

use super::{round_px, ComponentSerializer};
use crate::artifact::{Layout, LayoutKind};
use crate::error::{ExportError, ExportResult};
use crate::tokens::{parse_auto_fill_cell, DesignTokenResolver, GridAxis};

/// Serializes layout containers and the components inside them.
pub struct LayoutSerializer<'a> {
    components: ComponentSerializer<'a>,
}

impl<'a> LayoutSerializer<'a> {
    /// Create a serializer resolving component descriptors through `descriptors`.
    #[must_use]
    pub fn new(descriptors: &'a dyn DescriptorLookup) -> Self {
        Self {
            components: ComponentSerializer::new(descriptors),
        }
    }

    /// Determine a container's kind from its markers.
    ///
    /// Precedence is free, flex, grid. A container with none of them is
    /// treated as free.
    #[must_use]
    pub fn kind_of(node: &VisualNode) -> LayoutKind {
        if node.has_marker(markers::FREE) {
            LayoutKind::Free
        } else if node.has_marker(markers::FLEX) {
            LayoutKind::Flex
        } else if node.has_marker(markers::GRID) {
            LayoutKind::Grid
        } else {
            tracing::warn!(id = %node.id, "layout has no kind marker, falling back to free");
            LayoutKind::Free
        }
    }

    /// Serialize a layout container.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::MalformedGridTemplate`] if a grid container's
    /// inline templates are missing or not `repeat(auto-fill, <N>px)`, and
    /// [`ExportError::SchemaMissing`] if a contained component has no
    /// descriptor.
    pub fn serialize(
        &self,
        node: &VisualNode,
        resolver: &mut DesignTokenResolver,
    ) -> ExportResult<Layout> {
        let kind = Self::kind_of(node);

        let height = round_px(node.computed_px("height"));
        let mut classes = vec![format!("h-{}", resolver.resolve_spacing(height))];
        classes.extend(
            node.markers
                .iter()
                .filter(|m| m.as_str() != markers::CONTAINER)
                .filter(|m| !markers::LAYOUT_KINDS.contains(&m.as_str()))
                .cloned(),
        );

        if kind == LayoutKind::Grid {
            for axis in [GridAxis::Columns, GridAxis::Rows] {
                let cell = grid_cell_size(node, axis)?;
                classes.push(format!(
                    "{}{}",
                    axis.class_prefix(),
                    resolver.resolve_grid(axis, cell)
                ));
            }
        }

        let components = node
            .children_marked(markers::COMPONENT)
            .map(|child| self.components.serialize(child, kind, resolver))
            .collect::<ExportResult<Vec<_>>>()?;

        tracing::debug!(
            id = %node.id,
            %kind,
            components = components.len(),
            "serialized layout"
        );

        Ok(Layout {
            kind,
            classes,
            components,
        })
    }
}

/// Cell size of a grid container's inline template on one axis.
fn grid_cell_size(node: &VisualNode, axis: GridAxis) -> ExportResult<f64> {
    let property = axis.property();
    let raw = node.inline(property);

    raw.and_then(parse_auto_fill_cell)
        .ok_or_else(|| ExportError::MalformedGridTemplate {
            node_id: node.id.clone(),
            property: property.to_string(),
            value: raw.map(str::to_string),
        })
}

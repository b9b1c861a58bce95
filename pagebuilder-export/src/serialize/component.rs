//! Component serialization.

use std::collections::BTreeMap;

use pagebuilder_core::{ComponentDescriptor, DescriptorLookup, VisualNode};

use super::truncate_px;
use crate::artifact::{Component, ComponentData, LayoutKind, Props};
use crate::error::{ExportError, ExportResult};
use crate::tokens::DesignTokenResolver;

/// Serializes component nodes using their declared parameter schema.
pub struct ComponentSerializer<'a> {
    descriptors: &'a dyn DescriptorLookup,
}

impl<'a> ComponentSerializer<'a> {
    /// Create a serializer resolving descriptors through `descriptors`.
    #[must_use]
    pub fn new(descriptors: &'a dyn DescriptorLookup) -> Self {
        Self { descriptors }
    }

    /// Serialize a component placed in a layout of kind `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::SchemaMissing`] if the node has no registered
    /// descriptor.
    pub fn serialize(
        &self,
        node: &VisualNode,
        layout: LayoutKind,
        resolver: &mut DesignTokenResolver,
    ) -> ExportResult<Component> {
        let descriptor =
            self.descriptors
                .descriptor_for(node)
                .ok_or_else(|| ExportError::SchemaMissing {
                    node_id: node.id.clone(),
                    tag: node.tag.clone(),
                })?;

        Ok(Self::serialize_with(node, descriptor, layout, resolver))
    }

    /// Serialize a component against an already known descriptor.
    pub fn serialize_with(
        node: &VisualNode,
        descriptor: &ComponentDescriptor,
        layout: LayoutKind,
        resolver: &mut DesignTokenResolver,
    ) -> Component {
        let classes = placement_classes(node, layout, resolver);

        let mut props = Props::new();
        let mut inner_text = None;
        for parameter in &descriptor.parameters {
            let value = node
                .attribute(&parameter.name)
                .filter(|v| !v.is_empty())
                .map(str::to_string);

            if parameter.is_inner_text() {
                inner_text = value;
            } else {
                props.insert(parameter.name.clone(), value);
            }
        }

        tracing::trace!(id = %node.id, tag = %descriptor.tag_name, %layout, "serialized component");

        Component {
            name: descriptor.tag_name.clone(),
            id: node.id.clone(),
            data: ComponentData {
                props,
                classes,
                attributes: BTreeMap::new(),
                inner_text,
            },
        }
    }
}

/// Classes placing the component inside its layout.
fn placement_classes(
    node: &VisualNode,
    layout: LayoutKind,
    resolver: &mut DesignTokenResolver,
) -> Vec<String> {
    match layout {
        LayoutKind::Free => {
            let top = truncate_px(node.computed_px("top"));
            let left = truncate_px(node.computed_px("left"));
            vec![
                "absolute".to_string(),
                format!("top-{}", resolver.resolve_spacing(top)),
                format!("left-{}", resolver.resolve_spacing(left)),
            ]
        }
        LayoutKind::Grid => {
            let column_start = grid_start(node, "grid-column-start");
            let column_span = grid_span(node, "grid-column-end");
            let row_start = grid_start(node, "grid-row-start");
            let row_span = grid_span(node, "grid-row-end");
            vec![
                "w-full".to_string(),
                "h-full".to_string(),
                format!("col-start-{column_start}"),
                format!("col-span-{column_span}"),
                format!("row-start-{row_start}"),
                format!("row-span-{row_span}"),
            ]
        }
        // Alignment of flex children is carried by the layout's own classes.
        LayoutKind::Flex => Vec::new(),
    }
}

/// Grid line a component starts on, used verbatim.
fn grid_start(node: &VisualNode, property: &str) -> String {
    node.computed_text(property)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "auto".to_string())
}

/// Span encoded in a `grid-*-end` value of the form `span N`, else `1`.
fn grid_span(node: &VisualNode, property: &str) -> u32 {
    node.computed_text(property)
        .as_deref()
        .and_then(parse_span)
        .unwrap_or(1)
}

fn parse_span(value: &str) -> Option<u32> {
    value
        .trim()
        .strip_prefix("span")?
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
}

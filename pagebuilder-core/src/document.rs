//! Serialized snapshot of the editor canvas handed to the compiler.

use serde::{Deserialize, Serialize};

use crate::{ComponentDescriptor, CoreResult, DescriptorRegistry, NodeKind, VisualNode};

/// A snapshot of the visual tree plus the descriptors registered for it.
///
/// # Example
///
/// ```
/// use pagebuilder_core::{VisualDocument, VisualNode};
///
/// let doc = VisualDocument::new(vec![VisualNode::page("page")]);
/// assert_eq!(doc.page_roots().count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualDocument {
    /// Top-level nodes in document order.
    #[serde(default)]
    pub roots: Vec<VisualNode>,
    /// Descriptors for the component tags used in the tree.
    #[serde(default)]
    pub descriptors: Vec<ComponentDescriptor>,
}

impl VisualDocument {
    /// Create a document from its top-level nodes.
    #[must_use]
    pub fn new(roots: Vec<VisualNode>) -> Self {
        Self {
            roots,
            descriptors: Vec::new(),
        }
    }

    /// Attach a descriptor.
    #[must_use]
    pub fn with_descriptor(mut self, descriptor: ComponentDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    /// All page nodes in depth-first document order.
    ///
    /// The search does not descend into a page once found.
    pub fn page_roots(&self) -> impl Iterator<Item = &VisualNode> {
        let mut pages = Vec::new();
        let mut stack: Vec<&VisualNode> = self.roots.iter().rev().collect();
        while let Some(node) = stack.pop() {
            if node.kind == NodeKind::Page {
                pages.push(node);
            } else {
                stack.extend(node.children.iter().rev());
            }
        }
        pages.into_iter()
    }

    /// Build a registry from the document's descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::DescriptorConflict`] if the document declares
    /// the same tag twice with different parameters.
    pub fn registry(&self) -> CoreResult<DescriptorRegistry> {
        let mut registry = DescriptorRegistry::new();
        for descriptor in &self.descriptors {
            registry.register(descriptor.clone())?;
        }
        Ok(registry)
    }

    /// Serialize the document to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a document from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a visual document.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoreError, DataType};

    #[test]
    fn test_page_roots_document_order() {
        let body = VisualNode::new(NodeKind::Layout, "body")
            .with_child(VisualNode::page("second"))
            .with_child(VisualNode::page("third").with_child(VisualNode::page("nested")));
        let doc = VisualDocument::new(vec![VisualNode::page("first"), body]);

        let ids: Vec<_> = doc.page_roots().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "roots": [
                {
                    "kind": "page",
                    "id": "page",
                    "computed": { "width": "765px", "background-color": "rgb(255, 255, 255)" },
                    "children": [
                        { "kind": "layout", "id": "l1", "markers": ["container", "free"] }
                    ]
                }
            ],
            "descriptors": [
                { "tag_name": "launch-tabs", "parameters": [] }
            ]
        }"#;

        let doc = VisualDocument::from_json(json).expect("should parse");
        let page = doc.page_roots().next().expect("page");
        assert_eq!(page.computed_px("width"), Some(765.0));
        assert_eq!(page.children.len(), 1);
        assert_eq!(doc.registry().expect("registry").len(), 1);
    }

    #[test]
    fn test_registry_conflict() {
        let doc = VisualDocument::default()
            .with_descriptor(ComponentDescriptor::new("x").with_parameter("a", DataType::Text))
            .with_descriptor(ComponentDescriptor::new("x").with_parameter("b", DataType::Text));

        assert!(matches!(
            doc.registry(),
            Err(CoreError::DescriptorConflict { .. })
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let doc = VisualDocument::new(vec![VisualNode::page("page")
            .with_child(VisualNode::layout("l1").with_marker("grid"))]);
        let json = doc.to_json().expect("serialize");
        assert_eq!(VisualDocument::from_json(&json).expect("parse"), doc);
    }
}

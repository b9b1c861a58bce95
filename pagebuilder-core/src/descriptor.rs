//! Component descriptors - the declared parameter schema of each component tag.
//!
//! The serializer never reflects over a node's attributes; it iterates the
//! typed parameter list of the node's descriptor and reads exactly those.

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult, VisualNode};

/// Reserved parameter name whose value becomes the component's inner text.
pub const INNER_TEXT_PARAMETER: &str = "innertext";

/// Declared type of a component parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// A color value.
    Color,
    /// Free text.
    Text,
    /// A number.
    Number,
    /// A boolean flag.
    Boolean,
    /// A layout style keyword.
    LayoutStyle,
}

/// One declared parameter of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentParameter {
    /// Attribute name the parameter is read from.
    pub name: String,
    /// Declared type.
    pub data_type: DataType,
}

impl ComponentParameter {
    /// Create a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }

    /// Whether this is the reserved inner-text parameter.
    #[must_use]
    pub fn is_inner_text(&self) -> bool {
        self.name == INNER_TEXT_PARAMETER
    }
}

/// The declared schema of a component tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Custom element tag name.
    pub tag_name: String,
    /// Parameters in insertion order.
    #[serde(default)]
    pub parameters: Vec<ComponentParameter>,
}

impl ComponentDescriptor {
    /// Create a descriptor with no parameters.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            parameters: Vec::new(),
        }
    }

    /// Append a parameter.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, data_type: DataType) -> Self {
        self.parameters.push(ComponentParameter::new(name, data_type));
        self
    }
}

/// Finds the descriptor of a component node.
pub trait DescriptorLookup {
    /// Descriptor for the node, or `None` when its tag was never registered.
    fn descriptor_for(&self, node: &VisualNode) -> Option<&ComponentDescriptor>;
}

/// Insertion-ordered registry of component descriptors keyed by tag name.
#[derive(Debug, Clone, Default)]
pub struct DescriptorRegistry {
    descriptors: Vec<ComponentDescriptor>,
}

impl DescriptorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the editor's default component set.
    #[must_use]
    pub fn launch_ui() -> Self {
        let descriptors = vec![
            ComponentDescriptor::new("launch-button")
                .with_parameter(INNER_TEXT_PARAMETER, DataType::Text)
                .with_parameter("variant", DataType::Text)
                .with_parameter("type", DataType::Text)
                .with_parameter("size", DataType::Text)
                .with_parameter("shape", DataType::Text)
                .with_parameter("disabled", DataType::Boolean),
            ComponentDescriptor::new("launch-checkbox")
                .with_parameter("disabled", DataType::Boolean)
                .with_parameter("indeterminate", DataType::Boolean),
            ComponentDescriptor::new("launch-text")
                .with_parameter(INNER_TEXT_PARAMETER, DataType::Text)
                .with_parameter("type", DataType::Text)
                .with_parameter("weight", DataType::Text)
                .with_parameter("underline", DataType::Boolean)
                .with_parameter("italic", DataType::Boolean),
            ComponentDescriptor::new("launch-table"),
            ComponentDescriptor::new("launch-pagination").with_parameter("pages", DataType::Number),
            ComponentDescriptor::new("launch-tabs"),
        ];
        Self { descriptors }
    }

    /// Register a descriptor.
    ///
    /// Registering an identical descriptor twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DescriptorConflict`] if the tag is already
    /// registered with a different parameter list.
    pub fn register(&mut self, descriptor: ComponentDescriptor) -> CoreResult<()> {
        match self.get(&descriptor.tag_name) {
            Some(existing) if *existing == descriptor => Ok(()),
            Some(_) => Err(CoreError::DescriptorConflict {
                tag: descriptor.tag_name,
            }),
            None => {
                tracing::trace!(tag = %descriptor.tag_name, "registered component descriptor");
                self.descriptors.push(descriptor);
                Ok(())
            }
        }
    }

    /// Register every descriptor of `other` whose tag is not yet known.
    ///
    /// Tags already present keep their descriptor; `other` fills in the
    /// rest. Returns how many descriptors were added.
    pub fn merge(&mut self, other: &DescriptorRegistry) -> usize {
        let before = self.descriptors.len();
        for descriptor in other.iter() {
            if self.get(&descriptor.tag_name).is_some() {
                tracing::debug!(tag = %descriptor.tag_name, "merge keeps existing descriptor");
                continue;
            }
            self.descriptors.push(descriptor.clone());
        }
        self.descriptors.len() - before
    }

    /// Get a descriptor by tag name.
    #[must_use]
    pub fn get(&self, tag_name: &str) -> Option<&ComponentDescriptor> {
        self.descriptors.iter().find(|d| d.tag_name == tag_name)
    }

    /// Iterate descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.descriptors.iter()
    }

    /// Number of registered descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl DescriptorLookup for DescriptorRegistry {
    fn descriptor_for(&self, node: &VisualNode) -> Option<&ComponentDescriptor> {
        node.tag.as_deref().and_then(|tag| self.get(tag))
    }
}

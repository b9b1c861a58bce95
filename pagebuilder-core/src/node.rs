//! Visual nodes - the read-only tree the compiler walks.
//!
//! A [`VisualNode`] is a snapshot of one element of the editor canvas: its
//! marker classes, its attributes, the values the host rendering engine
//! reports for its computed style, and its inline style declarations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Rgba;

/// Marker classes the compiler recognises on visual nodes.
pub mod markers {
    /// Marks a layout container that belongs to a page.
    pub const CONTAINER: &str = "container";
    /// Marks a component placed inside a layout container.
    pub const COMPONENT: &str = "component";
    /// Free (absolutely positioned) layout.
    pub const FREE: &str = "free";
    /// Flexbox layout.
    pub const FLEX: &str = "flex";
    /// CSS-grid layout.
    pub const GRID: &str = "grid";

    /// Markers that only describe the layout kind and never reach the artifact.
    pub const LAYOUT_KINDS: [&str; 3] = [FREE, FLEX, GRID];
}

/// Discriminant of a visual node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A page root.
    Page,
    /// A resizable layout container.
    Layout,
    /// A component instance.
    Component,
}

/// A resolved style value as reported by the host rendering engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A bare number (pixels for lengths).
    Number(f64),
    /// A raw CSS string such as `"32px"`, `"span 3"` or `"rgb(0, 0, 0)"`.
    Text(String),
}

impl StyleValue {
    /// Interpret the value as a pixel length.
    ///
    /// Accepts bare numbers and strings with an optional `px` suffix. Keywords
    /// such as `auto` yield `None`.
    #[must_use]
    pub fn as_px(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.is_finite().then_some(*n),
            Self::Text(s) => {
                let s = s.trim();
                let s = s.strip_suffix("px").unwrap_or(s);
                s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
    }

    /// Render the value as CSS text.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One node of the visual tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualNode {
    /// Stable element id.
    #[serde(default)]
    pub id: String,
    /// Node discriminant.
    pub kind: NodeKind,
    /// Element tag name, used to find a component's descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Marker classes in document order.
    #[serde(default)]
    pub markers: Vec<String>,
    /// Element attributes.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Computed style values keyed by CSS property name.
    #[serde(default)]
    pub computed: BTreeMap<String, StyleValue>,
    /// Inline style declarations keyed by CSS property name.
    #[serde(default)]
    pub inline_style: BTreeMap<String, String>,
    /// Children in document order.
    #[serde(default)]
    pub children: Vec<VisualNode>,
}

impl VisualNode {
    /// Create an empty node of the given kind.
    #[must_use]
    pub fn new(kind: NodeKind, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            tag: None,
            markers: Vec::new(),
            attributes: BTreeMap::new(),
            computed: BTreeMap::new(),
            inline_style: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a page root.
    #[must_use]
    pub fn page(id: impl Into<String>) -> Self {
        Self::new(NodeKind::Page, id)
    }

    /// Create a layout container carrying the `container` marker.
    #[must_use]
    pub fn layout(id: impl Into<String>) -> Self {
        Self::new(NodeKind::Layout, id).with_marker(markers::CONTAINER)
    }

    /// Create a component instance carrying the `component` marker.
    #[must_use]
    pub fn component(id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::new(NodeKind::Component, id)
            .with_tag(tag)
            .with_marker(markers::COMPONENT)
    }

    /// Set the tag name.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Append a marker class.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.markers.push(marker.into());
        self
    }

    /// Set an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set a computed style value.
    #[must_use]
    pub fn with_computed(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.computed.insert(property.into(), value.into());
        self
    }

    /// Set an inline style declaration.
    #[must_use]
    pub fn with_inline(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.inline_style.insert(property.into(), value.into());
        self
    }

    /// Append a child.
    #[must_use]
    pub fn with_child(mut self, child: VisualNode) -> Self {
        self.children.push(child);
        self
    }

    /// Check whether the node carries a marker class.
    #[must_use]
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }

    /// Get an attribute value. Absence is a normal case.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Get a raw computed style value.
    #[must_use]
    pub fn computed(&self, property: &str) -> Option<&StyleValue> {
        self.computed.get(property)
    }

    /// Get a computed length in pixels.
    #[must_use]
    pub fn computed_px(&self, property: &str) -> Option<f64> {
        self.computed(property).and_then(StyleValue::as_px)
    }

    /// Get a computed value rendered as CSS text.
    #[must_use]
    pub fn computed_text(&self, property: &str) -> Option<String> {
        self.computed(property).map(StyleValue::to_text)
    }

    /// Get a computed color, if the reported value is a recognised color form.
    #[must_use]
    pub fn computed_color(&self, property: &str) -> Option<Rgba> {
        match self.computed(property)? {
            StyleValue::Text(s) => Rgba::parse(s),
            StyleValue::Number(_) => None,
        }
    }

    /// Get an inline style declaration.
    #[must_use]
    pub fn inline(&self, property: &str) -> Option<&str> {
        self.inline_style.get(property).map(String::as_str)
    }

    /// Children carrying the given marker, in document order.
    pub fn children_marked<'a>(&'a self, marker: &'a str) -> impl Iterator<Item = &'a VisualNode> {
        self.children.iter().filter(move |c| c.has_marker(marker))
    }
}

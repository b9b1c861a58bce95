//! Exported artifact model.
//!
//! Every type here is created fresh by one export and never mutated
//! afterwards. Field names follow the JSON the consuming generator reads
//! (`componentsLibrary`, `innerText`, `tailwindConfig`).

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ExportResult;
use crate::tokens::DesignTokenConfig;

/// Component properties in declared parameter order.
///
/// Serialized as a JSON object. Absent or empty attributes are `null`,
/// never omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props(Vec<(String, Option<String>)>);

impl Props {
    /// Create an empty property list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property. A later entry with the same name replaces the value
    /// in place.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        if let Some(slot) = self.0.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.0.push((name, value));
        }
    }

    /// Look up a property. The outer `Option` is presence, the inner is the value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref())
    }

    /// Property names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Props {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Props {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PropsVisitor;

        impl<'de> Visitor<'de> for PropsVisitor {
            type Value = Props;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of property names to strings or null")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Props, A::Error> {
                let mut props = Props::new();
                while let Some((name, value)) = access.next_entry::<String, Option<String>>()? {
                    props.insert(name, value);
                }
                Ok(props)
            }
        }

        deserializer.deserialize_map(PropsVisitor)
    }
}

/// Data block of an exported component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentData {
    /// One entry per declared parameter except the inner-text one.
    pub props: Props,
    /// Utility classes in emission order.
    pub classes: Vec<String>,
    /// Extra attributes; always empty in current exports.
    pub attributes: BTreeMap<String, String>,
    /// Value of the reserved inner-text parameter.
    pub inner_text: Option<String>,
}

/// An exported component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Component tag name.
    pub name: String,
    /// Id of the visual node.
    pub id: String,
    /// Properties and classes.
    pub data: ComponentData,
}

/// Kind of a layout container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// Absolutely positioned children.
    Free,
    /// Flexbox.
    Flex,
    /// CSS grid.
    Grid,
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Free => "free",
            Self::Flex => "flex",
            Self::Grid => "grid",
        };
        f.write_str(name)
    }
}

/// An exported layout container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Layout kind.
    pub kind: LayoutKind,
    /// Utility classes in emission order.
    pub classes: Vec<String>,
    /// Components in document order.
    pub components: Vec<Component>,
}

/// An exported page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page title.
    pub title: String,
    /// Utility classes in emission order.
    pub classes: Vec<String>,
    /// Layouts in document order.
    pub layouts: Vec<Layout>,
}

/// The complete result of one export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportArtifact {
    /// Target UI framework.
    pub framework: String,
    /// Target component library.
    pub components_library: String,
    /// Pages in document order.
    pub pages: Vec<Page>,
    /// Custom design tokens registered during the export.
    pub tailwind_config: DesignTokenConfig,
}

impl ExportArtifact {
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

    /// Deserialize an artifact from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe an artifact.
    pub fn from_json(json: &str) -> ExportResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Render `value` as JSON indented with four spaces.
pub(crate) fn to_json_indented<T: Serialize>(value: &T) -> ExportResult<String> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

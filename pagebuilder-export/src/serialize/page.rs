//! Page serialization.

use pagebuilder_core::{markers, DescriptorLookup, VisualNode};

use super::{round_px, LayoutSerializer};
use crate::artifact::Page;
use crate::error::ExportResult;
use crate::tokens::DesignTokenResolver;

/// Title used when the caller does not supply one.
pub const DEFAULT_PAGE_TITLE: &str = "Home";

const BACKGROUND_COLOR: &str = "background-color";

/// Serializes page roots and the layout containers inside them.
pub struct PageSerializer<'a> {
    layouts: LayoutSerializer<'a>,
    title: &'a str,
}

impl<'a> PageSerializer<'a> {
    /// Create a serializer emitting pages titled [`DEFAULT_PAGE_TITLE`].
    #[must_use]
    pub fn new(descriptors: &'a dyn DescriptorLookup) -> Self {
        Self {
            layouts: LayoutSerializer::new(descriptors),
            title: DEFAULT_PAGE_TITLE,
        }
    }

    /// Use a caller-supplied page title.
    #[must_use]
    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Serialize a page root.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by a contained layout or component.
    pub fn serialize(
        &self,
        node: &VisualNode,
        resolver: &mut DesignTokenResolver,
    ) -> ExportResult<Page> {
        let width = round_px(node.computed_px("width"));
        let background = background_color(node);

        let classes = vec![
            format!("w-{}", resolver.resolve_spacing(width)),
            format!("bg-{}", resolver.resolve_color(&background)),
        ];

        let layouts = node
            .children_marked(markers::CONTAINER)
            .map(|child| self.layouts.serialize(child, resolver))
            .collect::<ExportResult<Vec<_>>>()?;

        tracing::debug!(id = %node.id, layouts = layouts.len(), "serialized page");

        Ok(Page {
            title: self.title.to_string(),
            classes,
            layouts,
        })
    }
}

/// The page background as a value the color palette can resolve.
///
/// Fully transparent colors become `transparent`, other alpha values are
/// dropped to `#rrggbb`. Values that are not a recognised color form are
/// returned verbatim.
fn background_color(node: &VisualNode) -> String {
    if let Some(color) = node.computed_color(BACKGROUND_COLOR) {
        if color.is_transparent() {
            return "transparent".to_string();
        }
        let hex = color.to_hex();
        if color.has_alpha() {
            tracing::debug!(id = %node.id, alpha = color.a, hex = %hex, "dropping background alpha");
        }
        return hex;
    }

    node.computed_text(BACKGROUND_COLOR)
        .unwrap_or_else(|| "transparent".to_string())
}

#[cfg(test)]
mod tests {
    use pagebuilder_core::{DescriptorRegistry, VisualNode};

    use super::*;

    fn page(width: f64, background: &str) -> VisualNode {
        VisualNode::page("page")
            .with_computed("width", width)
            .with_computed("background-color", background)
    }

    #[test]
    fn test_page_classes() {
        let registry = DescriptorRegistry::launch_ui();
        let mut resolver = DesignTokenResolver::new();

        let result = PageSerializer::new(&registry)
            .serialize(&page(384.0, "rgb(239, 68, 68)"), &mut resolver)
            .expect("serialize");

        assert_eq!(result.title, "Home");
        assert_eq!(result.classes, vec!["w-96", "bg-red-500"]);
        assert!(result.layouts.is_empty());
    }

    #[test]
    fn test_custom_title() {
        let registry = DescriptorRegistry::launch_ui();
        let mut resolver = DesignTokenResolver::new();

        let result = PageSerializer::new(&registry)
            .with_title("Landing")
            .serialize(&page(384.0, "#ffffff"), &mut resolver)
            .expect("serialize");
        assert_eq!(result.title, "Landing");
    }

    #[test]
    fn test_custom_background_registered() {
        let registry = DescriptorRegistry::launch_ui();
        let mut resolver = DesignTokenResolver::new();

        let result = PageSerializer::new(&registry)
            .serialize(&page(765.0, "rgb(18, 52, 86)"), &mut resolver)
            .expect("serialize");

        assert_eq!(result.classes, vec!["w-191.25", "bg-#123456"]);
        assert_eq!(
            resolver.colors().extensions().get("123456").map(String::as_str),
            Some("#123456")
        );
    }

    #[test]
    fn test_transparent_background() {
        let registry = DescriptorRegistry::launch_ui();
        let mut resolver = DesignTokenResolver::new();

        let result = PageSerializer::new(&registry)
            .serialize(&page(16.0, "rgba(0, 0, 0, 0)"), &mut resolver)
            .expect("serialize");
        assert_eq!(result.classes, vec!["w-4", "bg-transparent"]);

        let missing = VisualNode::page("p").with_computed("width", 16);
        let result = PageSerializer::new(&registry)
            .serialize(&missing, &mut resolver)
            .expect("serialize");
        assert_eq!(result.classes[1], "bg-transparent");
    }

    #[test]
    fn test_partial_alpha_is_dropped() {
        let registry = DescriptorRegistry::launch_ui();
        let mut resolver = DesignTokenResolver::new();

        let result = PageSerializer::new(&registry)
            .serialize(&page(16.0, "rgba(59, 130, 246, 0.5)"), &mut resolver)
            .expect("serialize");
        assert_eq!(result.classes[1], "bg-blue-500");
    }

    #[test]
    fn test_unparsable_background_passes_verbatim() {
        let registry = DescriptorRegistry::launch_ui();
        let mut resolver = DesignTokenResolver::new();

        let result = PageSerializer::new(&registry)
            .serialize(&page(16.0, "color(display-p3 1 0 0)"), &mut resolver)
            .expect("serialize");
        assert_eq!(result.classes[1], "bg-color(display-p3 1 0 0)");
        assert_eq!(resolver.colors().extensions().len(), 1);
    }
}

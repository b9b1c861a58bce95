//! Integration tests for document snapshots (pagebuilder-core).

use pagebuilder_core::{
    color::hex_of, markers, DescriptorLookup, NodeKind, Rgba, VisualDocument, VisualNode,
};
use proptest::prelude::*;
use serde_json::json;

fn snapshot() -> serde_json::Value {
    json!({
        "roots": [
            {
                "kind": "layout",
                "id": "app",
                "children": [
                    {
                        "kind": "page",
                        "id": "home",
                        "computed": { "width": 1280, "background-color": "#0f172a" },
                        "children": [
                            {
                                "kind": "layout",
                                "id": "grid",
                                "markers": ["container", "grid", "gap-4"],
                                "inline_style": {
                                    "grid-template-columns": "repeat(auto-fill, 120px)"
                                },
                                "children": [
                                    {
                                        "kind": "component",
                                        "id": "tabs",
                                        "tag": "launch-tabs",
                                        "markers": ["component"],
                                        "computed": { "grid-column-end": "span 2" }
                                    },
                                    { "kind": "layout", "id": "decoration" }
                                ]
                            }
                        ]
                    }
                ]
            }
        ],
        "descriptors": [
            { "tag_name": "launch-tabs", "parameters": [] }
        ]
    })
}

#[test]
fn test_snapshot_structure() {
    let doc: VisualDocument = serde_json::from_value(snapshot()).expect("parse");

    let pages: Vec<_> = doc.page_roots().collect();
    assert_eq!(pages.len(), 1);

    let page = pages[0];
    assert_eq!(page.kind, NodeKind::Page);
    assert_eq!(page.computed_px("width"), Some(1280.0));
    assert_eq!(
        page.computed_color("background-color"),
        Some(Rgba::rgb(15, 23, 42))
    );

    let grid = page
        .children_marked(markers::CONTAINER)
        .next()
        .expect("container");
    assert!(grid.has_marker(markers::GRID));
    assert_eq!(
        grid.inline("grid-template-columns"),
        Some("repeat(auto-fill, 120px)")
    );
    assert_eq!(grid.inline("grid-template-rows"), None);

    let components: Vec<_> = grid.children_marked(markers::COMPONENT).collect();
    assert_eq!(components.len(), 1);
    assert_eq!(
        components[0].computed_text("grid-column-end").as_deref(),
        Some("span 2")
    );
}

#[test]
fn test_snapshot_registry_resolves_components() {
    let doc: VisualDocument = serde_json::from_value(snapshot()).expect("parse");
    let registry = doc.registry().expect("registry");

    let tabs = VisualNode::component("t", "launch-tabs");
    let unknown = VisualNode::component("u", "launch-carousel");
    assert!(registry.descriptor_for(&tabs).is_some());
    assert!(registry.descriptor_for(&unknown).is_none());
}

#[test]
fn test_snapshot_survives_json_roundtrip() {
    let doc: VisualDocument = serde_json::from_value(snapshot()).expect("parse");
    let json = doc.to_json().expect("serialize");
    assert_eq!(VisualDocument::from_json(&json).expect("reparse"), doc);
}

fn arb_channel_triplet() -> impl Strategy<Value = (u8, u8, u8)> {
    (any::<u8>(), any::<u8>(), any::<u8>())
}

proptest! {
    #[test]
    fn prop_rgb_function_matches_hex_form((r, g, b) in arb_channel_triplet()) {
        let functional = Rgba::parse(&format!("rgb({r}, {g}, {b})")).expect("rgb");
        let hex = Rgba::parse(&hex_of(r, g, b)).expect("hex");

        prop_assert_eq!(functional, hex);
        prop_assert_eq!(functional.to_hex(), hex_of(r, g, b));
        prop_assert!(!functional.has_alpha());
    }

    #[test]
    fn prop_alpha_never_reaches_hex((r, g, b) in arb_channel_triplet(), alpha in 0.01f32..0.99) {
        let color = Rgba::parse(&format!("rgba({r}, {g}, {b}, {alpha})")).expect("rgba");

        prop_assert!(color.has_alpha());
        prop_assert!(!color.is_transparent());
        prop_assert_eq!(color.to_hex().len(), 7);
    }
}

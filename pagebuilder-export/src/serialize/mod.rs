//! Serializers turning visual nodes into artifact records.
//!
//! Each level delegates to the next: pages to layouts, layouts to
//! components. The [`DesignTokenResolver`](crate::DesignTokenResolver) is
//! threaded through every call as `&mut`.

mod component;
mod layout;
mod page;

pub use component::ComponentSerializer;
pub use layout::LayoutSerializer;
pub use page::{PageSerializer, DEFAULT_PAGE_TITLE};

/// Truncate a computed pixel length toward zero. Missing lengths read as `0`.
#[allow(clippy::cast_possible_truncation)]
fn truncate_px(px: Option<f64>) -> i32 {
    px.map_or(0, |v| v.trunc() as i32)
}

/// Round a computed pixel length to the nearest integer. Missing lengths read as `0`.
#[allow(clippy::cast_possible_truncation)]
fn round_px(px: Option<f64>) -> i32 {
    px.map_or(0, |v| v.round() as i32)
}

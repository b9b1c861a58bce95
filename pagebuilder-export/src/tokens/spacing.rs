//! Spacing scale: pixel lengths to spacing token names.

use std::collections::BTreeMap;

/// Pixels per rem used to derive custom spacing tokens.
pub const REM_BASE_PX: f64 = 16.0;

/// Spacing tokens per rem on the default scale (`"4"` is `1rem`).
const TOKENS_PER_REM: f64 = 4.0;

/// Resolves pixel lengths to spacing tokens.
///
/// Known lengths map onto the fixed scale. Any other length gets a derived
/// token name and is recorded in the extension registry so the consuming
/// build can define it.
#[derive(Debug, Clone, Default)]
pub struct SpacingScale {
    custom: BTreeMap<String, String>,
}

impl SpacingScale {
    /// Create a scale with an empty extension registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed-scale token for an exact pixel length.
    #[must_use]
    pub fn builtin(px: i32) -> Option<&'static str> {
        let name = match px {
            0 => "0",
            1 => "px",
            2 => "0.5",
            4 => "1",
            6 => "1.5",
            8 => "2",
            10 => "2.5",
            12 => "3",
            14 => "3.5",
            16 => "4",
            20 => "5",
            24 => "6",
            28 => "7",
            32 => "8",
            36 => "9",
            40 => "10",
            44 => "11",
            48 => "12",
            56 => "14",
            64 => "16",
            80 => "20",
            96 => "24",
            112 => "28",
            128 => "32",
            144 => "36",
            160 => "40",
            176 => "44",
            192 => "48",
            208 => "52",
            224 => "56",
            240 => "60",
            256 => "64",
            288 => "72",
            320 => "80",
            384 => "96",
            _ => return None,
        };
        Some(name)
    }

    /// Resolve a pixel length to a token name.
    ///
    /// On a fixed-scale miss the token is `px / 16 * 4` and the extension
    /// registry gains `token -> "<px / 16>rem"`.
    pub fn resolve(&mut self, px: i32) -> String {
        if let Some(name) = Self::builtin(px) {
            return name.to_string();
        }

        let rem = f64::from(px) / REM_BASE_PX;
        let name = (rem * TOKENS_PER_REM).to_string();

        if !self.custom.contains_key(&name) {
            tracing::debug!(px, token = %name, "registered custom spacing");
            self.custom.insert(name.clone(), format!("{rem}rem"));
        }
        name
    }

    /// Custom spacing entries registered so far.
    #[must_use]
    pub fn extensions(&self) -> &BTreeMap<String, String> {
        &self.custom
    }

    /// Copy of the custom entries for the design-token configuration.
    #[must_use]
    pub fn export_extensions(&self) -> BTreeMap<String, String> {
        self.custom.clone()
    }

    /// Forget every custom entry.
    pub fn reset(&mut self) {
        self.custom.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_scale() {
        let mut scale = SpacingScale::new();
        assert_eq!(scale.resolve(0), "0");
        assert_eq!(scale.resolve(1), "px");
        assert_eq!(scale.resolve(16), "4");
        assert_eq!(scale.resolve(32), "8");
        assert_eq!(scale.resolve(384), "96");
        assert!(scale.extensions().is_empty());
    }

    #[test]
    fn test_fallback_registers_rem_value() {
        let mut scale = SpacingScale::new();
        assert_eq!(scale.resolve(100), "25");
        assert_eq!(
            scale.extensions().get("25").map(String::as_str),
            Some("6.25rem")
        );
    }

    #[test]
    fn test_fractional_fallback() {
        let mut scale = SpacingScale::new();
        assert_eq!(scale.resolve(18), "4.5");
        assert_eq!(scale.resolve(17), "4.25");
        assert_eq!(scale.resolve(3), "0.75");
        assert_eq!(
            scale.extensions().get("4.25").map(String::as_str),
            Some("1.0625rem")
        );
    }

    #[test]
    fn test_negative_offsets() {
        let mut scale = SpacingScale::new();
        assert_eq!(scale.resolve(-8), "-2");
        assert_eq!(
            scale.extensions().get("-2").map(String::as_str),
            Some("-0.5rem")
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut scale = SpacingScale::new();
        let first = scale.resolve(100);
        let size = scale.extensions().len();
        let second = scale.resolve(100);

        assert_eq!(first, second);
        assert_eq!(scale.extensions().len(), size);
    }

    #[test]
    fn test_reset() {
        let mut scale = SpacingScale::new();
        scale.resolve(100);
        scale.reset();
        assert!(scale.extensions().is_empty());
    }
}

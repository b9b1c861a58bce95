//! Computed color parsing.
//!
//! Browsers report computed colors as `rgb(...)`/`rgba(...)`; snapshots written
//! by hand often use hex. Both forms normalise to [`Rgba`].

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color with a floating point alpha channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: f32,
}

impl Rgba {
    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse a CSS color in one of the forms a computed style lookup reports.
    ///
    /// Supported: `rgb(r, g, b)`, `rgba(r, g, b, a)`, the space separated
    /// `rgb(r g b / a)`, `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` and
    /// `transparent`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim().to_ascii_lowercase();

        if s == "transparent" {
            return Some(Self {
                r: 0,
                g: 0,
                b: 0,
                a: 0.0,
            });
        }

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        let body = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))?
            .strip_suffix(')')?;

        Self::parse_functional(body)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let expanded: String = match hex.len() {
            3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => hex.to_string(),
            _ => return None,
        };

        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
        let a = if expanded.len() == 8 {
            f32::from(channel(6)?) / 255.0
        } else {
            1.0
        };

        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }

    fn parse_functional(body: &str) -> Option<Self> {
        let (channels, alpha) = match body.split_once('/') {
            Some((channels, alpha)) => (channels, Some(alpha)),
            None => (body, None),
        };

        let mut parts: Vec<&str> = if channels.contains(',') {
            channels.split(',').map(str::trim).collect()
        } else {
            channels.split_whitespace().collect()
        };

        let alpha = match (alpha, parts.len()) {
            (Some(a), 3) => Some(a.trim()),
            (None, 4) => parts.pop(),
            (None, 3) => None,
            _ => return None,
        };

        let a = match alpha {
            Some(a) => parse_alpha(a)?,
            None => 1.0,
        };

        Some(Self {
            r: parse_channel(parts[0])?,
            g: parse_channel(parts[1])?,
            b: parse_channel(parts[2])?,
            a,
        })
    }

    /// Whether the color is fully transparent.
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Whether the color carries partial transparency.
    #[must_use]
    pub fn has_alpha(&self) -> bool {
        self.a < 1.0
    }

    /// Pack the three color channels into a 6-digit hex string (`#rrggbb`).
    ///
    /// The alpha channel is not represented.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex_of(self.r, self.g, self.b)
    }
}

/// Pack three integer channels into `#rrggbb`.
#[must_use]
pub fn hex_of(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_channel(raw: &str) -> Option<u8> {
    let value = if let Some(pct) = raw.strip_suffix('%') {
        pct.trim().parse::<f64>().ok()? * 255.0 / 100.0
    } else {
        raw.parse::<f64>().ok()?
    };
    if !value.is_finite() {
        return None;
    }
    Some(value.round().clamp(0.0, 255.0) as u8)
}

#[allow(clippy::cast_possible_truncation)]
fn parse_alpha(raw: &str) -> Option<f32> {
    let value = if let Some(pct) = raw.strip_suffix('%') {
        pct.trim().parse::<f64>().ok()? / 100.0
    } else {
        raw.parse::<f64>().ok()?
    };
    if !value.is_finite() {
        return None;
    }
    Some(value.clamp(0.0, 1.0) as f32)
}

use eyre::{bail, Result, WrapErr};
use gpui::{Hsla, Rgba};
use serde::{Deserialize, Serialize};

use crate::frame::BarState;

// Serialization of Hsla as "#RRGGBB" strings
pub mod hex_color {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(color: &Hsla, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_hex(*color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Hsla, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_hex_str(&text).map_err(serde::de::Error::custom)
    }

    pub fn parse_hex_str(hex: &str) -> eyre::Result<Hsla> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 {
            bail!("expected #RRGGBB, got {hex:?}");
        }
        let value = u32::from_str_radix(digits, 16)
            .wrap_err_with(|| format!("invalid hex color {hex:?}"))?;
        Ok(gpui::rgb(value).into())
    }

    pub fn to_hex(color: Hsla) -> String {
        let rgba = Rgba::from(color);
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(rgba.r),
            channel(rgba.g),
            channel(rgba.b)
        )
    }
}

/// Colors of the sorting canvas, one per bar state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SortTheme {
    pub name: String,
    #[serde(with = "hex_color")]
    pub background: Hsla,
    #[serde(with = "hex_color")]
    pub surface: Hsla,
    #[serde(with = "hex_color")]
    pub text: Hsla,
    #[serde(with = "hex_color")]
    pub bar_default: Hsla,
    #[serde(with = "hex_color")]
    pub bar_comparing: Hsla,
    #[serde(with = "hex_color")]
    pub bar_swapping: Hsla,
    #[serde(with = "hex_color")]
    pub bar_sorted: Hsla,
    #[serde(with = "hex_color")]
    pub bar_pivot: Hsla,
    #[serde(with = "hex_color")]
    pub bar_current: Hsla,
}

impl Default for SortTheme {
    fn default() -> Self {
        Self {
            name: "default".into(),
            background: gpui::rgb(0x2c3e50).into(),
            surface: gpui::rgb(0x34495e).into(),
            text: gpui::rgb(0xecf0f1).into(),
            bar_default: gpui::rgb(0x3498db).into(),
            bar_comparing: gpui::rgb(0xe74c3c).into(),
            bar_swapping: gpui::rgb(0xf39c12).into(),
            bar_sorted: gpui::rgb(0x2ecc71).into(),
            bar_pivot: gpui::rgb(0x9b59b6).into(),
            bar_current: gpui::rgb(0x1abc9c).into(),
        }
    }
}

impl SortTheme {
    pub const PRESETS: [&'static str; 4] = ["default", "dark", "light", "high_contrast"];

    pub fn dark() -> Self {
        Self {
            name: "dark".into(),
            background: gpui::rgb(0x1a1a1a).into(),
            surface: gpui::rgb(0x2d2d2d).into(),
            text: gpui::rgb(0xffffff).into(),
            bar_default: gpui::rgb(0x3498db).into(),
            bar_comparing: gpui::rgb(0xe74c3c).into(),
            bar_swapping: gpui::rgb(0xf39c12).into(),
            bar_sorted: gpui::rgb(0x2ecc71).into(),
            bar_pivot: gpui::rgb(0x9b59b6).into(),
            ..Self::default()
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".into(),
            background: gpui::rgb(0xf8f9fa).into(),
            surface: gpui::rgb(0xffffff).into(),
            text: gpui::rgb(0x212529).into(),
            bar_default: gpui::rgb(0x0d6efd).into(),
            bar_comparing: gpui::rgb(0xdc3545).into(),
            bar_swapping: gpui::rgb(0xfd7e14).into(),
            bar_sorted: gpui::rgb(0x198754).into(),
            bar_pivot: gpui::rgb(0x6f42c1).into(),
            ..Self::default()
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high_contrast".into(),
            background: gpui::rgb(0x000000).into(),
            surface: gpui::rgb(0xffffff).into(),
            text: gpui::rgb(0xffffff).into(),
            bar_default: gpui::rgb(0x0000ff).into(),
            bar_comparing: gpui::rgb(0xff0000).into(),
            bar_swapping: gpui::rgb(0xffff00).into(),
            bar_sorted: gpui::rgb(0x00ff00).into(),
            bar_pivot: gpui::rgb(0xff00ff).into(),
            ..Self::default()
        }
    }

    /// Looks up a preset. Unknown names keep the default colors.
    pub fn preset(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "light" => Self::light(),
            "high_contrast" => Self::high_contrast(),
            _ => Self::default(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("invalid theme")
    }

    pub fn bar_color(&self, state: BarState) -> Hsla {
        match state {
            BarState::Default => self.bar_default,
            BarState::Comparing => self.bar_comparing,
            BarState::Swapping => self.bar_swapping,
            BarState::Sorted => self.bar_sorted,
            BarState::Pivot => self.bar_pivot,
            BarState::Current => self.bar_current,
        }
    }

    /// Overrides one bar color from a hex string.
    pub fn set_bar_color(&mut self, state: BarState, hex: &str) -> Result<()> {
        let color = hex_color::parse_hex_str(hex)?;
        let slot = match state {
            BarState::Default => &mut self.bar_default,
            BarState::Comparing => &mut self.bar_comparing,
            BarState::Swapping => &mut self.bar_swapping,
            BarState::Sorted => &mut self.bar_sorted,
            BarState::Pivot => &mut self.bar_pivot,
            BarState::Current => &mut self.bar_current,
        };
        *slot = color;
        Ok(())
    }
}

/// Linear blend in RGB space, `factor` clamped to [0, 1].
pub fn interpolate(from: Hsla, to: Hsla, factor: f32) -> Hsla {
    let t = factor.clamp(0.0, 1.0);
    let a = Rgba::from(from);
    let b = Rgba::from(to);
    let mix = |x: f32, y: f32| x + (y - x) * t;
    Rgba {
        r: mix(a.r, b.r),
        g: mix(a.g, b.g),
        b: mix(a.b, b.b),
        a: mix(a.a, b.a),
    }
    .into()
}

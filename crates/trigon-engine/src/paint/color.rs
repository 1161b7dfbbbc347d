use anyhow::{Context, Result, bail};

/// Straight-alpha RGBA color with components in `[0, 1]`.
///
/// The demos render to opaque targets without blending, so no
/// premultiplication is applied anywhere.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            1.0,
        )
    }

    /// Parses a `#rrggbb` hex string into an opaque color.
    ///
    /// Each channel normalizes to `value / 255`, matching what a browser
    /// color input reports. Shorthand (`#rgb`) and alpha (`#rrggbbaa`)
    /// forms are rejected.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let Some(digits) = hex.strip_prefix('#') else {
            bail!("color '{hex}' does not start with '#'");
        };
        if digits.len() != 6 || !digits.is_ascii() {
            bail!("color '{hex}' is not of the form #rrggbb");
        }

        let channel = |range: std::ops::Range<usize>| -> Result<u8> {
            u8::from_str_radix(&digits[range], 16)
                .with_context(|| format!("color '{hex}' has a non-hex channel"))
        };

        Ok(Self::from_srgb_u8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
        ))
    }

    /// Returns the components as an array, for uniform uploads.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Converts to the f64 clear-color type wgpu render passes take.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_yellow_normalizes_per_channel() {
        let c = Color::from_hex("#ffff00").unwrap();
        assert_eq!((c.r, c.g, c.b), (1.0, 1.0, 0.0));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn hex_channels_divide_by_255() {
        let c = Color::from_hex("#336699").unwrap();
        assert_eq!(c.r, 0x33 as f32 / 255.0);
        assert_eq!(c.g, 0x66 as f32 / 255.0);
        assert_eq!(c.b, 0x99 as f32 / 255.0);
    }

    #[test]
    fn hex_accepts_uppercase() {
        let c = Color::from_hex("#FF0080").unwrap();
        assert_eq!(c.r, 1.0);
        assert_eq!(c.b, 0x80 as f32 / 255.0);
    }

    #[test]
    fn hex_rejects_missing_prefix() {
        assert!(Color::from_hex("ffff00").is_err());
    }

    #[test]
    fn hex_rejects_wrong_length() {
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#ffff0000").is_err());
    }

    #[test]
    fn hex_rejects_non_hex_digits() {
        assert!(Color::from_hex("#gg0000").is_err());
    }

    #[test]
    fn black_is_opaque() {
        assert_eq!(Color::BLACK.to_array(), [0.0, 0.0, 0.0, 1.0]);
    }
}

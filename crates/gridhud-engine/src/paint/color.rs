use serde::Serialize;

/// Straight-alpha RGBA color with 8-bit channels.
///
/// Backends own the conversion to whatever their surface expects
/// (premultiplied, linear, float). The overlay only ever speaks bytes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Byte channels with a fractional opacity in `[0, 1]`.
    ///
    /// Out-of-range opacity is clamped; `0.2` maps to alpha `51`.
    #[inline]
    pub fn with_opacity(r: u8, g: u8, b: u8, opacity: f32) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        assert!(Color::rgb(1, 2, 3).is_opaque());
        assert!(!Color::rgba(0, 0, 0, 0).is_opaque());
    }

    #[test]
    fn with_opacity_maps_fraction_to_byte() {
        assert_eq!(Color::with_opacity(255, 255, 255, 0.2).a, 51);
        assert_eq!(Color::with_opacity(0, 0, 0, 1.0).a, 255);
        assert_eq!(Color::with_opacity(0, 0, 0, 0.0).a, 0);
    }

    #[test]
    fn with_opacity_clamps() {
        assert_eq!(Color::with_opacity(0, 0, 0, 3.0).a, 255);
        assert_eq!(Color::with_opacity(0, 0, 0, -1.0).a, 0);
    }
}

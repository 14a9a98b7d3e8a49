use std::fmt;

/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Rationale:
/// - Correct blending with linear filtering (avoids fringes).
/// - Matches typical GPU blending configurations for UI compositing.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
    }

    /// Creates a premultiplied linear color from straight sRGB bytes (`0`–`255`).
    ///
    /// This is the preferred constructor for colors coming from hex literals.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_srgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied linear color from straight sRGB `f32` components in `[0, 1]`.
    #[inline]
    pub fn from_srgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_straight(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a)
    }

    /// Parses a hex color literal.
    ///
    /// Accepted forms (leading `#` optional):
    /// - `RGB` / `ARGB`: one hex digit per channel, each digit doubled
    /// - `RRGGBB` / `AARRGGBB`: two hex digits per channel
    ///
    /// Alpha comes first when present, so `#beee` is a translucent light grey.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if !digits.is_ascii() {
            return Err(ColorParseError::new(s, "not an ASCII hex literal"));
        }

        let nibble = |i: usize| -> Result<u8, ColorParseError> {
            let c = digits.as_bytes()[i] as char;
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| ColorParseError::new(s, format!("invalid hex digit '{c}'")))
        };
        let short = |i: usize| nibble(i).map(|n| n * 17);
        let long = |i: usize| -> Result<u8, ColorParseError> { Ok(nibble(i)? * 16 + nibble(i + 1)?) };

        let (a, r, g, b) = match digits.len() {
            3 => (255, short(0)?, short(1)?, short(2)?),
            4 => (short(0)?, short(1)?, short(2)?, short(3)?),
            6 => (255, long(0)?, long(2)?, long(4)?),
            8 => (long(0)?, long(2)?, long(4)?, long(6)?),
            n => {
                return Err(ColorParseError::new(
                    s,
                    format!("expected 3, 4, 6 or 8 hex digits, found {n}"),
                ));
            }
        };

        Ok(Self::from_srgb_u8(r, g, b, a))
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// A malformed hex color literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError {
    pub input: String,
    pub message: String,
}

impl ColorParseError {
    fn new(input: &str, message: impl Into<String>) -> Self {
        Self { input: input.to_string(), message: message.into() }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: {}", self.input, self.message)
    }
}

impl std::error::Error for ColorParseError {}

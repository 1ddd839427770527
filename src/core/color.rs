use super::blend::Weights;
use super::catalog::Ingredient;
use glam::DVec3;
use std::fmt;

/// Returned when the product is unavailable or has no ingredients.
pub const NEUTRAL_GRAY: Rgba = Rgba {
    r: 200,
    g: 200,
    b: 200,
    a: 0.3,
};
/// Returned when every slot weight is zero.
pub const EMPTY_POT: Rgba = Rgba {
    r: 255,
    g: 250,
    b: 240,
    a: 0.3,
};

/// Substituted for an ingredient color that fails to parse.
pub const MALFORMED_RGB: Rgb = Rgb::new(200, 200, 200);
/// Substituted when a slot has no ingredient behind it (#CCCCCC).
pub const MISSING_SLOT_RGB: Rgb = Rgb::new(204, 204, 204);

// Tuned blend constants: slot 0 is intentionally weighted heavier.
pub const SLOT_GAIN: [f64; 3] = [0.4, 0.35, 0.35];
pub const CHANNEL_BIAS: DVec3 = DVec3::new(25.0, 20.0, 15.0);

pub const OPACITY_BASE: f64 = 0.3;
pub const OPACITY_SPAN: f64 = 0.55;
pub const OPACITY_FULL_TOTAL: f64 = 300.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (leading `#` optional, hex digits case-insensitive).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        // from_str_radix would accept a leading '+', so check digits up front
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Like [`Rgb::from_hex`] but degrades to [`MALFORMED_RGB`].
    #[inline]
    pub fn from_hex_or_fallback(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or(MALFORMED_RGB)
    }

    #[inline]
    fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.r as f64, self.g as f64, self.b as f64)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// CSS `rgba(...)` string for style attributes and canvas fills.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Opacity of the liquid for a given total slot weight.
#[inline]
pub fn liquid_opacity(total: u64) -> f64 {
    OPACITY_BASE + (total as f64 / OPACITY_FULL_TOTAL) * OPACITY_SPAN
}

/// Blend the slot colors into the liquid swatch color.
///
/// Never fails: an empty ingredient list yields [`NEUTRAL_GRAY`], a zero total
/// yields [`EMPTY_POT`] and an unparsable color only affects its own slot.
pub fn liquid_color(ingredients: &[&Ingredient], weights: &Weights) -> Rgba {
    if ingredients.is_empty() {
        return NEUTRAL_GRAY;
    }
    let total = weights.total();
    if total == 0 {
        return EMPTY_POT;
    }

    let mixed = weights
        .slots()
        .iter()
        .enumerate()
        .fold(DVec3::ZERO, |acc, (i, &w)| {
            let rgb = ingredients
                .get(i)
                .map(|ing| Rgb::from_hex_or_fallback(ing.color))
                .unwrap_or(MISSING_SLOT_RGB);
            let n = w as f64 / 100.0;
            acc + rgb.to_dvec3() * n * SLOT_GAIN[i]
        })
        + CHANNEL_BIAS;
    let c = mixed.round().min(DVec3::splat(255.0));

    Rgba {
        r: c.x as u8,
        g: c.y as u8,
        b: c.z as u8,
        a: liquid_opacity(total),
    }
}

use std::fmt;
use std::str::FromStr;

use crate::error::{BorderError, Result, StyleError};

/// Chroma below which a colour is treated as hueless.
const ACHROMATIC_CHROMA: f64 = 1e-6;

/// An opaque 8-bit sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A colour in the OKLCH space: lightness, chroma and hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rgb` or `#rrggbb`. Surrounding whitespace is ignored, as CSS
    /// custom property values usually carry a leading space.
    ///
    /// # Errors
    ///
    /// Returns `StyleError::InvalidColor` for anything else.
    pub fn from_hex(input: &str) -> Result<Self> {
        let invalid = || BorderError::from(StyleError::InvalidColor(input.to_owned()));
        let digits = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Formats as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    #[must_use]
    pub fn to_oklch(&self) -> Oklch {
        let r = srgb_to_linear(f64::from(self.r) / 255.0);
        let g = srgb_to_linear(f64::from(self.g) / 255.0);
        let b = srgb_to_linear(f64::from(self.b) / 255.0);

        let l = (0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b).cbrt();
        let m = (0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b).cbrt();
        let s = (0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b).cbrt();

        let lightness = 0.210_454_255_3 * l + 0.793_617_785_0 * m - 0.004_072_046_8 * s;
        let a = 1.977_998_495_1 * l - 2.428_592_205_0 * m + 0.450_593_709_9 * s;
        let bb = 0.025_904_037_1 * l + 0.782_771_766_2 * m - 0.808_675_766_0 * s;

        let chroma = a.hypot(bb);
        let hue = if chroma < ACHROMATIC_CHROMA {
            0.0
        } else {
            bb.atan2(a).to_degrees().rem_euclid(360.0)
        };
        Oklch {
            l: lightness,
            c: chroma,
            h: hue,
        }
    }

    /// Converts back to sRGB, clamping out-of-gamut channels.
    #[must_use]
    pub fn from_oklch(color: &Oklch) -> Self {
        let hue = color.h.to_radians();
        let a = color.c * hue.cos();
        let b = color.c * hue.sin();

        let l = (color.l + 0.396_337_777_4 * a + 0.215_803_757_3 * b).powi(3);
        let m = (color.l - 0.105_561_345_8 * a - 0.063_854_172_8 * b).powi(3);
        let s = (color.l - 0.089_484_177_5 * a - 1.291_485_548_0 * b).powi(3);

        let r = 4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s;
        let g = -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s;
        let bl = -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s;

        Self::new(to_channel(r), to_channel(g), to_channel(bl))
    }

    /// Straight sRGB interpolation, as a canvas gradient blends its stops.
    #[must_use]
    pub fn lerp_srgb(&self, other: &Self, t: f64) -> Self {
        let mix = |a: u8, b: u8| {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            quantize(v / 255.0)
        };
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl Oklch {
    /// Linear in lightness and chroma, shortest path around the hue circle.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            l: self.l + (other.l - self.l) * t,
            c: self.c + (other.c - self.c) * t,
            h: interpolate_degrees_shorter(self.h, other.h, t),
        }
    }
}

/// Interpolates two angles in degrees along the shorter arc.
///
/// The result is not wrapped back into `[0, 360)`.
#[must_use]
pub fn interpolate_degrees_shorter(start: f64, end: f64, t: f64) -> f64 {
    let mut delta = (end - start) % 360.0;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    start + t * delta
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn to_channel(linear: f64) -> u8 {
    quantize(linear_to_srgb(linear))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn quantize(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl FromStr for Color {
    type Err = BorderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

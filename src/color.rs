//! RGBA color value and the color-space conversions palette formats need.
//!
//! The conversion functions are pure and never fail: boundary inputs
//! (h = 360, s = 0, L = 0) and out-of-domain results are handled by
//! normalization and clamping, not rejection.

/// An 8-bit-per-channel RGBA color.
///
/// `Default` is transparent black (0, 0, 0, 0), the "unset" value that
/// entries with an unrecognized color-space tag are left at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[cfg(feature = "rgb")]
impl From<Color> for rgb::RGBA8 {
    fn from(c: Color) -> Self {
        rgb::RGBA8 {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGBA8> for Color {
    fn from(c: rgb::RGBA8) -> Self {
        Color::rgba(c.r, c.g, c.b, c.a)
    }
}

#[cfg(feature = "rgb")]
impl From<Color> for rgb::RGB8 {
    fn from(c: Color) -> Self {
        rgb::RGB8 {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// Scale a normalized channel to a byte, rounding half away from zero.
/// Float-to-int casts saturate, so inputs outside [0, 1] clamp to 0/255.
#[inline]
fn channel(v: f64) -> u8 {
    (v * 255.0).round() as u8
}

/// Build an opaque [`Color`] from normalized `[0, 1]` RGB components.
pub fn from_normalized_rgb(r: f64, g: f64, b: f64) -> Color {
    Color::rgb(channel(r), channel(g), channel(b))
}

/// Convert HSV (`h ∈ [0, 360]`, `s, v ∈ [0, 1]`) to an opaque RGB color.
///
/// Standard six-sector algorithm; `h = 360` wraps to 0 and `s = 0`
/// short-circuits to the achromatic gray at brightness `v`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Color {
    if s == 0.0 {
        return from_normalized_rgb(v, v, v);
    }

    let h = if h == 360.0 { 0.0 } else { h } / 60.0;
    let i = h.trunc();
    let f = h - i;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match i as i32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    from_normalized_rgb(r, g, b)
}

/// Convert CMYK to an opaque RGB color.
///
/// Components are divided by `scale` to normalize to `[0, 1]` first
/// (pass 1.0 for already-normalized input). The byte conversion truncates
/// rather than rounds; ACO and ASE consumers depend on that exact result.
pub fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64, scale: f64) -> Color {
    let c = c / scale;
    let m = m / scale;
    let y = y / scale;
    let k = k / scale;

    let r = (255.0 * (1.0 - c) * (1.0 - k)) as u8;
    let g = (255.0 * (1.0 - m) * (1.0 - k)) as u8;
    let b = (255.0 * (1.0 - y) * (1.0 - k)) as u8;

    Color::rgb(r, g, b)
}

/// Convert CIE Lab (D65 reference white) to an opaque sRGB color.
///
/// Components are divided by `scale` first (ACO stores L scaled by 100).
/// Channels are clamped to `[0, 1]` before the byte conversion, so
/// out-of-gamut inputs clip instead of wrapping.
pub fn lab_to_rgb(l: f64, a: f64, b: f64, scale: f64) -> Color {
    let l = l / scale;
    let a = a / scale;
    let b = b / scale;

    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    // Inverse of the Lab companding function, threshold 0.008856.
    let f_inv = |t: f64| {
        if t * t * t > 0.008856 {
            t * t * t
        } else {
            (t - 16.0 / 116.0) / 7.787
        }
    };

    let x = 0.95047 * f_inv(fx);
    let y = 1.00000 * f_inv(fy);
    let z = 1.08883 * f_inv(fz);

    let r = x * 3.2406 + y * -1.5372 + z * -0.4986;
    let g = x * -0.9689 + y * 1.8758 + z * 0.0415;
    let b = x * 0.0557 + y * -0.2040 + z * 1.0570;

    // Linear sRGB to gamma-encoded sRGB.
    let gamma = |u: f64| {
        if u > 0.0031308 {
            1.055 * u.powf(1.0 / 2.4) - 0.055
        } else {
            12.92 * u
        }
    };

    Color::rgb(
        channel(gamma(r).clamp(0.0, 1.0)),
        channel(gamma(g).clamp(0.0, 1.0)),
        channel(gamma(b).clamp(0.0, 1.0)),
    )
}

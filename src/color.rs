//! The color value type and color-space math.
//!
//! Every color in this crate is an [`Rgba`] with all four channels in
//! \[0, 1\].  Interpolation between colors happens in CIE L\*C\*h\*_ab
//! (see [`Lch`]), which avoids the muddy midpoints of straight RGB
//! blending.

use std::f64::consts::PI;

use crate::error::{Result, StyleError};

/// An RGBA color.  Channels are `f64` in \[0, 1\].
pub type Rgba = rgb::RGBA<f64>;

/// Build an opaque [`Rgba`] from channels in \[0, 1\].
#[inline]
pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Rgba {
    Rgba { r, g, b, a }
}

/// Build an [`Rgba`] from 8-bit channels, opaque.
#[inline]
pub fn from_u8(r: u8, g: u8, b: u8) -> Rgba {
    Rgba {
        r: r as f64 / 255.,
        g: g as f64 / 255.,
        b: b as f64 / 255.,
        a: 1.,
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` into an [`Rgba`].
///
/// # Example
///
/// ```
/// let ink = figstyle::from_hex("#231f20").unwrap();
/// assert!(ink.r < 0.2);
/// ```
pub fn from_hex(s: &str) -> Result<Rgba> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    // Length is in bytes; non-ASCII input must not reach the slicing
    // below or it would panic on a char boundary.
    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        return Err(StyleError::InvalidColor {
            message: format!("expected #rrggbb or #rrggbbaa, got {:?}", s),
        });
    }
    let byte = |i: usize| -> Result<f64> {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map(|v| v as f64 / 255.)
            .map_err(|_| StyleError::InvalidColor {
                message: format!("non-hex digit in {:?}", s),
            })
    };
    let a = if hex.len() == 8 { byte(6)? } else { 1. };
    Ok(Rgba { r: byte(0)?, g: byte(2)?, b: byte(4)?, a })
}

/// Format an [`Rgba`] as a CSS `#rrggbb` string (alpha is dropped).
pub fn to_css(c: Rgba) -> String {
    let q = |x: f64| (x.clamp(0., 1.) * 255.).round() as u8;
    format!("#{:02x}{:02x}{:02x}", q(c.r), q(c.g), q(c.b))
}

/// Convert the color to grayscale.
pub fn to_gray(c: Rgba) -> Rgba {
    let x = 0.299 * c.r + 0.587 * c.g + 0.114 * c.b;
    Rgba { r: x, g: x, b: x, a: c.a }
}

/// Darken (or, with `factor > 1`, lighten) a color by scaling its HLS
/// lightness.  `factor = 1` returns the color unchanged, `factor = 0`
/// yields black.  Alpha passes through.
pub fn darken(color: Rgba, factor: f64) -> Rgba {
    let (h, l, s) = rgb_to_hls(color.r, color.g, color.b);
    let (r, g, b) = hls_to_rgb(h, (l * factor).clamp(0., 1.), s);
    Rgba { r, g, b, a: color.a }
}

/// RGB (each in \[0, 1\]) to HLS.  Hue is in \[0, 1).
pub(crate) fn rgb_to_hls(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let sumc = maxc + minc;
    let rangec = maxc - minc;
    let l = sumc / 2.;
    if rangec == 0. {
        return (0., l, 0.);
    }
    let s = if l <= 0.5 { rangec / sumc } else { rangec / (2. - sumc) };
    let rc = (maxc - r) / rangec;
    let gc = (maxc - g) / rangec;
    let bc = (maxc - b) / rangec;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2. + rc - bc
    } else {
        4. + gc - rc
    };
    ((h / 6.).rem_euclid(1.), l, s)
}

/// HLS to RGB, inverse of [`rgb_to_hls`].
pub(crate) fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0. {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1. + s) } else { l + s - l * s };
    let m1 = 2. * l - m2;
    let v = |hue: f64| -> f64 {
        let hue = hue.rem_euclid(1.);
        if hue < 1. / 6. {
            m1 + (m2 - m1) * hue * 6.
        } else if hue < 0.5 {
            m2
        } else if hue < 2. / 3. {
            m1 + (m2 - m1) * (2. / 3. - hue) * 6.
        } else {
            m1
        }
    };
    (v(h + 1. / 3.), v(h), v(h - 1. / 3.))
}

/// The type for colors in the CIE L*C*h*_ab color space with a D50
/// reference white point and an alpha component.  This color space is
/// CIE L*a*b* with polar coordinates.
#[derive(Clone, Copy)]
pub(crate) struct Lch {
    /// The lightness in the range 0. to 100.
    pub(crate) l: f64,
    /// The chroma, in the range 0. to 181.02, but less in practice.
    pub(crate) c: f64,
    /// The hue in radians in the range 0. to 2π.
    pub(crate) h: f64,
    /// Alpha component
    pub(crate) a: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0;
pub(crate) const TWO_PI: f64 = 2. * PI;

impl Lch {
    pub(crate) fn from_rgb(c: Rgba) -> Lch {
        const C0: f64 = 1. / 3.;
        const C1: f64 = 841. / 108.;
        const C2: f64 = 4. / 29.;
        let xr = 0.4522795 * c.r + 0.3993744 * c.g + 0.1483460 * c.b;
        let yr = 0.2225105 * c.r + 0.7168863 * c.g + 0.0606032 * c.b;
        let zr = 0.0168820 * c.r + 0.1176865 * c.g + 0.8654315 * c.b;
        let fx = if xr > EPS { xr.powf(C0) } else { C1 * xr + C2 };
        let fy = if yr > EPS { yr.powf(C0) } else { C1 * yr + C2 };
        let fz = if zr > EPS { zr.powf(C0) } else { C1 * zr + C2 };
        let l = 116. * fy - 16.;
        let a = 500. * (fx - fy);
        let b = 200. * (fy - fz);
        let h = {
            let h = b.atan2(a);
            if h < 0. { h + TWO_PI } else { h }
        };
        Lch { l, c: a.hypot(b), h, a: c.a }
    }

    pub(crate) fn to_rgb(self) -> Rgba {
        const C0: f64 = 108. / 841.;
        const C1: f64 = 4. / 29.;
        let a = self.c * self.h.cos();
        let b = self.c * self.h.sin();
        let fy = (self.l + 16.) / 116.;
        let fx = a / 500. + fy;
        let fz = fy - b / 200.;
        let fx1 = if fx > EPS0 { fx * fx * fx } else { C0 * (fx - C1) };
        let fy1 = if fy > EPS0 { fy * fy * fy } else { C0 * (fy - C1) };
        let fz1 = if fz > EPS0 { fz * fz * fz } else { C0 * (fz - C1) };
        let r = 3.0215932 * fx1 - 1.6168777 * fy1 - 0.4047152 * fz1;
        let g = -0.9437222 * fx1 + 1.9161365 * fy1 + 0.0275856 * fz1;
        let b = 0.0693906 * fx1 - 0.2290271 * fy1 + 1.1596365 * fz1;
        Rgba { r, g, b, a: self.a }
    }
}

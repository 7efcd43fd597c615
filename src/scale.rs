//! Continuous color scales.
//!
//! A [`ColorScale`] maps a position t ∈ \[0, 1\] to an [`Rgba`].  Two
//! scale families live here: [`Gradient`] (two colors blended in LCh)
//! and [`ListedScale`] (a fixed list of colors looked up by nearest
//! sample, matching matplotlib's `ListedColormap`).  Palette-backed
//! scales are in [`crate::palettes`].

use tracing::debug;

use crate::color::{Lch, Rgba, TWO_PI};
use crate::error::{Result, StyleError};
use std::f64::consts::PI;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorScale {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].  Values
    /// outside the interval are clamped.
    fn rgb(&self, t: f64) -> Rgba;

    /// Sample the scale at `n` evenly spaced positions covering
    /// \[0, 1\] (endpoints included).  `n = 1` yields the color at 0.
    fn sample(&self, n: usize) -> Vec<Rgba> {
        if n == 1 {
            return vec![self.rgb(0.)];
        }
        let dt = 1. / (n - 1) as f64;
        (0..n).map(|i| self.rgb(i as f64 * dt)).collect()
    }
}

impl<S: ColorScale + ?Sized> ColorScale for &S {
    fn rgb(&self, t: f64) -> Rgba {
        (**self).rgb(t)
    }
}

/// Gradient between two colors, interpolated in LCh.
///
/// Created by [`Gradient::new`].
pub struct Gradient {
    c0: Lch, // first color
    dc: Lch, // last - first color
}

impl Gradient {
    /// Return a gradient from color `c0` to color `c1`.
    ///
    /// # Example
    ///
    /// ```
    /// use figstyle::{rgba, ColorScale, Gradient};
    /// let red = rgba(1., 0., 0., 1.);
    /// let blue = rgba(0., 0., 1., 1.);
    /// let mid = Gradient::new(red, blue).rgb(0.5);
    /// ```
    pub fn new(c0: Rgba, c1: Rgba) -> Gradient {
        let lch0 = Lch::from_rgb(c0);
        let lch1 = Lch::from_rgb(c1);
        let h0 = lch0.h;
        let h1 = lch1.h;
        // Take the short way around the hue circle.
        let dh = {
            if h1 > h0 && h1 - h0 > PI { h1 - (h0 + TWO_PI) }
            else if h1 < h0 && h0 - h1 > PI { h1 + TWO_PI - h0 }
            else { h1 - h0 }
        };
        Gradient {
            c0: lch0,
            dc: Lch {
                l: lch1.l - lch0.l,
                c: lch1.c - lch0.c,
                h: dh,
                a: lch1.a - lch0.a,
            },
        }
    }

    /// Returns the color corresponding to `t` ∈ \[0., 1.\] but does
    /// not check the latter condition.
    #[inline]
    pub(crate) fn rgb_unsafe(&self, t: f64) -> Rgba {
        Lch {
            l: self.c0.l + t * self.dc.l,
            c: self.c0.c + t * self.dc.c,
            h: self.c0.h + t * self.dc.h,
            a: self.c0.a + t * self.dc.a,
        }
        .to_rgb()
    }
}

impl ColorScale for Gradient {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], where
    /// `t == 0.` returns the first color provided in the gradient and
    /// `t == 1.` the second.
    fn rgb(&self, t: f64) -> Rgba {
        self.rgb_unsafe(t.clamp(0., 1.))
    }
}

/// A fixed list of colors treated as a continuous scale.
///
/// Lookup is nearest-sample: position `t` maps to color
/// `⌊t·N⌋` clamped to `N − 1`, so the i-th of N colors owns the
/// interval `[i/N, (i+1)/N)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedScale {
    colors: Vec<Rgba>,
}

impl ListedScale {
    /// Wrap a non-empty color list.
    pub fn new(colors: Vec<Rgba>) -> Result<ListedScale> {
        if colors.is_empty() {
            return Err(StyleError::InvalidParameter {
                param: "colors".to_string(),
                message: "a listed scale needs at least one color".to_string(),
            });
        }
        Ok(ListedScale { colors })
    }

    /// Returns the number of colors in the scale.  Always at least 1,
    /// enforced at construction.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns the underlying colors.
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }
}

impl ColorScale for ListedScale {
    fn rgb(&self, t: f64) -> Rgba {
        let n = self.colors.len();
        let i = (t.clamp(0., 1.) * n as f64) as usize;
        self.colors[i.min(n - 1)]
    }
}

/// Restrict `scale` to the sub-range `[left, right]` of its domain,
/// re-sampled into `n` discrete steps.
///
/// The i-th sample (i in `0..n`) is `scale(left + i/(n−1)·(right−left))`,
/// so evaluating the result at `i/(n−1)` reproduces the source scale at
/// the corresponding position.  Requires `0 ≤ left < right ≤ 1` and
/// `n ≥ 1`.
pub fn truncate(scale: &impl ColorScale, left: f64, right: f64, n: usize) -> Result<ListedScale> {
    if !(0. ..1.).contains(&left) || !(left..=1.).contains(&right) || left >= right {
        return Err(StyleError::InvalidRange {
            message: format!(
                "truncation needs 0 <= left < right <= 1, got left={}, right={}",
                left, right
            ),
        });
    }
    if n < 1 {
        return Err(StyleError::InvalidParameter {
            param: "n".to_string(),
            message: "at least one sample is required".to_string(),
        });
    }
    debug!(left, right, n, "truncating color scale");
    let colors = if n == 1 {
        vec![scale.rgb(left)]
    } else {
        let dt = (right - left) / (n - 1) as f64;
        (0..n).map(|i| scale.rgb(left + i as f64 * dt)).collect()
    };
    ListedScale::new(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgba;
    use approx::assert_relative_eq;

    fn assert_color_eq(a: Rgba, b: Rgba) {
        assert_relative_eq!(a.r, b.r, epsilon = 1e-9);
        assert_relative_eq!(a.g, b.g, epsilon = 1e-9);
        assert_relative_eq!(a.b, b.b, epsilon = 1e-9);
        assert_relative_eq!(a.a, b.a, epsilon = 1e-9);
    }

    #[test]
    fn gradient_hits_endpoints() {
        let c0 = rgba(0.1, 0.2, 0.3, 1.0);
        let c1 = rgba(0.9, 0.8, 0.7, 1.0);
        let g = Gradient::new(c0, c1);
        let start = g.rgb(0.);
        let end = g.rgb(1.);
        assert_relative_eq!(start.r, c0.r, epsilon = 1e-6);
        assert_relative_eq!(start.g, c0.g, epsilon = 1e-6);
        assert_relative_eq!(end.b, c1.b, epsilon = 1e-6);
    }

    #[test]
    fn gradient_clamps() {
        let g = Gradient::new(rgba(0., 0., 0., 1.), rgba(1., 1., 1., 1.));
        assert_color_eq(g.rgb(-3.), g.rgb(0.));
        assert_color_eq(g.rgb(7.), g.rgb(1.));
    }

    #[test]
    fn listed_scale_nearest_lookup() {
        let colors =
            vec![rgba(1., 0., 0., 1.), rgba(0., 1., 0., 1.), rgba(0., 0., 1., 1.)];
        let s = ListedScale::new(colors.clone()).unwrap();
        assert_color_eq(s.rgb(0.0), colors[0]);
        assert_color_eq(s.rgb(0.32), colors[0]);
        assert_color_eq(s.rgb(0.34), colors[1]);
        assert_color_eq(s.rgb(0.99), colors[2]);
        assert_color_eq(s.rgb(1.0), colors[2]);
    }

    #[test]
    fn listed_scale_rejects_empty() {
        assert!(ListedScale::new(vec![]).is_err());
    }

    #[test]
    fn truncate_matches_source_samples() {
        let g = Gradient::new(rgba(0., 0., 0., 1.), rgba(1., 1., 1., 1.));
        let (left, right, n) = (0.2, 0.8, 7);
        let t = truncate(&g, left, right, n).unwrap();
        for i in 0..n {
            let pos = i as f64 / (n - 1) as f64;
            let expected = g.rgb(left + pos * (right - left));
            assert_color_eq(t.rgb(pos), expected);
        }
    }

    #[test]
    fn truncate_is_pure() {
        let g = Gradient::new(rgba(0.1, 0.4, 0.9, 1.), rgba(0.9, 0.2, 0.1, 1.));
        let a = truncate(&g, 0.1, 0.9, 16).unwrap();
        let b = truncate(&g, 0.1, 0.9, 16).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn truncate_single_sample() {
        let g = Gradient::new(rgba(0., 0., 0., 1.), rgba(1., 1., 1., 1.));
        let t = truncate(&g, 0.25, 0.75, 1).unwrap();
        assert_eq!(t.len(), 1);
        assert_color_eq(t.rgb(0.), g.rgb(0.25));
    }

    #[test]
    fn truncate_validates_bounds() {
        let g = Gradient::new(rgba(0., 0., 0., 1.), rgba(1., 1., 1., 1.));
        assert!(truncate(&g, -0.1, 0.5, 4).is_err());
        assert!(truncate(&g, 0.5, 0.5, 4).is_err());
        assert!(truncate(&g, 0.6, 0.4, 4).is_err());
        assert!(truncate(&g, 0.0, 1.1, 4).is_err());
        assert!(truncate(&g, 0.0, 1.0, 0).is_err());
    }
}

//! Normalizations and mappables.
//!
//! A [`Norm`] maps an arbitrary numeric domain to \[0, 1\] so that a
//! value can be looked up in a [`ColorScale`].  A [`Mappable`] bundles
//! the two for direct value-to-color lookup, mirroring matplotlib's
//! `ScalarMappable`.

use tracing::debug;

use crate::color::Rgba;
use crate::error::{Result, StyleError};
use crate::scale::ColorScale;

/// A mapping from a numeric domain to \[0, 1\].
pub trait Norm {
    /// Map `v` into \[0, 1\].  `vmin` maps to 0 and `vmax` to 1; the
    /// output is not clamped, scales clamp on lookup.
    fn normalize(&self, v: f64) -> f64;
}

impl<N: Norm + ?Sized> Norm for &N {
    fn normalize(&self, v: f64) -> f64 {
        (**self).normalize(v)
    }
}

/// Linear normalization over `[vmin, vmax]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearNorm {
    vmin: f64,
    vmax: f64,
}

impl LinearNorm {
    /// Requires `vmin < vmax` (and both finite).
    pub fn new(vmin: f64, vmax: f64) -> Result<LinearNorm> {
        if !(vmin.is_finite() && vmax.is_finite()) || vmin >= vmax {
            return Err(StyleError::InvalidRange {
                message: format!("linear norm needs vmin < vmax, got [{}, {}]", vmin, vmax),
            });
        }
        Ok(LinearNorm { vmin, vmax })
    }
}

impl Norm for LinearNorm {
    fn normalize(&self, v: f64) -> f64 {
        (v - self.vmin) / (self.vmax - self.vmin)
    }
}

/// Logarithmic normalization over `[vmin, vmax]`.
///
/// `normalize(sqrt(vmin·vmax)) == 0.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogNorm {
    log_vmin: f64,
    log_vmax: f64,
}

impl LogNorm {
    /// Requires `0 < vmin < vmax` (and both finite).
    pub fn new(vmin: f64, vmax: f64) -> Result<LogNorm> {
        if !(vmin.is_finite() && vmax.is_finite()) || vmin <= 0. || vmin >= vmax {
            return Err(StyleError::InvalidRange {
                message: format!("log norm needs 0 < vmin < vmax, got [{}, {}]", vmin, vmax),
            });
        }
        Ok(LogNorm { log_vmin: vmin.ln(), log_vmax: vmax.ln() })
    }
}

impl Norm for LogNorm {
    fn normalize(&self, v: f64) -> f64 {
        (v.ln() - self.log_vmin) / (self.log_vmax - self.log_vmin)
    }
}

/// Bin-edge based normalization.
///
/// `ncolors` bins are bounded by `ncolors + 1` strictly increasing
/// edges.  A value maps to its bin index ([`BoundaryNorm::index`]),
/// clamped to the first/last bin outside the edge range, and
/// [`Norm::normalize`] spreads the indices over \[0, 1\] the way a
/// `ScalarMappable` does.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryNorm {
    boundaries: Vec<f64>,
    ncolors: usize,
}

impl BoundaryNorm {
    /// Requires at least two strictly increasing, finite edges and
    /// `ncolors >= 1`.
    pub fn new(boundaries: Vec<f64>, ncolors: usize) -> Result<BoundaryNorm> {
        if boundaries.len() < 2 {
            return Err(StyleError::InvalidParameter {
                param: "boundaries".to_string(),
                message: "at least two bin edges are required".to_string(),
            });
        }
        if boundaries.iter().any(|b| !b.is_finite()) {
            return Err(StyleError::InvalidParameter {
                param: "boundaries".to_string(),
                message: "bin edges must be finite".to_string(),
            });
        }
        if boundaries.windows(2).any(|w| w[0] >= w[1]) {
            return Err(StyleError::InvalidParameter {
                param: "boundaries".to_string(),
                message: "bin edges must be strictly increasing".to_string(),
            });
        }
        if ncolors == 0 {
            return Err(StyleError::InvalidParameter {
                param: "ncolors".to_string(),
                message: "at least one bin is required".to_string(),
            });
        }
        Ok(BoundaryNorm { boundaries, ncolors })
    }

    /// The bin edges.
    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    /// Number of bins.
    pub fn ncolors(&self) -> usize {
        self.ncolors
    }

    /// The bin index of `v`: `i` such that
    /// `boundaries[i] <= v < boundaries[i+1]`, clamped to
    /// `0 ..= ncolors − 1`.
    pub fn index(&self, v: f64) -> usize {
        let i = self.boundaries.partition_point(|&b| b <= v);
        i.saturating_sub(1).min(self.ncolors - 1)
    }
}

impl Norm for BoundaryNorm {
    fn normalize(&self, v: f64) -> f64 {
        if self.ncolors == 1 {
            return 0.;
        }
        self.index(v) as f64 / (self.ncolors - 1) as f64
    }
}

/// A bound (scale, normalization) pair usable to color arbitrary
/// numeric values.
pub struct Mappable<S, N> {
    scale: S,
    norm: N,
}

impl<S: ColorScale, N: Norm> Mappable<S, N> {
    pub fn new(scale: S, norm: N) -> Mappable<S, N> {
        Mappable { scale, norm }
    }

    /// The color of `v` under the bound normalization.  Out-of-range
    /// values clamp to the ends of the scale.
    pub fn color(&self, v: f64) -> Rgba {
        self.scale.rgb(self.norm.normalize(v))
    }

    pub fn scale(&self) -> &S {
        &self.scale
    }

    pub fn norm(&self) -> &N {
        &self.norm
    }
}

/// Bind a linear `[vmin, vmax]` normalization to `scale`.
pub fn linear_mappable<S: ColorScale>(
    scale: S,
    vmin: f64,
    vmax: f64,
) -> Result<Mappable<S, LinearNorm>> {
    debug!(vmin, vmax, "building linear mappable");
    Ok(Mappable::new(scale, LinearNorm::new(vmin, vmax)?))
}

/// Bind a logarithmic `[vmin, vmax]` normalization to `scale`.
pub fn log_mappable<S: ColorScale>(
    scale: S,
    vmin: f64,
    vmax: f64,
) -> Result<Mappable<S, LogNorm>> {
    debug!(vmin, vmax, "building log mappable");
    Ok(Mappable::new(scale, LogNorm::new(vmin, vmax)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgba;
    use crate::scale::Gradient;
    use approx::assert_relative_eq;

    #[test]
    fn linear_norm_endpoints_and_monotonicity() {
        let n = LinearNorm::new(10., 30.).unwrap();
        assert_relative_eq!(n.normalize(10.), 0.0);
        assert_relative_eq!(n.normalize(30.), 1.0);
        let mut prev = f64::NEG_INFINITY;
        for i in 0..=20 {
            let x = n.normalize(10. + i as f64);
            assert!(x > prev);
            prev = x;
        }
    }

    #[test]
    fn linear_norm_rejects_bad_ranges() {
        assert!(LinearNorm::new(1., 1.).is_err());
        assert!(LinearNorm::new(5., 2.).is_err());
        assert!(LinearNorm::new(f64::NAN, 1.).is_err());
    }

    #[test]
    fn log_norm_endpoints_and_geometric_midpoint() {
        let (vmin, vmax) = (0.01, 100.);
        let n = LogNorm::new(vmin, vmax).unwrap();
        assert_relative_eq!(n.normalize(vmin), 0.0, epsilon = 1e-12);
        assert_relative_eq!(n.normalize(vmax), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.normalize((vmin * vmax).sqrt()), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn log_norm_rejects_nonpositive_vmin() {
        assert!(LogNorm::new(0., 10.).is_err());
        assert!(LogNorm::new(-1., 10.).is_err());
        assert!(LogNorm::new(2., 2.).is_err());
    }

    #[test]
    fn boundary_norm_indexing() {
        let n = BoundaryNorm::new(vec![0.5, 1.5, 2.5, 3.5, 4.5], 4).unwrap();
        assert_eq!(n.index(1.0), 0);
        assert_eq!(n.index(1.5), 1);
        assert_eq!(n.index(2.0), 1);
        assert_eq!(n.index(4.0), 3);
        // Outside the edges, clamp to the first/last bin.
        assert_eq!(n.index(0.0), 0);
        assert_eq!(n.index(9.0), 3);
    }

    #[test]
    fn boundary_norm_normalize_spreads_indices() {
        let n = BoundaryNorm::new(vec![0.5, 1.5, 2.5, 3.5, 4.5], 4).unwrap();
        assert_relative_eq!(n.normalize(1.0), 0.0);
        assert_relative_eq!(n.normalize(2.0), 1. / 3.);
        assert_relative_eq!(n.normalize(4.0), 1.0);
    }

    #[test]
    fn boundary_norm_rejects_unsorted_edges() {
        assert!(BoundaryNorm::new(vec![0.5], 1).is_err());
        assert!(BoundaryNorm::new(vec![1.0, 1.0], 1).is_err());
        assert!(BoundaryNorm::new(vec![2.0, 1.0], 1).is_err());
        assert!(BoundaryNorm::new(vec![0.0, 1.0], 0).is_err());
    }

    #[test]
    fn mappable_colors_by_value() {
        let g = Gradient::new(rgba(0., 0., 0., 1.), rgba(1., 1., 1., 1.));
        let m = linear_mappable(g, 0., 10.).unwrap();
        let lo = m.color(0.);
        let hi = m.color(10.);
        assert!(lo.r < 0.05);
        assert!(hi.r > 0.95);
        // Out of range clamps.
        let below = m.color(-5.);
        assert_relative_eq!(below.r, lo.r, epsilon = 1e-12);
    }

    #[test]
    fn log_mappable_requires_positive_vmin() {
        let g = Gradient::new(rgba(0., 0., 0., 1.), rgba(1., 1., 1., 1.));
        assert!(log_mappable(g, 0., 10.).is_err());
    }
}

//! Discretized ("segmented") color scales and colorbar tick layout.
//!
//! [`segment`] partitions a continuous scale into fixed-width bins,
//! one per representative value plus a trailing overflow bin, and
//! pairs the discrete colors with the half-integer [`BoundaryNorm`]
//! used to render index-based colorbars.

use tracing::debug;

use crate::color::Rgba;
use crate::error::{Result, StyleError};
use crate::norm::{BoundaryNorm, LinearNorm, Norm};
use crate::scale::{ColorScale, ListedScale};

/// Relative tolerance for the uniform-spacing check in [`segment`].
const SPACING_TOL: f64 = 1e-9;

/// A segmented scale: `k + 1` discrete colors for `k` representative
/// values, plus the normalization for drawing them as a colorbar.
#[derive(Debug, Clone, PartialEq)]
pub struct Segmented {
    /// The discrete colors as a scale (one bin per color).
    pub scale: ListedScale,
    /// Bin-edge norm over the data values: edges from
    /// `values[0] − increment/2` stepped by `increment`.
    pub value_norm: BoundaryNorm,
    /// Half-integer boundary norm over bin indices: edges at
    /// `-0.5, 0.5, …, k + 0.5`.
    pub index_norm: BoundaryNorm,
    /// The raw colors, `values.len() + 1` of them; the last one is the
    /// overflow color.
    pub colors: Vec<Rgba>,
}

/// Partition `scale` into fixed-width bins centered on `values`.
///
/// `values` must be non-empty, strictly increasing, and uniformly
/// spaced by `increment` (`increment > 0`).  The bin edges run from
/// `values[0] − increment/2` in steps of `increment` up to
/// `values[k−1] + 3·increment/2`, giving `k + 1` bins: one per value
/// and one overflow bin past the last value.  Each bin's color is the
/// source scale sampled at the bin index spread linearly over
/// \[0, 1\].
///
/// # Example
///
/// ```
/// use figstyle::{palette, segment};
/// let p = palette("viridis").unwrap();
/// let seg = segment(&p.scale(), &[1., 2., 3.], 1.).unwrap();
/// assert_eq!(seg.colors.len(), 4);
/// ```
pub fn segment(scale: &impl ColorScale, values: &[f64], increment: f64) -> Result<Segmented> {
    if values.is_empty() {
        return Err(StyleError::InvalidParameter {
            param: "values".to_string(),
            message: "at least one representative value is required".to_string(),
        });
    }
    if !increment.is_finite() || increment <= 0. {
        return Err(StyleError::InvalidParameter {
            param: "increment".to_string(),
            message: format!("bin width must be positive, got {}", increment),
        });
    }
    let tol = SPACING_TOL * increment;
    if values.windows(2).any(|w| (w[1] - w[0] - increment).abs() > tol) {
        return Err(StyleError::InvalidParameter {
            param: "values".to_string(),
            message: "values must be strictly increasing with spacing equal to the bin width"
                .to_string(),
        });
    }

    let k = values.len();
    debug!(k, increment, "segmenting color scale");

    // Edges values[0] - inc/2, stepped by inc: k + 2 of them, so k + 1
    // bins with one bin centered on each value plus the overflow bin.
    let bmin = values[0] - increment / 2.;
    let boundaries: Vec<f64> = (0..k + 2).map(|i| bmin + i as f64 * increment).collect();
    let value_norm = BoundaryNorm::new(boundaries, k + 1)?;

    // Spread the bin indices 0..=k linearly over [0, 1] and sample the
    // source scale there; the synthetic trailing value lands in the
    // overflow bin.
    let spread = LinearNorm::new(0., k as f64)?;
    let colors: Vec<Rgba> = values
        .iter()
        .copied()
        .chain(std::iter::once(values[k - 1] + increment))
        .map(|v| scale.rgb(spread.normalize(value_norm.index(v) as f64)))
        .collect();

    // Half-integer edges for rendering the discrete colorbar by index.
    let half_edges: Vec<f64> = (0..k + 2).map(|i| i as f64 - 0.5).collect();
    let index_boundary_norm = BoundaryNorm::new(half_edges, k + 1)?;

    Ok(Segmented {
        scale: ListedScale::new(colors.clone())?,
        value_norm,
        index_norm: index_boundary_norm,
        colors,
    })
}

/// Historical overflow-bin label used by segmented colorbars.
///
/// The original plotting scripts appended a literal `"0.0"` regardless
/// of the overflow bin's value; whether that was intentional is an
/// open question, so the label is an explicit argument to
/// [`segmented_ticks`] and this constant only records the convention.
pub const DEFAULT_OVERFLOW_LABEL: &str = "0.0";

/// Tick layout for a segmented, index-normalized colorbar.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorbarTicks {
    /// One tick per bin index, `0..=k`.
    pub positions: Vec<f64>,
    /// One label per tick; the last labels the overflow bin.
    pub labels: Vec<String>,
}

/// Build the tick layout for a colorbar over a [`Segmented`] scale:
/// one tick per bin index with the given per-value labels, plus
/// `overflow_label` for the trailing overflow bin (see
/// [`DEFAULT_OVERFLOW_LABEL`]).
pub fn segmented_ticks(tick_labels: &[&str], overflow_label: &str) -> Result<ColorbarTicks> {
    if tick_labels.is_empty() {
        return Err(StyleError::InvalidParameter {
            param: "tick_labels".to_string(),
            message: "at least one tick label is required".to_string(),
        });
    }
    let positions = (0..=tick_labels.len()).map(|i| i as f64).collect();
    let labels = tick_labels
        .iter()
        .map(|s| s.to_string())
        .chain(std::iter::once(overflow_label.to_string()))
        .collect();
    Ok(ColorbarTicks { positions, labels })
}

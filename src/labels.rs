//! Inline line-label placement.
//!
//! Instead of a legend, a label can sit directly next to the curve it
//! names.  These helpers compute the anchor point from the sampled
//! line data; the caller draws the text there in the line's color.

use crate::error::{Result, StyleError};

/// Horizontal text alignment relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
    Baseline,
}

/// Where a line label should be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor {
    pub x: f64,
    pub y: f64,
}

fn check_line_data(xdata: &[f64], ydata: &[f64]) -> Result<()> {
    if xdata.is_empty() {
        return Err(StyleError::InvalidParameter {
            param: "xdata".to_string(),
            message: "line data must be non-empty".to_string(),
        });
    }
    if xdata.len() != ydata.len() {
        return Err(StyleError::InvalidParameter {
            param: "ydata".to_string(),
            message: format!(
                "x and y data lengths differ: {} vs {}",
                xdata.len(),
                ydata.len()
            ),
        });
    }
    Ok(())
}

/// Anchor a label at horizontal position `xpos` along a line.
///
/// The y coordinate is `ypos` if given, otherwise the y of the sample
/// whose x is nearest to `xpos`; `yshift` is added either way.
pub fn anchor_at_x(
    xdata: &[f64],
    ydata: &[f64],
    xpos: f64,
    ypos: Option<f64>,
    yshift: f64,
) -> Result<LabelAnchor> {
    check_line_data(xdata, ydata)?;
    let y = match ypos {
        Some(y) => y,
        None => {
            let mut nearest = 0;
            let mut best = f64::INFINITY;
            for (i, &x) in xdata.iter().enumerate() {
                let d = (x - xpos).abs();
                if d < best {
                    best = d;
                    nearest = i;
                }
            }
            ydata[nearest]
        }
    };
    Ok(LabelAnchor { x: xpos, y: y + yshift })
}

/// Anchor a label at the `index`-th sample of a line, offset by
/// `(xshift, yshift)`.
pub fn anchor_at_index(
    xdata: &[f64],
    ydata: &[f64],
    index: usize,
    xshift: f64,
    yshift: f64,
) -> Result<LabelAnchor> {
    check_line_data(xdata, ydata)?;
    if index >= xdata.len() {
        return Err(StyleError::InvalidParameter {
            param: "index".to_string(),
            message: format!("index {} out of range for {} samples", index, xdata.len()),
        });
    }
    Ok(LabelAnchor { x: xdata[index] + xshift, y: ydata[index] + yshift })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const X: [f64; 5] = [0., 1., 2., 3., 4.];
    const Y: [f64; 5] = [10., 11., 12., 13., 14.];

    #[test]
    fn anchor_at_x_picks_nearest_sample() {
        let a = anchor_at_x(&X, &Y, 2.2, None, 0.).unwrap();
        assert_relative_eq!(a.x, 2.2);
        assert_relative_eq!(a.y, 12.0);
    }

    #[test]
    fn anchor_at_x_explicit_y_and_shift() {
        let a = anchor_at_x(&X, &Y, 1.0, Some(20.), 0.5).unwrap();
        assert_relative_eq!(a.y, 20.5);
        let b = anchor_at_x(&X, &Y, 1.0, None, -1.).unwrap();
        assert_relative_eq!(b.y, 10.0);
    }

    #[test]
    fn anchor_at_index_applies_shifts() {
        let a = anchor_at_index(&X, &Y, 3, 0.1, -0.2).unwrap();
        assert_relative_eq!(a.x, 3.1);
        assert_relative_eq!(a.y, 12.8);
    }

    #[test]
    fn rejects_bad_line_data() {
        assert!(anchor_at_x(&[], &[], 0., None, 0.).is_err());
        assert!(anchor_at_x(&X, &Y[..3], 0., None, 0.).is_err());
        assert!(anchor_at_index(&X, &Y, 5, 0., 0.).is_err());
    }
}

//! Named colormaps.
//!
//! Matplotlib's perceptually uniform maps ([`struct@VIRIDIS`],
//! [`struct@MAGMA`], [`struct@INFERNO`], [`struct@PLASMA`]) and the
//! Brewer diverging map [`struct@RDBU`], each stored as a compact list
//! of anchor colors and turned into a continuous [`ColorScale`] by
//! piecewise LCh interpolation.

use lazy_static::lazy_static;

use crate::color::{from_u8, Rgba};
use crate::error::{Result, StyleError};
use crate::scale::{ColorScale, Gradient};

mod ty;
use ty::PaletteData;
pub use ty::PaletteType;

fn anchors(table: &[[u8; 3]]) -> Vec<Rgba> {
    table.iter().map(|&[r, g, b]| from_u8(r, g, b)).collect()
}

lazy_static! {
    /// Matplotlib viridis color scheme.
    pub static ref VIRIDIS: Palette = Palette::new(&DATA[0]);
    /// Matplotlib magma color scheme.
    pub static ref MAGMA: Palette = Palette::new(&DATA[1]);
    /// Matplotlib inferno color scheme.
    pub static ref INFERNO: Palette = Palette::new(&DATA[2]);
    /// Matplotlib plasma color scheme.
    pub static ref PLASMA: Palette = Palette::new(&DATA[3]);
    /// Brewer "Dark red to light to dark blue" diverging scheme.
    pub static ref RDBU: Palette = Palette::new(&DATA[4]);

    static ref DATA: Vec<PaletteData> = vec![
        PaletteData {
            name: "viridis",
            typ: PaletteType::Seq,
            rgb: anchors(&[
                [68, 1, 84], [72, 40, 120], [62, 73, 137], [49, 104, 142],
                [38, 130, 142], [31, 158, 137], [53, 183, 121], [110, 206, 88],
                [181, 222, 43], [253, 231, 37],
            ]),
        },
        PaletteData {
            name: "magma",
            typ: PaletteType::Seq,
            rgb: anchors(&[
                [0, 0, 4], [24, 15, 62], [69, 16, 119], [114, 31, 129],
                [159, 47, 127], [205, 64, 113], [241, 96, 93], [253, 149, 103],
                [254, 202, 141], [252, 253, 191],
            ]),
        },
        PaletteData {
            name: "inferno",
            typ: PaletteType::Seq,
            rgb: anchors(&[
                [0, 0, 4], [27, 12, 66], [75, 12, 107], [120, 28, 109],
                [165, 44, 96], [207, 68, 70], [237, 105, 37], [251, 154, 6],
                [247, 208, 60], [252, 255, 164],
            ]),
        },
        PaletteData {
            name: "plasma",
            typ: PaletteType::Seq,
            rgb: anchors(&[
                [13, 8, 135], [71, 3, 159], [115, 1, 168], [156, 23, 158],
                [189, 55, 134], [216, 87, 107], [237, 121, 83], [250, 158, 59],
                [253, 201, 38], [240, 249, 33],
            ]),
        },
        PaletteData {
            name: "rdbu",
            typ: PaletteType::Div,
            rgb: anchors(&[
                [103, 0, 31], [178, 24, 43], [214, 96, 77], [244, 165, 130],
                [253, 219, 199], [247, 247, 247], [209, 229, 240],
                [146, 197, 222], [67, 147, 195], [33, 102, 172], [5, 48, 97],
            ]),
        },
    ];
}

/// Look a palette up by name (case-insensitive).
///
/// # Example
///
/// ```
/// use figstyle::{palette, ColorScale};
/// let yellow_end = palette("viridis").unwrap().scale().rgb(1.0);
/// assert!(yellow_end.r > 0.9);
/// ```
pub fn palette(name: &str) -> Result<Palette> {
    match name.to_lowercase().as_str() {
        "viridis" => Ok(*VIRIDIS),
        "magma" => Ok(*MAGMA),
        "inferno" => Ok(*INFERNO),
        "plasma" => Ok(*PLASMA),
        "rdbu" => Ok(*RDBU),
        _ => Err(StyleError::UnknownPalette { name: name.to_string() }),
    }
}

/// A named colormap: a list of anchor colors with metadata.
#[derive(Clone, Copy)]
pub struct Palette {
    palette: &'static PaletteData,
}

impl Palette {
    fn new(palette: &'static PaletteData) -> Self {
        Self { palette }
    }

    /// Returns the name of the palette (`"viridis"`, ...).
    pub fn name(&self) -> &'static str {
        self.palette.name
    }

    /// Returns the number of anchor colors in the palette.
    ///
    /// Palettes contain at least 2 colors.
    pub fn len(&self) -> usize {
        self.palette.rgb.len()
    }

    /// Says whether the palette is `Seq`uential or `Div`ergent.
    pub fn typ(&self) -> PaletteType {
        self.palette.typ
    }

    /// Returns the anchor colors of the palette.
    pub fn colors(&self) -> Vec<Rgba> {
        self.palette.rgb.clone()
    }

    /// Returns a continuous scale constructed from the palette by
    /// interpolating between consecutive anchors.
    pub fn scale(&self) -> PaletteScale {
        PaletteScale {
            gradients: self
                .palette
                .rgb
                .windows(2)
                .map(|c| Gradient::new(c[0], c[1]))
                .collect(),
        }
    }
}

/// A continuous scale based on a [`Palette`].
pub struct PaletteScale {
    gradients: Vec<Gradient>,
}

impl ColorScale for PaletteScale {
    fn rgb(&self, t: f64) -> Rgba {
        let n = self.gradients.len();
        let tn = t.clamp(0., 1.) * n as f64;
        let i = tn.trunc() as usize;
        if i < n {
            self.gradients[i].rgb_unsafe(tn.fract())
        } else {
            self.gradients[n - 1].rgb_unsafe(1.)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lookup_by_name() {
        assert_eq!(palette("viridis").unwrap().name(), "viridis");
        assert_eq!(palette("RdBu").unwrap().typ(), PaletteType::Div);
        assert!(palette("jet").is_err());
    }

    #[test]
    fn scale_hits_anchor_endpoints() {
        let p = palette("viridis").unwrap();
        let s = p.scale();
        let first = p.colors()[0];
        let last = *p.colors().last().unwrap();
        let c0 = s.rgb(0.);
        let c1 = s.rgb(1.);
        assert_relative_eq!(c0.r, first.r, epsilon = 1e-6);
        assert_relative_eq!(c0.b, first.b, epsilon = 1e-6);
        assert_relative_eq!(c1.r, last.r, epsilon = 1e-6);
        assert_relative_eq!(c1.g, last.g, epsilon = 1e-6);
    }

    #[test]
    fn every_palette_has_at_least_two_anchors() {
        for name in ["viridis", "magma", "inferno", "plasma", "rdbu"] {
            assert!(palette(name).unwrap().len() >= 2);
        }
    }
}

//! Figure style sheets and colormap utilities.
//!
//! - [`StyleSheet`]: immutable styling records for publication
//!   figures, with print, hairline and pgf/LuaLaTeX presets.
//! - [`ColorScale`], [`Gradient`], [`ListedScale`]: continuous color
//!   scales over \[0, 1\], including the named palettes
//!   [`struct@VIRIDIS`], [`struct@MAGMA`], [`struct@INFERNO`],
//!   [`struct@PLASMA`] and [`struct@RDBU`].
//! - [`truncate`], [`linear_mappable`], [`log_mappable`], [`segment`]:
//!   colormap and colorbar construction.
//!
//! ```
//! use figstyle::{palette, segment, truncate};
//!
//! let viridis = palette("viridis")?.scale();
//! // The lower two thirds of viridis, as 256 steps.
//! let cool = truncate(&viridis, 0.0, 0.66, 256)?;
//! // A binned scale with one color per value plus an overflow bin.
//! let seg = segment(&cool, &[0.1, 0.2, 0.3], 0.1)?;
//! assert_eq!(seg.colors.len(), 4);
//! # Ok::<(), figstyle::StyleError>(())
//! ```

pub mod color;
pub mod error;
pub mod labels;
pub mod norm;
pub mod palettes;
pub mod scale;
pub mod segment;
pub mod style;
pub mod units;

pub use color::{darken, from_hex, from_u8, rgba, to_css, to_gray, Rgba};
pub use error::{Result, StyleError};
pub use labels::{anchor_at_index, anchor_at_x, HAlign, LabelAnchor, VAlign};
pub use norm::{
    linear_mappable, log_mappable, BoundaryNorm, LinearNorm, LogNorm, Mappable, Norm,
};
pub use palettes::{
    palette, Palette, PaletteScale, PaletteType, INFERNO, MAGMA, PLASMA, RDBU, VIRIDIS,
};
pub use scale::{truncate, ColorScale, Gradient, ListedScale};
pub use segment::{segment, segmented_ticks, ColorbarTicks, Segmented, DEFAULT_OVERFLOW_LABEL};
pub use style::{
    AxesStyle, AxisFrame, FontStyle, LatexConfig, LegendStyle, LineStyle, StyleSheet, TickStyle,
};
pub use units::{cm_to_inches, pt_to_inches};

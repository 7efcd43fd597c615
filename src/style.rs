//! Immutable figure style sheets.
//!
//! The classic way to restyle a figure is to mutate process-wide
//! rendering defaults; here every knob lives in an explicit
//! [`StyleSheet`] record that a caller applies once when building its
//! render context, so styles cannot interfere across calls.
//!
//! Four presets are provided, tuned for single-column journal figures
//! at 8 pt text: [`StyleSheet::default_style`], [`StyleSheet::thin`],
//! and their pgf/LuaLaTeX counterparts [`StyleSheet::latex`] and
//! [`StyleSheet::thin_latex`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{rgba, Rgba};
use crate::error::{Result, StyleError};

/// Line and marker geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub width: f64,
    pub marker_edge_width: f64,
    pub marker_size: f64,
}

/// Font family and sizes.  One size is shared by titles, axis labels,
/// tick labels and legends, as journal templates expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontStyle {
    pub family: String,
    pub serif: String,
    pub weight: String,
    pub size: f64,
    pub title_size: f64,
    pub label_size: f64,
    pub tick_label_size: f64,
    pub legend_size: f64,
    /// Math glyph set ("stix" for the non-TeX presets).
    pub math_fontset: String,
}

/// Axis frame: spine visibility, line width and colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxesStyle {
    pub line_width: f64,
    pub edge_color: Rgba,
    pub label_color: Rgba,
    pub spine_top: bool,
    pub spine_bottom: bool,
    pub spine_left: bool,
    pub spine_right: bool,
}

/// Tick color and major-tick width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickStyle {
    pub color: Rgba,
    pub major_width: f64,
}

/// Legend appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendStyle {
    pub frame_on: bool,
    pub frame_alpha: f64,
}

/// pgf/LuaLaTeX text rendering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatexConfig {
    pub tex_system: String,
    /// Preamble lines passed to the TeX engine.
    pub preamble: Vec<String>,
    pub main_font: String,
    pub math_font: String,
    pub text_color: Rgba,
}

/// A complete, immutable figure style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    pub lines: LineStyle,
    pub font: FontStyle,
    pub axes: AxesStyle,
    pub ticks: TickStyle,
    /// Cap size for error bars.
    pub errorbar_capsize: f64,
    pub legend: LegendStyle,
    /// Present only for the TeX-rendered presets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latex: Option<LatexConfig>,
}

const PT: f64 = 8.;

fn black() -> Rgba {
    rgba(0., 0., 0., 1.)
}

fn font_8pt() -> FontStyle {
    FontStyle {
        family: "serif".to_string(),
        serif: "Times New Roman".to_string(),
        weight: "normal".to_string(),
        size: PT,
        title_size: PT,
        label_size: PT,
        tick_label_size: PT,
        legend_size: PT,
        math_fontset: "stix".to_string(),
    }
}

fn latex_preamble() -> Vec<String> {
    [
        r"\usepackage{fontspec}",
        r"\usepackage[RGB]{xcolor}",
        r"\usepackage{unicode-math}",
        r"\setmainfont{STIX Two Text}",
        r"\setmathfont{STIX Two Math}",
        r"\usepackage{nicefrac}",
        r"\usepackage{siunitx}",
        r"\DeclareSIUnit{\molar}{M}",
        r"\DeclareSIUnit{\kb}{\ensuremath{k_\textrm{B}}}",
        r"\DeclareSIUnit{\kbT}{\ensuremath{k_\textrm{B} T}}",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn latex_config(text_color: Rgba) -> LatexConfig {
    LatexConfig {
        tex_system: "lualatex".to_string(),
        preamble: latex_preamble(),
        main_font: "STIX Two Text".to_string(),
        math_font: "STIX Two Math".to_string(),
        text_color,
    }
}

impl StyleSheet {
    /// The standard print style: 1 pt lines, 0.8 pt axes, Times at
    /// 8 pt, top and right spines hidden, frameless legend.
    pub fn default_style() -> StyleSheet {
        StyleSheet {
            lines: LineStyle { width: 1.0, marker_edge_width: 1.0, marker_size: 5.0 },
            font: font_8pt(),
            axes: AxesStyle {
                line_width: 0.8,
                edge_color: black(),
                label_color: black(),
                spine_top: false,
                spine_bottom: true,
                spine_left: true,
                spine_right: false,
            },
            ticks: TickStyle { color: black(), major_width: 0.8 },
            errorbar_capsize: 2.0,
            legend: LegendStyle { frame_on: false, frame_alpha: 0.0 },
            latex: None,
        }
    }

    /// A hairline variant of [`StyleSheet::default_style`] for dense
    /// multi-panel figures: 0.5 pt lines and axes, 2.5 pt markers.
    pub fn thin() -> StyleSheet {
        let mut style = StyleSheet::default_style();
        style.lines = LineStyle { width: 0.5, marker_edge_width: 0.7, marker_size: 2.5 };
        style.axes.line_width = 0.5;
        style.ticks.major_width = 0.5;
        style.errorbar_capsize = 1.0;
        style
    }

    /// [`StyleSheet::default_style`] with text rendered by pgf and
    /// LuaLaTeX using STIX Two.
    pub fn latex() -> StyleSheet {
        let mut style = StyleSheet::default_style();
        style.lines.marker_size = 2.5;
        style.font.serif = "STIX Two Text".to_string();
        style.latex = Some(latex_config(black()));
        style
    }

    /// Hairline TeX style.  Text and axes use the near-black ink
    /// `#231f20` favored by some journals instead of pure black.
    pub fn thin_latex() -> StyleSheet {
        // Rich-black ink #231f20.
        let ink = rgba(0x23 as f64 / 255., 0x1f as f64 / 255., 0x20 as f64 / 255., 1.);
        let mut style = StyleSheet::thin();
        style.font.serif = "STIX Two Text".to_string();
        style.axes.edge_color = ink;
        style.axes.label_color = ink;
        style.ticks.color = ink;
        style.latex = Some(latex_config(ink));
        style
    }

    /// Check the record for values a renderer cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.font.size <= 0. {
            return Err(StyleError::Style {
                message: format!("font size must be positive, got {}", self.font.size),
            });
        }
        for (name, w) in [
            ("lines.width", self.lines.width),
            ("lines.marker_edge_width", self.lines.marker_edge_width),
            ("lines.marker_size", self.lines.marker_size),
            ("axes.line_width", self.axes.line_width),
            ("ticks.major_width", self.ticks.major_width),
            ("errorbar_capsize", self.errorbar_capsize),
        ] {
            if !w.is_finite() || w < 0. {
                return Err(StyleError::Style {
                    message: format!("{} must be non-negative, got {}", name, w),
                });
            }
        }
        if !(0. ..=1.).contains(&self.legend.frame_alpha) {
            return Err(StyleError::Style {
                message: format!(
                    "legend.frame_alpha must be in [0, 1], got {}",
                    self.legend.frame_alpha
                ),
            });
        }
        Ok(())
    }

    /// Load a style sheet from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<StyleSheet> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let style: StyleSheet = serde_json::from_str(&content)?;
        style.validate()?;
        debug!(path = %path.as_ref().display(), "loaded style sheet");
        Ok(style)
    }

    /// Write the style sheet to a JSON file.
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        StyleSheet::default_style()
    }
}

/// Cosmetic state of an axis frame used purely as a container for
/// shared sub-axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisFrame {
    pub spine_top: bool,
    pub spine_bottom: bool,
    pub spine_left: bool,
    pub spine_right: bool,
    pub draw_ticks: bool,
    pub draw_tick_labels: bool,
}

impl AxisFrame {
    /// A fully hidden frame: no spines, no ticks, no tick labels.
    /// Used on the enclosing axis when several panels share an axis
    /// label.
    pub fn hidden() -> AxisFrame {
        AxisFrame {
            spine_top: false,
            spine_bottom: false,
            spine_left: false,
            spine_right: false,
            draw_ticks: false,
            draw_tick_labels: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::from_hex;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_style_values() {
        let s = StyleSheet::default_style();
        assert_eq!(s.lines.width, 1.0);
        assert_eq!(s.lines.marker_size, 5.0);
        assert_eq!(s.font.serif, "Times New Roman");
        assert_eq!(s.font.size, 8.0);
        assert_eq!(s.axes.line_width, 0.8);
        assert!(!s.axes.spine_top);
        assert!(!s.axes.spine_right);
        assert!(s.axes.spine_bottom);
        assert_eq!(s.errorbar_capsize, 2.0);
        assert!(!s.legend.frame_on);
        assert!(s.latex.is_none());
    }

    #[test]
    fn thin_style_values() {
        let s = StyleSheet::thin();
        assert_eq!(s.lines.width, 0.5);
        assert_eq!(s.lines.marker_edge_width, 0.7);
        assert_eq!(s.lines.marker_size, 2.5);
        assert_eq!(s.axes.line_width, 0.5);
        assert_eq!(s.ticks.major_width, 0.5);
        assert_eq!(s.errorbar_capsize, 1.0);
    }

    #[test]
    fn latex_styles_carry_pgf_config() {
        let s = StyleSheet::latex();
        let latex = s.latex.expect("latex preset has TeX config");
        assert_eq!(latex.tex_system, "lualatex");
        assert_eq!(latex.main_font, "STIX Two Text");
        assert!(latex.preamble.iter().any(|l| l.contains("unicode-math")));

        let thin = StyleSheet::thin_latex();
        let ink = from_hex("#231f20").unwrap();
        assert_eq!(thin.axes.edge_color, ink);
        assert_eq!(thin.latex.unwrap().text_color, ink);
    }

    #[test]
    fn presets_validate() {
        for s in [
            StyleSheet::default_style(),
            StyleSheet::thin(),
            StyleSheet::latex(),
            StyleSheet::thin_latex(),
        ] {
            s.validate().unwrap();
        }
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut s = StyleSheet::default_style();
        s.font.size = 0.;
        assert!(s.validate().is_err());

        let mut s = StyleSheet::default_style();
        s.lines.width = -1.;
        assert!(s.validate().is_err());

        let mut s = StyleSheet::default_style();
        s.legend.frame_alpha = 1.5;
        assert!(s.validate().is_err());
    }

    #[test]
    fn json_round_trip() {
        let s = StyleSheet::thin_latex();
        let json = serde_json::to_string(&s).unwrap();
        let back: StyleSheet = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn hidden_frame_hides_everything() {
        let f = AxisFrame::hidden();
        assert!(!f.spine_top && !f.spine_bottom && !f.spine_left && !f.spine_right);
        assert!(!f.draw_ticks && !f.draw_tick_labels);
    }
}

//! Figure-size unit conversions.
//!
//! Journals quote figure widths in centimeters or points; renderers
//! want inches.

/// Centimeters to inches.
#[inline]
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / 2.54
}

/// Points to inches.
#[inline]
pub fn pt_to_inches(pt: f64) -> f64 {
    pt * 0.01389
}

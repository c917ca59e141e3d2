//! Shared formatting helpers.

use std::fmt;

/// `H:MM` label for a fractional hour, right-aligned to two hour digits.
pub(crate) struct HourLabel(pub f64);

impl fmt::Display for HourLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = (self.0 * 60.0).round() as i64;
        write!(f, "{:>2}:{:02}", minutes.div_euclid(60), minutes.rem_euclid(60))
    }
}

/// Number of cells a bar for `value` takes when `max` fills `width` cells.
/// Truncates; never exceeds `width`.
pub(crate) fn bar_len(value: f64, max: f64, width: usize) -> usize {
    if max.is_nan() || value.is_nan() || max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max * width as f64) as usize).min(width)
}

/// `len` copies of `glyph`, for bars and horizontal rules.
pub(crate) fn bar(glyph: char, len: usize) -> String {
    std::iter::repeat_n(glyph, len).collect()
}

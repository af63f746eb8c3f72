//! Slider value math.

/// Map a slider value to its track fill percentage.
///
/// The raw percentage over `[min, max]` is remapped linearly from [0, 100]
/// onto [1, 99] so the filled bar never quite reaches either rounded end cap
/// of the track. Purely cosmetic; the value itself is never clamped here.
///
/// A degenerate range (`max <= min`) yields 1.0, an empty-looking track.
pub(crate) fn track_fill_percent(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 1.0;
    }
    let percent = (value - min) * 100.0 / (max - min);
    percent * (99.0 - 1.0) / 100.0 + 1.0
}

/// Fraction of the range covered by `value`, clamped to [0, 1].
///
/// Positions the thumb; a degenerate range pins it to the left edge.
pub(crate) fn range_fraction(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Snap a raw pointer value onto the step grid anchored at `min`, then clamp
/// into `[min, max]`. `step` of `None` (or a non-positive step) leaves the
/// value continuous.
pub(crate) fn snap_to_step(raw: f64, min: f64, max: f64, step: Option<f64>) -> f64 {
    let snapped = match step {
        Some(s) if s > 0.0 => ((raw - min) / s).round() * s + min,
        _ => raw,
    };
    snapped.clamp(min.min(max), max.max(min))
}

/// Coercion policy for the slider's mirrored text box: trim, parse as f64,
/// reject non-finite input, clamp into `[min, max]`.
///
/// `None` means the entry is ignored and the box reverts to the current
/// value. This is the commit behavior, not per-keystroke validation.
pub(crate) fn coerce_box_value(raw: &str, min: f64, max: f64) -> Option<f64> {
    let parsed: f64 = raw.trim().parse().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    Some(parsed.clamp(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fill_percent_midpoint() {
        assert_relative_eq!(track_fill_percent(50.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn fill_percent_pads_end_caps() {
        assert_relative_eq!(track_fill_percent(0.0, 0.0, 100.0), 1.0);
        assert_relative_eq!(track_fill_percent(100.0, 0.0, 100.0), 99.0);
        assert_relative_eq!(track_fill_percent(5.0, 5.0, 10.0), 1.0);
        assert_relative_eq!(track_fill_percent(10.0, 5.0, 10.0), 99.0);
    }

    #[test]
    fn fill_percent_does_not_clamp_value() {
        // Out-of-range values pass through the same linear mapping.
        assert_relative_eq!(track_fill_percent(110.0, 0.0, 100.0), 108.8);
    }

    #[test]
    fn fill_percent_degenerate_range() {
        assert_relative_eq!(track_fill_percent(3.0, 3.0, 3.0), 1.0);
    }

    #[test]
    fn fraction_clamps_and_handles_degenerate_range() {
        assert_relative_eq!(range_fraction(50.0, 0.0, 100.0), 0.5);
        assert_relative_eq!(range_fraction(-10.0, 0.0, 100.0), 0.0);
        assert_relative_eq!(range_fraction(110.0, 0.0, 100.0), 1.0);
        assert_relative_eq!(range_fraction(7.0, 7.0, 7.0), 0.0);
    }

    #[test]
    fn snapping_rounds_to_nearest_step() {
        assert_relative_eq!(snap_to_step(4.4, 0.0, 10.0, Some(1.0)), 4.0);
        assert_relative_eq!(snap_to_step(4.6, 0.0, 10.0, Some(1.0)), 5.0);
        assert_relative_eq!(snap_to_step(3.7, 1.0, 10.0, Some(2.0)), 3.0);
    }

    #[test]
    fn snapping_clamps_to_bounds() {
        assert_relative_eq!(snap_to_step(42.0, 0.0, 10.0, Some(1.0)), 10.0);
        assert_relative_eq!(snap_to_step(-3.0, 0.0, 10.0, None), 0.0);
    }

    #[test]
    fn no_step_means_continuous() {
        assert_relative_eq!(snap_to_step(4.437, 0.0, 10.0, None), 4.437);
    }

    #[test]
    fn box_coercion_parses_and_clamps() {
        assert_eq!(coerce_box_value("50", 0.0, 100.0), Some(50.0));
        assert_eq!(coerce_box_value("  7.5 ", 0.0, 100.0), Some(7.5));
        assert_eq!(coerce_box_value("250", 0.0, 100.0), Some(100.0));
        assert_eq!(coerce_box_value("-4", 0.0, 100.0), Some(0.0));
    }

    #[test]
    fn box_coercion_rejects_garbage() {
        assert_eq!(coerce_box_value("abc", 0.0, 100.0), None);
        assert_eq!(coerce_box_value("", 0.0, 100.0), None);
        assert_eq!(coerce_box_value("NaN", 0.0, 100.0), None);
        assert_eq!(coerce_box_value("inf", 0.0, 100.0), None);
    }
}

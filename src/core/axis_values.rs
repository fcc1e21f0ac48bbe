//! Float helpers and auto-generated axis stops.

/// Axis label values for auto-generated axes. The buffer is reused across
/// recomputations to avoid per-frame allocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisAutoValues {
    pub values: Vec<f32>,
    pub decimals: i32,
}

/// Next representable float above `f`. NaN and positive infinity are returned
/// unchanged.
#[must_use]
pub fn next_up_f32(f: f32) -> f32 {
    if f.is_nan() || f == f32::INFINITY {
        f
    } else {
        let f = f + 0.0;
        f32::from_bits(if f >= 0.0 {
            f.to_bits().wrapping_add(1)
        } else {
            f.to_bits().wrapping_sub(1)
        })
    }
}

/// Next representable float below `f`. NaN and negative infinity are returned
/// unchanged.
#[must_use]
pub fn next_down_f32(f: f32) -> f32 {
    if f.is_nan() || f == f32::NEG_INFINITY {
        f
    } else if f == 0.0 {
        -f32::MIN_POSITIVE
    } else {
        f32::from_bits(if f > 0.0 {
            f.to_bits().wrapping_sub(1)
        } else {
            f.to_bits().wrapping_add(1)
        })
    }
}

/// Next representable double above `d`.
#[must_use]
pub fn next_up_f64(d: f64) -> f64 {
    if d.is_nan() || d == f64::INFINITY {
        d
    } else {
        let d = d + 0.0;
        f64::from_bits(if d >= 0.0 {
            d.to_bits().wrapping_add(1)
        } else {
            d.to_bits().wrapping_sub(1)
        })
    }
}

/// Next representable double below `d`.
#[must_use]
pub fn next_down_f64(d: f64) -> f64 {
    if d.is_nan() || d == f64::NEG_INFINITY {
        d
    } else if d == 0.0 {
        -f64::from(f32::MIN_POSITIVE)
    } else {
        f64::from_bits(if d > 0.0 {
            d.to_bits().wrapping_sub(1)
        } else {
            d.to_bits().wrapping_add(1)
        })
    }
}

/// Combined absolute/relative float comparison.
#[must_use]
pub fn almost_equal(a: f32, b: f32, absolute_diff: f32, relative_diff: f32) -> bool {
    let diff = (a - b).abs();
    if diff <= absolute_diff {
        return true;
    }
    let a = a.abs();
    let b = b.abs();
    let largest = if a > b { a } else { b };
    diff <= largest * relative_diff
}

/// Rounds to one significant figure, e.g. `0.0234 -> 0.02`, `187.2 -> 200`.
#[must_use]
pub fn round_to_one_significant_figure(num: f64) -> f32 {
    let magnitude_exp = (if num < 0.0 { -num } else { num }).log10().ceil();
    if !magnitude_exp.is_finite() {
        return 0.0;
    }
    let power = 1 - magnitude_exp as i32;
    let magnitude = 10f64.powi(power) as f32;
    let shifted = (num * f64::from(magnitude)).round();
    (shifted as f32) / magnitude
}

/// Computes evenly spaced "nice" axis stops for `[start, stop]` given an
/// ideal number of steps (more available screen space allows more steps).
///
/// Degenerate input (zero steps or a non-positive range) produces an empty
/// result rather than an error.
pub fn compute_auto_generated_axis_values(
    start: f32,
    stop: f32,
    steps: usize,
    out_values: &mut AxisAutoValues,
) {
    let range = f64::from(stop - start);
    if steps == 0 || range <= 0.0 {
        out_values.values.clear();
        out_values.decimals = 0;
        return;
    }

    let raw_interval = range / steps as f64;
    let mut interval = f64::from(round_to_one_significant_figure(raw_interval));
    let interval_magnitude = 10f64.powi(interval.log10() as i32);
    let interval_sig_digit = (interval / interval_magnitude) as i32;
    if interval_sig_digit > 5 {
        // Use one order of magnitude higher, to avoid intervals like 0.9 or 90.
        interval = (10.0 * interval_magnitude).floor();
    }

    let first = (f64::from(start) / interval).ceil() * interval;
    let last = next_up_f64((f64::from(stop) / interval).floor() * interval);

    let mut values_num = 0usize;
    let mut interval_value = first;
    while interval_value <= last {
        values_num += 1;
        interval_value += interval;
    }

    out_values.values.clear();
    out_values.values.reserve(values_num);
    let mut interval_value = first;
    for _ in 0..values_num {
        out_values.values.push(interval_value as f32);
        interval_value += interval;
    }

    out_values.decimals = if interval < 1.0 {
        (-interval.log10()).ceil() as i32
    } else {
        0
    };
}

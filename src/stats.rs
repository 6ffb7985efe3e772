//! Numeric helpers behind the weather summary.

use std::collections::BTreeMap;

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes the sample (N-1) standard deviation given a pre-computed mean.
///
/// Returns `None` when fewer than two values are present, since the
/// unbiased estimator is undefined there.
pub fn sample_stddev(values: &[f64], mean: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;

    Some(variance.sqrt())
}

/// Mean of the successive differences `values[i + 1] - values[i]`.
/// Returns `None` for fewer than two values.
pub fn mean_successive_delta(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let deltas: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    Some(mean(&deltas))
}

/// Most frequent label. Ties go to the label that sorts first byte-wise.
pub fn mode<'a, I>(labels: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (label, count) in counts {
        // strict comparison keeps the earliest label on ties
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
}

/// Rounds the stored binary value to two decimal places.
///
/// Goes through the exact decimal expansion, so `1.115` (stored just below
/// the half) becomes `1.11`. Scaling by 100 first would round it up.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Shortest decimal rendering that always shows a fractional part for
/// whole numbers (`10.0`, not `10`). Magnitudes from `1e16` up and below
/// `1e-4` use exponent form with a signed two-digit exponent (`1e+16`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_exponent(value);
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn format_exponent(value: f64) -> String {
    let rendered = format!("{value:e}");
    match rendered.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => rendered,
    }
}

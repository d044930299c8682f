//! Summary statistics over measurement vectors.
//!
//! Undefined results are `None`, never a sentinel value.

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator).
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

/// `exp(std(ln x)) / exp(mean(ln x))` over the strictly positive values.
pub fn geometric_cv(values: &[f64]) -> Option<f64> {
    let logs: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| *v > 0.0)
        .map(f64::ln)
        .collect();
    let std = sample_std(&logs)?;
    let m = mean(&logs)?;
    let cv = (std - m).exp();
    cv.is_finite().then_some(cv)
}

pub fn round_dp(x: f64, dp: i32) -> f64 {
    let scale = 10f64.powi(dp);
    (x * scale).round_ties_even() / scale
}

//! Linear trend of net pay over time.

/// Ordinary least-squares slope of `values` against their zero-based index.
///
/// Uses the closed form
/// `(n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)` with `x = 0, 1, …, n−1`.
/// Returns `0.0` when there are fewer than two points.
///
/// # Examples
///
/// ```
/// use paycheck_digest::analytics::linear_trend_slope;
///
/// assert_eq!(linear_trend_slope(&[100.0, 200.0, 300.0]), 100.0);
/// assert_eq!(linear_trend_slope(&[42.0]), 0.0);
/// assert_eq!(linear_trend_slope(&[]), 0.0);
/// ```
pub fn linear_trend_slope(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let n = values.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    // Strictly positive for n >= 2 since the x values are distinct.
    let denominator = n * sum_xx - sum_x * sum_x;
    (n * sum_xy - sum_x * sum_y) / denominator
}

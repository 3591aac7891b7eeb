/// Median of the values; `None` when empty. Even counts average the middle pair.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Ordinary least-squares slope of `values` against x = 0..n-1.
/// Fewer than two points has no defined slope.
pub fn least_squares_slope(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let nf = n as f64;
    let x_mean = (nf - 1.0) / 2.0;
    let y_mean = values.iter().sum::<f64>() / nf;

    let (mut ss_xy, mut ss_xx) = (0.0, 0.0);
    for (i, &y) in values.iter().enumerate() {
        let dx = i as f64 - x_mean;
        ss_xy += dx * (y - y_mean);
        ss_xx += dx * dx;
    }
    Some(ss_xy / ss_xx)
}

/// Strictly increasing over the last three values.
pub fn strictly_rising(last_three: &[f64]) -> bool {
    matches!(last_three, [a, b, c] if a < b && b < c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[72.0]), Some(72.0));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn median_ignores_single_spike() {
        assert_eq!(median(&[70.0, 72.0, 140.0, 71.0, 73.0]), Some(72.0));
    }

    #[test]
    fn slope_of_linear_series() {
        let slope = least_squares_slope(&[4.0, 6.0, 8.0]).unwrap();
        assert!((slope - 2.0).abs() < 1e-9);

        let flat = least_squares_slope(&[37.0, 37.0, 37.0, 37.0]).unwrap();
        assert!(flat.abs() < 1e-9);
    }

    #[test]
    fn slope_of_noisy_series() {
        // roughly y = 0.3x + 37 with noise
        let slope = least_squares_slope(&[37.0, 37.4, 37.5, 38.0, 38.1]).unwrap();
        assert!((slope - 0.28).abs() < 1e-9);
    }

    #[test]
    fn slope_needs_two_points() {
        assert_eq!(least_squares_slope(&[5.0]), None);
        assert_eq!(least_squares_slope(&[]), None);
    }

    #[test]
    fn strictly_rising_requires_three_increasing() {
        assert!(strictly_rising(&[4.0, 6.0, 8.0]));
        assert!(!strictly_rising(&[4.0, 6.0, 6.0]));
        assert!(!strictly_rising(&[8.0, 6.0, 4.0]));
        assert!(!strictly_rising(&[4.0, 6.0]));
    }
}

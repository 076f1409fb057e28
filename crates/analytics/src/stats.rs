//! Small descriptive statistics helpers shared by the engine stages.

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    Some(xs.iter().sum::<f64>() / (xs.len() as f64))
}

/// Sample standard deviation (n-1), deterministic.
///
/// Fewer than two points have no spread and yield `0.0`.
pub fn stddev_sample(xs: &[f64], mean: f64) -> f64 {
    if xs.len() < 2 {
        return 0.0;
    }
    let var = xs
        .iter()
        .map(|x| {
            let d = x - mean;
            d * d
        })
        .sum::<f64>()
        / ((xs.len() - 1) as f64);
    var.sqrt()
}

pub(crate) fn as_f64<I: IntoIterator<Item = u32>>(values: I) -> Vec<f64> {
    values.into_iter().map(f64::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_slice_is_undefined() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), Some(4.0));
    }

    #[test]
    fn stddev_uses_sample_denominator() {
        // Sample variance of [2, 4, 4, 4, 5, 5, 7, 9] is 32/7.
        let xs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&xs).unwrap();
        let sd = stddev_sample(&xs, m);
        assert!((sd - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn stddev_of_single_point_is_zero() {
        assert_eq!(stddev_sample(&[42.0], 42.0), 0.0);
    }

    #[test]
    fn stddev_of_constant_values_is_zero() {
        assert_eq!(stddev_sample(&[7.0; 10], 7.0), 0.0);
    }
}

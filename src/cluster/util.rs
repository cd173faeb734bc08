#[inline]
pub(crate) fn squared_euclidean(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Euclidean distance between two positions.
///
/// 2D points carry `z == 0`, so one formula covers both dimensionalities.
#[inline]
pub(crate) fn euclidean(a: &[f32; 3], b: &[f32; 3]) -> f32 {
    squared_euclidean(a, b).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_is_symmetric() {
        let a = [1.0, -2.0, 0.5];
        let b = [-3.0, 4.0, 0.0];
        assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
        assert_eq!(euclidean(&a, &a), 0.0);
    }

    #[test]
    fn euclidean_pythagorean() {
        assert_eq!(euclidean(&[0.0, 0.0, 0.0], &[3.0, 4.0, 0.0]), 5.0);
        assert_eq!(squared_euclidean(&[1.0, 1.0], &[2.0, 2.0]), 2.0);
    }
}

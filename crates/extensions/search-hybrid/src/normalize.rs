//! Score normalization.

/// Divide every score by the maximum of the set.
///
/// Skipped when the maximum is not positive, so scores are returned as-is
/// instead of dividing by zero or flipping signs.
pub fn normalize_by_max(scores: &mut [(usize, f32)]) {
    let max = scores
        .iter()
        .map(|(_, s)| *s)
        .fold(f32::NEG_INFINITY, f32::max);

    if max > 0.0 {
        for (_, score) in scores.iter_mut() {
            *score /= max;
        }
    }
}

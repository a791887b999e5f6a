//! Quantile computation shared by both inference procedures.
//!
//! Every quantile in this crate is computed with the same rule: linear
//! interpolation between order statistics at fractional rank `q * (n - 1)`
//! (the "R-7" definition). The bootstrap estimator and the permutation test
//! both route through these helpers, so their quantile semantics can never
//! drift apart.

/// Read a quantile from data that is already sorted in ascending order.
///
/// # Arguments
///
/// * `sorted` - Slice of observations sorted ascending
/// * `q` - Quantile probability in [0, 1]
///
/// # Returns
///
/// The q-th quantile under the R-7 definition.
///
/// # Panics
///
/// Panics if `sorted` is empty or if `q` is outside [0, 1].
///
/// # Safety
///
/// The caller must ensure the data is sorted. No verification is performed.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    assert!(!sorted.is_empty(), "Cannot compute quantile of empty slice");
    assert!(
        (0.0..=1.0).contains(&q),
        "Quantile probability must be in [0, 1]"
    );

    let n = sorted.len();
    let h = (n - 1) as f64 * q;
    let h_floor = h.floor() as usize;
    let h_frac = h - h.floor();

    if h_floor >= n - 1 {
        sorted[n - 1]
    } else if h_frac == 0.0 {
        sorted[h_floor]
    } else {
        // Linear interpolation between the two bracketing order statistics
        sorted[h_floor] + h_frac * (sorted[h_floor + 1] - sorted[h_floor])
    }
}

/// Compute a quantile by sorting a mutable slice in-place.
///
/// This is the right call when the buffer's order does not need to be
/// preserved and the same data will not be queried again. For the one-shot
/// quantile inside a trial loop, prefer [`compute_quantile`] which avoids
/// the full sort.
///
/// # Arguments
///
/// * `data` - Mutable slice that will be sorted in-place
/// * `q` - Quantile probability in [0, 1]
///
/// # Returns
///
/// The q-th quantile value.
///
/// # Panics
///
/// Panics if `data` is empty or if `q` is outside [0, 1].
///
/// # Note
///
/// After this call, `data` will be sorted in ascending order.
pub fn quantile_inplace(data: &mut [f64], q: f64) -> f64 {
    assert!(!data.is_empty(), "Cannot compute quantile of empty slice");

    data.sort_unstable_by(|a, b| a.total_cmp(b));
    quantile_sorted(data, q)
}

/// Compute a single quantile from a mutable slice in O(n) expected time.
///
/// Uses `select_nth_unstable_by()` (introselect) instead of a full sort.
/// The slice is partially reordered as a side effect. Produces exactly the
/// same value as [`quantile_inplace`] for the same input.
///
/// # Arguments
///
/// * `data` - Mutable slice of observations (will be partially reordered)
/// * `q` - Quantile probability in [0, 1]
///
/// # Returns
///
/// The q-th quantile value.
///
/// # Panics
///
/// Panics if `data` is empty or if `q` is outside [0, 1].
pub fn compute_quantile(data: &mut [f64], q: f64) -> f64 {
    assert!(!data.is_empty(), "Cannot compute quantile of empty slice");
    assert!(
        (0.0..=1.0).contains(&q),
        "Quantile probability must be in [0, 1]"
    );

    let n = data.len();

    if n == 1 {
        return data[0];
    }

    let h = (n - 1) as f64 * q;
    let h_floor = h.floor() as usize;
    let h_frac = h - h.floor();

    if h_floor >= n - 1 {
        // At or beyond the last element
        let (_, &mut max, _) = data.select_nth_unstable_by(n - 1, |a, b| a.total_cmp(b));
        return max;
    }

    // Get the lower order statistic using select_nth_unstable
    let (_, &mut lower, upper) = data.select_nth_unstable_by(h_floor, |a, b| a.total_cmp(b));

    if h_frac == 0.0 {
        return lower;
    }

    // The next order statistic is the minimum of the upper partition
    let upper_min = upper
        .iter()
        .copied()
        .min_by(|a, b| a.total_cmp(b))
        .unwrap_or(lower);

    lower + h_frac * (upper_min - lower)
}

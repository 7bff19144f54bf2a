//! Proportional position mapping from clean-source offsets to target offsets

/// Map a clean-source char offset to a raw char offset in the target
///
/// The offset keeps its relative position: `round(clean_offset / source_len * target_len)`.
/// Rounding is half-to-even on the `f64` product, so an exact `.5` goes to the
/// even neighbour (2.5 → 2, 3.5 → 4). The result is clamped to `target_len`.
///
/// A zero `source_len` has no proportion to preserve and maps to 0.
///
/// # Example
/// ```ignore
/// assert_eq!(map_offset(3, 6, 14), 7);
/// assert_eq!(map_offset(6, 6, 14), 14);
/// ```
pub fn map_offset(clean_offset: usize, source_len: usize, target_len: usize) -> usize {
    if source_len == 0 {
        return 0;
    }

    let ratio = clean_offset as f64 / source_len as f64;
    let raw = (ratio * target_len as f64).round_ties_even();

    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(target_len)
    }
}

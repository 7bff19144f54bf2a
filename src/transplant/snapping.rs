//! Word-Boundary Snapping
//!
//! Proportional mapping lands tags wherever the arithmetic says, which is
//! often in the middle of a word. Snapping moves such an offset to the
//! nearest word boundary so the output never shows a tag inside a word.
//!
//! Only the ASCII space (U+0020) separates words here. Tabs, newlines and
//! non-breaking spaces are treated as word characters.
//!
//! Offsets are char offsets into the target, i.e. indexes into the slice
//! produced by `target.chars().collect::<Vec<char>>()`.
//!
//! # Example
//!
//! ```ignore
//! Target:  "Go Immediately"
//! Raw:     7              ("Go Imme|diately")
//! Left:    3, 4 steps     ("Go |Immediately")
//! Right:   14, 7 steps    ("Go Immediately|")
//! Snapped: 3
//! ```

const SPACE: char = ' ';

/// Check whether `offset` already sits on a word boundary
///
/// An offset is a boundary when it is the start or end of the target, or when
/// the char at or immediately before it is a space.
pub fn is_boundary(target: &[char], offset: usize) -> bool {
    let len = target.len();
    if offset == 0 || offset >= len {
        return true;
    }
    target[offset] == SPACE || target[offset - 1] == SPACE
}

/// Walk left from `offset` until the position right after a space (or 0)
///
/// Returns the found position and the number of steps taken.
fn search_left(target: &[char], offset: usize) -> (usize, usize) {
    let mut bound = offset;
    let mut steps = 0;
    while bound > 0 && target[bound - 1] != SPACE {
        bound -= 1;
        steps += 1;
    }
    (bound, steps)
}

/// Walk right from `offset` until the position right before a space (or the end)
fn search_right(target: &[char], offset: usize) -> (usize, usize) {
    let mut bound = offset;
    let mut steps = 0;
    while bound < target.len() && target[bound] != SPACE {
        bound += 1;
        steps += 1;
    }
    (bound, steps)
}

/// Snap a raw target offset to the nearest word boundary
///
/// Offsets already on a boundary are returned unchanged. Otherwise the
/// nearest boundary on each side is found and the closer one wins; on a tie
/// the left one is taken. Each search inspects at most `target.len()` chars.
///
/// Offsets beyond the target are clamped to its length first.
///
/// # Arguments
/// * `target` - The target text as chars
/// * `offset` - Raw char offset produced by proportional mapping
///
/// # Returns
/// A char offset in `0..=target.len()` that does not split a word
///
/// # Example
/// ```ignore
/// let target: Vec<char> = "Superman".chars().collect();
/// assert_eq!(snap_to_boundary(&target, 5), 8);
/// ```
pub fn snap_to_boundary(target: &[char], offset: usize) -> usize {
    let offset = offset.min(target.len());
    if is_boundary(target, offset) {
        return offset;
    }

    let (left_bound, left_dist) = search_left(target, offset);
    let (right_bound, right_dist) = search_right(target, offset);

    if left_dist <= right_dist {
        left_bound
    } else {
        right_bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_is_boundary_ends() {
        let target = chars("Hola");
        assert!(is_boundary(&target, 0));
        assert!(is_boundary(&target, 4));
        assert!(!is_boundary(&target, 2));
    }

    #[test]
    fn test_is_boundary_around_space() {
        let target = chars("ab cd");
        // Before the space
        assert!(is_boundary(&target, 2));
        // After the space
        assert!(is_boundary(&target, 3));
        assert!(!is_boundary(&target, 1));
        assert!(!is_boundary(&target, 4));
    }

    #[test]
    fn test_is_boundary_empty_target() {
        assert!(is_boundary(&[], 0));
    }

    #[test]
    fn test_snap_keeps_boundary_offsets() {
        let target = chars("Go Immediately");
        assert_eq!(snap_to_boundary(&target, 0), 0);
        assert_eq!(snap_to_boundary(&target, 2), 2);
        assert_eq!(snap_to_boundary(&target, 3), 3);
        assert_eq!(snap_to_boundary(&target, 14), 14);
    }

    #[test]
    fn test_snap_prefers_closer_left() {
        let target = chars("Go Immediately");
        assert_eq!(snap_to_boundary(&target, 7), 3);
    }

    #[test]
    fn test_snap_prefers_closer_right() {
        let target = chars("Go Immediately");
        assert_eq!(snap_to_boundary(&target, 12), 14);
    }

    #[test]
    fn test_snap_tie_goes_left() {
        // "abcd efgh": offset 2 is 2 steps from 0 and 2 steps from 4
        let target = chars("abcd efgh");
        assert_eq!(snap_to_boundary(&target, 2), 0);
        // offset 7 is 2 steps from 5 and 2 steps from 9
        assert_eq!(snap_to_boundary(&target, 7), 5);
    }

    #[test]
    fn test_snap_right_boundary_stops_before_space() {
        let target = chars("unbelievable yes");
        // 3 steps right to offset 12 (before the space), 9 steps left to 0
        assert_eq!(snap_to_boundary(&target, 9), 12);
    }

    #[test]
    fn test_snap_single_word_target() {
        let target = chars("Superman");
        assert_eq!(snap_to_boundary(&target, 5), 8);
        assert_eq!(snap_to_boundary(&target, 3), 0);
        // Exactly halfway: tie goes left
        assert_eq!(snap_to_boundary(&target, 4), 0);
    }

    #[test]
    fn test_snap_middle_word() {
        let target = chars("one wonderful day");
        // "one wo|nderful day": 2 steps to 4, 7 steps to 13
        assert_eq!(snap_to_boundary(&target, 6), 4);
        // "one wonderf|ul day": 7 steps to 4, 2 steps to 13
        assert_eq!(snap_to_boundary(&target, 11), 13);
    }

    #[test]
    fn test_snap_double_space() {
        let target = chars("ab  cd");
        assert!(is_boundary(&target, 3));
        assert_eq!(snap_to_boundary(&target, 3), 3);
        assert_eq!(snap_to_boundary(&target, 5), 4);
    }

    #[test]
    fn test_snap_ignores_other_whitespace() {
        let target = chars("ab\tcd");
        // Tab is a word char, so the whole target is one word
        assert!(!is_boundary(&target, 3));
        assert_eq!(snap_to_boundary(&target, 3), 5);

        let target = chars("ab\u{a0}cd");
        assert_eq!(snap_to_boundary(&target, 2), 0);
    }

    #[test]
    fn test_snap_multibyte_chars() {
        let target = chars("große Übung");
        // "gro|ße Übung": 3 steps to 0, 2 steps to 5
        assert_eq!(snap_to_boundary(&target, 3), 5);
        // "große Üb|ung": 2 steps to 6, 3 steps to 11
        assert_eq!(snap_to_boundary(&target, 8), 6);
    }

    #[test]
    fn test_snap_clamps_out_of_range() {
        let target = chars("abc");
        assert_eq!(snap_to_boundary(&target, 10), 3);
    }

    #[test]
    fn test_snap_leading_and_trailing_space() {
        let target = chars(" word ");
        assert_eq!(snap_to_boundary(&target, 1), 1);
        assert_eq!(snap_to_boundary(&target, 5), 5);
        // " wo|rd ": 2 steps to 1, 2 steps to 5, tie goes left
        assert_eq!(snap_to_boundary(&target, 3), 1);
    }

    #[test]
    fn test_snap_result_never_splits_word() {
        let target = chars("el rápido zorro marrón salta");
        for offset in 0..=target.len() {
            let snapped = snap_to_boundary(&target, offset);
            assert!(snapped <= target.len());
            assert!(
                is_boundary(&target, snapped),
                "offset {} snapped to non-boundary {}",
                offset,
                snapped
            );
        }
    }
}

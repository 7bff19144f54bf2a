//! Tag Transplanter
//!
//! Runs the full pipeline: extract tags from the source, map each tag's clean
//! offset proportionally into the target, snap it to a word boundary, and
//! assemble the tagged target.
//!
//! # Example
//!
//! ```ignore
//! Source:  "Go <b>Now</b>"
//! Target:  "Go Immediately"
//! Result:  "Go <b>Immediately</b>"
//! ```
//!
//! The operation is total: every pair of strings produces a result.

use super::assembly::{TargetInsertion, assemble};
use super::extraction::extract_tags;
use super::mapping::map_offset;
use super::snapping::snap_to_boundary;

/// Resolve where each source tag should go in the target
///
/// Returns one insertion per tag occurrence, in source order (not yet sorted
/// by offset). When the source has no text at all, every tag is placed at
/// the end of the target.
///
/// # Example
/// ```ignore
/// let plan = plan_insertions("<b>Super</b>man", "Superman");
/// assert_eq!(plan[0].offset, 0);
/// assert_eq!(plan[1].offset, 8);
/// ```
pub fn plan_insertions(source: &str, target: &str) -> Vec<TargetInsertion> {
    let extracted = extract_tags(source);
    let target_chars: Vec<char> = target.chars().collect();
    let target_len = target_chars.len();
    let source_len = extracted.clean_len();

    extracted
        .occurrences
        .into_iter()
        .map(|occurrence| {
            let offset = if source_len == 0 {
                target_len
            } else {
                let raw = map_offset(occurrence.clean_offset, source_len, target_len);
                snap_to_boundary(&target_chars, raw)
            };
            TargetInsertion::new(offset, occurrence.tag)
        })
        .collect()
}

/// Carry the markup tags of `source` over to its plain translation `target`
///
/// If `source` contains no tags, `target` is returned unchanged. If `source`
/// consists only of tags, they are appended to the end of `target` in their
/// original order. Otherwise each tag is placed at the proportionally
/// corresponding position in `target`, moved to the nearest word boundary.
///
/// Tags already present in `target` are treated as ordinary text.
///
/// # Arguments
/// * `source` - Original text carrying inline tags
/// * `target` - Translation of the source's plain text
///
/// # Returns
/// `target` with every source tag inserted exactly once
///
/// # Example
/// ```ignore
/// assert_eq!(transplant_tags("<b>Super</b>man", "Superman"), "<b>Superman</b>");
/// assert_eq!(transplant_tags("Hello", "Hola"), "Hola");
/// assert_eq!(transplant_tags("<b></b>", "Hola"), "Hola<b></b>");
/// ```
pub fn transplant_tags(source: &str, target: &str) -> String {
    let insertions = plan_insertions(source, target);
    if insertions.is_empty() {
        return target.to_string();
    }
    assemble(target, insertions)
}

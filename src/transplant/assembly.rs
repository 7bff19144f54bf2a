//! Insertion Assembly
//!
//! Builds the final tagged target from the plain target and the resolved
//! insertions in a single left-to-right pass.

/// A tag to be inserted into the target at a resolved char offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetInsertion {
    /// Char offset in the target, in `0..=target_len`
    pub offset: usize,
    /// The tag text, verbatim
    pub tag: String,
}

impl TargetInsertion {
    pub fn new(offset: usize, tag: impl Into<String>) -> Self {
        TargetInsertion {
            offset,
            tag: tag.into(),
        }
    }
}

/// Insert all tags into `target` and return the result
///
/// Insertions are stable-sorted by offset, so tags that land on the same
/// offset come out in the order they were given. Offsets past the end of the
/// target are treated as the end.
///
/// # Arguments
/// * `target` - Plain target text
/// * `insertions` - Tags with char offsets into `target`
///
/// # Example
/// ```ignore
/// let insertions = vec![
///     TargetInsertion::new(3, "<b>"),
///     TargetInsertion::new(14, "</b>"),
/// ];
/// assert_eq!(assemble("Go Immediately", insertions), "Go <b>Immediately</b>");
/// ```
pub fn assemble(target: &str, mut insertions: Vec<TargetInsertion>) -> String {
    // sort_by_key is stable
    insertions.sort_by_key(|insertion| insertion.offset);

    let extra: usize = insertions.iter().map(|i| i.tag.len()).sum();
    let mut result = String::with_capacity(target.len() + extra);

    // Byte index of every char start, plus the end of the string
    let byte_offsets: Vec<usize> = target
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(target.len()))
        .collect();
    let char_len = byte_offsets.len() - 1;

    let mut cursor = 0;
    for insertion in &insertions {
        let pos = byte_offsets[insertion.offset.min(char_len)];
        result.push_str(&target[cursor..pos]);
        result.push_str(&insertion.tag);
        cursor = pos;
    }
    result.push_str(&target[cursor..]);

    result
}

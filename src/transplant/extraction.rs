//! Tag Extraction
//!
//! Splits a tagged source string into its clean (tag-free) text and the list of
//! tags that were removed, each remembered at the char offset in the clean text
//! where it used to sit.
//!
//! A tag is `<`, one or more characters that are not `>`, then `>`. The first
//! `>` after an opening `<` always closes it; a `<` seen while inside a tag is
//! just another tag character.
//!
//! # Example
//!
//! ```ignore
//! Source:       "Go <b>Now</b>"
//! Clean text:   "Go Now"
//! Occurrences:  ("<b>", 3), ("</b>", 6)
//! ```

/// A single tag removed from the source, with its position in the clean text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOccurrence {
    /// The tag text, verbatim (e.g. `<a href="x">`)
    pub tag: String,
    /// Number of non-tag chars that preceded the tag in the source
    pub clean_offset: usize,
}

impl TagOccurrence {
    pub fn new(tag: impl Into<String>, clean_offset: usize) -> Self {
        TagOccurrence {
            tag: tag.into(),
            clean_offset,
        }
    }
}

/// Result of running tag extraction over a source string
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedSource {
    /// The source with every tag removed
    pub clean_text: String,
    /// Tags in the order they appeared in the source
    pub occurrences: Vec<TagOccurrence>,
}

impl ExtractedSource {
    pub fn has_tags(&self) -> bool {
        !self.occurrences.is_empty()
    }

    /// Length of the clean text in chars
    pub fn clean_len(&self) -> usize {
        self.clean_text.chars().count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    /// Inside a candidate tag that opened at this byte index
    Inside { start: usize },
}

/// Extract all tags from a source string in one linear pass
///
/// # Arguments
/// * `source` - Text that may contain inline markup tags
///
/// # Returns
/// The clean text and the tag occurrences, ordered by appearance
///
/// # Example
/// ```ignore
/// let extracted = extract_tags("<b>Super</b>man");
/// assert_eq!(extracted.clean_text, "Superman");
/// assert_eq!(extracted.occurrences[1].clean_offset, 5);
/// ```
pub fn extract_tags(source: &str) -> ExtractedSource {
    let mut extracted = ExtractedSource::default();
    let mut state = ScanState::Outside;
    // Byte index where the not-yet-copied text run begins
    let mut segment_start = 0;
    let mut clean_len = 0;

    for (idx, ch) in source.char_indices() {
        match state {
            ScanState::Outside => {
                if ch == '<' {
                    state = ScanState::Inside { start: idx };
                }
            }
            ScanState::Inside { start } => {
                if ch != '>' {
                    continue;
                }
                state = ScanState::Outside;
                // "<>" has an empty body and does not count as a tag
                if idx == start + 1 {
                    continue;
                }

                let segment = &source[segment_start..start];
                extracted.clean_text.push_str(segment);
                clean_len += segment.chars().count();

                extracted
                    .occurrences
                    .push(TagOccurrence::new(&source[start..=idx], clean_len));
                segment_start = idx + 1;
            }
        }
    }

    // An unclosed '<' leaves the remainder as plain text
    extracted.clean_text.push_str(&source[segment_start..]);
    extracted
}

/// Remove every tag from `text`, keeping everything else verbatim
pub fn strip_tags(text: &str) -> String {
    extract_tags(text).clean_text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags_of(extracted: &ExtractedSource) -> Vec<(&str, usize)> {
        extracted
            .occurrences
            .iter()
            .map(|o| (o.tag.as_str(), o.clean_offset))
            .collect()
    }

    #[test]
    fn test_extract_simple_pair() {
        let extracted = extract_tags("Go <b>Now</b>");
        assert_eq!(extracted.clean_text, "Go Now");
        assert_eq!(tags_of(&extracted), vec![("<b>", 3), ("</b>", 6)]);
        assert_eq!(extracted.clean_len(), 6);
    }

    #[test]
    fn test_extract_tag_at_start() {
        let extracted = extract_tags("<b>Super</b>man");
        assert_eq!(extracted.clean_text, "Superman");
        assert_eq!(tags_of(&extracted), vec![("<b>", 0), ("</b>", 5)]);
    }

    #[test]
    fn test_extract_no_tags() {
        let extracted = extract_tags("Hello");
        assert_eq!(extracted.clean_text, "Hello");
        assert!(!extracted.has_tags());
    }

    #[test]
    fn test_extract_empty_source() {
        let extracted = extract_tags("");
        assert_eq!(extracted.clean_text, "");
        assert!(!extracted.has_tags());
    }

    #[test]
    fn test_extract_only_tags() {
        let extracted = extract_tags("<b></b>");
        assert_eq!(extracted.clean_text, "");
        assert_eq!(tags_of(&extracted), vec![("<b>", 0), ("</b>", 0)]);
    }

    #[test]
    fn test_extract_keeps_attributes_verbatim() {
        let extracted = extract_tags("Click <a href=\"/x?a=1&b=2\">here</a>.");
        assert_eq!(extracted.clean_text, "Click here.");
        assert_eq!(
            tags_of(&extracted),
            vec![("<a href=\"/x?a=1&b=2\">", 6), ("</a>", 10)]
        );
    }

    #[test]
    fn test_extract_empty_angle_brackets_are_text() {
        let extracted = extract_tags("a <> b");
        assert_eq!(extracted.clean_text, "a <> b");
        assert!(!extracted.has_tags());
    }

    #[test]
    fn test_extract_unclosed_tag_is_text() {
        let extracted = extract_tags("x < y and <b>z");
        // "< y and <b>" closes at the first '>'
        assert_eq!(extracted.clean_text, "x z");
        assert_eq!(tags_of(&extracted), vec![("< y and <b>", 2)]);

        let extracted = extract_tags("1 < 2");
        assert_eq!(extracted.clean_text, "1 < 2");
        assert!(!extracted.has_tags());
    }

    #[test]
    fn test_extract_inner_open_bracket_not_special() {
        let extracted = extract_tags("<a<b>c");
        assert_eq!(extracted.clean_text, "c");
        assert_eq!(tags_of(&extracted), vec![("<a<b>", 0)]);
    }

    #[test]
    fn test_extract_double_open_bracket() {
        let extracted = extract_tags("x<<>y");
        assert_eq!(extracted.clean_text, "xy");
        assert_eq!(tags_of(&extracted), vec![("<<>", 1)]);
    }

    #[test]
    fn test_extract_stray_close_bracket() {
        let extracted = extract_tags("a > b <i>c</i>");
        assert_eq!(extracted.clean_text, "a > b c");
        assert_eq!(tags_of(&extracted), vec![("<i>", 6), ("</i>", 7)]);
    }

    #[test]
    fn test_extract_tag_spanning_newline() {
        let extracted = extract_tags("a<span\nclass=\"x\">b</span>");
        assert_eq!(extracted.clean_text, "ab");
        assert_eq!(extracted.occurrences[0].tag, "<span\nclass=\"x\">");
    }

    #[test]
    fn test_extract_offsets_count_chars_not_bytes() {
        let extracted = extract_tags("Größe <b>über</b> alles");
        assert_eq!(extracted.clean_text, "Größe über alles");
        assert_eq!(tags_of(&extracted), vec![("<b>", 6), ("</b>", 10)]);
    }

    #[test]
    fn test_extract_adjacent_tags() {
        let extracted = extract_tags("<b><i>x</i></b>");
        assert_eq!(extracted.clean_text, "x");
        assert_eq!(
            tags_of(&extracted),
            vec![("<b>", 0), ("<i>", 0), ("</i>", 1), ("</b>", 1)]
        );
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p>Hello <em>world</em></p>"), "Hello world");
        assert_eq!(strip_tags("no tags"), "no tags");
    }
}

//! Tag Transplantation
//!
//! Carries inline markup tags from a tagged source string over to a plain
//! translation of that string. There is no linguistic alignment involved:
//! each tag keeps its relative char position and is then nudged to the
//! nearest word boundary so no word of the translation gets split.
//!
//! # Overview
//!
//! 1. **Extraction** - Removes tags from the source, recording each tag's offset in the clean text
//! 2. **Mapping** - Scales each clean offset to the target length
//! 3. **Snapping** - Moves each mapped offset out of the middle of a word
//! 4. **Assembly** - Inserts the tags into the target in one pass
//!
//! Each phase is a pure function and can be used on its own.
//!
//! # Example
//!
//! ```ignore
//! use tag_transplant::transplant::transplant_tags;
//!
//! let result = transplant_tags("Go <b>Now</b>", "Go Immediately");
//! assert_eq!(result, "Go <b>Immediately</b>");
//! ```
pub mod assembly;
pub mod extraction;
pub mod mapping;
pub mod snapping;
pub mod transplanter;

pub use assembly::{TargetInsertion, assemble};
pub use extraction::{ExtractedSource, TagOccurrence, extract_tags, strip_tags};
pub use mapping::map_offset;
pub use snapping::{is_boundary, snap_to_boundary};
pub use transplanter::{plan_insertions, transplant_tags};

use std::collections::HashSet;

use crate::model::FontDescriptor;

/// Collapse a font list to one entry per family name.
///
/// Comparison is case-insensitive. The first occurrence of each family is
/// kept with its full descriptor, and first-seen order is preserved, so
/// running this over an already-unique list is a no-op.
pub fn dedup_by_family(fonts: Vec<FontDescriptor>) -> Vec<FontDescriptor> {
    let mut seen: HashSet<String> = HashSet::new();
    fonts
        .into_iter()
        .filter(|font| seen.insert(font.family.to_lowercase()))
        .collect()
}

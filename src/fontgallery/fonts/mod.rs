//! Font discovery.
//!
//! The [`FontSource`] trait yields descriptors for installed fonts, or an
//! empty list when the capability is unavailable. Enumeration problems are
//! not errors; a source that finds nothing simply returns nothing and the
//! pipeline reports "no fonts found".

use crate::model::FontDescriptor;

pub mod system;

pub trait FontSource {
    fn query_fonts(&self) -> Vec<FontDescriptor>;
}

/// Fixed list of descriptors, for tests and scripted runs.
pub struct StaticFontSource {
    fonts: Vec<FontDescriptor>,
}

impl StaticFontSource {
    pub fn new(fonts: Vec<FontDescriptor>) -> Self {
        Self { fonts }
    }
}

impl FontSource for StaticFontSource {
    fn query_fonts(&self) -> Vec<FontDescriptor> {
        self.fonts.clone()
    }
}

use serde::{Deserialize, Serialize};

/// One installed font, as reported by a [`FontSource`](crate::fonts::FontSource).
///
/// Only `family` is guaranteed; the optional fields depend on what the
/// underlying platform exposes for the face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontDescriptor {
    pub family: String,
    pub full_name: Option<String>,
    pub style: Option<String>,
    pub postscript_name: Option<String>,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            full_name: None,
            style: None,
            postscript_name: None,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_postscript_name(mut self, postscript_name: impl Into<String>) -> Self {
        self.postscript_name = Some(postscript_name.into());
        self
    }
}

/// Entry recorded for each successfully written note, used to build the
/// `Fonts MOC.md` index at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Sanitized filename stem (what the note link points at).
    pub name: String,
    /// Original family name (what the index displays).
    pub family: String,
}

/// Counters for one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub success_count: usize,
    pub fail_count: usize,
    /// Whether the index document was written. Stays `false` when the index
    /// is disabled, skipped (no successful notes), or failed to write.
    pub toc_written: bool,
}

use fontdb::{Database, Style, Weight};

use super::FontSource;
use crate::model::FontDescriptor;

/// Enumerates fonts installed on the system via `fontdb`.
///
/// The database is loaded once at construction. Platforms where no system
/// font directories exist (or none are readable) yield an empty list, which
/// the pipeline treats as "capability unavailable".
pub struct SystemFontSource {
    db: Database,
}

impl SystemFontSource {
    pub fn new() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        Self { db }
    }
}

impl Default for SystemFontSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FontSource for SystemFontSource {
    fn query_fonts(&self) -> Vec<FontDescriptor> {
        self.db
            .faces()
            .filter_map(|face| {
                let family = face.families.first().map(|(name, _)| name.clone())?;
                if family.is_empty() {
                    return None;
                }
                let style = style_name(face.weight, face.style);
                let full_name = if style == "Regular" {
                    family.clone()
                } else {
                    format!("{} {}", family, style)
                };
                let postscript_name = if face.post_script_name.is_empty() {
                    None
                } else {
                    Some(face.post_script_name.clone())
                };
                Some(FontDescriptor {
                    family,
                    full_name: Some(full_name),
                    style: Some(style),
                    postscript_name,
                })
            })
            .collect()
    }
}

/// Human-readable style name from weight and slant, in the shape font
/// pickers use ("Bold Italic", "Light", "Regular").
fn style_name(weight: Weight, style: Style) -> String {
    let weight_name = match weight.0 {
        0..=149 => Some("Thin"),
        150..=249 => Some("ExtraLight"),
        250..=349 => Some("Light"),
        350..=449 => None,
        450..=549 => Some("Medium"),
        550..=649 => Some("SemiBold"),
        650..=749 => Some("Bold"),
        750..=849 => Some("ExtraBold"),
        _ => Some("Black"),
    };
    let slant_name = match style {
        Style::Normal => None,
        Style::Italic => Some("Italic"),
        Style::Oblique => Some("Oblique"),
    };
    match (weight_name, slant_name) {
        (Some(w), Some(s)) => format!("{} {}", w, s),
        (Some(w), None) => w.to_string(),
        (None, Some(s)) => s.to_string(),
        (None, None) => "Regular".to_string(),
    }
}

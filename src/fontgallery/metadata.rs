//! Metadata blocks prepended to generated notes.
//!
//! Three shapes are supported, mirroring where people like to keep note
//! metadata: YAML frontmatter (`properties`), a tag line (`tags`), or a
//! wiki-link line (`links`). Lines for absent font fields are omitted
//! entirely rather than emitted empty.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::model::FontDescriptor;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum MetadataLocation {
    Tags,
    Links,
    #[default]
    Properties,
}

impl std::fmt::Display for MetadataLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MetadataLocation::Tags => "tags",
            MetadataLocation::Links => "links",
            MetadataLocation::Properties => "properties",
        };
        write!(f, "{}", name)
    }
}

/// Build the metadata block for one font. `font_name` is the sanitized
/// filename stem (already computed by the caller, which also needs it for
/// the note path). The returned string ends with a blank line so it can be
/// concatenated directly with the rendered template body.
pub fn compose(location: MetadataLocation, font: &FontDescriptor, font_name: &str) -> String {
    match location {
        MetadataLocation::Properties => {
            let mut block = String::from("---\n");
            block.push_str(&format!("fontFamily: \"{}\"\n", font.family));
            if let Some(full_name) = &font.full_name {
                block.push_str(&format!("fullName: \"{}\"\n", full_name));
            }
            if let Some(style) = &font.style {
                block.push_str(&format!("style: \"{}\"\n", style));
            }
            if let Some(postscript_name) = &font.postscript_name {
                block.push_str(&format!("postscriptName: \"{}\"\n", postscript_name));
            }
            block.push_str("type: FontPreview\n---\n\n");
            block
        }
        MetadataLocation::Tags => {
            let mut line = format!("#font #{}", font_name);
            if let Some(style) = &font.style {
                let style_tag: String = style
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join("-");
                line.push_str(&format!(" #{}", style_tag));
            }
            line.push_str("\n\n");
            line
        }
        MetadataLocation::Links => {
            let mut line = format!("[[Font]] [[{}]]", font_name);
            if let Some(style) = &font.style {
                line.push_str(&format!(" [[{}]]", style));
            }
            line.push_str("\n\n");
            line
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_omits_absent_fields() {
        let font = FontDescriptor::new("X");
        let block = compose(MetadataLocation::Properties, &font, "X");
        assert_eq!(block, "---\nfontFamily: \"X\"\ntype: FontPreview\n---\n\n");
    }

    #[test]
    fn test_properties_includes_present_fields() {
        let font = FontDescriptor::new("Arial")
            .with_full_name("Arial Bold")
            .with_style("Bold")
            .with_postscript_name("Arial-BoldMT");
        let block = compose(MetadataLocation::Properties, &font, "Arial");
        assert_eq!(
            block,
            "---\n\
             fontFamily: \"Arial\"\n\
             fullName: \"Arial Bold\"\n\
             style: \"Bold\"\n\
             postscriptName: \"Arial-BoldMT\"\n\
             type: FontPreview\n\
             ---\n\n"
        );
    }

    #[test]
    fn test_tags_with_style_hyphenates_whitespace() {
        let font = FontDescriptor::new("Fira Code").with_style("Semi Bold Italic");
        let line = compose(MetadataLocation::Tags, &font, "Fira-Code");
        assert_eq!(line, "#font #Fira-Code #Semi-Bold-Italic\n\n");
    }

    #[test]
    fn test_tags_without_style_has_no_style_tag() {
        let font = FontDescriptor::new("Arial");
        let line = compose(MetadataLocation::Tags, &font, "Arial");
        assert_eq!(line, "#font #Arial\n\n");
    }

    #[test]
    fn test_links_keeps_style_verbatim() {
        let font = FontDescriptor::new("Fira Code").with_style("Semi Bold");
        let line = compose(MetadataLocation::Links, &font, "Fira-Code");
        assert_eq!(line, "[[Font]] [[Fira-Code]] [[Semi Bold]]\n\n");
    }

    #[test]
    fn test_links_without_style() {
        let font = FontDescriptor::new("Arial");
        let line = compose(MetadataLocation::Links, &font, "Arial");
        assert_eq!(line, "[[Font]] [[Arial]]\n\n");
    }
}

//! The batch note-generation pipeline.
//!
//! For each unique font family: render the active template, prepend the
//! configured metadata block, and create-or-overwrite the note in the
//! vault. Failures are isolated per font; nothing short of a vault-less
//! environment aborts a run. When enabled, a `Fonts MOC.md` index linking
//! to every written note is assembled at the end.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::Settings;
use crate::dedup::dedup_by_family;
use crate::error::Result;
use crate::metadata::compose;
use crate::model::{FontDescriptor, GenerationReport, TocEntry};
use crate::notify::Notifier;
use crate::store::{EntryKind, Vault};
use crate::templates::{render, sanitize_font_name};

/// Fonts are processed in fixed-size slices purely so progress can be
/// reported incrementally; the slicing never affects counts or ordering.
pub const BATCH_SIZE: usize = 10;

pub const TOC_FILENAME: &str = "Fonts MOC.md";

const TOC_HEADER: &str = "<h1 style=\"font-size: 4em;\">Font Gallery</h1>\n\
<h4 style=\"text-align: left; font-weight: normal; font-size: 1.5rem; font-style:italic; margin-top: -20px\">A collection of fonts installed on your system.</h4>\n\
<p style=\"margin-top: 1em; margin-bottom: 2em;\">This gallery showcases all the fonts found on your system. Each font has its own dedicated page with typography samples and visual characteristics.</p>\n\
<hr>\n\n";

pub fn run<V: Vault>(
    vault: &mut V,
    fonts: Vec<FontDescriptor>,
    settings: &Settings,
    notifier: &mut dyn Notifier,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if fonts.is_empty() {
        result.report = Some(GenerationReport::default());
        result.add_message(CmdMessage::warning(
            "No system fonts found. Font enumeration may not be available on this system.",
        ));
        return Ok(result);
    }

    let original_count = fonts.len();
    let fonts = dedup_by_family(fonts);
    if fonts.len() != original_count {
        notifier.notify(&format!(
            "Found {} fonts, processing {} unique font families...",
            original_count,
            fonts.len()
        ));
    } else {
        notifier.notify(&format!("Processing {} fonts...", fonts.len()));
    }

    let folder = settings.output_folder.trim().trim_end_matches('/').to_string();
    let mut report = GenerationReport::default();
    let mut toc_entries: Vec<TocEntry> = Vec::new();
    let mut processed = 0;

    for batch in fonts.chunks(BATCH_SIZE) {
        for font in batch {
            match write_note(vault, font, settings, &folder) {
                Ok(entry) => {
                    report.success_count += 1;
                    toc_entries.push(entry);
                }
                Err(error) => {
                    report.fail_count += 1;
                    notifier.notify(&format!("Error processing {}: {}", font.family, error));
                }
            }
        }
        processed += batch.len();
        notifier.notify(&format!("Processed {} of {} fonts...", processed, fonts.len()));
    }

    let mut toc_error = None;
    if settings.create_table_of_contents && !toc_entries.is_empty() {
        match write_toc(vault, toc_entries, settings, &folder) {
            Ok(()) => report.toc_written = true,
            Err(error) => toc_error = Some(error),
        }
    }

    let mut summary = format!(
        "Finished processing {} fonts, {} failed.",
        report.success_count, report.fail_count
    );
    if report.toc_written {
        summary.push_str(" Table of Contents created.");
    } else if let Some(error) = toc_error {
        summary.push_str(" Failed to create Table of Contents.");
        result.add_message(CmdMessage::error(format!(
            "Table of Contents error: {}",
            error
        )));
    }
    result.add_message(if report.fail_count == 0 {
        CmdMessage::success(summary)
    } else {
        CmdMessage::warning(summary)
    });
    result.report = Some(report);
    Ok(result)
}

/// Render, compose and store the note for one font. Returns the index entry
/// on success; any error is the caller's cue to count a failure and move on.
fn write_note<V: Vault>(
    vault: &mut V,
    font: &FontDescriptor,
    settings: &Settings,
    folder: &str,
) -> Result<TocEntry> {
    let font_name = sanitize_font_name(&font.family);

    let metadata = if settings.include_metadata {
        compose(settings.metadata_location, font, &font_name)
    } else {
        String::new()
    };
    let body = render(settings.active_template_text(), font);
    let content = format!("{}{}", metadata, body).trim().to_string();

    let note_path = resolve_note_path(vault, folder, &format!("{}.md", font_name))?;
    create_or_overwrite(vault, &note_path, &content)?;
    Ok(TocEntry {
        name: font_name,
        family: font.family.clone(),
    })
}

fn write_toc<V: Vault>(
    vault: &mut V,
    mut entries: Vec<TocEntry>,
    settings: &Settings,
    folder: &str,
) -> Result<()> {
    entries.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    let font_size = settings.clamped_toc_font_size();
    let mut content = TOC_HEADER.to_string();
    for entry in &entries {
        content.push_str(&format!(
            "<p style=\"font-size: {}em; font-family: '{}';\">{}</p>\n\n",
            font_size, entry.family, entry.family
        ));
        content.push_str(&format!("[[{}]]\n\n<hr>\n\n", entry.name));
    }

    let toc_path = resolve_note_path(vault, folder, TOC_FILENAME)?;
    create_or_overwrite(vault, &toc_path, &content)
}

/// Join the output folder and filename with exactly one separator, creating
/// the folder on first use. An existing non-folder entry at the folder path
/// is an error.
fn resolve_note_path<V: Vault>(vault: &mut V, folder: &str, filename: &str) -> Result<String> {
    if folder.is_empty() {
        return Ok(filename.to_string());
    }
    match vault.entry_kind(folder) {
        None => vault.create_folder(folder)?,
        Some(EntryKind::Folder) => {}
        Some(EntryKind::File) => {
            return Err(crate::error::FontGalleryError::Store(format!(
                "{} exists but is not a folder",
                folder
            )));
        }
    }
    Ok(format!("{}/{}", folder, filename))
}

/// Existing notes are modified in place so their path identity survives a
/// re-run; anything else is created fresh.
fn create_or_overwrite<V: Vault>(vault: &mut V, path: &str, content: &str) -> Result<()> {
    match vault.entry_kind(path) {
        Some(EntryKind::File) => vault.modify(path, content),
        _ => vault.create(path, content),
    }
}

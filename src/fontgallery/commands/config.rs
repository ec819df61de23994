use crate::commands::{CmdMessage, CmdResult};
use crate::config::SettingsStore;
use crate::error::{FontGalleryError, Result};
use crate::metadata::MetadataLocation;
use crate::templates::TemplateSelection;

/// Everything the settings surface can do, one action per invocation.
#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub const CONFIG_KEYS: &[&str] = &[
    "template-style",
    "metadata",
    "include-metadata",
    "create-toc",
    "toc-font-size",
    "output-folder",
];

pub fn run(settings: &mut SettingsStore, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let result = CmdResult::default().with_settings(settings.get().clone());
            Ok(result)
        }
        ConfigAction::ShowKey(key) => {
            let value = read_key(settings, &key)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            apply_key(settings, &key, &value)?;
            let mut result = CmdResult::default();
            // A failed save leaves the working copy intact so the user can
            // fix the problem and retry.
            match settings.save() {
                Ok(()) => result.add_message(CmdMessage::success(format!("{} updated", key))),
                Err(error) => {
                    result.add_message(CmdMessage::error(format!(
                        "Failed to save settings: {}",
                        error
                    )));
                }
            }
            Ok(result)
        }
    }
}

fn read_key(settings: &SettingsStore, key: &str) -> Result<String> {
    let current = settings.get();
    let value = match key {
        "template-style" => current.template_selection.to_string(),
        "metadata" => current.metadata_location.to_string(),
        "include-metadata" => current.include_metadata.to_string(),
        "create-toc" => current.create_table_of_contents.to_string(),
        "toc-font-size" => current.toc_font_size.to_string(),
        "output-folder" => current.output_folder.clone(),
        other => {
            return Err(FontGalleryError::Api(format!(
                "Unknown config key: {}",
                other
            )))
        }
    };
    Ok(value)
}

fn apply_key(settings: &mut SettingsStore, key: &str, value: &str) -> Result<()> {
    match key {
        "template-style" => {
            let selection = parse_selection(value)?;
            settings.select_template(selection);
        }
        "metadata" => {
            let location = parse_location(value)?;
            settings.set_metadata_location(location);
        }
        "include-metadata" => settings.set_include_metadata(parse_bool(value)?),
        "create-toc" => settings.set_create_table_of_contents(parse_bool(value)?),
        "toc-font-size" => {
            let size: f64 = value
                .parse()
                .map_err(|_| FontGalleryError::Api(format!("Invalid font size: {}", value)))?;
            settings.set_toc_font_size(size);
        }
        "output-folder" => settings.set_output_folder(value),
        other => {
            return Err(FontGalleryError::Api(format!(
                "Unknown config key: {}",
                other
            )))
        }
    }
    Ok(())
}

fn parse_selection(value: &str) -> Result<TemplateSelection> {
    match value {
        "classic" => Ok(TemplateSelection::Classic),
        "modern" => Ok(TemplateSelection::Modern),
        "custom" => Ok(TemplateSelection::Custom),
        other => Err(FontGalleryError::Api(format!(
            "Invalid template style: {} (expected classic, modern or custom)",
            other
        ))),
    }
}

fn parse_location(value: &str) -> Result<MetadataLocation> {
    match value {
        "tags" => Ok(MetadataLocation::Tags),
        "links" => Ok(MetadataLocation::Links),
        "properties" => Ok(MetadataLocation::Properties),
        other => Err(FontGalleryError::Api(format!(
            "Invalid metadata location: {} (expected tags, links or properties)",
            other
        ))),
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "true" | "on" | "yes" => Ok(true),
        "false" | "off" | "no" => Ok(false),
        other => Err(FontGalleryError::Api(format!(
            "Invalid boolean: {}",
            other
        ))),
    }
}

//! Settings persistence and the template selection state machine.
//!
//! A single [`SettingsStore`] instance owns both the persisted settings
//! (`saved`, what is on disk) and the working copy (`current`, what editing
//! surfaces mutate). Edits become durable only through [`SettingsStore::save`];
//! switching back to a built-in template discards unsaved edits. Every editing
//! surface (the generate flags, the template editor, the config command) goes
//! through the same store, so the last save wins and reopened surfaces see the
//! latest persisted state.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::metadata::MetadataLocation;
use crate::templates::{TemplateSelection, MODERN_TEMPLATE};

pub const SETTINGS_FILENAME: &str = "settings.json";
pub const SETTINGS_DIR: &str = ".fontgallery";

pub const TOC_FONT_SIZE_MIN: f64 = 0.8;
pub const TOC_FONT_SIZE_MAX: f64 = 3.0;

/// Persisted configuration. Field names are camelCase on disk, matching the
/// token naming used inside templates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub template_selection: TemplateSelection,
    pub font_template: String,
    pub metadata_location: MetadataLocation,
    pub include_metadata: bool,
    pub create_table_of_contents: bool,
    pub toc_font_size: f64,
    pub output_folder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            template_selection: TemplateSelection::Modern,
            font_template: MODERN_TEMPLATE.to_string(),
            metadata_location: MetadataLocation::Properties,
            include_metadata: true,
            create_table_of_contents: true,
            toc_font_size: 1.5,
            output_folder: String::new(),
        }
    }
}

impl Settings {
    /// The template text generation will actually use. For the built-in
    /// selections this is always the built-in constant, regardless of what
    /// a hand-edited settings file claims.
    pub fn active_template_text(&self) -> &str {
        match self.template_selection {
            TemplateSelection::Custom => &self.font_template,
            selection => selection.builtin_text(),
        }
    }

    pub fn clamped_toc_font_size(&self) -> f64 {
        self.toc_font_size
            .clamp(TOC_FONT_SIZE_MIN, TOC_FONT_SIZE_MAX)
    }

    /// Restore invariants after hydration: built-in selections carry the
    /// built-in text, and the font size stays within slider range.
    fn normalize(&mut self) {
        if self.template_selection != TemplateSelection::Custom {
            self.font_template = self.template_selection.builtin_text().to_string();
        }
        self.toc_font_size = self.clamped_toc_font_size();
    }
}

type Subscriber = Box<dyn FnMut(&Settings)>;

/// Owner of the settings lifecycle: hydrate on startup, hand out the working
/// copy, persist on explicit save, notify subscribers of each saved change.
pub struct SettingsStore {
    path: PathBuf,
    saved: Settings,
    current: Settings,
    subscribers: Vec<Subscriber>,
}

impl SettingsStore {
    /// Hydrate from `path`, merging the stored (possibly partial) record
    /// over defaults. A missing file yields pure defaults.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut settings = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            Settings::default()
        };
        settings.normalize();
        Ok(Self {
            saved: settings.clone(),
            current: settings,
            path,
            subscribers: Vec::new(),
        })
    }

    /// Conventional settings path for a vault directory.
    pub fn path_for_vault(vault_root: &Path) -> PathBuf {
        vault_root.join(SETTINGS_DIR).join(SETTINGS_FILENAME)
    }

    pub fn get(&self) -> &Settings {
        &self.current
    }

    pub fn saved(&self) -> &Settings {
        &self.saved
    }

    pub fn is_dirty(&self) -> bool {
        self.current != self.saved
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&Settings) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Persist the working copy. One write covers every pending field change,
    /// so mode and text always land together.
    pub fn save(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.current)?;
        fs::write(&self.path, content)?;
        self.saved = self.current.clone();
        for subscriber in &mut self.subscribers {
            subscriber(&self.saved);
        }
        Ok(())
    }

    /// Switch the active template selection.
    ///
    /// Moving to a built-in replaces the active text with that constant and
    /// drops any unsaved edit. Moving to `Custom` restores the persisted
    /// custom text when one exists, otherwise it seeds from the built-in
    /// being left so the editor never starts empty.
    pub fn select_template(&mut self, next: TemplateSelection) {
        let previous = self.current.template_selection;
        self.current.template_selection = next;
        match next {
            TemplateSelection::Classic | TemplateSelection::Modern => {
                self.current.font_template = next.builtin_text().to_string();
            }
            TemplateSelection::Custom => {
                if self.saved.template_selection == TemplateSelection::Custom {
                    self.current.font_template = self.saved.font_template.clone();
                } else {
                    self.current.font_template = previous.builtin_text().to_string();
                }
            }
        }
    }

    /// Save an edited template from any editing surface: forces the
    /// selection to `Custom` and persists mode and text atomically.
    pub fn save_template(&mut self, text: String) -> Result<()> {
        self.current.font_template = text;
        self.current.template_selection = TemplateSelection::Custom;
        self.save()
    }

    /// Revert the working template text to its reference version: the
    /// built-in for built-in selections, the last saved custom text (or the
    /// default) for `Custom`. Does not persist by itself.
    pub fn reset_template(&mut self) {
        self.current.font_template = match self.current.template_selection {
            TemplateSelection::Custom => {
                if self.saved.template_selection == TemplateSelection::Custom {
                    self.saved.font_template.clone()
                } else {
                    MODERN_TEMPLATE.to_string()
                }
            }
            selection => selection.builtin_text().to_string(),
        };
    }

    pub fn set_metadata_location(&mut self, location: MetadataLocation) {
        self.current.metadata_location = location;
    }

    pub fn set_include_metadata(&mut self, include: bool) {
        self.current.include_metadata = include;
    }

    pub fn set_create_table_of_contents(&mut self, create: bool) {
        self.current.create_table_of_contents = create;
    }

    pub fn set_toc_font_size(&mut self, size: f64) {
        self.current.toc_font_size = size.clamp(TOC_FONT_SIZE_MIN, TOC_FONT_SIZE_MAX);
    }

    pub fn set_output_folder(&mut self, folder: impl Into<String>) {
        self.current.output_folder = folder.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::CLASSIC_TEMPLATE;
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SettingsStore {
        SettingsStore::load(dir.path().join(SETTINGS_FILENAME)).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.template_selection, TemplateSelection::Modern);
        assert_eq!(settings.font_template, MODERN_TEMPLATE);
        assert_eq!(settings.metadata_location, MetadataLocation::Properties);
        assert!(settings.include_metadata);
        assert!(settings.create_table_of_contents);
        assert_eq!(settings.toc_font_size, 1.5);
        assert_eq!(settings.output_folder, "");
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get(), &Settings::default());
    }

    #[test]
    fn test_partial_file_merges_over_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);
        fs::write(&path, r#"{"metadataLocation": "tags", "outputFolder": "Fonts"}"#).unwrap();

        let store = SettingsStore::load(&path).unwrap();
        assert_eq!(store.get().metadata_location, MetadataLocation::Tags);
        assert_eq!(store.get().output_folder, "Fonts");
        // Untouched fields stay at defaults
        assert_eq!(store.get().template_selection, TemplateSelection::Modern);
        assert!(store.get().include_metadata);
    }

    #[test]
    fn test_load_normalizes_builtin_template_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);
        fs::write(
            &path,
            r#"{"templateSelection": "classic", "fontTemplate": "tampered", "tocFontSize": 9.0}"#,
        )
        .unwrap();

        let store = SettingsStore::load(&path).unwrap();
        assert_eq!(store.get().font_template, CLASSIC_TEMPLATE);
        assert_eq!(store.get().toc_font_size, TOC_FONT_SIZE_MAX);
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);
        let mut store = SettingsStore::load(&path).unwrap();
        store.set_output_folder("Previews");
        store.set_toc_font_size(2.0);
        store.save().unwrap();

        let reloaded = SettingsStore::load(&path).unwrap();
        assert_eq!(reloaded.get().output_folder, "Previews");
        assert_eq!(reloaded.get().toc_font_size, 2.0);
    }

    #[test]
    fn test_switch_to_custom_seeds_from_builtin_being_left() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        assert_eq!(store.get().template_selection, TemplateSelection::Modern);

        store.select_template(TemplateSelection::Custom);
        assert_eq!(store.get().font_template, MODERN_TEMPLATE);

        store.select_template(TemplateSelection::Classic);
        store.select_template(TemplateSelection::Custom);
        assert_eq!(store.get().font_template, CLASSIC_TEMPLATE);
    }

    #[test]
    fn test_switch_to_custom_prefers_saved_custom_text() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.save_template("my template".to_string()).unwrap();

        store.select_template(TemplateSelection::Modern);
        store.select_template(TemplateSelection::Custom);
        assert_eq!(store.get().font_template, "my template");
    }

    #[test]
    fn test_switch_to_builtin_discards_unsaved_edit() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.select_template(TemplateSelection::Custom);
        store.current.font_template = "unsaved edit".to_string();

        store.select_template(TemplateSelection::Modern);
        assert_eq!(store.get().font_template, MODERN_TEMPLATE);
        assert!(!store.saved().font_template.contains("unsaved edit"));
    }

    #[test]
    fn test_save_template_forces_custom_in_one_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);
        let mut store = SettingsStore::load(&path).unwrap();
        store.save_template("<p>{fontFamily}</p>".to_string()).unwrap();

        let reloaded = SettingsStore::load(&path).unwrap();
        assert_eq!(reloaded.get().template_selection, TemplateSelection::Custom);
        assert_eq!(reloaded.get().font_template, "<p>{fontFamily}</p>");
    }

    #[test]
    fn test_reset_template_for_custom_restores_last_saved() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.save_template("saved custom".to_string()).unwrap();
        store.current.font_template = "dirty".to_string();

        store.reset_template();
        assert_eq!(store.get().font_template, "saved custom");
    }

    #[test]
    fn test_subscribers_run_on_save() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let seen = Rc::new(Cell::new(0));
        let counter = Rc::clone(&seen);
        store.subscribe(move |_| counter.set(counter.get() + 1));

        store.set_include_metadata(false);
        store.save().unwrap();
        store.set_include_metadata(true);
        store.save().unwrap();
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_save_fails_when_settings_path_is_unwritable() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        // The parent of the settings path is a regular file, so the write
        // cannot succeed.
        let mut store = SettingsStore::load(blocker.join(SETTINGS_FILENAME)).unwrap();
        store.set_output_folder("Fonts");
        assert!(store.save().is_err());
        assert_eq!(store.saved().output_folder, "");
        assert_eq!(store.get().output_folder, "Fonts");
    }

    #[test]
    fn test_dirty_tracking() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        assert!(!store.is_dirty());
        store.set_output_folder("Fonts");
        assert!(store.is_dirty());
        store.save().unwrap();
        assert!(!store.is_dirty());
    }
}

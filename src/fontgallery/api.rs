//! # API Facade
//!
//! Single entry point for all fontgallery operations. The facade owns the
//! vault and the settings store, dispatches to the command layer, and
//! returns structured results; it never prints or assumes a terminal. UI
//! clients (the CLI binary, tests) interact only through this type.

use crate::commands;
use crate::commands::config::ConfigAction;
use crate::commands::template::TemplateAction;
use crate::config::SettingsStore;
use crate::error::Result;
use crate::fonts::FontSource;
use crate::model::FontDescriptor;
use crate::notify::Notifier;
use crate::store::Vault;

/// Generic over `Vault` to allow different storage backends:
/// `FileVault` in production, `InMemoryVault` in tests.
pub struct FontGalleryApi<V: Vault> {
    vault: V,
    settings: SettingsStore,
}

impl<V: Vault> FontGalleryApi<V> {
    pub fn new(vault: V, settings: SettingsStore) -> Self {
        Self { vault, settings }
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsStore {
        &mut self.settings
    }

    pub fn vault(&self) -> &V {
        &self.vault
    }

    /// Query the source and run the full generation pipeline.
    pub fn generate(
        &mut self,
        source: &dyn FontSource,
        notifier: &mut dyn Notifier,
    ) -> Result<commands::CmdResult> {
        let fonts = source.query_fonts();
        self.generate_with_fonts(fonts, notifier)
    }

    /// Run the pipeline over an explicit font list.
    pub fn generate_with_fonts(
        &mut self,
        fonts: Vec<FontDescriptor>,
        notifier: &mut dyn Notifier,
    ) -> Result<commands::CmdResult> {
        commands::generate::run(&mut self.vault, fonts, self.settings.get(), notifier)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&mut self.settings, action)
    }

    pub fn template(&mut self, action: TemplateAction) -> Result<commands::CmdResult> {
        commands::template::run(&mut self.settings, action)
    }
}

use crate::commands::{CmdMessage, CmdResult};
use crate::config::SettingsStore;
use crate::error::Result;
use crate::templates::TemplateSelection;

/// Actions of the standalone template editing surface.
#[derive(Debug, Clone)]
pub enum TemplateAction {
    /// Return the active template text.
    Show,
    /// Switch the active selection (and persist the switch).
    Select(TemplateSelection),
    /// Persist an edited template text; always lands in `custom` mode.
    Save(String),
    /// Revert the text to its reference version and persist.
    Reset,
}

pub fn run(settings: &mut SettingsStore, action: TemplateAction) -> Result<CmdResult> {
    match action {
        TemplateAction::Show => {
            let mut result = CmdResult::default()
                .with_template_text(settings.get().active_template_text());
            result.add_message(CmdMessage::info(format!(
                "Template style: {}",
                settings.get().template_selection.display_name()
            )));
            Ok(result)
        }
        TemplateAction::Select(selection) => {
            settings.select_template(selection);
            let mut result = CmdResult::default();
            match settings.save() {
                Ok(()) => result.add_message(CmdMessage::success(format!(
                    "Template style updated to {}",
                    selection
                ))),
                Err(error) => result.add_message(CmdMessage::error(format!(
                    "Failed to save settings: {}",
                    error
                ))),
            }
            Ok(result)
        }
        TemplateAction::Save(text) => {
            let mut result = CmdResult::default();
            match settings.save_template(text) {
                Ok(()) => result.add_message(CmdMessage::success("Template saved successfully")),
                Err(error) => result.add_message(CmdMessage::error(format!(
                    "Error saving template: {}",
                    error
                ))),
            }
            Ok(result)
        }
        TemplateAction::Reset => {
            settings.reset_template();
            let mut result = CmdResult::default();
            match settings.save() {
                Ok(()) => result.add_message(CmdMessage::success(format!(
                    "Template reset for {}",
                    settings.get().template_selection.display_name()
                ))),
                Err(error) => result.add_message(CmdMessage::error(format!(
                    "Failed to save settings: {}",
                    error
                ))),
            }
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::templates::{CLASSIC_TEMPLATE, MODERN_TEMPLATE};
    use tempfile::TempDir;

    fn store() -> (TempDir, SettingsStore) {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::load(dir.path().join("settings.json")).unwrap();
        (dir, store)
    }

    // Settings path whose parent is a regular file, so every save fails.
    fn unwritable_store() -> (TempDir, SettingsStore) {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let store = SettingsStore::load(blocker.join("settings.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_show_returns_active_text() {
        let (_dir, mut settings) = store();
        let result = run(&mut settings, TemplateAction::Show).unwrap();
        assert_eq!(result.template_text.as_deref(), Some(MODERN_TEMPLATE));
    }

    #[test]
    fn test_select_persists_mode_and_text() {
        let (_dir, mut settings) = store();
        run(&mut settings, TemplateAction::Select(TemplateSelection::Classic)).unwrap();
        assert_eq!(settings.saved().template_selection, TemplateSelection::Classic);
        assert_eq!(settings.saved().font_template, CLASSIC_TEMPLATE);
    }

    #[test]
    fn test_save_forces_custom_mode() {
        let (_dir, mut settings) = store();
        run(&mut settings, TemplateAction::Save("edited".into())).unwrap();
        assert_eq!(settings.saved().template_selection, TemplateSelection::Custom);
        assert_eq!(settings.saved().font_template, "edited");
    }

    #[test]
    fn test_select_reports_save_failure_without_aborting() {
        let (_dir, mut settings) = unwritable_store();
        let result = run(
            &mut settings,
            TemplateAction::Select(TemplateSelection::Classic),
        )
        .unwrap();

        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(result.messages[0].content.contains("Failed to save settings"));
        // The switch applies to the working copy; nothing lands on disk.
        assert_eq!(settings.get().template_selection, TemplateSelection::Classic);
        assert_eq!(settings.saved().template_selection, TemplateSelection::Modern);
    }

    #[test]
    fn test_save_reports_failure_without_aborting() {
        let (_dir, mut settings) = unwritable_store();
        let result = run(&mut settings, TemplateAction::Save("edited".into())).unwrap();

        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(result.messages[0].content.contains("Error saving template"));
        assert_eq!(settings.get().font_template, "edited");
        assert_eq!(settings.saved().font_template, MODERN_TEMPLATE);
    }

    #[test]
    fn test_reset_restores_builtin_for_builtin_mode() {
        let (_dir, mut settings) = store();
        run(&mut settings, TemplateAction::Select(TemplateSelection::Classic)).unwrap();
        run(&mut settings, TemplateAction::Reset).unwrap();
        assert_eq!(settings.get().font_template, CLASSIC_TEMPLATE);
    }
}

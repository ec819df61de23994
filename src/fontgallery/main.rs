use clap::Parser;
use colored::*;
use fontgallery::api::FontGalleryApi;
use fontgallery::commands::config::{ConfigAction, CONFIG_KEYS};
use fontgallery::commands::template::TemplateAction;
use fontgallery::commands::{CmdMessage, MessageLevel};
use fontgallery::config::SettingsStore;
use fontgallery::editor::edit_template;
use fontgallery::error::{FontGalleryError, Result};
use fontgallery::fonts::system::SystemFontSource;
use fontgallery::fonts::FontSource;
use fontgallery::metadata::MetadataLocation;
use fontgallery::notify::Notifier;
use fontgallery::store::fs::FileVault;
use fontgallery::templates::TemplateSelection;

mod args;
use args::{Cli, Commands, TemplateCommands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api(&cli)?;

    if cli.verbose {
        api.settings_mut()
            .subscribe(|_| println!("{}", "Settings saved.".dimmed()));
    }

    match cli.command {
        Commands::Generate {
            output_folder,
            template,
            metadata,
            no_metadata,
            no_toc,
            toc_font_size,
            edit_template,
        } => handle_generate(
            &mut api,
            GenerateOverrides {
                output_folder,
                template,
                metadata,
                no_metadata,
                no_toc,
                toc_font_size,
                edit_template,
            },
        ),
        Commands::Config { key, value } => handle_config(&mut api, key, value),
        Commands::Template { action } => handle_template(&mut api, action),
    }
}

fn init_api(cli: &Cli) -> Result<FontGalleryApi<FileVault>> {
    if !cli.vault.is_dir() {
        return Err(FontGalleryError::Api(format!(
            "Vault directory does not exist: {}",
            cli.vault.display()
        )));
    }
    let settings = SettingsStore::load(SettingsStore::path_for_vault(&cli.vault))?;
    let vault = FileVault::new(&cli.vault);
    Ok(FontGalleryApi::new(vault, settings))
}

struct GenerateOverrides {
    output_folder: Option<String>,
    template: Option<TemplateSelection>,
    metadata: Option<MetadataLocation>,
    no_metadata: bool,
    no_toc: bool,
    toc_font_size: Option<f64>,
    edit_template: bool,
}

/// The generation dialog: flags adjust the settings, confirmed values are
/// saved, then the batch runs against the system fonts.
fn handle_generate(api: &mut FontGalleryApi<FileVault>, overrides: GenerateOverrides) -> Result<()> {
    let settings = api.settings_mut();
    if let Some(folder) = overrides.output_folder {
        settings.set_output_folder(folder);
    }
    if let Some(selection) = overrides.template {
        settings.select_template(selection);
    }
    if let Some(location) = overrides.metadata {
        settings.set_metadata_location(location);
    }
    if overrides.no_metadata {
        settings.set_include_metadata(false);
    }
    if overrides.no_toc {
        settings.set_create_table_of_contents(false);
    }
    if let Some(size) = overrides.toc_font_size {
        settings.set_toc_font_size(size);
    }

    if overrides.edit_template {
        let edited = edit_template(settings.get().active_template_text())?;
        settings.save_template(edited)?;
    } else if settings.is_dirty() {
        // A failed save is reported but does not cancel the run; the
        // overrides still apply to this invocation.
        if let Err(error) = settings.save() {
            print_messages(&[CmdMessage::error(format!(
                "Failed to save settings: {}",
                error
            ))]);
        }
    }

    println!("{}", "Getting system fonts...".dimmed());
    let source = SystemFontSource::new();
    let fonts = source.query_fonts();
    let mut notifier = PrintNotifier;
    let result = api.generate_with_fonts(fonts, &mut notifier)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    api: &mut FontGalleryApi<FileVault>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    if let Some(settings) = &result.settings {
        println!("template-style   = {}", settings.template_selection);
        println!("metadata         = {}", settings.metadata_location);
        println!("include-metadata = {}", settings.include_metadata);
        println!("create-toc       = {}", settings.create_table_of_contents);
        println!("toc-font-size    = {}", settings.toc_font_size);
        println!("output-folder    = {}", settings.output_folder);
        println!();
        println!("{}", format!("Keys: {}", CONFIG_KEYS.join(", ")).dimmed());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_template(api: &mut FontGalleryApi<FileVault>, action: TemplateCommands) -> Result<()> {
    let result = match action {
        TemplateCommands::Show => api.template(TemplateAction::Show)?,
        TemplateCommands::Select { style } => api.template(TemplateAction::Select(style))?,
        TemplateCommands::Edit => {
            let initial = api.settings().get().active_template_text().to_string();
            let edited = edit_template(&initial)?;
            api.template(TemplateAction::Save(edited))?
        }
        TemplateCommands::Reset => api.template(TemplateAction::Reset)?,
    };

    if let Some(text) = &result.template_text {
        println!("{}", text);
    }
    print_messages(&result.messages);
    Ok(())
}

struct PrintNotifier;

impl Notifier for PrintNotifier {
    fn notify(&mut self, message: &str) {
        println!("{}", message.dimmed());
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

use clap::{Parser, Subcommand};
use fontgallery::metadata::MetadataLocation;
use fontgallery::templates::TemplateSelection;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fontgallery")]
#[command(about = "Generate Markdown preview notes for your installed fonts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory the notes are written into
    #[arg(long, global = true, default_value = ".")]
    pub vault: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create font preview notes for every installed font
    #[command(alias = "gen")]
    Generate {
        /// Folder the notes go into (empty = vault root)
        #[arg(long)]
        output_folder: Option<String>,

        /// Template style to render with
        #[arg(long, value_enum)]
        template: Option<TemplateSelection>,

        /// Where to store font metadata
        #[arg(long, value_enum)]
        metadata: Option<MetadataLocation>,

        /// Leave the metadata block out of the notes
        #[arg(long)]
        no_metadata: bool,

        /// Skip the Fonts MOC index document
        #[arg(long)]
        no_toc: bool,

        /// Font size (em) for index entries
        #[arg(long)]
        toc_font_size: Option<f64>,

        /// Open the template in $EDITOR before generating
        #[arg(long)]
        edit_template: bool,
    },

    /// Show or change settings
    Config {
        /// Settings key (omit to show everything)
        key: Option<String>,

        /// New value (omit to show the current one)
        value: Option<String>,
    },

    /// Inspect and edit the preview template
    Template {
        #[command(subcommand)]
        action: TemplateCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// Print the active template text
    Show,

    /// Switch the template style
    Select {
        #[arg(value_enum)]
        style: TemplateSelection,
    },

    /// Edit the template in $EDITOR (saves as the custom template)
    Edit,

    /// Reset the template text to its reference version
    Reset,
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Optionally specify the path to the config file to use.
    /// If not set, then the `QRPOSTER_CONFIG_FILE` environment variable is
    /// consulted, and built-in defaults apply when that is absent too.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scrape a listing URL and build the poster from its metadata.
    Generate { url: String },

    /// Print the active poster fields.
    Show,

    /// Start editing; changes go to a draft until saved.
    Edit,

    /// Update one field of the edit draft (title, subtitle, description, image, url).
    Set { field: String, value: String },

    /// Use a local image file as the poster image.
    Upload { image_path: PathBuf },

    /// Commit the edit draft.
    Save,

    /// Discard the edit draft.
    Cancel,

    /// Write the poster as a print-ready HTML document.
    Export { output_path: PathBuf },

    /// Dismiss the poster; the uploaded image is kept for the next one.
    Close,
}

mod page_html;

pub use page_html::make_poster_html;

use std::path::Path;

use anyhow::{bail, Context};

use crate::context::AppContext;

/// Write the print-ready page document for the active poster (the draft while
/// editing). The process exit status is the only success signal; nothing is
/// sent to a printer from here.
pub fn export_poster(ctx: &AppContext, output_path: &Path) -> anyhow::Result<()> {
    let Some(poster) = ctx.session.active_poster() else {
        bail!("No poster to export; generate one first");
    };

    let html = make_poster_html(poster);
    std::fs::write(output_path, html)
        .with_context(|| format!("Writing poster document to {output_path:?}"))?;

    println!("Wrote poster document to {}", output_path.display());
    Ok(())
}

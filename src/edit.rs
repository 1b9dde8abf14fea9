use std::path::Path;
use std::str::FromStr;

use anyhow::anyhow;
use strum::VariantNames;

use crate::context::AppContext;
use crate::image;
use crate::poster::PosterField;

pub fn begin_edit(ctx: &mut AppContext) -> anyhow::Result<()> {
    ctx.session.begin_edit()?;
    ctx.write_session()?;
    println!("Editing; changes apply to a draft until 'save'.");
    Ok(())
}

pub fn set_field(ctx: &mut AppContext, field_name: &str, value: &str) -> anyhow::Result<()> {
    let field = PosterField::from_str(field_name).map_err(|_| {
        anyhow!(
            "Unknown field {field_name:?}; editable fields: {}",
            PosterField::VARIANTS.join(", ")
        )
    })?;

    ctx.session
        .draft_mut()?
        .set_field(field, value, &ctx.config.qr)?;
    ctx.write_session()?;
    println!(" - {field}: {value}");
    Ok(())
}

pub fn save(ctx: &mut AppContext) -> anyhow::Result<()> {
    ctx.session.save()?;
    ctx.write_session()?;
    println!("Draft saved.");
    Ok(())
}

pub fn cancel(ctx: &mut AppContext) -> anyhow::Result<()> {
    ctx.session.cancel()?;
    ctx.write_session()?;
    println!("Draft discarded.");
    Ok(())
}

/// Load a local image to use on the poster. A file that is not a supported
/// image type is ignored without a message, matching the file-picker
/// behavior this replaces.
pub fn upload_image(ctx: &mut AppContext, image_path: &Path) -> anyhow::Result<()> {
    let Some(data_url) = image::read_image_as_data_url(image_path)? else {
        return Ok(());
    };

    ctx.session.set_uploaded_image(data_url);
    ctx.write_session()?;
    println!("Uploaded image {}", image_path.display());
    Ok(())
}

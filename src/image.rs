use std::fmt;
use std::path::Path;

use anyhow::Context;
use base64::Engine;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MimeType(&'static str);

impl MimeType {
    fn file_ext_to_mime_type(ext: &str) -> Option<&'static str> {
        let result = match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "gif" => "image/gif",
            "webp" => "image/webp",
            _ => {
                return None;
            }
        };
        Some(result)
    }

    /// Identify an image MIME type from the file extension. `None` means the
    /// file is not a supported image; callers treat that as a silent no-op.
    pub fn identify(path: &Path) -> Option<MimeType> {
        let ext = path.extension().and_then(|ext| ext.to_str())?;
        Self::file_ext_to_mime_type(ext).map(MimeType)
    }

    pub fn as_str(&self) -> &str {
        self.0
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for MimeType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Read a local image file into an inline `data:` URL.
///
/// Returns `Ok(None)` for files that are not a supported image type; that is
/// the documented silent-ignore path, so only a debug line is emitted.
pub fn read_image_as_data_url(path: &Path) -> anyhow::Result<Option<String>> {
    let Some(mime_type) = MimeType::identify(path) else {
        log::debug!("Ignoring upload {path:?}: not a supported image type");
        return Ok(None);
    };

    let bytes =
        std::fs::read(path).with_context(|| format!("Reading uploaded image {path:?}"))?;
    Ok(Some(to_data_url(&bytes, &mime_type)))
}

pub fn to_data_url(bytes: &[u8], mime_type: &MimeType) -> String {
    format!(
        "data:{};base64,{}",
        mime_type,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

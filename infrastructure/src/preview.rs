use anyhow::{bail, Context};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use shared::types::Result;
use std::fs;
use std::path::Path;

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => return None,
    };
    Some(mime)
}

/// Read a local image into a `data:` URL suitable for an inline preview.
pub fn data_url(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let Some(mime) = mime_for(path) else {
        bail!("Unsupported image type: {:?}", path);
    };
    let bytes = fs::read(path).with_context(|| format!("Failed to read image at {:?}", path))?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    app::state::GuestName,
    foundation::error::{InviteError, InviteResult},
    render::raster::InvitationBitmap,
};

/// Stand-in for the guest name in file names.
pub const FILE_NAME_FALLBACK: &str = "亲朋好友";

/// `<name or 亲朋好友>_邀请函.png`, with path separators in the name replaced by `_`.
pub fn export_file_name(name: &GuestName) -> String {
    let stem: String = name
        .or(FILE_NAME_FALLBACK)
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{stem}_邀请函.png")
}

pub fn encode_png(bitmap: &InvitationBitmap) -> InviteResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(bitmap.width, bitmap.height, bitmap.data.clone())
        .ok_or_else(|| {
            InviteError::export(format!(
                "bitmap data does not match {}x{} rgba8",
                bitmap.width, bitmap.height
            ))
        })?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| InviteError::export(format!("encode png: {e}")))?;
    Ok(buf)
}

/// Save `bitmap` as a PNG named after the guest inside `dir`, creating `dir` if needed.
#[tracing::instrument(skip(bitmap), fields(name = name.as_str(), dir = %dir.display()))]
pub fn download(bitmap: &InvitationBitmap, name: &GuestName, dir: &Path) -> InviteResult<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;

    let bytes = encode_png(bitmap)?;
    let path = dir.join(export_file_name(name));
    std::fs::write(&path, bytes).with_context(|| format!("write png '{}'", path.display()))?;

    tracing::debug!(path = %path.display(), "invitation saved");
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;

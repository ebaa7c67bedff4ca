use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;

use crate::{
    app::state::GuestName,
    config::model::{EventDetails, MAX_SCALE},
    foundation::core::Canvas,
    foundation::error::{InviteError, InviteResult},
    render::{
        layout::{CARD, invitation_layout},
        svg::display_list_to_svg,
    },
};

/// Rendered card, straight-alpha RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvitationBitmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl InvitationBitmap {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOpts {
    /// Device pixels per logical pixel.
    pub scale: u32,
    /// Directory scanned for extra fonts on top of the system fonts.
    pub font_dir: Option<PathBuf>,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            scale: 3,
            font_dir: None,
        }
    }
}

/// Rasterizes invitation cards. Fonts are loaded once at construction.
pub struct InvitationRenderer {
    scale: u32,
    opts: usvg::Options<'static>,
}

impl InvitationRenderer {
    pub fn new(opts: &RenderOpts) -> InviteResult<Self> {
        if opts.scale == 0 || opts.scale > MAX_SCALE {
            return Err(InviteError::validation(format!(
                "render scale must be in 1..={MAX_SCALE}"
            )));
        }

        let fontdb = build_fontdb(opts.font_dir.as_deref());
        tracing::debug!(faces = fontdb.len(), "font database ready");

        Ok(Self {
            scale: opts.scale,
            opts: usvg::Options {
                fontdb,
                font_resolver: make_font_resolver(),
                ..Default::default()
            },
        })
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn output_size(&self) -> Canvas {
        CARD.scaled(self.scale)
    }

    /// Render the card for `name`; an empty name prints the placeholder.
    #[tracing::instrument(skip(self, event), fields(name = name.as_str(), scale = self.scale))]
    pub fn render(&self, name: &GuestName, event: &EventDetails) -> InviteResult<InvitationBitmap> {
        let ops = invitation_layout(name, event);
        let svg = display_list_to_svg(&ops, CARD);
        self.rasterize_svg(&svg)
    }

    fn rasterize_svg(&self, svg: &str) -> InviteResult<InvitationBitmap> {
        let tree = usvg::Tree::from_data(svg.as_bytes(), &self.opts)
            .context("parse invitation svg")
            .map_err(|e| InviteError::render(format!("{e:#}")))?;

        let size = self.output_size();
        let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width, size.height)
            .ok_or_else(|| InviteError::render("failed to allocate invitation pixmap"))?;

        let s = self.scale as f32;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(s, s),
            &mut pixmap.as_mut(),
        );

        let mut data = pixmap.take();
        unpremultiply_rgba8_in_place(&mut data);

        Ok(InvitationBitmap {
            width: size.width,
            height: size.height,
            data,
        })
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

fn build_fontdb(font_dir: Option<&Path>) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();

    if let Some(dir) = font_dir {
        load_fonts_from_dir(&mut db, dir);
    }

    Arc::new(db)
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ["ttf", "otf", "ttc"].iter().any(|f| ext.eq_ignore_ascii_case(f)))
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let entries = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "font directory is not readable");
            return;
        }
    };

    let before = db.len();
    for path in entries.flatten().map(|entry| entry.path()) {
        if !path.is_file() || !is_font_file(&path) {
            continue;
        }
        if let Err(e) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable font");
        }
    }
    tracing::debug!(dir = %dir.display(), faces = db.len() - before, "loaded extra fonts");
}

/// Families tried after the requested ones. The card text is Chinese, so common CJK faces come
/// before the generic families.
const CJK_FALLBACK_FAMILIES: &[&str] = &[
    "Noto Serif CJK SC",
    "Noto Sans CJK SC",
    "Source Han Serif SC",
    "Source Han Sans SC",
    "WenQuanYi Zen Hei",
    "WenQuanYi Micro Hei",
    "KaiTi",
    "SimSun",
    "Microsoft YaHei",
    "PingFang SC",
];

fn fontdb_family(family: &usvg::FontFamily) -> usvg::fontdb::Family<'_> {
    use usvg::{FontFamily, fontdb::Family};

    match family {
        FontFamily::Serif => Family::Serif,
        FontFamily::SansSerif => Family::SansSerif,
        FontFamily::Cursive => Family::Cursive,
        FontFamily::Fantasy => Family::Fantasy,
        FontFamily::Monospace => Family::Monospace,
        FontFamily::Named(name) => Family::Name(name),
    }
}

fn fontdb_stretch(stretch: usvg::FontStretch) -> usvg::fontdb::Stretch {
    use usvg::{FontStretch, fontdb::Stretch};

    match stretch {
        FontStretch::UltraCondensed => Stretch::UltraCondensed,
        FontStretch::ExtraCondensed => Stretch::ExtraCondensed,
        FontStretch::Condensed => Stretch::Condensed,
        FontStretch::SemiCondensed => Stretch::SemiCondensed,
        FontStretch::Normal => Stretch::Normal,
        FontStretch::SemiExpanded => Stretch::SemiExpanded,
        FontStretch::Expanded => Stretch::Expanded,
        FontStretch::ExtraExpanded => Stretch::ExtraExpanded,
        FontStretch::UltraExpanded => Stretch::UltraExpanded,
    }
}

fn fontdb_style(style: usvg::FontStyle) -> usvg::fontdb::Style {
    match style {
        usvg::FontStyle::Normal => usvg::fontdb::Style::Normal,
        usvg::FontStyle::Italic => usvg::fontdb::Style::Italic,
        usvg::FontStyle::Oblique => usvg::fontdb::Style::Oblique,
    }
}

/// Requested families first, then CJK faces, then generic families, then any face at all, so
/// the card still renders on hosts without the named Chinese fonts.
fn make_font_resolver() -> usvg::FontResolver<'static> {
    usvg::FontResolver {
        select_font: Box::new(|font, fontdb| {
            let families: Vec<usvg::fontdb::Family<'_>> = font
                .families()
                .iter()
                .map(fontdb_family)
                .chain(
                    CJK_FALLBACK_FAMILIES
                        .iter()
                        .map(|name| usvg::fontdb::Family::Name(*name)),
                )
                .chain([usvg::fontdb::Family::Serif, usvg::fontdb::Family::SansSerif])
                .collect();

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch: fontdb_stretch(font.stretch()),
                style: fontdb_style(font.style()),
            };

            fontdb
                .query(&query)
                .or_else(|| fontdb.faces().next().map(|face| face.id))
        }),
        select_fallback: usvg::FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;

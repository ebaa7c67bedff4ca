use crate::{
    app::state::GuestName,
    config::model::EventDetails,
    foundation::core::{Canvas, Point, Rect, Rgba8},
};

/// Logical card size before scaling.
pub const CARD: Canvas = Canvas {
    width: 600,
    height: 900,
};

/// Horizontal anchor of every text line.
pub const TEXT_CENTER_X: f64 = 300.0;

const ACCENT: Rgba8 = Rgba8::rgb(0xe3, 0x1c, 0x77);
const YELLOW: Rgba8 = Rgba8::rgb(0xff, 0xe6, 0x0a);
const GOLD: Rgba8 = Rgba8::rgb(0xff, 0xd7, 0x00);
const BG_TOP: Rgba8 = Rgba8::rgb(0x1a, 0x1a, 0x1a);
const BG_BOTTOM: Rgba8 = Rgba8::rgb(0x00, 0x00, 0x00);

const SANS: &str = "Arial, sans-serif";
const KAITI: &str = "Arial, '楷体', serif";
const HEITI: &str = "Arial, '黑体', sans-serif";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    pub family: &'static str,
    pub size: f64,
    pub bold: bool,
}

impl Font {
    const fn regular(family: &'static str, size: f64) -> Self {
        Self {
            family,
            size,
            bold: false,
        }
    }

    const fn bold(family: &'static str, size: f64) -> Self {
        Self {
            family,
            size,
            bold: true,
        }
    }
}

/// One drawing primitive in logical card coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Rectangle filled with a top-to-bottom linear gradient.
    GradientRect {
        rect: Rect,
        top: Rgba8,
        bottom: Rgba8,
    },
    StrokeRect {
        rect: Rect,
        color: Rgba8,
        width: f64,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgba8,
        width: f64,
    },
    /// Text centered on `anchor.x` with its baseline at `anchor.y`.
    Text {
        text: String,
        anchor: Point,
        font: Font,
        color: Rgba8,
    },
    Dot {
        center: Point,
        radius: f64,
        color: Rgba8,
    },
}

fn text(text: impl Into<String>, y: f64, font: Font, color: Rgba8) -> DrawOp {
    DrawOp::Text {
        text: text.into(),
        anchor: Point::new(TEXT_CENTER_X, y),
        font,
        color,
    }
}

/// Build the card's display list, back to front.
pub fn invitation_layout(name: &GuestName, event: &EventDetails) -> Vec<DrawOp> {
    let faint = ACCENT.with_alpha(0.3);

    let mut ops = vec![
        DrawOp::GradientRect {
            rect: Rect::new(0.0, 0.0, f64::from(CARD.width), f64::from(CARD.height)),
            top: BG_TOP,
            bottom: BG_BOTTOM,
        },
        DrawOp::StrokeRect {
            rect: Rect::new(30.0, 30.0, 570.0, 870.0),
            color: ACCENT,
            width: 3.0,
        },
        DrawOp::StrokeRect {
            rect: Rect::new(50.0, 50.0, 550.0, 850.0),
            color: faint,
            width: 1.0,
        },
        text(&event.title, 140.0, Font::bold(SANS, 42.0), YELLOW),
        text(&event.subtitle, 180.0, Font::regular(SANS, 24.0), Rgba8::WHITE),
        text(name.display(), 240.0, Font::bold(SANS, 36.0), YELLOW),
        DrawOp::Line {
            from: Point::new(200.0, 260.0),
            to: Point::new(400.0, 260.0),
            color: ACCENT,
            width: 2.0,
        },
        text(&event.invite_line, 320.0, Font::regular(SANS, 24.0), Rgba8::WHITE),
        text(&event.event_name, 370.0, Font::bold(SANS, 48.0), YELLOW),
        text(&event.date, 420.0, Font::regular(KAITI, 22.0), Rgba8::WHITE),
        text(&event.lunar_date, 450.0, Font::regular(KAITI, 22.0), Rgba8::WHITE),
        text(&event.time, 480.0, Font::regular(KAITI, 22.0), Rgba8::WHITE),
        text(&event.venue, 720.0, Font::bold(HEITI, 26.0), GOLD),
        DrawOp::Line {
            from: Point::new(150.0, 760.0),
            to: Point::new(450.0, 760.0),
            color: faint,
            width: 1.0,
        },
        text(&event.closing, 800.0, Font::regular(SANS, 18.0), Rgba8::WHITE),
    ];

    ops.extend((0..5).map(|i| DrawOp::Dot {
        center: Point::new(250.0 + f64::from(i) * 25.0, 830.0),
        radius: 3.0,
        color: ACCENT,
    }));

    ops
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;

use crate::{
    foundation::core::{Canvas, Rgba8},
    render::layout::DrawOp,
};

/// Serialize a display list into a standalone SVG document of `canvas` logical size.
pub fn display_list_to_svg(ops: &[DrawOp], canvas: Canvas) -> String {
    let mut defs = String::new();
    let mut body = String::new();

    for (idx, op) in ops.iter().enumerate() {
        match op {
            DrawOp::GradientRect { rect, top, bottom } => {
                let id = format!("g{idx}");
                defs.push_str(&format!(
                    r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="0" y1="{}" x2="0" y2="{}"><stop offset="0"{}/><stop offset="1"{}/></linearGradient>"#,
                    rect.y0,
                    rect.y1,
                    stop_color(*top),
                    stop_color(*bottom),
                ));
                body.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="url(#{id})"/>"#,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                ));
            }
            DrawOp::StrokeRect { rect, color, width } => {
                body.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none"{} stroke-width="{width}"/>"#,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                    paint("stroke", *color),
                ));
            }
            DrawOp::Line {
                from,
                to,
                color,
                width,
            } => {
                body.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{} stroke-width="{width}"/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    paint("stroke", *color),
                ));
            }
            DrawOp::Text {
                text,
                anchor,
                font,
                color,
            } => {
                body.push_str(&format!(
                    r#"<text x="{}" y="{}" xml:space="preserve" text-anchor="middle" font-family="{}" font-size="{}" font-weight="{}"{}>{}</text>"#,
                    anchor.x,
                    anchor.y,
                    escape_xml(font.family),
                    font.size,
                    if font.bold { "bold" } else { "normal" },
                    paint("fill", *color),
                    escape_xml(text),
                ));
            }
            DrawOp::Dot {
                center,
                radius,
                color,
            } => {
                body.push_str(&format!(
                    r#"<circle cx="{}" cy="{}" r="{radius}"{}/>"#,
                    center.x,
                    center.y,
                    paint("fill", *color),
                ));
            }
        }
    }

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><defs>{defs}</defs>{body}</svg>"#,
        w = canvas.width,
        h = canvas.height,
    )
}

fn paint(attr: &str, color: Rgba8) -> String {
    if color.a == 255 {
        format!(r#" {attr}="{}""#, color.hex_rgb())
    } else {
        format!(
            r#" {attr}="{}" {attr}-opacity="{:.3}""#,
            color.hex_rgb(),
            color.opacity()
        )
    }
}

fn stop_color(color: Rgba8) -> String {
    paint("stop-color", color)
}

/// Escape markup and drop the characters XML 1.0 cannot carry, so any guest name parses.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            '\u{0}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}' => {}
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;

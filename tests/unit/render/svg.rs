use super::*;
use crate::{
    app::state::GuestName,
    config::model::EventDetails,
    render::layout::{CARD, invitation_layout},
};

#[test]
fn document_has_card_size_and_gradient() {
    let ops = invitation_layout(&GuestName::parse("张三"), &EventDetails::default());
    let svg = display_list_to_svg(&ops, CARD);

    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="600" height="900""#));
    assert!(svg.contains(r##"<stop offset="0" stop-color="#1a1a1a"/>"##));
    assert!(svg.contains(r##"fill="url(#g0)""##));
    assert!(svg.contains(">张三</text>"));
    assert_eq!(svg.matches("<circle").count(), 5);
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn translucent_paint_uses_opacity_attribute() {
    let ops = invitation_layout(&GuestName::parse("x"), &EventDetails::default());
    let svg = display_list_to_svg(&ops, CARD);
    assert!(svg.contains(r##"stroke="#e31c77" stroke-opacity="0.302""##));
}

#[test]
fn text_is_escaped() {
    let ops = invitation_layout(&GuestName::parse(r#"<Tom & "Jerry">"#), &EventDetails::default());
    let svg = display_list_to_svg(&ops, CARD);
    assert!(svg.contains(">&lt;Tom &amp; &quot;Jerry&quot;&gt;</text>"));
    assert!(svg.contains("font-family=\"Arial, &apos;楷体&apos;, serif\""));
}

#[test]
fn generated_document_parses() {
    let ops = invitation_layout(&GuestName::parse("A&B"), &EventDetails::default());
    let svg = display_list_to_svg(&ops, CARD);
    let tree = usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default()).unwrap();
    assert_eq!(tree.size().width(), 600.0);
    assert_eq!(tree.size().height(), 900.0);
}

#[test]
fn control_characters_are_dropped_from_text() {
    let ops = invitation_layout(&GuestName::parse("张\u{1}三\u{ffff}"), &EventDetails::default());
    let svg = display_list_to_svg(&ops, CARD);
    assert!(svg.contains(">张三</text>"));
    usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default()).unwrap();
}

#[test]
fn text_keeps_repeated_spaces() {
    let ops = invitation_layout(&GuestName::parse("张  三"), &EventDetails::default());
    let svg = display_list_to_svg(&ops, CARD);
    assert!(svg.contains(r#"xml:space="preserve""#));
    assert!(svg.contains(">张  三</text>"));
}

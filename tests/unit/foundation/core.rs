use super::*;

#[test]
fn millis_arithmetic_saturates() {
    assert_eq!(Millis(10).after(5), Millis(15));
    assert_eq!(Millis(u64::MAX).after(1), Millis(u64::MAX));
    assert_eq!(Millis(10).since(Millis(4)), 6);
    assert_eq!(Millis(4).since(Millis(10)), 0);
}

#[test]
fn canvas_scales_both_axes() {
    let c = Canvas {
        width: 600,
        height: 900,
    }
    .scaled(3);
    assert_eq!((c.width, c.height), (1800, 2700));
}

#[test]
fn hex_colors_parse_in_all_lengths() {
    assert_eq!(Rgba8::from_hex("#E31C77").unwrap(), Rgba8::rgb(227, 28, 119));
    assert_eq!(Rgba8::from_hex("#fff").unwrap(), Rgba8::WHITE);

    let yellow = Rgba8::from_hex("#ffe60aff").unwrap();
    assert_eq!(yellow, Rgba8::rgb(0xff, 0xe6, 0x0a));
    assert_eq!(yellow.hex_rgb(), "#ffe60a");
}

#[test]
fn hex_colors_reject_garbage() {
    assert!(Rgba8::from_hex("E31C77").is_err());
    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#zzzzzz").is_err());
}

#[test]
fn alpha_round_trips_through_opacity() {
    let c = Rgba8::rgb(227, 28, 119).with_alpha(0.3);
    assert_eq!(c.a, 77);
    assert!((c.opacity() - 0.3).abs() < 0.01);
}

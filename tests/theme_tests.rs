use gpui::{Hsla, Rgba};
use gpui_sortviz::theme::{hex_color, interpolate};
use gpui_sortviz::{BarState, SortTheme};

fn close(a: Hsla, b: Hsla) -> bool {
    let (a, b) = (Rgba::from(a), Rgba::from(b));
    (a.r - b.r).abs() < 0.01 && (a.g - b.g).abs() < 0.01 && (a.b - b.b).abs() < 0.01
}

#[test]
fn test_hex_parse_and_format() {
    let red = hex_color::parse_hex_str("#ff0000").unwrap();
    assert_eq!(hex_color::to_hex(red), "#ff0000");

    let teal = hex_color::parse_hex_str("1abc9c").unwrap();
    assert_eq!(hex_color::to_hex(teal), "#1abc9c");
}

#[test]
fn test_hex_parse_errors() {
    assert!(hex_color::parse_hex_str("#fff").is_err());
    assert!(hex_color::parse_hex_str("#gggggg").is_err());
    assert!(hex_color::parse_hex_str("").is_err());
}

#[test]
fn test_presets() {
    for name in SortTheme::PRESETS {
        assert_eq!(SortTheme::preset(name).name, name);
    }
    assert_eq!(SortTheme::preset("neon").name, "default");

    let contrast = SortTheme::high_contrast();
    assert_eq!(hex_color::to_hex(contrast.bar_comparing), "#ff0000");
    assert_eq!(hex_color::to_hex(contrast.background), "#000000");
}

#[test]
fn test_bar_color_per_state() {
    let theme = SortTheme::default();
    assert_eq!(hex_color::to_hex(theme.bar_color(BarState::Default)), "#3498db");
    assert_eq!(hex_color::to_hex(theme.bar_color(BarState::Comparing)), "#e74c3c");
    assert_eq!(hex_color::to_hex(theme.bar_color(BarState::Swapping)), "#f39c12");
    assert_eq!(hex_color::to_hex(theme.bar_color(BarState::Sorted)), "#2ecc71");
    assert_eq!(hex_color::to_hex(theme.bar_color(BarState::Pivot)), "#9b59b6");
    assert_eq!(hex_color::to_hex(theme.bar_color(BarState::Current)), "#1abc9c");
}

#[test]
fn test_set_bar_color() {
    let mut theme = SortTheme::default();
    theme.set_bar_color(BarState::Pivot, "#123456").unwrap();
    assert_eq!(hex_color::to_hex(theme.bar_pivot), "#123456");
    assert!(theme.set_bar_color(BarState::Pivot, "blue").is_err());
    assert_eq!(hex_color::to_hex(theme.bar_pivot), "#123456");
}

#[test]
fn test_theme_json_round_trip() {
    let theme = SortTheme::light();
    let json = serde_json::to_string(&theme).unwrap();
    assert!(json.contains("\"bar_default\":\"#0d6efd\""));

    let parsed = SortTheme::from_json_str(&json).unwrap();
    assert_eq!(parsed.name, "light");
    assert!(close(parsed.bar_sorted, theme.bar_sorted));
}

#[test]
fn test_theme_json_with_bad_color_fails() {
    let mut value = serde_json::to_value(SortTheme::default()).unwrap();
    value["bar_sorted"] = serde_json::json!("not-a-color");
    assert!(SortTheme::from_json_str(&value.to_string()).is_err());
}

#[test]
fn test_interpolate() {
    let black = hex_color::parse_hex_str("#000000").unwrap();
    let white = hex_color::parse_hex_str("#ffffff").unwrap();

    assert!(close(interpolate(black, white, 0.0), black));
    assert!(close(interpolate(black, white, 1.0), white));
    assert!(close(interpolate(black, white, 7.0), white));
    let grey = hex_color::parse_hex_str("#808080").unwrap();
    assert!(close(interpolate(black, white, 0.5), grey));
}

//! Integration tests for cascaded style lookups and value types.

use quire_css::{
    Cascaded, ColorValue, DEFAULT_FONT_SIZE_PX, Declared, DisplayType, MAX_PX, StyleError,
    StyledElement, parse_px,
};

// ============================================================================
// Lengths
// ============================================================================

#[test]
fn test_parse_px_units() {
    assert_eq!(parse_px("12px"), Some(12));
    assert_eq!(parse_px(" 12 "), Some(12));
    assert_eq!(parse_px("12.6px"), Some(13));
    assert_eq!(parse_px("0"), Some(0));
}

#[test]
fn test_parse_px_rejects_other_units_and_negatives() {
    assert_eq!(parse_px("1.5em"), None);
    assert_eq!(parse_px("50%"), None);
    assert_eq!(parse_px("-3px"), None);
    assert_eq!(parse_px("NaN"), None);
    assert_eq!(parse_px(""), None);
}

#[test]
fn test_parse_px_caps_at_fixed_point_range() {
    assert_eq!(parse_px("33554431px"), Some(MAX_PX));
    assert_eq!(parse_px("33554431.4px"), Some(MAX_PX));
    assert_eq!(parse_px("33554432px"), None);
    assert_eq!(parse_px("40000000px"), None);
    assert_eq!(parse_px("1e300"), None);
}

#[test]
fn test_oversized_font_size_is_malformed() {
    let styles: StyledElement = [("font-size", "40000000px")].into_iter().collect();
    assert!(styles.font_size().is_err());
}

// ============================================================================
// Colors
// ============================================================================

#[test]
fn test_color_from_hex_6() {
    assert_eq!(ColorValue::from_hex("#ff0000"), Some(ColorValue::rgb(255, 0, 0)));
}

#[test]
fn test_color_from_hex_3() {
    assert_eq!(ColorValue::from_hex("#f00"), Some(ColorValue::rgb(255, 0, 0)));
}

#[test]
fn test_color_from_hex_with_alpha() {
    assert_eq!(
        ColorValue::from_hex("#00e0e000"),
        Some(ColorValue::rgba(0, 0xE0, 0xE0, 0))
    );
    assert_eq!(
        ColorValue::from_hex("#f008"),
        Some(ColorValue::rgba(255, 0, 0, 0x88))
    );
}

#[test]
fn test_color_from_hex_invalid() {
    assert_eq!(ColorValue::from_hex("#ggg"), None);
    assert_eq!(ColorValue::from_hex("#12345"), None);
    assert_eq!(ColorValue::from_hex("#é12"), None);
}

#[test]
fn test_color_from_str_named_and_hex() {
    assert_eq!("Teal".parse::<ColorValue>(), Ok(ColorValue::rgb(0, 128, 128)));
    assert_eq!("#0000ff".parse::<ColorValue>(), Ok(ColorValue::BLUE));
    assert!("chartreuse-ish".parse::<ColorValue>().is_err());
}

#[test]
fn test_color_serde_uses_hex_strings() {
    let color: ColorValue = serde_json::from_str("\"#102030\"").unwrap();
    assert_eq!(color, ColorValue::rgb(0x10, 0x20, 0x30));
    assert_eq!(serde_json::to_string(&color).unwrap(), "\"#102030\"");
    assert!(serde_json::from_str::<ColorValue>("\"nope\"").is_err());
}

// ============================================================================
// Font size
// ============================================================================

#[test]
fn test_font_size_outcomes() {
    let set = StyledElement::new().with("font-size", "24px");
    assert_eq!(set.font_size(), Ok(Cascaded::Value(24)));

    let inherit = StyledElement::new().with("font-size", "inherit");
    assert_eq!(inherit.font_size(), Ok(Cascaded::Inherit));

    assert_eq!(StyledElement::new().font_size(), Ok(Cascaded::NoStyles));
}

#[test]
fn test_font_size_malformed_is_an_error() {
    let styles = StyledElement::new().with("font-size", "huge");
    assert_eq!(
        styles.font_size(),
        Err(StyleError::InvalidValue {
            property: "font-size".to_string(),
            value: "huge".to_string(),
        })
    );
}

#[test]
fn test_set_font_size_overrides_in_place() {
    let mut styles = StyledElement::new().with("font-size", "inherit");
    styles.set_font_size(DEFAULT_FONT_SIZE_PX * 2);
    assert_eq!(styles.font_size(), Ok(Cascaded::Value(32)));
}

// ============================================================================
// Colors on handles
// ============================================================================

#[test]
fn test_background_color_outcomes() {
    let default = ColorValue::rgba(0, 0xE0, 0xE0, 0);
    let red = StyledElement::new().with("background-color", "red");
    assert_eq!(
        red.background_color(default),
        Cascaded::Value(ColorValue::rgb(255, 0, 0))
    );

    let inherit = StyledElement::new().with("background-color", "inherit");
    assert_eq!(inherit.background_color(default), Cascaded::Inherit);

    assert_eq!(StyledElement::new().background_color(default), Cascaded::NoStyles);

    let bogus = StyledElement::new().with("background-color", "not-a-color");
    assert_eq!(bogus.background_color(default), Cascaded::Value(default));
}

#[test]
fn test_color_falls_back_to_default() {
    assert_eq!(StyledElement::new().color(ColorValue::BLUE), ColorValue::BLUE);
    let styled = StyledElement::new().with("color", "#123456");
    assert_eq!(styled.color(ColorValue::BLACK), ColorValue::rgb(0x12, 0x34, 0x56));
    let inherit = StyledElement::new().with("color", "inherit");
    assert_eq!(inherit.color(ColorValue::BLACK), ColorValue::BLACK);
}

// ============================================================================
// Display and lengths on handles
// ============================================================================

#[test]
fn test_display_type() {
    assert_eq!(StyledElement::new().display_type(), None);
    assert_eq!(
        StyledElement::new().with("display", "inline").display_type(),
        Some(DisplayType::Inline)
    );
    assert_eq!(StyledElement::new().with("display", "").display_type(), None);
    assert_eq!(
        StyledElement::new().with("display", "grid").display_type(),
        Some(DisplayType::Other("grid".to_string()))
    );
}

#[test]
fn test_pixel_length() {
    let styles = StyledElement::new()
        .with("height", "40px")
        .with("width", "auto")
        .with("max-height", "3em");
    assert_eq!(styles.pixel_length("height"), Some(40));
    assert_eq!(styles.pixel_length("width"), None);
    assert_eq!(styles.pixel_length("max-height"), None);
    assert_eq!(styles.pixel_length_or("min-height", -1), -1);
}

#[test]
fn test_from_iterator_and_declared() {
    let styles: StyledElement = [("Font-Size", "10px"), ("color", "inherit")]
        .into_iter()
        .collect();
    assert_eq!(styles.font_size(), Ok(Cascaded::Value(10)));
    assert_eq!(styles.declared("color"), Some(&Declared::Inherit));
    assert!(!styles.is_empty());
    assert!(StyledElement::new().is_empty());
}

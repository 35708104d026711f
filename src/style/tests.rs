use crate::style::*;
use crate::style::palette::{self, StyleArg, StyleName};

#[test]
fn new_style_defaults() {
    let style = Style::new("#9333EA");

    assert_eq!(style.color(), "#9333EA");
    assert_eq!(style.prefix(), "");
    assert_eq!(style.font_weight(), "normal");
    assert_eq!(style.font_size(), 12);
}

#[test]
fn try_new_with_all_arguments() {
    let style = Style::try_new("#9333EA", "🎨", Some("bold"), Some(14)).unwrap();

    assert_eq!(style.prefix(), "🎨");
    assert_eq!(style.font_weight(), "bold");
    assert_eq!(style.font_size(), 14);
}

#[test]
fn try_new_rejects_invalid_color() {
    assert_eq!(
        Style::try_new("", "", None, None),
        Err(StyleError::InvalidColor("".into())),
    );
    assert_eq!(
        Style::try_new("6B7280", "", None, None),
        Err(StyleError::InvalidColor("6B7280".into())),
    );
}

#[test]
fn try_new_empty_font_weight_falls_back_to_normal() {
    let style = Style::try_new("#6B7280", "", Some(""), None).unwrap();
    assert_eq!(style.font_weight(), "normal");

    let style = Style::try_new("#6B7280", "", Some("  "), None).unwrap();
    assert_eq!(style.font_weight(), "normal");

    let style = Style::try_new("#6B7280", "", Some("bold"), None).unwrap();
    assert_eq!(style.font_weight(), "bold");
}

#[test]
fn try_new_rejects_invalid_font_size() {
    assert_eq!(
        Style::try_new("#6B7280", "", None, Some(-1)),
        Err(StyleError::InvalidFontSize(-1)),
    );

    assert!(Style::try_new("#6B7280", "", None, Some(0)).is_ok());
}

#[test]
#[should_panic(expected = "Style requires a valid hex color")]
fn new_panics_on_invalid_color() {
    Style::new("red");
}

#[test]
fn from_str_parses_color() {
    let style: Style = "#10B981".parse().unwrap();
    assert_eq!(style.color(), "#10B981");

    assert!("10B981".parse::<Style>().is_err());
}

#[test]
fn error_message_is_displayed() {
    let err = Style::try_new("blue", "", None, None).unwrap_err();

    assert_eq!(err.to_string(), "Style requires a valid hex color (e.g. \"#6B7280\"), got \"blue\"");
}

#[test]
fn color_secondary_is_derived() {
    let style = Style::new("#6B7280");

    assert_eq!(style.color_secondary(), "#808899");
    assert_eq!(style.color_secondary(), style.color_secondary());
    assert_eq!(style.color(), "#6B7280");
}

#[test]
fn with_methods_keep_receiver_unchanged() {
    let style = Style::new("#6B7280");
    let bold = style.with_font_weight("bold").with_prefix("*").with_font_size(16);

    assert_eq!(style.font_weight(), "normal");
    assert_eq!(style.prefix(), "");
    assert_eq!(bold.font_weight(), "bold");
    assert_eq!(bold.prefix(), "*");
    assert_eq!(bold.font_size(), 16);

    assert_eq!(style.with_font_weight("").font_weight(), "normal");
}

#[test]
fn palette_built_in_styles() {
    assert_eq!(palette::DEFAULT.prefix(), "");
    assert_eq!(palette::HEADSUP.prefix(), "⚡");
    assert_eq!(palette::ERROR.prefix(), "❌");
    assert_eq!(palette::SUCCESS.prefix(), "");

    assert_eq!(palette::ERROR.color(), "#EF4444");
}

#[test]
fn get_style_is_case_insensitive() {
    assert_eq!(palette::get_style("HEADSUP"), &*palette::HEADSUP);
    assert_eq!(palette::get_style("Error"), &*palette::ERROR);
    assert_eq!(palette::get_style("success"), &*palette::SUCCESS);
}

#[test]
fn get_style_falls_back_to_default() {
    assert_eq!(palette::get_style(""), &*palette::DEFAULT);
    assert_eq!(palette::get_style("standard"), &*palette::DEFAULT);
}

#[test]
fn resolve_named_styles() {
    assert!(std::ptr::eq(palette::resolve(&StyleArg::from("headsup")), &*palette::HEADSUP));
    assert!(std::ptr::eq(palette::resolve(&StyleArg::default()), &*palette::DEFAULT));
    assert!(std::ptr::eq(
        palette::resolve(&StyleArg::Named(StyleName::Unknown("nope".into()))),
        &*palette::DEFAULT,
    ));
}

#[test]
fn resolve_preserves_custom_style_identity() {
    let arg = StyleArg::from(Style::new("#9333EA").with_prefix("🎨"));

    let StyleArg::Custom(inner) = &arg else {
        panic!("Expected a custom style argument");
    };

    assert!(std::ptr::eq(palette::resolve(&arg), inner));
}

#[test]
fn style_arg_default_detection() {
    assert!(StyleArg::from("default").is_default());
    assert!(StyleArg::from("DEFAULT").is_default());

    assert!(!StyleArg::from("success").is_default());
    assert!(!StyleArg::from(palette::DEFAULT.clone()).is_default());
}

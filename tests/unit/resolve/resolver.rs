use super::*;
use crate::options::tokens::{
    Attachment, Direction, HorizontalPosition, HorizontalScrollDirection, OverlayImage,
    OverlayOpacity, Repeat, VerticalPosition, VerticalScrollDirection,
};
use crate::resolve::tables::OptionTablesDef;

fn resolver() -> ConfigResolver {
    ConfigResolver::new(
        LocaleNormalizer::builtin("en").unwrap(),
        OptionTables::builtin(),
    )
}

fn big_image() -> ImageMeta {
    ImageMeta {
        attachment_ref: "12".to_owned(),
        url: "https://example.test/hero.jpg".to_owned(),
        width: 2560,
        height: 1600,
    }
}

fn small_image() -> ImageMeta {
    ImageMeta {
        width: 1280,
        height: 800,
        ..big_image()
    }
}

fn raw(pairs: &[(&str, &str)]) -> RawOptions {
    pairs.iter().copied().collect()
}

fn expected_defaults() -> (StaticOptions, ParallaxOptions, OverlayOptions) {
    (
        StaticOptions {
            repeat: Repeat::NoRepeat,
            position_x: HorizontalPosition::Left,
            position_y: VerticalPosition::Top,
            attachment: Attachment::Fixed,
        },
        ParallaxOptions {
            enabled: false,
            direction: Direction::Vertical,
            vertical_scroll_direction: VerticalScrollDirection::ToTop,
            horizontal_scroll_direction: HorizontalScrollDirection::ToLeft,
            horizontal_alignment: HorizontalPosition::Center,
            vertical_alignment: VerticalPosition::Center,
        },
        OverlayOptions {
            image: OverlayImage::None,
            opacity: OverlayOpacity::Tenth3,
        },
    )
}

#[test]
fn empty_options_resolve_to_documented_defaults() {
    let (s, p, o) = expected_defaults();
    for image in [None, Some(big_image())] {
        let cfg = resolver().resolve(&RawOptions::new(), image.as_ref());
        assert_eq!(cfg.background_color(), None);
        assert_eq!(cfg.static_options(), &s);
        assert_eq!(cfg.parallax(), &p);
        assert_eq!(cfg.overlay(), &o);
    }
}

#[test]
fn canonical_values_are_kept() {
    let cfg = resolver().resolve(
        &raw(&[
            ("background_color", "#336699"),
            ("background_repeat", "repeat-y"),
            ("position_x", "right"),
            ("position_y", "bottom"),
            ("background_attachment", "scroll"),
            ("parallax_enabled", "1"),
            ("direction", "horizontal"),
            ("vertical_scroll_direction", "bottom"),
            ("horizontal_scroll_direction", "right"),
            ("horizontal_alignment", "left"),
            ("vertical_alignment", "bottom"),
            ("overlay_image", "05"),
            ("overlay_opacity", "0.8"),
        ]),
        Some(&big_image()),
    );

    assert_eq!(cfg.background_color().map(|c| c.as_str()), Some("336699"));
    assert_eq!(cfg.static_options().repeat, Repeat::RepeatY);
    assert_eq!(cfg.static_options().position_x, HorizontalPosition::Right);
    assert_eq!(cfg.static_options().position_y, VerticalPosition::Bottom);
    assert_eq!(cfg.static_options().attachment, Attachment::Scroll);
    let p = cfg.parallax();
    assert!(p.enabled);
    assert_eq!(p.direction, Direction::Horizontal);
    assert_eq!(p.vertical_scroll_direction, VerticalScrollDirection::ToBottom);
    assert_eq!(p.horizontal_scroll_direction, HorizontalScrollDirection::ToRight);
    assert_eq!(p.horizontal_alignment, HorizontalPosition::Left);
    assert_eq!(p.vertical_alignment, VerticalPosition::Bottom);
    assert_eq!(cfg.overlay().image, OverlayImage::Pattern05);
    assert_eq!(cfg.overlay().opacity, OverlayOpacity::Tenth8);
    assert!(cfg.is_parallax());
}

#[test]
fn display_strings_of_any_locale_are_normalized() {
    let cfg = resolver().resolve(
        &raw(&[
            ("background_repeat", "repeat horizontally"),
            ("position_x", "mittig"),
            ("vertical_scroll_direction", "to bottom"),
            ("horizontal_scroll_direction", "nach rechts"),
            ("overlay_image", "03.png"),
            ("overlay_opacity", "0,6"),
        ]),
        None,
    );
    assert_eq!(cfg.static_options().repeat, Repeat::RepeatX);
    assert_eq!(cfg.static_options().position_x, HorizontalPosition::Center);
    assert_eq!(
        cfg.parallax().vertical_scroll_direction,
        VerticalScrollDirection::ToBottom
    );
    assert_eq!(
        cfg.parallax().horizontal_scroll_direction,
        HorizontalScrollDirection::ToRight
    );
    assert_eq!(cfg.overlay().image, OverlayImage::Pattern03);
    assert_eq!(cfg.overlay().opacity, OverlayOpacity::Tenth6);
}

#[test]
fn garbage_falls_back_to_defaults() {
    let (s, p, o) = expected_defaults();
    let junk = "\u{1F4A9} <script>";
    let pairs: Vec<(&str, &str)> = Field::ALL.iter().map(|f| (f.key(), junk)).collect();
    let cfg = resolver().resolve(&raw(&pairs), Some(&big_image()));
    assert_eq!(cfg.static_options(), &s);
    assert_eq!(cfg.parallax(), &p);
    assert_eq!(cfg.overlay(), &o);
}

#[test]
fn ineligible_image_forces_parallax_off() {
    let options = raw(&[("parallax_enabled", "1")]);
    let r = resolver();
    assert!(!r.resolve(&options, Some(&small_image())).parallax().enabled);
    assert!(!r.resolve(&options, None).parallax().enabled);
    assert!(r.resolve(&options, Some(&big_image())).parallax().enabled);
}

#[test]
fn stored_off_switch_keeps_parallax_off() {
    let cfg = resolver().resolve(&raw(&[("parallax_enabled", "")]), Some(&big_image()));
    assert!(!cfg.parallax().enabled);
    assert!(!cfg.is_parallax());
}

#[test]
fn missing_image_still_resolves_every_field() {
    let cfg = resolver().resolve(
        &raw(&[
            ("background_color", "fff"),
            ("background_attachment", "scroll"),
            ("direction", "horizontal"),
            ("overlay_image", "02"),
        ]),
        None,
    );
    assert_eq!(cfg.image(), None);
    assert_eq!(cfg.image_size(), kurbo::Size::ZERO);
    assert_eq!(cfg.background_color().map(|c| c.css()), Some("#fff".to_owned()));
    assert_eq!(cfg.static_options().attachment, Attachment::Scroll);
    assert_eq!(cfg.parallax().direction, Direction::Horizontal);
    assert_eq!(cfg.overlay().image, OverlayImage::Pattern02);
}

#[test]
fn whitelist_rejections_use_the_default() {
    let tables = OptionTables::from_def(&OptionTablesDef {
        allowed: [(
            "background_repeat".to_owned(),
            vec!["no-repeat".to_owned(), "repeat".to_owned()],
        )]
        .into_iter()
        .collect(),
        defaults: Default::default(),
    })
    .unwrap();
    let r = ConfigResolver::new(LocaleNormalizer::builtin("en").unwrap(), tables);
    let cfg = r.resolve(&raw(&[("background_repeat", "repeat-x")]), None);
    assert_eq!(cfg.static_options().repeat, Repeat::NoRepeat);
    let cfg = r.resolve(&raw(&[("background_repeat", "repeat")]), None);
    assert_eq!(cfg.static_options().repeat, Repeat::Repeat);
}

#[test]
fn custom_defaults_apply_to_absent_values() {
    let tables = OptionTables::from_reader(
        r#"{ "defaults": { "direction": "horizontal", "overlay_opacity": "0.9" } }"#.as_bytes(),
    )
    .unwrap();
    let cfg = ConfigResolver::new(LocaleNormalizer::canonical_only("en"), tables)
        .resolve(&RawOptions::new(), None);
    assert_eq!(cfg.parallax().direction, Direction::Horizontal);
    assert_eq!(cfg.overlay().opacity, OverlayOpacity::Tenth9);
}

#[test]
fn default_resolver_only_understands_canonical_tokens() {
    let cfg = ConfigResolver::default().resolve(
        &raw(&[("background_repeat", "repeat horizontally")]),
        None,
    );
    assert_eq!(cfg.static_options().repeat, Repeat::NoRepeat);
}

#[test]
fn resolve_is_deterministic() {
    let options = raw(&[("position_y", "unten"), ("parallax_enabled", "on")]);
    let r = resolver();
    let a = r.resolve(&options, Some(&big_image()));
    let b = r.resolve(&options, Some(&big_image()));
    assert_eq!(a, b);
}

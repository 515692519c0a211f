use super::*;
use crate::locale::normalizer::LocaleNormalizer;
use crate::media::library::InMemoryMediaLibrary;
use crate::options::config::ImageMeta;
use crate::resolve::tables::OptionTables;

fn library() -> InMemoryMediaLibrary {
    InMemoryMediaLibrary::new()
        .with_image(ImageMeta {
            attachment_ref: "31".to_owned(),
            url: "https://cdn.test/big.jpg".to_owned(),
            width: 1920,
            height: 1200,
        })
        .with_image(ImageMeta {
            attachment_ref: "32".to_owned(),
            url: "https://cdn.test/small.jpg".to_owned(),
            width: 1919,
            height: 1200,
        })
}

fn resolver() -> ConfigResolver {
    let normalizer = LocaleNormalizer::builtin("de").unwrap();
    ConfigResolver::new(normalizer, OptionTables::builtin())
}

fn opts() -> PageOpts {
    PageOpts {
        overlay_path: "/overlays/".to_owned(),
    }
}

#[test]
fn eligible_image_enables_parallax() {
    let raw: RawOptions = [
        ("attachment_id", "31"),
        ("parallax_enabled", "1"),
        ("vertical_scroll_direction", "nach unten"),
    ]
    .into_iter()
    .collect();
    let page = prepare_page(&resolver(), &library(), &raw, &opts());

    assert_eq!(page.eligibility, Eligibility::Eligible);
    assert!(page.config.is_parallax());
    assert!(page.payload.parallax_enabled);
    assert_eq!(page.payload.vertical_scroll_direction, "toBottom");
    assert_eq!(page.payload.image_src, "https://cdn.test/big.jpg");
    assert_eq!(page.payload.overlay_path, "/overlays/");
}

#[test]
fn small_image_stays_static() {
    let raw: RawOptions = [("attachment_id", "32"), ("parallax_enabled", "1")]
        .into_iter()
        .collect();
    let page = prepare_page(&resolver(), &library(), &raw, &opts());

    assert_eq!(
        page.eligibility,
        Eligibility::TooSmall {
            width: 1919,
            height: 1200
        }
    );
    assert!(!page.payload.parallax_enabled);
    assert_eq!(page.payload.image_width, 1919);
}

#[test]
fn unknown_reference_renders_without_image() {
    let raw: RawOptions = [("attachment_id", "99"), ("parallax_enabled", "1")]
        .into_iter()
        .collect();
    let page = prepare_page(&resolver(), &library(), &raw, &opts());

    assert_eq!(page.eligibility, Eligibility::NoImage);
    assert!(page.config.image().is_none());
    assert_eq!(page.payload.image_src, "");
    assert!(!page.payload.parallax_enabled);
}

#[test]
fn empty_options_give_defaults() {
    let page = prepare_page(&resolver(), &library(), &RawOptions::new(), &PageOpts::default());
    assert_eq!(page.payload.background_repeat, "no-repeat");
    assert_eq!(page.payload.position_x, "left");
    assert_eq!(page.payload.overlay_path, "");
}

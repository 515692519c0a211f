use super::*;

fn assert_aligned<T: Token>() {
    assert_eq!(T::ALL.len(), T::TOKENS.len());
    for (value, token) in T::ALL.iter().zip(T::TOKENS) {
        assert_eq!(value.as_str(), *token);
        assert_eq!(T::from_canonical(token), Some(*value));
    }
}

#[test]
fn token_tables_are_index_aligned() {
    assert_aligned::<Repeat>();
    assert_aligned::<HorizontalPosition>();
    assert_aligned::<VerticalPosition>();
    assert_aligned::<Attachment>();
    assert_aligned::<Direction>();
    assert_aligned::<VerticalScrollDirection>();
    assert_aligned::<HorizontalScrollDirection>();
    assert_aligned::<OverlayImage>();
    assert_aligned::<OverlayOpacity>();
}

#[test]
fn from_canonical_rejects_display_strings() {
    assert_eq!(Repeat::from_canonical("repeat horizontally"), None);
    assert_eq!(VerticalScrollDirection::from_canonical("to top"), None);
    assert_eq!(Repeat::from_canonical("repeat-x"), Some(Repeat::RepeatX));
}

#[test]
fn serde_uses_canonical_tokens() {
    let v = serde_json::to_value(Repeat::RepeatY).unwrap();
    assert_eq!(v, serde_json::json!("repeat-y"));
    let back: OverlayOpacity = serde_json::from_value(serde_json::json!("0.7")).unwrap();
    assert_eq!(back, OverlayOpacity::Tenth7);
}

#[test]
fn overlay_file_names() {
    assert_eq!(OverlayImage::None.file_name(), None);
    assert_eq!(OverlayImage::Pattern04.file_name().as_deref(), Some("04.png"));
    assert_eq!(OverlayImage::from_file_name("04.png"), Some(OverlayImage::Pattern04));
    assert_eq!(OverlayImage::from_file_name("07"), Some(OverlayImage::Pattern07));
    assert_eq!(OverlayImage::from_file_name("10.png"), None);
}

#[test]
fn scroll_directions_map_to_axis_independent_form() {
    assert_eq!(
        VerticalScrollDirection::ToTop.scroll_direction(),
        ScrollDirection::ToStart
    );
    assert_eq!(
        HorizontalScrollDirection::ToRight.scroll_direction(),
        ScrollDirection::ToEnd
    );
}

#[test]
fn opacity_values_match_tokens() {
    for o in OverlayOpacity::ALL {
        let parsed: f64 = o.as_str().parse().unwrap();
        assert!((parsed - o.value()).abs() < 1e-12);
    }
}

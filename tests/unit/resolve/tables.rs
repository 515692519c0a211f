use super::*;
use serde_json::json;

fn def(v: serde_json::Value) -> OptionTablesDef {
    serde_json::from_value(v).unwrap()
}

#[test]
fn builtin_tables_are_valid() {
    let t = OptionTables::builtin();
    t.validate().unwrap();
    for field in Field::ALL {
        assert_eq!(t.allowed(field), field.tokens());
    }
}

#[test]
fn builtin_defaults_are_explicit_not_first_entries() {
    let t = OptionTables::builtin();
    assert_eq!(t.default_token(Field::BackgroundRepeat), "no-repeat");
    assert_eq!(t.default_token(Field::PositionX), "left");
    assert_eq!(t.default_token(Field::PositionY), "top");
    assert_eq!(t.default_token(Field::BackgroundAttachment), "fixed");
    assert_eq!(t.default_token(Field::Direction), "vertical");
    assert_eq!(t.default_token(Field::VerticalScrollDirection), "top");
    assert_eq!(t.default_token(Field::HorizontalScrollDirection), "left");
    assert_eq!(t.default_token(Field::HorizontalAlignment), "center");
    assert_eq!(t.default_token(Field::VerticalAlignment), "center");
    assert_eq!(t.default_token(Field::OverlayImage), "none");
    assert_eq!(t.default_token(Field::OverlayOpacity), "0.3");
}

#[test]
fn overrides_restrict_whitelists() {
    let t = OptionTables::from_def(&def(json!({
        "allowed": { "background_repeat": ["no-repeat", "repeat", "repeat"] },
        "defaults": { "overlay_opacity": "0.5" }
    })))
    .unwrap();
    assert_eq!(t.allowed(Field::BackgroundRepeat), &["no-repeat", "repeat"]);
    assert!(!t.is_allowed(Field::BackgroundRepeat, "repeat-x"));
    assert_eq!(t.default_token(Field::OverlayOpacity), "0.5");
}

#[test]
fn default_outside_whitelist_fails_fast() {
    let err = OptionTables::from_def(&def(json!({
        "allowed": { "position_x": ["center", "right"] }
    })))
    .unwrap_err();
    assert!(err.to_string().contains("default \"left\" is not allowed"));
}

#[test]
fn empty_whitelist_fails_fast() {
    let err = OptionTables::from_def(&def(json!({ "allowed": { "direction": [] } }))).unwrap_err();
    assert!(err.to_string().contains("direction: allowed values must be non-empty"));
}

#[test]
fn unknown_names_are_all_reported() {
    let err = OptionTables::from_def(&def(json!({
        "allowed": { "spin": ["fast"], "direction": ["diagonal", "vertical"] },
        "defaults": { "position_y": "middle" }
    })))
    .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("unknown field \"spin\""));
    assert!(msg.contains("unknown token \"diagonal\""));
    assert!(msg.contains("defaults.position_y: unknown token \"middle\""));
}

#[test]
fn reader_parses_json() {
    let t = OptionTables::from_reader(r#"{ "defaults": { "direction": "horizontal" } }"#.as_bytes())
        .unwrap();
    assert_eq!(t.default_token(Field::Direction), "horizontal");
}

use super::*;

fn meta(width: u32, height: u32) -> ImageMeta {
    ImageMeta {
        attachment_ref: "7".to_owned(),
        url: "https://example.test/bg.jpg".to_owned(),
        width,
        height,
    }
}

#[test]
fn boundaries_are_exact() {
    assert!(!is_parallax_eligible(Some(&meta(1919, 1200))));
    assert!(!is_parallax_eligible(Some(&meta(1920, 1199))));
    assert!(is_parallax_eligible(Some(&meta(1920, 1200))));
    assert!(is_parallax_eligible(Some(&meta(4000, 3000))));
}

#[test]
fn missing_image_is_never_eligible() {
    assert!(!is_parallax_eligible(None));
    assert_eq!(eligibility(None), Eligibility::NoImage);
}

#[test]
fn too_small_reports_dimensions() {
    assert_eq!(
        eligibility(Some(&meta(800, 600))),
        Eligibility::TooSmall {
            width: 800,
            height: 600
        }
    );
    assert_eq!(eligibility_for_size(0, 0), Eligibility::TooSmall { width: 0, height: 0 });
}

#[test]
fn eligibility_serializes_with_status_tag() {
    let v = serde_json::to_value(eligibility_for_size(10, 20)).unwrap();
    assert_eq!(
        v,
        serde_json::json!({ "status": "too_small", "width": 10, "height": 20 })
    );
}

use super::*;

#[test]
fn sanitize_strips_hash_and_lowercases() {
    let c = HexColor::sanitize("#FFaa00").unwrap();
    assert_eq!(c.as_str(), "ffaa00");
    assert_eq!(c.css(), "#ffaa00");
}

#[test]
fn sanitize_accepts_short_form() {
    let c = HexColor::sanitize("#0F8").unwrap();
    assert_eq!(c.to_rgb8(), [0x00, 0xff, 0x88]);
}

#[test]
fn sanitize_rejects_wrong_lengths_and_garbage() {
    assert_eq!(HexColor::sanitize(""), None);
    assert_eq!(HexColor::sanitize("zz"), None);
    assert_eq!(HexColor::sanitize("#12345"), None);
    assert_eq!(HexColor::sanitize("#1234567"), None);
}

#[test]
fn rgb8_of_long_form() {
    let c = HexColor::sanitize("1a2B3c").unwrap();
    assert_eq!(c.to_rgb8(), [0x1a, 0x2b, 0x3c]);
}

#[test]
fn deserialize_accepts_only_sanitized_digits() {
    let c: HexColor = serde_json::from_str("\"0f8\"").unwrap();
    assert_eq!(c.to_rgb8(), [0x00, 0xff, 0x88]);
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"0f8\"");

    for bad in ["\"a\"", "\"#0f8\"", "\"0F8\"", "\"12345\"", "\"\""] {
        assert!(serde_json::from_str::<HexColor>(bad).is_err(), "{bad}");
    }
}

use super::*;

#[test]
fn format_yen_small_amount_has_no_separator() {
    assert_eq!(format_yen(0), "¥0");
    assert_eq!(format_yen(999), "¥999");
}

#[test]
fn format_yen_groups_thousands() {
    assert_eq!(format_yen(1_000), "¥1,000");
    assert_eq!(format_yen(12_800), "¥12,800");
    assert_eq!(format_yen(1_234_567), "¥1,234,567");
}

#[test]
fn optional_fields_are_omitted_when_absent() {
    let item = BrandItem {
        id: "m1".to_string(),
        title: "Bag".to_string(),
        href: "https://jp.mercari.com/item/m1".to_string(),
        price: None,
        price_text: None,
        image: None,
    };
    let json = serde_json::to_string(&item).unwrap();
    assert_eq!(
        json,
        r#"{"id":"m1","title":"Bag","href":"https://jp.mercari.com/item/m1"}"#
    );
}

#[test]
fn image_alt_is_omitted_when_absent() {
    let image = BrandImage {
        src: "https://static.example/t.jpg".to_string(),
        alt: None,
    };
    let json = serde_json::to_string(&image).unwrap();
    assert_eq!(json, r#"{"src":"https://static.example/t.jpg"}"#);
}

use std::str::FromStr;

use super::*;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

const ML_URL: &str = "https://produto.mercadolivre.com.br/MLB-123-teclado-_JM";
const AMAZON_URL: &str = "https://www.amazon.com.br/dp/B0BZ4QK6XK";

// -----------------------------------------------------------------------
// Fully populated input
// -----------------------------------------------------------------------

#[test]
fn mercadolivre_item_maps_onto_record() {
    let raw = RawProductFields {
        name: Some("Teclado Mecânico".to_owned()),
        price: Some(dec("199.9")),
        stock: Some(5),
        source_product_id: Some("MLB123".to_owned()),
        ..RawProductFields::default()
    };

    let record = normalize_product(raw, Platform::MercadoLivre, ML_URL, Category::Peripherals);

    assert_eq!(record.name, "Teclado Mecânico");
    assert_eq!(record.price, dec("199.9"));
    assert_eq!(record.source_price, dec("199.9"));
    assert_eq!(record.stock_quantity, 5);
    assert_eq!(record.category_id, Category::Peripherals);
    assert_eq!(record.source_platform, Platform::MercadoLivre);
    assert_eq!(record.source_url, ML_URL);
    assert_eq!(record.source_product_id.as_deref(), Some("MLB123"));
    assert!(record.active);
}

#[test]
fn present_fields_are_trimmed_and_kept() {
    let raw = RawProductFields {
        name: Some("  Mouse  ".to_owned()),
        description: Some(" Sem fio ".to_owned()),
        primary_image: Some(" https://img/a.jpg ".to_owned()),
        brand: Some(" Logitech ".to_owned()),
        model: Some("G305".to_owned()),
        ..RawProductFields::default()
    };

    let record = normalize_product(raw, Platform::Generic, "https://x.com/p", Category::Peripherals);

    assert_eq!(record.name, "Mouse");
    assert_eq!(record.description, "Sem fio");
    assert_eq!(record.primary_image, "https://img/a.jpg");
    assert_eq!(record.brand.as_deref(), Some("Logitech"));
    assert_eq!(record.model.as_deref(), Some("G305"));
}

// -----------------------------------------------------------------------
// Defaults
// -----------------------------------------------------------------------

#[test]
fn empty_input_gets_platform_defaults() {
    let record = normalize_product(
        RawProductFields::default(),
        Platform::Amazon,
        AMAZON_URL,
        Category::Peripherals,
    );

    assert_eq!(record.name, Platform::Amazon.default_name());
    assert_eq!(record.description, DEFAULT_DESCRIPTION);
    assert_eq!(record.price, Decimal::ZERO);
    assert_eq!(record.source_price, Decimal::ZERO);
    assert_eq!(record.stock_quantity, 0);
    assert_eq!(record.brand, None);
    assert_eq!(record.model, None);
}

#[test]
fn no_images_yields_placeholder_and_empty_gallery_json() {
    let record = normalize_product(
        RawProductFields {
            name: Some("Headset".to_owned()),
            ..RawProductFields::default()
        },
        Platform::Amazon,
        AMAZON_URL,
        Category::Peripherals,
    );

    assert_eq!(record.primary_image, Platform::Amazon.placeholder_image());
    assert!(record.image_gallery.is_empty());
    assert_eq!(record.gallery_json(), "[]");
}

#[test]
fn blank_strings_count_as_missing() {
    let raw = RawProductFields {
        name: Some("   ".to_owned()),
        description: Some(String::new()),
        brand: Some(" ".to_owned()),
        source_product_id: Some(String::new()),
        ..RawProductFields::default()
    };

    let record = normalize_product(raw, Platform::Generic, "https://x.com/p", Category::Peripherals);

    assert_eq!(record.name, Platform::Generic.default_name());
    assert_eq!(record.description, DEFAULT_DESCRIPTION);
    assert_eq!(record.brand, None);
    assert_eq!(record.source_product_id, None);
}

#[test]
fn first_gallery_image_backs_up_missing_primary() {
    let raw = RawProductFields {
        gallery: vec!["https://img/1.jpg".to_owned(), "https://img/2.jpg".to_owned()],
        ..RawProductFields::default()
    };

    let record = normalize_product(raw, Platform::MercadoLivre, ML_URL, Category::Peripherals);

    assert_eq!(record.primary_image, "https://img/1.jpg");
}

// -----------------------------------------------------------------------
// Clamping and gallery cleanup
// -----------------------------------------------------------------------

#[test]
fn negative_price_and_stock_clamp_to_zero() {
    let raw = RawProductFields {
        price: Some(dec("-10.50")),
        stock: Some(-3),
        ..RawProductFields::default()
    };

    let record = normalize_product(raw, Platform::MercadoLivre, ML_URL, Category::Peripherals);

    assert_eq!(record.price, Decimal::ZERO);
    assert_eq!(record.stock_quantity, 0);
}

#[test]
fn oversized_stock_saturates() {
    let raw = RawProductFields {
        stock: Some(i64::MAX),
        ..RawProductFields::default()
    };

    let record = normalize_product(raw, Platform::MercadoLivre, ML_URL, Category::Peripherals);

    assert_eq!(record.stock_quantity, u32::MAX);
}

#[test]
fn gallery_is_trimmed_and_deduplicated_in_order() {
    let raw = RawProductFields {
        gallery: vec![
            "https://img/b.jpg".to_owned(),
            " ".to_owned(),
            "https://img/a.jpg".to_owned(),
            " https://img/b.jpg".to_owned(),
        ],
        ..RawProductFields::default()
    };

    let record = normalize_product(raw, Platform::Amazon, AMAZON_URL, Category::Peripherals);

    assert_eq!(
        record.image_gallery,
        vec!["https://img/b.jpg".to_owned(), "https://img/a.jpg".to_owned()]
    );
    assert_eq!(
        record.gallery_json(),
        r#"["https://img/b.jpg","https://img/a.jpg"]"#
    );
}

#[test]
fn normalization_is_deterministic() {
    let raw = RawProductFields {
        name: Some("Smart TV 50".to_owned()),
        price: Some(dec("2499.00")),
        gallery: vec!["https://img/tv.jpg".to_owned()],
        ..RawProductFields::default()
    };

    let a = normalize_product(raw.clone(), Platform::Amazon, AMAZON_URL, Category::TvAudio);
    let b = normalize_product(raw, Platform::Amazon, AMAZON_URL, Category::TvAudio);

    assert_eq!(a, b);
}

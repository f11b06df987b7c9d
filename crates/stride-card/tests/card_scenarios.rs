//! End-to-end card scenarios: listing in, classified card and HTML out.

use chrono::{DateTime, Duration, TimeZone, Utc};
use stride_card::{render_card, render_catalog_page, CardContext, CardView};
use stride_catalog::{Catalog, Currency, ReleaseWindow, ShoeListing, Variant};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn ctx() -> CardContext {
    CardContext::new(Currency::USD, ReleaseWindow::default().as_of(now()))
}

fn shoe(price: i64, days_old: i64, colors: u32) -> ShoeListing {
    ShoeListing::new(
        "test-shoe",
        "Test Shoe",
        "/assets/test-shoe.jpg",
        price,
        now() - Duration::days(days_old),
        colors,
    )
}

#[test]
fn test_discounted_old_shoe_shows_both_prices() {
    let card = CardView::assemble(&shoe(13000, 3650, 2).with_sale_price(11000), &ctx());
    let html = render_card(&card);

    assert_eq!(card.variant, Variant::OnSale);
    assert!(html.contains(r#"<span class="shoe-price shoe-price--struck">$130.00</span>"#));
    assert!(html.contains(r#"<span class="shoe-sale-price">$110.00</span>"#));
    assert!(html.contains(">Sale</span>"));
}

#[test]
fn test_recent_shoe_shows_release_badge() {
    let card = CardView::assemble(&shoe(9000, 3, 2), &ctx());
    let html = render_card(&card);

    assert_eq!(card.variant, Variant::NewRelease);
    assert!(html.contains(">Just Released!</span>"));
    assert!(html.contains(r#"<span class="shoe-price">$90.00</span>"#));
    assert!(!html.contains("shoe-sale-price"));
}

#[test]
fn test_old_shoe_has_no_badge() {
    let card = CardView::assemble(&shoe(9000, 365 * 5, 2), &ctx());
    let html = render_card(&card);

    assert_eq!(card.variant, Variant::Default);
    assert!(!html.contains("variant-tag"));
}

#[test]
fn test_zero_sale_price_beats_recency() {
    let card = CardView::assemble(&shoe(5000, 3, 2).with_sale_price(0), &ctx());

    assert_eq!(card.variant, Variant::OnSale);
    assert_eq!(card.sale_price_label.as_deref(), Some("$0.00"));
    assert_eq!(card.badge.unwrap().text, "Sale");
}

#[test]
fn test_color_label_pluralization() {
    let single = CardView::assemble(&shoe(9000, 400, 1), &ctx());
    let several = CardView::assemble(&shoe(9000, 400, 4), &ctx());

    assert_eq!(single.color_label, "1 Color");
    assert_eq!(several.color_label, "4 Colors");
    assert!(render_card(&single).contains(r#"<p class="shoe-colors">1 Color</p>"#));
}

#[test]
fn test_json_catalog_to_page() {
    let json = r#"[
        {"slug": "a", "name": "A", "imageSrc": "a.jpg", "price": 13000,
         "salePrice": 11000, "releaseDate": "2014-06-01", "numOfColors": 2},
        {"slug": "b", "name": "B", "imageSrc": "b.jpg", "price": 9000,
         "releaseDate": "2024-05-29T12:00:00Z", "numOfColors": 1},
        {"slug": "c", "name": "C", "imageSrc": "c.jpg", "price": 9000,
         "releaseDate": "2019-06-01", "numOfColors": 4}
    ]"#;

    let catalog = Catalog::from_json(json).unwrap();
    catalog.validate().unwrap();

    let cards = CardView::assemble_all(&catalog.shoes, &ctx());
    let variants: Vec<Variant> = cards.iter().map(|c| c.variant).collect();
    assert_eq!(
        variants,
        vec![Variant::OnSale, Variant::NewRelease, Variant::Default]
    );

    let page = render_catalog_page("Running", &cards);
    assert!(page.contains(r#"data-count="3""#));
    assert!(page.contains(r#"href="/shoe/b""#));
}

#[test]
fn test_card_view_serializes_for_json_output() {
    let card = CardView::assemble(&shoe(9000, 3, 2), &ctx());
    let json = serde_json::to_value(&card).unwrap();

    assert_eq!(json["variant"], "new-release");
    assert_eq!(json["badge"]["text"], "Just Released!");
    assert!(json.get("sale_price_label").is_none());
}

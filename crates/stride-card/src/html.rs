//! HTML rendering for shoe cards.

use stride_catalog::Variant;

use crate::card::CardView;

/// Render a single card.
pub fn render_card(card: &CardView) -> String {
    let price_class = if card.price_struck {
        "shoe-price shoe-price--struck"
    } else {
        "shoe-price"
    };

    let sale_price = match &card.sale_price_label {
        Some(label) => format!(
            r#"<span class="shoe-sale-price">{}</span>"#,
            html_escape(label)
        ),
        None => String::new(),
    };

    let badge = match card.badge {
        Some(badge) => format!(
            r#"<span class="variant-tag" style="background-color: {}">{}</span>"#,
            html_escape(badge.color),
            html_escape(badge.text)
        ),
        None => String::new(),
    };

    format!(
        r#"<a class="shoe-link" href="{href}">
    <article class="shoe-card" data-variant="{variant}">
        <div class="shoe-image-wrapper">
            <img class="shoe-image" alt="{alt}" src="{src}">
        </div>
        {spacer}
        <div class="shoe-row">
            <h3 class="shoe-name">{name}</h3>
            <span class="{price_class}">{price}</span>
        </div>
        <div class="shoe-row">
            <p class="shoe-colors">{colors}</p>
            {sale_price}
        </div>
        {badge}
    </article>
</a>"#,
        href = html_escape(&card.href),
        variant = card.variant.as_str(),
        alt = html_escape(&card.image_alt),
        src = html_escape(&card.image_src),
        spacer = spacer(card.spacer),
        name = html_escape(&card.name),
        price_class = price_class,
        price = html_escape(&card.price_label),
        colors = html_escape(&card.color_label),
        sale_price = sale_price,
        badge = badge,
    )
}

/// Render the catalog grid.
pub fn render_grid(cards: &[CardView]) -> String {
    if cards.is_empty() {
        return r#"<section class="shoe-catalog" data-section="catalog">
    <p class="catalog-empty">No shoes to show.</p>
</section>"#
            .to_string();
    }

    let cards_html: String = cards.iter().map(render_card).collect();

    format!(
        r#"<section class="shoe-catalog" data-section="catalog" data-count="{}" data-on-sale="{}" data-new-release="{}">
    <div class="shoe-grid">
        {}
    </div>
</section>"#,
        cards.len(),
        count_variant(cards, Variant::OnSale),
        count_variant(cards, Variant::NewRelease),
        cards_html
    )
}

/// Fixed-size vertical gap.
pub fn spacer(size: u32) -> String {
    format!(
        r#"<span class="spacer" style="display: block; width: {size}px; min-width: {size}px; height: {size}px; min-height: {size}px"></span>"#,
        size = size
    )
}

fn count_variant(cards: &[CardView], variant: Variant) -> usize {
    cards.iter().filter(|c| c.variant == variant).count()
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

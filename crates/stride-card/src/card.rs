//! Card render description.

use serde::Serialize;
use stride_catalog::{
    format_price, pluralize, BadgePresentation, Currency, ReleaseWindow, ShoeListing, Variant,
};

/// Gap between the image and the text rows, in pixels.
pub const IMAGE_GAP: u32 = 12;

/// Settings shared by every card on a page.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardContext {
    /// Currency used to format prices.
    pub currency: Currency,
    /// Window used for the new-release check.
    pub release_window: ReleaseWindow,
}

impl CardContext {
    pub fn new(currency: Currency, release_window: ReleaseWindow) -> Self {
        Self {
            currency,
            release_window,
        }
    }
}

/// Everything a card displays, independent of markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub href: String,
    pub image_src: String,
    /// Empty: the image is decorative next to the name.
    pub image_alt: String,
    pub spacer: u32,
    pub name: String,
    pub variant: Variant,
    pub price_label: String,
    /// Base price is struck through.
    pub price_struck: bool,
    pub color_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<BadgePresentation>,
}

impl CardView {
    /// Classify a listing and describe its card.
    pub fn assemble(shoe: &ShoeListing, ctx: &CardContext) -> Self {
        let variant = shoe.variant(&ctx.release_window);

        let (price_struck, sale_price_label) = match (variant, shoe.sale_price) {
            (Variant::OnSale, Some(sale)) => (true, Some(format_price(sale, ctx.currency))),
            (Variant::OnSale, None) | (Variant::NewRelease, _) | (Variant::Default, _) => {
                (false, None)
            }
        };

        Self {
            href: shoe.href(),
            image_src: shoe.image_src.clone(),
            image_alt: String::new(),
            spacer: IMAGE_GAP,
            name: shoe.name.clone(),
            variant,
            price_label: format_price(shoe.price, ctx.currency),
            price_struck,
            color_label: pluralize("Color", shoe.num_of_colors),
            sale_price_label,
            badge: variant.presentation(),
        }
    }

    /// Assemble a card for every listing, keeping order.
    pub fn assemble_all(shoes: &[ShoeListing], ctx: &CardContext) -> Vec<Self> {
        shoes.iter().map(|shoe| Self::assemble(shoe, ctx)).collect()
    }
}

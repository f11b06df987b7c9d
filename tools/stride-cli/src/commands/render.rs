//! Render a catalog to an HTML page.

use anyhow::{Context as _, Result};
use stride_catalog::{Catalog, SortOrder};
use stride_card::{render_catalog_page, CardContext, CardView};
use stride_observability::StructuredLogger;

use super::{load_catalog, release_window, RenderArgs};
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    ctx.config.validate()?;

    let logger = ctx
        .config
        .logger("render", ctx.output.is_verbose())?
        .with_catalog(&args.catalog);

    let mut catalog = load_catalog(&args.catalog, ctx).await?;

    let order = match &args.sort {
        Some(sort) => SortOrder::from_str(sort)?,
        None => ctx.config.sort_order()?,
    };
    catalog.sort(order);

    let card_ctx = CardContext::new(
        ctx.config.currency()?,
        release_window(args.as_of.as_deref(), ctx)?,
    );
    let cards = assemble_cards(&catalog, &card_ctx, &logger);

    let title = args
        .title
        .or_else(|| ctx.config.render.title.clone())
        .unwrap_or_else(|| ctx.config.store.name.clone());
    let page = render_catalog_page(&title, &cards);

    logger
        .info_builder("catalog rendered")
        .field("sort", order.as_str())
        .field_i64("cards", cards.len() as i64)
        .emit();

    match &args.output {
        Some(path) => {
            let resolved = ctx.resolve_path(path);
            tokio::fs::write(&resolved, page)
                .await
                .with_context(|| format!("Failed to write page: {}", resolved.display()))?;
            ctx.output.success(&format!("Rendered {} cards to {}", cards.len(), path));
        }
        None => println!("{}", page),
    }

    Ok(())
}

/// Classify and assemble every card, logging pricing anomalies.
pub fn assemble_cards(
    catalog: &Catalog,
    card_ctx: &CardContext,
    logger: &StructuredLogger,
) -> Vec<CardView> {
    catalog
        .shoes
        .iter()
        .map(|shoe| {
            if shoe.has_suspicious_sale_price() {
                logger
                    .warn_builder("sale price is negative or not below base price")
                    .field("slug", shoe.slug.clone())
                    .field_i64("price", shoe.price)
                    .field_i64("sale_price", shoe.sale_price.unwrap_or_default())
                    .emit();
            }

            let card = CardView::assemble(shoe, card_ctx);
            logger
                .debug_builder("classified")
                .field("slug", shoe.slug.clone())
                .field("variant", card.variant.as_str())
                .field_bool("badge", card.badge.is_some())
                .emit();
            card
        })
        .collect()
}

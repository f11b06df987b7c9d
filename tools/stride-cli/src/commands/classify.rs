//! Show the display variant of every shoe in a catalog.

use anyhow::Result;
use serde::Serialize;
use stride_catalog::{format_price, Catalog, Currency, ReleaseWindow, Variant};

use super::{load_catalog, release_window, ClassifyArgs};
use crate::context::Context;
use crate::output::variant_badge;

/// One classified listing.
#[derive(Debug, Serialize)]
pub struct ClassifiedShoe {
    pub slug: String,
    pub variant: Variant,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,
}

/// Run the classify command.
pub async fn run(args: ClassifyArgs, ctx: &Context) -> Result<()> {
    ctx.config.validate()?;

    let catalog = load_catalog(&args.catalog, ctx).await?;
    let window = release_window(args.as_of.as_deref(), ctx)?;
    let rows = classify_catalog(&catalog, &window, ctx.config.currency()?);

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header(&format!("{} ({} shoes)", args.catalog, rows.len()));
    let widths = [28, 12, 12, 12];
    ctx.output.table_row(&["SLUG", "VARIANT", "PRICE", "SALE"], &widths);
    for row in &rows {
        // Pad outside the styled text so escape codes do not skew the columns.
        let padding = widths[1].saturating_sub(row.variant.as_str().len());
        let variant = format!("{}{}", variant_badge(row.variant), " ".repeat(padding));
        ctx.output.table_row(
            &[
                row.slug.as_str(),
                variant.as_str(),
                row.price.as_str(),
                row.sale_price.as_deref().unwrap_or("-"),
            ],
            &[widths[0], 0, widths[2], widths[3]],
        );
    }

    Ok(())
}

/// Classify every listing, keeping catalog order.
pub fn classify_catalog(
    catalog: &Catalog,
    window: &ReleaseWindow,
    currency: Currency,
) -> Vec<ClassifiedShoe> {
    catalog
        .shoes
        .iter()
        .map(|shoe| ClassifiedShoe {
            slug: shoe.slug.clone(),
            variant: shoe.variant(window),
            price: format_price(shoe.price, currency),
            sale_price: shoe.sale_price.map(|sale| format_price(sale, currency)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use stride_catalog::ShoeListing;

    use crate::config::CliConfig;
    use crate::output::Output;

    #[tokio::test]
    async fn test_classify_demo_catalog() {
        let ctx = Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: env!("CARGO_MANIFEST_DIR").into(),
        };
        let args = ClassifyArgs {
            catalog: "../../demos/shoes.json".to_string(),
            as_of: Some("2026-10-19".to_string()),
        };

        assert!(run(args, &ctx).await.is_ok());
    }

    #[test]
    fn test_classify_catalog() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let catalog = Catalog::new(vec![
            ShoeListing::new("fresh", "Fresh", "f.jpg", 9000, now - Duration::days(3), 1),
            ShoeListing::new("deal", "Deal", "d.jpg", 13000, now - Duration::days(3), 2)
                .with_sale_price(11000),
        ]);
        let window = ReleaseWindow::default().as_of(now);

        let rows = classify_catalog(&catalog, &window, Currency::USD);
        assert_eq!(rows[0].variant, Variant::NewRelease);
        assert_eq!(rows[0].sale_price, None);
        assert_eq!(rows[1].variant, Variant::OnSale);
        assert_eq!(rows[1].sale_price.as_deref(), Some("$110.00"));

        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[1]["variant"], "on-sale");
    }
}

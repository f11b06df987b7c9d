//! Theme constants and the catalog stylesheet.

/// Color palette.
pub struct Colors {
    pub white: &'static str,
    pub gray_700: &'static str,
    pub gray_900: &'static str,
    pub primary: &'static str,
}

pub const COLORS: Colors = Colors {
    white: "hsl(0deg 0% 100%)",
    gray_700: "hsl(220deg 5% 40%)",
    gray_900: "hsl(220deg 3% 20%)",
    primary: "hsl(340deg 65% 47%)",
};

/// Font weights.
pub struct Weights {
    pub normal: u16,
    pub medium: u16,
}

pub const WEIGHTS: Weights = Weights {
    normal: 500,
    medium: 600,
};

/// Stylesheet for catalog grids and shoe cards.
pub fn catalog_styles() -> String {
    format!(
        r##"
* {{ box-sizing: border-box; margin: 0; padding: 0; }}

body {{
    font-family: 'Raleway', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    font-weight: {normal};
    line-height: 1.5;
    padding: 2rem;
}}

.shoe-grid {{
    display: flex;
    flex-wrap: wrap;
    gap: 32px;
}}

.shoe-link {{
    text-decoration: none;
    color: inherit;
    flex: 1 1 340px;
}}

.shoe-card {{
    position: relative;
}}

.shoe-image-wrapper {{
    width: 100%;
    position: relative;
}}

.shoe-image {{
    width: 100%;
    display: block;
}}

.shoe-row {{
    font-size: 1rem;
    display: flex;
    justify-content: space-between;
}}

.shoe-name {{
    font-size: 1rem;
    font-weight: {medium};
    color: {gray_900};
}}

.shoe-price--struck {{
    text-decoration: line-through solid {gray_700} 1px;
}}

.shoe-colors {{
    color: {gray_700};
}}

.shoe-sale-price {{
    font-weight: {medium};
    color: {primary};
}}

.variant-tag {{
    position: absolute;
    top: 12px;
    right: -6px;
    font-size: {tag_size:.4}rem;
    border-radius: 2px;
    padding: 8px;
    color: {white};
}}

.catalog-empty {{
    color: {gray_700};
}}
"##,
        normal = WEIGHTS.normal,
        medium = WEIGHTS.medium,
        gray_700 = COLORS.gray_700,
        gray_900 = COLORS.gray_900,
        primary = COLORS.primary,
        white = COLORS.white,
        tag_size = 14.0 / 18.0,
    )
}

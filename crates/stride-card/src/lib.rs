//! Shoe card rendering for Stride catalog pages.
//!
//! A card is built in two steps:
//!
//! 1. [`CardView::assemble`] classifies the listing and describes what the card shows
//! 2. [`render_card`] turns that description into HTML
//!
//! [`render_catalog_page`] wraps a grid of cards in a full document.

mod card;
mod html;
mod shell;
mod theme;

pub use card::*;
pub use html::*;
pub use shell::*;
pub use theme::*;

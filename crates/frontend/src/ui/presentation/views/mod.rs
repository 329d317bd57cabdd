//! Top-level pages

mod catalog_page;

pub use catalog_page::CatalogPage;

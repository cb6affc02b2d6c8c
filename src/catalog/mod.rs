//! Font catalog: descriptors, the HTTP client, and the background worker
//! that keeps fetches off the UI loop.

mod fetch;
mod types;
mod worker;

pub use fetch::{API_BASE, CatalogError, fetch_font_list, font_api_url};
pub use types::{FontInfo, LocalizedName};
pub use worker::{CatalogRequest, CatalogResponse, CatalogWorker};

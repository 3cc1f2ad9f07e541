//! Text extraction: PDF bytes in, page-ordered plain text out.

mod error;
pub use error::ExtractError;

mod pdf;
pub use pdf::{extract_pages, extract_text};

#[cfg(any(test, feature = "fixtures"))]
pub mod fixture;

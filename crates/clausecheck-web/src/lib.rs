//! Presentation shell: the upload/paste form, HTML result cards, and a JSON API
//! over the extract and classify crates.

mod analysis;
mod error;
pub mod render;
mod routes;

pub use analysis::analyze_input;
pub use error::WebError;
pub use routes::{ServerConfig, router, serve};

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use clausecheck_core::NoInputProvided;
use clausecheck_extract::ExtractError;
use thiserror::Error;
use tracing::warn;

use crate::render;

#[derive(Error, Debug)]
pub enum WebError {
    #[error(transparent)]
    NoInput(#[from] NoInputProvided),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("invalid form submission: {0}")]
    Multipart(#[from] MultipartError),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NoInput(_) | Self::Extract(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Multipart(err) => err.status(),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), error = %self, "analysis rejected");
        let page = match &self {
            Self::NoInput(err) => render::warning_page(&err.to_string()),
            _ => render::error_page(&self.to_string()),
        };
        (status, Html(page)).into_response()
    }
}

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use leptos::logging::error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Product {0} not found")]
    ProductNotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ProductNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Database(e) => {
                error!("[API] Database error: {:?}", e);
                HttpResponse::InternalServerError().body("Internal server error")
            }
            AppError::ProductNotFound(_) => HttpResponse::NotFound().body(self.to_string()),
        }
    }
}

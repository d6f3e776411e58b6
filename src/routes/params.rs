use axum::extract::FromRequest;

use crate::error::{AppError, AppResult};

/// `Json` extractor whose rejections are reported as `AppError::BadRequest`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

pub fn parse_item_id(raw: &str) -> AppResult<u64> {
    raw.parse::<u64>()
        .map_err(|_| AppError::BadRequest("Invalid item ID".into()))
}

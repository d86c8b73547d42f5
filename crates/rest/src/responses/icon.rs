//! Asset icon responses.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::AssetIcon;

impl IntoResponse for AssetIcon {
    fn into_response(self) -> Response {
        match self {
            AssetIcon::NotModified => StatusCode::NOT_MODIFIED.into_response(),
            AssetIcon::Image {
                data,
                content_type,
                etag,
            } => {
                let mut response = (StatusCode::OK, data).into_response();
                let headers = response.headers_mut();
                if let Ok(value) = HeaderValue::from_str(&content_type) {
                    headers.insert(header::CONTENT_TYPE, value);
                }
                if let Ok(value) = HeaderValue::from_str(&format!("\"{}\"", etag)) {
                    headers.insert(header::ETAG, value);
                }
                response
            }
        }
    }
}

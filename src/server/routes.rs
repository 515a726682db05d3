//! The user-facing JSON web server route that converts images to
//! grayscale. This is the whole "front end": one POST route, no state.

use super::protocol::{GrayscaleRequest, GrayscaleResponse};
use super::WebError;
use crate::imaging;
use actix_web::{post, web, Responder};
use base64::{engine::general_purpose, Engine as _};
use tracing::info;

type Result<T> = std::result::Result<T, WebError>;

/// HTTP request to convert a base 64 encoded image into a base 64 encoded
/// grayscale PNG
#[post("/grayscale")]
pub async fn grayscale(body: web::Bytes) -> Result<impl Responder> {
    // Parse the input request
    let request: GrayscaleRequest = serde_json::from_slice(&body)?;
    let encoded = request.image.ok_or(WebError::MissingImageField)?;

    let raw = general_purpose::STANDARD.decode(encoded)?;

    let img = imaging::decode(&raw).map_err(WebError::Decode)?;
    let gray = imaging::to_grayscale(&img);
    let png = imaging::encode_png(gray).map_err(WebError::Processing)?;

    info!("finished serving grayscale request");

    Ok(web::Json(GrayscaleResponse {
        processed_image: general_purpose::STANDARD.encode(png),
    }))
}

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use tracing::warn;

mod protocol;
pub mod routes;

/// Legacy plain-text body for the missing-field case; existing callers
/// match on this exact sentence
const MISSING_IMAGE_FIELD: &str = "Please pass an 'image' field in the request body";

/// Everything that can go wrong while serving a grayscale request
#[derive(Debug)]
pub enum WebError {
    /// The request body carried no `image` field
    MissingImageField,
    /// The request body was not parseable JSON
    BadJson(serde_json::Error),
    /// The `image` field was not valid base 64
    Base64(base64::DecodeError),
    /// The decoded bytes were not a decodable image
    Decode(anyhow::Error),
    /// The grayscale buffer could not be encoded as PNG
    Processing(anyhow::Error),
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebError::MissingImageField => write!(f, "{MISSING_IMAGE_FIELD}"),
            WebError::BadJson(err) => write!(f, "malformed request body: {err}"),
            WebError::Base64(err) => write!(f, "invalid base64 image data: {err}"),
            WebError::Decode(err) => write!(f, "{err:#}"),
            WebError::Processing(err) => write!(f, "{err:#}"),
        }
    }
}

impl actix_web::error::ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        warn!("grayscale request failed: {self}");

        match self {
            WebError::MissingImageField => HttpResponse::build(self.status_code())
                .insert_header(ContentType::plaintext())
                .body(MISSING_IMAGE_FIELD),
            _ => HttpResponse::build(self.status_code())
                .insert_header(ContentType::json())
                .json(protocol::ErrorBody {
                    error: self.to_string(),
                }),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            WebError::MissingImageField => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for WebError {
    fn from(err: serde_json::Error) -> Self {
        WebError::BadJson(err)
    }
}

impl From<base64::DecodeError> for WebError {
    fn from(err: base64::DecodeError) -> Self {
        WebError::Base64(err)
    }
}

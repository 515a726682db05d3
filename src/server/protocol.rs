use serde::{Deserialize, Serialize};

/// An incoming image to convert, encoded as base 64. The field is optional
/// so the handler can answer the missing-field case itself.
#[derive(Deserialize)]
pub struct GrayscaleRequest {
    pub image: Option<String>,
}

impl std::fmt::Debug for GrayscaleRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GrayscaleRequest {{ image: {} }}",
            if self.image.is_some() { "<data>" } else { "<none>" }
        )
    }
}

/// The processed image: PNG bytes, encoded as base 64
#[derive(Debug, Serialize)]
pub struct GrayscaleResponse {
    pub processed_image: String,
}

/// JSON error payload for every failure except the missing-field case
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

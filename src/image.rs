//! Encoding picked files for upload.

use base64::{engine::general_purpose::STANDARD, Engine};

/// Failure to encode a picked file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("text file is not valid UTF-8")]
    InvalidText,
}

/// Encode file contents for the create payload.
///
/// `image/*` becomes a `data:{mime};base64,...` URL and `text/*` is returned
/// as its UTF-8 contents. Anything else is rejected.
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> Result<String, ImageError> {
    let mime = mime_type.trim().to_ascii_lowercase();
    if mime.starts_with("image/") {
        Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
    } else if mime.starts_with("text/") {
        String::from_utf8(bytes.to_vec()).map_err(|_| ImageError::InvalidText)
    } else {
        Err(ImageError::UnsupportedType(mime_type.to_string()))
    }
}

//! Create-form validation.
//!
//! Every failing field is reported at once. A form that passes becomes the
//! `NewPost` payload sent to the backend.

use crate::error::{FormField, ValidationError};
use crate::image::encode_data_url;
use crate::models::{CurrentUser, NewPost, NewPostForm, Tag};

/// Uploads must be strictly smaller than this.
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/jpg"];

pub const TITLE_REQUIRED: &str = "Please enter the title of your post";
pub const BODY_REQUIRED: &str = "Please provide some details for your post";
pub const TAGS_REQUIRED: &str = "At least one tag is required to categorize your post";
pub const IMAGE_REQUIRED: &str = "An image is necessary for creating a post";
pub const IMAGE_TOO_LARGE: &str = "The image exceeds the 2MB size limit";
pub const IMAGE_BAD_TYPE: &str = "Please use either JPEG, PNG, or JPG formats";

impl NewPostForm {
    /// Check the form and build the payload for `author`.
    pub fn validate(&self, author: &CurrentUser) -> Result<NewPost, ValidationError> {
        let mut errors = ValidationError::new();

        if self.title.trim().is_empty() {
            errors.push(FormField::Title, TITLE_REQUIRED);
        }
        if self.body.trim().is_empty() {
            errors.push(FormField::Body, BODY_REQUIRED);
        }

        let tags: Vec<Tag> = self
            .tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(Tag::named)
            .collect();
        if tags.is_empty() {
            errors.push(FormField::Tags, TAGS_REQUIRED);
        }

        let mut image = None;
        match &self.image {
            None => errors.push(FormField::Image, IMAGE_REQUIRED),
            Some(upload) => {
                let mime = upload.mime_type.trim().to_ascii_lowercase();
                if upload.size() >= MAX_IMAGE_BYTES {
                    errors.push(FormField::Image, IMAGE_TOO_LARGE);
                }
                if !ALLOWED_IMAGE_TYPES.contains(&mime.as_str()) {
                    errors.push(FormField::Image, IMAGE_BAD_TYPE);
                }
                if errors.for_field(FormField::Image).is_none() {
                    match encode_data_url(&mime, &upload.bytes) {
                        Ok(url) => image = Some(url),
                        Err(_) => errors.push(FormField::Image, IMAGE_BAD_TYPE),
                    }
                }
            }
        }

        errors.into_result()?;

        Ok(NewPost {
            title: self.title.trim().to_string(),
            body: self.body.trim().to_string(),
            tags,
            image: image.unwrap_or_default(),
            user_id: author.id.clone(),
        })
    }
}

//! Image Upload Handling
//!
//! Multipart form intake and blob storage for uploaded images. Text parts
//! are collected into a `FormData`, an optional `image` part is captured as
//! raw bytes, and `store_image` writes it to the upload directory under a
//! generated filename. Stored files are served back under the `/uploads`
//! static path prefix, keyed by that filename.

use axum::extract::Multipart;
use std::collections::HashMap;
use std::path::Path;
use uuid::Uuid;

use crate::error::ApiError;

/// An uploaded image part: original filename plus raw bytes
#[derive(Debug)]
pub struct ImagePart {
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// Collected multipart form: text fields plus an optional image part
#[derive(Debug, Default)]
pub struct FormData {
    pub fields: HashMap<String, String>,
    pub image: Option<ImagePart>,
}

impl FormData {
    /// Get an optional text field, trimmed; empty fields count as absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Get a mandatory text field
    ///
    /// # Errors
    /// `400 Bad Request` naming the missing field
    pub fn require(&self, name: &str) -> Result<&str, ApiError> {
        self.get(name)
            .ok_or_else(|| ApiError::bad_request(format!("Missing field `{}`", name)))
    }
}

/// Drain a multipart body into a `FormData`
///
/// The part named `image` is captured as bytes; every other part is read
/// as text. A malformed body maps to `400 Bad Request`.
pub async fn collect_form(mut multipart: Multipart) -> Result<FormData, ApiError> {
    let mut form = FormData::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name == "image" {
            let file_name = field.file_name().map(|s| s.to_string());
            let bytes = field.bytes().await?.to_vec();
            if !bytes.is_empty() {
                form.image = Some(ImagePart { file_name, bytes });
            }
        } else if !name.is_empty() {
            let value = field.text().await?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}

/// Store an uploaded image under a generated filename
///
/// The filename is a fresh UUID with the original extension carried over
/// (sanitized, defaulting to `bin`). Returns the generated filename, which
/// is the retrievable reference under `/uploads/`.
pub async fn store_image(
    upload_dir: &Path,
    image: &ImagePart,
) -> Result<String, ApiError> {
    let extension = file_extension(image.file_name.as_deref());
    let file_name = format!("{}.{}", Uuid::new_v4(), extension);

    tokio::fs::create_dir_all(upload_dir).await?;
    tokio::fs::write(upload_dir.join(&file_name), &image.bytes).await?;

    tracing::info!("Stored uploaded image as {}", file_name);
    Ok(file_name)
}

/// Extract a safe lowercase extension from an original filename
fn file_extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| "bin".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(Some("photo.JPG")), "jpg");
        assert_eq!(file_extension(Some("archive.tar.gz")), "gz");
        assert_eq!(file_extension(Some("no_dot_in_this_name")), "bin");
        assert_eq!(file_extension(Some("weird.!!")), "bin");
        assert_eq!(file_extension(None), "bin");
    }

    #[test]
    fn test_form_data_require() {
        let mut form = FormData::default();
        form.fields.insert("name".to_string(), "Open mic".to_string());
        form.fields.insert("genre".to_string(), "   ".to_string());

        assert_eq!(form.require("name").unwrap(), "Open mic");
        // Whitespace-only counts as absent
        assert!(form.require("genre").is_err());
        assert!(matches!(form.require("host"), Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_store_image_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let image = ImagePart {
            file_name: Some("cover.png".to_string()),
            bytes: vec![1, 2, 3, 4],
        };

        let name = store_image(dir.path(), &image).await.unwrap();
        assert!(name.ends_with(".png"));

        let stored = tokio::fs::read(dir.path().join(&name)).await.unwrap();
        assert_eq!(stored, vec![1, 2, 3, 4]);
    }
}

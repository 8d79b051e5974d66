//! Multipart form payloads.
//!
//! Upload endpoints (domain images, word images, child avatars, pronunciation
//! audio) take `multipart/form-data`. A [`FormData`] lists every field in
//! order; file parts carry their bytes, name and MIME type, everything else
//! is sent as text. Repeated keys are allowed and are how list fields
//! (`images`) are expressed.

use std::path::Path;

/// Size and type limits enforced by the backend for uploads.
pub mod limits {
    pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;
    pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("'{file_name}' is {size} bytes, the limit is {limit} bytes")]
    TooLarge {
        file_name: String,
        size: usize,
        limit: usize,
    },

    #[error("'{file_name}' has unsupported type {content_type}")]
    UnsupportedType {
        file_name: String,
        content_type: String,
    },
}

/// A binary part of a multipart form.
#[derive(Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for FilePart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilePart")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl FilePart {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Builds a part for a file already read from `path`, guessing the MIME
    /// type from its extension.
    pub fn from_path_bytes(path: &Path, bytes: Vec<u8>) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Self::new(file_name, mime_for_path(path), bytes)
    }

    pub fn check_image(&self) -> Result<(), UploadError> {
        self.check(&limits::ALLOWED_IMAGE_TYPES, limits::MAX_IMAGE_SIZE)
    }

    fn check(&self, allowed: &[&str], limit: usize) -> Result<(), UploadError> {
        if !allowed.contains(&self.content_type.as_str()) {
            return Err(UploadError::UnsupportedType {
                file_name: self.file_name.clone(),
                content_type: self.content_type.clone(),
            });
        }
        if self.bytes.len() > limit {
            return Err(UploadError::TooLarge {
                file_name: self.file_name.clone(),
                size: self.bytes.len(),
                limit,
            });
        }
        Ok(())
    }
}

/// MIME type for the upload formats the backend accepts.
#[must_use]
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File(FilePart),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<(String, FormValue)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.fields
            .push((key.into(), FormValue::Text(value.to_string())));
        self
    }

    #[must_use]
    pub fn opt_text<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.text(key, value),
            None => self,
        }
    }

    #[must_use]
    pub fn file(mut self, key: impl Into<String>, part: FilePart) -> Self {
        self.fields.push((key.into(), FormValue::File(part)));
        self
    }

    #[must_use]
    pub fn opt_file(self, key: impl Into<String>, part: Option<FilePart>) -> Self {
        match part {
            Some(part) => self.file(key, part),
            None => self,
        }
    }

    /// Appends every part under the same key.
    #[must_use]
    pub fn files(self, key: &str, parts: impl IntoIterator<Item = FilePart>) -> Self {
        parts
            .into_iter()
            .fold(self, |form, part| form.file(key, part))
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_fields(self) -> Vec<(String, FormValue)> {
        self.fields
    }

    /// First value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FormValue> {
        self.fields().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(size: usize) -> FilePart {
        FilePart::new("cover.png", "image/png", vec![0u8; size])
    }

    #[test]
    fn test_text_fields_are_stringified() {
        let form = FormData::new()
            .text("name", "Animals")
            .text("lessonCount", 12)
            .text("isActive", true);

        assert_eq!(form.get("name"), Some(&FormValue::Text("Animals".into())));
        assert_eq!(form.get("lessonCount"), Some(&FormValue::Text("12".into())));
        assert_eq!(form.get("isActive"), Some(&FormValue::Text("true".into())));
    }

    #[test]
    fn test_optional_fields_are_skipped() {
        let form = FormData::new()
            .opt_text("description", None::<String>)
            .opt_file("image", None);
        assert!(form.is_empty());
    }

    #[test]
    fn test_files_share_a_key() {
        let form = FormData::new().files("images", vec![png(1), png(2)]);
        let keys: Vec<_> = form.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["images", "images"]);
        assert_eq!(form.len(), 2);
    }

    #[test]
    fn test_mime_guess() {
        assert_eq!(mime_for_path(Path::new("a/b/photo.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("voice.ogg")), "audio/ogg");
        assert_eq!(
            mime_for_path(Path::new("notes")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_from_path_bytes() {
        let part = FilePart::from_path_bytes(Path::new("/tmp/cat.webp"), vec![1, 2, 3]);
        assert_eq!(part.file_name, "cat.webp");
        assert_eq!(part.content_type, "image/webp");
        assert_eq!(part.bytes.len(), 3);
    }

    #[test]
    fn test_image_limits() {
        assert!(png(1024).check_image().is_ok());
        assert!(matches!(
            png(limits::MAX_IMAGE_SIZE + 1).check_image(),
            Err(UploadError::TooLarge { .. })
        ));

        let audio = FilePart::new("say.mp3", "audio/mpeg", vec![0u8; 10]);
        assert!(matches!(
            audio.check_image(),
            Err(UploadError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_debug_hides_bytes() {
        let rendered = format!("{:?}", png(3));
        assert!(rendered.contains("len: 3"));
        assert!(!rendered.contains("bytes"));
    }
}

//! Image picker component.
//!
//! Loads an image from a path typed by the user, encodes it as base64 and
//! hands the pair of data and image type to its owner. It keeps a small
//! preview summary of the last picked file until told to clear it.

use super::error::PickerError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Base64 image data together with its type (e.g. "jpeg").
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedImage {
    pub data: String,
    pub kind: String,
}

/// Summary of the picked file shown in place of the image itself.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
    pub file_name: String,
    pub size: usize,
    pub kind: String,
}

/// Specifying picker state: path input, preview and last error.
///
#[derive(Debug, Default)]
pub struct ImagePicker {
    initial_path: String,
    path_input: String,
    preview: Option<Preview>,
    error: Option<String>,
}

impl ImagePicker {
    /// Return a new picker whose path input starts at the given directory.
    ///
    pub fn new(image_directory: Option<&str>) -> Self {
        let initial_path = image_directory
            .map(|dir| {
                if dir.ends_with('/') {
                    dir.to_string()
                } else {
                    format!("{}/", dir)
                }
            })
            .unwrap_or_default();
        ImagePicker {
            path_input: initial_path.clone(),
            initial_path,
            ..ImagePicker::default()
        }
    }

    pub fn path_input(&self) -> &str {
        &self.path_input
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn push_path_char(&mut self, c: char) {
        self.path_input.push(c);
        self.error = None;
    }

    pub fn pop_path_char(&mut self) {
        self.path_input.pop();
        self.error = None;
    }

    /// Load the image at the current path input. On success the preview is
    /// replaced and the picked pair is returned for the owner to store.
    ///
    pub fn pick(&mut self) -> Option<PickedImage> {
        let path = expand_home(self.path_input.trim());
        match load(&path) {
            Ok((image, preview)) => {
                info!(
                    "Picked {} image '{}' ({} bytes).",
                    preview.kind, preview.file_name, preview.size
                );
                self.preview = Some(preview);
                self.error = None;
                Some(image)
            }
            Err(e) => {
                warn!("Failed to pick image: {}", e);
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Discard preview, input and error when the signal is set.
    ///
    pub fn apply_clear_signal(&mut self, clear: bool) {
        if !clear {
            return;
        }
        debug!("Clearing picked image.");
        self.preview = None;
        self.error = None;
        self.path_input = self.initial_path.clone();
    }
}

/// Read and encode the image at the path.
///
pub fn load(path: &Path) -> Result<(PickedImage, Preview), PickerError> {
    if path.as_os_str().is_empty() {
        return Err(PickerError::EmptyPath);
    }
    let kind = image_kind(path)?;
    let bytes = fs::read(path).map_err(|e| PickerError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    if bytes.is_empty() {
        return Err(PickerError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok((
        PickedImage {
            data: STANDARD.encode(&bytes),
            kind: kind.to_string(),
        },
        Preview {
            file_name,
            size: bytes.len(),
            kind: kind.to_string(),
        },
    ))
}

/// Infer the image type from the file extension.
///
pub fn image_kind(path: &Path) -> Result<&'static str, PickerError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => Ok("jpeg"),
        "png" => Ok("png"),
        "gif" => Ok("gif"),
        "webp" => Ok("webp"),
        "bmp" => Ok("bmp"),
        _ => Err(PickerError::UnsupportedType { extension }),
    }
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

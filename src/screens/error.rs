//! Screen-specific error types.

use std::path::PathBuf;

/// Required field missing at submit time. Messages are shown on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a title.")]
    MissingTitle,

    #[error("Please enter a body")]
    MissingBody,

    #[error("Please select an image to post.")]
    MissingImage,
}

/// Errors that can occur while picking an image.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// Nothing typed into the path input
    #[error("Enter the path of an image")]
    EmptyPath,

    /// File extension does not name a supported image type
    #[error("Unsupported image type: {extension}")]
    UnsupportedType { extension: String },

    /// File exists but holds no data
    #[error("Image file is empty: {path}")]
    EmptyFile { path: PathBuf },

    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingTitle.to_string(),
            "Please enter a title."
        );
        assert_eq!(ValidationError::MissingBody.to_string(), "Please enter a body");
        assert_eq!(
            ValidationError::MissingImage.to_string(),
            "Please select an image to post."
        );
    }

    #[test]
    fn test_picker_error_display() {
        let error = PickerError::UnsupportedType {
            extension: "tiff".to_string(),
        };
        assert!(error.to_string().contains("tiff"));

        let error = PickerError::EmptyFile {
            path: PathBuf::from("/tmp/empty.png"),
        };
        assert!(error.to_string().contains("/tmp/empty.png"));
    }
}

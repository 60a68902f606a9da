use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Shown when a selection does not declare itself as a PDF.
pub const NOT_PDF_MESSAGE: &str = "Please upload a PDF file";

/// Shown when a conversion failed without any message of its own.
pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to fetch";

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("{}", NOT_PDF_MESSAGE)]
    NotPdf { name: String, mime: String },
}

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The service answered, but not with a 2xx.
    #[error("Conversion failed: {status} {body}")]
    Http { status: u16, body: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to save '{}': {source}", .path.display())]
    Save { path: PathBuf, source: io::Error },

    /// The conversion task went away without reporting back.
    #[error("conversion task ended without a result")]
    WorkerLost,
}

impl ConvertError {
    /// The text a user gets to see, if this error carries any.
    pub fn message(&self) -> Option<String> {
        match self {
            ConvertError::WorkerLost => None,
            other => {
                let text = other.to_string();
                if text.trim().is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
        }
    }

    pub fn user_message(&self) -> String {
        format!(
            "Error converting file: {}",
            self.message()
                .unwrap_or_else(|| FETCH_FALLBACK_MESSAGE.to_string())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_carries_status_and_body() {
        let err = ConvertError::Http {
            status: 500,
            body: "server overloaded".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Error converting file: Conversion failed: 500 server overloaded"
        );
    }

    #[test]
    fn test_worker_lost_falls_back() {
        assert_eq!(
            ConvertError::WorkerLost.user_message(),
            "Error converting file: Failed to fetch"
        );
    }

    #[test]
    fn test_io_errors_embed_cause() {
        let err = ConvertError::Read {
            path: PathBuf::from("report.pdf"),
            source: io::Error::new(io::ErrorKind::Other, "NetworkError"),
        };
        let message = err.user_message();
        assert!(message.starts_with("Error converting file: "));
        assert!(message.contains("NetworkError"));
    }

    #[test]
    fn test_not_pdf_message() {
        let err = SelectionError::NotPdf {
            name: "notes.txt".to_string(),
            mime: "text/plain".to_string(),
        };
        assert_eq!(err.to_string(), NOT_PDF_MESSAGE);
    }
}

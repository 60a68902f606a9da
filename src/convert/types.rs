use super::error::ConvertError;
use crate::utils::mime::{mime_from_name, PDF_MIME};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the bytes of a selected file come from.
#[derive(Debug, Clone)]
pub enum FileSource {
    /// A file on disk, read when the request is built.
    Path(PathBuf),
    /// Bytes already in memory (drops on targets without a filesystem path).
    Bytes(Arc<[u8]>),
}

/// A file picked or dropped by the user, with the MIME type it declares.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub size: Option<u64>,
    pub source: FileSource,
}

impl SelectedFile {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let mime = mime_from_name(&name);
        let size = std::fs::metadata(&path).ok().map(|m| m.len());

        Self {
            name,
            mime,
            size,
            source: FileSource::Path(path),
        }
    }

    pub fn from_bytes(name: impl Into<String>, mime: impl Into<String>, bytes: Arc<[u8]>) -> Self {
        let name = name.into();
        // Only the final component, so the name can never leave the download dir.
        let name = Path::new(&name)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            name,
            mime: mime.into(),
            size: Some(bytes.len() as u64),
            source: FileSource::Bytes(bytes),
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.mime == PDF_MIME
    }

    pub async fn read_bytes(&self) -> Result<Vec<u8>, ConvertError> {
        match &self.source {
            FileSource::Path(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| ConvertError::Read {
                        path: path.clone(),
                        source,
                    })
            }
            FileSource::Bytes(bytes) => Ok(bytes.to_vec()),
        }
    }
}

/// What a finished conversion hands back to the UI thread: the saved path
/// or the reason it failed.
pub type ConversionOutcome = Result<PathBuf, ConvertError>;

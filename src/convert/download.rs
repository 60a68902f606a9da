use super::error::ConvertError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Name the converted document is saved under.
///
/// Drops the first `.pdf` found in the name (case-sensitive) and appends
/// `.docx`, so `report.pdf` becomes `report.docx` while `REPORT.PDF` keeps
/// its suffix and becomes `REPORT.PDF.docx`.
pub fn docx_file_name(original: &str) -> String {
    format!("{}.docx", original.replacen(".pdf", "", 1))
}

/// `report.docx`, then `report (1).docx`, `report (2).docx`, ...
fn numbered_name(file_name: &str, index: usize) -> String {
    if index == 0 {
        return file_name.to_string();
    }

    // A leading dot still marks an extension: `.docx` -> ` (1).docx`.
    match file_name.rsplit_once('.') {
        Some((stem, ext)) => format!("{} ({}).{}", stem, index, ext),
        None => format!("{} ({})", file_name, index),
    }
}

/// Writes the downloaded bytes into `dir` without clobbering an existing
/// file, returning the path actually used.
pub async fn save_download(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ConvertError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| ConvertError::Save {
            path: dir.to_path_buf(),
            source,
        })?;

    let mut index = 0;
    loop {
        let path = dir.join(numbered_name(file_name, index));
        let opened = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await;

        match opened {
            Ok(mut file) => {
                file.write_all(bytes)
                    .await
                    .map_err(|source| ConvertError::Save {
                        path: path.clone(),
                        source,
                    })?;
                file.flush().await.map_err(|source| ConvertError::Save {
                    path: path.clone(),
                    source,
                })?;
                info!(path = %path.display(), size = bytes.len(), "Saved converted document");
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "Download name taken, trying next");
                index += 1;
            }
            Err(source) => return Err(ConvertError::Save { path, source }),
        }
    }
}

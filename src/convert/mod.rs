mod client;
mod download;
mod error;
mod types;

pub use client::{ConversionService, HttpConverter};
pub use download::{docx_file_name, save_download};
pub use error::{ConvertError, SelectionError};
pub use types::{ConversionOutcome, SelectedFile};

use std::path::Path;
use tracing::info;

/// Reads the selected PDF, sends it to the service and saves what comes
/// back into `download_dir`.
pub async fn run_conversion(
    service: &dyn ConversionService,
    file: &SelectedFile,
    download_dir: &Path,
) -> ConversionOutcome {
    let pdf = file.read_bytes().await?;
    let converted = service.convert(&file.name, pdf).await?;
    info!(file = %file.name, size = converted.len(), "Received converted document");

    save_download(download_dir, &docx_file_name(&file.name), &converted).await
}

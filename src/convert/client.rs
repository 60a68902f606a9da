use super::error::ConvertError;
use crate::config::Config;
use crate::utils::mime::PDF_MIME;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{info, warn};

/// Anything that can turn PDF bytes into a Word document.
#[async_trait]
pub trait ConversionService: Send + Sync {
    fn endpoint(&self) -> &str;

    async fn convert(&self, file_name: &str, pdf: Vec<u8>) -> Result<Vec<u8>, ConvertError>;
}

/// Talks to the remote `/convert` endpoint with a single multipart POST.
#[derive(Clone)]
pub struct HttpConverter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpConverter {
    pub fn new(config: &Config) -> Result<Self, ConvertError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl ConversionService for HttpConverter {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn convert(&self, file_name: &str, pdf: Vec<u8>) -> Result<Vec<u8>, ConvertError> {
        let size = pdf.len();
        let part = Part::bytes(pdf)
            .file_name(file_name.to_string())
            .mime_str(PDF_MIME)?;
        let form = Form::new().part("file", part);

        info!(endpoint = %self.endpoint, file = file_name, size, "Sending file to conversion service");

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        info!(status = status.as_u16(), "Conversion service responded");

        if !status.is_success() {
            let body = response.text().await?;
            warn!(status = status.as_u16(), body = %body, "Conversion rejected");
            return Err(ConvertError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

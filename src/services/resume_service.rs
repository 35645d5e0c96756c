use bytes::Bytes;

use crate::error::{Error, Result};

const PDF_MAGIC: &[u8] = b"%PDF";

pub struct ResumeService;

impl ResumeService {
    /// Extracts plain text from an uploaded PDF resume.
    pub async fn extract_text(data: Bytes) -> Result<String> {
        if data.is_empty() {
            return Err(Error::BadRequest("No file uploaded".to_string()));
        }
        if !data.starts_with(PDF_MAGIC) {
            return Err(Error::BadRequest("Only PDF files are supported".to_string()));
        }

        let size = data.len();
        // pdf-extract is CPU-bound and may panic on malformed files
        let extracted = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&data).map_err(|e| format!("{:?}", e))
        })
        .await
        .map_err(|e| {
            tracing::error!("PDF extraction task aborted: {}", e);
            Error::Upstream("Failed to parse PDF".to_string())
        })?
        .map_err(|e| {
            tracing::error!("PDF extraction failed: {}", e);
            Error::Upstream("Failed to parse PDF".to_string())
        })?;

        let text = normalize_text(&extracted);
        tracing::info!(bytes = size, chars = text.len(), "extracted resume text");
        Ok(text)
    }
}

fn normalize_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

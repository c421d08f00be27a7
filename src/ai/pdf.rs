//! PDF 文本提取

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::{LmsError, Result};
use crate::utils::multipart::{public_file_name, stored_file_path};

/// 读取 PDF 来源（本地上传文件或远程 URL）并提取纯文本
pub async fn extract_pdf_text(source: &str) -> Result<String> {
    let bytes = load_pdf_bytes(source).await?;

    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| LmsError::file_operation(format!("PDF 解析任务失败: {e}")))?
        .map_err(|e| LmsError::validation(format!("gagal membaca PDF: {e}")))?;

    Ok(text)
}

async fn load_pdf_bytes(source: &str) -> Result<Vec<u8>> {
    // 本服务上传的文件直接从上传目录读取
    if let Some(path) = public_file_name(source).and_then(stored_file_path)
        && tokio::fs::try_exists(&path).await.unwrap_or(false)
    {
        debug!("Reading PDF from upload dir: {}", path.display());
        return Ok(tokio::fs::read(&path).await?);
    }

    if source.starts_with("http://") || source.starts_with("https://") {
        debug!("Downloading PDF from {}", source);
        let client = Client::builder()
            .timeout(Duration::from_secs(AppConfig::get().ai.timeout))
            .build()?;
        let response = client.get(source).send().await?;
        if !response.status().is_success() {
            return Err(LmsError::validation(format!(
                "gagal mengunduh PDF: {}",
                response.status()
            )));
        }
        return Ok(response.bytes().await?.to_vec());
    }

    Err(LmsError::validation("file PDF tidak ditemukan"))
}

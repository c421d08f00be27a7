//! multipart 表单读取与文件落盘

use actix_multipart::{Field, Multipart};
use actix_web::HttpRequest;
use futures_util::{StreamExt, TryStreamExt};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::errors::{LmsError, Result};
use crate::utils::file_magic::{extension_of, validate_magic_bytes};

/// 已保存到上传目录的文件
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub file_name: String,
    pub original_name: String,
    pub size: i64,
}

/// 文件字段的接收规则
#[derive(Debug, Clone, Copy)]
pub struct FileRule<'a> {
    pub field: &'a str,
    /// 允许的扩展名；为空时使用配置中的 upload.allowed_types
    pub extensions: &'a [&'a str],
}

/// 解析后的表单：文本字段与已保存的文件
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, StoredFile>,
}

impl MultipartForm {
    /// 去除首尾空白后的非空文本字段
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// 原样返回的文本字段（保留空白，用于正文类内容）
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn parse<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.text(name).and_then(|v| v.parse::<T>().ok())
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(
            self.text(name).map(|v| v.to_lowercase()).as_deref(),
            Some("true" | "1" | "on" | "yes")
        )
    }

    pub fn file(&self, name: &str) -> Option<&StoredFile> {
        self.files.get(name)
    }

    /// 删除本次请求已保存的文件（业务校验失败时调用）
    pub fn discard_files(&self) {
        let dir = &AppConfig::get().upload.dir;
        for file in self.files.values() {
            let _ = fs::remove_file(Path::new(dir).join(&file.file_name));
        }
    }
}

/// 读取整个 multipart 表单，按规则保存文件字段
pub async fn collect_form(payload: &mut Multipart, rules: &[FileRule<'_>]) -> Result<MultipartForm> {
    let mut form = MultipartForm::default();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| LmsError::validation(format!("Form tidak valid: {e}")))?
    {
        let name = field_name(&field);
        let is_file = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .is_some();

        if is_file {
            match rules.iter().find(|r| r.field == name) {
                Some(rule) => {
                    if form.files.contains_key(&name) {
                        form.discard_files();
                        return Err(LmsError::validation("Hanya boleh mengunggah satu file"));
                    }
                    match save_field(&mut field, rule.extensions).await {
                        Ok(stored) => {
                            form.files.insert(name, stored);
                        }
                        Err(e) => {
                            form.discard_files();
                            return Err(e);
                        }
                    }
                }
                None => drain(&mut field).await?,
            }
        } else {
            let bytes = read_to_end(&mut field, AppConfig::get().server.limits.max_payload_size).await?;
            form.fields
                .insert(name, String::from_utf8_lossy(&bytes).into_owned());
        }
    }

    Ok(form)
}

/// 读取指定文件字段的原始字节（不落盘），返回 (原始文件名, 内容)
pub async fn read_file_bytes(
    payload: &mut Multipart,
    field_name_wanted: &str,
) -> Result<Option<(String, Vec<u8>)>> {
    let max_size = AppConfig::get().upload.max_size;
    let mut found = None;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| LmsError::validation(format!("Form tidak valid: {e}")))?
    {
        if found.is_none() && field_name(&field) == field_name_wanted {
            let original = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .unwrap_or_default()
                .to_string();
            let bytes = read_to_end(&mut field, max_size).await?;
            found = Some((original, bytes));
        } else {
            drain(&mut field).await?;
        }
    }

    Ok(found)
}

/// 组装上传文件的公开访问地址
pub fn public_url(req: &HttpRequest, file_name: &str) -> String {
    let base = &AppConfig::get().app.public_base_url;
    if base.is_empty() {
        let info = req.connection_info();
        format!("{}://{}/storage/public/{}", info.scheme(), info.host(), file_name)
    } else {
        format!("{}/storage/public/{}", base.trim_end_matches('/'), file_name)
    }
}

const PUBLIC_PREFIX: &str = "/storage/public/";

/// 上传目录中的文件路径；文件名含路径分隔符或 `..` 时拒绝
pub fn stored_file_path(file_name: &str) -> Option<PathBuf> {
    if file_name.is_empty()
        || file_name.contains("..")
        || file_name.contains('/')
        || file_name.contains('\\')
    {
        return None;
    }
    Some(Path::new(&AppConfig::get().upload.dir).join(file_name))
}

/// 从公开地址（完整 URL 或 `/storage/public/...` 路径）中取出文件名
pub fn public_file_name(url: &str) -> Option<&str> {
    let start = url.find(PUBLIC_PREFIX)? + PUBLIC_PREFIX.len();
    let rest = &url[start..];
    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    Some(&rest[..end]).filter(|name| !name.is_empty())
}

fn field_name(field: &Field) -> String {
    field
        .content_disposition()
        .and_then(|cd| cd.get_name())
        .unwrap_or_default()
        .to_string()
}

async fn read_to_end(field: &mut Field, limit: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.next().await {
        let data = chunk.map_err(|e| LmsError::validation(format!("Gagal membaca form: {e}")))?;
        if buf.len() + data.len() > limit {
            return Err(LmsError::validation("Ukuran file melebihi batas"));
        }
        buf.extend_from_slice(&data);
    }
    Ok(buf)
}

async fn drain(field: &mut Field) -> Result<()> {
    while let Some(chunk) = field.next().await {
        chunk.map_err(|e| LmsError::validation(format!("Gagal membaca form: {e}")))?;
    }
    Ok(())
}

async fn save_field(field: &mut Field, extensions: &[&str]) -> Result<StoredFile> {
    let config = AppConfig::get();
    let upload_dir = &config.upload.dir;

    let original_name = field
        .content_disposition()
        .and_then(|cd| cd.get_filename())
        .unwrap_or_default()
        .to_string();

    // 扩展名白名单
    let extension = extension_of(&original_name).unwrap_or_default();
    let allowed = if extensions.is_empty() {
        config
            .upload
            .allowed_types
            .iter()
            .any(|t| t.to_lowercase() == extension)
    } else {
        extensions.contains(&extension.as_str())
    };
    if extension.is_empty() || !allowed {
        return Err(LmsError::validation(format!(
            "Tipe file tidak diizinkan: {original_name}"
        )));
    }

    // 确保上传目录存在
    if !Path::new(upload_dir).exists() {
        fs::create_dir_all(upload_dir)
            .map_err(|e| LmsError::file_operation(format!("创建上传目录失败: {e}")))?;
    }

    let nanos = chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| chrono::Utc::now().timestamp_micros() * 1000);
    let file_name = format!("{nanos}{extension}");
    let file_path = Path::new(upload_dir).join(&file_name);
    let mut f = File::create(&file_path)
        .map_err(|e| LmsError::file_operation(format!("文件创建失败: {e}")))?;

    let mut total_size: usize = 0;
    let mut first_chunk = true;
    while let Some(chunk) = field.next().await {
        let data = match chunk {
            Ok(data) => data,
            Err(e) => {
                let _ = fs::remove_file(&file_path);
                return Err(LmsError::validation(format!("Gagal membaca file: {e}")));
            }
        };

        // 第一个 chunk 时验证魔术字节
        if first_chunk {
            first_chunk = false;
            if !validate_magic_bytes(&data, &extension) {
                let _ = fs::remove_file(&file_path);
                return Err(LmsError::validation(
                    "Isi file tidak sesuai dengan ekstensinya",
                ));
            }
        }

        total_size += data.len();
        if total_size > config.upload.max_size {
            let _ = fs::remove_file(&file_path);
            return Err(LmsError::validation("Ukuran file melebihi batas"));
        }
        f.write_all(&data)?;
    }

    if total_size == 0 {
        let _ = fs::remove_file(&file_path);
        return Err(LmsError::validation("File kosong"));
    }

    Ok(StoredFile {
        file_name,
        original_name,
        size: total_size as i64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_file_name() {
        assert_eq!(
            public_file_name("http://localhost:8080/storage/public/123.pdf"),
            Some("123.pdf")
        );
        assert_eq!(public_file_name("/storage/public/abc.png?v=2"), Some("abc.png"));
        assert_eq!(public_file_name("/storage/public/"), None);
        assert_eq!(public_file_name("https://example.com/file.pdf"), None);
    }

    #[test]
    fn test_stored_file_path_rejects_traversal() {
        assert!(stored_file_path("../secret.db").is_none());
        assert!(stored_file_path("a/b.pdf").is_none());
        assert!(stored_file_path("a\\b.pdf").is_none());
        assert!(stored_file_path("").is_none());
        assert!(stored_file_path("1700000000.pdf").is_some());
    }
}

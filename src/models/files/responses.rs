use serde::Serialize;
use ts_rs::TS;

/// 文件上传结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "file.ts")]
pub struct FileUploadResponse {
    /// 可公开访问的地址
    pub url: String,
    /// 存储文件名
    pub file_name: String,
    /// 文件大小(字节)
    pub size: i64,
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::ErrorCode;

/// 所有端点共用的响应信封
///
/// `code` 为 0 表示成功，其余取自 [`ErrorCode`]；`message` 为面向用户的印尼语提示。
/// `data` 为空时不输出该字段。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    fn envelope(code: ErrorCode, data: Option<T>, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self::envelope(ErrorCode::Success, Some(data), message)
    }

    pub fn is_success(&self) -> bool {
        self.code == ErrorCode::Success as i32
    }
}

impl ApiResponse<()> {
    /// 删除、登出等无返回数据的成功响应
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self::envelope(ErrorCode::Success, None, message)
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::envelope(code, None, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_envelope_omits_data() {
        let body = serde_json::to_value(ApiResponse::success_empty("Kelas berhasil dihapus")).unwrap();
        assert_eq!(body["code"], 0);
        assert_eq!(body["message"], "Kelas berhasil dihapus");
        assert!(body.get("data").is_none());
        assert!(body["timestamp"].is_string());
    }

    #[test]
    fn test_error_envelope_carries_code() {
        let response = ApiResponse::error_empty(ErrorCode::Conflict, "Kode kelas sudah digunakan");
        assert!(!response.is_success());
        assert_eq!(response.code, ErrorCode::Conflict as i32);

        let ok = ApiResponse::success(42_i64, "OK");
        assert!(ok.is_success());
        assert_eq!(serde_json::to_value(&ok).unwrap()["data"], 42);
    }
}

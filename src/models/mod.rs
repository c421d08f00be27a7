//! 数据模型定义
//!
//! 每个业务域下分为 entities（业务实体）、requests（请求体）与 responses（响应体）。

pub mod accessibility;
pub mod assignments;
pub mod auth;
pub mod common;
pub mod courses;
pub mod dashboard;
pub mod files;
pub mod users;

pub use common::response::ApiResponse;

use serde::Serialize;

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1009,
    InternalServerError = 1500,
    ExternalServiceFailed = 1502,

    // 认证
    AuthFailed = 2000,
    RegisterFailed = 2001,
    VerificationTokenInvalid = 2002,

    // 用户
    UserNotFound = 3000,
    UserEmailAlreadyExists = 3001,
    UserEmailInvalid = 3002,
    UserPasswordInvalid = 3003,
    UserNameInvalid = 3004,
    UserRoleInvalid = 3005,

    // 文件
    FileNotFound = 4000,

    // 导入
    ImportFileMissing = 4100,
    ImportFileParseFailed = 4101,

    // 课程
    CourseNotFound = 5000,
    CoursePermissionDenied = 5001,
    CourseClassCodeInvalid = 5002,
    CourseAlreadyJoined = 5003,
    CourseInUse = 5004,
    ModuleNotFound = 5100,
    MaterialNotFound = 5200,
    MaterialSummaryUnsupported = 5201,

    // 作业
    AssignmentNotFound = 6000,
    SubmissionNotFound = 6001,
    SubmissionRejected = 6002,
}

impl ErrorCode {
    /// 由 HTTP 状态码推导通用错误码
    pub fn from_status(status: actix_web::http::StatusCode) -> Self {
        match status.as_u16() {
            400 => ErrorCode::BadRequest,
            401 => ErrorCode::Unauthorized,
            403 => ErrorCode::Forbidden,
            404 => ErrorCode::NotFound,
            409 => ErrorCode::Conflict,
            502 => ErrorCode::ExternalServiceFailed,
            _ => ErrorCode::InternalServerError,
        }
    }
}

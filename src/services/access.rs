//! 服务层共用的身份与归属校验

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::middlewares::RequireJWT;
use crate::models::courses::entities::Course;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub(crate) const MSG_COURSE_NOT_FOUND: &str = "Kelas tidak ditemukan";
pub(crate) const MSG_COURSE_FORBIDDEN: &str = "Anda tidak memiliki akses ke kelas ini";

/// 构造带统一响应体的错误
pub(crate) fn reject(
    status: StatusCode,
    code: ErrorCode,
    message: impl Into<String>,
) -> actix_web::Error {
    let message = message.into();
    let response = HttpResponse::build(status).json(ApiResponse::error_empty(code, &message));
    InternalError::from_response(message, response).into()
}

/// 从 app_data 中取出存储
pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            tracing::error!("Storage not found in app data");
            reject(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalServerError,
                "Storage tidak tersedia",
            )
        })
}

/// 当前登录用户（需在 RequireJWT 之后调用）
pub(crate) fn current_user(request: &HttpRequest) -> ActixResult<User> {
    RequireJWT::extract_user_claims(request).ok_or_else(|| {
        reject(
            StatusCode::UNAUTHORIZED,
            ErrorCode::Unauthorized,
            "Header otorisasi diperlukan",
        )
    })
}

/// 讲师本人或管理员
pub(crate) fn owns(user: &User, teacher_id: i64) -> bool {
    user.is_admin() || user.id == teacher_id
}

/// 校验课程归属，返回课程（不含模块）
pub(crate) async fn owned_course(
    storage: &Arc<dyn Storage>,
    user: &User,
    course_id: i64,
) -> ActixResult<Course> {
    let course = storage.get_course_by_id(course_id).await?.ok_or_else(|| {
        reject(
            StatusCode::NOT_FOUND,
            ErrorCode::CourseNotFound,
            MSG_COURSE_NOT_FOUND,
        )
    })?;

    ensure_course_owner(user, &course)?;
    Ok(course)
}

pub(crate) fn ensure_course_owner(user: &User, course: &Course) -> ActixResult<()> {
    if owns(user, course.teacher_id) {
        Ok(())
    } else {
        tracing::info!(
            "User {} denied access to course {} owned by {}",
            user.id,
            course.id,
            course.teacher_id
        );
        Err(reject(
            StatusCode::FORBIDDEN,
            ErrorCode::CoursePermissionDenied,
            MSG_COURSE_FORBIDDEN,
        ))
    }
}

pub(crate) fn bad_request(code: ErrorCode, message: impl Into<String>) -> actix_web::Error {
    reject(StatusCode::BAD_REQUEST, code, message)
}

pub(crate) fn not_found(code: ErrorCode, message: impl Into<String>) -> actix_web::Error {
    reject(StatusCode::NOT_FOUND, code, message)
}

pub(crate) fn forbidden(code: ErrorCode, message: impl Into<String>) -> actix_web::Error {
    reject(StatusCode::FORBIDDEN, code, message)
}

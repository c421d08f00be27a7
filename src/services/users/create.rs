use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};
use std::sync::Arc;

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    accessibility::entities::AccessibilityProfile,
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, StudentAccountRequest},
    },
};
use crate::services::access::{bad_request, current_user, reject};
use crate::storage::Storage;
use crate::utils::password::hash_password_blocking;
use crate::utils::validate::validate_account;

pub async fn create_student(
    service: &UserService,
    request: &HttpRequest,
    body: StudentAccountRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let lecturer = current_user(request)?;

    let student = create_student_account(&storage, &lecturer, body, None).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        student,
        "Akun mahasiswa berhasil dibuat",
    )))
}

/// 校验并创建学生账户（含无障碍偏好），可选地加入课程
pub(crate) async fn create_student_account(
    storage: &Arc<dyn Storage>,
    creator: &User,
    body: StudentAccountRequest,
    enroll_course_id: Option<i64>,
) -> ActixResult<User> {
    let name = body.name.trim().to_string();
    let email = body.email.trim().to_lowercase();

    validate_account(&name, &email, &body.password)
        .map_err(|msg| bad_request(ErrorCode::BadRequest, msg))?;

    if storage.get_user_by_email(&email).await?.is_some() {
        return Err(email_taken());
    }

    let password_hash = hash_password_blocking(body.password).await?;
    let profile = AccessibilityProfile::from_categories(0, &body.disabilities);

    let user = CreateUserRequest {
        name,
        email,
        password_hash,
        role: UserRole::Student,
        created_by_id: Some(creator.id),
        is_verified: true,
        verification_token: None,
    };

    match storage.create_student(user, profile, enroll_course_id).await {
        Ok(student) => {
            tracing::info!("Lecturer {} created student {}", creator.id, student.id);
            Ok(student)
        }
        Err(e) if e.is_unique_violation_on("email") => Err(email_taken()),
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn email_taken() -> actix_web::Error {
    reject(
        StatusCode::CONFLICT,
        ErrorCode::UserEmailAlreadyExists,
        "email sudah ada",
    )
}

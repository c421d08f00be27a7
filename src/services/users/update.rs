use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    accessibility::entities::AccessibilityProfile,
    users::{
        entities::{User, UserRole},
        requests::{StudentAccountRequest, UpdateUserRequest},
    },
};
use crate::services::access::{bad_request, current_user, forbidden, not_found};
use crate::storage::Storage;
use crate::utils::password::hash_password_blocking;
use crate::utils::validate::{validate_email, validate_name, validate_password};

pub async fn update_student(
    service: &UserService,
    request: &HttpRequest,
    student_id: i64,
    body: StudentAccountRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let lecturer = current_user(request)?;

    let student = managed_student(&storage, &lecturer, student_id).await?;

    let name = body.name.trim().to_string();
    let email = body.email.trim().to_lowercase();
    validate_name(&name).map_err(|msg| bad_request(ErrorCode::UserNameInvalid, msg))?;
    validate_email(&email).map_err(|msg| bad_request(ErrorCode::UserEmailInvalid, msg))?;

    // 密码为空时保持不变
    let password_hash = if body.password.is_empty() {
        None
    } else {
        validate_password(&body.password)
            .map_err(|msg| bad_request(ErrorCode::UserPasswordInvalid, msg))?;
        Some(hash_password_blocking(body.password).await?)
    };

    if email != student.email && storage.get_user_by_email(&email).await?.is_some() {
        return Err(super::create::email_taken());
    }

    let update = UpdateUserRequest {
        name: Some(name),
        email: Some(email),
        password_hash,
    };
    let profile = AccessibilityProfile::from_categories(student.id, &body.disabilities);
    let updated = match storage.update_student(student.id, update, profile).await {
        Ok(Some(user)) => user,
        Ok(None) => return Err(student_not_found()),
        Err(e) if e.is_unique_violation_on("email") => return Err(super::create::email_taken()),
        Err(e) => return Err(e.into()),
    };

    tracing::info!("Lecturer {} updated student {}", lecturer.id, student.id);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        updated,
        "Data siswa berhasil diperbarui",
    )))
}

/// 讲师只能管理自己创建的学生
pub(super) async fn managed_student(
    storage: &Arc<dyn Storage>,
    lecturer: &User,
    student_id: i64,
) -> ActixResult<User> {
    let student = storage
        .get_user_by_id(student_id)
        .await?
        .filter(|u| u.role == UserRole::Student)
        .ok_or_else(student_not_found)?;

    if !lecturer.is_admin() && student.created_by_id != Some(lecturer.id) {
        return Err(forbidden(
            ErrorCode::Forbidden,
            "Anda tidak memiliki akses ke data siswa ini",
        ));
    }

    Ok(student)
}

fn student_not_found() -> actix_web::Error {
    not_found(ErrorCode::UserNotFound, "Siswa tidak ditemukan")
}

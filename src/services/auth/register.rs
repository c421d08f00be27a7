use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AuthService;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::requests::RegisterRequest,
    users::{entities::UserRole, requests::CreateUserRequest},
};
use crate::utils::password::hash_password_blocking;
use crate::utils::random_code::generate_hex_token;
use crate::utils::validate::{validate_email, validate_name, validate_password};

pub async fn handle_register(
    service: &AuthService,
    request: &HttpRequest,
    register_request: RegisterRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let name = register_request.name.trim().to_string();
    let email = register_request.email.trim().to_lowercase();

    // 基础校验
    if let Err(msg) = validate_name(&name) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserNameInvalid,
            msg,
        )));
    }
    if let Err(msg) = validate_email(&email) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserEmailInvalid,
            msg,
        )));
    }
    if let Err(msg) = validate_password(&register_request.password) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserPasswordInvalid,
            msg,
        )));
    }
    if register_request.password != register_request.confirm_password {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserPasswordInvalid,
            "Konfirmasi password tidak cocok",
        )));
    }

    let Some(role) = UserRole::from_registration(&register_request.role) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserRoleInvalid,
            "role tidak valid (pilih 'dosen' atau 'mahasiswa')",
        )));
    };

    if storage.get_user_by_email(&email).await?.is_some() {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::UserEmailAlreadyExists,
            "email sudah ada",
        )));
    }

    let password_hash = hash_password_blocking(register_request.password).await?;

    let user = CreateUserRequest {
        name,
        email,
        password_hash,
        role,
        created_by_id: None,
        // 暂未接入邮件发送，注册即视为已验证
        is_verified: true,
        verification_token: Some(generate_hex_token(32)),
    };

    match storage.create_user(user).await {
        Ok(user) => {
            info!("User {} registered as {}", user.id, user.role);
            Ok(HttpResponse::Created().json(ApiResponse::success(user, "Pengguna berhasil terdaftar")))
        }
        Err(e) if e.is_unique_violation_on("email") => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::UserEmailAlreadyExists, "email sudah ada"),
        )),
        Err(e) => {
            error!("Registration failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("Registrasi gagal: {}", e.message()),
                )),
            )
        }
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AuthService;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::LoginRequest, responses::LoginResponse},
};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

const MSG_LOGIN_FAILED: &str = "email atau password salah";

pub async fn handle_login(
    service: &AuthService,
    request: &HttpRequest,
    login_request: LoginRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let config = service.get_config();

    let email = login_request.email.trim().to_lowercase();

    // 1. 根据邮箱获取用户
    let Some(user) = storage.get_user_by_email(&email).await? else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            MSG_LOGIN_FAILED,
        )));
    };

    // 2. 验证密码
    if !verify_password(&login_request.password, &user.password_hash) {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            MSG_LOGIN_FAILED,
        )));
    }

    // 3. 生成令牌
    match JwtUtils::generate_access_token(user.id, &user.role) {
        Ok(token) => {
            tracing::info!("User {} logged in successfully", user.id);
            let response = LoginResponse {
                token,
                expires_in: config.jwt.access_token_expiry * 60,
                user,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Login berhasil")))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login gagal, token tidak dapat dibuat",
                )),
            )
        }
    }
}

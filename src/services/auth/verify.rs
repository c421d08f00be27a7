use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AuthService;
use crate::models::{ApiResponse, ErrorCode, auth::requests::VerifyEmailQuery};

pub async fn handle_verify_email(
    service: &AuthService,
    request: &HttpRequest,
    query: VerifyEmailQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let token = query.token.trim();
    if token.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::VerificationTokenInvalid,
            "Token verifikasi wajib diisi",
        )));
    }

    let Some(user) = storage.get_user_by_verification_token(token).await? else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::VerificationTokenInvalid,
            "Token verifikasi tidak valid",
        )));
    };

    if user.is_verified {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::VerificationTokenInvalid,
            "Email sudah diverifikasi",
        )));
    }

    storage.mark_user_verified(user.id).await?;
    tracing::info!("User {} verified email", user.id);

    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Email berhasil diverifikasi")))
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AuthService;
use crate::models::{ApiResponse, auth::responses::MeResponse};
use crate::services::access::current_user;

pub async fn handle_me(service: &AuthService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let accessibility = storage.get_accessibility_profile(user.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MeResponse {
            user,
            accessibility,
        },
        "User detail",
    )))
}

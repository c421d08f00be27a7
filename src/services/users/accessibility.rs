use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{
    ApiResponse,
    accessibility::{
        entities::AccessibilityProfile, requests::UpdateAccessibilityRequest,
        responses::UpdateAccessibilityResponse,
    },
};
use crate::services::access::current_user;

const CONFIRMATION_MSG: &str =
    "Terima kasih informasinya! Berdasarkan pilihanmu, kami telah menyiapkan:";

pub async fn update_accessibility(
    service: &UserService,
    request: &HttpRequest,
    body: UpdateAccessibilityRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    // 整体替换
    let profile = AccessibilityProfile::from_categories(user.id, &body.categories);
    let profile = storage.upsert_accessibility_profile(profile).await?;
    let active_features = profile.active_features();

    tracing::info!(
        "User {} updated accessibility profile ({} features)",
        user.id,
        active_features.len()
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        UpdateAccessibilityResponse {
            profile,
            confirmation_msg: CONFIRMATION_MSG.to_string(),
            active_features,
        },
        "Preferensi disabilitas berhasil disimpan",
    )))
}

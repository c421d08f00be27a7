use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{MaterialService, material_with_course};
use crate::models::courses::responses::CompletionToggleResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{current_user, forbidden};
use crate::services::courses::detail::MSG_NOT_JOINED;

pub async fn toggle_completion(
    service: &MaterialService,
    request: &HttpRequest,
    material_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let (_, course) = material_with_course(&storage, material_id).await?;
    if !storage.is_enrolled(course.id, user.id).await? {
        return Err(forbidden(ErrorCode::CoursePermissionDenied, MSG_NOT_JOINED));
    }

    let completed = storage.toggle_material_completion(user.id, material_id).await?;
    let message = if completed {
        "Material ditandai selesai"
    } else {
        "Tanda selesai dihapus"
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CompletionToggleResponse { completed },
        message,
    )))
}

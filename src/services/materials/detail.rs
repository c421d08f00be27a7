use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{MaterialService, material_forbidden, material_with_course};
use crate::models::ApiResponse;
use crate::services::access::{current_user, owns};

pub async fn get_material(
    service: &MaterialService,
    request: &HttpRequest,
    material_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let (mut material, course) = material_with_course(&storage, material_id).await?;

    if owns(&user, course.teacher_id) {
        material.is_completed = false;
    } else if storage.is_enrolled(course.id, user.id).await? {
        material.is_completed = storage.is_material_completed(user.id, material_id).await?;
    } else {
        return Err(material_forbidden());
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(material, "Detail materi berhasil diambil")))
}

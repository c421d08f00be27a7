use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MaterialService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{current_user, forbidden, not_found, owns};

pub async fn delete_module(
    service: &MaterialService,
    request: &HttpRequest,
    module_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let module = storage
        .get_module_by_id(module_id)
        .await?
        .ok_or_else(|| not_found(ErrorCode::ModuleNotFound, "modul tidak ditemukan"))?;
    let course = storage
        .get_course_by_id(module.course_id)
        .await?
        .ok_or_else(|| not_found(ErrorCode::ModuleNotFound, "modul tidak ditemukan"))?;

    if !owns(&user, course.teacher_id) {
        return Err(forbidden(
            ErrorCode::CoursePermissionDenied,
            "unauthorized: anda tidak memiliki akses ke modul ini",
        ));
    }

    storage.delete_module(module_id).await?;
    tracing::info!("Lecturer {} deleted module {}", user.id, module_id);

    Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
        "Modul dan materi di dalamnya berhasil dihapus",
    )))
}

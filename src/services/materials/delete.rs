use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{MSG_MATERIAL_NOT_FOUND, MaterialService, owned_material};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{current_user, not_found};

pub async fn delete_material(
    service: &MaterialService,
    request: &HttpRequest,
    material_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    owned_material(&storage, &user, material_id).await?;

    if !storage.delete_material(material_id).await? {
        return Err(not_found(ErrorCode::MaterialNotFound, MSG_MATERIAL_NOT_FOUND));
    }
    tracing::info!("Lecturer {} deleted material {}", user.id, material_id);

    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Materi berhasil dihapus")))
}

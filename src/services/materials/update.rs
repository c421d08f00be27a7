use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::form::read_material_form;
use super::{MSG_MATERIAL_NOT_FOUND, MaterialService, owned_material};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{current_user, not_found};

pub async fn update_material(
    service: &MaterialService,
    request: &HttpRequest,
    material_id: i64,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let (existing, _) = owned_material(&storage, &user, material_id).await?;
    let form = read_material_form(request, payload).await?;

    // 仅当上传了文件或提供了新地址时替换 source_url
    let mut input = form.input.clone();
    input.source_url = form
        .uploaded_url
        .clone()
        .or(input.source_url)
        .or(existing.source_url);

    match storage.update_material(material_id, input).await {
        Ok(Some(material)) => {
            tracing::info!("Lecturer {} updated material {}", user.id, material_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(material, "Materi berhasil diperbarui")))
        }
        Ok(None) => {
            form.discard_upload();
            Err(not_found(ErrorCode::MaterialNotFound, MSG_MATERIAL_NOT_FOUND))
        }
        Err(e) => {
            form.discard_upload();
            Err(e.into())
        }
    }
}

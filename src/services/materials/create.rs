use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MaterialService;
use super::form::read_material_form;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{current_user, forbidden, not_found, owns};

pub async fn create_material(
    service: &MaterialService,
    request: &HttpRequest,
    module_id: i64,
    payload: Multipart,
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

    let form = read_material_form(request, payload).await?;
    let mut input = form.input.clone();
    if let Some(url) = &form.uploaded_url {
        input.source_url = Some(url.clone());
    }

    match storage.create_material(module_id, input).await {
        Ok(material) => {
            tracing::info!(
                "Lecturer {} added material {} to module {}",
                user.id,
                material.id,
                module_id
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(material, "Materi berhasil ditambahkan")))
        }
        Err(e) => {
            form.discard_upload();
            Err(e.into())
        }
    }
}

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use super::create::class_code_taken;
use super::form::read_course_form;
use crate::models::courses::requests::UpdateCourseRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{MSG_COURSE_NOT_FOUND, current_user, not_found, owned_course};

pub async fn update_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    owned_course(&storage, &user, course_id).await?;
    let form = read_course_form(request, payload).await?;

    let update = UpdateCourseRequest {
        title: form.title.clone(),
        description: form.description.clone(),
        thumbnail: form.thumbnail.clone(),
        class_code: form.class_code.clone(),
        status: form.status,
        modules: form.modules.clone(),
    };

    match storage.update_course(course_id, update).await {
        Ok(Some(course)) => {
            tracing::info!("Lecturer {} updated course {}", user.id, course_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(course, "Kelas berhasil diperbarui")))
        }
        Ok(None) => {
            form.discard_upload();
            Err(not_found(ErrorCode::CourseNotFound, MSG_COURSE_NOT_FOUND))
        }
        Err(e) => {
            form.discard_upload();
            if e.is_unique_violation_on("class_code") {
                Err(class_code_taken())
            } else {
                Err(e.into())
            }
        }
    }
}

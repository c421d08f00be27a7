use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use super::CourseService;
use super::form::read_course_form;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{current_user, reject};
use crate::utils::random_code::generate_class_code;

const CLASS_CODE_LEN: usize = 6;

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let form = read_course_form(request, payload).await?;

    let course = CreateCourseRequest {
        teacher_id: user.id,
        title: form.title.clone(),
        description: form.description.clone(),
        thumbnail: form.thumbnail.clone(),
        class_code: form
            .class_code
            .clone()
            .unwrap_or_else(|| generate_class_code(CLASS_CODE_LEN)),
        status: form.status.unwrap_or_default(),
        modules: form.modules.clone(),
    };

    match storage.create_course(course).await {
        Ok(course) => {
            tracing::info!("Lecturer {} created course {}", user.id, course.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(course, "Kelas berhasil dibuat")))
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

pub(super) fn class_code_taken() -> actix_web::Error {
    reject(
        StatusCode::CONFLICT,
        ErrorCode::CourseClassCodeInvalid,
        "Kode kelas sudah digunakan",
    )
}

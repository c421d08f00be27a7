use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{
    MSG_COURSE_NOT_FOUND, current_user, not_found, owned_course, reject,
};

pub async fn delete_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    owned_course(&storage, &user, course_id).await?;

    match storage.delete_course(course_id).await {
        Ok(true) => {
            tracing::info!("Lecturer {} deleted course {}", user.id, course_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Kelas berhasil dihapus")))
        }
        Ok(false) => Err(not_found(ErrorCode::CourseNotFound, MSG_COURSE_NOT_FOUND)),
        Err(e) if e.is_conflict() => Err(reject(
            StatusCode::CONFLICT,
            ErrorCode::CourseInUse,
            "Kelas tidak dapat dihapus karena masih digunakan (terdapat siswa/modul di dalamnya).",
        )),
        Err(e) => Err(e.into()),
    }
}

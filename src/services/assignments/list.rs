use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::ApiResponse;
use crate::services::access::{current_user, owned_course};

pub async fn list_course_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    owned_course(&storage, &user, course_id).await?;
    let assignments = storage.list_course_assignments(course_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        assignments,
        "Daftar tugas berhasil diambil",
    )))
}

pub async fn list_my_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let assignments = storage.list_student_assignments(user.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        assignments,
        "Daftar tugas saya berhasil diambil",
    )))
}

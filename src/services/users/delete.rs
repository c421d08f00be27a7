use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use super::update::managed_student;
use crate::models::ApiResponse;
use crate::services::access::current_user;

pub async fn delete_student(
    service: &UserService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let lecturer = current_user(request)?;

    let student = managed_student(&storage, &lecturer, student_id).await?;
    storage.delete_user(student.id).await?;

    tracing::info!("Lecturer {} deleted student {}", lecturer.id, student.id);

    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Data siswa berhasil dihapus")))
}

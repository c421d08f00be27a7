use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::ApiResponse;
use crate::models::users::requests::StudentAccountRequest;
use crate::services::access::{current_user, owned_course};
use crate::services::users::create::create_student_account;

pub async fn list_students(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    owned_course(&storage, &user, course_id).await?;
    let students = storage.list_course_students(course_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        students,
        "Daftar siswa berhasil diambil",
    )))
}

pub async fn create_and_enroll_student(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    body: StudentAccountRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let course = owned_course(&storage, &user, course_id).await?;
    let student = create_student_account(&storage, &user, body, Some(course.id)).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        student,
        "Siswa berhasil dibuat dan ditambahkan ke kelas",
    )))
}

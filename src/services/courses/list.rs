use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::ApiResponse;
use crate::models::courses::requests::CourseListQuery;
use crate::services::access::current_user;

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
    query: CourseListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let courses = storage.list_teacher_courses(user.id, query).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        courses,
        "Daftar kelas berhasil diambil",
    )))
}

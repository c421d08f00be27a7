use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{
    MSG_COURSE_NOT_FOUND, current_user, forbidden, not_found, owned_course,
};

pub(crate) const MSG_NOT_JOINED: &str = "unauthorized: anda belum bergabung di kelas ini";

pub async fn get_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    owned_course(&storage, &user, course_id).await?;
    let course = storage
        .get_course_detail(course_id)
        .await?
        .ok_or_else(|| not_found(ErrorCode::CourseNotFound, MSG_COURSE_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(course, "Detail kelas berhasil diambil")))
}

pub async fn get_joined_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let mut course = storage
        .get_course_detail(course_id)
        .await?
        .ok_or_else(|| not_found(ErrorCode::CourseNotFound, MSG_COURSE_NOT_FOUND))?;

    if !storage.is_enrolled(course_id, user.id).await? {
        return Err(forbidden(ErrorCode::CoursePermissionDenied, MSG_NOT_JOINED));
    }

    let completed: HashSet<i64> = storage
        .list_completed_material_ids(user.id, course_id)
        .await?
        .into_iter()
        .collect();
    for material in course.materials_mut() {
        material.is_completed = completed.contains(&material.id);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(course, "Detail kelas berhasil diambil")))
}

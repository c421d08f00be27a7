use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::courses::requests::JoinCourseRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{bad_request, current_user};

pub async fn join_course(
    service: &CourseService,
    request: &HttpRequest,
    body: JoinCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let code = body.class_code.trim();
    let course = match storage.get_course_by_code(code).await? {
        Some(course) if !code.is_empty() => course,
        _ => {
            return Err(bad_request(
                ErrorCode::CourseClassCodeInvalid,
                "kelas tidak ditemukan",
            ));
        }
    };

    if course.teacher_id == user.id {
        return Err(bad_request(
            ErrorCode::CourseAlreadyJoined,
            "anda adalah pengajar di kelas ini",
        ));
    }
    if storage.is_enrolled(course.id, user.id).await? {
        return Err(bad_request(
            ErrorCode::CourseAlreadyJoined,
            "anda sudah bergabung di kelas ini",
        ));
    }

    storage.enroll_student(course.id, user.id).await?;
    tracing::info!("Student {} joined course {}", user.id, course.id);

    Ok(HttpResponse::Ok().json(ApiResponse::success(course, "Berhasil bergabung ke kelas")))
}

pub async fn list_joined_courses(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let courses = storage.list_joined_courses(user.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        courses,
        "Daftar kelas yang diikuti berhasil diambil",
    )))
}

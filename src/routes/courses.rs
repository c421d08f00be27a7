use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::assignments::{create_assignment, list_course_assignments};
use crate::middlewares;
use crate::models::courses::requests::{CourseListQuery, JoinCourseRequest};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::StudentAccountRequest;
use crate::services::CourseService;
use crate::utils::SafeIDI64;

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

pub async fn create_course(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.create_course(&req, payload).await
}

pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListQuery>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req, query.into_inner()).await
}

pub async fn get_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(&req, course_id.0).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeIDI64,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.update_course(&req, course_id.0, payload).await
}

pub async fn delete_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(&req, course_id.0).await
}

pub async fn list_course_students(
    req: HttpRequest,
    course_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_students(&req, course_id.0).await
}

pub async fn create_and_enroll_student(
    req: HttpRequest,
    course_id: SafeIDI64,
    body: web::Json<StudentAccountRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_and_enroll_student(&req, course_id.0, body.into_inner())
        .await
}

pub async fn join_course(
    req: HttpRequest,
    body: web::Json<JoinCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.join_course(&req, body.into_inner()).await
}

pub async fn list_joined_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_joined_courses(&req).await
}

pub async fn get_joined_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_joined_course(&req, course_id.0).await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lecturer/courses")
            .wrap(middlewares::RequireRole::new_any(UserRole::lecturer_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_courses))
            .route("", web::post().to(create_course))
            .route("/{id}", web::get().to(get_course))
            .route("/{id}", web::put().to(update_course))
            .route("/{id}", web::delete().to(delete_course))
            .route("/{id}/students", web::get().to(list_course_students))
            .route("/{id}/students", web::post().to(create_and_enroll_student))
            .route("/{id}/assignments", web::get().to(list_course_assignments))
            .route("/{id}/assignments", web::post().to(create_assignment)),
    )
    .service(
        web::scope("/api/v1/student/courses")
            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_joined_courses))
            .route("/join", web::post().to(join_course))
            .route("/{id}", web::get().to(get_joined_course)),
    );
}

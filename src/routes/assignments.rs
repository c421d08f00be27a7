use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::requests::{
    CreateAssignmentRequest, GradeSubmissionRequest, SubmitAssignmentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AssignmentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// 以下两个处理函数挂在课程路由下
pub async fn create_assignment(
    req: HttpRequest,
    course_id: SafeIDI64,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, course_id.0, body.into_inner())
        .await
}

pub async fn list_course_assignments(
    req: HttpRequest,
    course_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_course_assignments(&req, course_id.0)
        .await
}

pub async fn list_submissions(
    req: HttpRequest,
    assignment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_submissions(&req, assignment_id.0)
        .await
}

pub async fn grade_submission(
    req: HttpRequest,
    submission_id: SafeIDI64,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .grade_submission(&req, submission_id.0, body.into_inner())
        .await
}

pub async fn list_my_assignments(req: HttpRequest) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.list_my_assignments(&req).await
}

pub async fn submit_assignment(
    req: HttpRequest,
    assignment_id: SafeIDI64,
    body: web::Json<SubmitAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .submit_assignment(&req, assignment_id.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_assignment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lecturer/assignments")
            .wrap(middlewares::RequireRole::new_any(UserRole::lecturer_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/{id}/submissions", web::get().to(list_submissions)),
    )
    .service(
        web::scope("/api/v1/lecturer/submissions")
            .wrap(middlewares::RequireRole::new_any(UserRole::lecturer_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/{id}/grade", web::put().to(grade_submission)),
    )
    .service(
        web::scope("/api/v1/student/assignments")
            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_my_assignments))
            .route("/{id}/submit", web::post().to(submit_assignment)),
    );
}

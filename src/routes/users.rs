use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::accessibility::requests::UpdateAccessibilityRequest;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::StudentAccountRequest;
use crate::services::UserService;
use crate::utils::SafeIDI64;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

pub async fn update_accessibility(
    req: HttpRequest,
    body: web::Json<UpdateAccessibilityRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_accessibility(&req, body.into_inner())
        .await
}

pub async fn create_student(
    req: HttpRequest,
    body: web::Json<StudentAccountRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_student(&req, body.into_inner()).await
}

pub async fn import_students(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    USER_SERVICE.import_students(&req, payload).await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeIDI64,
    body: web::Json<StudentAccountRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_student(&req, student_id.0, body.into_inner())
        .await
}

pub async fn delete_student(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.delete_student(&req, student_id.0).await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(middlewares::RequireJWT)
            .route("/accessibility", web::put().to(update_accessibility)),
    )
    .service(
        web::scope("/api/v1/lecturer/students")
            .wrap(middlewares::RequireRole::new_any(UserRole::lecturer_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_student))
            .route("/import", web::post().to(import_students))
            .route("/{id}", web::put().to(update_student))
            .route("/{id}", web::delete().to(delete_student)),
    );
}

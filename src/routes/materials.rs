use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::requests::SaveSummaryRequest;
use crate::models::users::entities::UserRole;
use crate::services::MaterialService;
use crate::utils::SafeIDI64;

// 懒加载的全局 MaterialService 实例
static MATERIAL_SERVICE: Lazy<MaterialService> = Lazy::new(MaterialService::new_lazy);

pub async fn delete_module(req: HttpRequest, module_id: SafeIDI64) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE.delete_module(&req, module_id.0).await
}

pub async fn create_material(
    req: HttpRequest,
    module_id: SafeIDI64,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE
        .create_material(&req, module_id.0, payload)
        .await
}

pub async fn update_material(
    req: HttpRequest,
    material_id: SafeIDI64,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE
        .update_material(&req, material_id.0, payload)
        .await
}

pub async fn delete_material(req: HttpRequest, material_id: SafeIDI64) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE.delete_material(&req, material_id.0).await
}

pub async fn generate_summary(
    req: HttpRequest,
    material_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE.generate_summary(&req, material_id.0).await
}

pub async fn save_summary(
    req: HttpRequest,
    material_id: SafeIDI64,
    body: web::Json<SaveSummaryRequest>,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE
        .save_summary(&req, material_id.0, body.into_inner())
        .await
}

pub async fn toggle_completion(
    req: HttpRequest,
    material_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE.toggle_completion(&req, material_id.0).await
}

pub async fn get_material(req: HttpRequest, material_id: SafeIDI64) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE.get_material(&req, material_id.0).await
}

// 配置路由
pub fn configure_material_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lecturer/modules")
            .wrap(middlewares::RequireRole::new_any(UserRole::lecturer_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/{id}", web::delete().to(delete_module))
            .route("/{id}/materials", web::post().to(create_material)),
    )
    .service(
        web::scope("/api/v1/lecturer/materials")
            .wrap(middlewares::RequireRole::new_any(UserRole::lecturer_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/{id}", web::put().to(update_material))
            .route("/{id}", web::delete().to(delete_material))
            .route("/{id}/summary", web::get().to(generate_summary))
            .route("/{id}/summary", web::put().to(save_summary)),
    )
    .service(
        web::scope("/api/v1/student/materials")
            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/{id}/complete", web::post().to(toggle_completion)),
    )
    .service(
        web::scope("/api/v1/materials")
            .wrap(middlewares::RequireJWT)
            .route("/{id}", web::get().to(get_material)),
    );
}

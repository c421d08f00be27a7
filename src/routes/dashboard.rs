use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::dashboard::requests::ActivityQuery;
use crate::models::users::entities::UserRole;
use crate::services::DashboardService;

// 懒加载的全局 DashboardService 实例
static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

pub async fn get_summary(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.get_summary(&req).await
}

pub async fn get_progress(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.get_progress(&req).await
}

pub async fn list_active_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.list_active_classes(&req).await
}

pub async fn list_pending_assignments(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.list_pending_assignments(&req).await
}

pub async fn list_recent_activities(
    req: HttpRequest,
    query: web::Query<ActivityQuery>,
) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE
        .list_recent_activities(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lecturer/dashboard")
            .wrap(middleware::Compress::default())
            .wrap(middlewares::RequireRole::new_any(UserRole::lecturer_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/summary", web::get().to(get_summary))
            .route("/active-classes", web::get().to(list_active_classes))
            .route("/recent-activities", web::get().to(list_recent_activities))
            .route("/pending-assignments", web::get().to(list_pending_assignments))
            .route("/progress", web::get().to(get_progress)),
    );
}

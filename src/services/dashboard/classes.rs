use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DashboardService;
use crate::models::ApiResponse;
use crate::services::access::current_user;

pub async fn list_active_classes(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let classes = storage.list_active_classes(user.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(classes, "Daftar kelas aktif")))
}

pub async fn list_pending_assignments(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let pending = storage.list_pending_assignments(user.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        pending,
        "Daftar tugas yang perlu dinilai",
    )))
}

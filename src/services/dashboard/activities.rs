use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DashboardService;
use crate::models::ApiResponse;
use crate::models::dashboard::requests::ActivityQuery;
use crate::services::access::current_user;

pub async fn list_recent_activities(
    service: &DashboardService,
    request: &HttpRequest,
    query: ActivityQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let activities = storage
        .list_recent_activities(user.id, query.effective_limit())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(activities, "Aktivitas terbaru")))
}

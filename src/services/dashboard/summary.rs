use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DashboardService;
use crate::models::ApiResponse;
use crate::models::dashboard::responses::{ClassCompletion, ProgressSummary};
use crate::services::access::current_user;
use crate::utils::progress::average;

pub async fn get_summary(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let summary = storage.get_dashboard_summary(user.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(summary, "Ringkasan dashboard")))
}

pub async fn get_progress(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let classes = storage.list_active_classes(user.id).await?;
    let values: Vec<f64> = classes.iter().map(|c| c.progress).collect();
    let progress = ProgressSummary {
        average_completion: average(&values),
        by_class: classes
            .into_iter()
            .map(|c| ClassCompletion {
                class_id: c.id,
                completion: c.progress,
            })
            .collect(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(progress, "Progres kelas")))
}

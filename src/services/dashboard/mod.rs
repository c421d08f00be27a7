pub mod activities;
pub mod classes;
pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::dashboard::requests::ActivityQuery;
use crate::storage::Storage;

pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::access::storage_from_request(request),
        }
    }

    // 概要统计
    pub async fn get_summary(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        summary::get_summary(self, request).await
    }

    // 完成度概览
    pub async fn get_progress(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        summary::get_progress(self, request).await
    }

    // 进行中的课程
    pub async fn list_active_classes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        classes::list_active_classes(self, request).await
    }

    // 待批改作业
    pub async fn list_pending_assignments(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        classes::list_pending_assignments(self, request).await
    }

    // 最近动态
    pub async fn list_recent_activities(
        &self,
        request: &HttpRequest,
        query: ActivityQuery,
    ) -> ActixResult<HttpResponse> {
        activities::list_recent_activities(self, request, query).await
    }
}

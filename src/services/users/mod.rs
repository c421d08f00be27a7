pub mod accessibility;
pub mod create;
pub mod delete;
pub mod import;
pub mod update;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::accessibility::requests::UpdateAccessibilityRequest;
use crate::models::users::requests::StudentAccountRequest;
use crate::storage::Storage;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::access::storage_from_request(request),
        }
    }

    // 更新无障碍偏好
    pub async fn update_accessibility(
        &self,
        request: &HttpRequest,
        body: UpdateAccessibilityRequest,
    ) -> ActixResult<HttpResponse> {
        accessibility::update_accessibility(self, request, body).await
    }

    // 讲师创建学生
    pub async fn create_student(
        &self,
        request: &HttpRequest,
        body: StudentAccountRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, request, body).await
    }

    // CSV 批量导入学生
    pub async fn import_students(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        import::import_students(self, request, payload).await
    }

    // 更新学生
    pub async fn update_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
        body: StudentAccountRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, request, student_id, body).await
    }

    // 删除学生
    pub async fn delete_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, request, student_id).await
    }
}

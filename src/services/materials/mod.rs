pub mod complete;
pub mod create;
pub mod delete;
pub mod detail;
pub mod form;
pub mod modules;
pub mod summary;
pub mod update;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};
use std::sync::Arc;

use crate::models::courses::entities::{Course, Material};
use crate::models::courses::requests::SaveSummaryRequest;
use crate::models::users::entities::User;
use crate::models::ErrorCode;
use crate::services::access::{not_found, owns, reject};
use crate::storage::Storage;

pub(crate) const MSG_MATERIAL_NOT_FOUND: &str = "materi tidak ditemukan";
const MSG_MATERIAL_FORBIDDEN: &str = "unauthorized: anda tidak memiliki akses ke materi ini";

pub struct MaterialService {
    storage: Option<Arc<dyn Storage>>,
}

impl MaterialService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::access::storage_from_request(request),
        }
    }

    // 删除模块
    pub async fn delete_module(
        &self,
        request: &HttpRequest,
        module_id: i64,
    ) -> ActixResult<HttpResponse> {
        modules::delete_module(self, request, module_id).await
    }

    // 在模块下新增材料
    pub async fn create_material(
        &self,
        request: &HttpRequest,
        module_id: i64,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        create::create_material(self, request, module_id, payload).await
    }

    // 更新材料
    pub async fn update_material(
        &self,
        request: &HttpRequest,
        material_id: i64,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        update::update_material(self, request, material_id, payload).await
    }

    // 删除材料
    pub async fn delete_material(
        &self,
        request: &HttpRequest,
        material_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_material(self, request, material_id).await
    }

    // 材料详情（讲师或已加入的学生）
    pub async fn get_material(
        &self,
        request: &HttpRequest,
        material_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_material(self, request, material_id).await
    }

    // 学生切换完成状态
    pub async fn toggle_completion(
        &self,
        request: &HttpRequest,
        material_id: i64,
    ) -> ActixResult<HttpResponse> {
        complete::toggle_completion(self, request, material_id).await
    }

    // 生成 AI 摘要
    pub async fn generate_summary(
        &self,
        request: &HttpRequest,
        material_id: i64,
    ) -> ActixResult<HttpResponse> {
        summary::generate_summary(self, request, material_id).await
    }

    // 保存摘要
    pub async fn save_summary(
        &self,
        request: &HttpRequest,
        material_id: i64,
        body: SaveSummaryRequest,
    ) -> ActixResult<HttpResponse> {
        summary::save_summary(self, request, material_id, body).await
    }
}

/// 材料及其所在课程
pub(crate) async fn material_with_course(
    storage: &Arc<dyn Storage>,
    material_id: i64,
) -> ActixResult<(Material, Course)> {
    let material = storage
        .get_material_by_id(material_id)
        .await?
        .ok_or_else(|| not_found(ErrorCode::MaterialNotFound, MSG_MATERIAL_NOT_FOUND))?;
    let course = storage
        .get_material_course(material_id)
        .await?
        .ok_or_else(|| not_found(ErrorCode::MaterialNotFound, MSG_MATERIAL_NOT_FOUND))?;
    Ok((material, course))
}

/// 讲师本人的材料
pub(crate) async fn owned_material(
    storage: &Arc<dyn Storage>,
    user: &User,
    material_id: i64,
) -> ActixResult<(Material, Course)> {
    let (material, course) = material_with_course(storage, material_id).await?;
    if !owns(user, course.teacher_id) {
        return Err(material_forbidden());
    }
    Ok((material, course))
}

pub(crate) fn material_forbidden() -> actix_web::Error {
    reject(
        StatusCode::FORBIDDEN,
        ErrorCode::CoursePermissionDenied,
        MSG_MATERIAL_FORBIDDEN,
    )
}

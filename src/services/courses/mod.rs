pub mod create;
pub mod delete;
pub mod detail;
pub mod form;
pub mod join;
pub mod list;
pub mod students;
pub mod update;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::courses::requests::{CourseListQuery, JoinCourseRequest};
use crate::models::users::requests::StudentAccountRequest;
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::access::storage_from_request(request),
        }
    }

    // 创建课程
    pub async fn create_course(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, request, payload).await
    }

    // 讲师课程列表
    pub async fn list_courses(
        &self,
        request: &HttpRequest,
        query: CourseListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, request, query).await
    }

    // 讲师查看课程详情
    pub async fn get_course(&self, request: &HttpRequest, course_id: i64) -> ActixResult<HttpResponse> {
        detail::get_course(self, request, course_id).await
    }

    // 更新课程
    pub async fn update_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        update::update_course(self, request, course_id, payload).await
    }

    // 删除课程
    pub async fn delete_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course(self, request, course_id).await
    }

    // 课程学生列表
    pub async fn list_students(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        students::list_students(self, request, course_id).await
    }

    // 创建学生并加入课程
    pub async fn create_and_enroll_student(
        &self,
        request: &HttpRequest,
        course_id: i64,
        body: StudentAccountRequest,
    ) -> ActixResult<HttpResponse> {
        students::create_and_enroll_student(self, request, course_id, body).await
    }

    // 学生通过邀请码加入课程
    pub async fn join_course(
        &self,
        request: &HttpRequest,
        body: JoinCourseRequest,
    ) -> ActixResult<HttpResponse> {
        join::join_course(self, request, body).await
    }

    // 学生已加入的课程
    pub async fn list_joined_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        join::list_joined_courses(self, request).await
    }

    // 学生查看课程详情（含完成状态）
    pub async fn get_joined_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_joined_course(self, request, course_id).await
    }
}

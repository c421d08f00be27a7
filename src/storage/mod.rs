use std::sync::Arc;

use crate::models::{
    accessibility::entities::AccessibilityProfile,
    assignments::{
        entities::{Assignment, Submission},
        requests::{NewAssignment, SubmitAssignmentRequest},
    },
    courses::{
        entities::{Course, Material, Module, SmartFeature},
        requests::{CourseListQuery, CreateCourseRequest, MaterialInput, UpdateCourseRequest},
        responses::JoinedCourse,
    },
    dashboard::responses::{ActiveClass, DashboardSummary, PendingAssignment, RecentActivity},
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UpdateUserRequest},
        responses::StudentWithAccessibility,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 创建学生并写入无障碍偏好，可选地同时加入课程（同一事务）
    async fn create_student(
        &self,
        user: CreateUserRequest,
        profile: AccessibilityProfile,
        enroll_course_id: Option<i64>,
    ) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过验证令牌获取用户
    async fn get_user_by_verification_token(&self, token: &str) -> Result<Option<User>>;
    // 标记邮箱已验证并清除令牌
    async fn mark_user_verified(&self, id: i64) -> Result<bool>;
    // 更新学生资料和无障碍偏好（同一事务）
    async fn update_student(
        &self,
        id: i64,
        update: UpdateUserRequest,
        profile: AccessibilityProfile,
    ) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 统计指定角色的用户数
    async fn count_users_by_role(&self, role: UserRole) -> Result<u64>;

    /// 无障碍偏好
    async fn get_accessibility_profile(&self, user_id: i64)
    -> Result<Option<AccessibilityProfile>>;
    // 整体替换（不存在则创建）
    async fn upsert_accessibility_profile(
        &self,
        profile: AccessibilityProfile,
    ) -> Result<AccessibilityProfile>;

    /// 课程管理方法
    // 创建课程及其嵌套模块、材料
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程（不含模块）
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 获取课程完整结构（模块、材料、智能特性）
    async fn get_course_detail(&self, course_id: i64) -> Result<Option<Course>>;
    // 通过邀请码获取课程
    async fn get_course_by_code(&self, class_code: &str) -> Result<Option<Course>>;
    // 列出讲师的课程
    async fn list_teacher_courses(
        &self,
        teacher_id: i64,
        query: CourseListQuery,
    ) -> Result<Vec<Course>>;
    // 更新课程并同步模块/材料（单事务）
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;
    // 删除课程及其所有从属数据
    async fn delete_course(&self, course_id: i64) -> Result<bool>;

    /// 选课
    async fn enroll_student(&self, course_id: i64, user_id: i64) -> Result<()>;
    async fn is_enrolled(&self, course_id: i64, user_id: i64) -> Result<bool>;
    // 学生已加入的课程及进度
    async fn list_joined_courses(&self, user_id: i64) -> Result<Vec<JoinedCourse>>;
    // 课程学生（含无障碍偏好）
    async fn list_course_students(&self, course_id: i64) -> Result<Vec<StudentWithAccessibility>>;

    /// 模块与材料
    async fn get_module_by_id(&self, module_id: i64) -> Result<Option<Module>>;
    // 删除模块及其材料、完成记录、智能特性
    async fn delete_module(&self, module_id: i64) -> Result<bool>;
    async fn get_material_by_id(&self, material_id: i64) -> Result<Option<Material>>;
    // 材料所在的课程
    async fn get_material_course(&self, material_id: i64) -> Result<Option<Course>>;
    async fn create_material(&self, module_id: i64, material: MaterialInput) -> Result<Material>;
    async fn update_material(
        &self,
        material_id: i64,
        material: MaterialInput,
    ) -> Result<Option<Material>>;
    async fn delete_material(&self, material_id: i64) -> Result<bool>;
    async fn get_smart_feature(&self, material_id: i64) -> Result<Option<SmartFeature>>;
    // 保存 AI 摘要
    async fn save_material_summary(&self, material_id: i64, summary: &str)
    -> Result<SmartFeature>;

    /// 学习进度
    // 切换完成状态，返回切换后的状态
    async fn toggle_material_completion(&self, user_id: i64, material_id: i64) -> Result<bool>;
    async fn is_material_completed(&self, user_id: i64, material_id: i64) -> Result<bool>;
    // 学生在课程内已完成的材料
    async fn list_completed_material_ids(&self, user_id: i64, course_id: i64)
    -> Result<Vec<i64>>;

    /// 作业与提交
    async fn create_assignment(&self, assignment: NewAssignment) -> Result<Assignment>;
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    async fn list_course_assignments(&self, course_id: i64) -> Result<Vec<Assignment>>;
    // 学生所有已加入课程的作业（附带自己的提交）
    async fn list_student_assignments(&self, user_id: i64) -> Result<Vec<Assignment>>;
    // 提交或覆盖提交，返回 (提交, 是否新建)
    async fn upsert_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        submission: SubmitAssignmentRequest,
    ) -> Result<(Submission, bool)>;
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    async fn list_assignment_submissions(&self, assignment_id: i64) -> Result<Vec<Submission>>;
    async fn grade_submission(
        &self,
        submission_id: i64,
        grade: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>>;

    /// 讲师仪表盘
    async fn get_dashboard_summary(&self, teacher_id: i64) -> Result<DashboardSummary>;
    async fn list_active_classes(&self, teacher_id: i64) -> Result<Vec<ActiveClass>>;
    async fn list_recent_activities(
        &self,
        teacher_id: i64,
        limit: u64,
    ) -> Result<Vec<RecentActivity>>;
    async fn list_pending_assignments(&self, teacher_id: i64) -> Result<Vec<PendingAssignment>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod accessibility;
mod assignments;
mod completions;
mod courses;
mod dashboard;
mod enrollments;
mod materials;
mod modules;
mod submissions;
mod users;

use super::Storage;
use crate::config::AppConfig;
use crate::errors::{LmsError, Result};
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
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::new_with_url(&config.database.url).await
    }

    /// 连接指定的数据库并执行迁移
    pub async fn new_with_url(url: &str) -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| LmsError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| LmsError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory");
        }

        // 内存库的每个连接都是独立数据库，只能保留单个常驻连接
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.database.pool_size)
                .min_connections(1)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(2)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(LmsError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 将数据库错误映射为业务错误，约束冲突映射为 Conflict
pub(crate) fn db_error(context: &'static str) -> impl Fn(DbErr) -> LmsError {
    move |e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) | Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            LmsError::conflict(format!("{context}: {e}"))
        }
        _ => LmsError::database_operation(format!("{context}: {e}")),
    }
}

#[async_trait::async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn create_student(
        &self,
        user: CreateUserRequest,
        profile: AccessibilityProfile,
        enroll_course_id: Option<i64>,
    ) -> Result<User> {
        self.create_student_impl(user, profile, enroll_course_id)
            .await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_verification_token(&self, token: &str) -> Result<Option<User>> {
        self.get_user_by_verification_token_impl(token).await
    }

    async fn mark_user_verified(&self, id: i64) -> Result<bool> {
        self.mark_user_verified_impl(id).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateUserRequest,
        profile: AccessibilityProfile,
    ) -> Result<Option<User>> {
        self.update_student_impl(id, update, profile).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn count_users_by_role(&self, role: UserRole) -> Result<u64> {
        self.count_users_by_role_impl(role).await
    }

    // 无障碍偏好
    async fn get_accessibility_profile(
        &self,
        user_id: i64,
    ) -> Result<Option<AccessibilityProfile>> {
        self.get_accessibility_profile_impl(user_id).await
    }

    async fn upsert_accessibility_profile(
        &self,
        profile: AccessibilityProfile,
    ) -> Result<AccessibilityProfile> {
        self.upsert_accessibility_profile_impl(profile).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn get_course_detail(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_detail_impl(course_id).await
    }

    async fn get_course_by_code(&self, class_code: &str) -> Result<Option<Course>> {
        self.get_course_by_code_impl(class_code).await
    }

    async fn list_teacher_courses(
        &self,
        teacher_id: i64,
        query: CourseListQuery,
    ) -> Result<Vec<Course>> {
        self.list_teacher_courses_impl(teacher_id, query).await
    }

    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(course_id, update).await
    }

    async fn delete_course(&self, course_id: i64) -> Result<bool> {
        self.delete_course_impl(course_id).await
    }

    // 选课
    async fn enroll_student(&self, course_id: i64, user_id: i64) -> Result<()> {
        self.enroll_student_impl(course_id, user_id).await
    }

    async fn is_enrolled(&self, course_id: i64, user_id: i64) -> Result<bool> {
        self.is_enrolled_impl(course_id, user_id).await
    }

    async fn list_joined_courses(&self, user_id: i64) -> Result<Vec<JoinedCourse>> {
        self.list_joined_courses_impl(user_id).await
    }

    async fn list_course_students(
        &self,
        course_id: i64,
    ) -> Result<Vec<StudentWithAccessibility>> {
        self.list_course_students_impl(course_id).await
    }

    // 模块与材料
    async fn get_module_by_id(&self, module_id: i64) -> Result<Option<Module>> {
        self.get_module_by_id_impl(module_id).await
    }

    async fn delete_module(&self, module_id: i64) -> Result<bool> {
        self.delete_module_impl(module_id).await
    }

    async fn get_material_by_id(&self, material_id: i64) -> Result<Option<Material>> {
        self.get_material_by_id_impl(material_id).await
    }

    async fn get_material_course(&self, material_id: i64) -> Result<Option<Course>> {
        self.get_material_course_impl(material_id).await
    }

    async fn create_material(&self, module_id: i64, material: MaterialInput) -> Result<Material> {
        self.create_material_impl(module_id, material).await
    }

    async fn update_material(
        &self,
        material_id: i64,
        material: MaterialInput,
    ) -> Result<Option<Material>> {
        self.update_material_impl(material_id, material).await
    }

    async fn delete_material(&self, material_id: i64) -> Result<bool> {
        self.delete_material_impl(material_id).await
    }

    async fn get_smart_feature(&self, material_id: i64) -> Result<Option<SmartFeature>> {
        self.get_smart_feature_impl(material_id).await
    }

    async fn save_material_summary(
        &self,
        material_id: i64,
        summary: &str,
    ) -> Result<SmartFeature> {
        self.save_material_summary_impl(material_id, summary).await
    }

    // 学习进度
    async fn toggle_material_completion(&self, user_id: i64, material_id: i64) -> Result<bool> {
        self.toggle_material_completion_impl(user_id, material_id)
            .await
    }

    async fn is_material_completed(&self, user_id: i64, material_id: i64) -> Result<bool> {
        self.is_material_completed_impl(user_id, material_id).await
    }

    async fn list_completed_material_ids(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Vec<i64>> {
        self.list_completed_material_ids_impl(user_id, course_id)
            .await
    }

    // 作业与提交
    async fn create_assignment(&self, assignment: NewAssignment) -> Result<Assignment> {
        self.create_assignment_impl(assignment).await
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn list_course_assignments(&self, course_id: i64) -> Result<Vec<Assignment>> {
        self.list_course_assignments_impl(course_id).await
    }

    async fn list_student_assignments(&self, user_id: i64) -> Result<Vec<Assignment>> {
        self.list_student_assignments_impl(user_id).await
    }

    async fn upsert_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        submission: SubmitAssignmentRequest,
    ) -> Result<(Submission, bool)> {
        self.upsert_submission_impl(assignment_id, student_id, submission)
            .await
    }

    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id).await
    }

    async fn list_assignment_submissions(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        self.list_assignment_submissions_impl(assignment_id).await
    }

    async fn grade_submission(
        &self,
        submission_id: i64,
        grade: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>> {
        self.grade_submission_impl(submission_id, grade, feedback)
            .await
    }

    // 讲师仪表盘
    async fn get_dashboard_summary(&self, teacher_id: i64) -> Result<DashboardSummary> {
        self.get_dashboard_summary_impl(teacher_id).await
    }

    async fn list_active_classes(&self, teacher_id: i64) -> Result<Vec<ActiveClass>> {
        self.list_active_classes_impl(teacher_id).await
    }

    async fn list_recent_activities(
        &self,
        teacher_id: i64,
        limit: u64,
    ) -> Result<Vec<RecentActivity>> {
        self.list_recent_activities_impl(teacher_id, limit).await
    }

    async fn list_pending_assignments(&self, teacher_id: i64) -> Result<Vec<PendingAssignment>> {
        self.list_pending_assignments_impl(teacher_id).await
    }
}

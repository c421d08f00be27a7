use super::accessibility::save_profile;
use super::{SeaOrmStorage, db_error};
use crate::entity::accessibility_profiles::ActiveModel as ProfileActiveModel;
use crate::entity::course_students::ActiveModel as EnrollmentActiveModel;
use crate::entity::users::{ActiveModel, Column, Entity as Users, Model as UserModel};
use crate::errors::Result;
use crate::models::{
    accessibility::entities::AccessibilityProfile,
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};

fn new_user_model(req: CreateUserRequest, now: i64) -> ActiveModel {
    ActiveModel {
        name: Set(req.name),
        email: Set(req.email),
        password_hash: Set(req.password_hash),
        role: Set(req.role.to_string()),
        avatar: Set(None),
        points: Set(0),
        current_streak: Set(0),
        last_activity_date: Set(None),
        created_by_id: Set(req.created_by_id),
        is_verified: Set(req.is_verified),
        verification_token: Set(req.verification_token),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let result = new_user_model(req, now)
            .insert(&self.db)
            .await
            .map_err(db_error("创建用户失败"))?;

        Ok(result.into_user())
    }

    /// 创建学生、写入无障碍偏好并可选加入课程
    pub async fn create_student_impl(
        &self,
        req: CreateUserRequest,
        profile: AccessibilityProfile,
        enroll_course_id: Option<i64>,
    ) -> Result<User> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;

        let user = new_user_model(req, now)
            .insert(&txn)
            .await
            .map_err(db_error("创建学生失败"))?;

        let profile = AccessibilityProfile {
            user_id: user.id,
            ..profile
        };
        ProfileActiveModel::from_profile(&profile, now)
            .insert(&txn)
            .await
            .map_err(db_error("保存无障碍偏好失败"))?;

        if let Some(course_id) = enroll_course_id {
            insert_enrollment(&txn, course_id, user.id, now).await?;
        }

        txn.commit().await.map_err(db_error("提交事务失败"))?;

        Ok(user.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询用户失败"))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_error("查询用户失败"))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过验证令牌获取用户
    pub async fn get_user_by_verification_token_impl(&self, token: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::VerificationToken.eq(token))
            .one(&self.db)
            .await
            .map_err(db_error("查询用户失败"))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 标记邮箱已验证
    pub async fn mark_user_verified_impl(&self, id: i64) -> Result<bool> {
        let Some(existing) = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询用户失败"))?
        else {
            return Ok(false);
        };

        let mut model: ActiveModel = existing.into();
        model.is_verified = Set(true);
        model.verification_token = Set(None);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(db_error("更新用户失败"))?;

        Ok(true)
    }

    /// 更新学生资料并整体替换无障碍偏好（同一事务）
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
        profile: AccessibilityProfile,
    ) -> Result<Option<User>> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;

        let Some(user) = apply_user_update(&txn, id, update, now).await? else {
            return Ok(None);
        };
        let profile = AccessibilityProfile {
            user_id: user.id,
            ..profile
        };
        save_profile(&txn, &profile, now).await?;

        txn.commit().await.map_err(db_error("提交事务失败"))?;

        Ok(Some(user.into_user()))
    }

    /// 删除用户（从属数据由外键级联删除）
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除用户失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计指定角色的用户数
    pub async fn count_users_by_role_impl(&self, role: UserRole) -> Result<u64> {
        Users::find()
            .filter(Column::Role.eq(role.to_string()))
            .count(&self.db)
            .await
            .map_err(db_error("统计用户失败"))
    }
}

/// 写入选课记录
async fn apply_user_update<C: ConnectionTrait>(
    conn: &C,
    id: i64,
    update: UpdateUserRequest,
    now: i64,
) -> Result<Option<UserModel>> {
    let Some(existing) = Users::find_by_id(id)
        .one(conn)
        .await
        .map_err(db_error("查询用户失败"))?
    else {
        return Ok(None);
    };

    let mut model: ActiveModel = existing.into();
    if let Some(name) = update.name {
        model.name = Set(name);
    }
    if let Some(email) = update.email {
        model.email = Set(email);
    }
    if let Some(password_hash) = update.password_hash {
        model.password_hash = Set(password_hash);
    }
    model.updated_at = Set(now);

    let result = model
        .update(conn)
        .await
        .map_err(db_error("更新用户失败"))?;

    Ok(Some(result))
}

pub(super) async fn insert_enrollment<C: ConnectionTrait>(
    conn: &C,
    course_id: i64,
    user_id: i64,
    now: i64,
) -> Result<()> {
    EnrollmentActiveModel {
        course_id: Set(course_id),
        user_id: Set(user_id),
        joined_at: Set(now),
    }
    .insert(conn)
    .await
    .map_err(db_error("加入课程失败"))?;

    Ok(())
}

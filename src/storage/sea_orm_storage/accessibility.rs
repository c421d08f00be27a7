//! 无障碍偏好存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::accessibility_profiles::{ActiveModel, Entity as AccessibilityProfiles};
use crate::errors::Result;
use crate::models::accessibility::entities::AccessibilityProfile;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait};

impl SeaOrmStorage {
    /// 获取用户的无障碍偏好
    pub async fn get_accessibility_profile_impl(
        &self,
        user_id: i64,
    ) -> Result<Option<AccessibilityProfile>> {
        let result = AccessibilityProfiles::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询无障碍偏好失败"))?;

        Ok(result.map(|m| m.into_profile()))
    }

    /// 整体替换无障碍偏好，不存在时创建
    pub async fn upsert_accessibility_profile_impl(
        &self,
        profile: AccessibilityProfile,
    ) -> Result<AccessibilityProfile> {
        save_profile(&self.db, &profile, chrono::Utc::now().timestamp()).await
    }
}

pub(super) async fn save_profile<C: ConnectionTrait>(
    conn: &C,
    profile: &AccessibilityProfile,
    now: i64,
) -> Result<AccessibilityProfile> {
    let existing = AccessibilityProfiles::find_by_id(profile.user_id)
        .one(conn)
        .await
        .map_err(db_error("查询无障碍偏好失败"))?;

    let model = ActiveModel::from_profile(profile, now);
    let saved = if existing.is_some() {
        model.update(conn).await
    } else {
        model.insert(conn).await
    }
    .map_err(db_error("保存无障碍偏好失败"))?;

    Ok(saved.into_profile())
}

use serde::Serialize;
use ts_rs::TS;

use crate::models::accessibility::entities::AccessibilityProfile;
use crate::models::users::entities::User;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: i64,
    pub user: User,
}

// 当前用户信息（含无障碍偏好）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct MeResponse {
    #[serde(flatten)]
    pub user: User,
    pub accessibility: Option<AccessibilityProfile>,
}

use serde::Serialize;
use ts_rs::TS;

use super::entities::User;
use crate::models::accessibility::entities::AccessibilityProfile;

// 导入结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "user.ts")]
pub struct ImportStudentsResponse {
    pub count: usize,
    pub skipped: usize,
}

// 带无障碍偏好的学生
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "user.ts")]
pub struct StudentWithAccessibility {
    #[serde(flatten)]
    pub user: User,
    pub accessibility: Option<AccessibilityProfile>,
}

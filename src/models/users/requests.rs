use serde::Deserialize;
use ts_rs::TS;

use super::entities::UserRole;

// 存储层创建用户的输入（密码已哈希）
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_by_id: Option<i64>,
    pub is_verified: bool,
    pub verification_token: Option<String>,
}

// 存储层更新用户的输入
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

// 讲师创建/更新学生账户（来自HTTP请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "user.ts")]
pub struct StudentAccountRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// 障碍类别，见无障碍设置
    #[serde(default)]
    pub disabilities: Vec<String>,
}

//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。
//! 测验与好友相关的表仅存在于迁移中，尚无对应实体。

pub mod prelude;

pub mod accessibility_profiles;
pub mod assignments;
pub mod course_students;
pub mod courses;
pub mod material_completions;
pub mod materials;
pub mod modules;
pub mod smart_features;
pub mod submissions;
pub mod users;

pub(crate) fn to_datetime(ts: i64) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::<chrono::Utc>::from_timestamp(ts, 0).unwrap_or_default()
}

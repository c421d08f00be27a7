use serde::Deserialize;
use ts_rs::TS;

use super::entities::{CourseStatus, MaterialType};

// 嵌套模块输入；id 为空或 0 表示新建
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct ModuleInput {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub materials: Vec<MaterialInput>,
}

// 材料输入
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct MaterialInput {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub raw_content: Option<String>,
    #[serde(default)]
    pub duration_min: i32,
    #[serde(default)]
    pub has_captions: bool,
}

impl ModuleInput {
    /// 已存在记录的 id
    pub fn existing_id(&self) -> Option<i64> {
        self.id.filter(|id| *id > 0)
    }
}

impl MaterialInput {
    pub fn existing_id(&self) -> Option<i64> {
        self.id.filter(|id| *id > 0)
    }
}

// 存储层创建课程输入
#[derive(Debug, Clone)]
pub struct CreateCourseRequest {
    pub teacher_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub class_code: String,
    pub status: CourseStatus,
    pub modules: Vec<ModuleInput>,
}

// 存储层更新课程输入；为 None 的字段保持原值
#[derive(Debug, Clone)]
pub struct UpdateCourseRequest {
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub class_code: Option<String>,
    pub status: Option<CourseStatus>,
    pub modules: Vec<ModuleInput>,
}

// 讲师课程列表查询
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct CourseListQuery {
    pub q: Option<String>,
    pub status: Option<String>,
    /// newest（默认）或 oldest
    pub sort: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct JoinCourseRequest {
    pub class_code: String,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct SaveSummaryRequest {
    pub summary: String,
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程状态
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "course.ts")]
pub enum CourseStatus {
    Published,
    #[default]
    Draft,
    Archived,
}

impl std::fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseStatus::Published => write!(f, "published"),
            CourseStatus::Draft => write!(f, "draft"),
            CourseStatus::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for CourseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "published" => Ok(CourseStatus::Published),
            "draft" => Ok(CourseStatus::Draft),
            "archived" => Ok(CourseStatus::Archived),
            _ => Err(format!("Invalid course status: {s}")),
        }
    }
}

// 材料类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "course.ts")]
pub enum MaterialType {
    Youtube,
    Pdf,
    Text,
}

impl std::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialType::Youtube => write!(f, "youtube"),
            MaterialType::Pdf => write!(f, "pdf"),
            MaterialType::Text => write!(f, "text"),
        }
    }
}

impl std::str::FromStr for MaterialType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "youtube" => Ok(MaterialType::Youtube),
            "pdf" => Ok(MaterialType::Pdf),
            "text" => Ok(MaterialType::Text),
            _ => Err(format!("Invalid material type: {s}")),
        }
    }
}

// 课程
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct Course {
    pub id: i64,
    pub teacher_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub class_code: String,
    pub status: CourseStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub modules: Vec<Module>,
}

// 模块
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct Module {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    #[serde(default)]
    pub materials: Vec<Material>,
}

// 材料
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct Material {
    pub id: i64,
    pub module_id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    pub source_url: Option<String>,
    pub raw_content: Option<String>,
    pub duration_min: i32,
    pub has_captions: bool,
    pub smart_feature: Option<SmartFeature>,
    /// 仅对当前学生有意义，不落库
    #[serde(default)]
    pub is_completed: bool,
}

// AI 生成的辅助内容
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct SmartFeature {
    pub id: i64,
    pub material_id: i64,
    pub summary: Option<String>,
    pub simplified_content: Option<String>,
    pub quiz_data: Option<serde_json::Value>,
    pub is_generated: bool,
}

impl Course {
    /// 课程内所有材料
    pub fn materials_mut(&mut self) -> impl Iterator<Item = &mut Material> {
        self.modules.iter_mut().flat_map(|m| m.materials.iter_mut())
    }
}

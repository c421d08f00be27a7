use serde::Serialize;
use ts_rs::TS;

use super::entities::Course;

// 学生已加入的课程及进度
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct JoinedCourse {
    #[serde(flatten)]
    pub course: Course,
    pub progress: f64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct CompletionToggleResponse {
    pub completed: bool,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct MaterialSummaryResponse {
    pub material_id: i64,
    pub summary: String,
    pub is_generated: bool,
}

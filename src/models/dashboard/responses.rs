use serde::Serialize;
use ts_rs::TS;

// 讲师仪表盘概要
#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct DashboardSummary {
    pub total_classes: u64,
    pub total_students: u64,
    pub pending_grades: u64,
    pub average_completion: f64,
}

// 进行中的课程
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct ActiveClass {
    pub id: String,
    pub name: String,
    pub semester: String,
    pub student_count: u64,
    pub progress: f64,
}

// 最近动态
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct RecentActivity {
    pub id: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub title: String,
    pub description: String,
    pub course_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 待批改作业
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct PendingAssignment {
    pub assignment_id: String,
    pub title: String,
    pub course: String,
    pub submitted_count: u64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct ClassCompletion {
    pub class_id: String,
    pub completion: f64,
}

#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct ProgressSummary {
    pub average_completion: f64,
    pub by_class: Vec<ClassCompletion>,
}

pub const CURRENT_SEMESTER: &str = "Genap 2025";

pub fn class_ref(course_id: i64) -> String {
    format!("cls_{course_id}")
}

pub fn activity_ref(submission_id: i64) -> String {
    format!("act_{submission_id}")
}

pub fn assignment_ref(assignment_id: i64) -> String {
    format!("asg_{assignment_id}")
}

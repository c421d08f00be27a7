use serde::Deserialize;
use ts_rs::TS;

// 讲师创建作业（来自HTTP请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct CreateAssignmentRequest {
    pub title: String,
    #[serde(default)]
    pub instruction: String,
    #[serde(default)]
    pub max_points: i32,
    /// RFC3339
    pub deadline: String,
    #[serde(default)]
    pub module_id: Option<i64>,
    #[serde(default)]
    pub allow_text: bool,
    #[serde(default)]
    pub allow_file: bool,
    #[serde(default)]
    pub allow_late: bool,
}

// 存储层创建作业输入
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub course_id: i64,
    pub module_id: Option<i64>,
    pub title: String,
    pub instruction: String,
    pub deadline: chrono::DateTime<chrono::Utc>,
    pub max_points: i32,
    pub allow_text: bool,
    pub allow_file: bool,
    pub allow_voice: bool,
    pub allow_late: bool,
}

// 学生提交作业
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct SubmitAssignmentRequest {
    #[serde(default)]
    pub text_answer: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub voice_note_url: Option<String>,
}

// 讲师评分
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct GradeSubmissionRequest {
    pub grade: f64,
    #[serde(default)]
    pub feedback: Option<String>,
}

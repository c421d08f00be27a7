use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::users::entities::User;

// 作业
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct Assignment {
    pub id: i64,
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
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// 当前学生的提交
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_submission: Option<Submission>,
}

// 提交
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub text_answer: Option<String>,
    pub file_url: Option<String>,
    pub voice_note_url: Option<String>,
    pub grade: f64,
    pub feedback: Option<String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<User>,
}

impl Assignment {
    pub fn is_past_deadline(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        now > self.deadline
    }
}

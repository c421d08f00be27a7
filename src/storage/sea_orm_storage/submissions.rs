//! 作业提交存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, db_error};
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::Result;
use crate::models::assignments::{entities::Submission, requests::SubmitAssignmentRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 提交作业；重复提交时覆盖答案并清空评分
    pub async fn upsert_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
        req: SubmitAssignmentRequest,
    ) -> Result<(Submission, bool)> {
        let now = chrono::Utc::now().timestamp();
        let existing = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(db_error("查询提交失败"))?;

        let created = existing.is_none();
        let mut model: ActiveModel = match existing {
            Some(submission) => submission.into(),
            None => ActiveModel {
                assignment_id: Set(assignment_id),
                student_id: Set(student_id),
                ..Default::default()
            },
        };
        model.text_answer = Set(req.text_answer);
        model.file_url = Set(req.file_url);
        model.voice_note_url = Set(req.voice_note_url);
        model.grade = Set(0.0);
        model.feedback = Set(None);
        model.submitted_at = Set(now);

        let saved = if created {
            model.insert(&self.db).await
        } else {
            model.update(&self.db).await
        }
        .map_err(db_error("保存提交失败"))?;

        Ok((saved.into_submission(), created))
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(&self, submission_id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询提交失败"))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 作业的所有提交（附带学生信息）
    pub async fn list_assignment_submissions_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        let submissions = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_desc(Column::SubmittedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询提交列表失败"))?;

        let student_ids: Vec<i64> = submissions.iter().map(|s| s.student_id).collect();
        let students: HashMap<i64, _> = if student_ids.is_empty() {
            HashMap::new()
        } else {
            Users::find()
                .filter(UserColumn::Id.is_in(student_ids))
                .all(&self.db)
                .await
                .map_err(db_error("查询学生失败"))?
                .into_iter()
                .map(|u| (u.id, u.into_user()))
                .collect()
        };

        Ok(submissions
            .into_iter()
            .map(|s| {
                let student = students.get(&s.student_id).cloned();
                let mut submission = s.into_submission();
                submission.student = student;
                submission
            })
            .collect())
    }

    /// 评分
    pub async fn grade_submission_impl(
        &self,
        submission_id: i64,
        grade: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>> {
        let Some(existing) = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询提交失败"))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.grade = Set(grade);
        model.feedback = Set(feedback);

        let saved = model
            .update(&self.db)
            .await
            .map_err(db_error("评分失败"))?;

        Ok(Some(saved.into_submission()))
    }
}

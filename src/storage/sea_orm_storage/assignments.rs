//! 作业存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, db_error};
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::course_students::{Column as EnrollmentColumn, Entity as CourseStudents};
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::errors::Result;
use crate::models::assignments::{entities::Assignment, requests::NewAssignment};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(&self, req: NewAssignment) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(req.course_id),
            module_id: Set(req.module_id),
            title: Set(req.title),
            instruction: Set(req.instruction),
            deadline: Set(req.deadline.timestamp()),
            max_points: Set(req.max_points),
            allow_text: Set(req.allow_text),
            allow_file: Set(req.allow_file),
            allow_voice: Set(req.allow_voice),
            allow_late: Set(req.allow_late),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建作业失败"))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询作业失败"))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 课程的作业
    pub async fn list_course_assignments_impl(&self, course_id: i64) -> Result<Vec<Assignment>> {
        let result = Assignments::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询作业列表失败"))?;

        Ok(result.into_iter().map(|m| m.into_assignment()).collect())
    }

    /// 学生所有已加入课程的作业，附带自己的提交
    pub async fn list_student_assignments_impl(&self, user_id: i64) -> Result<Vec<Assignment>> {
        let course_ids: Vec<i64> = CourseStudents::find()
            .select_only()
            .column(EnrollmentColumn::CourseId)
            .filter(EnrollmentColumn::UserId.eq(user_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("查询选课记录失败"))?;

        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let assignments = Assignments::find()
            .filter(Column::CourseId.is_in(course_ids))
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询作业列表失败"))?;

        let assignment_ids: Vec<i64> = assignments.iter().map(|a| a.id).collect();
        let mut submissions: HashMap<i64, _> = if assignment_ids.is_empty() {
            HashMap::new()
        } else {
            Submissions::find()
                .filter(SubmissionColumn::StudentId.eq(user_id))
                .filter(SubmissionColumn::AssignmentId.is_in(assignment_ids))
                .all(&self.db)
                .await
                .map_err(db_error("查询提交失败"))?
                .into_iter()
                .map(|s| (s.assignment_id, s.into_submission()))
                .collect()
        };

        Ok(assignments
            .into_iter()
            .map(|a| {
                let my_submission = submissions.remove(&a.id);
                let mut assignment = a.into_assignment();
                assignment.my_submission = my_submission;
                assignment
            })
            .collect())
    }
}

//! 学习进度存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::material_completions::{ActiveModel, Column, Entity as MaterialCompletions};
use crate::entity::materials::{Column as MaterialColumn, Entity as Materials};
use crate::entity::modules::{Column as ModuleColumn, Entity as Modules};
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::errors::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Set,
};

/// 课程内可完成的条目数
pub(super) struct ItemCounts {
    pub materials: u64,
    pub assignments: u64,
}

impl SeaOrmStorage {
    /// 切换材料完成状态；无记录时创建为已完成
    pub async fn toggle_material_completion_impl(
        &self,
        user_id: i64,
        material_id: i64,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();
        let existing = MaterialCompletions::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::MaterialId.eq(material_id))
            .one(&self.db)
            .await
            .map_err(db_error("查询完成记录失败"))?;

        let saved = match existing {
            Some(record) => {
                let completed = !record.completed;
                let mut model: ActiveModel = record.into();
                model.completed = Set(completed);
                model.updated_at = Set(now);
                model.update(&self.db).await
            }
            None => {
                ActiveModel {
                    user_id: Set(user_id),
                    material_id: Set(material_id),
                    completed: Set(true),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
            }
        }
        .map_err(db_error("保存完成记录失败"))?;

        Ok(saved.completed)
    }

    /// 材料是否已完成
    pub async fn is_material_completed_impl(&self, user_id: i64, material_id: i64) -> Result<bool> {
        let count = MaterialCompletions::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::MaterialId.eq(material_id))
            .filter(Column::Completed.eq(true))
            .count(&self.db)
            .await
            .map_err(db_error("查询完成记录失败"))?;

        Ok(count > 0)
    }

    /// 学生在课程内已完成的材料 ID
    pub async fn list_completed_material_ids_impl(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Vec<i64>> {
        let material_ids = self.course_material_ids(course_id).await?;
        if material_ids.is_empty() {
            return Ok(Vec::new());
        }

        MaterialCompletions::find()
            .select_only()
            .column(Column::MaterialId)
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Completed.eq(true))
            .filter(Column::MaterialId.is_in(material_ids))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("查询完成记录失败"))
    }

    /// 课程内所有材料 ID
    pub(super) async fn course_material_ids(&self, course_id: i64) -> Result<Vec<i64>> {
        Materials::find()
            .select_only()
            .column(MaterialColumn::Id)
            .inner_join(Modules)
            .filter(ModuleColumn::CourseId.eq(course_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("查询材料失败"))
    }

    /// 课程的材料数与作业数
    pub(super) async fn course_item_counts(&self, course_id: i64) -> Result<ItemCounts> {
        let materials = self.course_material_ids(course_id).await?.len() as u64;
        let assignments = Assignments::find()
            .filter(AssignmentColumn::CourseId.eq(course_id))
            .count(&self.db)
            .await
            .map_err(db_error("统计作业失败"))?;

        Ok(ItemCounts {
            materials,
            assignments,
        })
    }

    /// 课程内的提交数，可限定学生
    pub(super) async fn count_course_submissions(
        &self,
        course_id: i64,
        student_id: Option<i64>,
    ) -> Result<u64> {
        let mut select = Submissions::find()
            .inner_join(Assignments)
            .filter(AssignmentColumn::CourseId.eq(course_id));
        if let Some(student_id) = student_id {
            select = select.filter(SubmissionColumn::StudentId.eq(student_id));
        }

        select
            .count(&self.db)
            .await
            .map_err(db_error("统计提交失败"))
    }

    /// 课程内所有学生已完成的材料记录数
    pub(super) async fn count_course_completions(&self, course_id: i64) -> Result<u64> {
        let material_ids = self.course_material_ids(course_id).await?;
        if material_ids.is_empty() {
            return Ok(0);
        }

        MaterialCompletions::find()
            .filter(Column::MaterialId.is_in(material_ids))
            .filter(Column::Completed.eq(true))
            .count(&self.db)
            .await
            .map_err(db_error("统计完成记录失败"))
    }
}

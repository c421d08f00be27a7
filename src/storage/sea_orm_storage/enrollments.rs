//! 选课存储操作

use std::collections::HashMap;

use super::users::insert_enrollment;
use super::{SeaOrmStorage, db_error};
use crate::entity::accessibility_profiles::{
    Column as ProfileColumn, Entity as AccessibilityProfiles,
};
use crate::entity::course_students::{Column, Entity as CourseStudents};
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::Result;
use crate::models::{
    courses::responses::JoinedCourse, users::responses::StudentWithAccessibility,
};
use crate::utils::progress::completion_percent;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};

impl SeaOrmStorage {
    /// 学生加入课程
    pub async fn enroll_student_impl(&self, course_id: i64, user_id: i64) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        insert_enrollment(&self.db, course_id, user_id, now).await
    }

    /// 是否已加入课程
    pub async fn is_enrolled_impl(&self, course_id: i64, user_id: i64) -> Result<bool> {
        let count = CourseStudents::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::UserId.eq(user_id))
            .count(&self.db)
            .await
            .map_err(db_error("查询选课记录失败"))?;

        Ok(count > 0)
    }

    /// 学生已加入的课程及进度
    pub async fn list_joined_courses_impl(&self, user_id: i64) -> Result<Vec<JoinedCourse>> {
        let course_ids: Vec<i64> = CourseStudents::find()
            .select_only()
            .column(Column::CourseId)
            .filter(Column::UserId.eq(user_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("查询选课记录失败"))?;

        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let courses = Courses::find()
            .filter(CourseColumn::Id.is_in(course_ids))
            .order_by_asc(CourseColumn::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询课程失败"))?;

        let mut result = Vec::with_capacity(courses.len());
        for course in courses {
            let progress = self.student_course_progress(course.id, user_id).await?;
            result.push(JoinedCourse {
                course: course.into_course(),
                progress,
            });
        }

        Ok(result)
    }

    /// 学生在课程内的进度：(已完成材料 + 已提交作业) / (材料总数 + 作业总数)
    async fn student_course_progress(&self, course_id: i64, user_id: i64) -> Result<f64> {
        let counts = self.course_item_counts(course_id).await?;
        let total = counts.materials + counts.assignments;
        if total == 0 {
            return Ok(0.0);
        }

        let completed = self
            .list_completed_material_ids_impl(user_id, course_id)
            .await?
            .len() as u64;
        let submitted = self
            .count_course_submissions(course_id, Some(user_id))
            .await?;

        Ok(completion_percent(completed + submitted, total))
    }

    /// 课程学生（含无障碍偏好）
    pub async fn list_course_students_impl(
        &self,
        course_id: i64,
    ) -> Result<Vec<StudentWithAccessibility>> {
        let user_ids: Vec<i64> = CourseStudents::find()
            .select_only()
            .column(Column::UserId)
            .filter(Column::CourseId.eq(course_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("查询选课记录失败"))?;

        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = Users::find()
            .filter(UserColumn::Id.is_in(user_ids.clone()))
            .order_by_asc(UserColumn::Name)
            .all(&self.db)
            .await
            .map_err(db_error("查询学生失败"))?;

        let mut profiles: HashMap<i64, _> = AccessibilityProfiles::find()
            .filter(ProfileColumn::UserId.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(db_error("查询无障碍偏好失败"))?
            .into_iter()
            .map(|p| (p.user_id, p.into_profile()))
            .collect();

        Ok(users
            .into_iter()
            .map(|u| {
                let accessibility = profiles.remove(&u.id);
                StudentWithAccessibility {
                    user: u.into_user(),
                    accessibility,
                }
            })
            .collect())
    }
}

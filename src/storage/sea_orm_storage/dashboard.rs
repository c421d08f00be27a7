//! 讲师仪表盘统计

use std::collections::{BTreeMap, HashMap, HashSet};

use super::{SeaOrmStorage, db_error};
use crate::entity::assignments::{
    Column as AssignmentColumn, Entity as Assignments, Relation as AssignmentRelation,
};
use crate::entity::course_students::{Column as EnrollmentColumn, Entity as CourseStudents};
use crate::entity::courses::{Column as CourseColumn, Entity as Courses, Model as CourseModel};
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::Result;
use crate::models::courses::entities::CourseStatus;
use crate::models::dashboard::responses::{
    ActiveClass, CURRENT_SEMESTER, DashboardSummary, PendingAssignment, RecentActivity,
    activity_ref, assignment_ref, class_ref,
};
use crate::utils::progress::{average, completion_percent};
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

impl SeaOrmStorage {
    /// 仪表盘概要
    pub async fn get_dashboard_summary_impl(&self, teacher_id: i64) -> Result<DashboardSummary> {
        let courses = self.published_courses(teacher_id).await?;
        let course_ids: Vec<i64> = courses.iter().map(|c| c.id).collect();

        let total_students = if course_ids.is_empty() {
            0
        } else {
            let user_ids: Vec<i64> = CourseStudents::find()
                .select_only()
                .column(EnrollmentColumn::UserId)
                .filter(EnrollmentColumn::CourseId.is_in(course_ids))
                .into_tuple()
                .all(&self.db)
                .await
                .map_err(db_error("统计学生失败"))?;
            user_ids.into_iter().collect::<HashSet<_>>().len() as u64
        };

        let pending_grades = Submissions::find()
            .inner_join(Assignments)
            .join(JoinType::InnerJoin, AssignmentRelation::Course.def())
            .filter(CourseColumn::TeacherId.eq(teacher_id))
            .filter(SubmissionColumn::Grade.eq(0.0))
            .count(&self.db)
            .await
            .map_err(db_error("统计待批改提交失败"))?;

        let classes = self.build_active_classes(courses).await?;
        let progress: Vec<f64> = classes.iter().map(|c| c.progress).collect();

        Ok(DashboardSummary {
            total_classes: classes.len() as u64,
            total_students,
            pending_grades,
            average_completion: average(&progress),
        })
    }

    /// 已发布的课程及其进度
    pub async fn list_active_classes_impl(&self, teacher_id: i64) -> Result<Vec<ActiveClass>> {
        let courses = self.published_courses(teacher_id).await?;
        self.build_active_classes(courses).await
    }

    /// 最近的作业提交动态
    pub async fn list_recent_activities_impl(
        &self,
        teacher_id: i64,
        limit: u64,
    ) -> Result<Vec<RecentActivity>> {
        let submissions = Submissions::find()
            .inner_join(Assignments)
            .join(JoinType::InnerJoin, AssignmentRelation::Course.def())
            .filter(CourseColumn::TeacherId.eq(teacher_id))
            .order_by_desc(SubmissionColumn::SubmittedAt)
            .order_by_desc(SubmissionColumn::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_error("查询最近动态失败"))?;

        if submissions.is_empty() {
            return Ok(Vec::new());
        }

        let assignment_ids: Vec<i64> = submissions.iter().map(|s| s.assignment_id).collect();
        let assignments: HashMap<i64, _> = Assignments::find()
            .filter(AssignmentColumn::Id.is_in(assignment_ids))
            .all(&self.db)
            .await
            .map_err(db_error("查询作业失败"))?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        let student_ids: Vec<i64> = submissions.iter().map(|s| s.student_id).collect();
        let students: HashMap<i64, String> = Users::find()
            .filter(UserColumn::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(db_error("查询学生失败"))?
            .into_iter()
            .map(|u| (u.id, u.name))
            .collect();

        Ok(submissions
            .into_iter()
            .filter_map(|s| {
                let assignment = assignments.get(&s.assignment_id)?;
                let student_name = students.get(&s.student_id).cloned().unwrap_or_default();
                Some(RecentActivity {
                    id: activity_ref(s.id),
                    activity_type: "assignment_submission".to_string(),
                    title: format!("Pengumpulan Tugas: {}", assignment.title),
                    description: format!("{student_name} mengumpulkan tugas"),
                    course_id: class_ref(assignment.course_id),
                    created_at: s.into_submission().submitted_at,
                })
            })
            .collect())
    }

    /// 存在未评分提交的作业
    pub async fn list_pending_assignments_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<PendingAssignment>> {
        let courses: HashMap<i64, String> = Courses::find()
            .filter(CourseColumn::TeacherId.eq(teacher_id))
            .all(&self.db)
            .await
            .map_err(db_error("查询课程失败"))?
            .into_iter()
            .map(|c| (c.id, c.title))
            .collect();

        if courses.is_empty() {
            return Ok(Vec::new());
        }

        let assignments = Assignments::find()
            .filter(AssignmentColumn::CourseId.is_in(courses.keys().copied().collect::<Vec<_>>()))
            .all(&self.db)
            .await
            .map_err(db_error("查询作业失败"))?;

        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        let ungraded: Vec<i64> = Submissions::find()
            .select_only()
            .column(SubmissionColumn::AssignmentId)
            .filter(
                SubmissionColumn::AssignmentId
                    .is_in(assignments.iter().map(|a| a.id).collect::<Vec<_>>()),
            )
            .filter(SubmissionColumn::Grade.eq(0.0))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("查询待批改提交失败"))?;

        // 按作业 ID 分组计数
        let mut counts: BTreeMap<i64, u64> = BTreeMap::new();
        for assignment_id in ungraded {
            *counts.entry(assignment_id).or_default() += 1;
        }

        let by_id: HashMap<i64, _> = assignments.into_iter().map(|a| (a.id, a)).collect();

        Ok(counts
            .into_iter()
            .filter_map(|(assignment_id, submitted_count)| {
                let assignment = by_id.get(&assignment_id)?;
                Some(PendingAssignment {
                    assignment_id: assignment_ref(assignment_id),
                    title: assignment.title.clone(),
                    course: courses
                        .get(&assignment.course_id)
                        .cloned()
                        .unwrap_or_default(),
                    submitted_count,
                })
            })
            .collect())
    }

    /// 讲师已发布的课程
    async fn published_courses(&self, teacher_id: i64) -> Result<Vec<CourseModel>> {
        Courses::find()
            .filter(CourseColumn::TeacherId.eq(teacher_id))
            .filter(CourseColumn::Status.eq(CourseStatus::Published.to_string()))
            .order_by_asc(CourseColumn::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询课程失败"))
    }

    /// 课程进度：(已完成材料 + 提交数) / (条目数 × 学生数)
    async fn build_active_classes(&self, courses: Vec<CourseModel>) -> Result<Vec<ActiveClass>> {
        let mut result = Vec::with_capacity(courses.len());

        for course in courses {
            let student_count = CourseStudents::find()
                .filter(EnrollmentColumn::CourseId.eq(course.id))
                .count(&self.db)
                .await
                .map_err(db_error("统计学生失败"))?;

            let counts = self.course_item_counts(course.id).await?;
            let total_items = counts.materials + counts.assignments;

            let progress = if total_items > 0 && student_count > 0 {
                let completed = self.count_course_completions(course.id).await?
                    + self.count_course_submissions(course.id, None).await?;
                completion_percent(completed, total_items * student_count)
            } else {
                0.0
            };

            result.push(ActiveClass {
                id: class_ref(course.id),
                name: course.title,
                semester: CURRENT_SEMESTER.to_string(),
                student_count,
                progress,
            });
        }

        Ok(result)
    }
}

//! 作业实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub module_id: Option<i64>,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub instruction: String,
    pub deadline: i64,
    pub max_points: i32,
    pub allow_text: bool,
    pub allow_file: bool,
    pub allow_voice: bool,
    pub allow_late: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::modules::Entity",
        from = "Column::ModuleId",
        to = "super::modules::Column::Id"
    )]
    Module,
    #[sea_orm(has_many = "super::submissions::Entity")]
    Submissions,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::modules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_assignment(self) -> crate::models::assignments::entities::Assignment {
        use super::to_datetime;

        crate::models::assignments::entities::Assignment {
            id: self.id,
            course_id: self.course_id,
            module_id: self.module_id,
            title: self.title,
            instruction: self.instruction,
            deadline: to_datetime(self.deadline),
            max_points: self.max_points,
            allow_text: self.allow_text,
            allow_file: self.allow_file,
            allow_voice: self.allow_voice,
            allow_late: self.allow_late,
            created_at: to_datetime(self.created_at),
            updated_at: to_datetime(self.updated_at),
            my_submission: None,
        }
    }
}

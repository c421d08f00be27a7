//! 学习材料实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "materials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub module_id: i64,
    pub title: String,
    pub material_type: String,
    pub source_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub raw_content: Option<String>,
    pub duration_min: i32,
    pub has_captions: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::modules::Entity",
        from = "Column::ModuleId",
        to = "super::modules::Column::Id"
    )]
    Module,
    #[sea_orm(has_one = "super::smart_features::Entity")]
    SmartFeature,
    #[sea_orm(has_many = "super::material_completions::Entity")]
    MaterialCompletions,
}

impl Related<super::modules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl Related<super::smart_features::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SmartFeature.def()
    }
}

impl Related<super::material_completions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaterialCompletions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_material(self) -> crate::models::courses::entities::Material {
        use crate::models::courses::entities::{Material, MaterialType};

        Material {
            id: self.id,
            module_id: self.module_id,
            title: self.title,
            material_type: self
                .material_type
                .parse::<MaterialType>()
                .unwrap_or(MaterialType::Text),
            source_url: self.source_url,
            raw_content: self.raw_content,
            duration_min: self.duration_min,
            has_captions: self.has_captions,
            smart_feature: None,
            is_completed: false,
        }
    }
}

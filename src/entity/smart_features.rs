//! 材料智能特性实体（AI 摘要、简化内容、测验数据）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "smart_features")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub material_id: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub simplified_content: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub quiz_data: Option<String>,
    pub is_generated: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::materials::Entity",
        from = "Column::MaterialId",
        to = "super::materials::Column::Id"
    )]
    Material,
}

impl Related<super::materials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Material.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_smart_feature(self) -> crate::models::courses::entities::SmartFeature {
        crate::models::courses::entities::SmartFeature {
            id: self.id,
            material_id: self.material_id,
            summary: self.summary,
            simplified_content: self.simplified_content,
            // 存储为 JSON 文本，解析失败视为空
            quiz_data: self
                .quiz_data
                .and_then(|raw| serde_json::from_str(&raw).ok()),
            is_generated: self.is_generated,
        }
    }
}

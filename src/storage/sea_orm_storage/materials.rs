//! 学习材料存储操作

use super::courses::{delete_materials_cascade, insert_material};
use super::{SeaOrmStorage, db_error};
use crate::entity::courses::Entity as Courses;
use crate::entity::materials::{ActiveModel, Entity as Materials};
use crate::entity::modules::Entity as Modules;
use crate::entity::smart_features::{
    ActiveModel as SmartFeatureActiveModel, Column as SmartFeatureColumn, Entity as SmartFeatures,
};
use crate::errors::Result;
use crate::models::courses::{
    entities::{Course, Material, SmartFeature},
    requests::MaterialInput,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};

impl SeaOrmStorage {
    /// 获取材料及其智能特性
    pub async fn get_material_by_id_impl(&self, material_id: i64) -> Result<Option<Material>> {
        let Some(model) = Materials::find_by_id(material_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询材料失败"))?
        else {
            return Ok(None);
        };

        let mut material = model.into_material();
        material.smart_feature = self.get_smart_feature_impl(material_id).await?;

        Ok(Some(material))
    }

    /// 材料所属课程（材料 → 模块 → 课程）
    pub async fn get_material_course_impl(&self, material_id: i64) -> Result<Option<Course>> {
        let Some(material) = Materials::find_by_id(material_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询材料失败"))?
        else {
            return Ok(None);
        };

        let Some(module) = Modules::find_by_id(material.module_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询模块失败"))?
        else {
            return Ok(None);
        };

        let course = Courses::find_by_id(module.course_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询课程失败"))?;

        Ok(course.map(|c| c.into_course()))
    }

    /// 在模块下新建材料
    pub async fn create_material_impl(
        &self,
        module_id: i64,
        material: MaterialInput,
    ) -> Result<Material> {
        let now = chrono::Utc::now().timestamp();
        let saved = insert_material(&self.db, module_id, material, now).await?;

        Ok(saved.into_material())
    }

    /// 覆盖材料字段
    pub async fn update_material_impl(
        &self,
        material_id: i64,
        input: MaterialInput,
    ) -> Result<Option<Material>> {
        let Some(existing) = Materials::find_by_id(material_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询材料失败"))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.title = Set(input.title);
        model.material_type = Set(input.material_type.to_string());
        model.source_url = Set(input.source_url);
        model.raw_content = Set(input.raw_content);
        model.duration_min = Set(input.duration_min);
        model.has_captions = Set(input.has_captions);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let saved = model
            .update(&self.db)
            .await
            .map_err(db_error("更新材料失败"))?;

        let mut material = saved.into_material();
        material.smart_feature = self.get_smart_feature_impl(material_id).await?;

        Ok(Some(material))
    }

    /// 删除材料及其完成记录、智能特性
    pub async fn delete_material_impl(&self, material_id: i64) -> Result<bool> {
        let exists = Materials::find_by_id(material_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询材料失败"))?
            .is_some();
        if !exists {
            return Ok(false);
        }

        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;
        delete_materials_cascade(&txn, &[material_id]).await?;
        txn.commit().await.map_err(db_error("提交事务失败"))?;

        Ok(true)
    }

    /// 获取材料的智能特性
    pub async fn get_smart_feature_impl(&self, material_id: i64) -> Result<Option<SmartFeature>> {
        let result = SmartFeatures::find()
            .filter(SmartFeatureColumn::MaterialId.eq(material_id))
            .one(&self.db)
            .await
            .map_err(db_error("查询智能特性失败"))?;

        Ok(result.map(|m| m.into_smart_feature()))
    }

    /// 保存 AI 摘要，不存在时创建
    pub async fn save_material_summary_impl(
        &self,
        material_id: i64,
        summary: &str,
    ) -> Result<SmartFeature> {
        let now = chrono::Utc::now().timestamp();
        let existing = SmartFeatures::find()
            .filter(SmartFeatureColumn::MaterialId.eq(material_id))
            .one(&self.db)
            .await
            .map_err(db_error("查询智能特性失败"))?;

        let saved = match existing {
            Some(feature) => {
                let mut model: SmartFeatureActiveModel = feature.into();
                model.summary = Set(Some(summary.to_string()));
                model.is_generated = Set(true);
                model.updated_at = Set(now);
                model.update(&self.db).await
            }
            None => {
                SmartFeatureActiveModel {
                    material_id: Set(material_id),
                    summary: Set(Some(summary.to_string())),
                    simplified_content: Set(None),
                    quiz_data: Set(None),
                    is_generated: Set(true),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
            }
        }
        .map_err(db_error("保存摘要失败"))?;

        Ok(saved.into_smart_feature())
    }
}

//! 课程模块存储操作

use super::courses::delete_materials_cascade;
use super::{SeaOrmStorage, db_error};
use crate::entity::materials::{Column as MaterialColumn, Entity as Materials};
use crate::entity::modules::Entity as Modules;
use crate::errors::Result;
use crate::models::courses::entities::Module;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect, TransactionTrait};

impl SeaOrmStorage {
    /// 通过 ID 获取模块（不含材料）
    pub async fn get_module_by_id_impl(&self, module_id: i64) -> Result<Option<Module>> {
        let result = Modules::find_by_id(module_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询模块失败"))?;

        Ok(result.map(|m| m.into_module()))
    }

    /// 删除模块及其材料、完成记录和智能特性
    pub async fn delete_module_impl(&self, module_id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;

        let material_ids: Vec<i64> = Materials::find()
            .select_only()
            .column(MaterialColumn::Id)
            .filter(MaterialColumn::ModuleId.eq(module_id))
            .into_tuple()
            .all(&txn)
            .await
            .map_err(db_error("查询材料失败"))?;
        delete_materials_cascade(&txn, &material_ids).await?;

        let result = Modules::delete_by_id(module_id)
            .exec(&txn)
            .await
            .map_err(db_error("删除模块失败"))?;

        txn.commit().await.map_err(db_error("提交事务失败"))?;

        Ok(result.rows_affected > 0)
    }
}

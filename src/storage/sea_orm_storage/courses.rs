//! 课程存储操作

use std::collections::{HashMap, HashSet};

use super::{SeaOrmStorage, db_error};
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::course_students::{Column as EnrollmentColumn, Entity as CourseStudents};
use crate::entity::courses::{ActiveModel, Column, Entity as Courses, Model as CourseModel};
use crate::entity::material_completions::{
    Column as CompletionColumn, Entity as MaterialCompletions,
};
use crate::entity::materials::{
    ActiveModel as MaterialActiveModel, Column as MaterialColumn, Entity as Materials,
    Model as MaterialModel,
};
use crate::entity::modules::{
    ActiveModel as ModuleActiveModel, Column as ModuleColumn, Entity as Modules,
};
use crate::entity::smart_features::{Column as SmartFeatureColumn, Entity as SmartFeatures};
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::errors::{LmsError, Result};
use crate::models::courses::{
    entities::Course,
    requests::{CourseListQuery, CreateCourseRequest, MaterialInput, UpdateCourseRequest},
};
use crate::utils::escape_like_pattern;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建课程及嵌套的模块、材料
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;

        let course = ActiveModel {
            teacher_id: Set(req.teacher_id),
            title: Set(req.title),
            description: Set(req.description),
            thumbnail: Set(req.thumbnail),
            class_code: Set(req.class_code),
            status: Set(req.status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(db_error("创建课程失败"))?;

        for module in req.modules {
            let saved = ModuleActiveModel {
                course_id: Set(course.id),
                title: Set(module.title),
                sort_order: Set(module.order),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(db_error("创建模块失败"))?;

            for material in module.materials {
                insert_material(&txn, saved.id, material, now).await?;
            }
        }

        let result = load_course_tree(&txn, course).await?;
        txn.commit().await.map_err(db_error("提交事务失败"))?;

        Ok(result)
    }

    /// 通过 ID 获取课程（不含模块）
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询课程失败"))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 获取课程完整结构
    pub async fn get_course_detail_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let Some(course) = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询课程失败"))?
        else {
            return Ok(None);
        };

        Ok(Some(load_course_tree(&self.db, course).await?))
    }

    /// 通过邀请码获取课程
    pub async fn get_course_by_code_impl(&self, class_code: &str) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(Column::ClassCode.eq(class_code))
            .one(&self.db)
            .await
            .map_err(db_error("查询课程失败"))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 列出讲师的课程
    pub async fn list_teacher_courses_impl(
        &self,
        teacher_id: i64,
        query: CourseListQuery,
    ) -> Result<Vec<Course>> {
        let mut select = Courses::find().filter(Column::TeacherId.eq(teacher_id));

        // 标题搜索
        if let Some(ref q) = query.q
            && !q.trim().is_empty()
        {
            let pattern = format!("%{}%", escape_like_pattern(q.trim()));
            select = select.filter(Column::Title.like(LikeExpr::new(pattern).escape('\\')));
        }

        // 状态筛选，"all" 表示不过滤
        if let Some(ref status) = query.status
            && !status.is_empty()
            && status != "all"
        {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        select = if query.sort.as_deref() == Some("oldest") {
            select
                .order_by_asc(Column::CreatedAt)
                .order_by_asc(Column::Id)
        } else {
            select
                .order_by_desc(Column::CreatedAt)
                .order_by_desc(Column::Id)
        };

        let result = select
            .all(&self.db)
            .await
            .map_err(db_error("查询课程列表失败"))?;

        Ok(result.into_iter().map(|m| m.into_course()).collect())
    }

    /// 更新课程，并在同一事务内同步模块和材料
    pub async fn update_course_impl(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let Some(existing) = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询课程失败"))?
        else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;

        let mut course: ActiveModel = existing.into();
        course.title = Set(update.title);
        course.description = Set(update.description);
        if let Some(thumbnail) = update.thumbnail.filter(|t| !t.is_empty()) {
            course.thumbnail = Set(Some(thumbnail));
        }
        if let Some(class_code) = update.class_code.filter(|c| !c.is_empty()) {
            course.class_code = Set(class_code);
        }
        if let Some(status) = update.status {
            course.status = Set(status.to_string());
        }
        course.updated_at = Set(now);
        let course = course
            .update(&txn)
            .await
            .map_err(db_error("更新课程失败"))?;

        // 记录原有的模块及其材料
        let old_module_ids: Vec<i64> = Modules::find()
            .select_only()
            .column(ModuleColumn::Id)
            .filter(ModuleColumn::CourseId.eq(course_id))
            .into_tuple()
            .all(&txn)
            .await
            .map_err(db_error("查询模块失败"))?;

        let mut old_materials: HashMap<i64, Vec<i64>> = HashMap::new();
        if !old_module_ids.is_empty() {
            let rows: Vec<(i64, i64)> = Materials::find()
                .select_only()
                .column(MaterialColumn::Id)
                .column(MaterialColumn::ModuleId)
                .filter(MaterialColumn::ModuleId.is_in(old_module_ids.clone()))
                .into_tuple()
                .all(&txn)
                .await
                .map_err(db_error("查询材料失败"))?;
            for (material_id, module_id) in rows {
                old_materials.entry(module_id).or_default().push(material_id);
            }
        }

        let mut kept_modules: HashSet<i64> = HashSet::new();
        let mut kept_materials: HashSet<i64> = HashSet::new();

        for module in update.modules {
            let module_id = match module.existing_id() {
                Some(id) => {
                    if !old_module_ids.contains(&id) {
                        return Err(LmsError::validation(format!(
                            "modul {id} tidak valid untuk kelas ini"
                        )));
                    }
                    ModuleActiveModel {
                        id: Set(id),
                        course_id: Set(course_id),
                        title: Set(module.title),
                        sort_order: Set(module.order),
                        updated_at: Set(now),
                        ..Default::default()
                    }
                    .update(&txn)
                    .await
                    .map_err(db_error("更新模块失败"))?;
                    id
                }
                None => {
                    ModuleActiveModel {
                        course_id: Set(course_id),
                        title: Set(module.title),
                        sort_order: Set(module.order),
                        created_at: Set(now),
                        updated_at: Set(now),
                        ..Default::default()
                    }
                    .insert(&txn)
                    .await
                    .map_err(db_error("创建模块失败"))?
                    .id
                }
            };
            kept_modules.insert(module_id);

            let module_materials = old_materials.get(&module_id);
            for material in module.materials {
                match material.existing_id() {
                    Some(id) => {
                        if !module_materials.is_some_and(|ids| ids.contains(&id)) {
                            return Err(LmsError::validation(format!(
                                "materi {id} tidak valid untuk modul ini"
                            )));
                        }
                        let mut active = MaterialActiveModel {
                            id: Set(id),
                            module_id: Set(module_id),
                            ..Default::default()
                        };
                        apply_material_input(&mut active, material, now);
                        active
                            .update(&txn)
                            .await
                            .map_err(db_error("更新材料失败"))?;
                        kept_materials.insert(id);
                    }
                    None => {
                        insert_material(&txn, module_id, material, now).await?;
                    }
                }
            }
        }

        // 删除未保留的模块及其材料
        for old_id in &old_module_ids {
            let material_ids = old_materials.get(old_id).cloned().unwrap_or_default();
            if kept_modules.contains(old_id) {
                let orphaned: Vec<i64> = material_ids
                    .into_iter()
                    .filter(|id| !kept_materials.contains(id))
                    .collect();
                delete_materials_cascade(&txn, &orphaned).await?;
            } else {
                delete_materials_cascade(&txn, &material_ids).await?;
                Modules::delete_by_id(*old_id)
                    .exec(&txn)
                    .await
                    .map_err(db_error("删除模块失败"))?;
            }
        }

        let result = load_course_tree(&txn, course).await?;
        txn.commit().await.map_err(db_error("提交事务失败"))?;

        Ok(Some(result))
    }

    /// 删除课程及其所有从属数据
    pub async fn delete_course_impl(&self, course_id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;

        let module_ids: Vec<i64> = Modules::find()
            .select_only()
            .column(ModuleColumn::Id)
            .filter(ModuleColumn::CourseId.eq(course_id))
            .into_tuple()
            .all(&txn)
            .await
            .map_err(db_error("查询模块失败"))?;

        if !module_ids.is_empty() {
            let material_ids: Vec<i64> = Materials::find()
                .select_only()
                .column(MaterialColumn::Id)
                .filter(MaterialColumn::ModuleId.is_in(module_ids.clone()))
                .into_tuple()
                .all(&txn)
                .await
                .map_err(db_error("查询材料失败"))?;
            delete_materials_cascade(&txn, &material_ids).await?;

            Modules::delete_many()
                .filter(ModuleColumn::CourseId.eq(course_id))
                .exec(&txn)
                .await
                .map_err(db_error("删除模块失败"))?;
        }

        let assignment_ids: Vec<i64> = Assignments::find()
            .select_only()
            .column(AssignmentColumn::Id)
            .filter(AssignmentColumn::CourseId.eq(course_id))
            .into_tuple()
            .all(&txn)
            .await
            .map_err(db_error("查询作业失败"))?;

        if !assignment_ids.is_empty() {
            Submissions::delete_many()
                .filter(SubmissionColumn::AssignmentId.is_in(assignment_ids))
                .exec(&txn)
                .await
                .map_err(db_error("删除提交失败"))?;
            Assignments::delete_many()
                .filter(AssignmentColumn::CourseId.eq(course_id))
                .exec(&txn)
                .await
                .map_err(db_error("删除作业失败"))?;
        }

        CourseStudents::delete_many()
            .filter(EnrollmentColumn::CourseId.eq(course_id))
            .exec(&txn)
            .await
            .map_err(db_error("删除选课记录失败"))?;

        let result = Courses::delete_by_id(course_id)
            .exec(&txn)
            .await
            .map_err(db_error("删除课程失败"))?;

        txn.commit().await.map_err(db_error("提交事务失败"))?;

        Ok(result.rows_affected > 0)
    }
}

/// 将材料输入写入 ActiveModel
fn apply_material_input(active: &mut MaterialActiveModel, input: MaterialInput, now: i64) {
    active.title = Set(input.title);
    active.material_type = Set(input.material_type.to_string());
    active.source_url = Set(input.source_url);
    active.raw_content = Set(input.raw_content);
    active.duration_min = Set(input.duration_min);
    active.has_captions = Set(input.has_captions);
    active.updated_at = Set(now);
}

/// 在指定模块下新建材料
pub(super) async fn insert_material<C: ConnectionTrait>(
    conn: &C,
    module_id: i64,
    input: MaterialInput,
    now: i64,
) -> Result<MaterialModel> {
    let mut active = MaterialActiveModel {
        module_id: Set(module_id),
        created_at: Set(now),
        ..Default::default()
    };
    apply_material_input(&mut active, input, now);

    active
        .insert(conn)
        .await
        .map_err(db_error("创建材料失败"))
}

/// 删除材料及其完成记录、智能特性
pub(super) async fn delete_materials_cascade<C: ConnectionTrait>(
    conn: &C,
    material_ids: &[i64],
) -> Result<()> {
    if material_ids.is_empty() {
        return Ok(());
    }

    MaterialCompletions::delete_many()
        .filter(CompletionColumn::MaterialId.is_in(material_ids.to_vec()))
        .exec(conn)
        .await
        .map_err(db_error("删除完成记录失败"))?;
    SmartFeatures::delete_many()
        .filter(SmartFeatureColumn::MaterialId.is_in(material_ids.to_vec()))
        .exec(conn)
        .await
        .map_err(db_error("删除智能特性失败"))?;
    Materials::delete_many()
        .filter(MaterialColumn::Id.is_in(material_ids.to_vec()))
        .exec(conn)
        .await
        .map_err(db_error("删除材料失败"))?;

    Ok(())
}

/// 加载课程的模块、材料与智能特性
pub(super) async fn load_course_tree<C: ConnectionTrait>(
    conn: &C,
    course: CourseModel,
) -> Result<Course> {
    let modules = Modules::find()
        .filter(ModuleColumn::CourseId.eq(course.id))
        .order_by_asc(ModuleColumn::SortOrder)
        .order_by_asc(ModuleColumn::Id)
        .all(conn)
        .await
        .map_err(db_error("查询模块失败"))?;

    let module_ids: Vec<i64> = modules.iter().map(|m| m.id).collect();
    let materials = if module_ids.is_empty() {
        Vec::new()
    } else {
        Materials::find()
            .filter(MaterialColumn::ModuleId.is_in(module_ids))
            .order_by_asc(MaterialColumn::Id)
            .all(conn)
            .await
            .map_err(db_error("查询材料失败"))?
    };

    let material_ids: Vec<i64> = materials.iter().map(|m| m.id).collect();
    let mut features = if material_ids.is_empty() {
        HashMap::new()
    } else {
        SmartFeatures::find()
            .filter(SmartFeatureColumn::MaterialId.is_in(material_ids))
            .all(conn)
            .await
            .map_err(db_error("查询智能特性失败"))?
            .into_iter()
            .map(|f| (f.material_id, f.into_smart_feature()))
            .collect::<HashMap<_, _>>()
    };

    let mut grouped: HashMap<i64, Vec<_>> = HashMap::new();
    for material in materials {
        let module_id = material.module_id;
        let mut material = material.into_material();
        material.smart_feature = features.remove(&material.id);
        grouped.entry(module_id).or_default().push(material);
    }

    let mut result = course.into_course();
    result.modules = modules
        .into_iter()
        .map(|m| {
            let materials = grouped.remove(&m.id).unwrap_or_default();
            let mut module = m.into_module();
            module.materials = materials;
            module
        })
        .collect();

    Ok(result)
}

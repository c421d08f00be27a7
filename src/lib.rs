//! Inclusa - 无障碍优先的学习管理平台后端服务
//!
//! 基于 Actix Web 构建，为讲师提供课程、材料与作业管理，为学生提供
//! 按无障碍偏好调整的学习体验。
//!
//! # 架构
//! - `ai`: 生成式 AI 接入（材料摘要）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证授权中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod ai;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;

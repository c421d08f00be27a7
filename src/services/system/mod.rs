use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use ts_rs::TS;

use crate::config::AppConfig;
use crate::models::{ApiResponse, AppStartTime};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "system.ts")]
pub struct HealthResponse {
    pub status: String,
    /// 进程运行秒数；测试环境下未注入启动时间时为空
    pub uptime_secs: Option<i64>,
}

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 欢迎信息
    pub async fn welcome(&self) -> ActixResult<HttpResponse> {
        let config = self.get_config();
        Ok(HttpResponse::Ok().json(ApiResponse::success_empty(format!(
            "Selamat datang di {} API",
            config.app.system_name
        ))))
    }

    // 健康检查
    pub async fn health(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let uptime_secs = request.app_data::<web::Data<AppStartTime>>().map(|start| {
            chrono::Utc::now()
                .signed_duration_since(start.start_datetime)
                .num_seconds()
        });
        Ok(HttpResponse::Ok().json(HealthResponse {
            status: "ok".to_string(),
            uptime_secs,
        }))
    }
}
